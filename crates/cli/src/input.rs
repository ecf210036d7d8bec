use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use anyhow::{Context, Result};
use tickets_core::SAMPLE_RECORDS;
use tracing::debug;

use crate::options::Options;

/// Collect raw records from, in order of preference, the command line,
/// an input file, the built-in sample or stdin.
pub fn collect_records(opts: &Options) -> Result<Vec<String>> {
    if !opts.records.is_empty() {
        return Ok(opts.records.clone());
    }
    if let Some(path) = &opts.input {
        return read_file(path);
    }
    if opts.sample {
        return Ok(SAMPLE_RECORDS.iter().map(|r| r.to_string()).collect());
    }

    debug!("Reading records from stdin");
    read_lines(io::stdin().lock())
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_lines(io::BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))
}

/// One record per line; blank lines are skipped.
fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read line")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }
        records.push(line.to_string());
    }
    Ok(records)
}
