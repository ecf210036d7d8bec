mod input;
mod options;

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use tickets_core::{
    config::{self, AppConfig},
    sort_records, write_tickets, OutputFormat, TicketError,
};
use tracing::{error, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> Result<ExitCode> {
    let opts = options::options();

    let config = match &opts.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    init_logging(&config)?;
    if opts.config.is_none() {
        ensure_default_config(&config::config_path());
    }

    let records = input::collect_records(&opts)?;
    let criterion = opts
        .by
        .clone()
        .unwrap_or_else(|| config.default_criterion.to_string());
    let format = opts.format.unwrap_or(config.output_format);

    let code = run(
        &records,
        &criterion,
        format,
        io::stdout().lock(),
        io::stderr().lock(),
    )?;
    Ok(ExitCode::from(code))
}

/// Exit code for a rejected criterion or record batch.
const REJECTED: u8 = 2;

/// Sort `records` and print them to `out`. Rejections are written to `err`
/// regardless of the log filter and nothing reaches `out`.
fn run(
    records: &[String],
    criterion: &str,
    format: OutputFormat,
    out: impl Write,
    mut err: impl Write,
) -> Result<u8> {
    let sorted = match sort_records(records, criterion) {
        Ok(sorted) => sorted,
        Err(rejection) => {
            if !matches!(rejection, TicketError::InvalidCriterion(_)) {
                error!(%rejection, "Rejected ticket batch");
            }
            writeln!(err, "Error: {rejection}").context("failed to report error")?;
            return Ok(REJECTED);
        }
    };

    let written = write_tickets(out, sorted, format)?;
    info!(count = written, %criterion, %format, "Tickets printed");
    Ok(0)
}

/// Write the default config file, carrying on without it when that fails.
fn ensure_default_config(path: &Path) -> bool {
    match config::ensure_default_config_at(path) {
        Ok(_) => true,
        Err(err) => {
            warn!(path = %path.display(), "Could not write default config: {err:#}");
            false
        }
    }
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    let file_layer = match &config.log_file {
        Some(path) => Some(file_layer(path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn file_layer<S>(path: &Path) -> Result<impl tracing_subscriber::Layer<S>>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(std::sync::Mutex::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tickets_core::SAMPLE_RECORDS;

    fn sample() -> Vec<String> {
        SAMPLE_RECORDS.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn invalid_criterion_reaches_stderr_only() -> Result<()> {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&sample(), "weight", OutputFormat::Record, &mut out, &mut err)?;

        assert_eq!(code, REJECTED);
        assert!(out.is_empty());
        let message = String::from_utf8(err)?;
        assert!(message.starts_with("Error: invalid sort criterion 'weight'"));
        Ok(())
    }

    #[test]
    fn malformed_batch_reaches_stderr_only() -> Result<()> {
        let records = vec!["Rome|10|sold".to_string(), "Paris|cheap|sold".to_string()];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&records, "price", OutputFormat::Plain, &mut out, &mut err)?;

        assert_eq!(code, REJECTED);
        assert!(out.is_empty());
        assert!(String::from_utf8(err)?.contains("malformed record #1 'Paris|cheap|sold'"));
        Ok(())
    }

    #[test]
    fn sorted_tickets_go_to_stdout() -> Result<()> {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&sample(), "status", OutputFormat::Plain, &mut out, &mut err)?;

        assert_eq!(code, 0);
        assert!(err.is_empty());
        let lines: Vec<String> = String::from_utf8(out)?.lines().map(String::from).collect();
        assert_eq!(
            lines,
            vec![
                "Philadelphia|94.2|available",
                "New York City|95.99|available",
                "Boston|126.2|departed",
                "New York City|95.99|sold",
            ]
        );
        Ok(())
    }

    #[test]
    fn unwritable_config_location_is_not_fatal() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "")?;

        assert!(!ensure_default_config(&blocker.join("config.toml")));
        assert!(ensure_default_config(&dir.path().join("config.toml")));
        Ok(())
    }
}
