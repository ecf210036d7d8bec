use std::path::PathBuf;

use bpaf::*;
use tickets_core::OutputFormat;

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Sort key as typed; validated by the sorter.
    pub by: Option<String>,
    /// Output layout override.
    pub format: Option<OutputFormat>,
    /// File with one record per line.
    pub input: Option<PathBuf>,
    /// Use the built-in example records.
    pub sample: bool,
    /// Config file override.
    pub config: Option<PathBuf>,
    /// Records given directly on the command line.
    pub records: Vec<String>,
}

fn parser() -> OptionParser<Options> {
    let by = long("by")
        .short('b')
        .help("Field to sort by: destination, price or status")
        .argument::<String>("CRITERION")
        .optional();
    let format = long("format")
        .short('f')
        .help("Output layout: record, plain or json")
        .argument::<OutputFormat>("FORMAT")
        .optional();
    let input = long("input")
        .short('i')
        .help("Read records from a file, one per line")
        .argument::<PathBuf>("FILE")
        .optional();
    let sample = long("sample")
        .help("Sort the built-in example records")
        .switch();
    let config = long("config")
        .help("Path to the config file")
        .argument::<PathBuf>("PATH")
        .optional();
    let records = positional::<String>("RECORD")
        .help("Ticket record as destination|price|status")
        .many();

    construct!(Options {
        by,
        format,
        input,
        sample,
        config,
        records
    })
    .to_options()
    .descr("Sort ticket records by destination, price or status")
}

/// Parse the process arguments.
pub fn options() -> Options {
    parser().run()
}
