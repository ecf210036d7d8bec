//! Line-oriented presentation of sorted tickets.

use std::{fmt, io::Write, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    models::{format_price, Ticket},
    record::DELIMITER,
};

/// How each ticket is written out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Ticket { destination: '..', price: .., status: '..' }`
    #[default]
    Record,
    /// The input record layout, `destination|price|status`.
    Plain,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Name accepted by [`FromStr`] and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Record => "record",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" => Ok(OutputFormat::Record),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!(
                "unknown output format '{other}' (expected record, plain or json)"
            )),
        }
    }
}

/// Render a single ticket as one line, without the trailing newline.
pub fn render_ticket(ticket: &Ticket, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Record => Ok(ticket.to_string()),
        OutputFormat::Plain => Ok(format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            ticket.destination(),
            format_price(ticket.price()),
            ticket.status()
        )),
        OutputFormat::Json => serde_json::to_string(ticket).context("failed to serialize ticket"),
    }
}

/// Write one line per ticket and return how many were written.
pub fn write_tickets<W, I>(mut writer: W, tickets: I, format: OutputFormat) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Ticket>,
{
    let mut written = 0;
    for ticket in tickets {
        let line = render_ticket(&ticket, format)?;
        writeln!(writer, "{line}").context("failed to write ticket")?;
        written += 1;
    }
    writer.flush().context("failed to flush ticket output")?;
    Ok(written)
}
