//! Shared domain models.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TicketError;

/// A single travel ticket parsed from a `destination|price|status` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    destination: String,
    price: f64,
    status: String,
}

impl Ticket {
    /// Build a ticket from its three fields.
    pub fn new(destination: impl Into<String>, price: f64, status: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            price,
            status: status.into(),
        }
    }

    /// Where the ticket goes.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Ticket price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Free-form status such as `available` or `sold`.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket {{ destination: {}, price: {}, status: {} }}",
            quote(&self.destination),
            format_price(self.price),
            quote(&self.status)
        )
    }
}

/// Shortest round-trip text for a price, switching to exponent notation
/// outside `1e-6..1e21` (`1e+21`, `1.5e-7`).
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{price:e}");
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exponent,
        };
    }
    price.to_string()
}

/// Quote a field the way the record representation does: single quotes,
/// unless the text contains one, then double quotes or backticks.
fn quote(value: &str) -> String {
    let delimiter = if !value.contains('\'') {
        '\''
    } else if !value.contains('"') {
        '"'
    } else if !value.contains('`') && !value.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() && (c as u32) < 0x20 => {
                quoted.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Ticket field used as the sort key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Order by destination name.
    #[default]
    Destination,
    /// Order by price, cheapest first.
    Price,
    /// Order by status text.
    Status,
}

impl Criterion {
    /// Every supported criterion.
    pub const ALL: [Criterion; 3] = [Criterion::Destination, Criterion::Price, Criterion::Status];

    /// Field name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Destination => "destination",
            Criterion::Price => "price",
            Criterion::Status => "status",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| TicketError::InvalidCriterion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mirrors_record_representation() {
        let ticket = Ticket::new("Philadelphia", 94.20, "available");
        assert_eq!(
            ticket.to_string(),
            "Ticket { destination: 'Philadelphia', price: 94.2, status: 'available' }"
        );
    }

    #[test]
    fn prices_use_exponent_notation_at_the_extremes() {
        assert_eq!(format_price(1e21), "1e+21");
        assert_eq!(format_price(1.5e21), "1.5e+21");
        assert_eq!(format_price(1e-7), "1e-7");
        assert_eq!(format_price(-2.5e-9), "-2.5e-9");
        assert_eq!(format_price(1e20), "100000000000000000000");
        assert_eq!(format_price(0.000001), "0.000001");
        assert_eq!(format_price(126.20), "126.2");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn quotes_switch_when_fields_contain_quotes() {
        assert_eq!(quote("Boston"), "'Boston'");
        assert_eq!(quote("Martha's Vineyard"), "\"Martha's Vineyard\"");
        assert_eq!(quote(r#"It's "open""#), r#"`It's "open"`"#);
        assert_eq!(quote(r#"It's "${x}" `y`"#), r#"'It\'s "${x}" `y`'"#);
        assert_eq!(quote("a\\b\nc"), r"'a\\b\nc'");

        let ticket = Ticket::new("Martha's Vineyard", 1e21, "sold");
        assert_eq!(
            ticket.to_string(),
            "Ticket { destination: \"Martha's Vineyard\", price: 1e+21, status: 'sold' }"
        );
    }

    #[test]
    fn criterion_parses_field_names_only() {
        for criterion in Criterion::ALL {
            assert_eq!(criterion.as_str().parse::<Criterion>().ok(), Some(criterion));
        }

        let err = "weight".parse::<Criterion>().unwrap_err();
        assert!(matches!(err, TicketError::InvalidCriterion(ref value) if value == "weight"));
        assert!("Price".parse::<Criterion>().is_err());
        assert!("".parse::<Criterion>().is_err());
    }
}
