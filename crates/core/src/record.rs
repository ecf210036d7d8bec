//! Parsing of raw `destination|price|status` records.

use tracing::debug;

use crate::{
    error::{MalformedReason, TicketError},
    models::Ticket,
};

/// Field separator used by ticket records.
pub const DELIMITER: char = '|';

/// Parse a single record into a [`Ticket`].
///
/// The delimiter cannot be escaped, so a destination containing `|` shows up
/// as a field count error rather than shifted fields.
pub fn parse_record(record: &str) -> Result<Ticket, MalformedReason> {
    let fields: Vec<&str> = record.split(DELIMITER).collect();
    let [destination, price, status] = fields.as_slice() else {
        return Err(MalformedReason::FieldCount(fields.len()));
    };

    if destination.is_empty() {
        return Err(MalformedReason::EmptyDestination);
    }

    let price = parse_price(price)?;
    Ok(Ticket::new(*destination, price, *status))
}

fn parse_price(raw: &str) -> Result<f64, MalformedReason> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MalformedReason::InvalidPrice(raw.to_string()))
}

/// Parse every record of a batch, stopping at the first malformed one.
pub fn parse_records<S: AsRef<str>>(records: &[S]) -> Result<Vec<Ticket>, TicketError> {
    let tickets = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let record = record.as_ref();
            parse_record(record).map_err(|reason| TicketError::MalformedRecord {
                index,
                record: record.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = tickets.len(), "Parsed ticket records");
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_record() {
        let ticket = parse_record("New York City|95.99|sold").expect("record should parse");
        assert_eq!(ticket.destination(), "New York City");
        assert_eq!(ticket.price(), 95.99);
        assert_eq!(ticket.status(), "sold");
    }

    #[test]
    fn price_tolerates_surrounding_whitespace() {
        let ticket = parse_record("Boston| 126.20 |departed").expect("record should parse");
        assert_eq!(ticket.price(), 126.2);
        assert_eq!(parse_record("Oslo|-3|refund").map(|t| t.price()), Ok(-3.0));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_record("Philadelphia|94.20"),
            Err(MalformedReason::FieldCount(2))
        );
        assert_eq!(
            parse_record("Salt|Lake|City|80|sold"),
            Err(MalformedReason::FieldCount(5))
        );
        assert_eq!(parse_record(""), Err(MalformedReason::FieldCount(1)));
    }

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            parse_record("|10|sold"),
            Err(MalformedReason::EmptyDestination)
        );
        for price in ["", "abc", "NaN", "inf", "12,50"] {
            let record = format!("Rome|{price}|available");
            assert_eq!(
                parse_record(&record),
                Err(MalformedReason::InvalidPrice(price.to_string())),
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn batch_aborts_on_first_malformed_record() {
        let records = ["Rome|10|sold", "Paris|cheap|sold", "Oslo|x|y|z"];
        match parse_records(&records) {
            Err(TicketError::MalformedRecord {
                index,
                record,
                reason,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(record, "Paris|cheap|sold");
                assert_eq!(reason, MalformedReason::InvalidPrice("cheap".to_string()));
            }
            other => panic!("expected malformed record error, got {other:?}"),
        }
    }

    #[test]
    fn empty_batch_is_fine() -> Result<(), TicketError> {
        let records: [&str; 0] = [];
        assert!(parse_records(&records)?.is_empty());
        Ok(())
    }
}
