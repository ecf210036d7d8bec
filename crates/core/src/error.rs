//! Error types surfaced by ticket parsing and sorting.

use thiserror::Error;

/// Failure raised by [`crate::sort::sort_records`] and the record parser.
#[derive(Debug, Error)]
pub enum TicketError {
    /// The requested sort key is not one of the ticket fields.
    #[error("invalid sort criterion '{0}' (expected destination, price or status)")]
    InvalidCriterion(String),
    /// A raw record could not be turned into a ticket; the whole batch is rejected.
    #[error("malformed record #{index} '{record}': {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the input batch.
        index: usize,
        /// The raw record text.
        record: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },
}

/// Why a single record failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The record did not split into exactly three fields.
    #[error("expected 3 fields separated by '|', found {0}")]
    FieldCount(usize),
    /// The destination field was empty.
    #[error("destination is empty")]
    EmptyDestination,
    /// The price field was not a finite number.
    #[error("price '{0}' is not a number")]
    InvalidPrice(String),
}
