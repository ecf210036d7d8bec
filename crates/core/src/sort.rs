//! Stable ticket ordering by a selected field.

use std::{cmp::Ordering, vec};

use tracing::{debug, error};

use crate::{
    collate::locale_compare,
    error::TicketError,
    models::{Criterion, Ticket},
    record::parse_records,
};

/// The worked example batch.
pub const SAMPLE_RECORDS: [&str; 4] = [
    "Philadelphia|94.20|available",
    "New York City|95.99|available",
    "New York City|95.99|sold",
    "Boston|126.20|departed",
];

impl Criterion {
    /// Compare two tickets on this criterion's field, ascending.
    pub fn compare(self, a: &Ticket, b: &Ticket) -> Ordering {
        match self {
            Criterion::Destination => locale_compare(a.destination(), b.destination()),
            Criterion::Status => locale_compare(a.status(), b.status()),
            Criterion::Price => price_key(a.price()).total_cmp(&price_key(b.price())),
        }
    }
}

/// Signed zeros compare equal; NaN sorts after every number.
fn price_key(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        price
    }
}

/// Ordered tickets produced by a sort. Consumed once, front to back.
#[derive(Debug)]
pub struct SortedTickets {
    criterion: Criterion,
    inner: vec::IntoIter<Ticket>,
}

impl SortedTickets {
    /// Criterion the tickets were ordered by.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

impl Iterator for SortedTickets {
    type Item = Ticket;

    fn next(&mut self) -> Option<Ticket> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SortedTickets {}

/// Sort already-parsed tickets. Tickets with equal keys keep their input order.
pub fn sort_tickets(mut tickets: Vec<Ticket>, criterion: Criterion) -> SortedTickets {
    tickets.sort_by(|a, b| criterion.compare(a, b));
    debug!(count = tickets.len(), %criterion, "Sorted tickets");
    SortedTickets {
        criterion,
        inner: tickets.into_iter(),
    }
}

/// Parse raw records and order them by the named field.
///
/// The criterion is checked before any record is looked at, so an unknown
/// criterion is reported even when the batch is also malformed.
pub fn sort_records<S: AsRef<str>>(
    records: &[S],
    criterion: &str,
) -> Result<SortedTickets, TicketError> {
    let criterion = criterion.parse::<Criterion>().map_err(|err| {
        error!(%err, "Invalid criteria");
        err
    })?;
    let tickets = parse_records(records)?;
    Ok(sort_tickets(tickets, criterion))
}
