//! Locale-style string ordering for text sort keys.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&DataLocale::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(%err, "Root collation unavailable, falling back to case folding");
            None
        }
    }
}

/// Compare two strings with the Unicode root collation (tertiary strength),
/// the ordering a default `localeCompare` produces.
///
/// Accented letters sort next to their base letter and lowercase sorts
/// before uppercase on otherwise equal strings.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare(a, b),
    })
}

/// Case-insensitive comparison, lowercase first on case-only ties.
fn fold_compare(a: &str, b: &str) -> Ordering {
    let folded = fold(a).cmp(fold(b));
    if folded != Ordering::Equal {
        return folded;
    }

    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }
        return match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => left.cmp(&right),
        };
    }

    a.cmp(b)
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}
