//! Deduplication and deterministic ordering of interpretations
//!
//! Interpretations are ranked by
//! 1. family: the order of year, month and day in the format,
//! 2. separator priority,
//! 3. specificity: padded numbers and full names before the rest,
//! 4. format string, then date, to make the order total.

use crate::format::DateFormat;
use crate::interpretation::Interpretation;
use crate::separator::{Layout, Separator};
use crate::tag::ComponentKind;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Family of formats that match no known pattern
pub const OTHER_FAMILY: u16 = 999;

/// Ranking key of one interpretation (lower sorts first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    family: u16,
    separator: u8,
    specificity: u32,
}

/// Family priority of a parsed format.
///
/// Numeric months: `Y-M-D` 1, `D-M-Y` 2, `M-D-Y` 3, `Y-M` 4, `M-Y` 5,
/// `M-D` 6, `D-M` 7. Named months: `M Y` 8, `Y-M` 9, `M-Y` 10, `M D, Y` 11.
pub fn family(format: &DateFormat) -> u16 {
    use ComponentKind::{Day, Month, Year};

    let kinds: Vec<ComponentKind> = format.tags().iter().map(|t| t.kind()).collect();
    let named = format.tags().iter().any(|t| t.is_named());

    if !named {
        return match kinds.as_slice() {
            [Year, Month, Day] => 1,
            [Day, Month, Year] => 2,
            [Month, Day, Year] => 3,
            [Year, Month] => 4,
            [Month, Year] => 5,
            [Month, Day] => 6,
            [Day, Month] => 7,
            _ => OTHER_FAMILY,
        };
    }

    match (kinds.as_slice(), format.layout()) {
        ([Month, Year], Layout::Joined(Separator::Space)) => 8,
        ([Year, Month], _) => 9,
        ([Month, Year], _) => 10,
        ([Month, Day, Year], Layout::MonthDayComma) => 11,
        _ => OTHER_FAMILY,
    }
}

fn rank(format: &str) -> Rank {
    match format.parse::<DateFormat>() {
        Ok(parsed) => Rank {
            family: family(&parsed),
            separator: parsed.layout().separator().priority(),
            specificity: parsed.tags().iter().map(|t| t.specificity()).sum(),
        },
        // formats built by the validator always parse
        Err(_) => Rank {
            family: OTHER_FAMILY,
            separator: u8::MAX,
            specificity: u32::MAX,
        },
    }
}

/// Drop repeated `(format, date)` pairs, keeping the first, and sort the rest.
pub fn dedup_and_sort(interpretations: Vec<Interpretation>) -> Vec<Interpretation> {
    let mut seen: FxHashSet<(String, NaiveDate)> = FxHashSet::default();
    let mut ranked: Vec<(Rank, Interpretation)> = interpretations
        .into_iter()
        .filter(|i| seen.insert((i.format.clone(), i.date)))
        .map(|i| (rank(&i.format), i))
        .collect();

    ranked.sort_by(|(rank_a, a), (rank_b, b)| compare(rank_a, a, rank_b, b));
    ranked.into_iter().map(|(_, i)| i).collect()
}

fn compare(rank_a: &Rank, a: &Interpretation, rank_b: &Rank, b: &Interpretation) -> Ordering {
    rank_a
        .cmp(rank_b)
        .then_with(|| a.format.cmp(&b.format))
        .then_with(|| a.date.cmp(&b.date))
}
