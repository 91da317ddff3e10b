//! Arrangement validation: which combinations are plausible dates
//!
//! A combination passes when
//! 1. it holds at most one year, one month and one day, and a month,
//! 2. its components appear in an accepted order,
//! 3. the (default-filled) date exists on the calendar.

use crate::classify::Component;
use crate::interpretation::{epoch, Interpretation, Span};
use crate::separator::Layout;
use crate::tag::ComponentKind;
use chrono::NaiveDate;

/// Year assumed when a reading has none
pub const DEFAULT_YEAR: i32 = 1970;
/// Day assumed when a reading has none
pub const DEFAULT_DAY: u32 = 1;

/// Largest value a year-first day may take and still read as a month
const MAX_MONTH: u32 = 12;

/// Components of a combination sorted into their roles
#[derive(Debug, Clone, Copy)]
struct Arrangement {
    year: Option<Component>,
    month: Component,
    day: Option<Component>,
}

/// Turn a combination into an interpretation, or `None` if it is not a
/// plausible, existing date.
pub fn validate(combination: &[Component], layout: Layout) -> Option<Interpretation> {
    let arrangement = arrange(combination)?;

    if !plausible_order(combination, &arrangement) {
        tracing::trace!(?combination, "rejected by component order");
        return None;
    }

    let year = match arrangement.year {
        Some(year) => i32::try_from(year.value).ok()?,
        None => DEFAULT_YEAR,
    };
    let month = arrangement.month.value;
    let day = arrangement.day.map_or(DEFAULT_DAY, |d| d.value);

    let Some(date) = calendar_date(year, month, day) else {
        tracing::trace!(year, month, day, "rejected: not a calendar date");
        return None;
    };

    let span = if arrangement.day.is_some() {
        Span::Days(date.signed_duration_since(epoch()).num_days())
    } else {
        Span::Months(i64::from(year - DEFAULT_YEAR) * 12 + i64::from(month) - 1)
    };

    let tags: Vec<&str> = combination.iter().map(|c| c.tag.as_str()).collect();

    Some(Interpretation {
        date,
        format: layout.compose(tags.as_slice()),
        span,
    })
}

/// Cardinality check: at most one of each kind, and a month is required
fn arrange(combination: &[Component]) -> Option<Arrangement> {
    let mut year = None;
    let mut month = None;
    let mut day = None;

    for component in combination {
        let slot = match component.kind {
            ComponentKind::Year => &mut year,
            ComponentKind::Month => &mut month,
            ComponentKind::Day => &mut day,
        };
        if slot.replace(*component).is_some() {
            return None;
        }
    }

    Some(Arrangement {
        year,
        month: month?,
        day,
    })
}

/// Positional plausibility.
///
/// Year first: only year-month-day, except that year-day-month survives as
/// the second reading of a numeric string whose last two values are both
/// 12 or less. Year last: day-month-year and month-day-year. Year in the
/// middle is never a date.
///
/// Values over 12 never reach here as months: the classifier only builds
/// month components for 1-12, which is what forces them into the day role.
fn plausible_order(combination: &[Component], arrangement: &Arrangement) -> bool {
    use ComponentKind::{Day, Month, Year};

    let kinds: Vec<ComponentKind> = combination.iter().map(|c| c.kind).collect();

    match kinds.as_slice() {
        [Year, Month, Day] => true,
        [Year, Day, Month] => {
            !arrangement.month.tag.is_named()
                && arrangement.day.is_some_and(|d| d.value <= MAX_MONTH)
        }
        [Day, Month, Year] | [Month, Day, Year] => true,
        [Year, Month] | [Month, Year] | [Month, Day] | [Day, Month] => true,
        _ => false,
    }
}

/// The date for `year`-`month`-`day`, if it exists.
///
/// The date is built and read back, so rollover cases such as February 30
/// or February 29 outside a leap year never come out as a different day.
fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    use chrono::Datelike;

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
}
