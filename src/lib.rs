//! # datestrings
//!
//! Read ambiguous date strings in every way they can be read, and write dates
//! back out through compact format strings.
//!
//! `01/05/2023` is the 1st of May to some readers and the 5th of January to
//! others. Instead of guessing, [`parse_date_string`] returns every valid
//! reading, each with the format string that produced it, in a fixed order
//! (year-month-day readings first, then day-month-year, then month-day-year,
//! and so on).
//!
//! ## Example
//!
//! ```
//! use datestrings::{format_date_string, parse_date_string};
//!
//! let readings = parse_date_string("2023-01-05").unwrap();
//! assert_eq!(readings.len(), 2);
//! assert_eq!(readings[0].format, "Y-M2-D2");
//! assert_eq!(readings[1].format, "Y-D2-M2");
//!
//! let again = format_date_string(readings[0].date, &readings[0].format).unwrap();
//! assert_eq!(again, "2023-01-05");
//! ```
//!
//! ## Format strings
//!
//! | Tag | Component | Example |
//! |-----|-----------|---------|
//! | `Y` | year | `2023` |
//! | `M1` / `M2` | month, unpadded / zero-padded | `1` / `01` |
//! | `Mf` / `Mfl` / `Mfu` | full month name | `January` / `january` / `JANUARY` |
//! | `Ms` / `Msl` / `Msu` | short month name | `Jan` / `jan` / `JAN` |
//! | `D1` / `D2` | day, unpadded / zero-padded | `5` / `05` |
//!
//! Tags are joined by one of `-`, `.`, `/`, `,`, `, ` or a space. The one
//! mixed shape is `"<month> <day>, Y"`, as in `"Ms D1, Y"`.

mod classify;
mod combine;
mod error;
mod format;
mod interpretation;
mod names;
mod order;
mod separator;
mod tag;
mod validate;

pub use classify::Component;
pub use error::{DateStringError, Result};
pub use format::{
    format_date_string, format_date_string_with, format_day_string, format_day_string_with,
    format_month_string, format_month_string_with, format_timestamp_string, DateFormat,
};
pub use interpretation::{Interpretation, Span};
pub use names::{CalendarNames, Casing, English, NameWidth};
pub use separator::{Layout, Separator};
pub use tag::{ComponentKind, FormatTag};

use classify::{classify, ComponentSet};
use combine::combinations;
use order::dedup_and_sort;
use smallvec::SmallVec;
use validate::validate;

/// Configuration options for parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Separators to try, in order (default: all six)
    pub separators: Vec<Separator>,
    /// Accept two-part dates such as `2023-12` or `12/25` (default: true)
    pub partial_dates: bool,
    /// Accept month names such as `Jan` or `january` (default: true)
    pub named_months: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separators: Separator::ALL.to_vec(),
            partial_dates: true,
            named_months: true,
        }
    }
}

/// Every valid reading of a date string, in English.
///
/// The input is trimmed, then split on each separator in turn, and each part
/// is trimmed again. Every split into two or three parts is read as every
/// combination of year, month and day the parts allow; combinations that are
/// implausible or not on the calendar are dropped.
///
/// # Returns
///
/// * `Ok(Vec<Interpretation>)` - At least one reading, deduplicated and sorted
/// * `Err(DateStringError)` - If no reading is valid
///
/// # Example
///
/// ```
/// use datestrings::parse_date_string;
///
/// let readings = parse_date_string("31/1/2023").unwrap();
/// assert_eq!(readings.len(), 1);
/// assert_eq!(readings[0].format, "D1/M1/Y");
/// assert_eq!(readings[0].days(), Some(19388));
/// ```
pub fn parse_date_string(input: &str) -> Result<Vec<Interpretation>> {
    parse_with_options(input, &ParseOptions::default(), &English)
}

/// Parse with custom options and a custom name service.
///
/// # Example
///
/// ```
/// use datestrings::{parse_with_options, English, ParseOptions, Separator};
///
/// let options = ParseOptions {
///     separators: vec![Separator::Slash],
///     ..Default::default()
/// };
/// assert!(parse_with_options("2023-01-05", &options, &English).is_err());
/// assert!(parse_with_options("2023/01/05", &options, &English).is_ok());
/// ```
pub fn parse_with_options<N: CalendarNames + ?Sized>(
    input: &str,
    options: &ParseOptions,
    names: &N,
) -> Result<Vec<Interpretation>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateStringError::EmptyInput);
    }

    let mut found = Vec::new();

    for &separator in &options.separators {
        let (layout, tokens) = separator.split(input);
        let min_parts = if options.partial_dates { 2 } else { 3 };
        if tokens.len() < min_parts || tokens.len() > 3 {
            continue;
        }

        let sets: SmallVec<[ComponentSet; 3]> = tokens
            .iter()
            .map(|token| classify(token.trim(), names, options.named_months))
            .collect();
        if sets.iter().any(|set| set.is_empty()) {
            tracing::trace!(separator = separator.as_str(), "token with no reading");
            continue;
        }

        let before = found.len();
        found.extend(
            combinations(&sets)
                .iter()
                .filter_map(|combination| validate(combination, layout)),
        );
        tracing::debug!(
            separator = separator.as_str(),
            readings = found.len() - before,
            "separator trial"
        );
    }

    let ordered = dedup_and_sort(found);
    if ordered.is_empty() {
        tracing::debug!(input, "no valid interpretation");
        return Err(DateStringError::Unparseable(input.to_string()));
    }

    Ok(ordered)
}

/// [`parse_date_string`] over many inputs, in parallel with the `rayon` feature.
///
/// Fails on the first entry (by position) with no valid reading; the error
/// carries that entry's index and text.
///
/// # Example
///
/// ```
/// use datestrings::{parse_batch, DateStringError};
///
/// let readings = parse_batch(&["31/1/2023", "2023-01-05"]).unwrap();
/// assert_eq!(readings[1].len(), 2);
///
/// let err = parse_batch(&["31/1/2023", "nope"]).unwrap_err();
/// assert!(matches!(err, DateStringError::InBatch { index: 1, .. }));
/// ```
pub fn parse_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> Result<Vec<Vec<Interpretation>>> {
    #[cfg(feature = "rayon")]
    let results: Vec<Result<Vec<Interpretation>>> = {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .map(|input| parse_date_string(input.as_ref()))
            .collect()
    };
    #[cfg(not(feature = "rayon"))]
    let results: Vec<Result<Vec<Interpretation>>> = inputs
        .iter()
        .map(|input| parse_date_string(input.as_ref()))
        .collect();

    results
        .into_iter()
        .zip(inputs)
        .enumerate()
        .map(|(index, (result, input))| {
            result.map_err(|source| DateStringError::InBatch {
                index,
                input: input.as_ref().to_string(),
                source: Box::new(source),
            })
        })
        .collect()
}

#[cfg(feature = "python")]
mod python;
