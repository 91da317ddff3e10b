//! Render dates through format strings
//!
//! A format string is a list of [`FormatTag`]s joined by one separator, or
//! the `"<month> <day>, Y"` shape. Formatting is the inverse of parsing: the
//! `format` of every [`Interpretation`](crate::Interpretation) renders its
//! date back to the string it was read from.

use crate::error::{DateStringError, Result};
use crate::interpretation::epoch;
use crate::names::{CalendarNames, English};
use crate::separator::Layout;
use crate::tag::{ComponentKind, FormatTag};
use chrono::{DateTime, Datelike, Days, NaiveDate};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A parsed format string such as `"Y-M2-D2"` or `"Ms D1, Y"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    layout: Layout,
    tags: SmallVec<[FormatTag; 3]>,
}

impl DateFormat {
    /// Tags in order of appearance
    pub fn tags(&self) -> &[FormatTag] {
        &self.tags
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Check if any tag renders a component of `kind`
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.tags.iter().any(|t| t.kind() == kind)
    }

    /// Render a date given as parts. `day` is `None` for month counts.
    pub fn render<N: CalendarNames + ?Sized>(
        &self,
        year: i32,
        month: u32,
        day: Option<u32>,
        names: &N,
    ) -> Result<String> {
        let parts = self
            .tags
            .iter()
            .map(|tag| tag.render(year, month, day, names))
            .collect::<Result<SmallVec<[String; 3]>>>()?;
        Ok(self.layout.compose(parts.as_slice()))
    }

    /// Render `date`
    pub fn render_date<N: CalendarNames + ?Sized>(&self, date: NaiveDate, names: &N) -> Result<String> {
        self.render(date.year(), date.month(), Some(date.day()), names)
    }
}

impl FromStr for DateFormat {
    type Err = DateStringError;

    fn from_str(format: &str) -> Result<Self> {
        let (layout, parts) =
            Layout::detect(format).ok_or_else(|| DateStringError::MissingSeparator(format.to_string()))?;

        let tags = parts
            .iter()
            .map(|part| {
                FormatTag::from_tag(part).ok_or_else(|| DateStringError::UnknownTag {
                    tag: part.to_string(),
                    format: format.to_string(),
                })
            })
            .collect::<Result<SmallVec<[FormatTag; 3]>>>()?;

        // at most one year, one month and one day
        let repeated = tags
            .iter()
            .enumerate()
            .any(|(i, tag)| tags[..i].iter().any(|t| t.kind() == tag.kind()));
        if repeated {
            return Err(DateStringError::RepeatedComponent(format.to_string()));
        }

        Ok(Self { layout, tags })
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: SmallVec<[&str; 3]> = self.tags.iter().map(|t| t.as_str()).collect();
        f.write_str(&self.layout.compose(tags.as_slice()))
    }
}

/// Render `date` through `format`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use datestrings::format_date_string;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
/// assert_eq!(format_date_string(date, "Ms D1, Y").unwrap(), "Jan 5, 2023");
/// assert_eq!(format_date_string(date, "D2/M2/Y").unwrap(), "05/01/2023");
/// ```
pub fn format_date_string(date: NaiveDate, format: &str) -> Result<String> {
    format_date_string_with(date, format, &English)
}

/// [`format_date_string`] with a custom name service
pub fn format_date_string_with<N: CalendarNames + ?Sized>(
    date: NaiveDate,
    format: &str,
    names: &N,
) -> Result<String> {
    format.parse::<DateFormat>()?.render_date(date, names)
}

/// Render the UTC date of a millisecond Unix timestamp through `format`
pub fn format_timestamp_string(millis: i64, format: &str) -> Result<String> {
    let date = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DateStringError::UnrepresentableDate(format!("timestamp {millis}")))?
        .date_naive();
    format_date_string(date, format)
}

/// Render the date `days` days after 1970-01-01. `format` must contain a day tag.
///
/// # Example
///
/// ```
/// use datestrings::format_day_string;
///
/// assert_eq!(format_day_string(19716, "Y-M1-D1").unwrap(), "2023-12-25");
/// assert!(format_day_string(0, "Y-M1").is_err());
/// ```
pub fn format_day_string(days: i64, format: &str) -> Result<String> {
    format_day_string_with(days, format, &English)
}

/// [`format_day_string`] with a custom name service
pub fn format_day_string_with<N: CalendarNames + ?Sized>(
    days: i64,
    format: &str,
    names: &N,
) -> Result<String> {
    let parsed: DateFormat = format.parse()?;
    if !parsed.has(ComponentKind::Day) {
        return Err(DateStringError::MissingDayTag(format.to_string()));
    }
    parsed.render_date(date_from_days(days)?, names)
}

/// Render the month `months` months after 1970-01. `format` must not contain a day tag.
///
/// # Example
///
/// ```
/// use datestrings::format_month_string;
///
/// assert_eq!(format_month_string(0, "Mf Y").unwrap(), "January 1970");
/// assert_eq!(format_month_string(647, "Y-M2").unwrap(), "2023-12");
/// assert!(format_month_string(0, "Y-M1-D1").is_err());
/// ```
pub fn format_month_string(months: i64, format: &str) -> Result<String> {
    format_month_string_with(months, format, &English)
}

/// [`format_month_string`] with a custom name service
pub fn format_month_string_with<N: CalendarNames + ?Sized>(
    months: i64,
    format: &str,
    names: &N,
) -> Result<String> {
    let parsed: DateFormat = format.parse()?;
    if parsed.has(ComponentKind::Day) {
        return Err(DateStringError::DayTagNotAllowed(format.to_string()));
    }

    let year = months
        .div_euclid(12)
        .checked_add(1970)
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| DateStringError::UnrepresentableDate(format!("month count {months}")))?;
    // rem_euclid of 12 always fits
    let month = 1 + months.rem_euclid(12) as u32;

    parsed.render(year, month, None, names)
}

fn date_from_days(days: i64) -> Result<NaiveDate> {
    let offset = Days::new(days.unsigned_abs());
    let date = if days >= 0 {
        epoch().checked_add_days(offset)
    } else {
        epoch().checked_sub_days(offset)
    };
    date.ok_or_else(|| DateStringError::UnrepresentableDate(format!("day count {days}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::separator::Separator;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_format() {
        let f: DateFormat = "Y-M2-D2".parse().unwrap();
        assert_eq!(f.layout(), Layout::Joined(Separator::Dash));
        assert_eq!(f.tags(), &[FormatTag::Y, FormatTag::M2, FormatTag::D2]);
        assert_eq!(f.to_string(), "Y-M2-D2");

        let f: DateFormat = "Mf D1, Y".parse().unwrap();
        assert_eq!(f.layout(), Layout::MonthDayComma);
        assert_eq!(f.to_string(), "Mf D1, Y");
    }

    #[test]
    fn test_parse_format_errors() {
        assert_eq!(
            "Y".parse::<DateFormat>(),
            Err(DateStringError::MissingSeparator("Y".to_string()))
        );
        assert_eq!(
            "Y-M3".parse::<DateFormat>(),
            Err(DateStringError::UnknownTag {
                tag: "M3".to_string(),
                format: "Y-M3".to_string(),
            })
        );
        // mixed separators leave an unknown part behind
        assert!("Y-M1/D1".parse::<DateFormat>().is_err());
    }

    #[test]
    fn test_parse_format_repeated_component() {
        assert_eq!(
            "Y-M1-D1-D2".parse::<DateFormat>(),
            Err(DateStringError::RepeatedComponent("Y-M1-D1-D2".to_string()))
        );
        assert_eq!(
            "Mf Ms Y".parse::<DateFormat>(),
            Err(DateStringError::RepeatedComponent("Mf Ms Y".to_string()))
        );
        assert!("Y/Y".parse::<DateFormat>().is_err());
        assert_eq!(
            format_day_string(19716, "Y-M1-D1-D2"),
            Err(DateStringError::RepeatedComponent("Y-M1-D1-D2".to_string()))
        );
        assert!(format_date_string(date(2023, 12, 25), "D1.M1.Y.Y").is_err());
    }

    #[test]
    fn test_format_date_string() {
        let d = date(2023, 1, 5);
        assert_eq!(format_date_string(d, "Y-M2-D2").unwrap(), "2023-01-05");
        assert_eq!(format_date_string(d, "D1.M1.Y").unwrap(), "5.1.2023");
        assert_eq!(format_date_string(d, "Mfu D2, Y").unwrap(), "JANUARY 05, 2023");
        assert_eq!(format_date_string(d, "Msl Y").unwrap(), "jan 2023");
        assert_eq!(format_date_string(d, "M1/D1").unwrap(), "1/5");
        assert_eq!(format_date_string(d, "Mf, Y").unwrap(), "January, 2023");
    }

    #[test]
    fn test_format_timestamp_string() {
        assert_eq!(format_timestamp_string(0, "Y-M2-D2").unwrap(), "1970-01-01");
        assert_eq!(
            format_timestamp_string(86_400_000 - 1, "Y-M2-D2").unwrap(),
            "1970-01-01"
        );
        assert_eq!(format_timestamp_string(-1, "Y-M2-D2").unwrap(), "1969-12-31");
        assert!(matches!(
            format_timestamp_string(i64::MAX, "Y-M2-D2"),
            Err(DateStringError::UnrepresentableDate(_))
        ));
    }

    #[test]
    fn test_format_day_string() {
        assert_eq!(format_day_string(0, "Y-M2-D2").unwrap(), "1970-01-01");
        assert_eq!(format_day_string(-1, "D1/M1/Y").unwrap(), "31/12/1969");
        assert_eq!(format_day_string(31, "Ms D1").unwrap(), "Feb 1");
        assert_eq!(
            format_day_string(0, "Y-M1"),
            Err(DateStringError::MissingDayTag("Y-M1".to_string()))
        );
        assert!(matches!(
            format_day_string(i64::MAX, "Y-M1-D1"),
            Err(DateStringError::UnrepresentableDate(_))
        ));
    }

    #[test]
    fn test_format_month_string() {
        assert_eq!(format_month_string(0, "Mf Y").unwrap(), "January 1970");
        assert_eq!(format_month_string(11, "M2/Y").unwrap(), "12/1970");
        assert_eq!(format_month_string(-1, "Y-M1").unwrap(), "1969-12");
        assert_eq!(format_month_string(12, "Msu.Y").unwrap(), "JAN.1971");
        assert_eq!(
            format_month_string(0, "Mf D1, Y"),
            Err(DateStringError::DayTagNotAllowed("Mf D1, Y".to_string()))
        );
        assert!(matches!(
            format_month_string(0, "Y-Q"),
            Err(DateStringError::UnknownTag { .. })
        ));
    }

    #[test]
    fn test_custom_names() {
        struct Upper;
        impl CalendarNames for Upper {
            fn month_name(&self, month: u32, _width: crate::names::NameWidth) -> Option<&str> {
                (month == 1).then_some("JANVIER")
            }
            fn weekday_name(&self, _weekday: u32, _width: crate::names::NameWidth) -> Option<&str> {
                None
            }
        }

        assert_eq!(
            format_month_string_with(0, "Mf Y", &Upper).unwrap(),
            "Janvier 1970"
        );
        assert_eq!(
            format_month_string_with(1, "Mf Y", &Upper),
            Err(DateStringError::NameUnavailable { month: 2 })
        );
    }
}
