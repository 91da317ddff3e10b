//! Parse results

use chrono::NaiveDate;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// 1970-01-01, the origin of day and month counts
pub fn epoch() -> NaiveDate {
    // chrono's default date is the Unix epoch
    NaiveDate::default()
}

/// Distance of an interpretation from the 1970 epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Span {
    /// Days since 1970-01-01, for readings with a day
    Days(i64),
    /// Months since 1970-01, for year-month readings
    Months(i64),
}

/// One valid reading of a date string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpretation {
    /// The calendar date. Missing days are filled with 1, missing years with 1970.
    pub date: NaiveDate,
    /// Format string that renders `date` back to the input, e.g. `"Y-M2-D2"`
    pub format: String,
    /// Day or month count since the epoch
    pub span: Span,
}

impl Interpretation {
    /// Days since 1970-01-01, when the reading has a day
    pub fn days(&self) -> Option<i64> {
        match self.span {
            Span::Days(days) => Some(days),
            Span::Months(_) => None,
        }
    }

    /// Months since 1970-01, when the reading is year-month only
    pub fn months(&self) -> Option<i64> {
        match self.span {
            Span::Months(months) => Some(months),
            Span::Days(_) => None,
        }
    }

    /// Milliseconds since the Unix epoch at UTC midnight of `date`
    pub fn timestamp_millis(&self) -> i64 {
        self.date.signed_duration_since(epoch()).num_days() * MILLIS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpretation(y: i32, m: u32, d: u32, span: Span) -> Interpretation {
        Interpretation {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            format: "Y-M1-D1".to_string(),
            span,
        }
    }

    #[test]
    fn test_epoch() {
        assert_eq!(epoch(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_exactly_one_count() {
        let by_day = interpretation(2023, 12, 25, Span::Days(19716));
        assert_eq!(by_day.days(), Some(19716));
        assert_eq!(by_day.months(), None);

        let by_month = interpretation(2023, 12, 1, Span::Months(647));
        assert_eq!(by_month.months(), Some(647));
        assert_eq!(by_month.days(), None);
    }

    #[test]
    fn test_timestamp() {
        let i = interpretation(1970, 1, 2, Span::Days(1));
        assert_eq!(i.timestamp_millis(), 86_400_000);
        let i = interpretation(1969, 12, 31, Span::Days(-1));
        assert_eq!(i.timestamp_millis(), -86_400_000);
    }
}
