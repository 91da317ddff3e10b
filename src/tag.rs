//! Format tags and the literal forms they parse and render

use crate::error::{DateStringError, Result};
use crate::names::{CalendarNames, Casing, NameWidth};

/// Role a token plays in a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    Year,
    Month,
    Day,
}

/// A format tag: one date component together with the way it is written.
///
/// Whenever a token parses as tag `g` with value `v`, `g` renders `v` back
/// to the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatTag {
    Y,   // 2023
    M1,  // 1, 12
    M2,  // 01
    Mf,  // January
    Mfl, // january
    Mfu, // JANUARY
    Ms,  // Jan
    Msl, // jan
    Msu, // JAN
    D1,  // 5, 31
    D2,  // 05
}

impl FormatTag {
    /// Every tag, in classification order
    pub const ALL: [FormatTag; 11] = [
        FormatTag::Y,
        FormatTag::M2,
        FormatTag::M1,
        FormatTag::Mf,
        FormatTag::Mfl,
        FormatTag::Mfu,
        FormatTag::Ms,
        FormatTag::Msl,
        FormatTag::Msu,
        FormatTag::D2,
        FormatTag::D1,
    ];

    /// The tag as written in a format string
    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Y => "Y",
            FormatTag::M1 => "M1",
            FormatTag::M2 => "M2",
            FormatTag::Mf => "Mf",
            FormatTag::Mfl => "Mfl",
            FormatTag::Mfu => "Mfu",
            FormatTag::Ms => "Ms",
            FormatTag::Msl => "Msl",
            FormatTag::Msu => "Msu",
            FormatTag::D1 => "D1",
            FormatTag::D2 => "D2",
        }
    }

    /// Look up a tag by its format-string spelling
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// The component this tag renders
    pub fn kind(self) -> ComponentKind {
        match self {
            FormatTag::Y => ComponentKind::Year,
            FormatTag::D1 | FormatTag::D2 => ComponentKind::Day,
            _ => ComponentKind::Month,
        }
    }

    /// Check if this tag writes the month as a name
    pub fn is_named(self) -> bool {
        self.name_form().is_some()
    }

    /// Width and casing for named month tags
    pub fn name_form(self) -> Option<(NameWidth, Casing)> {
        match self {
            FormatTag::Mf => Some((NameWidth::Long, Casing::Title)),
            FormatTag::Mfl => Some((NameWidth::Long, Casing::Lower)),
            FormatTag::Mfu => Some((NameWidth::Long, Casing::Upper)),
            FormatTag::Ms => Some((NameWidth::Short, Casing::Title)),
            FormatTag::Msl => Some((NameWidth::Short, Casing::Lower)),
            FormatTag::Msu => Some((NameWidth::Short, Casing::Upper)),
            _ => None,
        }
    }

    /// Ordering weight among otherwise equal formats: padded numbers and full
    /// names score 0, unpadded numbers and short names score 1.
    pub fn specificity(self) -> u32 {
        match self {
            FormatTag::M1 | FormatTag::D1 => 1,
            FormatTag::Ms | FormatTag::Msl | FormatTag::Msu => 1,
            _ => 0,
        }
    }

    /// Value of `token` under this tag, if the token is written exactly the
    /// way this tag would write it.
    pub fn parse_value<N: CalendarNames + ?Sized>(self, token: &str, names: &N) -> Option<u32> {
        match self {
            FormatTag::Y => parse_year(token),
            FormatTag::M1 => parse_number(token, 12, Padding::Flexible),
            FormatTag::M2 => parse_number(token, 12, Padding::Zero),
            FormatTag::D1 => parse_number(token, 31, Padding::Flexible),
            FormatTag::D2 => parse_number(token, 31, Padding::Zero),
            _ => {
                let (width, casing) = self.name_form()?;
                let month = names.month_from_name(token, width)?;
                let canonical = names.month_name(month, width)?;
                (casing.apply(canonical) == token).then_some(month)
            }
        }
    }

    /// Write the component this tag selects from `year`, `month` and `day`.
    ///
    /// `day` is `None` when rendering a month count; a day tag then fails.
    pub fn render<N: CalendarNames + ?Sized>(
        self,
        year: i32,
        month: u32,
        day: Option<u32>,
        names: &N,
    ) -> Result<String> {
        match self {
            FormatTag::Y => Ok(format!("{:04}", year)),
            FormatTag::M1 => Ok(month.to_string()),
            FormatTag::M2 => Ok(format!("{:02}", month)),
            FormatTag::D1 | FormatTag::D2 => {
                let day = day.ok_or_else(|| DateStringError::DayTagNotAllowed(self.as_str().to_string()))?;
                Ok(if self == FormatTag::D2 {
                    format!("{:02}", day)
                } else {
                    day.to_string()
                })
            }
            _ => {
                let (width, casing) = self
                    .name_form()
                    .ok_or(DateStringError::NameUnavailable { month })?;
                let name = names
                    .month_name(month, width)
                    .ok_or(DateStringError::NameUnavailable { month })?;
                Ok(casing.apply(name))
            }
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    /// `01`-`09` only
    Zero,
    /// no leading zero
    Flexible,
}

fn parse_year(token: &str) -> Option<u32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_number(token: &str, max: u32, padding: Padding) -> Option<u32> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let well_formed = match padding {
        Padding::Zero => bytes.len() == 2 && bytes[0] == b'0',
        Padding::Flexible => bytes.len() <= 2 && bytes[0] != b'0',
    };
    if !well_formed {
        return None;
    }
    let value: u32 = token.parse().ok()?;
    (1..=max).contains(&value).then_some(value)
}
