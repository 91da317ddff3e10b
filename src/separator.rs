//! Separators and the layouts they produce

use smallvec::{smallvec, SmallVec};

/// Split parts of a date string or format string (inline up to 3, the common case)
pub type Parts<'a> = SmallVec<[&'a str; 3]>;

/// A separator between date components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Separator {
    Dash,       // -
    Dot,        // .
    Slash,      // /
    Comma,      // ,
    Space,      // ' '
    CommaSpace, // ", "
}

impl Separator {
    /// Every separator, in priority order
    pub const ALL: [Separator; 6] = [
        Separator::Dash,
        Separator::Dot,
        Separator::Slash,
        Separator::Comma,
        Separator::Space,
        Separator::CommaSpace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Dot => ".",
            Separator::Slash => "/",
            Separator::Comma => ",",
            Separator::Space => " ",
            Separator::CommaSpace => ", ",
        }
    }

    /// Sort priority among interpretations of equal family (lower first)
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// Split `input` on this separator.
    ///
    /// For `", "` a first segment holding exactly one space is split again,
    /// which recovers the `Month Day, Year` shape.
    pub fn split(self, input: &str) -> (Layout, Parts<'_>) {
        let parts: Parts<'_> = input.split(self.as_str()).collect();
        if self == Separator::CommaSpace && parts.len() == 2 {
            if let Some((first, second)) = parts[0].split_once(' ') {
                if !second.contains(' ') {
                    return (Layout::MonthDayComma, smallvec![first, second, parts[1]]);
                }
            }
        }
        (Layout::Joined(self), parts)
    }
}

/// How the parts of a date string are put back together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Every part joined by the same separator
    Joined(Separator),
    /// `A B, C`: a space-joined pair, then `", "` and a third part
    MonthDayComma,
}

impl Layout {
    /// Separator used for ordering: `", "` for the mixed shape
    pub fn separator(self) -> Separator {
        match self {
            Layout::Joined(separator) => separator,
            Layout::MonthDayComma => Separator::CommaSpace,
        }
    }

    /// Find the layout of a format string and split it.
    ///
    /// `", "` wins over everything, otherwise the first of `-`, `.`, `/`,
    /// `,` and space found in the string is used.
    pub fn detect(format: &str) -> Option<(Layout, Parts<'_>)> {
        if format.contains(Separator::CommaSpace.as_str()) {
            return Some(Separator::CommaSpace.split(format));
        }
        Separator::ALL[..5]
            .iter()
            .find(|s| format.contains(s.as_str()))
            .map(|s| s.split(format))
    }

    /// Join rendered parts back into one string
    pub fn compose<S: AsRef<str>>(self, parts: &[S]) -> String {
        match (self, parts) {
            (Layout::MonthDayComma, [first, second, third]) => {
                format!("{} {}, {}", first.as_ref(), second.as_ref(), third.as_ref())
            }
            _ => {
                let separator = self.separator().as_str();
                let mut out = String::new();
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push_str(separator);
                    }
                    out.push_str(part.as_ref());
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let priorities: Vec<u8> = Separator::ALL.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_split_plain() {
        let (layout, parts) = Separator::Slash.split("31/1/2023");
        assert_eq!(layout, Layout::Joined(Separator::Slash));
        assert_eq!(parts.as_slice(), &["31", "1", "2023"]);

        let (_, parts) = Separator::Dash.split("31/1/2023");
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_split_month_day_comma() {
        let (layout, parts) = Separator::CommaSpace.split("Jan 5, 2023");
        assert_eq!(layout, Layout::MonthDayComma);
        assert_eq!(parts.as_slice(), &["Jan", "5", "2023"]);

        let (layout, parts) = Separator::CommaSpace.split("January, 2023");
        assert_eq!(layout, Layout::Joined(Separator::CommaSpace));
        assert_eq!(parts.as_slice(), &["January", "2023"]);
    }

    #[test]
    fn test_detect() {
        let (layout, parts) = Layout::detect("Ms D1, Y").unwrap();
        assert_eq!(layout, Layout::MonthDayComma);
        assert_eq!(parts.as_slice(), &["Ms", "D1", "Y"]);

        let (layout, _) = Layout::detect("Y.M2.D2").unwrap();
        assert_eq!(layout, Layout::Joined(Separator::Dot));

        let (layout, _) = Layout::detect("Mf Y").unwrap();
        assert_eq!(layout, Layout::Joined(Separator::Space));

        assert!(Layout::detect("Y").is_none());
    }

    #[test]
    fn test_compose() {
        assert_eq!(Layout::MonthDayComma.compose(&["Jan", "5", "2023"]), "Jan 5, 2023");
        assert_eq!(
            Layout::Joined(Separator::Dash).compose(&["2023", "01", "05"]),
            "2023-01-05"
        );
        assert_eq!(Layout::Joined(Separator::CommaSpace).compose(&["May", "2023"]), "May, 2023");
    }
}
