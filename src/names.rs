//! Calendar name service: month and weekday names
//!
//! The date engine never reads name tables directly. Everything goes through
//! the [`CalendarNames`] trait so a caller can plug in another locale, or a
//! fake one in tests. [`English`] is the default.

/// Long (`January`) or short (`Jan`) form of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    Long,
    Short,
}

/// Letter case a named component is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// `January`
    Title,
    /// `january`
    Lower,
    /// `JANUARY`
    Upper,
}

impl Casing {
    /// Rewrite `name` in this case.
    pub fn apply(self, name: &str) -> String {
        match self {
            Casing::Lower => name.to_lowercase(),
            Casing::Upper => name.to_uppercase(),
            Casing::Title => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Read-only lookup of localized month and weekday names.
///
/// Months are numbered 1-12, weekdays 0-6 starting on Sunday. The reverse
/// lookups ignore case; callers that care about the exact casing compare
/// against [`Casing::apply`] afterwards.
pub trait CalendarNames {
    /// Name of `month` (1-12), or `None` when out of range.
    fn month_name(&self, month: u32, width: NameWidth) -> Option<&str>;

    /// Name of `weekday` (0 = Sunday), or `None` when out of range.
    fn weekday_name(&self, weekday: u32, width: NameWidth) -> Option<&str>;

    /// Month number for `name`, ignoring case.
    fn month_from_name(&self, name: &str, width: NameWidth) -> Option<u32> {
        let wanted = name.to_lowercase();
        (1..=12).find(|&month| {
            self.month_name(month, width)
                .is_some_and(|candidate| candidate.to_lowercase() == wanted)
        })
    }

    /// Weekday number (0 = Sunday) for `name`, ignoring case.
    fn weekday_from_name(&self, name: &str, width: NameWidth) -> Option<u32> {
        let wanted = name.to_lowercase();
        (0..7).find(|&weekday| {
            self.weekday_name(weekday, width)
                .is_some_and(|candidate| candidate.to_lowercase() == wanted)
        })
    }
}

const MONTHS_LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// English month and weekday names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl CalendarNames for English {
    fn month_name(&self, month: u32, width: NameWidth) -> Option<&str> {
        let table = match width {
            NameWidth::Long => &MONTHS_LONG,
            NameWidth::Short => &MONTHS_SHORT,
        };
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        table.get(index).copied()
    }

    fn weekday_name(&self, weekday: u32, width: NameWidth) -> Option<&str> {
        let table = match width {
            NameWidth::Long => &WEEKDAYS_LONG,
            NameWidth::Short => &WEEKDAYS_SHORT,
        };
        table.get(usize::try_from(weekday).ok()?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_months() {
        assert_eq!(English.month_name(1, NameWidth::Long), Some("January"));
        assert_eq!(English.month_name(12, NameWidth::Short), Some("Dec"));
        assert_eq!(English.month_name(0, NameWidth::Long), None);
        assert_eq!(English.month_name(13, NameWidth::Short), None);
    }

    #[test]
    fn test_english_weekdays() {
        assert_eq!(English.weekday_name(0, NameWidth::Long), Some("Sunday"));
        assert_eq!(English.weekday_name(6, NameWidth::Short), Some("Sat"));
        assert_eq!(English.weekday_name(7, NameWidth::Short), None);
    }

    #[test]
    fn test_reverse_lookup_ignores_case() {
        assert_eq!(English.month_from_name("MARCH", NameWidth::Long), Some(3));
        assert_eq!(English.month_from_name("sep", NameWidth::Short), Some(9));
        assert_eq!(English.month_from_name("Sept", NameWidth::Short), None);
        assert_eq!(English.weekday_from_name("friday", NameWidth::Long), Some(5));
        assert_eq!(English.weekday_from_name("Mon", NameWidth::Short), Some(1));
    }

    #[test]
    fn test_casing() {
        assert_eq!(Casing::Title.apply("january"), "January");
        assert_eq!(Casing::Lower.apply("January"), "january");
        assert_eq!(Casing::Upper.apply("January"), "JANUARY");
        assert_eq!(Casing::Title.apply(""), "");
    }

    #[test]
    fn test_custom_locale() {
        struct Numbered;
        impl CalendarNames for Numbered {
            fn month_name(&self, month: u32, _width: NameWidth) -> Option<&str> {
                ["one", "two"].get(usize::try_from(month).ok()?.checked_sub(1)?).copied()
            }
            fn weekday_name(&self, _weekday: u32, _width: NameWidth) -> Option<&str> {
                None
            }
        }

        assert_eq!(Numbered.month_from_name("Two", NameWidth::Long), Some(2));
        assert_eq!(Numbered.month_from_name("three", NameWidth::Long), None);
    }
}
