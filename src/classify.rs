//! Classify single tokens into date components

use crate::names::CalendarNames;
use crate::tag::{ComponentKind, FormatTag};
use smallvec::SmallVec;

/// A token read as one date component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    /// Year, month or day
    pub kind: ComponentKind,
    /// Year (any 4-digit literal), month (1-12) or day (1-31)
    pub value: u32,
    /// How the token was written
    pub tag: FormatTag,
}

/// All readings of one token (inline up to 4; "05" and "MAY" each give 2)
pub type ComponentSet = SmallVec<[Component; 4]>;

/// Every component `token` could be, judged on its own.
///
/// The token is matched exactly as written. Neighbors are not consulted; a
/// token that is both a valid month and a valid day yields both.
pub fn classify<N: CalendarNames + ?Sized>(
    token: &str,
    names: &N,
    named_months: bool,
) -> ComponentSet {
    FormatTag::ALL
        .into_iter()
        .filter(|tag| named_months || !tag.is_named())
        .filter_map(|tag| {
            tag.parse_value(token, names).map(|value| Component {
                kind: tag.kind(),
                value,
                tag,
            })
        })
        .collect()
}
