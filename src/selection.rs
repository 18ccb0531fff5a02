//! The four-way verdict a `select` callback returns for each entry.

use crate::error::SelectionCodeError;

/// Per-entry verdict driving `IntKeyHashMap::select`.
///
/// Two independent bits: whether the entry matched (and is removed) and
/// whether the traversal stops after it. The discriminants are the wire
/// codes used by callers that still speak raw integers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Selection {
    /// Keep the entry and continue.
    NoMatch = 0,
    /// Remove the entry and continue.
    Match = 1,
    /// Keep the entry and stop.
    StopNoMatch = 2,
    /// Remove the entry and stop.
    StopMatch = 3,
}

impl Selection {
    pub const fn from_flags(matched: bool, stop: bool) -> Self {
        match (matched, stop) {
            (false, false) => Selection::NoMatch,
            (true, false) => Selection::Match,
            (false, true) => Selection::StopNoMatch,
            (true, true) => Selection::StopMatch,
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// True when the entry is to be removed.
    #[inline]
    pub const fn is_match(self) -> bool {
        matches!(self, Selection::Match | Selection::StopMatch)
    }

    /// True when the traversal ends at this entry.
    #[inline]
    pub const fn is_stop(self) -> bool {
        matches!(self, Selection::StopNoMatch | Selection::StopMatch)
    }
}

impl TryFrom<u8> for Selection {
    type Error = SelectionCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Selection::NoMatch),
            1 => Ok(Selection::Match),
            2 => Ok(Selection::StopNoMatch),
            3 => Ok(Selection::StopMatch),
            other => Err(SelectionCodeError(other)),
        }
    }
}

impl From<Selection> for u8 {
    fn from(s: Selection) -> u8 {
        s.code()
    }
}
