//! Module-scoped result ids.
//!
//! Ids are assigned by whoever produced the binary, not by this crate.
//! They are unique within a module and compared by value. `0` is never a
//! legal result id in SPIR-V, so it doubles as the unresolved sentinel.

use std::fmt;

/// One 32-bit word of a SPIR-V instruction stream.
pub type Word = u32;

/// A module-scoped result id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Id(Word);

impl Id {
    /// Sentinel for "no id" / not yet resolved.
    pub const NONE: Self = Self(0);

    /// Create an id from its raw word.
    #[inline]
    pub const fn from_raw(raw: Word) -> Self {
        Self(raw)
    }

    /// Get the raw word.
    #[inline]
    pub const fn raw(self) -> Word {
        self.0
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub const fn to_option(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<Word> for Id {
    fn from(raw: Word) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Id::NONE")
        } else {
            write!(f, "Id({})", self.0)
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "%<none>")
        } else {
            write!(f, "%{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests;
