//! Operand-word decoding errors.

use thiserror::Error;

use crate::Word;

/// A word that does not decode to a legal operand value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WordError {
    /// The word is not one of the enumerants of `kind`.
    #[error("unknown {kind} value {word}")]
    UnknownEnum { kind: &'static str, word: Word },

    /// The opcode is not a type-defining instruction.
    #[error("opcode {0} does not define a type")]
    NotATypeOpcode(u16),

    /// A literal string ran off the end of the operand words.
    #[error("literal string is not NUL terminated")]
    UnterminatedString,

    /// A string to encode holds a NUL byte before its end.
    #[error("literal string has an interior NUL at byte {0}")]
    InteriorNul(usize),

    /// A literal string is not valid UTF-8.
    #[error("literal string is not valid UTF-8")]
    InvalidUtf8,
}
