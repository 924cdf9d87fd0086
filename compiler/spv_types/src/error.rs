//! Type table errors.
//!
//! Every fallible registry, decoding, and validation call reports a
//! [`TypeError`]. Callers that only need to decide between "abort the
//! module" and "retry after more of the module is decoded" use
//! [`TypeError::kind`].

use spv_ir::{Dim, Id, ImageFormat, Op, WordError};
use thiserror::Error;

/// Broad category of a [`TypeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The module is malformed. Fatal for decoding.
    Structural,
    /// An id is not (yet) usable. Retrying after the whole module is
    /// decoded may succeed.
    Unresolved,
    /// The caller broke an API contract (wrong variant, bad index, double
    /// completion).
    Misuse,
}

/// Error from a type table operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    /// No entity is registered under this id.
    #[error("type {0} is not declared")]
    Unresolved(Id),

    /// The entity exists but has not been completed yet.
    #[error("type {id} is declared but was never completed")]
    Incomplete { id: Id },

    /// An array length id is not a known constant.
    #[error("array {id} has length {length}, which is not a known constant")]
    UnresolvedConstant { id: Id, length: Id },

    /// A second entity was declared under an existing id.
    #[error("type {0} is already declared")]
    DuplicateId(Id),

    /// The reserved sentinel id cannot name a type.
    #[error("{0} cannot name a type")]
    InvalidId(Id),

    /// A record ended before a required operand.
    #[error("{op} {id} is missing its {operand} operand")]
    MissingOperand {
        id: Id,
        op: Op,
        operand: &'static str,
    },

    /// An operand word does not decode.
    #[error("bad operand for type {id}: {source}")]
    BadWord {
        id: Id,
        #[source]
        source: WordError,
    },

    /// The record header disagrees with the operands it carries.
    #[error("record for {id} declares {declared} words but carries {actual}")]
    RecordLength {
        id: Id,
        declared: u16,
        actual: usize,
    },

    /// More operands than a 16-bit word count can describe.
    #[error("{op} {id} has too many operands")]
    TooManyOperands { id: Id, op: Op },

    /// A completed entity breaks one of its invariants.
    #[error("{op} {id} is invalid: {violation}")]
    Invalid {
        id: Id,
        op: Op,
        violation: Violation,
    },

    /// `complete` was called twice for the same entity.
    #[error("{op} {id} is already completed")]
    AlreadyCompleted { id: Id, op: Op },

    /// A variant-specific operation was applied to another variant.
    #[error("type {id} is {found}, expected {expected}")]
    WrongKind { id: Id, expected: Op, found: Op },

    /// A marker constructor was asked for a kind that carries a payload.
    #[error("{0} is not a payload-free type")]
    NotAMarker(Op),

    /// Member or parameter index past the end.
    #[error("index {index} is out of range for {id} with {count} entries")]
    IndexOutOfRange { id: Id, index: usize, count: usize },
}

impl TypeError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unresolved(_) | Self::Incomplete { .. } | Self::UnresolvedConstant { .. } => {
                ErrorKind::Unresolved
            }
            Self::DuplicateId(_)
            | Self::InvalidId(_)
            | Self::MissingOperand { .. }
            | Self::BadWord { .. }
            | Self::RecordLength { .. }
            | Self::TooManyOperands { .. }
            | Self::Invalid { .. } => ErrorKind::Structural,
            Self::AlreadyCompleted { .. }
            | Self::WrongKind { .. }
            | Self::NotAMarker(_)
            | Self::IndexOutOfRange { .. } => ErrorKind::Misuse,
        }
    }

    /// The violated invariant, for `Invalid` errors.
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Invalid { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// A broken per-variant invariant found by validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("word count is {found}, fields need {expected}")]
    WordCount { expected: u16, found: u16 },

    #[error("integer width {0} is outside 2..=64")]
    IntWidth(u32),

    #[error("float width {0} is outside 16..=64")]
    FloatWidth(u32),

    #[error("vector component count {0} is not 2, 3, 4, 8 or 16")]
    ComponentCount(u32),

    #[error("array length is unset")]
    MissingLength,

    #[error("image dimension {0} is not supported")]
    ImageDim(Dim),

    #[error("image {field} flag is {value}, expected 0 or 1")]
    ImageFlag { field: &'static str, value: u32 },

    #[error("image with sampled={sampled}, format={format} is outside the OpenCL subset")]
    NotOpenClImage { sampled: u32, format: ImageFormat },

    #[error("sampled image wraps {found}, expected an image")]
    NotAnImage { found: Op },
}
