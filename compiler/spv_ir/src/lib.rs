//! SPIR-V IR vocabulary.
//!
//! This crate holds the small, copyable building blocks the type table is
//! written in terms of:
//! - `Id` for module-scoped result ids
//! - `Op` for the type-defining opcodes
//! - Operand enums (`StorageClass`, `Dim`, `ImageFormat`, `AccessQualifier`)
//! - `Capability` tokens a backend must declare
//! - Literal string packing into 32-bit words
//!
//! Every enum here round-trips through its operand word with `from_word` /
//! `word`. Unknown words are rejected with a [`WordError`], never coerced.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod capability;
mod error;
mod id;
mod image;
mod literal;
mod op;
mod storage_class;
mod word_enum;

pub use capability::Capability;
pub use error::WordError;
pub use id::{Id, Word};
pub use image::{AccessQualifier, Dim, ImageFormat};
pub use literal::{
    check_literal_string, decode_literal_string, encode_literal_string, literal_string_word_len,
};
pub use op::Op;
pub use storage_class::StorageClass;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Capability, Id, Op, StorageClass};
    static_assert_size!(Id, 4);
    static_assert_size!(Op, 1);
    static_assert_size!(StorageClass, 1);
    static_assert_size!(Capability, 1);
}
