//! Capability tokens.
//!
//! Only the capabilities a type can demand are listed, plus the two base
//! execution capabilities. Words follow the SPIR-V `Capability` operand kind.

use crate::word_enum::word_enum;

word_enum! {
    /// A hardware/feature flag a backend must support to use a type.
    pub enum Capability ("Capability") {
        /// Graphics pipeline base capability.
        Shader = 1 => "Shader",
        /// Physical addressing (pointers as values).
        Addresses = 4 => "Addresses",
        /// Compute kernel base capability.
        Kernel = 6 => "Kernel",
        /// Vectors with more than 8 components.
        Vector16 = 7 => "Vector16",
        /// 16-bit floats in memory through pointers.
        Float16Buffer = 8 => "Float16Buffer",
        ImageBasic = 13 => "ImageBasic",
        ImageReadWrite = 14 => "ImageReadWrite",
        ImageMipmap = 15 => "ImageMipmap",
        Pipes = 17 => "Pipes",
        AtomicStorage = 21 => "AtomicStorage",
        GenericPointer = 38 => "GenericPointer",
        PipeStorage = 60 => "PipeStorage",
        NamedBarrier = 61 => "NamedBarrier",
    }
}
