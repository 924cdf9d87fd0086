//! Pointer storage classes.

use crate::word_enum::word_enum;
use crate::Capability;

word_enum! {
    /// Memory region a pointer's pointee lives in.
    pub enum StorageClass ("StorageClass") {
        UniformConstant = 0 => "UniformConstant",
        Input = 1 => "Input",
        Uniform = 2 => "Uniform",
        Output = 3 => "Output",
        Workgroup = 4 => "Workgroup",
        CrossWorkgroup = 5 => "CrossWorkgroup",
        Private = 6 => "Private",
        Function = 7 => "Function",
        Generic = 8 => "Generic",
        PushConstant = 9 => "PushConstant",
        AtomicCounter = 10 => "AtomicCounter",
        Image = 11 => "Image",
        StorageBuffer = 12 => "StorageBuffer",
    }
}

impl StorageClass {
    /// The capability a pointer into this storage class requires.
    ///
    /// Classes the grammar gates behind no capability map to `Kernel`, the
    /// base capability every module this table serves already declares.
    pub const fn capability(self) -> Capability {
        match self {
            Self::Uniform
            | Self::Output
            | Self::Private
            | Self::PushConstant
            | Self::StorageBuffer => Capability::Shader,
            Self::Generic => Capability::GenericPointer,
            Self::AtomicCounter => Capability::AtomicStorage,
            Self::UniformConstant
            | Self::Input
            | Self::Workgroup
            | Self::CrossWorkgroup
            | Self::Function
            | Self::Image => Capability::Kernel,
        }
    }
}

#[cfg(test)]
mod tests;
