//! Image operand enums: dimensionality, texel format, access qualifier.

use crate::word_enum::word_enum;

word_enum! {
    /// Image dimensionality.
    #[derive(Default)]
    pub enum Dim ("Dim") {
        #[default]
        Dim1D = 0 => "1D",
        Dim2D = 1 => "2D",
        Dim3D = 2 => "3D",
        Cube = 3 => "Cube",
        Rect = 4 => "Rect",
        Buffer = 5 => "Buffer",
        SubpassData = 6 => "SubpassData",
    }
}

word_enum! {
    /// Texel format of a storage image. `Unknown` for OpenCL images.
    #[derive(Default)]
    pub enum ImageFormat ("ImageFormat") {
        #[default]
        Unknown = 0 => "Unknown",
        Rgba32f = 1 => "Rgba32f",
        Rgba16f = 2 => "Rgba16f",
        R32f = 3 => "R32f",
        Rgba8 = 4 => "Rgba8",
        Rgba8Snorm = 5 => "Rgba8Snorm",
        Rg32f = 6 => "Rg32f",
        Rg16f = 7 => "Rg16f",
        R11fG11fB10f = 8 => "R11fG11fB10f",
        R16f = 9 => "R16f",
        Rgba16 = 10 => "Rgba16",
        Rgb10A2 = 11 => "Rgb10A2",
        Rg16 = 12 => "Rg16",
        Rg8 = 13 => "Rg8",
        R16 = 14 => "R16",
        R8 = 15 => "R8",
        Rgba16Snorm = 16 => "Rgba16Snorm",
        Rg16Snorm = 17 => "Rg16Snorm",
        Rg8Snorm = 18 => "Rg8Snorm",
        R16Snorm = 19 => "R16Snorm",
        R8Snorm = 20 => "R8Snorm",
        Rgba32i = 21 => "Rgba32i",
        Rgba16i = 22 => "Rgba16i",
        Rgba8i = 23 => "Rgba8i",
        R32i = 24 => "R32i",
        Rg32i = 25 => "Rg32i",
        Rg16i = 26 => "Rg16i",
        Rg8i = 27 => "Rg8i",
        R16i = 28 => "R16i",
        R8i = 29 => "R8i",
        Rgba32ui = 30 => "Rgba32ui",
        Rgba16ui = 31 => "Rgba16ui",
        Rgba8ui = 32 => "Rgba8ui",
        R32ui = 33 => "R32ui",
        Rgb10a2ui = 34 => "Rgb10a2ui",
        Rg32ui = 35 => "Rg32ui",
        Rg16ui = 36 => "Rg16ui",
        Rg8ui = 37 => "Rg8ui",
        R16ui = 38 => "R16ui",
        R8ui = 39 => "R8ui",
    }
}

word_enum! {
    /// Kernel-side access to an image or pipe.
    pub enum AccessQualifier ("AccessQualifier") {
        ReadOnly = 0 => "ReadOnly",
        WriteOnly = 1 => "WriteOnly",
        ReadWrite = 2 => "ReadWrite",
    }
}
