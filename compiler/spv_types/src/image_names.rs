//! OpenCL image type names and the image descriptors they stand for.
//!
//! Kernel front ends spell image arguments as `image2d_array_t` and the
//! like. These map one-to-one onto descriptors with `sampled == 0` and an
//! Unknown format.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use spv_ir::{Dim, ImageFormat};

use crate::data::ImageDescriptor;

const fn ocl(dim: Dim, depth: u32, arrayed: u32, ms: u32) -> ImageDescriptor {
    ImageDescriptor::new(dim, depth, arrayed, ms, 0, ImageFormat::Unknown)
}

/// Every OpenCL image type name with its descriptor.
pub static OPENCL_IMAGE_TYPES: [(&str, ImageDescriptor); 12] = [
    ("image1d_t", ocl(Dim::Dim1D, 0, 0, 0)),
    ("image1d_buffer_t", ocl(Dim::Buffer, 0, 0, 0)),
    ("image1d_array_t", ocl(Dim::Dim1D, 0, 1, 0)),
    ("image2d_t", ocl(Dim::Dim2D, 0, 0, 0)),
    ("image2d_array_t", ocl(Dim::Dim2D, 0, 1, 0)),
    ("image2d_depth_t", ocl(Dim::Dim2D, 1, 0, 0)),
    ("image2d_array_depth_t", ocl(Dim::Dim2D, 1, 1, 0)),
    ("image2d_msaa_t", ocl(Dim::Dim2D, 0, 0, 1)),
    ("image2d_array_msaa_t", ocl(Dim::Dim2D, 0, 1, 1)),
    ("image2d_msaa_depth_t", ocl(Dim::Dim2D, 1, 0, 1)),
    ("image2d_array_msaa_depth_t", ocl(Dim::Dim2D, 1, 1, 1)),
    ("image3d_t", ocl(Dim::Dim3D, 0, 0, 0)),
];

fn by_name() -> &'static FxHashMap<&'static str, ImageDescriptor> {
    static MAP: OnceLock<FxHashMap<&'static str, ImageDescriptor>> = OnceLock::new();
    MAP.get_or_init(|| OPENCL_IMAGE_TYPES.iter().copied().collect())
}

fn by_descriptor() -> &'static BTreeMap<ImageDescriptor, &'static str> {
    static MAP: OnceLock<BTreeMap<ImageDescriptor, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| {
        OPENCL_IMAGE_TYPES
            .iter()
            .map(|&(name, desc)| (desc, name))
            .collect()
    })
}

/// Descriptor for an OpenCL image type name such as `image2d_t`.
pub fn lookup_image_type(name: &str) -> Option<ImageDescriptor> {
    by_name().get(name).copied()
}

/// OpenCL name of `descriptor`, if it is one of the named shapes.
pub fn image_type_name(descriptor: &ImageDescriptor) -> Option<&'static str> {
    by_descriptor().get(descriptor).copied()
}

/// Every known name, in table order.
pub fn image_type_names() -> impl Iterator<Item = &'static str> {
    OPENCL_IMAGE_TYPES.iter().map(|&(name, _)| name)
}

/// Every named descriptor, ordered by descriptor.
pub fn image_types_by_descriptor() -> impl Iterator<Item = (ImageDescriptor, &'static str)> {
    by_descriptor().iter().map(|(&desc, &name)| (desc, name))
}
