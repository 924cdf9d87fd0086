//! Type table for a SPIR-V style kernel IR.
//!
//! Holds every type entity of a module (scalars, vectors, pointers,
//! arrays, structs, functions, images and the opaque kernel types), keyed
//! by module-scoped [`Id`].
//!
//! # Lifecycle
//!
//! Types may refer to each other in any order, including cyclically. A
//! module is loaded in two steps: [`TypeTable::declare`] every result id,
//! then [`TypeTable::complete`] each one from its operand words.
//! [`TypeTable::decode`] does both for a whole record stream. Once built,
//! the table is read through [`TypeRef`] views and is `Send + Sync`.
//!
//! # Engines
//!
//! - Validation: [`TypeTable::validate`], tuned with [`ValidationFlags`]
//! - Capabilities: [`required_capabilities`], [`TypeTable::module_capabilities`]
//! - OpenCL image names: [`lookup_image_type`], [`image_type_name`]
//! - Diagnostics: [`TypeTable::format_type`]
//!
//! # Tracing
//!
//! - `RUST_LOG=spv_types=debug` - table construction and validation
//! - `RUST_LOG=spv_types=trace` - every declaration and capability

mod capability;
mod data;
mod decode;
mod error;
mod flags;
mod format;
mod image_names;
mod query;
mod table;
mod validate;

pub use capability::required_capabilities;
pub use data::{
    ArrayType, FloatType, FunctionType, ImageDescriptor, ImageType, IntType, OpaqueType,
    PipeType, PointerType, SampledImageType, StructType, TypeData, VectorType,
};
pub use decode::TypeRecord;
pub use error::{ErrorKind, TypeError, Violation};
pub use flags::ValidationFlags;
pub use image_names::{
    image_type_name, image_type_names, image_types_by_descriptor, lookup_image_type,
    OPENCL_IMAGE_TYPES,
};
pub use query::{ConstantValues, TypeRef};
pub use table::{TypeEntry, TypeState, TypeTable};

pub use spv_ir::{AccessQualifier, Capability, Dim, Id, ImageFormat, Op, StorageClass, Word};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

// Tables are built by one thread and then shared read-only.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeTable>();
};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ImageDescriptor, TypeState};
    use spv_ir::static_assert_size;
    // Four words (16) + dim (1) + format (1), padded to 4.
    static_assert_size!(ImageDescriptor, 20);
    static_assert_size!(TypeState, 1);
}
