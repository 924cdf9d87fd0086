#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::ImageDescriptor;
use pretty_assertions::assert_eq;
use spv_ir::{Dim, Id, ImageFormat, Op, StorageClass};

fn id(raw: u32) -> Id {
    Id::from_raw(raw)
}

fn caps(table: &TypeTable, raw: u32) -> Vec<Capability> {
    table.lookup(id(raw)).unwrap().required_capabilities()
}

#[test]
fn scalars_need_nothing() {
    let mut t = TypeTable::new();
    t.define_int(id(1), 32, true).unwrap();
    t.define_float(id(2), 16).unwrap();
    t.define_struct(id(3), &[id(1)], "").unwrap();
    for raw in 1..=3 {
        assert_eq!(caps(&t, raw), Vec::<Capability>::new());
    }
}

#[test]
fn pointer_capabilities() {
    let mut t = TypeTable::new();
    t.define_float(id(1), 16).unwrap();
    t.define_float(id(2), 32).unwrap();
    t.define_pointer(id(3), StorageClass::CrossWorkgroup, id(1))
        .unwrap();
    t.define_pointer(id(4), StorageClass::Generic, id(2)).unwrap();

    assert_eq!(
        caps(&t, 3),
        vec![
            Capability::Addresses,
            Capability::Float16Buffer,
            Capability::Kernel
        ]
    );
    assert_eq!(
        caps(&t, 4),
        vec![Capability::Addresses, Capability::GenericPointer]
    );
}

#[test]
fn pointer_to_declared_element() {
    let mut t = TypeTable::new();
    t.declare(Op::Float, id(1)).unwrap();
    t.define_pointer(id(2), StorageClass::Private, id(1)).unwrap();
    assert_eq!(caps(&t, 2), vec![Capability::Addresses, Capability::Shader]);
}

#[test]
fn wide_vectors_need_vector16() {
    let mut t = TypeTable::new();
    t.define_int(id(1), 8, false).unwrap();
    t.define_vector(id(2), id(1), 8).unwrap();
    t.define_vector(id(3), id(1), 16).unwrap();
    assert_eq!(caps(&t, 2), Vec::<Capability>::new());
    assert_eq!(caps(&t, 3), vec![Capability::Vector16]);
}

#[test]
fn image_capabilities() {
    let mut t = TypeTable::new();
    t.define_void(id(1)).unwrap();
    let plain = ImageDescriptor::new(Dim::Dim2D, 0, 0, 0, 0, ImageFormat::Unknown);
    let msaa = ImageDescriptor::new(Dim::Dim2D, 0, 0, 1, 0, ImageFormat::Unknown);
    t.define_image(id(2), id(1), plain, Some(AccessQualifier::ReadOnly))
        .unwrap();
    t.define_image(id(3), id(1), plain, Some(AccessQualifier::ReadWrite))
        .unwrap();
    t.define_image(id(4), id(1), msaa, None).unwrap();

    assert_eq!(caps(&t, 2), vec![Capability::ImageBasic]);
    assert_eq!(
        caps(&t, 3),
        vec![Capability::ImageBasic, Capability::ImageReadWrite]
    );
    // An absent qualifier reads as ReadWrite but is not declared as such.
    assert_eq!(
        caps(&t, 4),
        vec![Capability::ImageBasic, Capability::ImageMipmap]
    );
}

#[test]
fn kernel_object_capabilities() {
    let mut t = TypeTable::new();
    t.define_pipe(id(1), AccessQualifier::ReadOnly).unwrap();
    t.define_marker(Op::PipeStorage, id(2)).unwrap();
    t.define_marker(Op::NamedBarrier, id(3)).unwrap();
    t.define_marker(Op::Queue, id(4)).unwrap();
    assert_eq!(caps(&t, 1), vec![Capability::Pipes]);
    assert_eq!(caps(&t, 2), vec![Capability::PipeStorage]);
    assert_eq!(caps(&t, 3), vec![Capability::NamedBarrier]);
    assert_eq!(caps(&t, 4), Vec::<Capability>::new());
}

#[test]
fn module_union_is_deduplicated_in_order() {
    let mut t = TypeTable::new();
    t.define_int(id(1), 32, true).unwrap();
    t.define_pointer(id(2), StorageClass::Function, id(1)).unwrap();
    t.define_pipe(id(3), AccessQualifier::WriteOnly).unwrap();
    t.define_pointer(id(4), StorageClass::Workgroup, id(1)).unwrap();
    assert_eq!(
        t.module_capabilities(),
        vec![Capability::Addresses, Capability::Kernel, Capability::Pipes]
    );
}

#[test]
fn declared_entries_require_nothing() {
    let mut t = TypeTable::new();
    t.declare(Op::Image, id(1)).unwrap();
    t.declare(Op::Pointer, id(2)).unwrap();
    t.declare(Op::Pipe, id(3)).unwrap();
    assert_eq!(t.module_capabilities(), Vec::<Capability>::new());

    t.complete(id(3), &[AccessQualifier::ReadOnly.word()]).unwrap();
    assert_eq!(t.module_capabilities(), vec![Capability::Pipes]);
}
