#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::{lookup_image_type, AccessQualifier, Op, StorageClass};
use pretty_assertions::assert_eq;

fn id(raw: u32) -> Id {
    Id::from_raw(raw)
}

#[test]
fn scalars() {
    let mut t = TypeTable::new();
    t.define_int(id(1), 32, true).unwrap();
    t.define_int(id(2), 8, false).unwrap();
    t.define_float(id(3), 16).unwrap();
    t.define_void(id(4)).unwrap();
    t.define_bool(id(5)).unwrap();
    assert_eq!(t.format_type(id(1)), "i32");
    assert_eq!(t.format_type(id(2)), "u8");
    assert_eq!(t.format_type(id(3)), "f16");
    assert_eq!(t.format_type(id(4)), "void");
    assert_eq!(t.format_type(id(5)), "bool");
}

#[test]
fn derived_types() {
    let mut t = TypeTable::new();
    t.define_int(id(1), 32, true).unwrap();
    t.define_float(id(2), 32).unwrap();
    t.define_void(id(3)).unwrap();
    t.define_pointer(id(4), StorageClass::Private, id(1)).unwrap();
    t.define_vector(id(5), id(2), 4).unwrap();
    t.define_array(id(6), id(2), id(9)).unwrap();
    t.define_function(id(7), id(3), &[id(1)]).unwrap();
    t.define_struct(id(8), &[id(1), id(4)], "").unwrap();

    assert_eq!(t.format_type(id(4)), "*Private i32");
    assert_eq!(t.format_type(id(5)), "<4 x f32>");
    assert_eq!(t.format_type(id(6)), "[f32; %9]");
    assert_eq!(t.format_type(id(7)), "fn(i32) -> void");
    assert_eq!(t.format_type(id(8)), "struct { i32, *Private i32 }");
    assert_eq!(t.lookup(id(8)).unwrap().format(), t.format_type(id(8)));
}

#[test]
fn named_and_recursive_structs() {
    let mut t = TypeTable::new();
    t.declare(Op::Struct, id(1)).unwrap();
    t.declare(Op::Pointer, id(2)).unwrap();
    t.complete(id(2), &[StorageClass::Function.word(), 1]).unwrap();
    t.complete(id(1), &[2]).unwrap();

    assert_eq!(t.format_type(id(1)), "struct { *Function %1 }");
    assert_eq!(t.format_type(id(2)), "*Function struct { %2 }");

    t.set_struct_name(id(1), "Node").unwrap();
    assert_eq!(t.format_type(id(1)), "struct Node");
    assert_eq!(t.format_type(id(2)), "*Function struct Node");

    t.set_packed(id(1), true).unwrap();
    assert_eq!(t.format_type(id(1)), "packed struct Node");
}

#[test]
fn images_and_kernel_objects() {
    let mut t = TypeTable::new();
    t.define_void(id(1)).unwrap();
    let desc = lookup_image_type("image2d_array_t").unwrap();
    t.define_image(id(2), id(1), desc, Some(AccessQualifier::ReadOnly))
        .unwrap();
    t.define_sampled_image(id(3), id(2)).unwrap();
    t.define_pipe(id(4), AccessQualifier::WriteOnly).unwrap();
    t.define_marker(Op::ReserveId, id(5)).unwrap();
    t.define_opaque(id(6), "opencl.sampler_t").unwrap();

    let image = "image(2D, depth=0, arrayed=1, ms=0, sampled=0, Unknown, ReadOnly)";
    assert_eq!(t.format_type(id(2)), image);
    assert_eq!(t.format_type(id(3)), format!("sampled_image({image})"));
    assert_eq!(t.format_type(id(4)), "pipe(WriteOnly)");
    assert_eq!(t.format_type(id(5)), "reserve_id");
    assert_eq!(t.format_type(id(6)), "opaque opencl.sampler_t");
}

#[test]
fn unknown_and_declared_ids() {
    let mut t = TypeTable::new();
    t.declare(Op::Int, id(1)).unwrap();
    assert_eq!(t.format_type(id(1)), "%1");
    assert_eq!(t.format_type(id(7)), "%7?");
}

#[test]
fn format_into_appends() {
    let mut t = TypeTable::new();
    t.define_float(id(1), 64).unwrap();
    t.define_vector(id(2), id(1), 2).unwrap();
    let mut buf = String::from("value: ");
    t.format_type_into(id(2), &mut buf);
    assert_eq!(buf, "value: <2 x f64>");
}
