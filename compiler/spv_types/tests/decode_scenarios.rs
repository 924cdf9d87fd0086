//! Whole-module scenarios: decode a record stream, then query, validate
//! and collect capabilities the way the optimizer and code emitter do.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use spv_ir::encode_literal_string;
use spv_types::{
    AccessQualifier, Capability, Dim, ErrorKind, Id, ImageFormat, Op, StorageClass, TypeError,
    TypeRecord, TypeState, TypeTable, ValidationFlags,
};

fn id(raw: u32) -> Id {
    Id::from_raw(raw)
}

fn rec(op: Op, result: u32, operands: &[u32]) -> TypeRecord {
    TypeRecord::new(op, id(result), operands.to_vec())
}

#[test]
fn scalar_pointer_vector_module() {
    let records = [
        rec(Op::Int, 1, &[32, 1]),
        rec(Op::Float, 2, &[32]),
        rec(Op::Pointer, 3, &[StorageClass::Private.word(), 1]),
        rec(Op::Vector, 4, &[2, 4]),
    ];
    let table = TypeTable::decode(&records).expect("module decodes");
    assert_eq!(table.len(), 4);

    let ptr_caps = table.lookup(id(3)).unwrap().required_capabilities();
    assert!(ptr_caps.contains(&Capability::Addresses));
    assert!(ptr_caps.contains(&StorageClass::Private.capability()));
    assert!(!ptr_caps.contains(&Capability::Float16Buffer));

    assert!(table
        .lookup(id(4))
        .unwrap()
        .required_capabilities()
        .is_empty());

    table.validate_all(ValidationFlags::DEFAULT).unwrap();
}

#[test]
fn recursive_struct_resolves_after_completion() {
    let mut table = TypeTable::new();
    table.declare(Op::Int, id(1)).unwrap();
    table.declare(Op::Struct, id(2)).unwrap();
    table.declare(Op::Pointer, id(3)).unwrap();
    table.complete(id(1), &[64, 0]).unwrap();

    // The pointer is completed while its pointee is only declared.
    table
        .complete(id(3), &[StorageClass::CrossWorkgroup.word(), 2])
        .unwrap();
    assert_eq!(
        table.validate(id(3), ValidationFlags::DEFAULT),
        Err(TypeError::Incomplete { id: id(2) })
    );

    table.complete(id(2), &[1, 3]).unwrap();
    table.set_struct_name(id(2), "list_node").unwrap();

    let ptr = table.lookup(id(3)).unwrap();
    let node = ptr.pointer_element_type();
    assert_eq!(node.id(), id(2));
    assert_eq!(node.state(), TypeState::Completed);
    assert_eq!(node.struct_member_count(), 2);
    assert_eq!(node.struct_member_type(1), ptr);
    assert_eq!(ptr.validate(), Ok(()));
    assert_eq!(table.format_type(id(3)), "*CrossWorkgroup struct list_node");
}

#[test]
fn kernel_signature_module() {
    // void kernel(global float4*, read_only image2d_t, sampler_t, pipe int, queue_t)
    let records = [
        rec(Op::Void, 1, &[]),
        rec(Op::Float, 2, &[32]),
        rec(Op::Vector, 3, &[2, 4]),
        rec(Op::Pointer, 4, &[StorageClass::CrossWorkgroup.word(), 3]),
        rec(
            Op::Image,
            5,
            &[
                1,
                Dim::Dim2D.word(),
                0,
                0,
                0,
                0,
                ImageFormat::Unknown.word(),
                AccessQualifier::ReadOnly.word(),
            ],
        ),
        rec(Op::Sampler, 6, &[]),
        rec(Op::SampledImage, 7, &[5]),
        rec(Op::Pipe, 8, &[AccessQualifier::ReadOnly.word()]),
        rec(Op::Queue, 9, &[]),
        rec(Op::Function, 10, &[1, 4, 5, 6, 8, 9]),
    ];
    let table = TypeTable::decode(&records).unwrap();
    table.validate_all(ValidationFlags::DEFAULT).unwrap();

    let image = table.lookup(id(5)).unwrap();
    assert!(image.is_ocl_image());
    assert_eq!(
        spv_types::image_type_name(&image.image_descriptor()),
        Some("image2d_t")
    );

    let f = table.lookup(id(10)).unwrap();
    assert_eq!(f.function_parameter_count(), 5);
    assert!(f.function_parameter_type(0).pointer_element_type().is_vector_float());
    assert_eq!(f.word_count(), 8);

    assert_eq!(
        table.module_capabilities(),
        vec![
            Capability::Addresses,
            Capability::Kernel,
            Capability::ImageBasic,
            Capability::Pipes,
        ]
    );
}

#[test]
fn opaque_names_survive_decoding() {
    let records = [rec(
        Op::Opaque,
        1,
        &encode_literal_string("opencl.intel_sub_group_avc_mce_payload_t"),
    )];
    let table = TypeTable::decode(&records).unwrap();
    let opaque = table.lookup(id(1)).unwrap();
    assert_eq!(opaque.opaque_name(), "opencl.intel_sub_group_avc_mce_payload_t");
    assert_eq!(opaque.validate(), Ok(()));
}

#[test]
fn structural_errors_abort_decoding() {
    let bad_width = [rec(Op::Int, 1, &[32, 7])];
    let err = TypeTable::decode(&bad_width).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);

    let truncated = [rec(Op::Vector, 1, &[])];
    assert!(matches!(
        TypeTable::decode(&truncated),
        Err(TypeError::MissingOperand {
            op: Op::Vector,
            operand: "component type",
            ..
        })
    ));
}

#[test]
fn validation_failure_names_offender() {
    let records = [
        rec(Op::Int, 1, &[128, 1]),
        rec(Op::Struct, 2, &[1, 1]),
        rec(Op::Pointer, 3, &[StorageClass::Function.word(), 2]),
    ];
    let table = TypeTable::decode(&records).unwrap();
    let err = table.validate(id(3), ValidationFlags::DEFAULT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(
        err.to_string(),
        "OpTypeInt %1 is invalid: integer width 128 is outside 2..=64"
    );
}

#[test]
fn tables_are_shared_across_threads() {
    let records = [
        rec(Op::Float, 1, &[16]),
        rec(Op::Pointer, 2, &[StorageClass::Workgroup.word(), 1]),
    ];
    let table = TypeTable::decode(&records).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| table.module_capabilities()))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                vec![
                    Capability::Addresses,
                    Capability::Float16Buffer,
                    Capability::Kernel
                ]
            );
        }
    });
}
