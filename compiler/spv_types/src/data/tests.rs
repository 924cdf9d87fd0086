use super::*;
use pretty_assertions::assert_eq;

fn id(raw: u32) -> Id {
    Id::from_raw(raw)
}

#[test]
fn placeholder_matches_op() {
    for &op in &Op::ALL {
        assert_eq!(TypeData::placeholder(op).op(), op);
    }
}

#[test]
fn placeholder_is_default_valued() {
    assert_eq!(
        TypeData::placeholder(Op::Int),
        TypeData::Int(IntType {
            width: 0,
            signed: false
        })
    );
    assert_eq!(
        TypeData::placeholder(Op::Pipe),
        TypeData::Pipe(PipeType {
            access: AccessQualifier::ReadOnly
        })
    );
    let TypeData::Image(img) = TypeData::placeholder(Op::Image) else {
        panic!("image placeholder is not an image");
    };
    assert_eq!(img.sampled_type, Id::NONE);
    assert_eq!(img.access, None);
    assert_eq!(img.descriptor, ImageDescriptor::PLACEHOLDER);
    // Not mistaken for a real image1d_t.
    assert_eq!(crate::image_type_name(&img.descriptor), None);
}

#[test]
fn references_in_operand_order() {
    let f = TypeData::Function(FunctionType {
        return_type: id(1),
        parameters: vec![id(2), id(3)],
    });
    assert_eq!(f.references(), vec![id(1), id(2), id(3)]);

    let a = TypeData::Array(ArrayType {
        element: id(4),
        length: id(9),
    });
    assert_eq!(a.references(), vec![id(4)]);

    assert_eq!(TypeData::Queue.references(), Vec::<Id>::new());
}

#[test]
fn fixed_word_counts_agree_with_op() {
    let samples = [
        TypeData::Void,
        TypeData::Int(IntType {
            width: 32,
            signed: true,
        }),
        TypeData::Float(FloatType { width: 16 }),
        TypeData::Pointer(PointerType {
            storage_class: StorageClass::Function,
            element: id(1),
        }),
        TypeData::Vector(VectorType {
            component: id(1),
            count: 4,
        }),
        TypeData::SampledImage(SampledImageType { image: id(2) }),
        TypeData::Pipe(PipeType {
            access: AccessQualifier::WriteOnly,
        }),
        TypeData::NamedBarrier,
    ];
    for data in samples {
        let fixed = data.op().fixed_word_count().map(usize::from);
        assert_eq!(Some(data.word_count()), fixed, "{:?}", data.op());
        assert_eq!(data.operand_words().len() + 2, data.word_count());
    }
}

#[test]
fn variable_word_counts() {
    let s = TypeData::Struct(StructType {
        members: vec![id(1), id(2), id(3)],
        name: "ignored".to_owned(),
        packed: true,
    });
    assert_eq!(s.word_count(), 5);

    let o = TypeData::Opaque(OpaqueType {
        name: "opencl.event_t".to_owned(),
    });
    // 14 bytes plus terminator is 4 words.
    assert_eq!(o.word_count(), 6);

    let mut img = ImageType {
        sampled_type: id(1),
        descriptor: ImageDescriptor::default(),
        access: None,
    };
    assert_eq!(TypeData::Image(img).word_count(), 9);
    img.access = Some(AccessQualifier::ReadOnly);
    assert_eq!(TypeData::Image(img).word_count(), 10);
}

#[test]
fn image_access_defaults_to_read_write() {
    let img = ImageType::default();
    assert!(!img.has_access_qualifier());
    assert_eq!(img.access_qualifier(), AccessQualifier::ReadWrite);
}

#[test]
fn descriptor_orders_by_dim_first() {
    let a = ImageDescriptor::new(Dim::Dim1D, 1, 1, 1, 0, ImageFormat::Unknown);
    let b = ImageDescriptor::new(Dim::Dim2D, 0, 0, 0, 0, ImageFormat::Unknown);
    assert!(a < b);

    let c = ImageDescriptor::new(Dim::Dim2D, 0, 1, 0, 0, ImageFormat::Unknown);
    let d = ImageDescriptor::new(Dim::Dim2D, 1, 0, 0, 0, ImageFormat::Unknown);
    assert!(c < d);
}

#[test]
fn vector_index_bounds() {
    let v = VectorType {
        component: id(1),
        count: 3,
    };
    assert!(v.is_valid_index(2));
    assert!(!v.is_valid_index(3));
}
