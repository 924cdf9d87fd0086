//! Type entity payloads.
//!
//! `TypeData` is the closed set of type kinds. Each payload struct holds the
//! operand fields of one kind; kinds with no operands (`Void`, `Bool`, and
//! the opaque markers) carry nothing.
//!
//! Referenced types are held by [`Id`], never by pointer. The owning
//! [`TypeTable`](crate::TypeTable) resolves them, which lets a struct refer
//! to a pointer that refers back to the struct.

use spv_ir::{
    encode_literal_string, literal_string_word_len, AccessQualifier, Dim, Id, ImageFormat, Op,
    StorageClass, Word,
};

/// `OpTypeInt`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntType {
    pub width: u32,
    pub signed: bool,
}

/// `OpTypeFloat`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatType {
    pub width: u32,
}

/// `OpTypePointer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerType {
    pub storage_class: StorageClass,
    pub element: Id,
}

/// `OpTypeVector`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorType {
    pub component: Id,
    pub count: u32,
}

impl VectorType {
    /// Whether `index` selects a component.
    #[inline]
    pub fn is_valid_index(&self, index: u32) -> bool {
        index < self.count
    }
}

/// `OpTypeArray`.
///
/// `length` names a constant in the module's value table, not a type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayType {
    pub element: Id,
    pub length: Id,
}

/// `OpTypeStruct`.
///
/// `name` and `packed` come from debug info and decorations, not from the
/// type's own operands, so they do not count toward the word count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructType {
    pub members: Vec<Id>,
    pub name: String,
    pub packed: bool,
}

/// `OpTypeFunction`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionType {
    pub return_type: Id,
    pub parameters: Vec<Id>,
}

/// `OpTypeOpaque`, a named type with unknown layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueType {
    pub name: String,
}

/// The shape of an image, everything but its sampled type and access.
///
/// Ordered lexicographically by field, in declaration order.
/// `depth`, `arrayed`, `ms` and `sampled` hold the raw operand words so
/// out-of-range values survive until validation reports them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDescriptor {
    pub dim: Dim,
    pub depth: u32,
    pub arrayed: u32,
    pub ms: u32,
    pub sampled: u32,
    pub format: ImageFormat,
}

impl ImageDescriptor {
    /// Operand word standing in for a field that has not been read yet.
    pub const UNKNOWN: u32 = u32::MAX;

    /// The descriptor of a declared image: every flag field unknown.
    ///
    /// `dim` has no out-of-range value and stays `Dim1D`.
    pub const PLACEHOLDER: Self = ImageDescriptor {
        dim: Dim::Dim1D,
        depth: Self::UNKNOWN,
        arrayed: Self::UNKNOWN,
        ms: Self::UNKNOWN,
        sampled: Self::UNKNOWN,
        format: ImageFormat::Unknown,
    };

    pub const fn new(
        dim: Dim,
        depth: u32,
        arrayed: u32,
        ms: u32,
        sampled: u32,
        format: ImageFormat,
    ) -> Self {
        ImageDescriptor {
            dim,
            depth,
            arrayed,
            ms,
            sampled,
            format,
        }
    }
}

/// `OpTypeImage`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageType {
    pub sampled_type: Id,
    pub descriptor: ImageDescriptor,
    pub access: Option<AccessQualifier>,
}

impl ImageType {
    #[inline]
    pub fn has_access_qualifier(&self) -> bool {
        self.access.is_some()
    }

    /// The access qualifier, `ReadWrite` when the operand is absent.
    #[inline]
    pub fn access_qualifier(&self) -> AccessQualifier {
        self.access.unwrap_or(AccessQualifier::ReadWrite)
    }
}

/// `OpTypeSampledImage`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledImageType {
    pub image: Id,
}

/// `OpTypePipe`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipeType {
    pub access: AccessQualifier,
}

/// Payload of a type entity, one variant per type opcode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    Void,
    Bool,
    Int(IntType),
    Float(FloatType),
    Vector(VectorType),
    Image(ImageType),
    Sampler,
    SampledImage(SampledImageType),
    Array(ArrayType),
    Struct(StructType),
    Opaque(OpaqueType),
    Pointer(PointerType),
    Function(FunctionType),
    Event,
    DeviceEvent,
    ReserveId,
    Queue,
    Pipe(PipeType),
    PipeStorage,
    NamedBarrier,
}

impl TypeData {
    /// The state of a declared-but-not-completed entity of kind `op`.
    pub fn placeholder(op: Op) -> Self {
        match op {
            Op::Void => TypeData::Void,
            Op::Bool => TypeData::Bool,
            Op::Int => TypeData::Int(IntType::default()),
            Op::Float => TypeData::Float(FloatType::default()),
            Op::Vector => TypeData::Vector(VectorType::default()),
            Op::Image => TypeData::Image(ImageType {
                descriptor: ImageDescriptor::PLACEHOLDER,
                ..ImageType::default()
            }),
            Op::Sampler => TypeData::Sampler,
            Op::SampledImage => TypeData::SampledImage(SampledImageType::default()),
            Op::Array => TypeData::Array(ArrayType::default()),
            Op::Struct => TypeData::Struct(StructType::default()),
            Op::Opaque => TypeData::Opaque(OpaqueType::default()),
            Op::Pointer => TypeData::Pointer(PointerType {
                storage_class: StorageClass::Private,
                element: Id::NONE,
            }),
            Op::Function => TypeData::Function(FunctionType::default()),
            Op::Event => TypeData::Event,
            Op::DeviceEvent => TypeData::DeviceEvent,
            Op::ReserveId => TypeData::ReserveId,
            Op::Queue => TypeData::Queue,
            Op::Pipe => TypeData::Pipe(PipeType {
                access: AccessQualifier::ReadOnly,
            }),
            Op::PipeStorage => TypeData::PipeStorage,
            Op::NamedBarrier => TypeData::NamedBarrier,
        }
    }

    pub const fn op(&self) -> Op {
        match self {
            TypeData::Void => Op::Void,
            TypeData::Bool => Op::Bool,
            TypeData::Int(_) => Op::Int,
            TypeData::Float(_) => Op::Float,
            TypeData::Vector(_) => Op::Vector,
            TypeData::Image(_) => Op::Image,
            TypeData::Sampler => Op::Sampler,
            TypeData::SampledImage(_) => Op::SampledImage,
            TypeData::Array(_) => Op::Array,
            TypeData::Struct(_) => Op::Struct,
            TypeData::Opaque(_) => Op::Opaque,
            TypeData::Pointer(_) => Op::Pointer,
            TypeData::Function(_) => Op::Function,
            TypeData::Event => Op::Event,
            TypeData::DeviceEvent => Op::DeviceEvent,
            TypeData::ReserveId => Op::ReserveId,
            TypeData::Queue => Op::Queue,
            TypeData::Pipe(_) => Op::Pipe,
            TypeData::PipeStorage => Op::PipeStorage,
            TypeData::NamedBarrier => Op::NamedBarrier,
        }
    }

    /// Bit width of a scalar int or float.
    pub const fn bit_width(&self) -> Option<u32> {
        match self {
            TypeData::Int(t) => Some(t.width),
            TypeData::Float(t) => Some(t.width),
            _ => None,
        }
    }

    /// Type ids this entity refers to directly, in operand order.
    ///
    /// An array's length is a value id and is not included.
    pub fn references(&self) -> Vec<Id> {
        match self {
            TypeData::Pointer(p) => vec![p.element],
            TypeData::Vector(v) => vec![v.component],
            TypeData::Array(a) => vec![a.element],
            TypeData::Struct(s) => s.members.clone(),
            TypeData::Function(f) => {
                let mut ids = Vec::with_capacity(f.parameters.len() + 1);
                ids.push(f.return_type);
                ids.extend_from_slice(&f.parameters);
                ids
            }
            TypeData::Image(img) => vec![img.sampled_type],
            TypeData::SampledImage(s) => vec![s.image],
            _ => Vec::new(),
        }
    }

    /// Operand words after the result id, as they appear in a record.
    pub fn operand_words(&self) -> Vec<Word> {
        match self {
            TypeData::Int(t) => vec![t.width, Word::from(t.signed)],
            TypeData::Float(t) => vec![t.width],
            TypeData::Vector(v) => vec![v.component.raw(), v.count],
            TypeData::Image(img) => {
                let d = &img.descriptor;
                let mut words = vec![
                    img.sampled_type.raw(),
                    d.dim.word(),
                    d.depth,
                    d.arrayed,
                    d.ms,
                    d.sampled,
                    d.format.word(),
                ];
                if let Some(access) = img.access {
                    words.push(access.word());
                }
                words
            }
            TypeData::SampledImage(s) => vec![s.image.raw()],
            TypeData::Array(a) => vec![a.element.raw(), a.length.raw()],
            TypeData::Struct(s) => s.members.iter().map(|m| m.raw()).collect(),
            TypeData::Opaque(o) => encode_literal_string(&o.name),
            TypeData::Pointer(p) => vec![p.storage_class.word(), p.element.raw()],
            TypeData::Function(f) => std::iter::once(f.return_type)
                .chain(f.parameters.iter().copied())
                .map(Id::raw)
                .collect(),
            TypeData::Pipe(p) => vec![p.access.word()],
            TypeData::Void
            | TypeData::Bool
            | TypeData::Sampler
            | TypeData::Event
            | TypeData::DeviceEvent
            | TypeData::ReserveId
            | TypeData::Queue
            | TypeData::PipeStorage
            | TypeData::NamedBarrier => Vec::new(),
        }
    }

    /// The word count these fields serialize to: opcode word, result id,
    /// then the operands.
    pub fn word_count(&self) -> usize {
        let operands = match self {
            TypeData::Struct(s) => s.members.len(),
            TypeData::Function(f) => 1 + f.parameters.len(),
            TypeData::Opaque(o) => literal_string_word_len(&o.name),
            TypeData::Image(img) => 7 + usize::from(img.access.is_some()),
            other => other.operand_words().len(),
        };
        2 + operands
    }
}

#[cfg(test)]
mod tests;
