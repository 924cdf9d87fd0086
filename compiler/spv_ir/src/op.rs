//! Type-defining opcodes.
//!
//! `Op` is the op-kind discriminant of every entry in the type table. It is
//! a closed set: the twenty `OpType*` instructions the table understands.
//! Opcode numbers follow the SPIR-V unified grammar.

use std::fmt;

use crate::WordError;

/// The op-kind of a type entity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Op {
    Void,
    Bool,
    Int,
    Float,
    Vector,
    Image,
    Sampler,
    SampledImage,
    Array,
    Struct,
    Opaque,
    Pointer,
    Function,
    Event,
    DeviceEvent,
    ReserveId,
    Queue,
    Pipe,
    PipeStorage,
    NamedBarrier,
}

impl Op {
    /// Every op-kind, in opcode order.
    pub const ALL: [Self; 20] = [
        Self::Void,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Vector,
        Self::Image,
        Self::Sampler,
        Self::SampledImage,
        Self::Array,
        Self::Struct,
        Self::Opaque,
        Self::Pointer,
        Self::Function,
        Self::Event,
        Self::DeviceEvent,
        Self::ReserveId,
        Self::Queue,
        Self::Pipe,
        Self::PipeStorage,
        Self::NamedBarrier,
    ];

    /// The SPIR-V opcode number.
    pub const fn opcode(self) -> u16 {
        match self {
            Self::Void => 19,
            Self::Bool => 20,
            Self::Int => 21,
            Self::Float => 22,
            Self::Vector => 23,
            Self::Image => 25,
            Self::Sampler => 26,
            Self::SampledImage => 27,
            Self::Array => 28,
            Self::Struct => 30,
            Self::Opaque => 31,
            Self::Pointer => 32,
            Self::Function => 33,
            Self::Event => 34,
            Self::DeviceEvent => 35,
            Self::ReserveId => 36,
            Self::Queue => 37,
            Self::Pipe => 38,
            Self::PipeStorage => 322,
            Self::NamedBarrier => 327,
        }
    }

    /// Decode an opcode number.
    pub fn from_opcode(opcode: u16) -> Result<Self, WordError> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.opcode() == opcode)
            .ok_or(WordError::NotATypeOpcode(opcode))
    }

    /// Instruction name without the `Op` prefix, e.g. `TypeInt`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "TypeVoid",
            Self::Bool => "TypeBool",
            Self::Int => "TypeInt",
            Self::Float => "TypeFloat",
            Self::Vector => "TypeVector",
            Self::Image => "TypeImage",
            Self::Sampler => "TypeSampler",
            Self::SampledImage => "TypeSampledImage",
            Self::Array => "TypeArray",
            Self::Struct => "TypeStruct",
            Self::Opaque => "TypeOpaque",
            Self::Pointer => "TypePointer",
            Self::Function => "TypeFunction",
            Self::Event => "TypeEvent",
            Self::DeviceEvent => "TypeDeviceEvent",
            Self::ReserveId => "TypeReserveId",
            Self::Queue => "TypeQueue",
            Self::Pipe => "TypePipe",
            Self::PipeStorage => "TypePipeStorage",
            Self::NamedBarrier => "TypeNamedBarrier",
        }
    }

    /// Total word count (opcode word and result id included) for kinds
    /// whose layout has no variable-length tail.
    ///
    /// Returns `None` for `Struct`, `Function`, `Opaque` and `Image`, whose
    /// size depends on members, parameters, the name, or the optional
    /// access qualifier.
    pub const fn fixed_word_count(self) -> Option<u16> {
        match self {
            Self::Void
            | Self::Bool
            | Self::Sampler
            | Self::Event
            | Self::DeviceEvent
            | Self::ReserveId
            | Self::Queue
            | Self::PipeStorage
            | Self::NamedBarrier => Some(2),
            Self::Float | Self::SampledImage | Self::Pipe => Some(3),
            Self::Int | Self::Vector | Self::Array | Self::Pointer => Some(4),
            Self::Struct | Self::Function | Self::Opaque | Self::Image => None,
        }
    }

    /// Minimum total word count for this kind.
    pub const fn min_word_count(self) -> u16 {
        match self.fixed_word_count() {
            Some(wc) => wc,
            None => match self {
                // Return type, or a name literal of at least one word.
                Self::Function | Self::Opaque => 3,
                Self::Image => 9,
                _ => 2,
            },
        }
    }

    /// Payload-free kinds: the entity is fully described by its op-kind.
    pub const fn is_marker(self) -> bool {
        matches!(
            self,
            Self::Sampler
                | Self::Event
                | Self::DeviceEvent
                | Self::ReserveId
                | Self::Queue
                | Self::PipeStorage
                | Self::NamedBarrier
        )
    }

    /// Struct, array or vector.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Struct | Self::Array | Self::Vector)
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op::{}", self.name())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op{}", self.name())
    }
}
