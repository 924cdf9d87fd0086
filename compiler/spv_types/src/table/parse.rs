//! Operand layout of each type record.

use spv_ir::{
    decode_literal_string, AccessQualifier, Dim, Id, ImageFormat, Op, StorageClass, Word,
    WordError,
};

use crate::data::{
    ArrayType, FloatType, FunctionType, ImageDescriptor, ImageType, IntType, OpaqueType,
    PipeType, PointerType, SampledImageType, StructType, TypeData, VectorType,
};
use crate::{TypeError, TypeTable};

/// Cursor over the operand words of one record.
struct Operands<'a> {
    table: &'a TypeTable,
    id: Id,
    op: Op,
    words: &'a [Word],
}

impl Operands<'_> {
    fn word(&mut self, operand: &'static str) -> Result<Word, TypeError> {
        let (&first, rest) = self
            .words
            .split_first()
            .ok_or(TypeError::MissingOperand {
                id: self.id,
                op: self.op,
                operand,
            })?;
        self.words = rest;
        Ok(first)
    }

    /// A type id that must already be declared.
    fn type_id(&mut self, operand: &'static str) -> Result<Id, TypeError> {
        let id = Id::from_raw(self.word(operand)?);
        if self.table.contains(id) {
            Ok(id)
        } else {
            Err(TypeError::Unresolved(id))
        }
    }

    /// Every remaining word as a declared type id.
    fn type_ids(&mut self) -> Result<Vec<Id>, TypeError> {
        let ids = self
            .words
            .iter()
            .map(|&w| {
                let id = Id::from_raw(w);
                if self.table.contains(id) {
                    Ok(id)
                } else {
                    Err(TypeError::Unresolved(id))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.words = &[];
        Ok(ids)
    }

    fn decoded<T>(
        &mut self,
        operand: &'static str,
        decode: impl FnOnce(Word) -> Result<T, WordError>,
    ) -> Result<T, TypeError> {
        let word = self.word(operand)?;
        decode(word).map_err(|source| TypeError::BadWord {
            id: self.id,
            source,
        })
    }

    fn optional_access(&mut self) -> Result<Option<AccessQualifier>, TypeError> {
        if self.words.is_empty() {
            Ok(None)
        } else {
            self.decoded("access qualifier", AccessQualifier::from_word)
                .map(Some)
        }
    }

    fn literal_string(&mut self) -> Result<String, TypeError> {
        if self.words.is_empty() {
            return Err(TypeError::MissingOperand {
                id: self.id,
                op: self.op,
                operand: "name",
            });
        }
        let words = self.words;
        let (name, used) = decode_literal_string(words).map_err(|source| TypeError::BadWord {
            id: self.id,
            source,
        })?;
        self.words = &words[used..];
        Ok(name)
    }
}

fn signedness(word: Word) -> Result<bool, WordError> {
    match word {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(WordError::UnknownEnum {
            kind: "Signedness",
            word,
        }),
    }
}

/// Build the payload of entity `id` of kind `op` from its operand words.
///
/// Words past the layout of a fixed-size kind are ignored here; they only
/// show up as a word count mismatch during validation.
pub(super) fn parse_operands(
    table: &TypeTable,
    id: Id,
    op: Op,
    words: &[Word],
) -> Result<TypeData, TypeError> {
    let mut ops = Operands {
        table,
        id,
        op,
        words,
    };
    let data = match op {
        Op::Void => TypeData::Void,
        Op::Bool => TypeData::Bool,
        Op::Int => TypeData::Int(IntType {
            width: ops.word("width")?,
            signed: ops.decoded("signedness", signedness)?,
        }),
        Op::Float => TypeData::Float(FloatType {
            width: ops.word("width")?,
        }),
        Op::Vector => TypeData::Vector(VectorType {
            component: ops.type_id("component type")?,
            count: ops.word("component count")?,
        }),
        Op::Image => {
            let sampled_type = ops.type_id("sampled type")?;
            let descriptor = ImageDescriptor {
                dim: ops.decoded("dim", Dim::from_word)?,
                depth: ops.word("depth")?,
                arrayed: ops.word("arrayed")?,
                ms: ops.word("ms")?,
                sampled: ops.word("sampled")?,
                format: ops.decoded("image format", ImageFormat::from_word)?,
            };
            TypeData::Image(ImageType {
                sampled_type,
                descriptor,
                access: ops.optional_access()?,
            })
        }
        Op::Sampler => TypeData::Sampler,
        Op::SampledImage => TypeData::SampledImage(SampledImageType {
            image: ops.type_id("image type")?,
        }),
        Op::Array => TypeData::Array(ArrayType {
            element: ops.type_id("element type")?,
            length: Id::from_raw(ops.word("length")?),
        }),
        Op::Struct => TypeData::Struct(StructType {
            members: ops.type_ids()?,
            ..StructType::default()
        }),
        Op::Opaque => TypeData::Opaque(OpaqueType {
            name: ops.literal_string()?,
        }),
        Op::Pointer => TypeData::Pointer(PointerType {
            storage_class: ops.decoded("storage class", StorageClass::from_word)?,
            element: ops.type_id("element type")?,
        }),
        Op::Function => TypeData::Function(FunctionType {
            return_type: ops.type_id("return type")?,
            parameters: ops.type_ids()?,
        }),
        Op::Event => TypeData::Event,
        Op::DeviceEvent => TypeData::DeviceEvent,
        Op::ReserveId => TypeData::ReserveId,
        Op::Queue => TypeData::Queue,
        Op::Pipe => TypeData::Pipe(PipeType {
            access: ops.decoded("access qualifier", AccessQualifier::from_word)?,
        }),
        Op::PipeStorage => TypeData::PipeStorage,
        Op::NamedBarrier => TypeData::NamedBarrier,
    };
    Ok(data)
}
