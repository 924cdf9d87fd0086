//! Typed constructors: declare and complete in one call.
//!
//! Each `define_*` encodes its fields into operand words and goes through
//! `complete`, so they are checked exactly like decoded records. A failed
//! define leaves the table as it was.

use spv_ir::{check_literal_string, encode_literal_string, AccessQualifier, Id, Op, StorageClass, Word};

use crate::data::ImageDescriptor;
use crate::{TypeError, TypeTable};

impl TypeTable {
    fn define(&mut self, op: Op, id: Id, operands: &[Word]) -> Result<Id, TypeError> {
        self.declare(op, id)?;
        if let Err(err) = self.complete(id, operands) {
            self.discard_last(id);
            return Err(err);
        }
        Ok(id)
    }

    pub fn define_void(&mut self, id: Id) -> Result<Id, TypeError> {
        self.define(Op::Void, id, &[])
    }

    pub fn define_bool(&mut self, id: Id) -> Result<Id, TypeError> {
        self.define(Op::Bool, id, &[])
    }

    pub fn define_int(&mut self, id: Id, width: u32, signed: bool) -> Result<Id, TypeError> {
        self.define(Op::Int, id, &[width, Word::from(signed)])
    }

    pub fn define_float(&mut self, id: Id, width: u32) -> Result<Id, TypeError> {
        self.define(Op::Float, id, &[width])
    }

    pub fn define_pointer(
        &mut self,
        id: Id,
        storage_class: StorageClass,
        element: Id,
    ) -> Result<Id, TypeError> {
        self.define(Op::Pointer, id, &[storage_class.word(), element.raw()])
    }

    pub fn define_vector(&mut self, id: Id, component: Id, count: u32) -> Result<Id, TypeError> {
        self.define(Op::Vector, id, &[component.raw(), count])
    }

    /// `length` is the id of a constant, resolved through
    /// [`ConstantValues`](crate::ConstantValues).
    pub fn define_array(&mut self, id: Id, element: Id, length: Id) -> Result<Id, TypeError> {
        self.define(Op::Array, id, &[element.raw(), length.raw()])
    }

    /// Define a struct. An empty `name` leaves it anonymous.
    pub fn define_struct(&mut self, id: Id, members: &[Id], name: &str) -> Result<Id, TypeError> {
        let words: Vec<Word> = members.iter().map(|m| m.raw()).collect();
        self.define(Op::Struct, id, &words)?;
        if !name.is_empty() {
            self.set_struct_name(id, name)?;
        }
        Ok(id)
    }

    pub fn define_function(
        &mut self,
        id: Id,
        return_type: Id,
        parameters: &[Id],
    ) -> Result<Id, TypeError> {
        let words: Vec<Word> = std::iter::once(return_type)
            .chain(parameters.iter().copied())
            .map(Id::raw)
            .collect();
        self.define(Op::Function, id, &words)
    }

    /// # Errors
    ///
    /// `BadWord` if `name` holds a NUL, which would cut it short.
    pub fn define_opaque(&mut self, id: Id, name: &str) -> Result<Id, TypeError> {
        check_literal_string(name).map_err(|source| TypeError::BadWord { id, source })?;
        self.define(Op::Opaque, id, &encode_literal_string(name))
    }

    pub fn define_image(
        &mut self,
        id: Id,
        sampled_type: Id,
        descriptor: ImageDescriptor,
        access: Option<AccessQualifier>,
    ) -> Result<Id, TypeError> {
        let mut words = vec![
            sampled_type.raw(),
            descriptor.dim.word(),
            descriptor.depth,
            descriptor.arrayed,
            descriptor.ms,
            descriptor.sampled,
            descriptor.format.word(),
        ];
        words.extend(access.map(AccessQualifier::word));
        self.define(Op::Image, id, &words)
    }

    pub fn define_sampled_image(&mut self, id: Id, image: Id) -> Result<Id, TypeError> {
        self.define(Op::SampledImage, id, &[image.raw()])
    }

    pub fn define_sampler(&mut self, id: Id) -> Result<Id, TypeError> {
        self.define(Op::Sampler, id, &[])
    }

    pub fn define_pipe(&mut self, id: Id, access: AccessQualifier) -> Result<Id, TypeError> {
        self.define(Op::Pipe, id, &[access.word()])
    }

    /// Define one of the payload-free kinds (event, queue, barrier, ...).
    pub fn define_marker(&mut self, op: Op, id: Id) -> Result<Id, TypeError> {
        if !op.is_marker() {
            return Err(TypeError::NotAMarker(op));
        }
        self.define(op, id, &[])
    }
}
