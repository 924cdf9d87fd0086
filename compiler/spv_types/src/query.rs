//! Read-only views of type entities.
//!
//! A [`TypeRef`] pairs an entry with its table so that referenced types
//! resolve without the caller threading the table through every call.
//!
//! Predicates (`is_*`) never panic. The derived accessors (`pointer_*`,
//! `vector_*`, `struct_*`, ...) expect a completed entity of the matching
//! kind and panic otherwise, naming the entity. Use the `as_*` projections
//! when the kind is not known; they yield `None` for an entity that is only
//! declared.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use spv_ir::{AccessQualifier, Capability, Id, ImageFormat, Op, StorageClass};

use crate::data::{
    ArrayType, FloatType, FunctionType, ImageDescriptor, ImageType, IntType, OpaqueType,
    PipeType, PointerType, SampledImageType, StructType, TypeData, VectorType,
};
use crate::table::{TypeEntry, TypeState};
use crate::{capability, TypeError, TypeTable, ValidationFlags};

/// Source of constant values, used to resolve array lengths.
///
/// Array types name their length by the id of a constant. The table does
/// not own constants; whoever decodes the constant section provides them.
pub trait ConstantValues {
    /// The value of integer constant `id`, if it is one.
    fn constant_u64(&self, id: Id) -> Option<u64>;
}

impl<S: BuildHasher> ConstantValues for HashMap<Id, u64, S> {
    fn constant_u64(&self, id: Id) -> Option<u64> {
        self.get(&id).copied()
    }
}

/// A type entity together with the table it lives in.
#[derive(Copy, Clone)]
pub struct TypeRef<'t> {
    table: &'t TypeTable,
    entry: &'t TypeEntry,
}

macro_rules! projections {
    ($($name:ident => $variant:ident($payload:ty);)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> Option<&'t $payload> {
                if !self.entry.is_completed() {
                    return None;
                }
                match self.entry.data() {
                    TypeData::$variant(data) => Some(data),
                    _ => None,
                }
            }
        )*
    };
}

macro_rules! kind_predicates {
    ($($name:ident => $op:ident;)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> bool {
                self.op() == Op::$op
            }
        )*
    };
}

impl<'t> TypeRef<'t> {
    pub(crate) fn new(table: &'t TypeTable, entry: &'t TypeEntry) -> Self {
        TypeRef { table, entry }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.entry.id()
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.entry.op()
    }

    #[inline]
    pub fn word_count(&self) -> u16 {
        self.entry.word_count()
    }

    #[inline]
    pub fn state(&self) -> TypeState {
        self.entry.state()
    }

    #[inline]
    pub fn data(&self) -> &'t TypeData {
        self.entry.data()
    }

    #[inline]
    pub fn entry(&self) -> &'t TypeEntry {
        self.entry
    }

    #[inline]
    pub fn table(&self) -> &'t TypeTable {
        self.table
    }

    // Kind predicates

    /// Kind is `op` and, when `bits` is non-zero, the scalar width is `bits`.
    pub fn is_exactly(&self, op: Op, bits: u32) -> bool {
        self.op() == op && (bits == 0 || self.data().bit_width() == Some(bits))
    }

    /// Integer of width `bits`, or of any width when `bits` is 0.
    #[inline]
    pub fn is_int(&self, bits: u32) -> bool {
        self.is_exactly(Op::Int, bits)
    }

    /// Float of width `bits`, or of any width when `bits` is 0.
    #[inline]
    pub fn is_float(&self, bits: u32) -> bool {
        self.is_exactly(Op::Float, bits)
    }

    kind_predicates! {
        is_void => Void;
        is_bool => Bool;
        is_array => Array;
        is_pointer => Pointer;
        is_struct => Struct;
        is_function => Function;
        is_vector => Vector;
        is_opaque => Opaque;
        is_image => Image;
        is_sampled_image => SampledImage;
        is_pipe => Pipe;
        is_pipe_storage => PipeStorage;
        is_sampler => Sampler;
        is_event => Event;
        is_device_event => DeviceEvent;
        is_reserve_id => ReserveId;
        is_queue => Queue;
        is_named_barrier => NamedBarrier;
    }

    /// Array, struct or vector.
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.op().is_composite()
    }

    /// An image in the OpenCL subset: not known to be sampled, format
    /// Unknown.
    pub fn is_ocl_image(&self) -> bool {
        self.as_image().is_some_and(|img| {
            img.descriptor.sampled == 0 && img.descriptor.format == ImageFormat::Unknown
        })
    }

    fn component(&self) -> Option<TypeRef<'t>> {
        self.as_vector().and_then(|v| self.table.get(v.component))
    }

    pub fn is_vector_int(&self) -> bool {
        self.component().is_some_and(|c| c.is_int(0))
    }

    pub fn is_vector_float(&self) -> bool {
        self.component().is_some_and(|c| c.is_float(0))
    }

    pub fn is_vector_bool(&self) -> bool {
        self.component().is_some_and(|c| c.is_bool())
    }

    pub fn is_vector_or_scalar_int(&self) -> bool {
        self.is_int(0) || self.is_vector_int()
    }

    pub fn is_vector_or_scalar_float(&self) -> bool {
        self.is_float(0) || self.is_vector_float()
    }

    pub fn is_vector_or_scalar_bool(&self) -> bool {
        self.is_bool() || self.is_vector_bool()
    }

    // Checked projections

    projections! {
        as_int => Int(IntType);
        as_float => Float(FloatType);
        as_pointer => Pointer(PointerType);
        as_vector => Vector(VectorType);
        as_array => Array(ArrayType);
        as_struct => Struct(StructType);
        as_function => Function(FunctionType);
        as_opaque => Opaque(OpaqueType);
        as_image => Image(ImageType);
        as_sampled_image => SampledImage(SampledImageType);
        as_pipe => Pipe(PipeType);
    }

    // Derived accessors

    #[cold]
    #[track_caller]
    fn wrong_kind(&self, expected: &str) -> ! {
        if self.entry.is_completed() {
            panic!("{} {} is not {expected}", self.op(), self.id())
        }
        panic!("{} {} is declared but not completed", self.op(), self.id())
    }

    /// Width of a scalar int or float.
    #[track_caller]
    pub fn bit_width(&self) -> u32 {
        match self.data().bit_width() {
            Some(width) if self.entry.is_completed() => width,
            _ => self.wrong_kind("a scalar"),
        }
    }

    #[track_caller]
    pub fn integer_bit_width(&self) -> u32 {
        match self.as_int() {
            Some(t) => t.width,
            None => self.wrong_kind("an integer"),
        }
    }

    #[track_caller]
    pub fn float_bit_width(&self) -> u32 {
        match self.as_float() {
            Some(t) => t.width,
            None => self.wrong_kind("a float"),
        }
    }

    #[track_caller]
    fn pointer(&self) -> &'t PointerType {
        match self.as_pointer() {
            Some(p) => p,
            None => self.wrong_kind("a pointer"),
        }
    }

    #[track_caller]
    pub fn pointer_element_type(&self) -> TypeRef<'t> {
        self.table.view(self.pointer().element)
    }

    #[track_caller]
    pub fn pointer_storage_class(&self) -> StorageClass {
        self.pointer().storage_class
    }

    #[track_caller]
    fn vector(&self) -> &'t VectorType {
        match self.as_vector() {
            Some(v) => v,
            None => self.wrong_kind("a vector"),
        }
    }

    #[track_caller]
    pub fn vector_component_type(&self) -> TypeRef<'t> {
        self.table.view(self.vector().component)
    }

    #[track_caller]
    pub fn vector_component_count(&self) -> u32 {
        self.vector().count
    }

    #[track_caller]
    pub fn vector_is_valid_index(&self, index: u32) -> bool {
        self.vector().is_valid_index(index)
    }

    #[track_caller]
    fn array(&self) -> &'t ArrayType {
        match self.as_array() {
            Some(a) => a,
            None => self.wrong_kind("an array"),
        }
    }

    #[track_caller]
    pub fn array_element_type(&self) -> TypeRef<'t> {
        self.table.view(self.array().element)
    }

    /// Id of the constant holding the array length.
    #[track_caller]
    pub fn array_length_id(&self) -> Id {
        self.array().length
    }

    /// The array length, looked up in `constants`.
    #[track_caller]
    pub fn array_length(&self, constants: &dyn ConstantValues) -> Result<u64, TypeError> {
        let length = self.array_length_id();
        constants
            .constant_u64(length)
            .ok_or(TypeError::UnresolvedConstant {
                id: self.id(),
                length,
            })
    }

    #[track_caller]
    fn structure(&self) -> &'t StructType {
        match self.as_struct() {
            Some(s) => s,
            None => self.wrong_kind("a struct"),
        }
    }

    #[track_caller]
    pub fn struct_member_count(&self) -> usize {
        self.structure().members.len()
    }

    #[track_caller]
    pub fn struct_member_type(&self, index: usize) -> TypeRef<'t> {
        let s = self.structure();
        match s.members.get(index) {
            Some(&member) => self.table.view(member),
            None => panic!(
                "member {index} is out of range for {} with {} members",
                self.id(),
                s.members.len()
            ),
        }
    }

    /// Debug name of a struct, empty when anonymous.
    #[track_caller]
    pub fn struct_name(&self) -> &'t str {
        &self.structure().name
    }

    #[track_caller]
    pub fn is_packed(&self) -> bool {
        self.structure().packed
    }

    #[track_caller]
    fn function(&self) -> &'t FunctionType {
        match self.as_function() {
            Some(f) => f,
            None => self.wrong_kind("a function"),
        }
    }

    #[track_caller]
    pub fn function_return_type(&self) -> TypeRef<'t> {
        self.table.view(self.function().return_type)
    }

    #[track_caller]
    pub fn function_parameter_count(&self) -> usize {
        self.function().parameters.len()
    }

    #[track_caller]
    pub fn function_parameter_type(&self, index: usize) -> TypeRef<'t> {
        let f = self.function();
        match f.parameters.get(index) {
            Some(&param) => self.table.view(param),
            None => panic!(
                "parameter {index} is out of range for {} with {} parameters",
                self.id(),
                f.parameters.len()
            ),
        }
    }

    #[track_caller]
    pub fn opaque_name(&self) -> &'t str {
        match self.as_opaque() {
            Some(o) => &o.name,
            None => self.wrong_kind("an opaque type"),
        }
    }

    #[track_caller]
    fn image(&self) -> &'t ImageType {
        match self.as_image() {
            Some(img) => img,
            None => self.wrong_kind("an image"),
        }
    }

    #[track_caller]
    pub fn image_sampled_type(&self) -> TypeRef<'t> {
        self.table.view(self.image().sampled_type)
    }

    #[track_caller]
    pub fn image_descriptor(&self) -> ImageDescriptor {
        self.image().descriptor
    }

    #[track_caller]
    pub fn has_access_qualifier(&self) -> bool {
        self.image().has_access_qualifier()
    }

    /// Image access qualifier, `ReadWrite` when absent.
    #[track_caller]
    pub fn image_access_qualifier(&self) -> AccessQualifier {
        self.image().access_qualifier()
    }

    /// The image a sampled image wraps.
    #[track_caller]
    pub fn sampled_image_type(&self) -> TypeRef<'t> {
        match self.as_sampled_image() {
            Some(s) => self.table.view(s.image),
            None => self.wrong_kind("a sampled image"),
        }
    }

    #[track_caller]
    pub fn pipe_access_qualifier(&self) -> AccessQualifier {
        match self.as_pipe() {
            Some(p) => p.access,
            None => self.wrong_kind("a pipe"),
        }
    }

    // Engines

    /// Capabilities a module using this type must declare.
    pub fn required_capabilities(&self) -> Vec<Capability> {
        capability::required_capabilities(self.table, self.entry)
    }

    /// Validate with the default flags.
    pub fn validate(&self) -> Result<(), TypeError> {
        self.table.validate(self.id(), ValidationFlags::default())
    }

    pub fn validate_with(&self, flags: ValidationFlags) -> Result<(), TypeError> {
        self.table.validate(self.id(), flags)
    }
}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("id", &self.id())
            .field("state", &self.state())
            .field("data", self.data())
            .finish()
    }
}

impl PartialEq for TypeRef<'_> {
    /// Same entity of the same table.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table) && self.id() == other.id()
    }
}

impl Eq for TypeRef<'_> {}
