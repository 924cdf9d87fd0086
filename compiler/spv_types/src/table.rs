//! The type table: every type entity of one module, keyed by id.
//!
//! Entities go through two phases. `declare` registers an id and its kind
//! so later records can refer to it; `complete` fills in the operands.
//! Referenced ids only need to be declared at completion time, which is
//! what allows recursive types such as a struct holding a pointer to
//! itself.
//!
//! # Storage
//!
//! Entries live in a `Vec` in declaration order, with an `FxHashMap` from
//! id to index. The table owns every entity; everything else refers to
//! them by [`Id`] and reads them through [`TypeRef`] views.
//!
//! # Mutation
//!
//! Only `declare`, `complete` and the fix-up setters mutate, all through
//! `&mut self`. A finished table is immutable and can be shared across
//! threads.

mod construct;
mod parse;

use rustc_hash::FxHashMap;
use spv_ir::{AccessQualifier, Id, Op, Word};
use tracing::{debug, trace};

use crate::data::{ImageType, PipeType, StructType, TypeData};
use crate::decode::TypeRecord;
use crate::{TypeError, TypeRef};

/// Lifecycle of an entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeState {
    /// Id and kind known, operands not yet read.
    Declared,
    /// Operands read. Fields are final apart from the fix-up setters.
    Completed,
}

/// One type entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeEntry {
    id: Id,
    word_count: u16,
    state: TypeState,
    data: TypeData,
}

impl TypeEntry {
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.data.op()
    }

    /// Word count of the record this entity was completed from, 0 while
    /// only declared.
    #[inline]
    pub fn word_count(&self) -> u16 {
        self.word_count
    }

    #[inline]
    pub fn state(&self) -> TypeState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == TypeState::Completed
    }

    #[inline]
    pub fn data(&self) -> &TypeData {
        &self.data
    }
}

/// Registry of the type entities of one module.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    entries: Vec<TypeEntry>,
    by_id: FxHashMap<Id, usize>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TypeTable {
            entries: Vec::with_capacity(capacity),
            by_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: Id) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Register `id` as a type of kind `op`, operands to follow.
    pub fn declare(&mut self, op: Op, id: Id) -> Result<Id, TypeError> {
        if id.is_none() {
            return Err(TypeError::InvalidId(id));
        }
        if self.contains(id) {
            return Err(TypeError::DuplicateId(id));
        }
        self.by_id.insert(id, self.entries.len());
        self.entries.push(TypeEntry {
            id,
            word_count: 0,
            state: TypeState::Declared,
            data: TypeData::placeholder(op),
        });
        trace!(%id, %op, "declared type");
        Ok(id)
    }

    /// Read the operands of a declared entity and mark it completed.
    ///
    /// `operands` are the record words after the result id. Every type id
    /// among them must already be declared. On error the entity stays
    /// declared and untouched.
    pub fn complete(&mut self, id: Id, operands: &[Word]) -> Result<(), TypeError> {
        let index = self.index_of(id)?;
        let entry = &self.entries[index];
        let op = entry.op();
        if entry.is_completed() {
            return Err(TypeError::AlreadyCompleted { id, op });
        }
        let word_count = u16::try_from(operands.len() + 2)
            .map_err(|_| TypeError::TooManyOperands { id, op })?;
        let mut data = parse::parse_operands(self, id, op, operands)?;

        let entry = &mut self.entries[index];
        // Debug names and decorations precede the definition in a module.
        if let (TypeData::Struct(new), TypeData::Struct(old)) = (&mut data, &mut entry.data) {
            new.name = std::mem::take(&mut old.name);
            new.packed = old.packed;
        }
        entry.data = data;
        entry.word_count = word_count;
        entry.state = TypeState::Completed;
        debug!(%id, %op, word_count, "completed type");
        Ok(())
    }

    /// A completed entity.
    ///
    /// # Errors
    ///
    /// `Unresolved` if nothing is registered under `id`, `Incomplete` if
    /// it is only declared.
    pub fn lookup(&self, id: Id) -> Result<TypeRef<'_>, TypeError> {
        let entry = self.entry(id).ok_or(TypeError::Unresolved(id))?;
        if !entry.is_completed() {
            return Err(TypeError::Incomplete { id });
        }
        Ok(TypeRef::new(self, entry))
    }

    /// Any registered entity, declared or completed.
    pub fn get(&self, id: Id) -> Option<TypeRef<'_>> {
        self.entry(id).map(|entry| TypeRef::new(self, entry))
    }

    pub fn entry(&self, id: Id) -> Option<&TypeEntry> {
        self.by_id.get(&id).map(|&index| &self.entries[index])
    }

    pub fn state(&self, id: Id) -> Option<TypeState> {
        self.entry(id).map(TypeEntry::state)
    }

    pub fn op_of(&self, id: Id) -> Option<Op> {
        self.entry(id).map(TypeEntry::op)
    }

    /// Every entity in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = TypeRef<'_>> + '_ {
        self.entries.iter().map(|entry| TypeRef::new(self, entry))
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.entries.iter().map(TypeEntry::id)
    }

    /// View of an entity another entity refers to.
    ///
    /// # Panics
    ///
    /// If `id` is not registered. Completion and the setters only accept
    /// registered ids, so a referenced id is always present.
    pub(crate) fn view(&self, id: Id) -> TypeRef<'_> {
        match self.get(id) {
            Some(ty) => ty,
            None => panic!("dangling type reference {id}"),
        }
    }

    /// Operand words that, passed to `complete`, rebuild this entity.
    pub fn operands(&self, id: Id) -> Result<Vec<Word>, TypeError> {
        Ok(self.lookup(id)?.data().operand_words())
    }

    /// The record this entity would be serialized as.
    pub fn record(&self, id: Id) -> Result<TypeRecord, TypeError> {
        let ty = self.lookup(id)?;
        Ok(TypeRecord::new(ty.op(), id, ty.data().operand_words()))
    }

    // Fix-ups. Debug names and decorations may be attached while a struct
    // is only declared and survive its completion. The others rewrite
    // operands and need a completed entity. Only the image access qualifier
    // touches the word count.

    /// Attach a debug name to a struct.
    pub fn set_struct_name(&mut self, id: Id, name: impl Into<String>) -> Result<(), TypeError> {
        self.struct_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_packed(&mut self, id: Id, packed: bool) -> Result<(), TypeError> {
        self.struct_mut(id)?.packed = packed;
        Ok(())
    }

    /// Replace member `index` of struct `id` with `member`.
    pub fn set_member_type(&mut self, id: Id, index: usize, member: Id) -> Result<(), TypeError> {
        self.require(member)?;
        self.require_completed(id)?;
        let s = self.struct_mut(id)?;
        let count = s.members.len();
        let slot = s
            .members
            .get_mut(index)
            .ok_or(TypeError::IndexOutOfRange { id, index, count })?;
        *slot = member;
        Ok(())
    }

    /// Point sampled image `id` at `image`.
    pub fn set_image_type(&mut self, id: Id, image: Id) -> Result<(), TypeError> {
        self.require(image)?;
        match &mut self.completed_mut(id)?.data {
            TypeData::SampledImage(s) => {
                s.image = image;
                Ok(())
            }
            other => Err(TypeError::WrongKind {
                id,
                expected: Op::SampledImage,
                found: other.op(),
            }),
        }
    }

    pub fn set_pipe_access_qualifier(
        &mut self,
        id: Id,
        access: AccessQualifier,
    ) -> Result<(), TypeError> {
        match &mut self.completed_mut(id)?.data {
            TypeData::Pipe(p) => {
                *p = PipeType { access };
                Ok(())
            }
            other => Err(TypeError::WrongKind {
                id,
                expected: Op::Pipe,
                found: other.op(),
            }),
        }
    }

    /// Set or clear the access qualifier operand of image `id`.
    ///
    /// Unlike the other fix-ups this changes the operands, so the word
    /// count follows.
    pub fn set_image_access_qualifier(
        &mut self,
        id: Id,
        access: Option<AccessQualifier>,
    ) -> Result<(), TypeError> {
        let entry = self.completed_mut(id)?;
        match &mut entry.data {
            TypeData::Image(ImageType { access: slot, .. }) => {
                let had = slot.is_some();
                *slot = access;
                match (had, access.is_some()) {
                    (false, true) => entry.word_count += 1,
                    (true, false) => entry.word_count -= 1,
                    _ => {}
                }
                Ok(())
            }
            other => Err(TypeError::WrongKind {
                id,
                expected: Op::Image,
                found: other.op(),
            }),
        }
    }

    fn index_of(&self, id: Id) -> Result<usize, TypeError> {
        self.by_id
            .get(&id)
            .copied()
            .ok_or(TypeError::Unresolved(id))
    }

    fn require(&self, id: Id) -> Result<(), TypeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TypeError::Unresolved(id))
        }
    }

    fn entry_mut(&mut self, id: Id) -> Result<&mut TypeEntry, TypeError> {
        let index = self.index_of(id)?;
        Ok(&mut self.entries[index])
    }

    fn require_completed(&self, id: Id) -> Result<(), TypeError> {
        match self.state(id) {
            Some(TypeState::Completed) => Ok(()),
            Some(TypeState::Declared) => Err(TypeError::Incomplete { id }),
            None => Err(TypeError::Unresolved(id)),
        }
    }

    fn completed_mut(&mut self, id: Id) -> Result<&mut TypeEntry, TypeError> {
        self.require_completed(id)?;
        self.entry_mut(id)
    }

    fn struct_mut(&mut self, id: Id) -> Result<&mut StructType, TypeError> {
        match &mut self.entry_mut(id)?.data {
            TypeData::Struct(s) => Ok(s),
            other => Err(TypeError::WrongKind {
                id,
                expected: Op::Struct,
                found: other.op(),
            }),
        }
    }

    /// Drop the most recent declaration, undoing a failed define.
    pub(crate) fn discard_last(&mut self, id: Id) {
        if self.entries.last().is_some_and(|e| e.id == id) {
            self.entries.pop();
            self.by_id.remove(&id);
        }
    }
}
