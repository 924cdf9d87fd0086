//! Structural validation of type entities.
//!
//! Each kind has a small set of invariants (legal widths, component
//! counts, image flags). With [`ValidationFlags::RECURSIVE`] every
//! referenced type is validated too. Recursive types are legal, so an
//! entity already on the validation stack counts as valid when reached
//! again; its own checks finish when the stack unwinds back to it.

use rustc_hash::FxHashSet;
use spv_ir::{Dim, Id, ImageFormat, Op};
use tracing::{debug, instrument};

use crate::data::{ImageType, TypeData};
use crate::table::TypeEntry;
use crate::{TypeError, TypeTable, ValidationFlags, Violation};

const VECTOR_COUNTS: [u32; 5] = [2, 3, 4, 8, 16];

struct Validator<'t> {
    table: &'t TypeTable,
    flags: ValidationFlags,
    /// On the current validation stack.
    active: FxHashSet<Id>,
    /// Already known valid.
    valid: FxHashSet<Id>,
}

impl<'t> Validator<'t> {
    fn new(table: &'t TypeTable, flags: ValidationFlags) -> Self {
        Validator {
            table,
            flags,
            active: FxHashSet::default(),
            valid: FxHashSet::default(),
        }
    }

    fn check(&mut self, id: Id) -> Result<(), TypeError> {
        if self.valid.contains(&id) || self.active.contains(&id) {
            return Ok(());
        }
        let entry = self.table.entry(id).ok_or(TypeError::Unresolved(id))?;
        if !entry.is_completed() {
            return Err(TypeError::Incomplete { id });
        }

        self.active.insert(id);
        let result = self.check_entry(entry);
        self.active.remove(&id);

        if result.is_ok() {
            self.valid.insert(id);
        }
        result
    }

    fn check_entry(&mut self, entry: &'t TypeEntry) -> Result<(), TypeError> {
        let invalid = |violation| TypeError::Invalid {
            id: entry.id(),
            op: entry.op(),
            violation,
        };
        let data = entry.data();

        if self.flags.contains(ValidationFlags::CHECK_WORD_COUNT) {
            // A count past u16 cannot match any recorded count.
            let expected = u16::try_from(data.word_count()).unwrap_or(u16::MAX);
            if expected != entry.word_count() {
                return Err(invalid(Violation::WordCount {
                    expected,
                    found: entry.word_count(),
                }));
            }
        }

        match data {
            TypeData::Int(t) if !(2..=64).contains(&t.width) => {
                return Err(invalid(Violation::IntWidth(t.width)));
            }
            TypeData::Float(t) if !(16..=64).contains(&t.width) => {
                return Err(invalid(Violation::FloatWidth(t.width)));
            }
            TypeData::Vector(v) if !VECTOR_COUNTS.contains(&v.count) => {
                return Err(invalid(Violation::ComponentCount(v.count)));
            }
            TypeData::Array(a) if a.length.is_none() => {
                return Err(invalid(Violation::MissingLength));
            }
            TypeData::Image(img) => {
                self.check_image(img).map_err(invalid)?;
            }
            TypeData::SampledImage(s) => {
                let found = self
                    .table
                    .op_of(s.image)
                    .ok_or(TypeError::Unresolved(s.image))?;
                if found != Op::Image {
                    return Err(invalid(Violation::NotAnImage { found }));
                }
            }
            _ => {}
        }

        if self.flags.contains(ValidationFlags::RECURSIVE) {
            for referenced in data.references() {
                self.check(referenced)?;
            }
        }
        Ok(())
    }

    fn check_image(&self, img: &ImageType) -> Result<(), Violation> {
        let d = &img.descriptor;
        if d.dim > Dim::Buffer {
            return Err(Violation::ImageDim(d.dim));
        }
        for (field, value) in [("depth", d.depth), ("arrayed", d.arrayed), ("ms", d.ms)] {
            if value > 1 {
                return Err(Violation::ImageFlag { field, value });
            }
        }
        let strict = self.flags.contains(ValidationFlags::STRICT_OPENCL_IMAGES);
        if strict && (d.sampled != 0 || d.format != ImageFormat::Unknown) {
            return Err(Violation::NotOpenClImage {
                sampled: d.sampled,
                format: d.format,
            });
        }
        Ok(())
    }
}

impl TypeTable {
    /// Validate entity `id`.
    ///
    /// # Errors
    ///
    /// `Unresolved` or `Incomplete` when `id` (or, recursively, a type it
    /// refers to) is missing or never completed; `Invalid` naming the
    /// offending entity otherwise.
    pub fn validate(&self, id: Id, flags: ValidationFlags) -> Result<(), TypeError> {
        Validator::new(self, flags).check(id)
    }

    /// Validate every entity in declaration order, stopping at the first
    /// failure.
    #[instrument(level = "debug", skip_all, fields(types = self.len(), flags = ?flags))]
    pub fn validate_all(&self, flags: ValidationFlags) -> Result<(), TypeError> {
        let mut validator = Validator::new(self, flags);
        for id in self.ids() {
            validator.check(id)?;
        }
        debug!("type table is valid");
        Ok(())
    }
}
