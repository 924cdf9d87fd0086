//! Capabilities implied by type usage.
//!
//! The code emitter declares the union of these at the top of the module.

use rustc_hash::FxHashSet;
use spv_ir::{AccessQualifier, Capability};
use tracing::trace;

use crate::data::TypeData;
use crate::table::TypeEntry;
use crate::TypeTable;

/// Capabilities required by `entry`, in a stable order.
///
/// Reads the pointer's element type through `table`; an element that is
/// not a 16-bit float (or not completed) adds nothing. A declared entry
/// has no fields yet and requires nothing.
pub fn required_capabilities(table: &TypeTable, entry: &TypeEntry) -> Vec<Capability> {
    if !entry.is_completed() {
        return Vec::new();
    }
    match entry.data() {
        TypeData::Pointer(p) => {
            let mut caps = vec![Capability::Addresses];
            let half = table
                .get(p.element)
                .is_some_and(|element| element.is_float(16));
            if half {
                caps.push(Capability::Float16Buffer);
            }
            caps.push(p.storage_class.capability());
            caps
        }
        TypeData::Vector(v) if v.count > 8 => vec![Capability::Vector16],
        TypeData::Image(img) => {
            let mut caps = vec![Capability::ImageBasic];
            if img.access == Some(AccessQualifier::ReadWrite) {
                caps.push(Capability::ImageReadWrite);
            }
            if img.descriptor.ms != 0 {
                caps.push(Capability::ImageMipmap);
            }
            caps
        }
        TypeData::Pipe(_) => vec![Capability::Pipes],
        TypeData::PipeStorage => vec![Capability::PipeStorage],
        TypeData::NamedBarrier => vec![Capability::NamedBarrier],
        _ => Vec::new(),
    }
}

impl TypeTable {
    /// Every capability any entry requires, each once, in first-seen order.
    pub fn module_capabilities(&self) -> Vec<Capability> {
        let mut seen = FxHashSet::default();
        let mut caps = Vec::new();
        for ty in self.iter() {
            for cap in required_capabilities(self, ty.entry()) {
                if seen.insert(cap) {
                    trace!(id = %ty.id(), %cap, "type requires capability");
                    caps.push(cap);
                }
            }
        }
        caps
    }
}

#[cfg(test)]
mod tests;
