//! Human-readable rendering of types, for diagnostics and dumps.
//!
//! ```text
//! i32  u8  f16  *Private i32  <4 x f32>  [f32; %9]  fn(i32) -> void
//! struct Node  struct { i32, *Function %7 }  pipe(WriteOnly)
//! ```
//!
//! Named structs print by name only, so recursive named types terminate
//! immediately. Anything reached again while it is still being printed
//! prints as its id.

#![allow(clippy::format_push_string)] // Debug formatting prioritizes clarity over allocation

use spv_ir::Id;

use crate::data::TypeData;
use crate::{TypeRef, TypeTable};

impl TypeTable {
    /// Render type `id` for humans.
    ///
    /// Unknown ids print as `%N?`, declared-only ones as `%N`.
    pub fn format_type(&self, id: Id) -> String {
        let mut buf = String::new();
        self.format_type_into(id, &mut buf);
        buf
    }

    /// Render type `id` into an existing buffer.
    pub fn format_type_into(&self, id: Id, buf: &mut String) {
        self.format_nested(id, buf, &mut Vec::new());
    }

    /// `active` holds the entities currently being printed.
    fn format_nested(&self, id: Id, buf: &mut String, active: &mut Vec<Id>) {
        let Some(ty) = self.get(id) else {
            buf.push_str(&format!("{id}?"));
            return;
        };
        if !ty.entry().is_completed() || active.contains(&id) {
            buf.push_str(&id.to_string());
            return;
        }
        active.push(id);
        self.format_data(ty.data(), buf, active);
        active.pop();
    }

    fn format_list(&self, ids: &[Id], buf: &mut String, active: &mut Vec<Id>) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_nested(id, buf, active);
        }
    }

    fn format_data(&self, data: &TypeData, buf: &mut String, active: &mut Vec<Id>) {
        match data {
            // Scalars
            TypeData::Void => buf.push_str("void"),
            TypeData::Bool => buf.push_str("bool"),
            TypeData::Int(t) => {
                buf.push(if t.signed { 'i' } else { 'u' });
                buf.push_str(&t.width.to_string());
            }
            TypeData::Float(t) => buf.push_str(&format!("f{}", t.width)),

            // Derived
            TypeData::Pointer(p) => {
                buf.push_str(&format!("*{} ", p.storage_class));
                self.format_nested(p.element, buf, active);
            }
            TypeData::Vector(v) => {
                buf.push_str(&format!("<{} x ", v.count));
                self.format_nested(v.component, buf, active);
                buf.push('>');
            }
            TypeData::Array(a) => {
                buf.push('[');
                self.format_nested(a.element, buf, active);
                buf.push_str(&format!("; {}]", a.length));
            }
            TypeData::Struct(s) => {
                if s.packed {
                    buf.push_str("packed ");
                }
                if s.name.is_empty() {
                    buf.push_str("struct { ");
                    self.format_list(&s.members, buf, active);
                    buf.push_str(" }");
                } else {
                    buf.push_str("struct ");
                    buf.push_str(&s.name);
                }
            }
            TypeData::Function(f) => {
                buf.push_str("fn(");
                self.format_list(&f.parameters, buf, active);
                buf.push_str(") -> ");
                self.format_nested(f.return_type, buf, active);
            }
            TypeData::Opaque(o) => {
                buf.push_str("opaque ");
                buf.push_str(&o.name);
            }

            // Images and kernel objects
            TypeData::Image(img) => {
                let d = &img.descriptor;
                buf.push_str(&format!(
                    "image({}, depth={}, arrayed={}, ms={}, sampled={}, {}",
                    d.dim, d.depth, d.arrayed, d.ms, d.sampled, d.format
                ));
                if let Some(access) = img.access {
                    buf.push_str(&format!(", {access}"));
                }
                buf.push(')');
            }
            TypeData::SampledImage(s) => {
                buf.push_str("sampled_image(");
                self.format_nested(s.image, buf, active);
                buf.push(')');
            }
            TypeData::Pipe(p) => buf.push_str(&format!("pipe({})", p.access)),
            TypeData::Sampler => buf.push_str("sampler"),
            TypeData::Event => buf.push_str("event"),
            TypeData::DeviceEvent => buf.push_str("device_event"),
            TypeData::ReserveId => buf.push_str("reserve_id"),
            TypeData::Queue => buf.push_str("queue"),
            TypeData::PipeStorage => buf.push_str("pipe_storage"),
            TypeData::NamedBarrier => buf.push_str("named_barrier"),
        }
    }
}

impl TypeRef<'_> {
    pub fn format(&self) -> String {
        self.table().format_type(self.id())
    }
}

#[cfg(test)]
mod tests;
