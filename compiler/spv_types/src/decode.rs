//! Building a table from a stream of type records.
//!
//! Decoding runs in two passes. The first declares every result id, the
//! second completes each record in stream order. Any record may therefore
//! name any type in the stream, earlier or later.

use spv_ir::{Id, Op, Word};
use tracing::{debug, instrument};

use crate::{TypeError, TypeTable};

/// One type-defining instruction, already split from the binary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRecord {
    pub op: Op,
    /// Header word count: opcode word, result id, operands.
    pub word_count: u16,
    pub result: Id,
    /// Words after the result id.
    pub operands: Vec<Word>,
}

impl TypeRecord {
    /// A record whose word count matches `operands`.
    ///
    /// Saturates at `u16::MAX`; `decode` rejects such a record as too long.
    pub fn new(op: Op, result: Id, operands: Vec<Word>) -> Self {
        let word_count = u16::try_from(operands.len() + 2).unwrap_or(u16::MAX);
        TypeRecord {
            op,
            word_count,
            result,
            operands,
        }
    }

    fn check_length(&self) -> Result<(), TypeError> {
        if usize::from(self.word_count) == self.operands.len() + 2 {
            Ok(())
        } else {
            Err(TypeError::RecordLength {
                id: self.result,
                declared: self.word_count,
                actual: self.operands.len() + 2,
            })
        }
    }
}

impl TypeTable {
    /// Build a table from every type record of a module.
    ///
    /// Returns the first error. Nothing is partially returned.
    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn decode(records: &[TypeRecord]) -> Result<Self, TypeError> {
        let mut table = TypeTable::with_capacity(records.len());
        for record in records {
            record.check_length()?;
            table.declare(record.op, record.result)?;
        }
        for record in records {
            table.complete(record.result, &record.operands)?;
        }
        debug!(types = table.len(), "decoded type table");
        Ok(table)
    }

    /// Declare and complete a single record on an existing table.
    ///
    /// Forward references must already be declared.
    pub fn decode_record(&mut self, record: &TypeRecord) -> Result<(), TypeError> {
        record.check_length()?;
        self.declare(record.op, record.result)?;
        if let Err(err) = self.complete(record.result, &record.operands) {
            self.discard_last(record.result);
            return Err(err);
        }
        Ok(())
    }
}
