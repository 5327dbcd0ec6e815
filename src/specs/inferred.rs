// src/specs/inferred.rs
//! Variable layout: any header, roles bound by `infer::default_table()`.
//!
//! Rows are read leniently (short rows padded, all-empty rows dropped), the
//! search box matches one haystack of every value, and columns no role
//! claims show up as extra tiles.

use crate::filter::MatchStrategy;
use crate::infer::{infer_bindings, Bindings, SemanticRole};
use crate::record::Record;
use crate::specs::{FieldSpec, SchemaKind, SchemaSpec};
use crate::store::RowPolicy;

const CHIPS: &[FieldSpec] = &[
    FieldSpec::role("ID", SemanticRole::Identifier),
    FieldSpec::role("Tested", SemanticRole::TestDate),
];

const FACTS: &[FieldSpec] = &[
    FieldSpec::role("BioTrack", SemanticRole::Identifier),
    FieldSpec::role("Batch", SemanticRole::Batch),
    FieldSpec::role("Tested", SemanticRole::TestDate),
    FieldSpec::role("Lab", SemanticRole::Lab),
];

pub struct Inferred;

impl SchemaSpec for Inferred {
    fn label(&self) -> &'static str { "Inferred (any CSV)" }
    fn kind(&self) -> SchemaKind { SchemaKind::Inferred }

    fn bind(&self, columns: &[String]) -> Bindings {
        infer_bindings(columns)
    }

    fn row_policy(&self) -> RowPolicy { RowPolicy::Lenient }
    fn default_strategy(&self) -> MatchStrategy { MatchStrategy::Haystack }
    fn strain_fallback(&self) -> bool { true }

    fn subtitle(&self, rec: &Record) -> String {
        let strain = rec.get(SemanticRole::Strain);
        if strain.is_empty() { s!("-") } else { s!(strain) }
    }

    fn chips(&self) -> &'static [FieldSpec] { CHIPS }
    fn facts(&self) -> &'static [FieldSpec] { FACTS }

    // Extra tiles show "-" for blanks instead of hiding them.
    fn hide_blank_tiles(&self) -> bool { false }
    fn extra_tiles(&self) -> bool { true }
}
