//! Choice decoding.
//!
//! Coded answers are replaced by their display labels. Decoding never
//! fails: a code missing from its table, or a table missing from the
//! registry, passes through unchanged.

use census_model::{ChoiceRegistry, ChoiceTable};
use tracing::{debug, trace};

/// Label for `code`, or `code` unchanged when the table does not list it.
pub fn decode_single_choice(code: &str, table: &ChoiceTable) -> String {
    match table.label(code) {
        Some(label) => label.to_string(),
        None => {
            trace!(table = %table.name, code, "unknown choice code");
            code.to_string()
        }
    }
}

/// Decode a whitespace-separated list of codes.
///
/// `None` and blank input give `None`. Token order and duplicates are kept.
pub fn decode_multiple_choices(codes: Option<&str>, table: &ChoiceTable) -> Option<Vec<String>> {
    let codes = codes?;
    if codes.trim().is_empty() {
        return None;
    }
    Some(
        codes
            .split_whitespace()
            .map(|code| decode_single_choice(code, table))
            .collect(),
    )
}

/// Decodes answers by table name against one choice release.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    registry: &'a ChoiceRegistry,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a ChoiceRegistry) -> Self {
        Self { registry }
    }

    /// Decode one code; unknown tables pass the code through.
    pub fn single(&self, table: &str, code: &str) -> String {
        match self.registry.table(table) {
            Some(choices) => decode_single_choice(code, choices),
            None => {
                debug!(table, version = %self.registry.version, "choice table not loaded");
                code.to_string()
            }
        }
    }

    /// Decode an optional answer.
    pub fn choice(&self, table: &str, code: Option<String>) -> Option<String> {
        code.map(|code| self.single(table, &code))
    }

    /// Decode an optional whitespace-separated answer list.
    pub fn choices(&self, table: &str, codes: Option<String>) -> Option<Vec<String>> {
        match self.registry.table(table) {
            Some(choices) => decode_multiple_choices(codes.as_deref(), choices),
            None => {
                debug!(table, version = %self.registry.version, "choice table not loaded");
                let codes = codes?;
                let tokens: Vec<String> = codes.split_whitespace().map(str::to_string).collect();
                (!tokens.is_empty()).then_some(tokens)
            }
        }
    }
}
