use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Doc, FormatterDecisions, Op, Result};

/// One complete debug dump of a formatting run, as written by the formatter.
///
/// Created once by the external formatter and read-only for the lifetime of
/// an inspector session. The inspector performs no validation beyond what the
/// `type` tags require; the producer is trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSnapshot {
    /// Raw source text handed to the formatter.
    pub java_input: String,
    /// The low-level instruction stream the formatter emitted.
    pub ops: Vec<Op>,
    /// The document tree with resolved break/indent decisions.
    pub doc: Doc,
    /// The recorded exploration/backtracking search.
    pub formatter_decisions: FormatterDecisions,
    /// Final formatted output.
    pub java_output: String,
}

impl DebugSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a snapshot decoding each panel's data independently.
    ///
    /// The file itself must be valid JSON, but a malformed panel (say, an
    /// unknown doc tag) only poisons that panel: the others still decode, so
    /// one bad subtree never blanks the whole report.
    pub fn load_lenient(path: &Path) -> Result<LenientSnapshot> {
        let text = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        Ok(LenientSnapshot::from_value(value))
    }
}

/// A snapshot with per-panel decode results.
#[derive(Debug)]
pub struct LenientSnapshot {
    pub java_input: Result<String>,
    pub ops: Result<Vec<Op>>,
    pub doc: Result<Doc>,
    pub formatter_decisions: Result<FormatterDecisions>,
    pub java_output: Result<String>,
}

impl LenientSnapshot {
    pub fn from_value(mut value: serde_json::Value) -> Self {
        fn take_field<T: serde::de::DeserializeOwned>(
            value: &mut serde_json::Value,
            name: &str,
        ) -> Result<T> {
            let field = value
                .get_mut(name)
                .map(serde_json::Value::take)
                .unwrap_or(serde_json::Value::Null);
            Ok(serde_json::from_value(field)?)
        }

        Self {
            java_input: take_field(&mut value, "javaInput"),
            ops: take_field(&mut value, "ops"),
            doc: take_field(&mut value, "doc"),
            formatter_decisions: take_field(&mut value, "formatterDecisions"),
            java_output: take_field(&mut value, "javaOutput"),
        }
    }
}
