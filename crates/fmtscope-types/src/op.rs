use serde::{Deserialize, Serialize};

use crate::Id;

// NOTE: Op Stream Shape
//
// The formatter emits a flat, ordered instruction stream before building the
// document tree. Open/close markers follow a stack discipline, but the
// producer is trusted: nothing here validates nesting, and an unbalanced
// stream simply renders as-is.

/// One instruction in the formatter's linear output stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Op {
    /// A (possibly conditional) candidate line break.
    #[serde(rename = "break")]
    Break(BreakOp),
    /// A literal source token with its surrounding non-token text.
    #[serde(rename = "token")]
    Token(TokenOp),
    /// Start of a nesting level.
    #[serde(rename = "openOp")]
    Open(OpenMarkerOp),
    /// End of the innermost open level.
    #[serde(rename = "closeOp")]
    Close(CloseMarkerOp),
}

/// How a break interacts with its siblings when the level does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FillMode {
    /// All breaks in the level break together.
    Unified,
    /// Each break decides independently based on remaining width.
    Independent,
    /// Always breaks.
    Forced,
}

impl FillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Unified => "UNIFIED",
            FillMode::Independent => "INDEPENDENT",
            FillMode::Forced => "FORCED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakOp {
    pub id: Id,
    pub conditional: bool,
    pub fill_mode: FillMode,
    /// Debug rendering produced by the formatter, shown as hover detail.
    #[serde(rename = "toString")]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOp {
    pub id: Id,
    /// Non-token text (whitespace, comments) preceding the token.
    pub before_text: String,
    pub text: String,
    /// Non-token text following the token.
    pub after_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenMarkerOp {
    pub id: Id,
    #[serde(rename = "toString")]
    pub summary: String,
}

/// Close markers carry no identity of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseMarkerOp {
    #[serde(rename = "toString", default)]
    pub summary: Option<String>,
}
