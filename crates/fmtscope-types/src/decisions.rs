use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DocLevel, FormatterState, Id};

// NOTE: Decision Tree Shape
//
// The backtracking formatter records its search as a tree that alternates two
// node kinds: an exploration node is one candidate layout attempt, a level
// node is one nesting point in the document. Each level node remembers which
// child exploration it ultimately accepted; following those links from the
// root yields the accepted path, i.e. the layout the final output used.

/// The root of the recorded decision tree is always an exploration node.
pub type FormatterDecisions = ExplorationNode;

/// One candidate layout attempt considered by the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationNode {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    pub human_description: String,
    /// Column this exploration started at; needed to indent its output the
    /// way it would have appeared in context.
    pub start_column: u32,
    /// Absent only on the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_state: Option<FormatterState>,
    /// Present iff the exploration ran to completion (it may still have been
    /// rejected in favor of a sibling).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ExplorationResult>,
    #[serde(default)]
    pub children: Vec<LevelNode>,
}

/// What an exploration would have produced, had it been accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationResult {
    pub output_level: DocLevel,
    pub final_state: FormatterState,
}

/// One nesting point of the document inside an exploration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelNode {
    pub id: Id,
    pub parent_id: Id,
    /// Id of the document level this node corresponds to.
    pub level_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_name: Option<String>,
    pub flat: String,
    #[serde(rename = "toString")]
    pub summary: String,
    /// Which child exploration the formatter went with. Absent when the
    /// whole subtree was abandoned before a choice was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_exploration_id: Option<Id>,
    pub incoming_state: FormatterState,
    #[serde(default)]
    pub children: Vec<ExplorationNode>,
    /// Producer extras, displayed opaquely if at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_op: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_indent: Option<i64>,
}
