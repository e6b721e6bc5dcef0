use serde::{Deserialize, Serialize};

use crate::{Id, TagRef};

/// One node of the formatted document tree, with all break and indent
/// decisions already resolved by the formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Doc {
    Token(DocToken),
    Space(DocSpace),
    Comment(DocComment),
    Break(DocBreak),
    Level(DocLevel),
}

impl Doc {
    /// The cached flattened (single-line) rendering of this node.
    pub fn flat(&self) -> &str {
        match self {
            Doc::Token(t) => &t.flat,
            Doc::Space(_) => " ",
            Doc::Comment(c) => &c.flat,
            Doc::Break(b) => &b.flat,
            Doc::Level(l) => &l.flat,
        }
    }

    pub fn id(&self) -> Option<Id> {
        match self {
            Doc::Token(t) => Some(t.id),
            Doc::Space(s) => s.id,
            Doc::Comment(c) => Some(c.id),
            Doc::Break(b) => Some(b.id),
            Doc::Level(l) => Some(l.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocToken {
    pub id: Id,
    pub flat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSpace {
    #[serde(default)]
    pub id: Option<Id>,
}

/// A comment keeps both its original text (`flat`) and the text as rendered
/// after reflowing (`text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocComment {
    pub id: Id,
    pub flat: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocBreak {
    pub id: Id,
    /// Text rendered when the break is not taken.
    pub flat: String,
    pub break_state: BreakState,
    /// Set when this break is conditional; shared with the indents that
    /// condition on it.
    #[serde(default)]
    pub opt_tag: Option<TagRef>,
}

/// The formatter's resolved decision for one break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakState {
    pub broken: bool,
    /// Column the following line starts at, when broken.
    pub new_indent: u32,
}

/// A nesting group: one indentation/break-grouping scope.
///
/// `docs` is ordered and immutable once produced; `flat` caches the flattened
/// rendering of the whole subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocLevel {
    pub id: Id,
    pub open_op: OpenOp,
    pub docs: Vec<Doc>,
    pub flat: String,
    /// The extra indent this level resolved to, after evaluating any
    /// conditional indent against the final state.
    pub eval_plus_indent: i64,
    pub is_one_line: bool,
}

/// The properties a level was opened with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOp {
    pub id: Id,
    pub plus_indent: Indent,
    pub break_behaviour: BreakBehaviour,
    pub breakability_if_last_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_limit_before_last_break: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_name: Option<String>,
}

/// An indent amount, either constant or conditional on a break decision made
/// elsewhere in the document (linked by break-tag id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Indent {
    Const { amount: i64 },
    If(Box<ConditionalIndent>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalIndent {
    pub condition: TagRef,
    pub then_indent: Indent,
    pub else_indent: Indent,
}

/// How the formatter decides whether to break a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BreakBehaviour {
    BreakThisLevel,
    PreferBreakingLastInnerLevel,
    BreakOnlyIfInnerLevelsThenFitOnOneLine,
}

impl BreakBehaviour {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakBehaviour::BreakThisLevel => "breakThisLevel",
            BreakBehaviour::PreferBreakingLastInnerLevel => "preferBreakingLastInnerLevel",
            BreakBehaviour::BreakOnlyIfInnerLevelsThenFitOnOneLine => {
                "breakOnlyIfInnerLevelsThenFitOnOneLine"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_round_trips_through_type_tags() {
        let json = serde_json::json!({
            "type": "level",
            "id": 10,
            "openOp": {
                "id": 11,
                "plusIndent": {"type": "const", "amount": 4},
                "breakBehaviour": {"type": "breakThisLevel"},
                "breakabilityIfLastLevel": "ABORT"
            },
            "docs": [
                {"type": "token", "id": 12, "flat": "foo"},
                {"type": "space"},
                {
                    "type": "break",
                    "id": 13,
                    "flat": " ",
                    "breakState": {"broken": true, "newIndent": 4},
                    "optTag": {"id": 7}
                }
            ],
            "flat": "foo ",
            "evalPlusIndent": 4,
            "isOneLine": false
        });

        let doc: Doc = serde_json::from_value(json).unwrap();
        let Doc::Level(level) = &doc else {
            panic!("expected level, got {:?}", doc)
        };
        assert_eq!(level.docs.len(), 3);
        assert_eq!(level.eval_plus_indent, 4);
        match &level.docs[2] {
            Doc::Break(b) => {
                assert!(b.break_state.broken);
                assert_eq!(b.opt_tag, Some(TagRef { id: 7 }));
            }
            other => panic!("expected break, got {:?}", other),
        }
    }

    #[test]
    fn conditional_indent_decodes_nested_branches() {
        let json = serde_json::json!({
            "type": "if",
            "condition": {"id": 42},
            "thenIndent": {"type": "const", "amount": 8},
            "elseIndent": {"type": "const", "amount": 0}
        });

        let indent: Indent = serde_json::from_value(json).unwrap();
        let Indent::If(cond) = indent else {
            panic!("expected conditional indent")
        };
        assert_eq!(cond.condition.id, 42);
        assert_eq!(cond.then_indent, Indent::Const { amount: 8 });
    }

    #[test]
    fn unknown_doc_tag_is_a_decode_error() {
        let err = serde_json::from_value::<Doc>(serde_json::json!({"type": "wat"}));
        assert!(err.is_err());
    }
}
