use std::collections::HashMap;

use fmtscope_types::{Doc, Id};

/// Index from break-tag id to the document break nodes carrying that tag.
///
/// Conditional indents reference break decisions made elsewhere in the tree
/// by shared tag id. Highlight-on-hover has to find every matching break for
/// an arbitrary tag, so the lookup is built once per snapshot instead of
/// walking the tree on each hover.
#[derive(Debug, Default)]
pub struct BreakTagIndex {
    by_tag: HashMap<Id, Vec<Id>>,
}

impl BreakTagIndex {
    pub fn build(doc: &Doc) -> Self {
        let mut index = Self::default();
        index.visit(doc);
        index
    }

    fn visit(&mut self, doc: &Doc) {
        match doc {
            Doc::Break(b) => {
                if let Some(tag) = b.opt_tag {
                    self.by_tag.entry(tag.id).or_default().push(b.id);
                }
            }
            Doc::Level(level) => {
                for child in &level.docs {
                    self.visit(child);
                }
            }
            Doc::Token(_) | Doc::Space(_) | Doc::Comment(_) => {}
        }
    }

    /// Ids of every break node tagged with `tag`, in document order.
    pub fn breaks_for(&self, tag: Id) -> &[Id] {
        self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_referenced(&self, tag: Id, break_id: Id) -> bool {
        self.breaks_for(tag).contains(&break_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmtscope_types::{
        BreakBehaviour, BreakState, DocBreak, DocLevel, DocToken, Indent, OpenOp, TagRef,
    };

    fn break_doc(id: Id, tag: Option<Id>) -> Doc {
        Doc::Break(DocBreak {
            id,
            flat: " ".into(),
            break_state: BreakState {
                broken: false,
                new_indent: 0,
            },
            opt_tag: tag.map(|id| TagRef { id }),
        })
    }

    fn level(id: Id, docs: Vec<Doc>) -> Doc {
        Doc::Level(DocLevel {
            id,
            open_op: OpenOp {
                id,
                plus_indent: Indent::Const { amount: 0 },
                break_behaviour: BreakBehaviour::BreakThisLevel,
                breakability_if_last_level: "ABORT".into(),
                column_limit_before_last_break: None,
                debug_name: None,
            },
            docs,
            flat: "x".into(),
            eval_plus_indent: 0,
            is_one_line: true,
        })
    }

    #[test]
    fn finds_all_breaks_sharing_a_tag_and_no_others() {
        // Two breaks share tag 7, one carries tag 9, one is unconditional.
        let doc = level(
            1,
            vec![
                break_doc(10, Some(7)),
                level(2, vec![break_doc(11, Some(9)), break_doc(12, Some(7))]),
                break_doc(13, None),
                Doc::Token(DocToken {
                    id: 14,
                    flat: "x".into(),
                }),
            ],
        );

        let index = BreakTagIndex::build(&doc);
        assert_eq!(index.breaks_for(7), &[10, 12]);
        assert_eq!(index.breaks_for(9), &[11]);
        assert!(index.breaks_for(8).is_empty());
        assert!(index.is_referenced(7, 12));
        assert!(!index.is_referenced(7, 11));
    }
}
