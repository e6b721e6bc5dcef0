use anyhow::{bail, Result};
use fmtscope_types::{Doc, Id, Indent};

/// Renderable form of a level's extra indent.
///
/// Constant and conditional indents render differently: a conditional one
/// shows the evaluated amount plus both branches as hover detail, and carries
/// the break-tag id it conditions on so hovering it can highlight the
/// matching breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentTag {
    Const {
        amount: i64,
    },
    Conditional {
        evaluated: i64,
        condition: Id,
        then_amount: i64,
        else_amount: i64,
    },
}

impl IndentTag {
    pub fn label(&self) -> String {
        match self {
            IndentTag::Const { amount } => format!("+{}", amount),
            IndentTag::Conditional { evaluated, .. } => format!("+{}", evaluated),
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            IndentTag::Const { .. } => None,
            IndentTag::Conditional {
                condition,
                then_amount,
                else_amount,
                ..
            } => Some(format!(
                "if broken({}) then +{} else +{}",
                condition, then_amount, else_amount
            )),
        }
    }

    pub fn condition(&self) -> Option<Id> {
        match self {
            IndentTag::Const { .. } => None,
            IndentTag::Conditional { condition, .. } => Some(*condition),
        }
    }
}

fn const_amount(indent: &Indent) -> Result<i64> {
    match indent {
        Indent::Const { amount } => Ok(*amount),
        Indent::If(_) => bail!("expected constant indent in conditional branch"),
    }
}

/// View form of an indent, `None` when there is nothing to show (+0).
pub fn indent_tag(indent: &Indent, evaluated: i64) -> Result<Option<IndentTag>> {
    match indent {
        Indent::Const { amount: 0 } => Ok(None),
        Indent::Const { amount } => Ok(Some(IndentTag::Const { amount: *amount })),
        Indent::If(cond) => Ok(Some(IndentTag::Conditional {
            evaluated,
            condition: cond.condition.id,
            then_amount: const_amount(&cond.then_indent)?,
            else_amount: const_amount(&cond.else_indent)?,
        })),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeSpanKind {
    Token,
    Space,
    /// `original` is the comment text before reflowing.
    Comment { original: String },
    /// A taken break; ends the current line.
    BreakTaken { new_indent: u32 },
    /// A break that was not taken, shown inline.
    BreakFlat,
    IndentTag(IndentTag),
    DebugName,
    BreakBehaviour,
    Breakability,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeSpan {
    pub text: String,
    pub kind: TreeSpanKind,
    /// Break-tag this span participates in: set on conditional breaks and on
    /// conditional indent tags, so highlight toggling is a class match, not a
    /// tree walk.
    pub break_tag: Option<Id>,
}

impl TreeSpan {
    fn plain(text: impl Into<String>, kind: TreeSpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            break_tag: None,
        }
    }
}

/// One output line of the tree layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    pub depth: usize,
    /// Level banner lines open a nesting block; content lines hold the
    /// level's inline docs.
    pub banner: bool,
    pub spans: Vec<TreeSpan>,
}

/// Lay out a document as nested blocks, one line per banner or run of inline
/// content. Levels with an empty flattened rendering contribute nothing.
pub fn build_tree(doc: &Doc) -> Result<Vec<TreeLine>> {
    let mut builder = TreeBuilder::default();
    builder.walk(doc, 0)?;
    builder.flush(0);
    Ok(builder.lines)
}

#[derive(Default)]
struct TreeBuilder {
    lines: Vec<TreeLine>,
    current: Vec<TreeSpan>,
}

impl TreeBuilder {
    fn walk(&mut self, doc: &Doc, depth: usize) -> Result<()> {
        match doc {
            // Skip levels without any contents
            Doc::Level(level) if level.flat.is_empty() => Ok(()),
            Doc::Level(level) => {
                self.flush(depth);

                let mut banner = Vec::new();
                if let Some(tag) = indent_tag(&level.open_op.plus_indent, level.eval_plus_indent)? {
                    banner.push(TreeSpan {
                        text: tag.label(),
                        break_tag: tag.condition(),
                        kind: TreeSpanKind::IndentTag(tag),
                    });
                }
                if let Some(name) = &level.open_op.debug_name {
                    banner.push(TreeSpan::plain(format!("\"{}\"", name), TreeSpanKind::DebugName));
                }
                if level.open_op.break_behaviour
                    != fmtscope_types::BreakBehaviour::BreakThisLevel
                {
                    banner.push(TreeSpan::plain(
                        level.open_op.break_behaviour.as_str(),
                        TreeSpanKind::BreakBehaviour,
                    ));
                }
                if level.open_op.breakability_if_last_level != "ABORT" {
                    banner.push(TreeSpan::plain(
                        level.open_op.breakability_if_last_level.clone(),
                        TreeSpanKind::Breakability,
                    ));
                }
                self.lines.push(TreeLine {
                    depth,
                    banner: true,
                    spans: banner,
                });

                for child in &level.docs {
                    self.walk(child, depth + 1)?;
                }
                self.flush(depth + 1);
                Ok(())
            }
            Doc::Break(b) => {
                let break_tag = b.opt_tag.map(|tag| tag.id);
                if b.break_state.broken {
                    self.current.push(TreeSpan {
                        text: "⏎".into(),
                        kind: TreeSpanKind::BreakTaken {
                            new_indent: b.break_state.new_indent,
                        },
                        break_tag,
                    });
                    self.flush(depth);
                } else {
                    let text = if b.flat.is_empty() {
                        "⏎".to_string()
                    } else {
                        format!("⏎({})", b.flat)
                    };
                    self.current.push(TreeSpan {
                        text,
                        kind: TreeSpanKind::BreakFlat,
                        break_tag,
                    });
                }
                Ok(())
            }
            Doc::Comment(c) => {
                self.current.push(TreeSpan {
                    text: c.text.clone(),
                    kind: TreeSpanKind::Comment {
                        original: c.flat.clone(),
                    },
                    break_tag: None,
                });
                Ok(())
            }
            Doc::Space(_) => {
                self.current.push(TreeSpan::plain(" ", TreeSpanKind::Space));
                Ok(())
            }
            Doc::Token(t) => {
                self.current
                    .push(TreeSpan::plain(t.flat.clone(), TreeSpanKind::Token));
                Ok(())
            }
        }
    }

    fn flush(&mut self, depth: usize) {
        if !self.current.is_empty() {
            self.lines.push(TreeLine {
                depth,
                banner: false,
                spans: std::mem::take(&mut self.current),
            });
        }
    }
}
