use std::collections::HashMap;
use std::ops::Range;

use fmtscope_types::{Doc, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineSpanKind {
    Token,
    Space,
    Comment,
    /// Newline plus the indent of the next line.
    BreakTaken,
    /// The flat text of a break that was not taken.
    BreakFlat,
    /// Leading padding up to the starting column.
    Pad,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineSpan {
    pub text: String,
    pub kind: InlineSpanKind,
}

/// A document rendered with its actual resolved newlines and indentation,
/// plus a level-id index for highlighting.
///
/// `level_ranges` maps each level id to the contiguous range of spans the
/// level produced, so highlighting a level picked in the decision tree is a
/// map lookup rather than a re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineText {
    spans: Vec<InlineSpan>,
    level_ranges: HashMap<Id, Range<usize>>,
}

impl InlineText {
    pub fn render(doc: &Doc, starting_column: u32) -> Self {
        let mut inline = Self::padded(starting_column);
        inline.visit(doc);
        inline
    }

    /// Render a level subtree directly, e.g. an exploration's output level
    /// at the column it would have occupied in context.
    pub fn render_level(level: &fmtscope_types::DocLevel, starting_column: u32) -> Self {
        let mut inline = Self::padded(starting_column);
        inline.visit_level(level);
        inline
    }

    fn padded(starting_column: u32) -> Self {
        let mut inline = Self {
            spans: Vec::new(),
            level_ranges: HashMap::new(),
        };
        if starting_column > 0 {
            inline.spans.push(InlineSpan {
                text: " ".repeat(starting_column as usize),
                kind: InlineSpanKind::Pad,
            });
        }
        inline
    }

    pub fn spans(&self) -> &[InlineSpan] {
        &self.spans
    }

    /// Whole rendering as one string, e.g. for comparison against the final
    /// formatted output.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn level_range(&self, level_id: Id) -> Option<Range<usize>> {
        self.level_ranges.get(&level_id).cloned()
    }

    /// Whether a span is part of the given level's rendering.
    pub fn in_level(&self, span_index: usize, level_id: Id) -> bool {
        self.level_range(level_id)
            .map(|range| range.contains(&span_index))
            .unwrap_or(false)
    }

    fn visit(&mut self, doc: &Doc) {
        match doc {
            Doc::Break(b) => {
                if b.break_state.broken {
                    self.spans.push(InlineSpan {
                        text: format!("\n{}", " ".repeat(b.break_state.new_indent as usize)),
                        kind: InlineSpanKind::BreakTaken,
                    });
                } else {
                    self.spans.push(InlineSpan {
                        text: b.flat.clone(),
                        kind: InlineSpanKind::BreakFlat,
                    });
                }
            }
            // Levels that flatten to nothing contribute no output, matching
            // the tree layout's elision.
            Doc::Level(level) if level.flat.is_empty() => {}
            Doc::Level(level) => self.visit_level(level),
            Doc::Comment(c) => self.spans.push(InlineSpan {
                text: c.text.clone(),
                kind: InlineSpanKind::Comment,
            }),
            Doc::Space(_) => self.spans.push(InlineSpan {
                text: " ".into(),
                kind: InlineSpanKind::Space,
            }),
            Doc::Token(t) => self.spans.push(InlineSpan {
                text: t.flat.clone(),
                kind: InlineSpanKind::Token,
            }),
        }
    }

    fn visit_level(&mut self, level: &fmtscope_types::DocLevel) {
        let start = self.spans.len();
        for child in &level.docs {
            self.visit(child);
        }
        self.level_ranges.insert(level.id, start..self.spans.len());
    }
}
