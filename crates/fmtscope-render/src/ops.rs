use fmtscope_types::{FillMode, Op};

use crate::color::{id_background, Rgb};

/// One renderable span of the op stream.
///
/// The op list is a faithful dump of the formatter's instruction stream; no
/// well-formedness of open/close nesting is checked here.
#[derive(Debug, Clone, PartialEq)]
pub enum OpSpan {
    Break {
        fill_mode: FillMode,
        conditional: bool,
        detail: String,
    },
    Token {
        before: String,
        body: String,
        after: String,
        /// Distinguishing background derived from the op id.
        background: Rgb,
    },
    Open {
        detail: String,
    },
    Close {
        detail: Option<String>,
    },
}

pub fn op_spans(ops: &[Op]) -> Vec<OpSpan> {
    ops.iter()
        .map(|op| match op {
            Op::Break(b) => OpSpan::Break {
                fill_mode: b.fill_mode,
                conditional: b.conditional,
                detail: b.summary.clone(),
            },
            Op::Token(t) => OpSpan::Token {
                before: t.before_text.clone(),
                body: t.text.clone(),
                after: t.after_text.clone(),
                background: id_background(t.id),
            },
            Op::Open(o) => OpSpan::Open {
                detail: o.summary.clone(),
            },
            Op::Close(c) => OpSpan::Close {
                detail: c.summary.clone(),
            },
        })
        .collect()
}
