use fmtscope_render::{
    build_tree, op_spans, BreakTagIndex, DecisionTreeView, InlineText, OpSpan, TreeLine,
    TreeSpanKind,
};
use fmtscope_types::{DebugSnapshot, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Input,
    Ops,
    Doc,
    Decisions,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Input, Tab::Ops, Tab::Doc, Tab::Decisions];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Input => "Input/Output",
            Tab::Ops => "Ops",
            Tab::Doc => "Doc",
            Tab::Decisions => "Decisions",
        }
    }
}

/// All mutable view state of a TUI session.
///
/// View models are built once from the snapshot; interactions only move
/// cursors, flip expansion flags and scroll offsets. The doc tree panel keeps
/// its build error instead of the lines when the snapshot carried a malformed
/// indent, so the other panels stay usable.
pub struct AppState<'a> {
    pub snapshot: &'a DebugSnapshot,
    pub tab: Tab,

    pub ops: Vec<OpSpan>,
    pub doc_lines: Result<Vec<TreeLine>, String>,
    pub tag_index: BreakTagIndex,
    pub inline_doc: InlineText,
    pub decision_tree: DecisionTreeView<'a>,

    pub input_scroll: u16,
    pub ops_scroll: u16,
    /// Cursor over the doc tree lines; hovering a conditional indent tag
    /// highlights the breaks sharing its tag.
    pub doc_cursor: usize,
}

impl<'a> AppState<'a> {
    pub fn new(snapshot: &'a DebugSnapshot) -> Self {
        Self {
            snapshot,
            tab: Tab::Input,
            ops: op_spans(&snapshot.ops),
            doc_lines: build_tree(&snapshot.doc).map_err(|e| format!("{:#}", e)),
            tag_index: BreakTagIndex::build(&snapshot.doc),
            inline_doc: InlineText::render(&snapshot.doc, 0),
            decision_tree: DecisionTreeView::new(&snapshot.formatter_decisions),
            input_scroll: 0,
            ops_scroll: 0,
            doc_cursor: 0,
        }
    }

    pub fn next_tab(&mut self) {
        let idx = Tab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        self.tab = Tab::ALL[(idx + 1) % Tab::ALL.len()];
    }

    pub fn previous_tab(&mut self) {
        let idx = Tab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        self.tab = Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()];
    }

    pub fn select_next(&mut self) {
        match self.tab {
            Tab::Input => self.input_scroll = self.input_scroll.saturating_add(1),
            Tab::Ops => self.ops_scroll = self.ops_scroll.saturating_add(1),
            Tab::Doc => {
                let max = self.doc_line_count().saturating_sub(1);
                if self.doc_cursor < max {
                    self.doc_cursor += 1;
                }
            }
            Tab::Decisions => self.decision_tree.select_next(),
        }
    }

    pub fn select_previous(&mut self) {
        match self.tab {
            Tab::Input => self.input_scroll = self.input_scroll.saturating_sub(1),
            Tab::Ops => self.ops_scroll = self.ops_scroll.saturating_sub(1),
            Tab::Doc => self.doc_cursor = self.doc_cursor.saturating_sub(1),
            Tab::Decisions => self.decision_tree.select_previous(),
        }
    }

    pub fn toggle(&mut self) {
        if self.tab == Tab::Decisions {
            self.decision_tree.toggle_hovered();
        }
    }

    pub fn expand_all(&mut self) {
        if self.tab == Tab::Decisions {
            self.decision_tree.expand_all();
        }
    }

    fn doc_line_count(&self) -> usize {
        self.doc_lines.as_ref().map(|l| l.len()).unwrap_or(0)
    }

    /// Break-tag under the doc cursor, when the hovered line carries a
    /// conditional indent tag.
    pub fn hovered_break_tag(&self) -> Option<Id> {
        let lines = self.doc_lines.as_ref().ok()?;
        let line = lines.get(self.doc_cursor)?;
        line.spans.iter().find_map(|span| match &span.kind {
            TreeSpanKind::IndentTag(_) => span.break_tag,
            _ => None,
        })
    }

    /// Detail for the hovered doc tree line: which breaks a hovered indent
    /// tag conditions on (via the prebuilt index), or the pre-reflow text of
    /// a hovered comment.
    pub fn hovered_doc_detail(&self) -> Option<String> {
        if let Some(tag) = self.hovered_break_tag() {
            let breaks = self.tag_index.breaks_for(tag);
            return Some(format!(
                "tag {} conditions on {} break(s): {:?}",
                tag,
                breaks.len(),
                breaks
            ));
        }

        let lines = self.doc_lines.as_ref().ok()?;
        let line = lines.get(self.doc_cursor)?;
        line.spans.iter().find_map(|span| match &span.kind {
            TreeSpanKind::Comment { original } if *original != span.text => {
                Some(format!("comment before reflow: {}", original))
            }
            _ => None,
        })
    }
}
