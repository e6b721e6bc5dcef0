use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use fmtscope_render::{IndentTag, TreeLine, TreeSpanKind};
use fmtscope_types::Id;

use super::Component;
use crate::ui::app::AppState;
use crate::ui::text::push_fragment;

/// The document tree next to its inline rendering.
///
/// Hovering a conditional indent tag highlights every break sharing its tag,
/// an id match against precomputed span annotations; nothing is rebuilt on
/// hover.
pub(crate) struct DocComponent;

impl Component for DocComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_tree(f, halves[0], state);
        self.render_inline(f, halves[1], state);
    }
}

impl DocComponent {
    fn render_tree(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("doc tree");

        let lines = match &state.doc_lines {
            Ok(lines) => lines,
            Err(message) => {
                // One malformed subtree must not take the whole screen down.
                let error = Paragraph::new(format!("doc panel failed: {}", message))
                    .style(Style::default().fg(Color::Red))
                    .block(block);
                f.render_widget(error, area);
                return;
            }
        };

        let hovered_tag = state.hovered_break_tag();
        let items: Vec<ListItem> = lines
            .iter()
            .map(|line| ListItem::new(tree_line(line, hovered_tag)))
            .collect();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut list_state = ListState::default().with_selected(Some(state.doc_cursor));
        f.render_stateful_widget(list, rows[0], &mut list_state);

        // Hover detail: the breaks a conditional indent tag points at, or a
        // reflowed comment's source text.
        let detail = state.hovered_doc_detail().unwrap_or_default();
        let detail = Paragraph::new(detail).style(Style::default().fg(Color::DarkGray));
        f.render_widget(detail, rows[1]);
    }

    fn render_inline(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut lines = Vec::new();
        for span in state.inline_doc.spans() {
            push_fragment(&mut lines, &span.text, Style::default());
        }
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("inline"),
        );
        f.render_widget(paragraph, area);
    }
}

fn tree_line(line: &TreeLine, hovered_tag: Option<Id>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ".repeat(line.depth))];

    if line.banner {
        spans.push(Span::styled("▸ ", Style::default().fg(Color::DarkGray)));
    }

    for (i, tree_span) in line.spans.iter().enumerate() {
        if line.banner && i > 0 {
            spans.push(Span::raw(" "));
        }

        let referenced = hovered_tag.is_some() && tree_span.break_tag == hovered_tag;
        let mut style = match &tree_span.kind {
            TreeSpanKind::IndentTag(IndentTag::Const { .. }) => {
                Style::default().fg(Color::Green)
            }
            TreeSpanKind::IndentTag(IndentTag::Conditional { .. }) => {
                Style::default().fg(Color::Yellow)
            }
            TreeSpanKind::BreakBehaviour => Style::default().fg(Color::Blue),
            TreeSpanKind::Breakability | TreeSpanKind::DebugName => {
                Style::default().fg(Color::DarkGray)
            }
            TreeSpanKind::BreakTaken { .. } | TreeSpanKind::BreakFlat => {
                Style::default().fg(Color::Cyan)
            }
            TreeSpanKind::Comment { .. } => Style::default().fg(Color::Green),
            TreeSpanKind::Token | TreeSpanKind::Space => Style::default(),
        };
        if referenced {
            style = style
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
        }

        let text = match &tree_span.kind {
            TreeSpanKind::IndentTag(tag) => match tag.detail() {
                Some(detail) => format!("[{}] ({})", tag.label(), detail),
                None => format!("[{}]", tag.label()),
            },
            _ => match tree_span.break_tag {
                Some(tag) if !line.banner => format!("{}#{}", tree_span.text, tag),
                _ => tree_span.text.clone(),
            },
        };
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}
