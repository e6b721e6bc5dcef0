use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use fmtscope_render::{
    doc_tree, DecisionNode, DecisionNodeData, InlineText, SelectionEffects, StatePanel,
};
use fmtscope_types::FormatterState;

use super::Component;
use crate::ui::app::AppState;
use crate::ui::text::push_fragment;

/// The exploration tree with its three linked panels: the inline document
/// (accepted-path highlight), the hovered exploration's rendered output, and
/// the formatter state before/after the hovered decision.
///
/// The cursor is the hover analogue: moving it restyles one row and refreshes
/// the side panels; the row list itself only changes on expand/collapse.
pub(crate) struct DecisionsComponent;

impl Component for DecisionsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let effects = state.decision_tree.effects();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);
        self.render_state_panel(f, left[0], state, &effects);
        self.render_tree(f, left[1], state);

        let has_output = effects.rendered_output.is_some();
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints(if has_output {
                [Constraint::Percentage(60), Constraint::Percentage(40)]
            } else {
                [Constraint::Percentage(100), Constraint::Percentage(0)]
            })
            .split(columns[1]);
        self.render_inline_doc(f, right[0], state, &effects);
        if has_output {
            self.render_exploration_output(f, right[1], &effects);
        }
    }
}

impl DecisionsComponent {
    fn render_tree(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let tree = &state.decision_tree;
        let items: Vec<ListItem> = tree
            .visible()
            .iter()
            .map(|&idx| ListItem::new(tree_row(&tree.nodes()[idx])))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("decision tree"),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
        let mut list_state = ListState::default().with_selected(Some(tree.cursor()));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_state_panel(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        effects: &SelectionEffects,
    ) {
        let node = state.decision_tree.hovered();
        let StatePanel {
            title,
            incoming,
            result,
        } = effects.states;

        let mut lines = vec![Line::from(vec![
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", node.detail()),
                Style::default().fg(Color::DarkGray),
            ),
        ])];
        if let Some(incoming) = incoming {
            lines.push(state_line("Incoming", incoming, Color::Blue));
        }
        if let Some(result) = result {
            lines.push(state_line("Result", result, Color::Green));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("node state"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_inline_doc(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        effects: &SelectionEffects,
    ) {
        let highlight = effects
            .highlight_level
            .and_then(|id| state.inline_doc.level_range(id));

        let mut lines = Vec::new();
        let mut first_highlighted_line = None;
        for (idx, span) in state.inline_doc.spans().iter().enumerate() {
            let highlighted = highlight
                .as_ref()
                .map(|range| range.contains(&idx))
                .unwrap_or(false);
            let style = if highlighted {
                if first_highlighted_line.is_none() {
                    first_highlighted_line = Some(lines.len().saturating_sub(1));
                }
                Style::default().bg(Color::Rgb(43, 61, 82))
            } else {
                Style::default()
            };
            push_fragment(&mut lines, &span.text, style);
        }

        // Keep the highlighted level on screen without the user scrolling.
        let scroll = first_highlighted_line
            .map(|line| (line as u16).saturating_sub(area.height / 2))
            .unwrap_or(0);

        let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("document"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_exploration_output(&self, f: &mut Frame, area: Rect, effects: &SelectionEffects) {
        let Some(output) = effects.rendered_output else {
            return;
        };

        let inline = InlineText::render_level(output.level, output.starting_column);
        let mut lines = Vec::new();
        for span in inline.spans() {
            push_fragment(&mut lines, &span.text, Style::default().fg(Color::Yellow));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title("rendered exploration output"),
        );
        f.render_widget(paragraph, area);
    }
}

fn tree_row(node: &DecisionNode) -> Line<'static> {
    let mut spans = vec![Span::raw("  ".repeat(node.depth))];

    let arrow = if node.is_leaf() {
        "· "
    } else if node.toggled {
        "▾ "
    } else {
        "▸ "
    };
    spans.push(Span::styled(arrow, Style::default().fg(Color::DarkGray)));

    let label_style = if node.active {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    spans.push(Span::styled(node.label(), label_style));

    if let DecisionNodeData::Exploration(e) = node.data {
        if let Some(result) = &e.result {
            let level = &result.output_level;
            if let Ok(Some(tag)) =
                doc_tree::indent_tag(&level.open_op.plus_indent, level.eval_plus_indent)
            {
                spans.push(Span::styled(
                    format!(" {}", tag.label()),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
    }

    spans.push(Span::styled(
        format!(" ({})", node.detail()),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}

fn state_line(tag: &'static str, state: &FormatterState, color: Color) -> Line<'static> {
    let rendered = state
        .entries()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(vec![
        Span::styled(
            format!("{:>8}: ", tag),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(rendered),
    ])
}
