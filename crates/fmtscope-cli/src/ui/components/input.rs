use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::ui::app::AppState;

/// Raw input and final output, verbatim, side by side.
pub(crate) struct InputComponent;

impl Component for InputComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let input = Paragraph::new(state.snapshot.java_input.as_str())
            .scroll((state.input_scroll, 0))
            .block(titled_block("javaInput"));
        f.render_widget(input, halves[0]);

        let output = Paragraph::new(state.snapshot.java_output.as_str())
            .scroll((state.input_scroll, 0))
            .block(titled_block("javaOutput"));
        f.render_widget(output, halves[1]);
    }
}

fn titled_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string())
}
