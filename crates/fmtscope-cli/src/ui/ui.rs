use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
    Frame,
};

use super::app::{AppState, Tab};
use super::components::{
    Component, DecisionsComponent, DocComponent, InputComponent, OpsComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let selected = Tab::ALL.iter().position(|t| *t == state.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        Tab::Input => InputComponent.render(f, chunks[1], state),
        Tab::Ops => OpsComponent.render(f, chunks[1], state),
        Tab::Doc => DocComponent.render(f, chunks[1], state),
        Tab::Decisions => DecisionsComponent.render(f, chunks[1], state),
    }

    let hints = match state.tab {
        Tab::Decisions => " q quit │ tab switch │ j/k hover │ space toggle │ a expand all",
        Tab::Doc => " q quit │ tab switch │ j/k hover (indent tags highlight their breaks)",
        _ => " q quit │ tab switch │ j/k scroll",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}
