use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fmtscope_render::OpSpan;
use fmtscope_types::FillMode;

use super::Component;
use crate::ui::app::AppState;
use crate::ui::text::push_fragment;

/// The op stream as flowing styled text; token backgrounds are keyed to the
/// op id purely to tell adjacent tokens apart.
pub(crate) struct OpsComponent;

impl Component for OpsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut lines = Vec::new();

        for span in &state.ops {
            match span {
                OpSpan::Break {
                    fill_mode,
                    conditional,
                    ..
                } => {
                    let mut style = Style::default().fg(fill_mode_color(*fill_mode));
                    if *conditional {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    let marker = if *conditional {
                        format!("«B?:{}»", fill_mode.as_str())
                    } else {
                        format!("«B:{}»", fill_mode.as_str())
                    };
                    push_fragment(&mut lines, &marker, style);
                }
                OpSpan::Token {
                    before,
                    body,
                    after,
                    background,
                } => {
                    push_fragment(&mut lines, before, Style::default());
                    push_fragment(
                        &mut lines,
                        body,
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Rgb(background.r, background.g, background.b)),
                    );
                    push_fragment(&mut lines, after, Style::default());
                }
                OpSpan::Open { .. } => {
                    push_fragment(&mut lines, "«open»", Style::default().fg(Color::DarkGray));
                }
                OpSpan::Close { .. } => {
                    push_fragment(&mut lines, "«close»", Style::default().fg(Color::DarkGray));
                }
            }
        }

        let paragraph = Paragraph::new(lines)
            .scroll((state.ops_scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!("ops ({})", state.ops.len())),
            );
        f.render_widget(paragraph, area);
    }
}

fn fill_mode_color(fill_mode: FillMode) -> Color {
    match fill_mode {
        FillMode::Unified => Color::Blue,
        FillMode::Independent => Color::Magenta,
        FillMode::Forced => Color::Red,
    }
}
