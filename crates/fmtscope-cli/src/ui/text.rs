use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Append a styled fragment to a line list, splitting on embedded newlines.
///
/// ratatui spans cannot contain `\n`, but inline doc spans do (a taken break
/// renders as newline plus indent), so fragments are cut at line boundaries
/// while keeping one style per fragment.
pub fn push_fragment(lines: &mut Vec<Line<'static>>, text: &str, style: Style) {
    if lines.is_empty() {
        lines.push(Line::default());
    }
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        if !part.is_empty() {
            lines
                .last_mut()
                .expect("lines is never empty here")
                .spans
                .push(Span::styled(part.to_string(), style));
        }
    }
}
