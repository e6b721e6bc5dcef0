use anyhow::Result;
use fmtscope_render::{build_tree, IndentTag, TreeSpanKind};
use fmtscope_types::Doc;
use owo_colors::OwoColorize;

/// Render the document as nested blocks, two spaces of indent per level.
pub fn format_doc_tree(doc: &Doc, enable_color: bool) -> Result<Vec<String>> {
    let lines = build_tree(doc)?;
    let mut out = Vec::with_capacity(lines.len());

    for line in &lines {
        let mut rendered = "  ".repeat(line.depth);

        if line.banner {
            rendered.push('▸');
            for span in &line.spans {
                rendered.push(' ');
                rendered.push_str(&banner_span(span, enable_color));
            }
        } else {
            for span in &line.spans {
                rendered.push_str(&content_span(span, enable_color));
            }
        }

        out.push(rendered);
    }

    Ok(out)
}

fn banner_span(span: &fmtscope_render::TreeSpan, enable_color: bool) -> String {
    match &span.kind {
        TreeSpanKind::IndentTag(tag) => {
            let label = format!("[{}]", tag.label());
            let mut text = if enable_color {
                match tag {
                    IndentTag::Const { .. } => label.green().to_string(),
                    IndentTag::Conditional { .. } => label.yellow().to_string(),
                }
            } else {
                label
            };
            if let Some(detail) = tag.detail() {
                let detail = format!(" ({})", detail);
                if enable_color {
                    text.push_str(&detail.bright_black().to_string());
                } else {
                    text.push_str(&detail);
                }
            }
            text
        }
        TreeSpanKind::BreakBehaviour => {
            if enable_color {
                span.text.blue().to_string()
            } else {
                span.text.clone()
            }
        }
        TreeSpanKind::Breakability => {
            if enable_color {
                span.text.bright_black().to_string()
            } else {
                span.text.clone()
            }
        }
        _ => span.text.clone(),
    }
}

fn content_span(span: &fmtscope_render::TreeSpan, enable_color: bool) -> String {
    let mut text = match &span.kind {
        TreeSpanKind::BreakTaken { .. } | TreeSpanKind::BreakFlat => {
            if enable_color {
                span.text.cyan().to_string()
            } else {
                span.text.clone()
            }
        }
        TreeSpanKind::Comment { original } => {
            let mut text = if enable_color {
                span.text.green().to_string()
            } else {
                span.text.clone()
            };
            // A reflowed comment also shows what the source actually said.
            if *original != span.text {
                let was = format!(" (was: {})", original);
                if enable_color {
                    text.push_str(&was.bright_black().to_string());
                } else {
                    text.push_str(&was);
                }
            }
            text
        }
        _ => span.text.clone(),
    };

    // Make the by-reference link visible: conditional breaks show the tag id
    // a conditional indent elsewhere may condition on.
    if let Some(tag) = span.break_tag {
        let suffix = format!("#{}", tag);
        if enable_color {
            text.push_str(&suffix.bright_black().to_string());
        } else {
            text.push_str(&suffix);
        }
    }

    text
}
