use fmtscope_render::{op_spans, OpSpan};
use fmtscope_types::{FillMode, Op};
use owo_colors::OwoColorize;

/// Render the op stream as one flowing string: tokens carry their own
/// leading/trailing text, breaks and level markers render as inline glyphs.
pub fn format_ops(ops: &[Op], enable_color: bool) -> String {
    let mut out = String::new();

    for span in op_spans(ops) {
        match span {
            OpSpan::Break {
                fill_mode,
                conditional,
                ..
            } => {
                let marker = if conditional {
                    format!("«B?:{}»", fill_mode.as_str())
                } else {
                    format!("«B:{}»", fill_mode.as_str())
                };
                if enable_color {
                    let colored = match fill_mode {
                        FillMode::Unified => marker.blue().to_string(),
                        FillMode::Independent => marker.magenta().to_string(),
                        FillMode::Forced => marker.red().to_string(),
                    };
                    if conditional {
                        out.push_str(&colored.underline().to_string());
                    } else {
                        out.push_str(&colored);
                    }
                } else {
                    out.push_str(&marker);
                }
            }
            OpSpan::Token {
                before,
                body,
                after,
                background,
            } => {
                out.push_str(&before);
                if enable_color {
                    out.push_str(
                        &body
                            .black()
                            .on_truecolor(background.r, background.g, background.b)
                            .to_string(),
                    );
                } else {
                    out.push_str(&body);
                }
                out.push_str(&after);
            }
            OpSpan::Open { .. } => {
                if enable_color {
                    out.push_str(&"«open»".bright_black().to_string());
                } else {
                    out.push_str("«open»");
                }
            }
            OpSpan::Close { .. } => {
                if enable_color {
                    out.push_str(&"«close»".bright_black().to_string());
                } else {
                    out.push_str("«close»");
                }
            }
        }
    }

    out
}

/// One op per line with the producer's debug rendering, the console stand-in
/// for the op tooltips.
pub fn format_op_details(ops: &[Op], enable_color: bool) -> Vec<String> {
    op_spans(ops)
        .into_iter()
        .map(|span| match span {
            OpSpan::Break {
                fill_mode,
                conditional,
                detail,
            } => {
                let marker = if conditional {
                    format!("«B?:{}»", fill_mode.as_str())
                } else {
                    format!("«B:{}»", fill_mode.as_str())
                };
                format!("{} {}", marker, dim(&detail, enable_color))
            }
            OpSpan::Token { body, .. } => body,
            OpSpan::Open { detail } => format!("«open» {}", dim(&detail, enable_color)),
            OpSpan::Close { detail } => match detail {
                Some(detail) => format!("«close» {}", dim(&detail, enable_color)),
                None => "«close»".into(),
            },
        })
        .collect()
}

fn dim(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}
