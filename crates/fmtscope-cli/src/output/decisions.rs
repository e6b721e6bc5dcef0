use fmtscope_render::{doc_tree, DecisionNodeData, DecisionTreeView};
use owo_colors::OwoColorize;

/// Render the currently visible rows of the decision tree.
///
/// With default expansion this prints the accepted path in full and collapses
/// the rejected alternatives, mirroring the interactive tree's initial state.
pub fn format_decisions(view: &DecisionTreeView, enable_color: bool) -> Vec<String> {
    let mut out = Vec::with_capacity(view.visible().len());

    for &idx in view.visible() {
        let node = &view.nodes()[idx];
        let mut line = "  ".repeat(node.depth);

        let arrow = if node.is_leaf() {
            "·"
        } else if node.toggled {
            "▾"
        } else {
            "▸"
        };
        line.push_str(arrow);
        line.push(' ');

        let label = node.label();
        if node.active && enable_color {
            line.push_str(&label.green().bold().to_string());
        } else if node.active {
            line.push_str(&format!("{} *", label));
        } else {
            line.push_str(&label);
        }

        match node.data {
            DecisionNodeData::Exploration(e) => {
                if let Some(preview) = indent_preview(e) {
                    line.push(' ');
                    if enable_color {
                        line.push_str(&preview.yellow().to_string());
                    } else {
                        line.push_str(&preview);
                    }
                }
                let detail = format!(" ({})", node.detail());
                if enable_color {
                    line.push_str(&detail.bright_black().to_string());
                } else {
                    line.push_str(&detail);
                }
            }
            DecisionNodeData::Level(_) => {
                let detail = format!(" ({})", node.detail());
                if enable_color {
                    line.push_str(&detail.bright_black().to_string());
                } else {
                    line.push_str(&detail);
                }
            }
        }

        out.push(line);
    }

    out
}

/// Indent preview for an exploration that produced an output level.
fn indent_preview(exploration: &fmtscope_types::ExplorationNode) -> Option<String> {
    let result = exploration.result.as_ref()?;
    let level = &result.output_level;
    doc_tree::indent_tag(&level.open_op.plus_indent, level.eval_plus_indent)
        .ok()
        .flatten()
        .map(|tag| tag.label())
}
