use anyhow::Result;
use owo_colors::OwoColorize;

use fmtscope_render::{DecisionTreeView, InlineText};
use fmtscope_types::LenientSnapshot;

use crate::output::{format_decisions, format_doc_tree, format_ops};

/// Render every panel in order. Panels are isolated: a panel whose data
/// failed to decode (or whose rendering hits malformed structure) reports its
/// own error and the remaining panels still render.
pub fn handle(snapshot: &LenientSnapshot, enable_color: bool) -> Result<()> {
    panel("javaInput", enable_color, || {
        let text = as_panel(&snapshot.java_input)?;
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
        Ok(())
    });

    panel("ops", enable_color, || {
        let ops = as_panel(&snapshot.ops)?;
        println!("{}", format_ops(ops, enable_color));
        Ok(())
    });

    panel("doc", enable_color, || {
        let doc = as_panel(&snapshot.doc)?;
        for line in format_doc_tree(doc, enable_color)? {
            println!("{}", line);
        }
        Ok(())
    });

    panel("doc (inline)", enable_color, || {
        let doc = as_panel(&snapshot.doc)?;
        println!("{}", InlineText::render(doc, 0).text());
        Ok(())
    });

    panel("formatterDecisions", enable_color, || {
        let decisions = as_panel(&snapshot.formatter_decisions)?;
        let view = DecisionTreeView::new(decisions);
        for line in format_decisions(&view, enable_color) {
            println!("{}", line);
        }
        Ok(())
    });

    panel("javaOutput", enable_color, || {
        let text = as_panel(&snapshot.java_output)?;
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
        Ok(())
    });

    Ok(())
}

fn as_panel<'a, T>(result: &'a fmtscope_types::Result<T>) -> Result<&'a T> {
    result
        .as_ref()
        .map_err(|e| anyhow::anyhow!("panel data failed to decode: {}", e))
}

fn panel(title: &str, enable_color: bool, render: impl FnOnce() -> Result<()>) {
    let header = format!("── {} ──", title);
    if enable_color {
        println!("{}", header.cyan().bold());
    } else {
        println!("{}", header);
    }

    if let Err(e) = render() {
        let msg = format!("[panel error] {:#}", e);
        if enable_color {
            eprintln!("{}", msg.red());
        } else {
            eprintln!("{}", msg);
        }
    }
    println!();
}
