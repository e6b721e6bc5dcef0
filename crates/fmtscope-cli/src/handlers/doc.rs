use anyhow::Result;
use fmtscope_render::InlineText;
use fmtscope_types::Doc;

use crate::output::format_doc_tree;

pub fn handle(doc: &Doc, inline: bool, enable_color: bool) -> Result<()> {
    if inline {
        println!("{}", InlineText::render(doc, 0).text());
    } else {
        for line in format_doc_tree(doc, enable_color)? {
            println!("{}", line);
        }
    }
    Ok(())
}
