use anyhow::Result;
use fmtscope_render::DecisionTreeView;
use fmtscope_types::FormatterDecisions;

use crate::output::format_decisions;

pub fn handle(decisions: &FormatterDecisions, full: bool, enable_color: bool) -> Result<()> {
    let mut view = DecisionTreeView::new(decisions);
    if full {
        view.expand_all();
    }
    for line in format_decisions(&view, enable_color) {
        println!("{}", line);
    }
    Ok(())
}
