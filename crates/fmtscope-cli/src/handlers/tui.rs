use anyhow::Result;
use fmtscope_types::DebugSnapshot;

pub fn handle(snapshot: &DebugSnapshot) -> Result<()> {
    crate::ui::run(snapshot)
}
