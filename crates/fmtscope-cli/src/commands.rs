use anyhow::{Context, Result};
use std::path::Path;

use fmtscope_types::{DebugSnapshot, LenientSnapshot};

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let color = cli.color.enabled();

    match cli.command {
        Commands::Report { snapshot } => {
            let lenient = load_lenient(&snapshot)?;
            handlers::report::handle(&lenient, color)
        }

        Commands::Input { snapshot } => {
            let lenient = load_lenient(&snapshot)?;
            let text = lenient.java_input.context("javaInput panel")?;
            handlers::text::handle(&text)
        }

        Commands::Output { snapshot } => {
            let lenient = load_lenient(&snapshot)?;
            let text = lenient.java_output.context("javaOutput panel")?;
            handlers::text::handle(&text)
        }

        Commands::Ops { snapshot, detail } => {
            let lenient = load_lenient(&snapshot)?;
            let ops = lenient.ops.context("ops panel")?;
            handlers::ops::handle(&ops, detail, color)
        }

        Commands::Doc { snapshot, inline } => {
            let lenient = load_lenient(&snapshot)?;
            let doc = lenient.doc.context("doc panel")?;
            handlers::doc::handle(&doc, inline, color)
        }

        Commands::Decisions { snapshot, full } => {
            let lenient = load_lenient(&snapshot)?;
            let decisions = lenient.formatter_decisions.context("formatterDecisions panel")?;
            handlers::decisions::handle(&decisions, full, color)
        }

        Commands::Tui { snapshot } => {
            let loaded = DebugSnapshot::load(&snapshot)
                .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;
            handlers::tui::handle(&loaded)
        }
    }
}

fn load_lenient(path: &Path) -> Result<LenientSnapshot> {
    DebugSnapshot::load_lenient(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))
}
