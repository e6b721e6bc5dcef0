use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render every panel of a snapshot (input, ops, doc, decisions, output)")]
    Report {
        /// Snapshot JSON file written by the formatter
        snapshot: PathBuf,
    },

    #[command(about = "Print the raw source text handed to the formatter")]
    Input { snapshot: PathBuf },

    #[command(about = "Print the final formatted output")]
    Output { snapshot: PathBuf },

    #[command(about = "Render the formatter's low-level op stream")]
    Ops {
        snapshot: PathBuf,

        /// One op per line, with the formatter's own debug rendering
        #[arg(long)]
        detail: bool,
    },

    #[command(about = "Render the document tree")]
    Doc {
        snapshot: PathBuf,

        /// Render with resolved newlines instead of the nested tree layout
        #[arg(long)]
        inline: bool,
    },

    #[command(about = "Render the exploration decision tree")]
    Decisions {
        snapshot: PathBuf,

        /// Expand every node instead of just the accepted path
        #[arg(long)]
        full: bool,
    },

    #[command(about = "Inspect a snapshot interactively")]
    Tui { snapshot: PathBuf },
}
