mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fmtscope")]
#[command(about = "Inspect the decision process of a Java formatter run", long_about = None)]
#[command(version)]
pub struct Cli {
    /// When to color console output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}
