// NOTE: fmtscope Architecture Rationale
//
// Why snapshot-file-in, nothing-out?
// - The formatter is the single trusted producer; it dumps one JSON object
//   per run and this tool only reads it (no validation, no persistence)
// - The snapshot path is an explicit startup parameter, not ambient global
//   state: loaded once before the first render, read-only thereafter
//
// Why two frontends over one view-model layer?
// - Console reports compose with unix tooling (pipe to less, diff two runs)
// - The TUI carries the interactive contracts: hover-driven cross
//   highlighting between the decision tree, the inline document and the
//   state panel
// - Both share fmtscope-render, so structure can only diverge in styling
//
// Why per-panel isolation in `report`?
// - A malformed subtree (unknown type tag) should abort that panel's
//   rendering, not blank the other panels of a debugging aid

mod args;
mod commands;
mod handlers;
pub mod output;
pub mod ui;

pub use args::{Cli, ColorChoice, Commands};
pub use commands::run;
