// NOTE: fmtscope-render Architecture Rationale
//
// Why a separate view-model layer (not render straight from types)?
// - The same snapshot is rendered by two frontends (console reports, TUI)
//   that must agree on structure and only differ in styling
// - Hover/selection interactions need precomputed indexes (break-tag id ->
//   break nodes, level id -> inline span range) so a highlight toggle never
//   re-walks the document tree
// - Pure functions over (snapshot, view state) keep rendering idempotent:
//   same input + default state always yields the same structures
//
// Why borrowed view models (not owned copies)?
// - The snapshot is loaded once and read-only for the whole session; views
//   borrow into it instead of cloning Doc subtrees per node

pub mod color;
pub mod decisions;
pub mod doc_tree;
pub mod inline;
pub mod ops;
pub mod tag_index;

pub use color::{id_background, Rgb};
pub use decisions::{
    DecisionNode, DecisionNodeData, DecisionTreeView, RenderedExploration, SelectionEffects,
    StatePanel,
};
pub use doc_tree::{build_tree, IndentTag, TreeLine, TreeSpan, TreeSpanKind};
pub use inline::{InlineSpan, InlineSpanKind, InlineText};
pub use ops::{op_spans, OpSpan};
pub use tag_index::BreakTagIndex;
