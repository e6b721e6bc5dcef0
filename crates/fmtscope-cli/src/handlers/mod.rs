pub mod decisions;
pub mod doc;
pub mod ops;
pub mod report;
pub mod text;
pub mod tui;
