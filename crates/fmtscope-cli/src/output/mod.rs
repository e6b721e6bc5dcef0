pub mod decisions;
pub mod doc_tree;
pub mod ops;

pub use decisions::format_decisions;
pub use doc_tree::format_doc_tree;
pub use ops::{format_op_details, format_ops};
