pub mod decisions;
pub mod doc;
pub mod error;
pub mod op;
pub mod snapshot;
pub mod state;

pub use decisions::*;
pub use doc::*;
pub use error::{Error, Result};
pub use op::*;
pub use snapshot::{DebugSnapshot, LenientSnapshot};
pub use state::FormatterState;

/// Node identifier assigned by the formatter.
///
/// Ids are unique within one snapshot but carry no other structure; the
/// formatter derives them from object identity, so negative values are legal.
pub type Id = i64;

/// A by-reference link to another node, e.g. a conditional indent pointing at
/// the break decision it depends on. Referencing, not owning: the referent
/// lives elsewhere in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TagRef {
    pub id: Id,
}
