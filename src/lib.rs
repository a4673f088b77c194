//! In-memory editor for document outlines
//!
//! A document outline (bookmark tree) is kept as a flat pre-order sequence of
//! title/page/depth entries, the shape list-backed outline panels render
//! directly. [`OutlineTree`] gives the sequence structure-aware editing:
//! inserting after a reference entry skips that entry's subtree, and removing
//! an entry takes its descendants with it. The depth invariant holds across
//! any mix of edits. [`OutlineSession`] wraps a tree together with the
//! document engine it came from, writing edits back at most once per session.
//!
//! # Example
//!
//! ```
//! use outline_edit::OutlineTree;
//!
//! let mut tree = OutlineTree::new();
//! tree.insert(0, "Introduction", 0, false)?;
//! tree.insert(1, "Motivation", 1, true)?;
//! tree.insert(1, "Background", 4, false)?;
//!
//! // "Background" lands after the whole "Introduction" subtree.
//! let titles: Vec<_> = tree.iter().map(|entry| entry.title.as_str()).collect();
//! assert_eq!(titles, ["Introduction", "Motivation", "Background"]);
//!
//! // Removing "Introduction" takes "Motivation" with it.
//! assert_eq!(tree.remove(0)?, 2);
//! # Ok::<(), outline_edit::OutlineError>(())
//! ```

pub mod convert;
pub mod display;
pub mod error;
pub mod session;
pub mod traits;
pub mod tree;
pub mod types;

pub use convert::{flatten_outline, nest_outline};
pub use display::{layout_rows, OutlineRow, RowOptions, DEFAULT_INDENT, DEFAULT_MAX_INDENT_DEPTH};
pub use error::{OutlineError, Result};
pub use session::OutlineSession;
pub use traits::{DocumentEngine, OutlineStore, PageNavigator};
pub use tree::OutlineTree;
pub use types::{OutlineEntry, OutlineNode};
