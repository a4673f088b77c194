//! Core outline types
//!
//! An outline (a document's table of contents / bookmark tree) appears in two
//! shapes: the flattened, depth-annotated sequence the editor works on, and
//! the nested node tree most document engines expose. Conversions between the
//! two live in [`crate::convert`].

use serde::{Deserialize, Serialize};

/// One entry of a flattened outline
///
/// Entries are ordered by pre-order traversal of the implied tree: an entry's
/// descendants are the contiguous run of following entries whose depth is
/// strictly greater than its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEntry {
    /// Entry label/title
    pub title: String,
    /// Zero-based target page
    pub page_index: usize,
    /// Nesting level; 0 = top-level, child = parent + 1
    pub depth: usize,
}

impl OutlineEntry {
    /// Create an entry at an explicit depth
    pub fn new(title: impl Into<String>, page_index: usize, depth: usize) -> Self {
        Self {
            title: title.into(),
            page_index,
            depth,
        }
    }

    /// Create a top-level entry
    pub fn top_level(title: impl Into<String>, page_index: usize) -> Self {
        Self::new(title, page_index, 0)
    }
}

/// One node of a nested outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    /// Node label/title
    pub title: String,
    /// Zero-based target page
    pub page_index: usize,
    /// Nested children
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a childless node
    pub fn new(title: impl Into<String>, page_index: usize) -> Self {
        Self {
            title: title.into(),
            page_index,
            children: Vec::new(),
        }
    }

    /// Create a node with children
    pub fn with_children(
        title: impl Into<String>,
        page_index: usize,
        children: Vec<OutlineNode>,
    ) -> Self {
        Self {
            title: title.into(),
            page_index,
            children,
        }
    }

    /// Number of nodes in this subtree, including the node itself
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OutlineNode::subtree_size)
            .sum::<usize>()
    }
}
