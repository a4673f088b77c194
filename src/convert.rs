//! Nested / flattened outline conversion
//!
//! Document engines usually expose an outline as a node tree; the editor
//! works on the flattened, depth-annotated sequence. [`flatten_outline`]
//! walks the tree in pre-order and assigns depths; [`nest_outline`] rebuilds
//! the tree from depths, adopting any over-deep entry at the deepest open
//! level so nothing is dropped.

use crate::types::{OutlineEntry, OutlineNode};

/// Flatten a node tree into a pre-order, depth-annotated sequence
pub fn flatten_outline(nodes: &[OutlineNode]) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    flatten_into(nodes, 0, &mut entries);
    entries
}

/// Rebuild a node tree from a flattened sequence
///
/// Depth drives the reconstruction: an entry deeper than its predecessor
/// becomes that entry's child, an entry at the same or lower depth closes the
/// subtrees above it. Depth jumps of more than one (which violate the depth
/// invariant) are clamped: the entry is adopted one level below its
/// predecessor rather than lost.
pub fn nest_outline(entries: &[OutlineEntry]) -> Vec<OutlineNode> {
    let mut position = 0;
    let nodes = nest_run(entries, 0, &mut position);
    debug_assert_eq!(position, entries.len());
    nodes
}

// Helper functions

fn flatten_into(nodes: &[OutlineNode], depth: usize, out: &mut Vec<OutlineEntry>) {
    for node in nodes {
        out.push(OutlineEntry::new(node.title.clone(), node.page_index, depth));
        flatten_into(&node.children, depth + 1, out);
    }
}

/// Consume the run of entries belonging at `depth`, recursing for children
fn nest_run(entries: &[OutlineEntry], depth: usize, position: &mut usize) -> Vec<OutlineNode> {
    let mut nodes = Vec::new();
    while let Some(entry) = entries.get(*position) {
        if entry.depth < depth {
            break;
        }
        // Entries at this depth open a node here; so do deeper ones whose
        // ancestors are missing (the clamping case).
        *position += 1;
        let children = nest_run(entries, depth + 1, position);
        nodes.push(OutlineNode {
            title: entry.title.clone(),
            page_index: entry.page_index,
            children,
        });
    }
    nodes
}
