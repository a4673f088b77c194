//! Flattened outline tree
//!
//! The editing core: an ordered, depth-annotated entry sequence with
//! structure-aware insertion and removal. Write-back is gated on a dirty
//! flag so an unedited outline never touches the store.
//!
//! Two invariants shape every mutation:
//!
//! - depths never jump up by more than one between adjacent entries, so the
//!   sequence always reads as a pre-order traversal;
//! - removal always takes an entry together with its contiguous descendant
//!   run, so no subtree is ever orphaned.

use crate::display::{layout_rows, OutlineRow, RowOptions};
use crate::error::{OutlineError, Result};
use crate::traits::OutlineStore;
use crate::types::OutlineEntry;

/// An editable, flattened outline
///
/// Holds the entry sequence for one editing session plus a dirty flag that
/// gates write-back: the sequence is pushed to an [`OutlineStore`] at most
/// once per dirty session, by [`flush_into`](OutlineTree::flush_into).
#[derive(Debug, Clone, Default)]
pub struct OutlineTree {
    entries: Vec<OutlineEntry>,
    dirty: bool,
}

impl OutlineTree {
    /// Create an empty outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an outline from an existing entry sequence
    ///
    /// The sequence is taken as-is; engines are authoritative for their own
    /// data. Use [`validate`](OutlineTree::validate) to check it against the
    /// depth invariant.
    pub fn from_entries(entries: Vec<OutlineEntry>) -> Self {
        Self {
            entries,
            dirty: false,
        }
    }

    /// The current entry sequence, in pre-order
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    /// Entry at `index`, if any
    pub fn get(&self, index: usize) -> Option<&OutlineEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the outline has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether in-memory state has diverged from the persisted outline
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Iterate over the entries in pre-order
    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.entries.iter()
    }

    /// Consume the tree, returning the entry sequence
    pub fn into_entries(self) -> Vec<OutlineEntry> {
        self.entries
    }

    /// Insert a new entry relative to the entry at `reference_index - 1`
    ///
    /// `reference_index` is the position *after* the reference entry; `0` is
    /// the head sentinel and inserts a top-level entry at the front (the only
    /// valid call on an empty outline).
    ///
    /// With `as_child`, the new entry becomes the reference entry's *first*
    /// child, placed immediately after it at depth + 1, even when the
    /// reference entry already has children. Otherwise the new entry becomes
    /// a sibling at the reference entry's depth, placed after its entire
    /// descendant run: at the first position ≥ `reference_index` whose depth
    /// is ≤ the reference depth, or at the end of the sequence when the run
    /// reaches it.
    ///
    /// Returns the position the entry landed at, so callers can refresh
    /// whatever view they render from. Marks the outline dirty.
    pub fn insert(
        &mut self,
        reference_index: usize,
        title: impl Into<String>,
        page_index: usize,
        as_child: bool,
    ) -> Result<usize> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(OutlineError::EmptyTitle);
        }
        if reference_index > self.entries.len() {
            return Err(OutlineError::IndexOutOfRange {
                index: reference_index,
                len: self.entries.len(),
            });
        }

        let (position, depth) = if reference_index == 0 {
            (0, 0)
        } else {
            let reference = &self.entries[reference_index - 1];
            if as_child {
                (reference_index, reference.depth + 1)
            } else {
                let reference_depth = reference.depth;
                let position = self.entries[reference_index..]
                    .iter()
                    .position(|entry| entry.depth <= reference_depth)
                    .map(|offset| reference_index + offset)
                    .unwrap_or(self.entries.len());
                (position, reference_depth)
            }
        };

        self.entries
            .insert(position, OutlineEntry::new(title, page_index, depth));
        self.dirty = true;
        Ok(position)
    }

    /// Remove the entry at `index` together with its descendant subtree
    ///
    /// The descendant run is the contiguous stretch of strictly deeper
    /// entries immediately after `index`; it ends at the first entry whose
    /// depth is ≤ the removed entry's depth, or at the end of the sequence.
    ///
    /// Returns the number of entries removed (1 + descendants). Marks the
    /// outline dirty.
    pub fn remove(&mut self, index: usize) -> Result<usize> {
        let removed = self.subtree_len(index)?;
        self.entries.drain(index..index + removed);
        self.dirty = true;
        Ok(removed)
    }

    /// Size of the subtree rooted at `index`, including the entry itself
    pub fn subtree_len(&self, index: usize) -> Result<usize> {
        let target_depth = match self.entries.get(index) {
            Some(entry) => entry.depth,
            None => {
                return Err(OutlineError::IndexOutOfRange {
                    index,
                    len: self.entries.len(),
                })
            }
        };

        let descendants = self.entries[index + 1..]
            .iter()
            .take_while(|entry| entry.depth > target_depth)
            .count();
        Ok(descendants + 1)
    }

    /// Check the depth invariant over the whole sequence
    ///
    /// A well-formed outline starts at depth 0 and never raises the depth by
    /// more than one between adjacent entries. Reports the first violation.
    pub fn validate(&self) -> Result<()> {
        if let Some(first) = self.entries.first() {
            if first.depth != 0 {
                return Err(OutlineError::RootDepth(first.depth));
            }
        }
        for (position, pair) in self.entries.windows(2).enumerate() {
            if pair[1].depth > pair[0].depth + 1 {
                return Err(OutlineError::DepthJump {
                    position: position + 1,
                    depth: pair[1].depth,
                    previous: pair[0].depth,
                });
            }
        }
        Ok(())
    }

    /// Write the sequence back to `store` if the outline is dirty
    ///
    /// Returns whether a write happened. Store failure propagates unchanged
    /// and leaves the dirty flag set, so a later call retries the write.
    pub fn flush_into<S>(&mut self, store: &mut S) -> Result<bool>
    where
        S: OutlineStore + ?Sized,
    {
        if !self.dirty {
            return Ok(false);
        }
        store.write_outline(&self.entries)?;
        self.dirty = false;
        Ok(true)
    }

    /// Presentation rows for the current sequence
    pub fn rows(&self, options: &RowOptions) -> Vec<OutlineRow> {
        layout_rows(&self.entries, options)
    }
}

impl<'a> IntoIterator for &'a OutlineTree {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
