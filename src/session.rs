//! Outline editing session
//!
//! Binds an [`OutlineTree`] to its document engine for the length of one
//! editing session: the outline is read once on open and edited in memory,
//! with write-back happening at most once when a dirty session ends. The
//! session is a
//! plain value: construct it when the outline panel opens, then `finish` or
//! `abandon` it when the panel closes.
//!
//! ```rust,ignore
//! use outline_edit::{OutlineSession, RowOptions};
//!
//! let mut session = OutlineSession::open(engine)?;
//!
//! // Bookmark the page the reader is on, as a child of entry 0.
//! session.insert(1, "Where I stopped", true)?;
//!
//! // Tapping a row outside edit mode jumps to its page.
//! let page = session.follow(0)?;
//!
//! // Render rows, then close; the write-back happens here, once.
//! let rows = session.rows(&RowOptions::default());
//! let engine = session.finish()?;
//! ```

use crate::display::{OutlineRow, RowOptions};
use crate::error::{OutlineError, Result};
use crate::traits::DocumentEngine;
use crate::tree::OutlineTree;
use crate::types::OutlineEntry;

/// One outline editing session over an open document
#[derive(Debug)]
pub struct OutlineSession<E> {
    engine: E,
    tree: OutlineTree,
}

impl<E: DocumentEngine> OutlineSession<E> {
    // ========================================================================
    // Session Lifecycle
    // ========================================================================

    /// Open a session by reading the document's outline
    ///
    /// A document without an outline starts the session with an empty tree.
    /// A stored sequence that violates the depth invariant is accepted as-is
    /// (the engine owns its data; both mutations stay well-defined) but logs
    /// a warning.
    pub fn open(engine: E) -> Result<Self> {
        let tree = OutlineTree::from_entries(engine.read_outline()?);

        if let Err(err) = tree.validate() {
            tracing::warn!(
                entries = tree.len(),
                error = %err,
                "Loaded outline violates the depth invariant, editing it as stored"
            );
        }
        tracing::debug!(entries = tree.len(), "Opened outline editing session");

        Ok(Self { engine, tree })
    }

    /// Write pending edits back to the document, keeping the session open
    ///
    /// Returns whether a write happened. On failure the edits stay pending,
    /// so a later call retries.
    pub fn flush(&mut self) -> Result<bool> {
        let flushed = self.tree.flush_into(&mut self.engine)?;
        if flushed {
            tracing::info!(entries = self.tree.len(), "Wrote outline back to document");
        }
        Ok(flushed)
    }

    /// End the session: flush pending edits and hand the engine back
    pub fn finish(mut self) -> Result<E> {
        self.flush()?;
        Ok(self.engine)
    }

    /// End the session without write-back, discarding pending edits
    pub fn abandon(self) -> E {
        if self.tree.is_dirty() {
            tracing::debug!(entries = self.tree.len(), "Discarded outline edits");
        }
        self.engine
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Insert an entry bookmarking the page currently shown
    ///
    /// Placement follows [`OutlineTree::insert`]; the target page is the
    /// engine's current page. Returns the position the entry landed at.
    pub fn insert(
        &mut self,
        reference_index: usize,
        title: impl Into<String>,
        as_child: bool,
    ) -> Result<usize> {
        let page_index = self.engine.current_page();
        let position = self.tree.insert(reference_index, title, page_index, as_child)?;
        tracing::debug!(position, page_index, "Inserted outline entry");
        Ok(position)
    }

    /// Insert an entry with an explicit target page
    ///
    /// Unlike [`insert`](OutlineSession::insert), the page is caller-chosen
    /// and checked against the document's page count.
    pub fn insert_at(
        &mut self,
        reference_index: usize,
        title: impl Into<String>,
        page_index: usize,
        as_child: bool,
    ) -> Result<usize> {
        let page_count = self.engine.page_count();
        if page_index >= page_count {
            return Err(OutlineError::PageOutOfRange {
                page_index,
                page_count,
            });
        }
        let position = self.tree.insert(reference_index, title, page_index, as_child)?;
        tracing::debug!(position, page_index, "Inserted outline entry");
        Ok(position)
    }

    /// Remove the entry at `index` and its descendant subtree
    ///
    /// Returns the number of entries removed.
    pub fn remove(&mut self, index: usize) -> Result<usize> {
        let removed = self.tree.remove(index)?;
        tracing::debug!(index, removed, "Removed outline subtree");
        Ok(removed)
    }

    /// Navigate the document to the entry's target page
    ///
    /// Returns the page navigated to.
    pub fn follow(&mut self, index: usize) -> Result<usize> {
        let page_index = match self.tree.get(index) {
            Some(entry) => entry.page_index,
            None => {
                return Err(OutlineError::IndexOutOfRange {
                    index,
                    len: self.tree.len(),
                })
            }
        };
        self.engine.go_to_page(page_index)?;
        Ok(page_index)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The tree under edit
    pub fn tree(&self) -> &OutlineTree {
        &self.tree
    }

    /// The current entry sequence, in pre-order
    pub fn entries(&self) -> &[OutlineEntry] {
        self.tree.entries()
    }

    /// Whether edits are pending write-back
    pub fn is_dirty(&self) -> bool {
        self.tree.is_dirty()
    }

    /// Presentation rows for the current sequence
    pub fn rows(&self, options: &RowOptions) -> Vec<OutlineRow> {
        self.tree.rows(options)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{OutlineStore, PageNavigator};

    /// Engine double: a vector-backed outline plus recorded navigation
    struct TestEngine {
        outline: Vec<OutlineEntry>,
        page_count: usize,
        current_page: usize,
        visited: Vec<usize>,
        writes: usize,
    }

    impl TestEngine {
        fn new(outline: Vec<OutlineEntry>, page_count: usize, current_page: usize) -> Self {
            Self {
                outline,
                page_count,
                current_page,
                visited: Vec::new(),
                writes: 0,
            }
        }
    }

    impl OutlineStore for TestEngine {
        fn read_outline(&self) -> Result<Vec<OutlineEntry>> {
            Ok(self.outline.clone())
        }

        fn write_outline(&mut self, entries: &[OutlineEntry]) -> Result<()> {
            self.outline = entries.to_vec();
            self.writes += 1;
            Ok(())
        }
    }

    impl PageNavigator for TestEngine {
        fn page_count(&self) -> usize {
            self.page_count
        }

        fn current_page(&self) -> usize {
            self.current_page
        }

        fn go_to_page(&mut self, page_index: usize) -> Result<()> {
            if page_index >= self.page_count {
                return Err(OutlineError::Engine(format!(
                    "page {page_index} past end of document"
                )));
            }
            self.current_page = page_index;
            self.visited.push(page_index);
            Ok(())
        }
    }

    fn chapter_outline() -> Vec<OutlineEntry> {
        vec![
            OutlineEntry::new("Chapter 1", 0, 0),
            OutlineEntry::new("Section 1.1", 2, 1),
            OutlineEntry::new("Chapter 2", 10, 0),
        ]
    }

    #[test]
    fn test_open_empty_document() {
        let session = OutlineSession::open(TestEngine::new(Vec::new(), 5, 0)).unwrap();

        assert!(session.entries().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_insert_targets_current_page() {
        let engine = TestEngine::new(chapter_outline(), 30, 7);
        let mut session = OutlineSession::open(engine).unwrap();

        let position = session.insert(3, "Bookmark", false).unwrap();

        assert_eq!(position, 3);
        assert_eq!(session.entries()[3].page_index, 7);
        assert_eq!(session.entries()[3].depth, 0);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_insert_at_validates_page() {
        let engine = TestEngine::new(Vec::new(), 12, 0);
        let mut session = OutlineSession::open(engine).unwrap();

        let result = session.insert_at(0, "Past the end", 12, false);
        assert!(matches!(
            result,
            Err(OutlineError::PageOutOfRange {
                page_index: 12,
                page_count: 12,
            })
        ));

        session.insert_at(0, "Last page", 11, false).unwrap();
        assert_eq!(session.entries()[0].page_index, 11);
    }

    #[test]
    fn test_follow_navigates_engine() {
        let engine = TestEngine::new(chapter_outline(), 30, 0);
        let mut session = OutlineSession::open(engine).unwrap();

        let page = session.follow(2).unwrap();
        assert_eq!(page, 10);

        assert!(session.follow(3).is_err());

        let engine = session.abandon();
        assert_eq!(engine.visited, vec![10]);
        assert_eq!(engine.current_page, 10);
    }

    #[test]
    fn test_finish_writes_once_when_dirty() {
        let engine = TestEngine::new(chapter_outline(), 30, 4);
        let mut session = OutlineSession::open(engine).unwrap();

        session.insert(1, "Note", true).unwrap();
        session.remove(3).unwrap();

        let engine = session.finish().unwrap();
        assert_eq!(engine.writes, 1);
        assert_eq!(engine.outline.len(), 3);
        assert_eq!(engine.outline[1].title, "Note");
    }

    #[test]
    fn test_finish_clean_session_writes_nothing() {
        let engine = TestEngine::new(chapter_outline(), 30, 0);
        let session = OutlineSession::open(engine).unwrap();

        let engine = session.finish().unwrap();
        assert_eq!(engine.writes, 0);
    }

    #[test]
    fn test_abandon_discards_edits() {
        let engine = TestEngine::new(chapter_outline(), 30, 0);
        let mut session = OutlineSession::open(engine).unwrap();

        session.remove(0).unwrap();
        assert!(session.is_dirty());

        let engine = session.abandon();
        assert_eq!(engine.writes, 0);
        assert_eq!(engine.outline, chapter_outline());
    }

    #[test]
    fn test_flush_is_retryable_and_idempotent() {
        let engine = TestEngine::new(Vec::new(), 10, 3);
        let mut session = OutlineSession::open(engine).unwrap();

        session.insert(0, "A", false).unwrap();

        assert!(session.flush().unwrap());
        assert!(!session.is_dirty());
        assert!(!session.flush().unwrap());

        let engine = session.finish().unwrap();
        assert_eq!(engine.writes, 1);
    }

    #[test]
    fn test_reopen_after_finish_round_trips() {
        let engine = TestEngine::new(chapter_outline(), 30, 5);
        let mut session = OutlineSession::open(engine).unwrap();

        session.insert(2, "Aside", true).unwrap();
        let edited = session.entries().to_vec();

        let engine = session.finish().unwrap();
        let reopened = OutlineSession::open(engine).unwrap();

        assert_eq!(reopened.entries(), edited.as_slice());
        assert!(!reopened.is_dirty());
    }

    #[test]
    fn test_open_accepts_malformed_outline() {
        // Depth jumps straight to 3: accepted, warned about, editable.
        let stored = vec![
            OutlineEntry::new("A", 0, 0),
            OutlineEntry::new("Deep", 1, 3),
        ];
        let engine = TestEngine::new(stored, 10, 0);
        let mut session = OutlineSession::open(engine).unwrap();

        assert_eq!(session.entries().len(), 2);
        session.remove(1).unwrap();
        assert_eq!(session.entries().len(), 1);
    }
}
