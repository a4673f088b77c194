//! Engine traits
//!
//! Seams toward the host document engine. The engine side of an editing
//! session is two concerns: the persisted outline ([`OutlineStore`]) and
//! paging ([`PageNavigator`]). [`DocumentEngine`] combines them for session
//! bounds.
//!
//! All calls are synchronous: outline editing runs on one logical thread and
//! never suspends, so implementations that front an async engine must block
//! internally.

use crate::error::Result;
use crate::types::OutlineEntry;

/// Access to a document's persisted outline
pub trait OutlineStore {
    /// Read the current outline as a flattened sequence
    ///
    /// A document without an outline yields an empty sequence.
    fn read_outline(&self) -> Result<Vec<OutlineEntry>>;

    /// Replace the document's outline with `entries`
    fn write_outline(&mut self, entries: &[OutlineEntry]) -> Result<()>;
}

/// Paging state and navigation of an open document
pub trait PageNavigator {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Zero-based index of the page currently shown
    fn current_page(&self) -> usize;

    /// Navigate to the given zero-based page
    fn go_to_page(&mut self, page_index: usize) -> Result<()>;
}

/// Combined engine handle for an editing session
pub trait DocumentEngine: OutlineStore + PageNavigator {}

impl<T: OutlineStore + PageNavigator> DocumentEngine for T {}
