//! Presentation rows
//!
//! Turns the flattened sequence into ready-to-render rows: titles indented
//! by depth (clamped, so a runaway hierarchy cannot push labels off screen)
//! and 1-based page numbers for display.

use serde::{Deserialize, Serialize};

use crate::types::OutlineEntry;

/// Default indent unit, one per depth level
pub const DEFAULT_INDENT: &str = "   ";

/// Deepest level that still increases indentation
pub const DEFAULT_MAX_INDENT_DEPTH: usize = 8;

/// Row layout options
#[derive(Debug, Clone)]
pub struct RowOptions {
    /// Indent unit repeated once per depth level
    pub indent: String,
    /// Depth levels beyond this indent as if they were at this level
    pub max_indent_depth: usize,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            max_indent_depth: DEFAULT_MAX_INDENT_DEPTH,
        }
    }
}

/// One display row of an outline listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    /// Indented title, ready for a flat list widget
    pub label: String,
    /// 1-based page number for display
    pub page_number: usize,
}

/// Lay out entries as display rows
pub fn layout_rows(entries: &[OutlineEntry], options: &RowOptions) -> Vec<OutlineRow> {
    entries
        .iter()
        .map(|entry| {
            let depth = entry.depth.min(options.max_indent_depth);
            let mut label =
                String::with_capacity(depth * options.indent.len() + entry.title.len());
            for _ in 0..depth {
                label.push_str(&options.indent);
            }
            label.push_str(&entry.title);

            OutlineRow {
                label,
                page_number: entry.page_index + 1,
            }
        })
        .collect()
}
