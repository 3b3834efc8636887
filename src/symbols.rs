//! Tree-drawing glyphs consulted by the tree prefixer.

/// Glyph table used to draw branch art for tree-mode output.
///
/// Borrowed by the engine for the lifetime of a print operation; never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    /// Printed for an ancestor level that still has following siblings.
    pub vert: String,
    /// Connector for a non-last child.
    pub branch: String,
    /// Connector for the last child of its parent.
    pub right: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            vert: "│ ".to_string(),
            branch: "├─".to_string(),
            right: "└─".to_string(),
        }
    }
}
