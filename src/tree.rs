//! Builds the leading branch art for a tree-column cell from its ancestor
//! chain.
//!
//! The ancestor chain is collected bottom-up into a `Vec` and then emitted
//! top-down, rather than recursing one stack frame per ancestor. Bounded
//! by heap, not stack, for arbitrarily deep forests.

use crate::model::Table;

impl Table {
    /// Append ascii-art for every ancestor of `start` that itself has a
    /// parent (the root of a chain contributes no art of its own). Returns
    /// `false` if the art would overflow the scratch buffer's sized
    /// capacity, which the caller treats as "absent data" for that cell.
    fn build_tree_prefix(&self, start: usize, buf: &mut String) -> bool {
        let mut chain = Vec::new();
        let mut node = start;
        while let Some(parent) = self.lines[node].parent {
            chain.push(node);
            node = parent.0;
        }

        for &ancestor in chain.iter().rev() {
            let art: &str = if self.is_last_child(ancestor) {
                "  "
            } else {
                self.symbols.vert.as_str()
            };
            if buf.len() + art.len() > self.scratch_cap {
                return false;
            }
            buf.push_str(art);
        }
        true
    }

    /// Render the display content of `line`'s cell in column `col_idx`
    /// into `buf` (cleared first). Returns `true` if data was present,
    /// `false` if the cell is absent (in which case `buf` is left empty).
    pub(crate) fn line_get_data(&self, line_idx: usize, col_idx: usize, buf: &mut String) -> bool {
        buf.clear();

        let data = match self.lines[line_idx]
            .cells
            .get(col_idx)
            .and_then(|c| c.data.as_deref())
        {
            Some(d) => d,
            None => return false,
        };

        let col = &self.columns[col_idx];
        if !col.tree {
            buf.push_str(data);
            return true;
        }

        let parent = self.lines[line_idx].parent;
        if let Some(parent) = parent {
            if !self.build_tree_prefix(parent.0, buf) {
                buf.clear();
                return false;
            }
        }

        match parent {
            None => buf.push_str(data),
            Some(_) if self.is_last_child(line_idx) => {
                buf.push_str(&self.symbols.right);
                buf.push_str(data);
            }
            Some(_) => {
                buf.push_str(&self.symbols.branch);
                buf.push_str(data);
            }
        }
        true
    }
}
