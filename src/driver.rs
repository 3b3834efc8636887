//! Top-level dispatch between flat and tree output, header emission, and
//! per-row traversal.

use std::io::Write;

use crate::error::ScolsError;
use crate::model::Table;

impl Table {
    fn print_header<W: Write>(&self, out: &mut W, scratch: &mut String) -> Result<(), ScolsError> {
        if self.no_headings || self.export || self.lines.is_empty() {
            return Ok(());
        }

        for idx in 0..self.columns.len() {
            let col = &self.columns[idx];
            let cell_color = col.header.color;
            scratch.clear();
            let data = match &col.header.data {
                Some(h) => {
                    scratch.push_str(h);
                    Some(scratch.as_str())
                }
                None => None,
            };
            self.format_cell(out, idx, cell_color, None, data)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_line<W: Write>(
        &self,
        out: &mut W,
        line_idx: usize,
        scratch: &mut String,
    ) -> Result<(), ScolsError> {
        for col_idx in 0..self.columns.len() {
            let present = self.line_get_data(line_idx, col_idx, scratch);
            let data = if present { Some(scratch.as_str()) } else { None };
            let cell_color = self.lines[line_idx]
                .cells
                .get(col_idx)
                .and_then(|c| c.color);
            let line_color = self.lines[line_idx].color;
            self.format_cell(out, col_idx, cell_color, line_color, data)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_tree_line<W: Write>(
        &self,
        out: &mut W,
        line_idx: usize,
        scratch: &mut String,
    ) -> Result<(), ScolsError> {
        self.print_line(out, line_idx, scratch)?;
        let children = self.lines[line_idx].children.clone();
        for child in children {
            self.print_tree_line(out, child.0, scratch)?;
        }
        Ok(())
    }

    pub(crate) fn print_table_flat<W: Write>(
        &self,
        out: &mut W,
        scratch: &mut String,
    ) -> Result<(), ScolsError> {
        self.print_header(out, scratch)?;
        for idx in 0..self.lines.len() {
            self.print_line(out, idx, scratch)?;
        }
        Ok(())
    }

    pub(crate) fn print_tree<W: Write>(
        &self,
        out: &mut W,
        scratch: &mut String,
    ) -> Result<(), ScolsError> {
        self.print_header(out, scratch)?;
        for idx in 0..self.lines.len() {
            if self.lines[idx].parent.is_none() {
                self.print_tree_line(out, idx, scratch)?;
            }
        }
        Ok(())
    }
}
