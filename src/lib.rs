//! A terminal table layout and rendering engine.
//!
//! Consumers build a [`Table`] of [`Column`]s and [`Line`](model::Line)s
//! (rows, optionally parented into a forest) and ask it to be printed in
//! one of four styles: raw, `KEY=VALUE` export, flat human-readable, or a
//! tree with branch art. The engine decides how wide each column becomes
//! given the terminal budget (the layout solver) and then emits the
//! formatted stream (the cell formatter).
//!
//! ```
//! use tablelayout::{Table, Column};
//!
//! let mut table = Table::new()
//!     .with_column(Column::new("NAME"))
//!     .with_column(Column::new("SIZE").right());
//!
//! let line = table.new_line();
//! table.set_cell_data(line, 0, "report.pdf").unwrap();
//! table.set_cell_data(line, 1, "128K").unwrap();
//!
//! let out = table.print_to_string().unwrap();
//! assert!(out.contains("report.pdf"));
//! ```

mod driver;
mod error;
mod format;
mod layout;
mod measure;
mod model;
mod symbols;
mod tree;
mod width;


use std::io::{self, IsTerminal, Write};

use log::debug;

pub use error::ScolsError;
pub use model::{Cell, Column, Line, LineId, Table, WidthHint};
pub use symbols::Symbols;
pub use width::{fputs_nonblank, fputs_quoted, safe_encode, safe_width, truncate};

const DEFAULT_TERMWIDTH: usize = 80;

impl Table {
    /// Bypass real terminal-size discovery and pretend output is going to
    /// a terminal of the given width. Chiefly useful for deterministic
    /// tests and for consumers that already know the target width (a
    /// `--width` flag, a pager's reported geometry, …).
    pub fn force_width(mut self, width: usize) -> Self {
        self.is_term = true;
        self.termwidth = width;
        self.forced_width = Some(width);
        self
    }

    fn resolve_geometry(&mut self) {
        if let Some(w) = self.forced_width {
            self.is_term = true;
            self.termwidth = w;
        } else {
            self.is_term = io::stdout().is_terminal();
            self.termwidth = if self.is_term {
                crossterm::terminal::size()
                    .map(|(w, _)| w as usize)
                    .unwrap_or(DEFAULT_TERMWIDTH)
            } else {
                0
            };
            if self.termwidth == 0 {
                self.termwidth = DEFAULT_TERMWIDTH;
            }
        }
        self.termwidth = self.termwidth.saturating_sub(self.termreduce);
    }

    fn longest_row_bytes(&self) -> usize {
        self.lines().iter().map(|line| line.cells_data_len()).max().unwrap_or(0)
    }

    /// Print the table to `out`. Runs the layout solver first unless the
    /// table is in raw or export mode.
    pub fn print<W: Write>(&mut self, out: &mut W) -> Result<(), ScolsError> {
        self.resolve_geometry();

        self.scratch_cap = self.termwidth.max(self.longest_row_bytes()) + 1;
        let mut scratch = String::with_capacity(self.scratch_cap);

        debug!(
            "print: is_term={} termwidth={} ncols={} nlines={}",
            self.is_term,
            self.termwidth,
            self.ncols(),
            self.nlines()
        );

        if !(self.raw || self.export) {
            self.solve(&mut scratch);
        }

        if self.tree {
            self.print_tree(out, &mut scratch)
        } else {
            self.print_table_flat(out, &mut scratch)
        }
    }

    /// Print to an in-memory buffer instead of a caller-supplied sink.
    pub fn print_to_string(&mut self) -> Result<String, ScolsError> {
        let mut buf: Vec<u8> = Vec::new();
        self.print(&mut buf)?;
        String::from_utf8(buf).map_err(|_| ScolsError::Unsupported)
    }
}
