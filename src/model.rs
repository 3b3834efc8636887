//! The data model: tables, columns, lines, and cells, plus the builder
//! surface a consumer uses to populate them.

use crossterm::style::Color;

use crate::error::ScolsError;
use crate::symbols::Symbols;

/// A real-valued column width hint: absolute (target character cells,
/// `>= 1`) or a fraction of the terminal width (`< 1`).
///
/// Modeled as a tagged variant rather than a bare `f64` with an implicit
/// threshold, so a column's intent is unambiguous in the public API. The
/// layout solver still needs the raw numeric value for its width
/// arithmetic; [`WidthHint::raw`] exposes it for that purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthHint {
    /// Target width in terminal cells.
    Absolute(usize),
    /// Fraction of the terminal width, in `[0, 1)`.
    Fraction(f64),
}

impl WidthHint {
    /// Build a hint from a single real value the way the column
    /// configuration API receives it: `>= 1` is absolute, `< 1` fractional.
    pub fn from_f64(v: f64) -> Self {
        if v >= 1.0 {
            WidthHint::Absolute(v as usize)
        } else {
            WidthHint::Fraction(v)
        }
    }

    pub fn raw(&self) -> f64 {
        match self {
            WidthHint::Absolute(n) => *n as f64,
            WidthHint::Fraction(f) => *f,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, WidthHint::Absolute(_))
    }
}

impl Default for WidthHint {
    fn default() -> Self {
        WidthHint::Fraction(0.0)
    }
}

/// `(data, color)`: a single cell's content.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub data: Option<String>,
    pub color: Option<Color>,
}

impl Cell {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            color: None,
        }
    }
}

/// An ordered member of the table's column list.
#[derive(Debug, Clone)]
pub struct Column {
    pub(crate) seqnum: usize,
    pub(crate) header: Cell,
    pub(crate) color: Option<Color>,
    pub(crate) width_hint: WidthHint,

    pub(crate) trunc: bool,
    pub(crate) right: bool,
    pub(crate) tree: bool,
    pub(crate) no_extremes: bool,
    pub(crate) strict_width: bool,

    // Derived during layout.
    pub(crate) width: usize,
    pub(crate) width_min: usize,
    pub(crate) width_max: usize,
    pub(crate) width_avg: usize,
    pub(crate) is_extreme: bool,
}

impl Column {
    /// A column with a header. `seqnum` is assigned when the column is
    /// registered with a [`Table`].
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            seqnum: 0,
            header: Cell::new(header),
            color: None,
            width_hint: WidthHint::default(),
            trunc: false,
            right: false,
            tree: false,
            no_extremes: false,
            strict_width: false,
            width: 0,
            width_min: 0,
            width_max: 0,
            width_avg: 0,
            is_extreme: false,
        }
    }

    /// A column with no header text at all (distinct from a column whose
    /// header is the empty string: `width_min` stays 0 either way, but a
    /// column without a header never contributes a header cell on print).
    pub fn new_unheaded() -> Self {
        Self {
            header: Cell {
                data: None,
                color: None,
            },
            ..Self::new("")
        }
    }

    pub fn seqnum(&self) -> usize {
        self.seqnum
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn header_color(mut self, color: Color) -> Self {
        self.header.color = Some(color);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Absolute (`>= 1`, character cells) or fractional (`< 1`, share of
    /// terminal width) width hint.
    pub fn width_hint(mut self, hint: f64) -> Self {
        self.width_hint = WidthHint::from_f64(hint);
        self
    }

    pub fn trunc(mut self) -> Self {
        self.trunc = true;
        self
    }

    pub fn right(mut self) -> Self {
        self.right = true;
        self
    }

    pub fn tree(mut self) -> Self {
        self.tree = true;
        self
    }

    pub fn no_extremes(mut self) -> Self {
        self.no_extremes = true;
        self
    }

    pub fn strict_width(mut self) -> Self {
        self.strict_width = true;
        self
    }
}

/// Opaque handle to a [`Line`] inside a [`Table`]'s line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub(crate) usize);

/// A row. Cells are positional, matching column `seqnum`.
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) cells: Vec<Cell>,
    pub(crate) color: Option<Color>,
    pub(crate) parent: Option<LineId>,
    pub(crate) children: Vec<LineId>,
}

impl Line {
    fn new(ncols: usize, parent: Option<LineId>) -> Self {
        Self {
            cells: (0..ncols).map(|_| Cell::default()).collect(),
            color: None,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<LineId> {
        self.parent
    }

    pub fn children(&self) -> &[LineId] {
        &self.children
    }

    /// Sum of raw byte lengths of this line's cell data, used to size the
    /// shared scratch buffer.
    pub(crate) fn cells_data_len(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.data.as_ref().map(|d| d.len()).unwrap_or(0))
            .sum()
    }
}

/// The root aggregate: an ordered column list, an ordered line arena
/// (root insertion order; parenting never reorders it), mode flags, and
/// terminal geometry.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) columns: Vec<Column>,
    pub(crate) lines: Vec<Line>,
    pub(crate) symbols: Symbols,

    pub(crate) raw: bool,
    pub(crate) export: bool,
    pub(crate) no_headings: bool,
    pub(crate) tree: bool,
    pub(crate) maxout: bool,
    pub(crate) colors_wanted: bool,

    pub(crate) termreduce: usize,
    pub(crate) is_term: bool,
    pub(crate) termwidth: usize,
    pub(crate) scratch_cap: usize,
    pub(crate) forced_width: Option<usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            lines: Vec::new(),
            symbols: Symbols::default(),
            raw: false,
            export: false,
            no_headings: false,
            tree: false,
            maxout: false,
            colors_wanted: false,
            termreduce: 0,
            is_term: false,
            termwidth: 80,
            scratch_cap: 0,
            forced_width: None,
        }
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn nlines(&self) -> usize {
        self.lines.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn with_column(mut self, mut col: Column) -> Self {
        col.seqnum = self.columns.len();
        self.columns.push(col);
        self
    }

    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn set_raw(mut self, v: bool) -> Self {
        self.raw = v;
        self
    }

    pub fn set_export(mut self, v: bool) -> Self {
        self.export = v;
        self
    }

    pub fn set_no_headings(mut self, v: bool) -> Self {
        self.no_headings = v;
        self
    }

    pub fn set_tree(mut self, v: bool) -> Self {
        self.tree = v;
        self
    }

    pub fn set_maxout(mut self, v: bool) -> Self {
        self.maxout = v;
        self
    }

    pub fn set_colors_wanted(mut self, v: bool) -> Self {
        self.colors_wanted = v;
        self
    }

    pub fn set_termreduce(mut self, v: usize) -> Self {
        self.termreduce = v;
        self
    }

    /// Append a new root line, returning a handle to it.
    pub fn new_line(&mut self) -> LineId {
        let id = LineId(self.lines.len());
        self.lines.push(Line::new(self.columns.len(), None));
        id
    }

    /// Append a new line parented under `parent`.
    pub fn new_child_line(&mut self, parent: LineId) -> Result<LineId, ScolsError> {
        if parent.0 >= self.lines.len() {
            return Err(ScolsError::InvalidArgument("parent line does not exist"));
        }
        let id = LineId(self.lines.len());
        self.lines.push(Line::new(self.columns.len(), Some(parent)));
        self.lines[parent.0].children.push(id);
        Ok(id)
    }

    pub fn set_cell_data(
        &mut self,
        line: LineId,
        col_seqnum: usize,
        data: impl Into<String>,
    ) -> Result<(), ScolsError> {
        let cell = self.cell_mut(line, col_seqnum)?;
        cell.data = Some(data.into());
        Ok(())
    }

    pub fn set_cell_color(
        &mut self,
        line: LineId,
        col_seqnum: usize,
        color: Color,
    ) -> Result<(), ScolsError> {
        let cell = self.cell_mut(line, col_seqnum)?;
        cell.color = Some(color);
        Ok(())
    }

    pub fn set_line_color(&mut self, line: LineId, color: Color) -> Result<(), ScolsError> {
        let ln = self
            .lines
            .get_mut(line.0)
            .ok_or(ScolsError::InvalidArgument("line does not exist"))?;
        ln.color = Some(color);
        Ok(())
    }

    fn cell_mut(&mut self, line: LineId, col_seqnum: usize) -> Result<&mut Cell, ScolsError> {
        if col_seqnum >= self.columns.len() {
            return Err(ScolsError::InvalidArgument("column seqnum out of range"));
        }
        let ln = self
            .lines
            .get_mut(line.0)
            .ok_or(ScolsError::InvalidArgument("line does not exist"))?;
        if col_seqnum >= ln.cells.len() {
            ln.cells.resize(col_seqnum + 1, Cell::default());
        }
        Ok(&mut ln.cells[col_seqnum])
    }

    pub(crate) fn is_last_column(&self, seqnum: usize) -> bool {
        seqnum + 1 == self.columns.len()
    }

    pub(crate) fn is_last_child(&self, line_idx: usize) -> bool {
        let line = &self.lines[line_idx];
        match line.parent {
            None => false,
            Some(parent) => self.lines[parent.0]
                .children
                .last()
                .map(|last| last.0 == line_idx)
                .unwrap_or(false),
        }
    }
}
