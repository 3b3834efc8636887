//! Renders a single cell's bytes: encoding, alignment, padding, color,
//! truncation, overflow wrap, and separator insertion.

use std::io::{self, Write};

use crossterm::style::{ResetColor, SetForegroundColor, Color};

use crate::error::ScolsError;
use crate::model::Table;
use crate::width::{fputs_nonblank, fputs_quoted, safe_encode, truncate};

impl Table {
    /// Render one already-resolved cell value (`data`, `None` meaning
    /// absent) for column `col_idx`. `cell_color` and `line_color` are the
    /// two higher-precedence color sources above the column's own default;
    /// resolution order is `cell ▷ line ▷ column`, applied only when the
    /// table has `colors_wanted`.
    pub(crate) fn format_cell<W: Write>(
        &self,
        out: &mut W,
        col_idx: usize,
        cell_color: Option<Color>,
        line_color: Option<Color>,
        data: Option<&str>,
    ) -> Result<(), ScolsError> {
        let is_last = self.is_last_column(col_idx);
        let data = data.unwrap_or("");

        if self.raw {
            fputs_nonblank(data, out)?;
            if !is_last {
                write!(out, " ")?;
            }
            return Ok(());
        }

        if self.export {
            let header = self.columns[col_idx].header.data.as_deref().unwrap_or("");
            write!(out, "{}=", header)?;
            fputs_quoted(data, out)?;
            if !is_last {
                write!(out, " ")?;
            }
            return Ok(());
        }

        let col = &self.columns[col_idx];

        let color = if self.colors_wanted {
            cell_color.or(line_color).or(col.color)
        } else {
            None
        };

        let (encoded, encoded_width) = safe_encode(data);
        let mut len = encoded_width.unwrap_or(0);
        let mut text: Option<String> = if encoded_width.is_none() || len == 0 {
            None
        } else {
            Some(encoded)
        };

        let mut width = col.width;
        if is_last && len < width && !self.maxout {
            width = len;
        }

        if let Some(ref t) = text {
            if len > width && col.trunc {
                let (truncated, achieved) = truncate(t, width);
                text = Some(truncated);
                len = achieved;
                width = achieved;
            }
        }

        if let Some(ref t) = text {
            if col.right {
                let pad = col.width.saturating_sub(len);
                write_color(out, color, |out| {
                    for _ in 0..pad {
                        write!(out, " ")?;
                    }
                    write!(out, "{}", t)
                })?;
                if len < col.width {
                    len = col.width;
                }
            } else {
                write_color(out, color, |out| write!(out, "{}", t))?;
            }
        }

        for _ in len..width {
            write!(out, " ")?;
        }

        if !is_last {
            if len > width && !col.trunc {
                writeln!(out)?;
                for i in 0..=col_idx {
                    let w = self.columns[i].width;
                    for _ in 0..w {
                        write!(out, " ")?;
                    }
                    write!(out, " ")?;
                }
            } else {
                write!(out, " ")?;
            }
        }

        Ok(())
    }
}

fn write_color<W: Write>(
    out: &mut W,
    color: Option<Color>,
    body: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    if let Some(c) = color {
        write!(out, "{}", SetForegroundColor(c))?;
    }
    body(out)?;
    if color.is_some() {
        write!(out, "{}", ResetColor)?;
    }
    Ok(())
}
