//! Per-column width measurement: walks every row to compute a column's
//! natural width, tracking outliers along the way.

use crate::model::Table;
use crate::width::safe_width;

impl Table {
    /// Walk every line once for column `idx`, writing the measured widths
    /// onto the column's derived fields.
    ///
    /// `width` is reset each call: it is the natural width for this pass.
    /// `width_max` and `is_extreme`/`width_avg` persist across calls, so a
    /// column already flagged extreme has its outlier ignored on the next
    /// pass. `width_avg` is set once and never overwritten.
    pub(crate) fn measure_column(&mut self, idx: usize, scratch: &mut String) {
        let is_extreme = self.columns[idx].is_extreme;
        let no_extremes = self.columns[idx].no_extremes;
        let width_avg = self.columns[idx].width_avg;

        let mut width = 0usize;
        let mut width_max = self.columns[idx].width_max;
        let mut sum = 0usize;
        let mut count = 0usize;

        for line_idx in 0..self.lines.len() {
            let present = self.line_get_data(line_idx, idx, scratch);
            let len = if present {
                safe_width(scratch).unwrap_or(0)
            } else {
                0
            };

            if len > width_max {
                width_max = len;
            }

            if is_extreme && len > width_avg * 2 {
                // Outlier already flagged: ignore it for this pass's
                // natural width and for the no-extremes average.
            } else {
                if no_extremes {
                    sum += len;
                    count += 1;
                }
                if len > width {
                    width = len;
                }
            }
        }

        self.columns[idx].width_max = width_max;

        if count > 0 && self.columns[idx].width_avg == 0 {
            let avg = sum / count;
            self.columns[idx].width_avg = avg;
            if width_max > avg * 2 {
                self.columns[idx].is_extreme = true;
            }
        }

        self.columns[idx].width = width;

        if let Some(header) = self.columns[idx].header.data.clone() {
            self.columns[idx].width_min = safe_width(&header).unwrap_or(0);
        }

        let width_min = self.columns[idx].width_min;
        let strict_width = self.columns[idx].strict_width;
        let width_hint = self.columns[idx].width_hint;

        if self.columns[idx].width < width_min && !strict_width {
            self.columns[idx].width = width_min;
        } else if width_hint.raw() >= 1.0
            && (self.columns[idx].width as f64) < width_hint.raw()
            && (width_min as f64) < width_hint.raw()
        {
            self.columns[idx].width = width_hint.raw() as usize;
        }
    }
}
