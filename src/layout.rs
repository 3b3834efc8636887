//! Fits column widths to the terminal budget.
//!
//! Five phases, run only for human-readable output: seed, a non-terminal
//! shortcut, an extremes reduction pass, a grow-to-fit pass, and a
//! two-pass shrink (truncate-only, then unrestricted).

use log::trace;

use crate::model::Table;

impl Table {
    pub(crate) fn total_width(&self) -> usize {
        let ncols = self.columns.len();
        self.columns
            .iter()
            .enumerate()
            .map(|(i, c)| c.width + if i + 1 == ncols { 0 } else { 1 })
            .sum()
    }

    /// Fit column widths to `self.termwidth`. No-op (seed only) for
    /// non-terminal output.
    pub(crate) fn solve(&mut self, scratch: &mut String) {
        let ncols = self.columns.len();

        // Phase 1: seed.
        let mut total = 0usize;
        let mut extremes = 0usize;
        for idx in 0..ncols {
            self.measure_column(idx, scratch);
            total += self.columns[idx].width + if idx + 1 == ncols { 0 } else { 1 };
            extremes += self.columns[idx].is_extreme as usize;
        }
        trace!(
            "layout: seeded total={} termwidth={} extremes={}",
            total,
            self.termwidth,
            extremes
        );

        // Phase 2: non-terminal shortcut.
        if !self.is_term {
            return;
        }

        // Phase 3: extremes reduction. Runs once.
        if total > self.termwidth && extremes > 0 {
            for idx in 0..ncols {
                if !self.columns[idx].is_extreme {
                    continue;
                }
                let org_width = self.columns[idx].width;
                self.measure_column(idx, scratch);
                let new_width = self.columns[idx].width;
                if org_width > new_width {
                    total -= org_width - new_width;
                } else {
                    extremes -= 1;
                }
            }
            trace!("layout: after extremes reduction total={}", total);
        }

        if total < self.termwidth {
            // Phase 4a: extreme absorption.
            if extremes > 0 {
                for idx in 0..ncols {
                    if !self.columns[idx].is_extreme {
                        continue;
                    }
                    let mut add = self.termwidth - total;
                    if add == 0 {
                        break;
                    }
                    let width = self.columns[idx].width;
                    let width_max = self.columns[idx].width_max;
                    if width + add > width_max {
                        add = width_max.saturating_sub(width);
                    }
                    self.columns[idx].width += add;
                    total += add;
                    if total == self.termwidth {
                        break;
                    }
                }
            }

            if total < self.termwidth && self.maxout {
                // Phase 4b: round-robin fill. The inner loop breaks as soon
                // as the budget is hit. Bail out if a full sweep grows
                // nothing (e.g. zero columns) so this never spins forever.
                while total < self.termwidth {
                    let mut grew = false;
                    for idx in 0..ncols {
                        self.columns[idx].width += 1;
                        total += 1;
                        grew = true;
                        if total == self.termwidth {
                            break;
                        }
                    }
                    if !grew {
                        break;
                    }
                }
            } else if total < self.termwidth {
                // Phase 4c: last-column spill.
                if let Some(last) = self.columns.last() {
                    if !last.right && self.termwidth > total {
                        let add = self.termwidth - total;
                        let last_idx = ncols - 1;
                        self.columns[last_idx].width += add;
                        total = self.termwidth;
                    }
                }
            }
        }
        trace!("layout: after grow total={}", total);

        // Phase 5: shrink to fit, two passes.
        let mut trunc_only = true;
        while self.total_width() > self.termwidth {
            let org = self.total_width();

            for idx in 0..ncols {
                if self.total_width() <= self.termwidth {
                    break;
                }

                let (hint_raw, trunc, tree, width, width_min) = {
                    let col = &self.columns[idx];
                    (
                        col.width_hint.raw(),
                        col.trunc,
                        col.tree,
                        col.width,
                        col.width_min,
                    )
                };

                // Never touch columns with an absolute hint unless they
                // opted into truncation.
                if hint_raw > 1.0 && !trunc {
                    continue;
                }
                if tree {
                    continue;
                }
                if trunc_only && !trunc {
                    continue;
                }
                if width == width_min {
                    continue;
                }

                // The relative-floor check below applies to `width_hint`'s
                // raw value without first checking it's actually a
                // fraction, matching the absolute-hint shrink branch just
                // below it.
                if hint_raw < 1.0 && width > 0 && self.total_width() > 0 {
                    let floor = hint_raw * self.termwidth as f64;
                    if width as f64 > floor {
                        self.columns[idx].width -= 1;
                    }
                }
                let width = self.columns[idx].width;
                if hint_raw > 1.0 && width > 0 && self.total_width() > 0 && !trunc_only {
                    self.columns[idx].width -= 1;
                }
            }

            if self.total_width() == org {
                if trunc_only {
                    trunc_only = false;
                } else {
                    break; // give up: a full unrestricted sweep stalled.
                }
            }
        }
        trace!("layout: final total={}", self.total_width());
    }
}
