//! Character-grid output strategy.
//!
//! Each wire owns three print-lines (top and bottom decoration around a
//! body line) that grow one fixed-width cell per time-column. Columns
//! close lazily: an operation marks the rows it touched as occupied,
//! and the column only closes when a later operation would overlap an
//! occupied row. On close, every unoccupied row receives one filler
//! cell chosen by its lifecycle state, so all rows stay equal length.

use crate::backend::{Backend, Condition, GateOp, MeasureOp};
use crate::glyph::GlyphSet;
use crate::wire::{Branch, WireId, WireState, WireTable};

/// Three print-lines of one wire, stored cell by cell.
#[derive(Debug, Default)]
struct GridRow {
    top: Vec<String>,
    body: Vec<String>,
    bottom: Vec<String>,
    occupied: bool,
}

impl GridRow {
    fn push(&mut self, top: &str, body: impl Into<String>, bottom: &str) {
        self.top.push(top.to_string());
        self.body.push(body.into());
        self.bottom.push(bottom.to_string());
    }

    fn len(&self) -> usize {
        self.body.len()
    }
}

/// Grid formatter rendering the diagram as fixed-width glyph cells.
#[derive(Debug)]
pub struct GridBackend {
    rows: Vec<GridRow>,
    /// Completed cell count: every unoccupied row is exactly this long.
    cols: usize,
    glyphs: GlyphSet,
}

impl GridBackend {
    /// Create a grid formatter with the default box-drawing glyphs.
    pub fn new() -> Self {
        Self::with_glyphs(GlyphSet::unicode())
    }

    /// Create a grid formatter with a custom glyph vocabulary.
    pub fn with_glyphs(glyphs: GlyphSet) -> Self {
        Self {
            rows: Vec::new(),
            cols: 0,
            glyphs,
        }
    }

    /// Filler cell for a row's body line when a column closes over it.
    fn filler(&self, state: WireState) -> &'static str {
        match state {
            WireState::Active => self.glyphs.qwire,
            WireState::Released => self.glyphs.blank,
            WireState::Collapsed => self.glyphs.cwire,
        }
    }

    /// Close the current column: pad every unoccupied row with one
    /// filler cell and clear all occupancy flags.
    fn close_column(&mut self, wires: &WireTable) {
        for row in 0..self.rows.len() {
            if !self.rows[row].occupied {
                let body = self.filler(wires.state(row));
                self.rows[row].push(self.glyphs.blank, body, self.glyphs.blank);
            }
            self.rows[row].occupied = false;
        }
        self.cols += 1;
    }

    /// Close first if any row in `lo..=hi` already holds a glyph.
    fn ensure_free(&mut self, lo: usize, hi: usize, wires: &WireTable) {
        let conflict = self.rows[lo..=hi.min(self.rows.len() - 1)]
            .iter()
            .any(|r| r.occupied);
        if conflict {
            self.close_column(wires);
        }
    }

    /// Plain vertical connector through rows strictly inside a span.
    fn vertical_quantum(&mut self, lo: usize, hi: usize, wires: &WireTable) {
        for row in (lo + 1)..hi {
            if self.rows[row].occupied {
                continue;
            }
            let body = match wires.state(row) {
                WireState::Active => self.glyphs.vert_qcross,
                WireState::Released => self.glyphs.vert,
                WireState::Collapsed => self.glyphs.vert_ccross,
            };
            self.rows[row].push(self.glyphs.vert, body, self.glyphs.vert);
            self.rows[row].occupied = true;
        }
    }

    /// Double-line vertical connector through rows strictly between a
    /// gate row and a classical row.
    fn vertical_classical(&mut self, a: usize, b: usize, wires: &WireTable) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for row in (lo + 1)..hi {
            if self.rows[row].occupied {
                continue;
            }
            let body = match wires.state(row) {
                WireState::Active => self.glyphs.cvert_qcross,
                WireState::Released => self.glyphs.cvert,
                WireState::Collapsed => self.glyphs.cvert_ccross,
            };
            self.rows[row].push(self.glyphs.cvert, body, self.glyphs.cvert);
            self.rows[row].occupied = true;
        }
    }

    /// Swap the middle of a gate's bottom edge for the double-line
    /// stub, if that edge is a plain horizontal run.
    fn stamp_stub(&mut self, row: usize) {
        let Some(cell) = self.rows[row].bottom.last_mut() else {
            return;
        };
        let mut chars: Vec<char> = cell.chars().collect();
        let mid = chars.len() / 2;
        if chars[mid] == self.glyphs.wire_dash {
            chars[mid] = self.glyphs.meter_stub;
            *cell = chars.into_iter().collect();
        }
    }

    /// Classical-control annotation: stub on the gate's bottom edge, a
    /// branch dot on the context's classical row, and a double-line
    /// connector between them.
    fn annotate(&mut self, gate_row: usize, condition: &Condition, wires: &WireTable) {
        if condition.row > gate_row {
            self.stamp_stub(gate_row);
        }
        let dot = match condition.branch {
            Branch::One => self.glyphs.cdot_one,
            Branch::Zero => self.glyphs.cdot_zero,
        };
        if self.rows[condition.row].occupied {
            // The operation's own connector already crossed the
            // classical row in this column; the dot lands on that cell.
            if let Some(cell) = self.rows[condition.row].body.last_mut() {
                *cell = dot.to_string();
            }
        } else {
            // Orient the stem toward the gate the dot conditions.
            let (top, bottom) = if condition.row > gate_row {
                (self.glyphs.cvert, self.glyphs.blank)
            } else {
                (self.glyphs.blank, self.glyphs.cvert)
            };
            self.rows[condition.row].push(top, dot, bottom);
            self.rows[condition.row].occupied = true;
        }
        self.vertical_classical(gate_row, condition.row, wires);
    }
}

impl Default for GridBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for GridBackend {
    fn allocate(&mut self, _wire: WireId, row: usize, revived: bool, wires: &WireTable) {
        if revived {
            // Revival forces a column break; the released row picks up
            // a blank filler cell which the fresh ket then overwrites.
            if self.rows[row].occupied {
                self.close_column(wires);
            }
            self.close_column(wires);
            if let Some(cell) = self.rows[row].body.last_mut() {
                *cell = self.glyphs.ket.to_string();
            }
            return;
        }

        debug_assert_eq!(row, self.rows.len());
        let mut grid_row = GridRow::default();
        for _ in 0..self.cols.saturating_sub(1) {
            grid_row.push(self.glyphs.blank, self.glyphs.blank, self.glyphs.blank);
        }
        grid_row.push(self.glyphs.blank, self.glyphs.ket, self.glyphs.blank);
        self.rows.push(grid_row);
        if self.cols == 0 {
            self.cols = 1;
        }
    }

    fn release(&mut self, _wire: WireId, row: usize, wires: &WireTable) {
        if self.rows[row].occupied {
            self.close_column(wires);
        }
        self.rows[row].push(self.glyphs.blank, self.glyphs.bra, self.glyphs.blank);
        self.rows[row].occupied = true;
    }

    fn gate(&mut self, op: &GateOp<'_>, wires: &WireTable) {
        let touched: Vec<usize> = op
            .boxes
            .iter()
            .map(|b| b.row)
            .chain(op.crosses.iter().map(|&(_, r)| r))
            .chain(op.dots.iter().map(|&(_, r)| r))
            .collect();
        let Some((&lo, &hi)) = touched
            .iter()
            .min()
            .zip(touched.iter().max())
        else {
            return;
        };

        let mut free_lo = lo;
        let mut free_hi = hi;
        if let Some(cond) = &op.condition {
            free_lo = free_lo.min(cond.row);
            free_hi = free_hi.max(cond.row);
        }
        self.ensure_free(free_lo, free_hi, wires);

        for &(_, row) in &op.dots {
            let top = if row == lo { self.glyphs.blank } else { self.glyphs.vert };
            let bottom = if row == hi { self.glyphs.blank } else { self.glyphs.vert };
            self.rows[row].push(top, self.glyphs.control_dot, bottom);
            self.rows[row].occupied = true;
        }

        for &(_, row) in &op.crosses {
            let top = if row == lo { self.glyphs.blank } else { self.glyphs.vert };
            let bottom = if row == hi { self.glyphs.blank } else { self.glyphs.vert };
            self.rows[row].push(top, self.glyphs.swap_cross, bottom);
            self.rows[row].occupied = true;
        }

        for b in &op.boxes {
            let top = if b.row > lo {
                self.glyphs.box_top_join
            } else {
                self.glyphs.box_top
            };
            let bottom = if b.row < hi {
                self.glyphs.box_bottom_join
            } else {
                self.glyphs.box_bottom
            };
            let body = self.glyphs.box_body(&b.label);
            self.rows[b.row].push(top, body, bottom);
            self.rows[b.row].occupied = true;
        }

        self.vertical_quantum(lo, hi, wires);

        if let Some(cond) = &op.condition {
            self.annotate(hi, cond, wires);
        }
    }

    fn measure(&mut self, op: &MeasureOp, wires: &WireTable) {
        let lo = op.boxes.iter().map(|b| b.row).min().unwrap_or(0);
        let hi = op.boxes.iter().map(|b| b.row).max().unwrap_or(0);

        // The classical connector runs from the lowest box through every
        // existing row below it, so all of them count as touched, as
        // does the condition row when it sits above the boxes.
        let mut free_lo = lo;
        if let Some(cond) = &op.condition {
            free_lo = free_lo.min(cond.row);
        }
        self.ensure_free(free_lo, self.rows.len().saturating_sub(1), wires);

        for b in &op.boxes {
            let top = if b.row > lo {
                self.glyphs.box_top_join
            } else {
                self.glyphs.box_top
            };
            let bottom = if b.row < hi {
                self.glyphs.box_bottom_join
            } else {
                self.glyphs.box_bottom_meter
            };
            let body = self.glyphs.box_body(&b.label);
            self.rows[b.row].push(top, body, bottom);
            self.rows[b.row].occupied = true;
        }

        self.vertical_quantum(lo, hi, wires);

        // Spawn the classical row, aligned under the measured column.
        debug_assert_eq!(op.classical_row, self.rows.len());
        let pad = self.rows[hi].len().saturating_sub(1);
        let mut grid_row = GridRow::default();
        for _ in 0..pad {
            grid_row.push(self.glyphs.blank, self.glyphs.blank, self.glyphs.blank);
        }
        grid_row.push(self.glyphs.cvert, self.glyphs.meter_elbow, self.glyphs.blank);
        grid_row.occupied = true;
        self.rows.push(grid_row);

        self.vertical_classical(hi, op.classical_row, wires);

        if let Some(cond) = &op.condition {
            self.annotate(hi, cond, wires);
        }
    }

    fn to_text(&self, wires: &WireTable) -> String {
        // Pad rows virtually so every emitted line has equal length,
        // without mutating the grid (snapshots must be idempotent).
        let width = if self.rows.iter().any(|r| r.occupied) {
            self.cols + 1
        } else {
            self.cols
        };

        let mut out = String::new();
        for (row, grid_row) in self.rows.iter().enumerate() {
            let pad = width - grid_row.len();
            for cell in &grid_row.top {
                out.push_str(cell);
            }
            for _ in 0..pad {
                out.push_str(self.glyphs.blank);
            }
            out.push('\n');

            for cell in &grid_row.body {
                out.push_str(cell);
            }
            for _ in 0..pad {
                out.push_str(self.filler(wires.state(row)));
            }
            out.push('\n');

            for cell in &grid_row.bottom {
                out.push_str(cell);
            }
            for _ in 0..pad {
                out.push_str(self.glyphs.blank);
            }
            out.push('\n');
        }
        out
    }
}
