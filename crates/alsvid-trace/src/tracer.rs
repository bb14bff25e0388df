//! The diagram tracer: event validation, wire lifecycle, and the
//! classical-control stack.
//!
//! A [`Tracer`] is driven synchronously by one external event stream
//! (allocate / release / gate / measure / branch), mutating its state
//! one event at a time. Layout and text output are delegated to an
//! injected [`Backend`]; the tracer itself never touches characters.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::backend::{Backend, BoxGlyph, Condition, GateOp, MeasureOp};
use crate::error::{TraceError, TraceResult};
use crate::glyph::GlyphSet;
use crate::grid::GridBackend;
use crate::qpic::QpicBackend;
use crate::wire::{Basis, Branch, ResultId, WireId, WireState, WireTable};

/// Streaming renderer for one circuit diagram.
///
/// Single-threaded and strictly sequential: each call completes fully
/// before the next event is accepted, and rendering is append-only.
/// After any returned error the diagram state is undefined.
#[derive(Debug)]
pub struct Tracer<B> {
    wires: WireTable,
    backend: B,
    /// Active classical-control contexts, innermost last.
    contexts: Vec<(ResultId, Branch)>,
}

impl Tracer<GridBackend> {
    /// Tracer rendering a box-drawing character grid.
    pub fn grid() -> Self {
        Self::new(GridBackend::new())
    }

    /// Grid tracer with a custom glyph vocabulary.
    pub fn grid_with_glyphs(glyphs: GlyphSet) -> Self {
        Self::new(GridBackend::with_glyphs(glyphs))
    }
}

impl Tracer<QpicBackend> {
    /// Tracer emitting a qpic-style statement stream.
    pub fn qpic() -> Self {
        Self::new(QpicBackend::new())
    }
}

impl<B: Backend> Tracer<B> {
    /// Create a tracer over an arbitrary output strategy.
    pub fn new(backend: B) -> Self {
        Self {
            wires: WireTable::new(),
            backend,
            contexts: Vec::new(),
        }
    }

    /// The wire registry, for inspection.
    pub fn wires(&self) -> &WireTable {
        &self.wires
    }

    /// Handle an allocation event for an ordered sequence of handles.
    ///
    /// Unseen handles get a fresh row; released handles are revived in
    /// place after a forced column break. Allocating a handle that is
    /// already active is a contract violation.
    pub fn on_allocate(&mut self, handles: &[WireId]) -> TraceResult<()> {
        for &wire in handles {
            match self.wires.row(wire) {
                None => {
                    let row = self.wires.push_wire(wire);
                    debug!("allocated wire {wire} on row {row}");
                    self.backend.allocate(wire, row, false, &self.wires);
                }
                Some(row) if self.wires.state(row) == WireState::Released => {
                    debug!("revived wire {wire} on row {row}");
                    // The backend sees the row still Released so the
                    // forced column break pads it with blank filler.
                    self.backend.allocate(wire, row, true, &self.wires);
                    self.wires.set_state(row, WireState::Active);
                }
                Some(_) => return Err(TraceError::WireActive { wire }),
            }
        }
        Ok(())
    }

    /// Handle a release event for an ordered sequence of handles.
    ///
    /// Releasing an already-released handle is a defined no-op.
    pub fn on_release(&mut self, handles: &[WireId]) -> TraceResult<()> {
        for &wire in handles {
            let row = self.wires.row(wire).ok_or(TraceError::UnknownWire {
                wire,
                operation: Some("release".to_string()),
            })?;
            if self.wires.state(row) == WireState::Released {
                continue;
            }
            debug!("released wire {wire} on row {row}");
            self.backend.release(wire, row, &self.wires);
            self.wires.set_state(row, WireState::Released);
        }
        Ok(())
    }

    /// Render one gate event.
    ///
    /// `suffixes`, when present, must match `targets` in length and is
    /// appended per-target to the box label (connected gates such as
    /// `e` with per-axis suffixes). A name of `swap` with exactly two
    /// targets renders crosses instead of boxes. Zero-length target
    /// lists are a defined no-op.
    pub fn render_gate(
        &mut self,
        name: &str,
        targets: &[WireId],
        controls: &[WireId],
        suffixes: Option<&[&str]>,
    ) -> TraceResult<()> {
        if targets.is_empty() {
            return Ok(());
        }
        if let Some(suffixes) = suffixes {
            if suffixes.len() != targets.len() {
                return Err(TraceError::LabelCountMismatch {
                    operation: name.to_string(),
                    targets: targets.len(),
                    labels: suffixes.len(),
                });
            }
        }

        let target_rows = self.resolve(targets, name)?;
        let control_rows = self.resolve(controls, name)?;
        self.check_disjoint(targets, &target_rows, controls, &control_rows, name)?;

        let is_swap = name.eq_ignore_ascii_case("swap") && targets.len() == 2;
        let (boxes, crosses) = if is_swap {
            let crosses = targets.iter().copied().zip(target_rows).collect();
            (Vec::new(), crosses)
        } else {
            let boxes = targets
                .iter()
                .zip(&target_rows)
                .enumerate()
                .map(|(i, (&wire, &row))| BoxGlyph {
                    wire,
                    row,
                    label: match suffixes {
                        Some(s) => format!("{name}{}", s[i]),
                        None => name.to_string(),
                    },
                })
                .collect();
            (boxes, Vec::new())
        };

        let op = GateOp {
            name,
            boxes,
            crosses,
            dots: controls.iter().copied().zip(control_rows).collect(),
            labelled: suffixes.is_some(),
            condition: self.condition(),
        };
        debug!("rendering gate {name} on {} target(s)", targets.len());
        self.backend.gate(&op, &self.wires);
        Ok(())
    }

    /// Render a swap of two wires, with optional controls.
    pub fn swap(&mut self, a: WireId, b: WireId, controls: &[WireId]) -> TraceResult<()> {
        self.render_gate("swap", &[a, b], controls, None)
    }

    /// Render a measurement event and spawn its classical wire.
    ///
    /// Targets and bases must match in length. Returns the opaque
    /// handle for later classical-control blocks; no outcome value is
    /// computed or stored.
    pub fn measure(&mut self, targets: &[WireId], bases: &[Basis]) -> TraceResult<ResultId> {
        if targets.is_empty() {
            return Err(TraceError::EmptyMeasurement);
        }
        if bases.len() != targets.len() {
            return Err(TraceError::BasisCountMismatch {
                targets: targets.len(),
                bases: bases.len(),
            });
        }

        let target_rows = self.resolve(targets, "measure")?;
        self.check_disjoint(targets, &target_rows, &[], &[], "measure")?;

        let condition = self.condition();
        let (result, classical_row) = self.wires.push_classical();
        let boxes = targets
            .iter()
            .zip(&target_rows)
            .zip(bases)
            .map(|((&wire, &row), basis)| BoxGlyph {
                wire,
                row,
                label: format!("M{}", basis.axis()),
            })
            .collect();

        let op = MeasureOp {
            boxes,
            result,
            classical_row,
            condition,
        };
        debug!(
            "measured {} target(s) onto classical row {classical_row}",
            targets.len()
        );
        self.backend.measure(&op, &self.wires);
        Ok(result)
    }

    /// Open a classical-control block on a measurement result.
    ///
    /// Blocks nest in strict LIFO order; only the innermost block
    /// annotates gates rendered inside it.
    pub fn begin_classical_control(&mut self, result: ResultId, branch: Branch) -> TraceResult<()> {
        if self.wires.result_row(result).is_none() {
            return Err(TraceError::UnknownResult { result });
        }
        self.contexts.push((result, branch));
        Ok(())
    }

    /// Close the innermost classical-control block.
    pub fn end_classical_control(&mut self) -> TraceResult<()> {
        if self.contexts.pop().is_none() {
            return Err(TraceError::UnbalancedConditional);
        }
        Ok(())
    }

    /// Serialize the current diagram.
    ///
    /// A pure read: safe to call repeatedly, including mid-stream, and
    /// two calls with no intervening events yield identical output.
    pub fn to_text(&self) -> String {
        self.backend.to_text(&self.wires)
    }

    /// Finish the diagram, verifying that all classical-control blocks
    /// were balanced, and return the final text.
    pub fn finish(self) -> TraceResult<String> {
        if !self.contexts.is_empty() {
            return Err(TraceError::OpenConditional {
                depth: self.contexts.len(),
            });
        }
        Ok(self.to_text())
    }

    /// Resolve handles to rows, rejecting unknown or released wires.
    fn resolve(&self, handles: &[WireId], operation: &str) -> TraceResult<Vec<usize>> {
        handles
            .iter()
            .map(|&wire| {
                let row = self.wires.row(wire).ok_or_else(|| TraceError::UnknownWire {
                    wire,
                    operation: Some(operation.to_string()),
                })?;
                if self.wires.state(row) == WireState::Released {
                    return Err(TraceError::WireReleased {
                        wire,
                        operation: Some(operation.to_string()),
                    });
                }
                Ok(row)
            })
            .collect()
    }

    /// Reject operations naming the same wire twice.
    fn check_disjoint(
        &self,
        targets: &[WireId],
        target_rows: &[usize],
        controls: &[WireId],
        control_rows: &[usize],
        operation: &str,
    ) -> TraceResult<()> {
        let mut seen = FxHashSet::default();
        let wires = targets.iter().zip(target_rows).chain(controls.iter().zip(control_rows));
        for (&wire, &row) in wires {
            if !seen.insert(row) {
                return Err(TraceError::DuplicateWire {
                    wire,
                    operation: Some(operation.to_string()),
                });
            }
        }
        Ok(())
    }

    /// The innermost active classical-control context, resolved.
    fn condition(&self) -> Option<Condition> {
        self.contexts.last().map(|&(result, branch)| Condition {
            result,
            // Begin validated the handle, so the row is present.
            row: self.wires.result_row(result).unwrap_or_default(),
            branch,
        })
    }
}
