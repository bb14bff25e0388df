//! Output strategy trait shared by the grid and statement formatters.
//!
//! The tracer resolves handles, validates the event stream, and keeps
//! the classical-control stack; backends only turn fully-resolved
//! layout facts into text. Both built-in backends
//! ([`GridBackend`](crate::grid::GridBackend) and
//! [`QpicBackend`](crate::qpic::QpicBackend)) therefore reproduce the
//! same logical connectivity and control annotations, differing only
//! in vocabulary.

use crate::wire::{Branch, ResultId, WireId, WireTable};

/// A gate box placed on one target wire.
#[derive(Debug, Clone)]
pub struct BoxGlyph {
    /// The target wire handle.
    pub wire: WireId,
    /// The resolved row index.
    pub row: usize,
    /// The box label (gate name, plus per-target suffix if any).
    pub label: String,
}

/// The innermost classical-control context annotating an operation.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    /// Result handle the branch tests.
    pub result: ResultId,
    /// Resolved classical row of that result.
    pub row: usize,
    /// Which branch body is being rendered.
    pub branch: Branch,
}

/// One resolved gate event.
///
/// Exactly one of `boxes` / `crosses` is non-empty: named gates place
/// boxes, swaps place crosses. Controls are always dots.
#[derive(Debug, Clone)]
pub struct GateOp<'a> {
    /// The gate name as supplied by the caller.
    pub name: &'a str,
    /// Target boxes in caller order.
    pub boxes: Vec<BoxGlyph>,
    /// Swap crosses in caller order.
    pub crosses: Vec<(WireId, usize)>,
    /// Control dots in caller order.
    pub dots: Vec<(WireId, usize)>,
    /// Whether targets carry individual label suffixes.
    pub labelled: bool,
    /// Innermost classical-control annotation, if any.
    pub condition: Option<Condition>,
}

/// One resolved measurement event.
#[derive(Debug, Clone)]
pub struct MeasureOp {
    /// Measured target boxes (labels `Mx`/`My`/`Mz`) in caller order.
    pub boxes: Vec<BoxGlyph>,
    /// Handle wrapping the spawned classical wire.
    pub result: ResultId,
    /// Row index of the spawned classical wire.
    pub classical_row: usize,
    /// Innermost classical-control annotation, if any.
    pub condition: Option<Condition>,
}

/// An output strategy consuming resolved layout events.
///
/// Calls arrive in strict event order; `wires` reflects the registry
/// state at the instant of the call (a revived wire is still marked
/// Released during its `allocate` call, so grid fillers come out right).
pub trait Backend {
    /// A wire was allocated (`revived` when an existing row is reused).
    fn allocate(&mut self, wire: WireId, row: usize, revived: bool, wires: &WireTable);

    /// A wire was released.
    fn release(&mut self, wire: WireId, row: usize, wires: &WireTable);

    /// A gate was rendered.
    fn gate(&mut self, op: &GateOp<'_>, wires: &WireTable);

    /// A measurement was rendered; its classical row already exists in
    /// `wires` but not yet in the backend.
    fn measure(&mut self, op: &MeasureOp, wires: &WireTable);

    /// Serialize the current state. Must not mutate.
    fn to_text(&self, wires: &WireTable) -> String;
}
