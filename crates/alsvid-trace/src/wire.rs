//! Wire handles, lifecycle states, and the handle-to-row registry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied handle for a qubit wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

/// Opaque handle for a measurement outcome wire.
///
/// Wraps the classical wire assigned by [`measure`](crate::Tracer::measure).
/// The outcome value itself is never tracked; the handle only ties later
/// classical-control blocks back to the wire the measurement created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub(crate) u32);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Branch of a classical-control block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Body taken when the measured result was zero.
    Zero,
    /// Body taken when the measured result was one.
    One,
}

/// Measurement basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Pauli-X basis.
    X,
    /// Pauli-Y basis.
    Y,
    /// Pauli-Z basis.
    Z,
}

impl Basis {
    /// Lowercase axis letter, used as a gate-label suffix.
    pub fn axis(self) -> char {
        match self {
            Basis::X => 'x',
            Basis::Y => 'y',
            Basis::Z => 'z',
        }
    }
}

/// Lifecycle state of one diagram row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireState {
    /// A live qubit wire, drawn as a single line.
    Active,
    /// A released qubit wire, drawn as blank space until revived.
    Released,
    /// A classical wire spawned by a measurement, drawn as a double line.
    /// Classical wires are permanent and never released.
    Collapsed,
}

/// Registry mapping wire handles to stable row indices.
///
/// Rows are appended in creation order, qubit and classical wires
/// interleaved. A handle is assigned a row index exactly once; release
/// and revival reuse the same row, so diagrams stay vertically stable
/// across the whole event stream.
#[derive(Debug, Default)]
pub struct WireTable {
    rows: Vec<WireState>,
    wires: FxHashMap<WireId, usize>,
    results: Vec<usize>,
}

impl WireTable {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows, classical wires included.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Lifecycle state of a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn state(&self, row: usize) -> WireState {
        self.rows[row]
    }

    /// Row index of a wire handle, if it was ever allocated.
    pub fn row(&self, wire: WireId) -> Option<usize> {
        self.wires.get(&wire).copied()
    }

    /// Classical row index wrapped by a result handle.
    pub fn result_row(&self, result: ResultId) -> Option<usize> {
        self.results.get(result.0 as usize).copied()
    }

    pub(crate) fn push_wire(&mut self, wire: WireId) -> usize {
        let row = self.rows.len();
        self.rows.push(WireState::Active);
        self.wires.insert(wire, row);
        row
    }

    pub(crate) fn push_classical(&mut self) -> (ResultId, usize) {
        let row = self.rows.len();
        self.rows.push(WireState::Collapsed);
        let result = ResultId(u32::try_from(self.results.len()).expect("ResultId overflow"));
        self.results.push(row);
        (result, row)
    }

    pub(crate) fn set_state(&mut self, row: usize, state: WireState) {
        self.rows[row] = state;
    }
}
