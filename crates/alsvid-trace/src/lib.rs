//! Streaming Circuit Diagram Tracer
//!
//! This crate renders a live stream of gate-level events (wire
//! allocation and release, gates with controls, measurements, and
//! classically-controlled branches) into a human-readable multi-line
//! text diagram. It is driven one event at a time by an external
//! execution component and never sees the program as a whole, so the
//! layout is decided incrementally: operations are packed into
//! time-columns across wire rows, wires are revived in place when
//! their handle is re-allocated, and measurements grow the diagram
//! downward with permanent classical wires.
//!
//! # Core Components
//!
//! - **Wire registry**: [`WireTable`] maps caller handles ([`WireId`])
//!   to stable row indices and tracks per-row lifecycle ([`WireState`])
//! - **Tracer**: [`Tracer`] validates the event stream and owns the
//!   classical-control stack
//! - **Output strategies**: [`GridBackend`] (character grid over a
//!   pluggable [`GlyphSet`]) and [`QpicBackend`] (one statement per
//!   gate), both implementing [`Backend`]
//!
//! # Example: Bell Pair
//!
//! ```rust
//! use alsvid_trace::{Tracer, WireId};
//!
//! let mut tracer = Tracer::grid();
//! tracer.on_allocate(&[WireId(0), WireId(1)]).unwrap();
//! tracer.render_gate("H", &[WireId(0)], &[], None).unwrap();
//! tracer.render_gate("X", &[WireId(1)], &[WireId(0)], None).unwrap();
//!
//! let text = tracer.finish().unwrap();
//! assert!(text.contains("┤  H  ├"));
//! assert!(text.contains("───●───"));
//! ```
//!
//! # Example: Classical Control
//!
//! A measurement returns an opaque [`ResultId`]; gates rendered inside
//! a branch block are annotated with a dot on the result's classical
//! wire. No outcome value is ever computed or stored.
//!
//! ```rust
//! use alsvid_trace::{Basis, Branch, Tracer, WireId};
//!
//! let mut tracer = Tracer::qpic();
//! tracer.on_allocate(&[WireId(0)]).unwrap();
//! let m = tracer.measure(&[WireId(0)], &[Basis::Z]).unwrap();
//! tracer.begin_classical_control(m, Branch::One).unwrap();
//! tracer.render_gate("Y", &[WireId(0)], &[], None).unwrap();
//! tracer.end_classical_control().unwrap();
//!
//! let text = tracer.finish().unwrap();
//! assert!(text.contains("q0 MZ c0"));
//! assert!(text.contains("G Y"));
//! ```
//!
//! # Contract
//!
//! The event stream must be internally consistent: gates may only name
//! live wires, measurement bases must match targets, and branch blocks
//! must balance. Violations surface as [`TraceError`] immediately and
//! leave the tracer in an undefined state; there is no recovery.
//! Snapshots via [`Tracer::to_text`] are pure reads and may be taken
//! at any point, including mid-stream.

pub mod backend;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod qpic;
pub mod tracer;
pub mod wire;

pub use backend::{Backend, BoxGlyph, Condition, GateOp, MeasureOp};
pub use error::{TraceError, TraceResult};
pub use glyph::GlyphSet;
pub use grid::GridBackend;
pub use qpic::QpicBackend;
pub use tracer::Tracer;
pub use wire::{Basis, Branch, ResultId, WireId, WireState, WireTable};
