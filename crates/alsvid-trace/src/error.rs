//! Error types for the tracer crate.
//!
//! Every variant is a caller contract violation: the event stream itself
//! is inconsistent, not a recoverable runtime fault. The tracer never
//! retries or patches an inconsistent stream, and its state is undefined
//! after an error is returned.

use crate::wire::{ResultId, WireId};
use thiserror::Error;

/// Errors raised by an inconsistent event stream.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TraceError {
    /// Operation references a handle that was never allocated.
    #[error("Wire {wire} was never allocated{}", format_op_context(.operation))]
    UnknownWire {
        /// The unknown handle.
        wire: WireId,
        /// Optional operation name for context.
        operation: Option<String>,
    },

    /// Operation references a handle that was released and not re-allocated.
    #[error("Wire {wire} is released{}", format_op_context(.operation))]
    WireReleased {
        /// The released handle.
        wire: WireId,
        /// Optional operation name for context.
        operation: Option<String>,
    },

    /// Allocation of a handle that is already active.
    #[error("Wire {wire} is already allocated")]
    WireActive {
        /// The doubly-allocated handle.
        wire: WireId,
    },

    /// A wire appears more than once in one operation.
    #[error("Duplicate wire {wire} in operation{}", format_op_context(.operation))]
    DuplicateWire {
        /// The duplicated handle.
        wire: WireId,
        /// Optional operation name for context.
        operation: Option<String>,
    },

    /// Per-target label count does not match the target count.
    #[error("Operation '{operation}' has {targets} targets but {labels} labels")]
    LabelCountMismatch {
        /// Name of the operation.
        operation: String,
        /// Number of targets supplied.
        targets: usize,
        /// Number of labels supplied.
        labels: usize,
    },

    /// Measurement basis count does not match the target count.
    #[error("Measurement of {targets} targets given {bases} bases")]
    BasisCountMismatch {
        /// Number of targets supplied.
        targets: usize,
        /// Number of bases supplied.
        bases: usize,
    },

    /// Measurement with no targets cannot produce a result handle.
    #[error("Measurement requires at least one target")]
    EmptyMeasurement,

    /// Classical-control block references an unknown result handle.
    #[error("Result {result} does not belong to this diagram")]
    UnknownResult {
        /// The unknown result handle.
        result: ResultId,
    },

    /// `end_classical_control` called with no open block.
    #[error("Unbalanced end of classical-control block")]
    UnbalancedConditional,

    /// Diagram finished while classical-control blocks were still open.
    #[error("{depth} classical-control block(s) still open")]
    OpenConditional {
        /// Number of unclosed blocks.
        depth: usize,
    },
}

/// Helper function to format optional operation context.
#[allow(clippy::ref_option)]
fn format_op_context(operation: &Option<String>) -> String {
    match operation {
        Some(name) => format!(" (operation: {name})"),
        None => String::new(),
    }
}

/// Result type for tracer operations.
pub type TraceResult<T> = Result<T, TraceError>;
