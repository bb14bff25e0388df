//! Statement-stream output strategy.
//!
//! Instead of mutating a character grid, this backend emits one textual
//! statement per event in a qpic-style vocabulary: targets and controls
//! become wire tokens, classical-control annotations become a trailing
//! `c{n}` (or `-c{n}` for the Zero branch) token, and wire lifecycle
//! becomes explicit `IN 0` / `OUT 0` / `:owire` directives. Connectivity
//! is positional in the statement rather than drawn, but the facts match
//! the grid strategy exactly.

use rustc_hash::FxHashSet;
use std::fmt::Write as _;

use crate::backend::{Backend, Condition, GateOp, MeasureOp};
use crate::wire::{Branch, WireId, WireTable};

/// Default wire padding emitted in the preamble.
const WIRE_PADDING: u32 = 10;

/// Statement formatter emitting a qpic-style command stream.
#[derive(Debug)]
pub struct QpicBackend {
    statements: Vec<String>,
    declared: FxHashSet<WireId>,
    terminated: FxHashSet<WireId>,
    /// Wires whose most recent appearance was as a control dot; on
    /// release these are hidden (`:owire`) instead of capped with `OUT`.
    last_used_as_control: FxHashSet<WireId>,
}

impl QpicBackend {
    /// Create a statement formatter with the standard preamble.
    pub fn new() -> Self {
        Self {
            statements: vec![format!("WIREPAD {WIRE_PADDING}")],
            declared: FxHashSet::default(),
            terminated: FxHashSet::default(),
            last_used_as_control: FxHashSet::default(),
        }
    }

    fn push(&mut self, statement: String) {
        self.statements.push(statement);
    }

    /// Box geometry hints for downstream typesetting.
    fn dimensions(label: &str) -> String {
        let width = label.chars().count() * 7 + 5;
        format!("width={width} height=10")
    }

    /// Raise a label's trailing axis letter; statements typeset Pauli
    /// axes uppercase, unlike the grid glyphs.
    fn upper_axis(label: &str) -> String {
        let mut chars: Vec<char> = label.chars().collect();
        if let Some(last) = chars.last_mut() {
            *last = last.to_ascii_uppercase();
        }
        chars.into_iter().collect()
    }

    fn condition_token(condition: &Condition) -> String {
        match condition.branch {
            Branch::Zero => format!("-{}", condition.result),
            Branch::One => condition.result.to_string(),
        }
    }

    /// Retro-tag the last statement naming `wire` so the wire tail is
    /// hidden rather than drawn to the diagram edge.
    fn hide_wire(&mut self, wire: WireId) {
        let name = wire.to_string();
        let plus = format!("+{name}");
        for statement in self.statements.iter_mut().rev() {
            let mut tokens: Vec<String> =
                statement.split_whitespace().map(str::to_string).collect();
            if let Some(tok) = tokens.iter_mut().find(|t| **t == name || **t == plus) {
                tok.push_str(":owire");
                *statement = tokens.join(" ");
                return;
            }
        }
    }
}

impl Default for QpicBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for QpicBackend {
    fn allocate(&mut self, wire: WireId, _row: usize, _revived: bool, _wires: &WireTable) {
        self.terminated.remove(&wire);
        if self.declared.contains(&wire) {
            self.push(format!("{wire} IN 0"));
        } else {
            self.declared.insert(wire);
        }
    }

    fn release(&mut self, wire: WireId, _row: usize, _wires: &WireTable) {
        if self.last_used_as_control.contains(&wire) {
            self.hide_wire(wire);
        } else if !self.terminated.contains(&wire) {
            self.push(format!("{wire} OUT 0"));
        }
        self.terminated.insert(wire);
    }

    fn gate(&mut self, op: &GateOp<'_>, _wires: &WireTable) {
        for b in &op.boxes {
            self.last_used_as_control.remove(&b.wire);
        }
        for &(wire, _) in &op.crosses {
            self.last_used_as_control.remove(&wire);
        }
        for &(wire, _) in &op.dots {
            self.last_used_as_control.insert(wire);
        }

        let mut statement = String::new();

        if !op.crosses.is_empty() {
            for &(wire, _) in &op.crosses {
                let _ = write!(statement, "{wire} ");
            }
            statement.push_str("SWAP");
        } else if op.name.eq_ignore_ascii_case("x") && op.boxes.len() == 1 && !op.dots.is_empty()
        {
            // CNOT sugar: the target is an oplus rather than a box.
            let _ = write!(statement, "+{}", op.boxes[0].wire);
        } else if op.labelled {
            // Connected multi-target gate: each target carries its own
            // labelled box within one statement.
            for b in &op.boxes {
                let label = Self::upper_axis(&b.label);
                let _ = write!(statement, "{} G {} {} ", b.wire, label, Self::dimensions(&label));
            }
            statement.truncate(statement.trim_end().len());
        } else {
            for b in &op.boxes {
                let _ = write!(statement, "{} ", b.wire);
            }
            let _ = write!(statement, "G {} {}", op.name, Self::dimensions(op.name));
        }

        for &(wire, _) in &op.dots {
            let _ = write!(statement, " {wire}");
        }
        if let Some(cond) = &op.condition {
            let _ = write!(statement, " {}", Self::condition_token(cond));
        }
        self.push(statement);
    }

    fn measure(&mut self, op: &MeasureOp, _wires: &WireTable) {
        let mut statement = String::new();
        for b in &op.boxes {
            self.last_used_as_control.remove(&b.wire);
            let _ = write!(statement, "{} {} ", b.wire, Self::upper_axis(&b.label));
        }
        let _ = write!(statement, "{}", op.result);
        if let Some(cond) = &op.condition {
            let _ = write!(statement, " {}", Self::condition_token(cond));
        }
        self.push(statement);
    }

    fn to_text(&self, _wires: &WireTable) -> String {
        let mut out = self.statements.join("\n");
        out.push('\n');
        out
    }
}
