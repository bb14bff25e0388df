//! Event streams for the demo binaries, written once and replayed
//! against any output strategy.

use alsvid_trace::backend::Backend;
use alsvid_trace::{Basis, Branch, TraceResult, Tracer, WireId};

const Q0: WireId = WireId(0);
const Q1: WireId = WireId(1);
const Q2: WireId = WireId(2);

/// Teleport the state of `q0` onto `q2` through an entangled pair,
/// applying the classically controlled Pauli corrections.
pub fn teleport<B: Backend>(tracer: &mut Tracer<B>) -> TraceResult<()> {
    tracer.on_allocate(&[Q0, Q1, Q2])?;

    // Entangle the carrier pair.
    tracer.render_gate("H", &[Q1], &[], None)?;
    tracer.render_gate("X", &[Q2], &[Q1], None)?;

    // Bell measurement of the message qubit against its half.
    tracer.render_gate("X", &[Q1], &[Q0], None)?;
    tracer.render_gate("H", &[Q0], &[], None)?;
    let m0 = tracer.measure(&[Q0], &[Basis::Z])?;
    let m1 = tracer.measure(&[Q1], &[Basis::Z])?;

    // Corrections on the receiving qubit.
    tracer.begin_classical_control(m1, Branch::One)?;
    tracer.render_gate("X", &[Q2], &[], None)?;
    tracer.end_classical_control()?;
    tracer.begin_classical_control(m0, Branch::One)?;
    tracer.render_gate("Z", &[Q2], &[], None)?;
    tracer.end_classical_control()?;

    tracer.on_release(&[Q0, Q1])?;
    Ok(())
}

/// Exercise the wire lifecycle: swap, release, revival, and a
/// conditional gate after measurement.
pub fn lifecycle<B: Backend>(tracer: &mut Tracer<B>) -> TraceResult<()> {
    tracer.on_allocate(&[Q0, Q1])?;
    tracer.render_gate("H", &[Q0], &[], None)?;
    tracer.swap(Q0, Q1, &[])?;
    tracer.on_release(&[Q0])?;

    // Revive the released handle on its original row.
    tracer.on_allocate(&[Q0])?;
    let m = tracer.measure(&[Q1], &[Basis::X])?;
    tracer.begin_classical_control(m, Branch::Zero)?;
    tracer.render_gate("Y", &[Q0], &[], None)?;
    tracer.end_classical_control()?;

    tracer.on_release(&[Q0, Q1])?;
    Ok(())
}
