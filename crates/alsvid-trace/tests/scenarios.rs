//! End-to-end diagram tests over the public event interface.
//!
//! Exact-text assertions pin down the layout rules: column packing,
//! span connectivity, wire lifecycle caps, and classical-control
//! annotations.

use alsvid_trace::{Basis, Branch, GlyphSet, Tracer, WireId};

const Q0: WireId = WireId(0);
const Q1: WireId = WireId(1);
const Q2: WireId = WireId(2);

#[test]
fn single_gate_between_allocate_and_release() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    tracer.render_gate("H", &[Q0], &[], None).unwrap();
    tracer.on_release(&[Q0]).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐       \n",
            "|0>────┤  H  ├────<0|\n",
            "       └─────┘       \n",
        )
    );
}

#[test]
fn controlled_x_connects_control_and_target() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "              \n",
            "|0>───────●───\n",
            "          │   \n",
            "       ┌──┴──┐\n",
            "|0>────┤  X  ├\n",
            "       └─────┘\n",
        )
    );
}

#[test]
fn classical_control_annotates_gate() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.render_gate("Y", &[Q0], &[], None).unwrap();
    tracer.end_classical_control().unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐┌─────┐\n",
            "|0>────┤ Mz  ├┤  Y  ├\n",
            "       └──╥──┘└──╥──┘\n",
            "          ║      ║   \n",
            "          ╚══════●═══\n",
            "                     \n",
        )
    );
}

#[test]
fn disjoint_gates_share_a_column() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("H", &[Q0], &[], None).unwrap();
    tracer.render_gate("H", &[Q1], &[], None).unwrap();

    let row = concat!(
        "       ┌─────┐\n",
        "|0>────┤  H  ├\n",
        "       └─────┘\n",
    );
    assert_eq!(tracer.finish().unwrap(), format!("{row}{row}"));
}

#[test]
fn connected_gate_draws_pass_through_connector() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1, Q2]).unwrap();
    tracer
        .render_gate("e", &[Q0, Q2], &[], Some(&["x", "z"]))
        .unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐\n",
            "|0>────┤ ex  ├\n",
            "       └──┬──┘\n",
            "          │   \n",
            "|0>───────┼───\n",
            "          │   \n",
            "       ┌──┴──┐\n",
            "|0>────┤ ez  ├\n",
            "       └─────┘\n",
        )
    );
}

#[test]
fn controlled_swap_is_one_column() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1, Q2]).unwrap();
    tracer.swap(Q0, Q2, &[Q1]).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "              \n",
            "|0>───────╳───\n",
            "          │   \n",
            "          │   \n",
            "|0>───────●───\n",
            "          │   \n",
            "          │   \n",
            "|0>───────╳───\n",
            "              \n",
        )
    );
}

#[test]
fn connector_crosses_classical_row_with_double_line() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.on_allocate(&[Q1]).unwrap();
    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐       \n",
            "|0>────┤ Mz  ├───●───\n",
            "       └──╥──┘   │   \n",
            "          ║      │   \n",
            "          ╚══════╪═══\n",
            "                 │   \n",
            "              ┌──┴──┐\n",
            "|0>───────────┤  X  ├\n",
            "              └─────┘\n",
        )
    );
}

#[test]
fn conditional_controlled_gate_spans_its_condition_row() {
    // The classical row sits between the control and the target, so the
    // operation's own connector crosses it; the branch dot must land on
    // that crossing cell instead of adding a second cell to the column.
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.on_allocate(&[Q1]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();
    tracer.end_classical_control().unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐       \n",
            "|0>────┤ Mz  ├───●───\n",
            "       └──╥──┘   │   \n",
            "          ║      │   \n",
            "          ╚══════●═══\n",
            "                 │   \n",
            "              ┌──┴──┐\n",
            "|0>───────────┤  X  ├\n",
            "              └─────┘\n",
        )
    );
}

#[test]
fn measurement_inside_control_block() {
    // The connector from the second measurement down to its fresh
    // classical row crosses the conditioning row; the dot shares that
    // cell and every line stays the same width.
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.measure(&[Q1], &[Basis::Z]).unwrap();
    tracer.end_classical_control().unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐       \n",
            "|0>────┤ Mz  ├───────\n",
            "       └──╥──┘       \n",
            "          ║   ┌─────┐\n",
            "|0>───────╫───┤ Mz  ├\n",
            "          ║   └──╥──┘\n",
            "          ║      ║   \n",
            "          ╚══════●═══\n",
            "                 ║   \n",
            "                 ║   \n",
            "                 ╚═══\n",
            "                     \n",
        )
    );
}

#[test]
fn conditional_measurement_below_its_condition_row() {
    // The conditioning classical row sits above the measured wire; it
    // still forces a column break before the dot is placed.
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.on_allocate(&[Q1]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.measure(&[Q1], &[Basis::Z]).unwrap();
    tracer.end_classical_control().unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐       \n",
            "|0>────┤ Mz  ├───────\n",
            "       └──╥──┘       \n",
            "          ║          \n",
            "          ╚══════●═══\n",
            "                 ║   \n",
            "              ┌─────┐\n",
            "|0>───────────┤ Mz  ├\n",
            "              └──╥──┘\n",
            "                 ║   \n",
            "                 ╚═══\n",
            "                     \n",
        )
    );
}

#[test]
fn long_gate_names_keep_lines_rectangular() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("Rxx1", &[Q0], &[], None).unwrap();
    tracer.render_gate("H", &[Q1], &[], None).unwrap();

    let text = tracer.finish().unwrap();
    assert!(text.contains("┤ Rxx ├"));
    let mut widths = text.lines().map(|l| l.chars().count());
    let first = widths.next().unwrap();
    assert!(widths.all(|w| w == first));
}

#[test]
fn revival_reuses_row_after_column_break() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    tracer.on_release(&[Q0]).unwrap();
    tracer.on_allocate(&[Q0]).unwrap();
    tracer.render_gate("H", &[Q0], &[], None).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "                     ┌─────┐\n",
            "|0>────────<0||0>────┤  H  ├\n",
            "                     └─────┘\n",
        )
    );
}

#[test]
fn zero_branch_uses_hollow_dot() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0]).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.begin_classical_control(m, Branch::Zero).unwrap();
    tracer.render_gate("X", &[Q0], &[], None).unwrap();
    tracer.end_classical_control().unwrap();

    let text = tracer.finish().unwrap();
    assert!(text.contains("═══○═══"));
    assert!(!text.contains("═══●═══"));
}

#[test]
fn multi_target_measurement_boxes_each_basis() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.measure(&[Q0, Q1], &[Basis::Z, Basis::X]).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "       ┌─────┐\n",
            "|0>────┤ Mz  ├\n",
            "       └──┬──┘\n",
            "       ┌──┴──┐\n",
            "|0>────┤ Mx  ├\n",
            "       └──╥──┘\n",
            "          ║   \n",
            "          ╚═══\n",
            "              \n",
        )
    );
}

#[test]
fn snapshots_are_idempotent_and_non_mutating() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("H", &[Q0], &[], None).unwrap();

    let mid = tracer.to_text();
    assert_eq!(tracer.to_text(), mid);

    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();
    let done = tracer.to_text();
    assert_ne!(done, mid);
    assert_eq!(tracer.to_text(), done);
}

#[test]
fn all_lines_have_equal_length() {
    let mut tracer = Tracer::grid();
    tracer.on_allocate(&[Q0, Q1, Q2]).unwrap();
    tracer.render_gate("H", &[Q1], &[], None).unwrap();
    let m = tracer.measure(&[Q1], &[Basis::Z]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.render_gate("Z", &[Q2], &[Q0], None).unwrap();
    tracer.end_classical_control().unwrap();
    tracer.on_release(&[Q0, Q1]).unwrap();

    let text = tracer.finish().unwrap();
    let mut widths = text.lines().map(|l| l.chars().count());
    let first = widths.next().unwrap();
    assert!(widths.all(|w| w == first));
}

#[test]
fn ascii_glyphs_render_the_same_layout() {
    let mut tracer = Tracer::grid_with_glyphs(GlyphSet::ascii());
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "              \n",
            "|0>-------@---\n",
            "          |   \n",
            "       +--+--+\n",
            "|0>----|  X  |\n",
            "       +-----+\n",
        )
    );
}

#[test]
fn qpic_stream_for_conditional_teleport_tail() {
    let mut tracer = Tracer::qpic();
    tracer.on_allocate(&[Q0, Q1]).unwrap();
    tracer.render_gate("H", &[Q0], &[], None).unwrap();
    tracer.render_gate("X", &[Q1], &[Q0], None).unwrap();
    let m = tracer.measure(&[Q0], &[Basis::Z]).unwrap();
    tracer.begin_classical_control(m, Branch::One).unwrap();
    tracer.render_gate("X", &[Q1], &[], None).unwrap();
    tracer.end_classical_control().unwrap();
    tracer.on_release(&[Q0, Q1]).unwrap();

    assert_eq!(
        tracer.finish().unwrap(),
        concat!(
            "WIREPAD 10\n",
            "q0 G H width=12 height=10\n",
            "+q1 q0\n",
            "q0 MZ c0\n",
            "q1 G X width=12 height=10 c0\n",
            "q0 OUT 0\n",
            "q1 OUT 0\n",
        )
    );
}

#[test]
fn both_strategies_agree_on_connectivity() {
    let mut grid = Tracer::grid();
    let mut qpic = Tracer::qpic();
    grid.on_allocate(&[Q0, Q1]).unwrap();
    qpic.on_allocate(&[Q0, Q1]).unwrap();
    grid.render_gate("Z", &[Q1], &[Q0], None).unwrap();
    qpic.render_gate("Z", &[Q1], &[Q0], None).unwrap();

    // Same logical fact from both strategies: a control on q0 joined
    // to a Z box on q1.
    let grid_text = grid.finish().unwrap();
    let qpic_text = qpic.finish().unwrap();
    assert!(grid_text.contains("───●───"));
    assert!(grid_text.contains("┤  Z  ├"));
    assert!(qpic_text.contains("q1 G Z"));
    assert!(qpic_text.trim_end().ends_with("q0"));
}
