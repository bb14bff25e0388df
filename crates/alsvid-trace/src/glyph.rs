//! Glyph vocabulary for the character-grid output strategy.
//!
//! Every wire row is three print-lines tall and grows in fixed-width
//! cells, one cell per time-column. A [`GlyphSet`] supplies the cell
//! text for each layout situation, so the grid algorithm itself stays
//! independent of the character repertoire.

/// One cell of each shape the grid renderer can place.
///
/// All cells are the same display width (7 columns in the built-in
/// sets). Gate-box bodies are composed from `box_left`/`box_right`
/// around a centered label.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    /// Initialization cap written when a wire is allocated.
    pub ket: &'static str,
    /// Termination cap written when a wire is released.
    pub bra: &'static str,
    /// Empty cell.
    pub blank: &'static str,
    /// Idle qubit wire filler.
    pub qwire: &'static str,
    /// Idle classical wire filler.
    pub cwire: &'static str,
    /// Top edge of a gate box.
    pub box_top: &'static str,
    /// Top edge of a gate box with a pass-through joint.
    pub box_top_join: &'static str,
    /// Bottom edge of a gate box.
    pub box_bottom: &'static str,
    /// Bottom edge of a gate box with a pass-through joint.
    pub box_bottom_join: &'static str,
    /// Bottom edge of a measurement box (double-line stub).
    pub box_bottom_meter: &'static str,
    /// Left delimiter of a gate-box body.
    pub box_left: &'static str,
    /// Right delimiter of a gate-box body.
    pub box_right: &'static str,
    /// Control dot on a qubit wire.
    pub control_dot: &'static str,
    /// Swap cross on a qubit wire.
    pub swap_cross: &'static str,
    /// Vertical connector segment (top/bottom lines, or released body).
    pub vert: &'static str,
    /// Vertical connector crossing an active qubit wire.
    pub vert_qcross: &'static str,
    /// Vertical connector crossing a classical wire.
    pub vert_ccross: &'static str,
    /// Classical (double-line) vertical segment.
    pub cvert: &'static str,
    /// Classical vertical crossing an active qubit wire.
    pub cvert_qcross: &'static str,
    /// Classical vertical crossing a classical wire.
    pub cvert_ccross: &'static str,
    /// Classical-control dot for the One branch.
    pub cdot_one: &'static str,
    /// Classical-control dot for the Zero branch.
    pub cdot_zero: &'static str,
    /// Elbow starting a fresh classical wire under a measurement.
    pub meter_elbow: &'static str,
    /// Horizontal wire character, replaced by `meter_stub` when a gate
    /// bottom edge acquires a classical stub.
    pub wire_dash: char,
    /// Double-line stub dropped from a classically-controlled gate.
    pub meter_stub: char,
}

impl GlyphSet {
    /// Box-drawing vocabulary. This is the default.
    pub fn unicode() -> Self {
        Self {
            ket: "|0>────",
            bra: "────<0|",
            blank: "       ",
            qwire: "───────",
            cwire: "═══════",
            box_top: "┌─────┐",
            box_top_join: "┌──┴──┐",
            box_bottom: "└─────┘",
            box_bottom_join: "└──┬──┘",
            box_bottom_meter: "└──╥──┘",
            box_left: "┤ ",
            box_right: " ├",
            control_dot: "───●───",
            swap_cross: "───╳───",
            vert: "   │   ",
            vert_qcross: "───┼───",
            vert_ccross: "═══╪═══",
            cvert: "   ║   ",
            cvert_qcross: "───╫───",
            cvert_ccross: "═══╬═══",
            cdot_one: "═══●═══",
            cdot_zero: "═══○═══",
            meter_elbow: "   ╚═══",
            wire_dash: '─',
            meter_stub: '╥',
        }
    }

    /// Seven-bit-safe vocabulary for terminals without box-drawing glyphs.
    pub fn ascii() -> Self {
        Self {
            ket: "|0>----",
            bra: "----<0|",
            blank: "       ",
            qwire: "-------",
            cwire: "=======",
            box_top: "+-----+",
            box_top_join: "+--+--+",
            box_bottom: "+-----+",
            box_bottom_join: "+--+--+",
            box_bottom_meter: "+--#--+",
            box_left: "| ",
            box_right: " |",
            control_dot: "---@---",
            swap_cross: "---x---",
            vert: "   |   ",
            vert_qcross: "---+---",
            vert_ccross: "===+===",
            cvert: "   #   ",
            cvert_qcross: "---#---",
            cvert_ccross: "===#===",
            cdot_one: "===@===",
            cdot_zero: "===o===",
            meter_elbow: "   \\===",
            wire_dash: '-',
            meter_stub: '#',
        }
    }

    /// Compose a gate-box body cell around a centered label.
    ///
    /// Labels longer than three characters are truncated so the cell
    /// keeps the fixed width shared by every other glyph.
    pub fn box_body(&self, label: &str) -> String {
        let label: String = label.chars().take(3).collect();
        let len = label.chars().count();
        if len == 3 {
            return format!("{}{label}{}", self.box_left, self.box_right);
        }
        let left = (3 - len) / 2;
        let right = 3 - len - left;
        format!(
            "{}{}{label}{}{}",
            self.box_left,
            " ".repeat(left),
            " ".repeat(right),
            self.box_right,
        )
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::unicode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_body_centering() {
        let glyphs = GlyphSet::unicode();
        assert_eq!(glyphs.box_body("H"), "┤  H  ├");
        assert_eq!(glyphs.box_body("Mz"), "┤ Mz  ├");
        assert_eq!(glyphs.box_body("ex"), "┤ ex  ├");
        assert_eq!(glyphs.box_body("R1"), "┤ R1  ├");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let glyphs = GlyphSet::unicode();
        assert_eq!(glyphs.box_body("Rxx1"), "┤ Rxx ├");
        assert_eq!(glyphs.box_body("swap"), "┤ swa ├");
    }

    #[test]
    fn test_cells_share_width() {
        let glyphs = GlyphSet::unicode();
        let cells = [
            glyphs.ket,
            glyphs.bra,
            glyphs.blank,
            glyphs.qwire,
            glyphs.cwire,
            glyphs.box_top,
            glyphs.box_top_join,
            glyphs.box_bottom,
            glyphs.box_bottom_join,
            glyphs.box_bottom_meter,
            glyphs.control_dot,
            glyphs.swap_cross,
            glyphs.vert,
            glyphs.vert_qcross,
            glyphs.vert_ccross,
            glyphs.cvert,
            glyphs.cvert_qcross,
            glyphs.cvert_ccross,
            glyphs.cdot_one,
            glyphs.cdot_zero,
            glyphs.meter_elbow,
        ];
        for cell in cells {
            assert_eq!(cell.chars().count(), 7, "cell {cell:?}");
        }
        assert_eq!(glyphs.box_body("X").chars().count(), 7);
    }
}
