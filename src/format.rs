use std::fmt;

/// Operand-shape tag for a decoder table entry, spelled the way the C
/// table expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsnFormat {
    Rr,
    Rrr,
    Ffff,
    Rri6,
    Rri8,
    Rri12,
    Rri6i6,
    Rri14,
    Rri16,
    Aui20,
    Ri21,
    I25,
    Unk,
}

impl InsnFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            InsnFormat::Rr => "RR",
            InsnFormat::Rrr => "RRR",
            InsnFormat::Ffff => "FFFF",
            InsnFormat::Rri6 => "RRI6",
            InsnFormat::Rri8 => "RRI8",
            InsnFormat::Rri12 => "RRI12",
            InsnFormat::Rri6i6 => "RRI6I6",
            InsnFormat::Rri14 => "RRI14",
            InsnFormat::Rri16 => "RRI16",
            InsnFormat::Aui20 => "AUI20",
            InsnFormat::Ri21 => "RI21",
            InsnFormat::I25 => "I25",
            InsnFormat::Unk => "UNK",
        }
    }
}

impl fmt::Display for InsnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-row field counts used to guess the instruction format.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldTally {
    pub regs: u32,
    pub imms: u32,
    pub imm_bits: u32,
    split_imm: bool,
}

impl FieldTally {
    /// Classify one field fragment. A LO/HI-annotated pair of immediate
    /// fragments forms one logical split immediate: the second half is not
    /// counted as a new field, but its width still adds up.
    pub fn observe(&mut self, frag: &str) {
        if frag.starts_with(['R', 'F']) {
            self.regs += 1;
        } else if frag.contains("IMM") {
            if !self.split_imm {
                self.imms += 1;
                if frag.contains("LO") || frag.contains("HI") {
                    self.split_imm = true;
                }
            }
            self.imm_bits += frag.len() as u32;
        }
    }
}

/// Heuristic format guess. Ordered decision table, first match wins,
/// everything unrecognized falls through to UNK.
pub fn guess_format(tally: &FieldTally) -> InsnFormat {
    use InsnFormat::*;

    match (tally.imms, tally.regs, tally.imm_bits) {
        (0, 2, _) => Rr,
        (0, 3, _) => Rrr,
        (0, 4, _) => Ffff,
        // the only format with two immediates
        (2, _, _) => Rri6i6,
        (1, 2, 5..=6) => Rri6,
        (1, 2, 8) => Rri8,
        (1, 2, 10..=12) => Rri12,
        (1, 2, 14) => Rri14,
        (1, 2, 16) => Rri16,
        (1, 1, 20) => Aui20,
        (1, 1, 21) => Ri21,
        (1, 0, 25) => I25,
        _ => Unk,
    }
}
