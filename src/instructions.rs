use bitvec::prelude::*;
use serde::Serialize;

/// One instruction form: the fixed bits of an opcode byte within `[lsb, msb]`.
///
/// Bits outside the window (register selectors, addressing mode bits, page
/// address bits) are ignored when matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrFormat {
    pub mnemonic: &'static str,
    /// Expected bits of the window, most significant first.
    pub pattern: &'static str,
    pub msb: u8,
    pub lsb: u8,
    /// Operand bytes following the opcode.
    pub operand_skip: u8,
}

impl InstrFormat {
    pub const fn new(
        mnemonic: &'static str,
        pattern: &'static str,
        msb: u8,
        lsb: u8,
        operand_skip: u8,
    ) -> Self {
        Self {
            mnemonic,
            pattern,
            msb,
            lsb,
            operand_skip,
        }
    }

    /// Number of bits in the window, or `None` for an inverted/out-of-range window.
    pub fn width(&self) -> Option<usize> {
        (self.lsb <= self.msb && self.msb <= 7).then(|| (self.msb - self.lsb + 1) as usize)
    }

    pub fn matches(&self, byte: u8) -> bool {
        self.width().is_some() && bit_window(byte, self.msb, self.lsb) == self.pattern
    }
}

/// Bits `msb..=lsb` of `byte` rendered MSB-first as `'0'`/`'1'` characters.
///
/// Callers guarantee `lsb <= msb <= 7`.
pub fn bit_window(byte: u8, msb: u8, lsb: u8) -> String {
    let bits = byte.view_bits::<Msb0>();
    bits[7 - msb as usize..=7 - lsb as usize]
        .iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}
