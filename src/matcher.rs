use serde::Serialize;
use tracing::warn;

use crate::instructions::InstrFormat;
use crate::isa::mcs51::MCS51_TABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub mnemonic: &'static str,
    pub operand_skip: u8,
    /// Position of the matching entry in its table.
    pub index: usize,
}

pub trait OpcodeMatcher {
    fn match_byte(&self, byte: u8) -> Option<MatchResult>;
}

/// First-match search over an ordered instruction table.
#[derive(Debug, Clone, Copy)]
pub struct TableMatcher<'t> {
    table: &'t [InstrFormat],
}

impl<'t> TableMatcher<'t> {
    pub fn new(table: &'t [InstrFormat]) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t [InstrFormat] {
        self.table
    }
}

impl TableMatcher<'static> {
    pub fn mcs51() -> Self {
        Self::new(MCS51_TABLE)
    }
}

impl OpcodeMatcher for TableMatcher<'_> {
    fn match_byte(&self, byte: u8) -> Option<MatchResult> {
        self.table
            .iter()
            .enumerate()
            .find(|(_, f)| f.matches(byte))
            .map(|(index, f)| MatchResult {
                mnemonic: f.mnemonic,
                operand_skip: f.operand_skip,
                index,
            })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("entry {index} ({mnemonic}): invalid bit window {msb}..{lsb}")]
    BadWindow {
        index: usize,
        mnemonic: &'static str,
        msb: u8,
        lsb: u8,
    },
    #[error("entry {index} ({mnemonic}): pattern has {actual} bits, window needs {expected}")]
    PatternWidth {
        index: usize,
        mnemonic: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("entry {index} ({mnemonic}): pattern {pattern:?} is not a bit string")]
    PatternChars {
        index: usize,
        mnemonic: &'static str,
        pattern: &'static str,
    },
}

/// Check the shape of every entry: window bounds, pattern width and alphabet.
pub fn validate_table(table: &[InstrFormat]) -> Result<(), TableError> {
    for (index, f) in table.iter().enumerate() {
        let expected = f.width().ok_or(TableError::BadWindow {
            index,
            mnemonic: f.mnemonic,
            msb: f.msb,
            lsb: f.lsb,
        })?;
        if !f.pattern.bytes().all(|c| c == b'0' || c == b'1') {
            return Err(TableError::PatternChars {
                index,
                mnemonic: f.mnemonic,
                pattern: f.pattern,
            });
        }
        if f.pattern.len() != expected {
            return Err(TableError::PatternWidth {
                index,
                mnemonic: f.mnemonic,
                expected,
                actual: f.pattern.len(),
            });
        }
    }
    Ok(())
}

/// A byte value matched by more than one entry. Only `winner` is ever reported
/// by [`TableMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub byte: u8,
    pub winner: usize,
    pub shadowed: Vec<usize>,
}

/// Enumerate all 256 byte values and report every one claimed by several entries.
pub fn find_overlaps(table: &[InstrFormat]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();
    for byte in 0..=u8::MAX {
        let hits: Vec<usize> = table
            .iter()
            .enumerate()
            .filter(|(_, f)| f.matches(byte))
            .map(|(i, _)| i)
            .collect();
        if let [winner, shadowed @ ..] = hits.as_slice() {
            if !shadowed.is_empty() {
                warn!(
                    byte,
                    winner = table[*winner].mnemonic,
                    shadowed = shadowed.len(),
                    "overlapping instruction formats"
                );
                overlaps.push(Overlap {
                    byte,
                    winner: *winner,
                    shadowed: shadowed.to_vec(),
                });
            }
        }
    }
    overlaps
}
