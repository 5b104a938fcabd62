//! Intel HEX record parsing (the subset emitted by the i8052 toolchain).

use serde::{Deserialize, Serialize};

/// Shortest well-formed line: `:LLAAAATTCC`.
pub const MIN_LINE_LEN: usize = 11;

const START_CODE: u8 = b':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Data,
    EndOfFile,
    ExtendedSegment,
    Invalid(u8),
}

impl RecordKind {
    pub fn from_type(ty: u8) -> Self {
        match ty {
            0x00 => RecordKind::Data,
            0x01 => RecordKind::EndOfFile,
            0x02 => RecordKind::ExtendedSegment,
            other => RecordKind::Invalid(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexRecord {
    pub kind: RecordKind,
    pub offset: u16,
    pub payload: Vec<u8>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("line does not start with ':'")]
    MissingStartCode,
    #[error("line length {0} is even")]
    EvenLength(usize),
    #[error("line length {0} is shorter than 11")]
    TooShort(usize),
    #[error("invalid hex pair {pair:?} at column {column}")]
    BadHexPair { column: usize, pair: String },
    #[error("declared length {declared} does not match {actual} data bytes")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("checksum mismatch (byte sum {sum:#04x})")]
    Checksum { sum: u8 },
    #[error("invalid record type {0:#04x}")]
    InvalidType(u8),
}

/// Parse one line (terminator already stripped) into a checked record.
///
/// Takes raw bytes so that non-ASCII input surfaces as a bad hex pair.
pub fn parse_record(line: impl AsRef<[u8]>) -> Result<HexRecord, FormatError> {
    let line = line.as_ref();
    if line.first() != Some(&START_CODE) {
        return Err(FormatError::MissingStartCode);
    }
    let len = line.len();
    if len % 2 == 0 {
        return Err(FormatError::EvenLength(len));
    }
    if len < MIN_LINE_LEN {
        return Err(FormatError::TooShort(len));
    }

    let bytes = decode_pairs(&line[1..])?;

    let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != 0 {
        return Err(FormatError::Checksum { sum });
    }

    // length, offset hi, offset lo, type, payload.., checksum
    let declared = bytes[0] as usize;
    let actual = bytes.len() - 5;
    if declared != actual {
        return Err(FormatError::LengthMismatch { declared, actual });
    }

    Ok(HexRecord {
        kind: RecordKind::from_type(bytes[3]),
        offset: u16::from_be_bytes([bytes[1], bytes[2]]),
        payload: bytes[4..4 + declared].to_vec(),
    })
}

/// Decode `s` (no start code) as consecutive two-digit hex bytes.
fn decode_pairs(s: &[u8]) -> Result<Vec<u8>, FormatError> {
    s.chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let column = 2 + i * 2;
            parse_hex_byte(pair).ok_or_else(|| FormatError::BadHexPair {
                column,
                pair: String::from_utf8_lossy(pair).into_owned(),
            })
        })
        .collect()
}

/// Exactly two ASCII hex digits; anything else (signs, spaces, `0x`) is rejected.
pub fn parse_hex_byte(pair: &[u8]) -> Option<u8> {
    match pair {
        [hi, lo] => Some(hex_digit(*hi)? << 4 | hex_digit(*lo)?),
        _ => None,
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}
