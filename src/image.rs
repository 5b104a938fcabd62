use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, RomError};
use crate::hex::{parse_record, FormatError, HexRecord, RecordKind};

/// Address space of the i8052 ROM (12-bit address bus).
pub const ROM_CAPACITY: usize = 4096;

/// Bytes kept past the highest written address.
pub const TRAILING_PAD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// Fixed-capacity ROM buffer plus the program length derived from its records.
#[derive(Debug, Clone)]
pub struct RomImage {
    mem: Vec<u8>,
    logical_size: usize,
}

impl RomImage {
    pub fn new(capacity: usize) -> Self {
        Self {
            mem: vec![0; capacity],
            logical_size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.mem.len()
    }

    pub fn logical_size(&self) -> usize {
        self.logical_size
    }

    /// The program bytes, `0..logical_size`.
    pub fn bytes(&self) -> &[u8] {
        &self.mem[..self.logical_size]
    }

    pub fn read_u8(&self, addr: usize) -> Option<u8> {
        self.bytes().get(addr).copied()
    }

    /// Apply one record. The image is untouched when an error is returned.
    pub fn apply(&mut self, record: &HexRecord) -> Result<Step> {
        match record.kind {
            RecordKind::Data => {
                self.load_data(record.offset, &record.payload)?;
                Ok(Step::Continue)
            }
            RecordKind::EndOfFile => Ok(Step::Done),
            RecordKind::ExtendedSegment => Err(RomError::UnsupportedRecord),
            RecordKind::Invalid(ty) => Err(FormatError::InvalidType(ty).into()),
        }
    }

    fn load_data(&mut self, offset: u16, payload: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start + payload.len();
        let required = self.logical_size.max(end + TRAILING_PAD);
        let capacity = self.capacity();
        if required >= capacity || end >= capacity {
            return Err(RomError::Capacity {
                end,
                required,
                capacity,
            });
        }
        self.mem[start..end].copy_from_slice(payload);
        self.logical_size = required;
        debug!(offset = start, len = payload.len(), size = required, "data record");
        Ok(())
    }
}

/// Read HEX lines until the end-of-file record, building the ROM image.
///
/// Lines after the end-of-file record are never read. Lines are taken as raw
/// bytes; anything that is not a hex digit fails as a format error.
pub fn load<R: BufRead>(mut reader: R, capacity: usize) -> Result<RomImage> {
    let mut image = RomImage::new(capacity);
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| RomError::from(e).at_line(line_no + 1))?;
        if n == 0 {
            break;
        }
        line_no += 1;
        let mut line = buf.as_slice();
        while let [rest @ .., b'\r' | b'\n'] = line {
            line = rest;
        }
        let step = parse_record(line)
            .map_err(RomError::from)
            .and_then(|record| image.apply(&record))
            .map_err(|e| e.at_line(line_no))?;
        if step == Step::Done {
            if image.logical_size == 0 {
                return Err(RomError::EmptyImage.at_line(line_no));
            }
            info!(lines = line_no, size = image.logical_size, "image loaded");
            return Ok(image);
        }
    }
    Err(RomError::MissingEndOfFile)
}

pub fn load_file(path: &Path, capacity: usize) -> Result<RomImage> {
    let file = File::open(path)?;
    load(BufReader::new(file), capacity)
}
