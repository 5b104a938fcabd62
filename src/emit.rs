//! VHDL rendering of a finished ROM image.
//!
//! Each byte becomes one `"bbbbbbbb"` literal of the `PROGRAM` constant. Bytes
//! that start an instruction get a trailing comment naming the instruction
//! form; operand bytes and unknown opcodes get none.

use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::error::{Result, RomError};
use crate::image::RomImage;
use crate::matcher::{MatchResult, OpcodeMatcher};

pub const DEFAULT_OUTPUT: &str = "i8052_rom.vhd";

const HEADER: &str = "\
library IEEE;
use IEEE.STD_LOGIC_1164.all;
use IEEE.STD_LOGIC_ARITH.all;

use WORK.I8052_PKG.all;

entity I8052_ROM is
  port(rst : in  STD_LOGIC;
       clk : in  STD_LOGIC;
       addr: in  UNSIGNED (11 downto 0);
       data: out UNSIGNED (7 downto 0);
       rd  : in  STD_LOGIC);
end I8052_ROM;

architecture BEHAVIORAL of I8052_ROM is
";

/// How the emission pass classified one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRole {
    Opcode(MatchResult),
    Unknown,
    Operand,
}

/// Operand-skip state for one forward pass over an image.
pub struct EmitSession<'m, M: OpcodeMatcher> {
    matcher: &'m M,
    pending_skip: usize,
}

impl<'m, M: OpcodeMatcher> EmitSession<'m, M> {
    pub fn new(matcher: &'m M) -> Self {
        Self {
            matcher,
            pending_skip: 0,
        }
    }

    /// Classify the next byte. Must be called in increasing address order.
    pub fn step(&mut self, byte: u8) -> ByteRole {
        if self.pending_skip > 0 {
            self.pending_skip -= 1;
            return ByteRole::Operand;
        }
        match self.matcher.match_byte(byte) {
            Some(m) => {
                self.pending_skip = m.operand_skip as usize;
                ByteRole::Opcode(m)
            }
            None => ByteRole::Unknown,
        }
    }
}

/// Trailing VHDL comment for an opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub pos: usize,
    pub mnemonic: &'static str,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  -- {:05}: {}", self.pos, self.mnemonic)
    }
}

#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Shown in the header; usually the HEX file path as given.
    pub source_name: String,
    pub timestamp: String,
}

impl EmitOptions {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            timestamp: timestamp_now(),
        }
    }
}

/// Write `image` as the `I8052_ROM` entity.
///
/// Output is deterministic for a given image and options. Nothing is buffered
/// here; wrap files in a `BufWriter`.
pub fn emit<M: OpcodeMatcher, W: Write>(
    image: &RomImage,
    matcher: &M,
    opts: &EmitOptions,
    mut out: W,
) -> Result<()> {
    let bytes = image.bytes();
    let Some(last) = bytes.len().checked_sub(1) else {
        return Err(RomError::EmptyImage);
    };

    writeln!(out, "-- {}", opts.source_name)?;
    writeln!(out, "-- {}", opts.timestamp)?;
    writeln!(out)?;
    out.write_all(HEADER.as_bytes())?;
    writeln!(
        out,
        "  type ROM_TYPE is array (0 to {last}) of UNSIGNED (7 downto 0);"
    )?;
    writeln!(out, "  constant PROGRAM : ROM_TYPE := (")?;

    let mut session = EmitSession::new(matcher);
    let mut annotated = 0usize;
    for (pos, &byte) in bytes.iter().enumerate() {
        let sep = if pos == last { " " } else { "," };
        write!(out, "    \"{byte:08b}\"{sep}")?;
        if let ByteRole::Opcode(m) = session.step(byte) {
            annotated += 1;
            write!(out, "{}", Annotation { pos, mnemonic: m.mnemonic })?;
        }
        writeln!(out)?;
    }

    write_footer(&mut out, bytes.len())?;
    out.flush()?;
    info!(size = bytes.len(), annotated, "rom emitted");
    Ok(())
}

fn write_footer<W: Write>(out: &mut W, size: usize) -> std::io::Result<()> {
    writeln!(out, "  );")?;
    writeln!(out, "begin")?;
    writeln!(out, "  process (rst, clk)")?;
    writeln!(out, "  begin")?;
    writeln!(out, "    if (rst = '1') then")?;
    writeln!(out, "      data <= CD_8;")?;
    writeln!(out, "    elsif (clk'event and clk = '1') then")?;
    writeln!(out, "      if (rd = '1' and conv_integer(addr) < {size}) then")?;
    writeln!(out, "        data <= PROGRAM(conv_integer(addr));")?;
    writeln!(out, "      else")?;
    writeln!(out, "        data <= CD_8;")?;
    writeln!(out, "      end if;")?;
    writeln!(out, "    end if;")?;
    writeln!(out, "  end process;")?;
    writeln!(out, "end BEHAVIORAL;")
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn timestamp_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_utc(secs)
}

pub fn format_utc(unix_secs: u64) -> String {
    let days = (unix_secs / 86_400) as i64;
    let rem = unix_secs % 86_400;
    let (y, m, d) = civil_from_days(days);
    format!(
        "{y:04}-{m:02}-{d:02} {:02}:{:02}:{:02} UTC",
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    )
}

// Days since 1970-01-01 to proleptic Gregorian (year, month, day).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}
