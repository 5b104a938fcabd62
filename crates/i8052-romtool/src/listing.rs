use std::fmt::Write as _;

use serde::Serialize;

use i8052_rom::emit::{Annotation, ByteRole, EmitSession};
use i8052_rom::{OpcodeMatcher, RomImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role { Opcode, Operand, Unknown }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub addr: usize,
    pub byte: u8,
    pub role: Role,
    pub mnemonic: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub size: usize,
    pub opcodes: usize,
    pub unknown: usize,
    pub rows: Vec<ListingRow>,
}

/// Classify every image byte with the same skip logic the VHDL emitter uses.
pub fn build_listing<M: OpcodeMatcher>(image: &RomImage, matcher: &M) -> Listing {
    let mut session = EmitSession::new(matcher);
    let rows: Vec<ListingRow> = image.bytes().iter().enumerate().map(|(addr, &byte)| {
        let (role, mnemonic) = match session.step(byte) {
            ByteRole::Opcode(m) => (Role::Opcode, Some(m.mnemonic)),
            ByteRole::Operand => (Role::Operand, None),
            ByteRole::Unknown => (Role::Unknown, None),
        };
        ListingRow { addr, byte, role, mnemonic }
    }).collect();
    let opcodes = rows.iter().filter(|r| r.role == Role::Opcode).count();
    let unknown = rows.iter().filter(|r| r.role == Role::Unknown).count();
    Listing { size: image.logical_size(), opcodes, unknown, rows }
}

pub fn render_listing(listing: &Listing) -> String {
    let mut buf = String::new();
    for r in &listing.rows {
        let _ = write!(buf, "{:#06x}: {:02x} {:08b}", r.addr, r.byte, r.byte);
        match (r.role, r.mnemonic) {
            (Role::Opcode, Some(mnemonic)) => { let _ = write!(buf, "{}", Annotation { pos: r.addr, mnemonic }); }
            (Role::Operand, _) => buf.push_str("  ..."),
            _ => {}
        }
        buf.push('\n');
    }
    let _ = writeln!(buf, "; {} bytes, {} opcodes, {} unknown", listing.size, listing.opcodes, listing.unknown);
    buf
}
