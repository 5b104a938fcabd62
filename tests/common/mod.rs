#![allow(dead_code)]

/// Encode one Intel HEX record line with a correct checksum.
pub fn record(offset: u16, ty: u8, payload: &[u8]) -> String {
    let [hi, lo] = offset.to_be_bytes();
    let mut bytes = vec![payload.len() as u8, hi, lo, ty];
    bytes.extend_from_slice(payload);
    let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    bytes.push(sum.wrapping_neg());
    let mut line = String::from(":");
    for b in bytes {
        line.push_str(&format!("{b:02X}"));
    }
    line
}

pub fn data(offset: u16, payload: &[u8]) -> String {
    record(offset, 0x00, payload)
}

pub const EOF: &str = ":00000001FF";

pub fn hex_file(lines: &[String]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}
