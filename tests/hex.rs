mod common;

use common::{data, record, EOF};
use i8052_rom::hex::{parse_record, FormatError, HexRecord, RecordKind};
use proptest::prelude::*;

#[test]
fn parses_reference_data_record() {
    let r = parse_record(":10010000214601360121470136007EFE09D2190140").unwrap();
    assert_eq!(r.kind, RecordKind::Data);
    assert_eq!(r.offset, 0x0100);
    assert_eq!(
        r.payload,
        vec![0x21, 0x46, 0x01, 0x36, 0x01, 0x21, 0x47, 0x01, 0x36, 0x00, 0x7E, 0xFE, 0x09, 0xD2, 0x19, 0x01]
    );
}

#[test]
fn parses_end_of_file() {
    let r = parse_record(EOF).unwrap();
    assert_eq!(r, HexRecord { kind: RecordKind::EndOfFile, offset: 0, payload: vec![] });
}

#[test]
fn structural_errors() {
    assert_eq!(parse_record("00000001FF"), Err(FormatError::MissingStartCode));
    assert_eq!(parse_record(""), Err(FormatError::MissingStartCode));
    assert_eq!(parse_record(":00000001F"), Err(FormatError::EvenLength(10)));
    assert_eq!(parse_record(":00000001"), Err(FormatError::TooShort(9)));
}

#[test]
fn checksum_mismatch_is_rejected() {
    assert_eq!(parse_record(":00000001FE"), Err(FormatError::Checksum { sum: 0xFF }));
}

#[test]
fn declared_length_must_match_line() {
    // length says 2 but only one data byte; checksum still balanced
    let line = ":0200000011ED";
    assert_eq!(
        parse_record(line),
        Err(FormatError::LengthMismatch { declared: 2, actual: 1 })
    );
}

#[test]
fn lowercase_digits_accepted() {
    let line = data(0x00ab, &[0xde, 0xad]).to_lowercase();
    let r = parse_record(&line).unwrap();
    assert_eq!(r.offset, 0x00AB);
    assert_eq!(r.payload, vec![0xDE, 0xAD]);
}

#[test]
fn record_types_are_classified_after_checksum() {
    assert_eq!(parse_record(&record(0, 0x02, &[0x10, 0x00])).unwrap().kind, RecordKind::ExtendedSegment);
    assert_eq!(parse_record(&record(0, 0x04, &[0x00, 0x00])).unwrap().kind, RecordKind::Invalid(0x04));
    // a bad checksum wins over the type
    assert!(matches!(parse_record(":020000021000EB"), Err(FormatError::Checksum { .. })));
}

proptest! {
    #[test]
    fn valid_records_sum_to_zero(offset: u16, payload in prop::collection::vec(any::<u8>(), 0..=32)) {
        let line = data(offset, &payload);
        let r = parse_record(&line).unwrap();
        prop_assert_eq!(r.offset, offset);
        prop_assert_eq!(&r.payload, &payload);
    }

    #[test]
    fn any_payload_bit_flip_is_rejected(
        offset: u16,
        payload in prop::collection::vec(any::<u8>(), 1..=16),
        pick: prop::sample::Index,
        bit in 0u8..8,
    ) {
        let mut corrupted = payload.clone();
        let i = pick.index(corrupted.len());
        corrupted[i] ^= 1 << bit;
        // keep the old checksum, swap in the corrupted payload byte
        let good = data(offset, &payload);
        let start = 9 + i * 2;
        let mut line = good.clone();
        line.replace_range(start..start + 2, &format!("{:02X}", corrupted[i]));
        let rejected = matches!(parse_record(&line), Err(FormatError::Checksum { .. }));
        prop_assert!(rejected, "corrupted line {} was accepted", line);
    }
}
