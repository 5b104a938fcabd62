use i8052_rom::instructions::InstrFormat;
use i8052_rom::isa::mcs51::MCS51_TABLE;
use i8052_rom::matcher::{find_overlaps, validate_table, MatchResult};
use i8052_rom::{OpcodeMatcher, TableMatcher};

fn name(byte: u8) -> Option<&'static str> {
    TableMatcher::mcs51().match_byte(byte).map(|m| m.mnemonic)
}

#[test]
fn acall_matches_low_five_bits() {
    let m = TableMatcher::mcs51().match_byte(0x91).unwrap();
    assert_eq!(m, MatchResult { mnemonic: "ACALL", operand_skip: 1, index: 0 });
    // page bits above the window are ignored
    for page in 0..8u8 {
        assert_eq!(name(page << 5 | 0x11), Some("ACALL"));
        assert_eq!(name(page << 5 | 0x01), Some("AJMP"));
    }
}

#[test]
fn common_opcodes() {
    assert_eq!(name(0x00), Some("NOP"));
    assert_eq!(name(0x02), Some("LJMP"));
    assert_eq!(name(0x12), Some("LCALL"));
    assert_eq!(name(0x22), Some("RET"));
    assert_eq!(name(0x32), Some("RETI"));
    assert_eq!(name(0x74), Some("MOV_4"));
    assert_eq!(name(0x75), Some("MOV_12"));
    assert_eq!(name(0x80), Some("SJMP"));
    assert_eq!(name(0xE4), Some("CLR_1"));
    assert_eq!(name(0xA4), Some("MUL"));
    assert_eq!(name(0x84), Some("DIV"));
}

#[test]
fn register_forms_ignore_selector_bits() {
    // ADD A,Rn = 00101rrr ; ADD A,@Ri = 0010011i
    for r in 0..8u8 {
        assert_eq!(name(0x28 | r), Some("ADD_1"));
        assert_eq!(name(0xE8 | r), Some("MOV_1"));
    }
    assert_eq!(name(0x26), Some("ADD_3"));
    assert_eq!(name(0x27), Some("ADD_3"));
}

#[test]
fn reserved_opcode_has_no_match() {
    assert_eq!(name(0xA5), None);
}

#[test]
fn mcs51_table_is_well_formed_and_unambiguous() {
    assert_eq!(MCS51_TABLE.len(), 111);
    assert_eq!(validate_table(MCS51_TABLE), Ok(()));
    assert!(find_overlaps(MCS51_TABLE).is_empty());
}

#[test]
fn earlier_entry_wins_on_overlap() {
    let table = [
        InstrFormat::new("LOW", "10001", 4, 0, 1),
        InstrFormat::new("FULL", "10010001", 7, 0, 0),
    ];
    let m = TableMatcher::new(&table).match_byte(0x91).unwrap();
    assert_eq!(m.mnemonic, "LOW");
    assert_eq!(m.operand_skip, 1);

    let overlaps = find_overlaps(&table);
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].byte, 0x91);
    assert_eq!(overlaps[0].winner, 0);
    assert_eq!(overlaps[0].shadowed, vec![1]);
}

#[test]
fn empty_table_matches_nothing() {
    let m = TableMatcher::new(&[]);
    assert!((0..=255u8).all(|b| m.match_byte(b).is_none()));
}
