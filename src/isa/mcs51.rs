//! MCS-51 (i8051/i8052) opcode formats.
//!
//! Order matters: the matcher reports the first entry whose window matches.
//! Windows narrower than 7..0 leave register selectors (`Rn`, `@Ri`) or
//! page-address bits (`AJMP`/`ACALL`) outside the comparison.

use crate::instructions::InstrFormat;

pub const MCS51_TABLE: &[InstrFormat] = &[
    InstrFormat::new("ACALL",   "10001",    4, 0, 1),
    InstrFormat::new("ADD_1",   "00101",    7, 3, 0),
    InstrFormat::new("ADD_2",   "00100101", 7, 0, 1),
    InstrFormat::new("ADD_3",   "0010011",  7, 1, 0),
    InstrFormat::new("ADD_4",   "00100100", 7, 0, 1),
    InstrFormat::new("ADDC_1",  "00111",    7, 3, 0),
    InstrFormat::new("ADDC_2",  "00110101", 7, 0, 1),
    InstrFormat::new("ADDC_3",  "0011011",  7, 1, 0),
    InstrFormat::new("ADDC_4",  "00110100", 7, 0, 1),
    InstrFormat::new("AJMP",    "00001",    4, 0, 1),
    InstrFormat::new("ANL_1",   "01011",    7, 3, 0),
    InstrFormat::new("ANL_2",   "01010101", 7, 0, 1),
    InstrFormat::new("ANL_3",   "0101011",  7, 1, 0),
    InstrFormat::new("ANL_4",   "01010100", 7, 0, 1),
    InstrFormat::new("ANL_5",   "01010010", 7, 0, 1),
    InstrFormat::new("ANL_6",   "01010011", 7, 0, 2),
    InstrFormat::new("ANL_7",   "10000010", 7, 0, 1),
    InstrFormat::new("ANL_8",   "10110000", 7, 0, 1),
    InstrFormat::new("CJNE_1",  "10110101", 7, 0, 2),
    InstrFormat::new("CJNE_2",  "10110100", 7, 0, 2),
    InstrFormat::new("CJNE_3",  "10111",    7, 3, 2),
    InstrFormat::new("CJNE_4",  "1011011",  7, 1, 2),
    InstrFormat::new("CLR_1",   "11100100", 7, 0, 0),
    InstrFormat::new("CLR_2",   "11000011", 7, 0, 0),
    InstrFormat::new("CLR_3",   "11000010", 7, 0, 1),
    InstrFormat::new("CPL_1",   "11110100", 7, 0, 0),
    InstrFormat::new("CPL_2",   "10110011", 7, 0, 0),
    InstrFormat::new("CPL_3",   "10110010", 7, 0, 1),
    InstrFormat::new("DA",      "11010100", 7, 0, 0),
    InstrFormat::new("DEC_1",   "00010100", 7, 0, 0),
    InstrFormat::new("DEC_2",   "00011",    7, 3, 0),
    InstrFormat::new("DEC_3",   "00010101", 7, 0, 1),
    InstrFormat::new("DEC_4",   "0001011",  7, 1, 0),
    InstrFormat::new("DIV",     "10000100", 7, 0, 0),
    InstrFormat::new("DJNZ_1",  "11011",    7, 3, 1),
    InstrFormat::new("DJNZ_2",  "11010101", 7, 0, 2),
    InstrFormat::new("INC_1",   "00000100", 7, 0, 0),
    InstrFormat::new("INC_2",   "00001",    7, 3, 0),
    InstrFormat::new("INC_3",   "00000101", 7, 0, 1),
    InstrFormat::new("INC_4",   "0000011",  7, 1, 0),
    InstrFormat::new("INC_5",   "10100011", 7, 0, 0),
    InstrFormat::new("JB",      "00100000", 7, 0, 2),
    InstrFormat::new("JBC",     "00010000", 7, 0, 2),
    InstrFormat::new("JC",      "01000000", 7, 0, 1),
    InstrFormat::new("JMP",     "01110011", 7, 0, 0),
    InstrFormat::new("JNB",     "00110000", 7, 0, 2),
    InstrFormat::new("JNC",     "01010000", 7, 0, 1),
    InstrFormat::new("JNZ",     "01110000", 7, 0, 1),
    InstrFormat::new("JZ",      "01100000", 7, 0, 1),
    InstrFormat::new("LCALL",   "00010010", 7, 0, 2),
    InstrFormat::new("LJMP",    "00000010", 7, 0, 2),
    InstrFormat::new("MOV_1",   "11101",    7, 3, 0),
    InstrFormat::new("MOV_2",   "11100101", 7, 0, 1),
    InstrFormat::new("MOV_3",   "1110011",  7, 1, 0),
    InstrFormat::new("MOV_4",   "01110100", 7, 0, 1),
    InstrFormat::new("MOV_5",   "11111",    7, 3, 0),
    InstrFormat::new("MOV_6",   "10101",    7, 3, 1),
    InstrFormat::new("MOV_7",   "01111",    7, 3, 1),
    InstrFormat::new("MOV_8",   "11110101", 7, 0, 1),
    InstrFormat::new("MOV_9",   "10001",    7, 3, 1),
    InstrFormat::new("MOV_10",  "10000101", 7, 0, 2),
    InstrFormat::new("MOV_11",  "1000011",  7, 1, 1),
    InstrFormat::new("MOV_12",  "01110101", 7, 0, 2),
    InstrFormat::new("MOV_13",  "1111011",  7, 1, 0),
    InstrFormat::new("MOV_14",  "1010011",  7, 1, 1),
    InstrFormat::new("MOV_15",  "0111011",  7, 1, 1),
    InstrFormat::new("MOV_16",  "10100010", 7, 0, 1),
    InstrFormat::new("MOV_17",  "10010010", 7, 0, 1),
    InstrFormat::new("MOV_18",  "10010000", 7, 0, 2),
    InstrFormat::new("MOVC_1",  "10010011", 7, 0, 0),
    InstrFormat::new("MOVC_2",  "10000011", 7, 0, 0),
    InstrFormat::new("MOVX_1",  "1110001",  7, 1, 0),
    InstrFormat::new("MOVX_2",  "11100000", 7, 0, 0),
    InstrFormat::new("MOVX_3",  "1111001",  7, 1, 0),
    InstrFormat::new("MOVX_4",  "11110000", 7, 0, 0),
    InstrFormat::new("MUL",     "10100100", 7, 0, 0),
    InstrFormat::new("NOP",     "00000000", 7, 0, 0),
    InstrFormat::new("ORL_1",   "01001",    7, 3, 0),
    InstrFormat::new("ORL_2",   "01000101", 7, 0, 1),
    InstrFormat::new("ORL_3",   "0100011",  7, 1, 0),
    InstrFormat::new("ORL_4",   "01000100", 7, 0, 1),
    InstrFormat::new("ORL_5",   "01000010", 7, 0, 1),
    InstrFormat::new("ORL_6",   "01000011", 7, 0, 2),
    InstrFormat::new("ORL_7",   "01110010", 7, 0, 1),
    InstrFormat::new("ORL_8",   "10100000", 7, 0, 1),
    InstrFormat::new("POP",     "11010000", 7, 0, 1),
    InstrFormat::new("PUSH",    "11000000", 7, 0, 1),
    InstrFormat::new("RET",     "00100010", 7, 0, 0),
    InstrFormat::new("RETI",    "00110010", 7, 0, 0),
    InstrFormat::new("RL",      "00100011", 7, 0, 0),
    InstrFormat::new("RLC",     "00110011", 7, 0, 0),
    InstrFormat::new("RR",      "00000011", 7, 0, 0),
    InstrFormat::new("RRC",     "00010011", 7, 0, 0),
    InstrFormat::new("SETB_1",  "11010011", 7, 0, 0),
    InstrFormat::new("SETB_2",  "11010010", 7, 0, 1),
    InstrFormat::new("SJMP",    "10000000", 7, 0, 1),
    InstrFormat::new("SUBB_1",  "10011",    7, 3, 0),
    InstrFormat::new("SUBB_2",  "10010101", 7, 0, 1),
    InstrFormat::new("SUBB_3",  "1001011",  7, 1, 0),
    InstrFormat::new("SUBB_4",  "10010100", 7, 0, 1),
    InstrFormat::new("SWAP",    "11000100", 7, 0, 0),
    InstrFormat::new("XCH_1",   "11001",    7, 3, 0),
    InstrFormat::new("XCH_2",   "11000101", 7, 0, 1),
    InstrFormat::new("XCH_3",   "1100011",  7, 1, 0),
    InstrFormat::new("XCHD",    "1101011",  7, 1, 0),
    InstrFormat::new("XRL_1",   "01101",    7, 3, 0),
    InstrFormat::new("XRL_2",   "01100101", 7, 0, 1),
    InstrFormat::new("XRL_3",   "0110011",  7, 1, 0),
    InstrFormat::new("XRL_4",   "01100100", 7, 0, 1),
    InstrFormat::new("XRL_5",   "01100010", 7, 0, 1),
    InstrFormat::new("XRL_6",   "01100011", 7, 0, 2),
];
