use serde::Serialize;

use i8052_rom::instructions::InstrFormat;
use i8052_rom::matcher::{find_overlaps, validate_table, Overlap};

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub index: usize,
    #[serde(flatten)]
    pub format: InstrFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub entries: Vec<TableRow>,
    pub error: Option<String>,
    pub overlaps: Vec<Overlap>,
    pub unmatched: Vec<u8>,
}

impl TableReport {
    pub fn is_clean(&self) -> bool { self.error.is_none() && self.overlaps.is_empty() }
}

pub fn table_report(table: &[InstrFormat]) -> TableReport {
    let entries = table.iter().enumerate().map(|(index, f)| TableRow { index, format: *f }).collect();
    let error = validate_table(table).err().map(|e| e.to_string());
    let overlaps = find_overlaps(table);
    let unmatched = (0..=u8::MAX).filter(|b| !table.iter().any(|f| f.matches(*b))).collect();
    TableReport { entries, error, overlaps, unmatched }
}
