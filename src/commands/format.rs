//! Shared output helpers for entries in every format

use std::fmt::Display;

use psicat_core::entry::{Entry, RowId};
use psicat_core::records::{escape_quotes, header_line};

/// Print the records `H` header line
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    println!("{}", header_line(mode, fields));
}

/// Wrap body content in records format with B and B-END markers
pub fn wrap_records_body(id: impl Display, body: &str) {
    println!("B {}", id);
    for line in body.lines() {
        println!("{}", line);
    }
    println!("B-END");
}

/// Print a records `D` data line
pub fn print_records_data(key: &str, value: &str) {
    println!("D {} {}", key, escape_quotes(value));
}

/// `E <row> <T|D> "<name>" source=<source> order="<order>"`
pub fn entry_record(row: RowId, entry: &Entry, pinned: bool) -> String {
    format!(
        "E {} {} \"{}\" source={} order=\"{}\"{}",
        row,
        entry.kind.code(),
        escape_quotes(&entry.name),
        entry.source,
        escape_quotes(&entry.display_order),
        if pinned { " pinned" } else { "" }
    )
}

/// One human-readable list line; pinned entries are starred
pub fn entry_line(row: RowId, entry: &Entry, pinned: bool) -> String {
    format!(
        "{:>4} [{}] {} ({}, {}){}",
        row,
        entry.kind.code(),
        entry.name,
        entry.source,
        entry.display_order,
        if pinned { " *" } else { "" }
    )
}

pub fn entry_json(row: RowId, entry: &Entry, pinned: bool) -> serde_json::Value {
    serde_json::json!({
        "row": row,
        "id": entry.stable_id(row),
        "name": entry.name,
        "source": entry.source,
        "type": entry.kind.code(),
        "order": entry.display_order,
        "pinned": pinned,
    })
}
