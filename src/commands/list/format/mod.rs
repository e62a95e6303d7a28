//! Output formatting for the list command

mod human;
mod json;
mod records;

pub use human::{output_human, output_table};
pub use json::output_json;
pub use records::output_records;
