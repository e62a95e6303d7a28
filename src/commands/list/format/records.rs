//! Records output formatting for list command

use crate::commands::format::{entry_record, print_records_header};
use crate::commands::list::visible_entries;
use psicat_core::session::Session;

/// Output in records format
pub fn output_records(session: &Session) {
    let counts = session.counts();
    print_records_header(
        "list",
        &[
            ("visible", counts.visible.to_string()),
            ("total", counts.total.to_string()),
        ],
    );

    for (row, entry) in visible_entries(session) {
        println!("{}", entry_record(row, entry, session.sublist().contains(row)));
    }
}
