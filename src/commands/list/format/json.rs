//! JSON output formatting for list command

use crate::commands::format::entry_json;
use crate::commands::list::visible_entries;
use psicat_core::error::Result;
use psicat_core::session::Session;

/// Output in JSON format
pub fn output_json(session: &Session) -> Result<()> {
    let counts = session.counts();
    let entries: Vec<_> = visible_entries(session)
        .into_iter()
        .map(|(row, entry)| entry_json(row, entry, session.sublist().contains(row)))
        .collect();

    let output = serde_json::json!({
        "counts": {
            "visible": counts.visible,
            "total": counts.total,
        },
        "locator": session.locator(),
        "entries": entries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
