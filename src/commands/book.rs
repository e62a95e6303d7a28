//! `psicat book` command - render the sublist as one document

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{entry_json, entry_record, print_records_header, wrap_records_body};
use psicat_core::error::Result;

/// Execute the book command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let session = &catalog.session;
    let markup = session.book_view();
    let pins: Vec<_> = session
        .selected_ids()
        .into_iter()
        .filter_map(|row| session.store().get(row).map(|entry| (row, entry)))
        .collect();

    match ctx.cli.format {
        OutputFormat::Human => {
            if markup.is_empty() {
                if !ctx.cli.quiet {
                    println!("No pinned entries");
                }
            } else {
                println!("{}", markup);
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = pins
                .iter()
                .map(|(row, entry)| entry_json(*row, entry, true))
                .collect();
            let output = serde_json::json!({
                "markdown": markup.as_str(),
                "entries": entries,
                "lastViewed": session.last_viewed(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header("book", &[("pins", pins.len().to_string())]);
            for (row, entry) in &pins {
                println!("{}", entry_record(*row, entry, true));
            }
            if !markup.is_empty() {
                wrap_records_body("book", markup.as_str());
            }
        }
    }
    Ok(())
}
