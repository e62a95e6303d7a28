//! `psicat show` command - render one entry in full
//!
//! Showing an entry makes it the last viewed entry, which the book view
//! falls back to when nothing is pinned.

use crate::cli::commands::ShowArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{entry_json, entry_record, print_records_header, wrap_records_body};
use psicat_core::bail_usage;
use psicat_core::error::{PsiError, Result};
use psicat_core::session::Session;

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let reference = args.reference.trim();
    if reference.is_empty() {
        bail_usage!("entry reference must not be empty");
    }

    let mut catalog = ctx.open_catalog()?;
    let row = catalog
        .session
        .resolve_ref(reference, args.source.as_deref())?;
    catalog.session.select(row);
    catalog.save_pins()?;

    output_selected(ctx.cli, &catalog.session, "show")
}

/// Print the selected entry in the requested format
pub(crate) fn output_selected(cli: &Cli, session: &Session, mode: &str) -> Result<()> {
    let (row, entry, markup) = match (
        session.selected(),
        session.selected_entry(),
        session.render_selected(),
    ) {
        (Some(row), Some(entry), Some(markup)) => (row, entry, markup),
        _ => {
            return Err(PsiError::failed(
                &format!("{} entry", mode),
                "nothing is selected",
            ))
        }
    };
    let pinned = session.sublist().contains(row);

    match cli.format {
        OutputFormat::Human => {
            println!("{}", markup);
        }
        OutputFormat::Json => {
            let mut output = entry_json(row, entry, pinned);
            if let Some(obj) = output.as_object_mut() {
                obj.insert("entry".to_string(), serde_json::to_value(entry)?);
                obj.insert("markdown".to_string(), serde_json::json!(markup.as_str()));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header(mode, &[("row", row.to_string())]);
            println!("{}", entry_record(row, entry, pinned));
            wrap_records_body(row, markup.as_str());
        }
    }
    Ok(())
}
