//! `psicat pin`, `psicat unpin` and `psicat pins` - the sublist
//!
//! Every change is written back to the state file before returning.

use std::path::Path;

use crate::cli::commands::{PinArgs, PinsCommands};
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::{Catalog, CommandContext};
use crate::commands::format::{entry_json, entry_line, entry_record, print_records_header};
use psicat_core::bail_invalid;
use psicat_core::entry::RowId;
use psicat_core::error::Result;
use psicat_core::sublist::SublistState;

/// Execute `psicat pin`
pub fn execute_pin(ctx: &CommandContext, args: &PinArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let rows = resolve_all(&catalog, args)?;
    let changed: Vec<RowId> = rows
        .into_iter()
        .filter(|row| catalog.session.pin(*row))
        .collect();
    catalog.save_pins()?;
    report_change(ctx.cli, &catalog, "pinned", &changed)
}

/// Execute `psicat unpin`
pub fn execute_unpin(ctx: &CommandContext, args: &PinArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let rows = resolve_all(&catalog, args)?;
    let changed: Vec<RowId> = rows
        .into_iter()
        .filter(|row| catalog.session.unpin(*row))
        .collect();
    catalog.save_pins()?;
    report_change(ctx.cli, &catalog, "unpinned", &changed)
}

/// Execute `psicat pins [list|clear|export|import]`
pub fn execute(ctx: &CommandContext, command: Option<&PinsCommands>) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    match command {
        None | Some(PinsCommands::List) => output_list(ctx.cli, &catalog),
        Some(PinsCommands::Clear) => {
            let cleared = catalog.session.sublist().selected_ids();
            catalog.session.clear_pins();
            catalog.save_pins()?;
            report_change(ctx.cli, &catalog, "unpinned", &cleared)
        }
        Some(PinsCommands::Export { file }) => {
            catalog.session.sublist_state().save(file)?;
            tracing::info!(path = %file.display(), pins = catalog.session.sublist().len(), "exported sublist");
            report_path(ctx.cli, "exported", file, catalog.session.sublist().len())
        }
        Some(PinsCommands::Import { file }) => {
            let state = match SublistState::load(file)? {
                Some(state) => state,
                None => bail_invalid!("pins file", file.display()),
            };
            catalog.session.restore_sublist(&state);
            catalog.save_pins()?;
            report_path(ctx.cli, "imported", file, catalog.session.sublist().len())
        }
    }
}

/// Row ids pass through untouched; pinning or unpinning a row that does
/// not exist is a no-op. Names and unique ids must resolve.
fn resolve_all(catalog: &Catalog, args: &PinArgs) -> Result<Vec<RowId>> {
    args.references
        .iter()
        .map(|reference| {
            let reference = reference.trim();
            match reference.parse::<RowId>() {
                Ok(row) => Ok(row),
                Err(_) => catalog
                    .session
                    .resolve_ref(reference, args.source.as_deref()),
            }
        })
        .collect()
}

fn output_list(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let session = &catalog.session;
    let pins: Vec<_> = session
        .selected_ids()
        .into_iter()
        .filter_map(|row| session.store().get(row).map(|entry| (row, entry)))
        .collect();

    match cli.format {
        OutputFormat::Human => {
            if pins.is_empty() {
                if !cli.quiet {
                    println!("No pinned entries");
                }
                return Ok(());
            }
            for (position, (row, entry)) in pins.iter().enumerate() {
                let line = entry_line(*row, entry, false);
                println!("{}. {}", position + 1, line.trim_start());
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = pins
                .iter()
                .map(|(row, entry)| entry_json(*row, entry, true))
                .collect();
            let output = serde_json::json!({
                "count": items.len(),
                "pins": items,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header("pins", &[("count", pins.len().to_string())]);
            for (row, entry) in &pins {
                println!("{}", entry_record(*row, entry, true));
            }
        }
    }
    Ok(())
}

fn report_change(cli: &Cli, catalog: &Catalog, action: &str, rows: &[RowId]) -> Result<()> {
    let session = &catalog.session;
    match cli.format {
        OutputFormat::Human => {
            if cli.quiet {
                return Ok(());
            }
            if rows.is_empty() {
                println!("Nothing {}", action);
            }
            for row in rows {
                if let Some(entry) = session.store().get(*row) {
                    println!("{} {} [{}]", capitalize(action), entry.name, row);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "action": action,
                "rows": rows,
                "pins": session.selected_ids(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header(
                action,
                &[
                    ("changed", rows.len().to_string()),
                    ("pins", session.sublist().len().to_string()),
                ],
            );
            for row in rows {
                if let Some(entry) = session.store().get(*row) {
                    println!("{}", entry_record(*row, entry, action == "pinned"));
                }
            }
        }
    }
    Ok(())
}

fn report_path(cli: &Cli, action: &str, file: &Path, count: usize) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} {} pins ({})", capitalize(action), count, file.display());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "action": action,
                "path": file.display().to_string(),
                "count": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header(
                action,
                &[
                    ("count", count.to_string()),
                    ("path", file.display().to_string()),
                ],
            );
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
