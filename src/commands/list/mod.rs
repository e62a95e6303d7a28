//! `psicat list` command - list visible entries
//!
//! Starts from a locator when one is given, then layers `--include`,
//! `--exclude`, `--combine`, `--search` and `--sort` on top. Rows come out in
//! the list's sort order. `--table` prints a name/source/text table of the
//! same rows instead.

pub mod format;

use crate::cli::commands::ListArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::view::apply_view;
use psicat_core::entry::{Entry, RowId};
use psicat_core::error::Result;
use psicat_core::session::Session;

use self::format::{output_human, output_json, output_records, output_table};

/// Execute the list command
pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let session = &mut catalog.session;

    if let Some(locator) = &args.locator {
        session.navigate(locator);
    }
    apply_view(session, &args.view)?;
    trace_command!(ctx.cli, ctx.start, "apply_view");

    match ctx.cli.format {
        OutputFormat::Human if args.table => output_table(ctx.cli, session),
        OutputFormat::Human => output_human(ctx.cli, session),
        OutputFormat::Json => output_json(session)?,
        OutputFormat::Records => output_records(session),
    }
    Ok(())
}

/// Visible rows with their entries, in list order
pub(crate) fn visible_entries(session: &Session) -> Vec<(RowId, &Entry)> {
    session
        .list()
        .visible_ids()
        .filter_map(|row| session.store().get(row).map(|entry| (row, entry)))
        .collect()
}
