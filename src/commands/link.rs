//! `psicat link` and `psicat open` - locators
//!
//! `link` encodes the view built from flags (plus saved pins) into a
//! locator; `open` decodes one and shows what it describes. Unknown keys
//! and values a locator carries are ignored, never reported as errors.

use crate::cli::commands::{LinkArgs, OpenArgs};
use crate::cli::OutputFormat;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{entry_record, print_records_data, print_records_header, wrap_records_body};
use crate::commands::view::apply_view;
use psicat_core::error::Result;
use psicat_core::filter::OptionState;
use psicat_core::router::RouterState;
use psicat_core::session::Session;

/// Execute `psicat link`
pub fn execute_link(ctx: &CommandContext, args: &LinkArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let session = &mut catalog.session;
    apply_view(session, &args.view)?;
    if let Some(reference) = &args.select {
        let row = session.resolve_ref(reference.trim(), args.source.as_deref())?;
        session.select(row);
    }
    let locator = session.locator();
    trace_command!(ctx.cli, ctx.start, "encode_locator");

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", locator),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "locator": locator,
                "counts": {
                    "visible": session.counts().visible,
                    "total": session.counts().total,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print_records_header("link", &[]);
            print_records_data("locator", &locator);
        }
    }
    Ok(())
}

/// Execute `psicat open`
pub fn execute_open(ctx: &CommandContext, args: &OpenArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let state = catalog.session.navigate(&args.locator);
    trace_command!(ctx.cli, ctx.start, "navigate");
    let session = &catalog.session;

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx.cli.quiet, session, &state),
        OutputFormat::Json => {
            let selected = session.selected().and_then(|row| {
                session.store().get(row).map(|entry| {
                    serde_json::json!({
                        "row": row,
                        "name": entry.name,
                        "markdown": session.render_selected().map(|m| m.into_string()),
                    })
                })
            });
            let output = serde_json::json!({
                "locator": session.locator(),
                "counts": {
                    "visible": session.counts().visible,
                    "total": session.counts().total,
                },
                "selected": selected,
                "pins": session.selected_ids(),
                "search": state.search,
                "sort": state.sort.map(|s| s.to_string()),
                "filters": filter_summary(&state),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let counts = session.counts();
            print_records_header(
                "open",
                &[
                    ("visible", counts.visible.to_string()),
                    ("total", counts.total.to_string()),
                ],
            );
            print_records_data("locator", &session.locator());
            for filter in filter_summary(&state) {
                print_records_data("filter", &filter);
            }
            for row in session.selected_ids() {
                if let Some(entry) = session.store().get(row) {
                    println!("{}", entry_record(row, entry, true));
                }
            }
            if let (Some(row), Some(markup)) = (session.selected(), session.render_selected()) {
                wrap_records_body(row, markup.as_str());
            }
        }
    }
    Ok(())
}

fn output_human(quiet: bool, session: &Session, state: &RouterState) {
    match session.render_selected() {
        Some(markup) => println!("{}", markup),
        None if !quiet => println!("No entry selected"),
        None => {}
    }
    if quiet {
        return;
    }
    println!();
    println!("{} shown", session.counts());
    let filters = filter_summary(state);
    if !filters.is_empty() {
        println!("Filters: {}", filters.join(", "));
    }
    if let Some(query) = &state.search {
        println!("Search: {}", query);
    }
    let pins: Vec<String> = session
        .selected_ids()
        .into_iter()
        .filter_map(|row| session.store().get(row).map(|e| e.name.clone()))
        .collect();
    if !pins.is_empty() {
        println!("Pinned: {}", pins.join(", "));
    }
}

/// `source=+PSA`, `type=-T`, `order:and` style descriptions of a filter state
fn filter_summary(state: &RouterState) -> Vec<String> {
    let mut out = Vec::new();
    for (facet, substate) in state.filters.facets() {
        for (option, option_state) in &substate.states {
            let sign = match option_state {
                OptionState::Include => "+",
                OptionState::Exclude => "-",
                OptionState::Ignore => continue,
            };
            out.push(format!("{}={}{}", facet, sign, option));
        }
        if let Some(combine) = substate.combine {
            out.push(format!("{}:{}", facet, combine));
        }
    }
    out
}
