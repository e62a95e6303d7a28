//! `psicat facets` command - facet options and their filter states

use crate::cli::commands::FacetsArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_records_data, print_records_header};
use psicat_core::error::Result;
use psicat_core::filter::{Facet, OptionState};

/// Execute the facets command
pub fn execute(ctx: &CommandContext, args: &FacetsArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    if let Some(locator) = &args.locator {
        catalog.session.navigate(locator);
    }
    let facets = catalog.session.filters().facets();

    match ctx.cli.format {
        OutputFormat::Human => print_facets_human(facets),
        OutputFormat::Json => print_facets_json(facets)?,
        OutputFormat::Records => print_facets_records(facets),
    }
    Ok(())
}

fn print_facets_human(facets: &[Facet]) {
    for (i, facet) in facets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        output_facet_human(facet);
    }
}

fn print_facets_json(facets: &[Facet]) -> Result<()> {
    let output: Vec<_> = facets.iter().map(facet_json).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `F <name> "<header>" combine=<mode> active=<bool>`, then one `D` line per
/// option keyed by its state
fn print_facets_records(facets: &[Facet]) {
    print_records_header("facets", &[("facets", facets.len().to_string())]);
    for facet in facets {
        println!(
            "F {} \"{}\" combine={} active={}",
            facet.name(),
            facet.header(),
            facet.combine(),
            facet.is_active()
        );
        for (option, state) in facet.options() {
            print_records_data(&format!("{}.{}", facet.name(), state), option);
        }
    }
}

fn output_facet_human(facet: &Facet) {
    println!("{} ({}, combine {})", facet.header(), facet.name(), facet.combine());
    for (option, state) in facet.options() {
        let marker = match state {
            OptionState::Include => "+",
            OptionState::Exclude => "-",
            OptionState::Ignore => " ",
        };
        let display = facet.display_value(option);
        if display == option {
            println!("  {} {}", marker, option);
        } else {
            println!("  {} {} ({})", marker, option, display);
        }
    }
}

fn facet_json(facet: &Facet) -> serde_json::Value {
    let options: Vec<_> = facet
        .options()
        .map(|(option, state)| {
            serde_json::json!({
                "value": option,
                "display": facet.display_value(option),
                "state": state,
            })
        })
        .collect();
    serde_json::json!({
        "name": facet.name(),
        "header": facet.header(),
        "combine": facet.combine(),
        "active": facet.is_active(),
        "options": options,
    })
}
