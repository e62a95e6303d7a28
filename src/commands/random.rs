//! `psicat random` command - show a random entry from the filtered list
//!
//! The pick becomes the last viewed entry, like `show`.

use crate::cli::commands::RandomArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::show::output_selected;
use crate::commands::view::apply_view;
use psicat_core::error::Result;

/// Execute the random command
pub fn execute(ctx: &CommandContext, args: &RandomArgs) -> Result<()> {
    let mut catalog = ctx.open_catalog()?;
    if let Some(locator) = &args.locator {
        catalog.session.navigate(locator);
    }
    apply_view(&mut catalog.session, &args.view)?;

    let mut rng = rand::thread_rng();
    match catalog.session.select_random(&mut rng) {
        Some(row) => {
            tracing::debug!(row, "picked random entry");
            catalog.save_pins()?;
            output_selected(ctx.cli, &catalog.session, "random")
        }
        None => {
            match ctx.cli.format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "row": null })),
                _ if !ctx.cli.quiet => println!("No entries found"),
                _ => {}
            }
            Ok(())
        }
    }
}
