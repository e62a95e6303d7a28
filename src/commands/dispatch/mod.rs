//! Command dispatch logic for psicat

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{book, facets, link, list, pins, random, show};
use psicat_core::error::Result;

mod command;
pub(crate) mod macros;

pub use command::{Catalog, CommandContext};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::List(args) => list::execute(ctx, args),
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Pin(args) => pins::execute_pin(ctx, args),
            Commands::Unpin(args) => pins::execute_unpin(ctx, args),
            Commands::Pins { command } => pins::execute(ctx, command.as_ref()),
            Commands::Random(args) => random::execute(ctx, args),
            Commands::Book => book::execute(ctx),
            Commands::Facets(args) => facets::execute(ctx, args),
            Commands::Link(args) => link::execute_link(ctx, args),
            Commands::Open(args) => link::execute_open(ctx, args),
        }
    }
}
