//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use psicat_core::config::CatalogConfig;
use psicat_core::dataset::{DataSource, FileSource};
use psicat_core::error::{PsiError, Result};
use psicat_core::session::Session;
use psicat_core::sublist::SublistState;

use super::macros::trace_command;

/// A loaded session plus where its sublist is persisted
pub struct Catalog {
    pub session: Session,
    pub state_path: PathBuf,
}

impl Catalog {
    /// Persist the sublist and last viewed entry
    pub fn save_pins(&self) -> Result<()> {
        self.session.sublist_state().save(&self.state_path)?;
        tracing::debug!(path = %self.state_path.display(), "saved sublist");
        Ok(())
    }
}

/// Load configuration, the base dataset, supplemental data and the saved
/// sublist into a fresh session
pub fn open_catalog(cli: &Cli, start: Instant) -> Result<Catalog> {
    let config = CatalogConfig::discover(cli.config.as_deref())?;
    trace_command!(cli, start, "load_config");

    let mut session = Session::from_config(&config)?;

    let data = cli
        .data
        .clone()
        .or_else(|| config.data_path())
        .ok_or(PsiError::NoDataset)?;
    session.load_base(&FileSource::new(data))?;
    trace_command!(cli, start, "load_base");

    let brew: Vec<FileSource> = config
        .brew_paths()
        .into_iter()
        .chain(cli.brew.iter().cloned())
        .map(FileSource::new)
        .collect();
    if !brew.is_empty() {
        let sources: Vec<&dyn DataSource> = brew.iter().map(|s| s as &dyn DataSource).collect();
        // A rolled back merge is logged by the session; browsing continues
        session.merge_supplemental(&sources);
        trace_command!(cli, start, "merge_supplemental");
    }

    let state_path = match &cli.state {
        Some(path) => path.clone(),
        None => config.state_path()?,
    };
    match SublistState::load(&state_path) {
        Ok(Some(state)) => session.restore_sublist(&state),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(path = %state_path.display(), error = %e, "ignoring unreadable sublist state")
        }
    }

    if session.all_excluded() && !cli.quiet {
        eprintln!("warning: every entry is hidden by the exclude list");
    }

    Ok(Catalog {
        session,
        state_path,
    })
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn open_catalog(&self) -> Result<Catalog> {
        open_catalog(self.cli, self.start)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("psicat {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Browse, filter and pin a psionics catalog.");
        println!();
        println!("Run `psicat --help` for usage information.");
        Ok(())
    }
}
