//! Main CLI commands enum and argument structures

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::parse::{
    parse_combine, parse_facet_value, parse_sort_column, FacetCombine, FacetValue,
};
use psicat_core::list::SortColumn;

/// Top-level psicat commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, filtered, searched and sorted
    List(ListArgs),

    /// Show one entry in full
    Show(ShowArgs),

    /// Pin entries to the sublist
    Pin(PinArgs),

    /// Remove entries from the sublist
    Unpin(PinArgs),

    /// Manage the sublist
    Pins {
        #[command(subcommand)]
        command: Option<PinsCommands>,
    },

    /// Show a random entry from the filtered list
    Random(RandomArgs),

    /// Book view of the pinned entries (falls back to the last viewed entry)
    Book,

    /// Show every facet's options and their states
    Facets(FacetsArgs),

    /// Print a locator for the current view
    Link(LinkArgs),

    /// Decode a locator and show the view it describes
    Open(OpenArgs),
}

/// Filter, search and sort flags shared by list-like commands
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Include entries with a facet value (facet=value, repeatable)
    #[arg(long, value_parser = parse_facet_value)]
    pub include: Vec<FacetValue>,

    /// Exclude entries with a facet value (facet=value, repeatable)
    #[arg(long, value_parser = parse_facet_value)]
    pub exclude: Vec<FacetValue>,

    /// How a facet's includes combine (facet=and|or, repeatable)
    #[arg(long, value_parser = parse_combine)]
    pub combine: Vec<FacetCombine>,

    /// Case-insensitive name search
    #[arg(long, short)]
    pub search: Option<String>,

    /// Sort column (name, source, type, order)
    #[arg(long, value_parser = parse_sort_column)]
    pub sort: Option<SortColumn>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Start from the state a locator describes
    #[arg(long)]
    pub locator: Option<String>,

    /// Print a name, source and text table instead of one line per entry
    #[arg(long)]
    pub table: bool,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the random command.
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Pick from the list a locator describes
    #[arg(long)]
    pub locator: Option<String>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Row id, unique id or entry name
    pub reference: String,

    /// Source to disambiguate entries sharing a name
    #[arg(long)]
    pub source: Option<String>,
}

/// Arguments for the pin and unpin commands.
#[derive(Args, Debug)]
pub struct PinArgs {
    /// Row ids, unique ids or entry names
    #[arg(required = true)]
    pub references: Vec<String>,

    /// Source to disambiguate entries sharing a name
    #[arg(long)]
    pub source: Option<String>,
}

/// Sublist subcommands
#[derive(Subcommand, Debug)]
pub enum PinsCommands {
    /// List pinned entries in pin order (default)
    List,

    /// Remove every pin
    Clear,

    /// Write the sublist to a file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Replace the sublist with one read from a file
    Import {
        /// Source file
        file: PathBuf,
    },
}

/// Arguments for the facets command.
#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Show the facet states a locator describes
    #[arg(long)]
    pub locator: Option<String>,
}

/// Arguments for the link command.
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Entry to select in the locator
    #[arg(long)]
    pub select: Option<String>,

    /// Source to disambiguate `--select`
    #[arg(long)]
    pub source: Option<String>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the open command.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Locator string (e.g. `sel=3&f.source=-UATMC&pin=3`)
    pub locator: String,
}
