//! Human-readable output formatting for list command

use crate::cli::Cli;
use crate::commands::format::entry_line;
use crate::commands::list::visible_entries;
use psicat_core::session::Session;

/// Output in human-readable format
pub fn output_human(cli: &Cli, session: &Session) {
    let entries = visible_entries(session);
    if entries.is_empty() {
        if !cli.quiet {
            println!("No entries found");
        }
        return;
    }

    for (row, entry) in &entries {
        println!("{}", entry_line(*row, entry, session.sublist().contains(*row)));
    }

    if !cli.quiet {
        let counts = session.counts();
        println!();
        println!("{} shown", counts);
    }
}

/// Output a Markdown table of the visible entries
pub fn output_table(cli: &Cli, session: &Session) {
    if session.counts().visible == 0 {
        if !cli.quiet {
            println!("No entries found");
        }
        return;
    }
    println!("{}", session.table_view());
}
