//! Detail renderer
//!
//! Produces Markdown for one entry or for a book view of several. The
//! renderer is pure: it never looks at selection or list state.

mod text;

use std::fmt;

use serde::Serialize;

use crate::entry::{Concentration, Cost, Entry, Mode, PsionicType};
pub use text::strip_tags;
use text::{push_blocks, push_named};

/// Rendered Markdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a single entry
pub fn render_one(entry: &Entry) -> Markup {
    let mut out = String::new();
    push_entry(&mut out, entry, 1);
    Markup(out.trim_end().to_string())
}

/// Book view: disciplines first, then talents, each group in the given
/// order under its own heading. With nothing given, falls back to the last
/// viewed entry, else to empty markup.
pub fn render_many(entries: &[&Entry], last_viewed: Option<&Entry>) -> Markup {
    if entries.is_empty() {
        return last_viewed.map(render_one).unwrap_or_default();
    }

    let mut out = String::new();
    for (kind, heading) in [
        (PsionicType::Discipline, "Disciplines"),
        (PsionicType::Talent, "Talents"),
    ] {
        let group: Vec<&Entry> = entries.iter().copied().filter(|e| e.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("# {}\n\n", heading));
        for entry in group {
            push_entry(&mut out, entry, 2);
        }
    }
    Markup(out.trim_end().to_string())
}

/// Markdown table with name, source and body text columns, sorted by name
/// then source. The text column is the entry's rendered body on one line.
pub fn render_table(entries: &[&Entry]) -> Markup {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.source.cmp(&b.source))
    });

    let mut out = String::from("| Name | Source | Text |\n| --- | --- | --- |\n");
    for entry in sorted {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            table_cell(&entry.name),
            table_cell(&entry.source),
            table_cell(&body_text(entry))
        ));
    }
    Markup(out.trim_end().to_string())
}

/// The rendered entry without its heading, type line and source line,
/// joined into one line
fn body_text(entry: &Entry) -> String {
    let mut out = String::new();
    push_entry(&mut out, entry, 1);
    out.lines()
        .skip(2)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("*Source:"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// `Talent` or `<Order> Discipline`
pub fn type_line(entry: &Entry) -> String {
    match (entry.kind, entry.order.as_deref()) {
        (PsionicType::Discipline, Some(order)) => format!("{} Discipline", order),
        (kind, _) => kind.full_name().to_string(),
    }
}

/// One-line description used by list output
pub fn summary_line(entry: &Entry) -> String {
    format!("{} ({}, {})", entry.name, type_line(entry), entry.source)
}

/// `2 psi` or `2-7 psi`
pub fn cost_text(cost: &Cost) -> String {
    match cost.max {
        Some(max) if max != cost.min => format!("{}-{} psi", cost.min, max),
        _ => format!("{} psi", cost.min),
    }
}

/// `conc., 1 min.`
pub fn concentration_text(concentration: &Concentration) -> String {
    format!(
        "conc., {} {}.",
        concentration.duration, concentration.unit
    )
}

fn push_entry(out: &mut String, entry: &Entry, level: usize) {
    out.push_str(&format!("{} {}\n", "#".repeat(level), entry.name));
    out.push_str(&format!("*{}*\n\n", type_line(entry)));

    push_blocks(out, &entry.entries);
    if entry.kind == PsionicType::Discipline {
        if let Some(focus) = &entry.focus {
            out.push_str(&format!("***Psychic Focus.*** {}\n\n", strip_tags(focus)));
        }
        for mode in &entry.modes {
            push_mode(out, mode);
        }
    }

    match entry.page {
        Some(page) => out.push_str(&format!("*Source: {}, page {}*\n\n", entry.source, page)),
        None => out.push_str(&format!("*Source: {}*\n\n", entry.source)),
    }
}

fn push_mode(out: &mut String, mode: &Mode) {
    push_named(out, &mode_header(mode), &mode.entries);
    for submode in &mode.submodes {
        push_mode(out, submode);
    }
}

fn mode_header(mode: &Mode) -> String {
    let mut parts = Vec::new();
    if let Some(cost) = &mode.cost {
        parts.push(cost_text(cost));
    }
    if let Some(concentration) = &mode.concentration {
        parts.push(concentration_text(concentration));
    }
    if parts.is_empty() {
        mode.name.clone()
    } else {
        format!("{} ({})", mode.name, parts.join("; "))
    }
}
