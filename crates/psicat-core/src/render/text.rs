//! Text block rendering

use regex::Regex;
use serde_json::Value;

/// Replace inline tags such as `{@dice 1d6|...}` with their display text
pub fn strip_tags(text: &str) -> String {
    let tag_re = match Regex::new(r"\{@\w+ ([^|}]*)(?:\|[^}]*)?\}") {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, "failed to compile inline tag regex");
            return text.to_string();
        }
    };
    tag_re.replace_all(text, "$1").into_owned()
}

/// Render a sequence of text blocks. Strings are paragraphs, `{name,
/// entries}` objects are named sections and `{items}` objects are bullet
/// lists. Anything else is skipped.
pub(super) fn push_blocks(out: &mut String, blocks: &[Value]) {
    for block in blocks {
        push_block(out, block);
    }
}

fn push_block(out: &mut String, block: &Value) {
    match block {
        Value::String(text) => paragraph(out, &strip_tags(text)),
        Value::Object(map) => {
            if let Some(items) = map.get("items").and_then(Value::as_array) {
                for item in items.iter().filter_map(Value::as_str) {
                    out.push_str(&format!("- {}\n", strip_tags(item)));
                }
                out.push('\n');
                return;
            }
            let children = map
                .get("entries")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            match map.get("name").and_then(Value::as_str) {
                Some(name) => push_named(out, name, children),
                None => push_blocks(out, children),
            }
        }
        _ => {}
    }
}

/// A bold-italic run-in heading followed by its blocks. A leading string
/// block shares the heading's paragraph.
pub(super) fn push_named(out: &mut String, name: &str, blocks: &[Value]) {
    match blocks.split_first() {
        Some((Value::String(lead), rest)) => {
            paragraph(out, &format!("***{}.*** {}", name, strip_tags(lead)));
            push_blocks(out, rest);
        }
        _ => {
            paragraph(out, &format!("***{}.***", name));
            push_blocks(out, blocks);
        }
    }
}

fn paragraph(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}
