//! Flat `{{key}}` placeholder substitution.
//!
//! Placeholders naming unknown keys are left in the output verbatim.

use std::collections::BTreeMap;

pub const OPEN: &str = "{{";
pub const CLOSE: &str = "}}";

/// Replace every `{{key}}` whose key is in `values`.
///
/// The scan is a single left-to-right pass, so substituted values are never
/// themselves re-expanded.
pub fn substitute(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let replacement = after_open
            .find(CLOSE)
            .and_then(|end| values.get(&after_open[..end]).map(|v| (end, v)));
        match replacement {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Distinct placeholder names in `template`, in first-seen order.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        let name = &after_open[..end];
        if is_placeholder_name(name) {
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &after_open[end + CLOSE.len()..];
        } else {
            rest = &rest[start + 1..];
        }
    }
    names
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
