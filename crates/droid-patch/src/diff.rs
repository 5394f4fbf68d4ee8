//! Unified diffs for dry-run previews.

use similar::TextDiff;

/// Render a unified diff of `old` against `new` labelled with `path`.
///
/// Returns `None` when the texts are identical.
pub fn unified_diff(path: &str, old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let diff = TextDiff::from_lines(old, new);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string();
    Some(rendered)
}
