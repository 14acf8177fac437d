use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Template directory, relative to the tool's install location.
pub const TEMPLATES_DIR: &str = "assets/templates";

pub const SLUG_MAX_LEN: usize = 80;
pub const EMPTY_SLUG: &str = "item";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Locate the template root for a tool installed in `exe_dir`.
///
/// Walks upward from `exe_dir` and returns the first `assets/templates`
/// directory found. Falls back to `exe_dir/assets/templates` so a missing
/// install surfaces as a template-not-found error naming that path.
pub fn discover_template_root(exe_dir: &Path) -> PathBuf {
    let mut dir = exe_dir.to_path_buf();
    loop {
        let candidate = dir.join(TEMPLATES_DIR);
        if candidate.is_dir() {
            return candidate;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }
    exe_dir.join(TEMPLATES_DIR)
}

pub fn template_path(root: &Path, template_file: &str) -> PathBuf {
    root.join(template_file)
}

/// Join the output file name onto `out_dir`, defaulting to the working directory.
pub fn output_path(out_dir: Option<&Path>, file_name: &str) -> PathBuf {
    out_dir.unwrap_or(Path::new(".")).join(file_name)
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

static NON_SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn non_slug_re() -> &'static Regex {
    NON_SLUG_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive a filesystem-safe slug: lowercase, hyphen-separated, at most
/// [`SLUG_MAX_LEN`] characters, never empty.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = non_slug_re().replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');
    // Only ASCII survives the replacement, so byte truncation is char-safe.
    let truncated = &trimmed[..trimmed.len().min(SLUG_MAX_LEN)];
    let slug = truncated.trim_end_matches('-');
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
