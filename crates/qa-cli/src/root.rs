use anyhow::Context;
use qa_core::paths::discover_template_root;
use std::path::{Path, PathBuf};

/// Resolve the template directory.
///
/// Priority:
/// 1. `--templates DIR` (passed in as `explicit`)
/// 2. Walk upward from the executable's directory looking for `assets/templates`
/// 3. Fall back to `assets/templates` next to the executable
pub fn resolve_template_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let exe_dir = exe.parent().unwrap_or(Path::new("."));
    Ok(discover_template_root(exe_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let result = resolve_template_root(Some(Path::new("/opt/qa/templates"))).unwrap();
        assert_eq!(result, PathBuf::from("/opt/qa/templates"));
    }

    #[test]
    fn default_root_is_a_templates_dir() {
        let result = resolve_template_root(None).unwrap();
        assert!(result.ends_with("assets/templates"));
    }
}
