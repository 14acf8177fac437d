use crate::catalog::Descriptor;
use crate::error::{QaError, Result};
use crate::options::Config;
use crate::{io, paths, template};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Look up `kind`, render its template and write the artifact.
///
/// Returns the path the artifact was written to.
pub fn create_artifact(
    kind: &str,
    config: &Config,
    template_root: &Path,
    today: NaiveDate,
) -> Result<PathBuf> {
    let descriptor = Descriptor::lookup(kind, config, today)?;
    render(&descriptor, config, template_root)
}

/// Render `descriptor` into `config`'s output directory.
///
/// The existence check on the output path and the write that follows are
/// not atomic; concurrent invocations targeting the same path race.
pub fn render(descriptor: &Descriptor, config: &Config, template_root: &Path) -> Result<PathBuf> {
    let template_path = paths::template_path(template_root, descriptor.template_file);
    if !template_path.is_file() {
        return Err(QaError::TemplateNotFound {
            path: template_path,
        });
    }

    let out_dir = config.out_dir().unwrap_or(Path::new("."));
    let output = paths::output_path(Some(out_dir), &descriptor.output_file_name);
    tracing::debug!(
        kind = %descriptor.kind,
        template = %template_path.display(),
        output = %output.display(),
        "resolved artifact paths"
    );

    if output.exists() {
        if !config.force() {
            return Err(QaError::OverwriteRefused { path: output });
        }
        tracing::warn!(path = %output.display(), "overwriting existing artifact (--force)");
    }

    io::ensure_dir(out_dir)?;
    let text = std::fs::read_to_string(&template_path)?;
    let rendered = template::substitute(&text, &descriptor.substitutions);

    let unresolved = template::placeholders(&rendered);
    if !unresolved.is_empty() {
        tracing::debug!(?unresolved, "placeholders left unresolved");
    }

    io::write_text(&output, &rendered)?;
    tracing::info!(kind = %descriptor.kind, path = %output.display(), "artifact written");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArtifactKind;
    use tempfile::TempDir;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Template root holding one template for `kind` with `body`.
    fn templates_with(kind: ArtifactKind, body: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(kind.template_file()), body).unwrap();
        dir
    }

    #[test]
    fn renders_bug_report_into_out_dir() {
        let templates = templates_with(
            ArtifactKind::BugReport,
            "# {{title}}\nReported: {{date}} by {{reported_by}}\n",
        );
        let work = TempDir::new().unwrap();
        let config = Config::default()
            .with_value("title", "Login fails on Safari")
            .with_out(work.path().join("bugs"));

        let path = create_artifact("bug-report", &config, templates.path(), jan_15()).unwrap();

        assert_eq!(
            path,
            work.path()
                .join("bugs")
                .join("bug-2025-01-15-login-fails-on-safari.md")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# Login fails on Safari\nReported: 2025-01-15 by \n");
    }

    #[test]
    fn supplied_values_replace_every_placeholder() {
        let templates = templates_with(
            ArtifactKind::TestPlan,
            "{{project}} {{release}} {{project}} {{owner}} {{custom}}",
        );
        let work = TempDir::new().unwrap();
        let config = Config::default()
            .with_value("project", "Acme")
            .with_value("release", "R7")
            .with_out(work.path());

        let path = create_artifact("test-plan", &config, templates.path(), jan_15()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "Acme R7 Acme  {{custom}}");
    }

    #[test]
    fn literal_template_is_copied_byte_for_byte() {
        let body = "Checklist\n- [ ] DNS\n- [ ] TLS\n";
        let templates = templates_with(ArtifactKind::EnvironmentChecklist, body);
        let work = TempDir::new().unwrap();
        let config = Config::default()
            .with_value("env", "staging")
            .with_out(work.path());

        let path =
            create_artifact("environment-checklist", &config, templates.path(), jan_15()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), body);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let templates = templates_with(ArtifactKind::TestPlan, "plan for {{release}}");
        let work = TempDir::new().unwrap();
        let config = Config::default()
            .with_value("release", "R")
            .with_out(work.path());

        let path = create_artifact("test-plan", &config, templates.path(), jan_15()).unwrap();
        std::fs::write(&path, "edited by hand").unwrap();

        let err = create_artifact("test-plan", &config, templates.path(), jan_15()).unwrap_err();
        assert!(matches!(err, QaError::OverwriteRefused { path: ref p } if *p == path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "edited by hand");

        let forced = config.with_force(true);
        create_artifact("test-plan", &forced, templates.path(), jan_15()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "plan for R");
    }

    #[test]
    fn missing_template_is_reported_with_path() {
        let templates = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = Config::default().with_out(work.path().join("never"));

        let err = create_artifact("risk-assessment", &config, templates.path(), jan_15())
            .unwrap_err();
        match err {
            QaError::TemplateNotFound { path } => {
                assert_eq!(path, templates.path().join("risk-assessment.md"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!work.path().join("never").exists());
    }

    #[test]
    fn unknown_kind_writes_nothing() {
        let templates = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = Config::default().with_out(work.path());

        let err = create_artifact("unknown-kind", &config, templates.path(), jan_15()).unwrap_err();
        assert!(matches!(err, QaError::UnknownArtifact(ref k) if k == "unknown-kind"));
        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn renders_every_shipped_template() {
        let templates =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/templates");
        let work = TempDir::new().unwrap();
        let config = Config::default()
            .with_value("project", "Acme Shop")
            .with_value("release", "2025.01")
            .with_value("feature", "Checkout Flow")
            .with_value("title", "Cart total wrong")
            .with_value("owner", "Dana")
            .with_value("approvers", "Lee, Sam")
            .with_value("reported_by", "Robin")
            .with_value("env", "staging")
            .with_out(work.path());

        for kind in ArtifactKind::all() {
            let path = create_artifact(kind.as_str(), &config, &templates, jan_15()).unwrap();
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(
                template::placeholders(&content).is_empty(),
                "{kind} left placeholders: {:?}",
                template::placeholders(&content)
            );
            assert!(content.contains("Acme Shop"), "{kind} is missing the project name");
        }
    }
}
