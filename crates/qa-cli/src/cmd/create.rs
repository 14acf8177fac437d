use crate::root::resolve_template_root;
use qa_core::{catalog, create_artifact, resolve, QaError, Resolved};

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let Resolved {
        config,
        positionals,
    } = resolve(args)?;

    let kind = match positionals.as_slice() {
        [kind] => kind,
        [] => {
            return Err(QaError::Usage(
                "create requires an artifact kind (run 'qa-artifacts list')".to_string(),
            )
            .into())
        }
        extra => {
            return Err(QaError::Usage(format!(
                "create takes exactly one artifact kind, got {}: {}",
                extra.len(),
                extra.join(" ")
            ))
            .into())
        }
    };

    let template_root = resolve_template_root(config.templates_dir())?;
    tracing::debug!(root = %template_root.display(), "template root");

    let path = create_artifact(kind, &config, &template_root, catalog::today())?;
    println!("{}", path.display());
    Ok(())
}
