use crate::output::{print_json, print_table};
use qa_core::ArtifactKind;

pub fn run(json: bool) -> anyhow::Result<()> {
    let kinds = ArtifactKind::all();

    if json {
        let entries: Vec<_> = kinds
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "kind": kind,
                    "template": kind.template_file(),
                    "description": kind.description(),
                    "fields": kind.fields(),
                })
            })
            .collect();
        print_json(&entries)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = kinds
        .iter()
        .map(|kind| {
            vec![
                kind.as_str().to_string(),
                kind.template_file().to_string(),
                kind.description().to_string(),
            ]
        })
        .collect();
    print_table(&["KIND", "TEMPLATE", "DESCRIPTION"], rows);
    Ok(())
}
