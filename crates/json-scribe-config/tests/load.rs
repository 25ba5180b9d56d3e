use json_scribe_config::{ConfigError, FunctionDefinition};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_definition_from_disk() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("search.json5");
    fs::write(
        &path,
        r#"{
            $schema: "https://example.invalid/definition.json",
            name: "search",
            description: "Full-text search.",
            parameters: {
                query: { type: "string", description: "Search terms." },
                limit: { type: "integer", description: "Max hits.", default: 10 },
            },
            required: ["query"],
        }"#,
    )
    .expect("write");

    let definition = FunctionDefinition::load_from_path(&path).expect("definition");
    assert_eq!(definition.name, "search");
    assert_eq!(
        definition.schema.as_deref(),
        Some("https://example.invalid/definition.json")
    );
    assert_eq!(definition.parameters.len(), 2);
    assert_eq!(definition.required, vec!["query"]);
}

#[test]
fn missing_file_is_read_error() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("absent.json5");
    let err = FunctionDefinition::load_from_path(&path).unwrap_err();
    match &err {
        ConfigError::ReadFailed { origin, .. } => assert_eq!(origin, &path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.json5"));
}

#[test]
fn errors_from_disk_name_the_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("broken.json5");
    fs::write(&path, r#"{ name: "f", description: "d", parameters: 3 }"#).expect("write");

    let err = FunctionDefinition::load_from_path(&path).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "invalid definition {} at `parameters`: expected an object",
            path.display()
        )
    );
}

#[test]
fn example_survives_json_round_trip() {
    let example = FunctionDefinition::example();
    let text = serde_json::to_string(&example).expect("serialize");
    let loaded = FunctionDefinition::load_from_str(&text).expect("load");
    assert_eq!(loaded.name, example.name);
    assert_eq!(loaded.description, example.description);
    assert_eq!(loaded.parameters["param1"], example.parameters["param1"]);
    assert_eq!(
        loaded.parameters.keys().collect::<Vec<_>>(),
        example.parameters.keys().collect::<Vec<_>>()
    );
    assert_eq!(loaded.required, example.required);
}
