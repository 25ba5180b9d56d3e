//! JSON rendering and file output.

use crate::ScribeError;
use log::debug;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT: usize = 4;

/// Render a value as JSON text.
///
/// `None` produces compact output; `Some(n)` indents each level by `n`
/// spaces, with `Some(0)` still placing every element on its own line.
pub fn to_json_string<T>(value: &T, indent: Option<usize>) -> Result<String, ScribeError>
where
    T: Serialize + ?Sized,
{
    let bytes = render(value, indent)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a value as UTF-8 JSON text, replacing any existing file.
///
/// Non-ASCII characters are written verbatim rather than as `\uXXXX`
/// escapes. The parent directory must already exist. Writes are not atomic.
pub fn write_json_file<T>(
    value: &T,
    path: impl AsRef<Path>,
    indent: Option<usize>,
) -> Result<(), ScribeError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let bytes = render(value, indent)?;
    debug!(
        "writing json file (path={}, bytes={}, indent={:?})",
        path.display(),
        bytes.len(),
        indent
    );
    fs::write(path, bytes)?;
    Ok(())
}

fn render<T>(value: &T, indent: Option<usize>) -> Result<Vec<u8>, ScribeError>
where
    T: Serialize + ?Sized,
{
    let mut out = Vec::new();
    match indent {
        None => serde_json::to_writer(&mut out, value)?,
        Some(width) => {
            let indent = " ".repeat(width);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut out, formatter);
            value.serialize(&mut serializer)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn compact_output_has_no_whitespace() {
        let value = json!([{ "a": 1, "b": [true, null] }]);
        let text = to_json_string(&value, None).expect("render");
        assert_eq!(text, r#"[{"a":1,"b":[true,null]}]"#);
    }

    #[test]
    fn indent_controls_spaces_per_level() {
        let value = json!({ "a": { "b": 1 } });
        assert_eq!(
            to_json_string(&value, Some(2)).expect("render"),
            "{\n  \"a\": {\n    \"b\": 1\n  }\n}"
        );
        assert_eq!(
            to_json_string(&value, Some(DEFAULT_INDENT)).expect("render"),
            "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
        );
    }

    #[test]
    fn zero_indent_keeps_newlines() {
        let value = json!([1, 2]);
        assert_eq!(to_json_string(&value, Some(0)).expect("render"), "[\n1,\n2\n]");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("out.json");
        fs::write(&path, "previous contents that are much longer than the new ones").expect("seed");

        write_json_file(&json!({ "k": "v" }), &path, None).expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), r#"{"k":"v"}"#);
    }

    #[test]
    fn write_keeps_non_ascii_text() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("out.json");
        write_json_file(&json!(["café"]), &path, None).expect("write");
        let text = fs::read_to_string(&path).expect("read");
        assert_eq!(text, "[\"café\"]");
        let parsed: Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed, json!(["café"]));
    }

    #[test]
    fn string_rendering_matches_file_contents() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("out.json");
        let value = json!({ "greeting": "grüß dich", "emoji": "🦀" });

        write_json_file(&value, &path, Some(2)).expect("write");

        assert_eq!(
            to_json_string(&value, Some(2)).expect("render"),
            fs::read_to_string(&path).expect("read")
        );
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("missing").join("out.json");
        let err = write_json_file(&json!([]), &path, Some(4)).unwrap_err();
        assert!(matches!(err, ScribeError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn unrepresentable_value_is_serialize_error() {
        use std::collections::HashMap;

        let mut value = HashMap::new();
        value.insert((1, 2), "tuple keys are not json keys");
        let err = to_json_string(&value, None).unwrap_err();
        assert!(matches!(err, ScribeError::Serialize(_)));
    }
}
