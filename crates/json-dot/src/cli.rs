//! Core logic of the `json-dot` binary.
//!
//! ```text
//! json-dot [--config <options.toml>] <command> <path> [<arg>]
//! ```
//!
//! The document is read from stdin. Commands:
//! - `get <path>` : print the value as compact JSON (or `null`)
//! - `contains <path>` : print `true` / `false`
//! - `size <path>` : print the number of entries
//! - `keys <path>` : print the object's keys as a JSON array
//! - `set <path> <json>` : print the updated document (a value that is not
//!   valid JSON is stored as a string)
//! - `remove <path>` : print the updated document
//! - `copy <src> <dst>` : print the updated document
//! - `move <src> <dst>` : print the updated document

use serde_json::Value;

use crate::document::Document;
use crate::error::DocumentError;
use crate::options::DocumentOptions;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Document(DocumentError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(e)    => write!(f, "{e}"),
            CliError::Document(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DocumentError> for CliError {
    fn from(e: DocumentError) -> Self { CliError::Document(e) }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Document(DocumentError::Json(e)) }
}

pub const USAGE: &str = "Usage: json-dot [--config <options.toml>] <get|contains|size|keys|set|remove|copy|move> <path> [<arg>]";

// ── Argument handling ─────────────────────────────────────────────────────

/// Split a leading `--config <file>` off the arguments and load it.
pub fn split_options(args: &[String]) -> Result<(DocumentOptions, &[String]), CliError> {
    match args {
        [flag, file, rest @ ..] if flag == "--config" => {
            Ok((DocumentOptions::from_file(file)?, rest))
        }
        [flag] if flag == "--config" => Err(CliError::Usage(USAGE.to_string())),
        _ => Ok((DocumentOptions::default(), args)),
    }
}

/// A command-line value: JSON when it parses, a plain string otherwise.
pub fn parse_value_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Run one command against the document text `input`.
pub fn run(args: &[String], input: &str, options: DocumentOptions) -> Result<String, CliError> {
    let doc = Document::parse(input)?.with_options(options);

    match args {
        [cmd, path] if cmd == "get" => Ok(serde_json::to_string(&doc.get(path)?)?),
        [cmd, path] if cmd == "contains" => Ok(doc.contains(path)?.to_string()),
        [cmd, path] if cmd == "size" => Ok(doc.size(path)?.to_string()),
        [cmd, path] if cmd == "keys" => Ok(serde_json::to_string(&doc.key_set(path)?)?),
        [cmd, path, value] if cmd == "set" => {
            doc.set(path, parse_value_arg(value))?;
            Ok(doc.to_json_string(true)?)
        }
        [cmd, path] if cmd == "remove" => {
            doc.remove(path)?;
            Ok(doc.to_json_string(true)?)
        }
        [cmd, src, dst] if cmd == "copy" => {
            doc.copy_to(src, dst)?;
            Ok(doc.to_json_string(true)?)
        }
        [cmd, src, dst] if cmd == "move" => {
            doc.move_to(src, dst)?;
            Ok(doc.to_json_string(true)?)
        }
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run_default(items: &[&str], input: &str) -> Result<String, CliError> {
        run(&args(items), input, DocumentOptions::default())
    }

    #[test]
    fn get_nested() {
        let out = run_default(&["get", "foo.bar"], r#"{"foo":{"bar":42}}"#).unwrap();
        assert_eq!(out, "42");
    }

    #[test]
    fn get_container_is_compact() {
        let out = run_default(&["get", "a"], r#"{"a":{"b":1,"c":[1,2]}}"#).unwrap();
        assert_eq!(out, r#"{"b":1,"c":[1,2]}"#);
    }

    #[test]
    fn get_missing_prints_null() {
        let out = run_default(&["get", "z"], r#"{"a":1}"#).unwrap();
        assert_eq!(out, "null");
    }

    #[test]
    fn get_last_element() {
        let out = run_default(&["get", "arr.$last"], r#"{"arr":[10,20,30]}"#).unwrap();
        assert_eq!(out, "30");
    }

    #[test]
    fn get_type_mismatch_is_error() {
        let err = run_default(&["get", "a.b"], r#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, CliError::Document(ref e) if e.is_path_type()));
        assert!(err.to_string().starts_with("PATH_TYPE"));
    }

    #[test]
    fn contains_and_size() {
        let doc = r#"{"arr":[1,2]}"#;
        assert_eq!(run_default(&["contains", "arr.$1"], doc).unwrap(), "true");
        assert_eq!(run_default(&["contains", "arr.$new"], doc).unwrap(), "false");
        assert_eq!(run_default(&["size", "arr"], doc).unwrap(), "2");
    }

    #[test]
    fn keys_in_order() {
        let out = run_default(&["keys", ""], r#"{"b":1,"a":2}"#).unwrap();
        assert_eq!(out, r#"["b","a"]"#);
    }

    #[test]
    fn set_json_and_plain_values() {
        let out = run_default(&["set", "list.$new", "{\"n\":1}"], "{}").unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"list": [{"n": 1}]}));

        let out = run_default(&["set", "name", "Ann"], "null").unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["name"], "Ann");
    }

    #[test]
    fn remove_copy_move() {
        let out = run_default(&["remove", "a"], r#"{"a":1,"b":2}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert!(v.get("a").is_none());

        let out = run_default(&["copy", "a", "c"], r#"{"a":1}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"a": 1, "c": 1}));

        let out = run_default(&["move", "a", "c"], r#"{"a":1}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"c": 1}));
    }

    #[test]
    fn bad_usage() {
        assert!(matches!(run_default(&["get"], "{}"), Err(CliError::Usage(_))));
        assert!(matches!(run_default(&["frob", "a"], "{}"), Err(CliError::Usage(_))));
    }

    #[test]
    fn invalid_input_document() {
        let err = run_default(&["get", "a"], "{nope").unwrap_err();
        assert!(matches!(err, CliError::Document(DocumentError::Json(_))));
    }

    #[test]
    fn split_options_without_flag() {
        let items = args(&["get", "a"]);
        let (options, rest) = split_options(&items).unwrap();
        assert_eq!(options, DocumentOptions::default());
        assert_eq!(rest, &items[..]);
    }

    #[test]
    fn split_options_missing_file_argument() {
        let items = args(&["--config"]);
        assert!(matches!(split_options(&items), Err(CliError::Usage(_))));
    }
}
