use std::fs;
use std::sync::Arc;
use std::thread;

use json_dot::{Document, DocumentError, DocumentOptions, IndexOverflow};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Account {
    name: String,
    age: u32,
    tags: Vec<String>,
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("doc.json");

    let doc = Document::empty();
    doc.set("z", 1).unwrap().set("a.$new", "x").unwrap();
    doc.save(&path, false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"z\":1,\"a\":[\"x\"]}\n");

    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(loaded.key_set("").unwrap(), vec!["z", "a"]);
}

#[test]
fn test_save_pretty_uses_configured_indent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pretty.json");

    let doc = Document::from_value(json!({"a": {"b": 1}}))
        .with_options(DocumentOptions::default().with_indent(3));
    doc.save(&path, true).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n   \"a\": {\n      \"b\": 1\n   }\n}\n"
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = Document::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn test_load_invalid_json_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "{\"a\":").unwrap();
    assert!(matches!(
        Document::load(&path).unwrap_err(),
        DocumentError::Json(_)
    ));
}

#[test]
fn test_write_to_and_from_reader() {
    let doc = Document::from_value(json!({"k": [1, 2, 3]}));
    let mut buf = Vec::new();
    doc.write_to(&mut buf, false).unwrap();
    assert_eq!(buf, br#"{"k":[1,2,3]}"#);

    let back = Document::from_reader(buf.as_slice()).unwrap();
    assert_eq!(back.get_i64_list("k").unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_options_from_toml_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("options.toml");
    fs::write(&path, "index-overflow = \"pad-with-null\"\nindent = 1\n").unwrap();

    let options = DocumentOptions::from_file(&path).unwrap();
    assert_eq!(options.index_overflow, IndexOverflow::PadWithNull);
    assert_eq!(options.indent, 1);
}

#[test]
fn test_serialize_and_deserialize_objects() {
    let ann = Account {
        name: "Ann".to_string(),
        age: 31,
        tags: vec!["admin".to_string()],
    };

    let doc = Document::empty();
    doc.serialize("accounts.$new", &ann).unwrap();
    assert_eq!(doc.get_string("accounts.$0.name").unwrap(), "Ann");
    assert_eq!(doc.get_string_list("accounts.$0.tags").unwrap(), vec!["admin"]);

    let back: Account = doc.deserialize("accounts.$0").unwrap();
    assert_eq!(back, ann);

    let missing: Option<Account> = doc.deserialize("accounts.$9").unwrap();
    assert_eq!(missing, None);
}

#[test]
fn test_deserialize_wrong_shape_is_mapping_error() {
    let doc = Document::from_value(json!({"acct": {"name": 5}}));
    let err = doc.deserialize::<Account>("acct").unwrap_err();
    assert!(matches!(err, DocumentError::Mapping(_)));
}

#[test]
fn test_whole_document_mapping() {
    let ann = Account {
        name: "Ann".to_string(),
        age: 31,
        tags: vec![],
    };
    let doc = Document::from_serializable(&ann).unwrap();
    assert_eq!(doc.get_i32("age").unwrap(), 31);

    doc.set("age", 32).unwrap();
    let back: Account = doc.to_deserialized().unwrap();
    assert_eq!(back.age, 32);
}

#[test]
fn test_concurrent_appends_are_serialized() {
    let doc = Arc::new(Document::empty());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || {
                for i in 0..per_thread {
                    doc.set("events.$new", json!({"thread": t, "seq": i})).unwrap();
                    let _ = doc.size("events").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(doc.size("events").unwrap(), threads * per_thread);
    for t in 0..threads {
        let seqs: Vec<i64> = doc
            .values("events")
            .unwrap()
            .iter()
            .filter(|event| event["thread"] == t)
            .filter_map(|event| event["seq"].as_i64())
            .collect();
        let expected: Vec<i64> = (0..per_thread as i64).collect();
        assert_eq!(seqs, expected);
    }
}
