use json_dot_path::{format_path, parse_path, resolve_index, IndexSpec, PathError, Segment};
use proptest::prelude::*;

#[test]
fn test_parse_only_dots() {
    let path = parse_path("...");
    assert_eq!(path.len(), 4);
    assert!(path.iter().all(|s| s.as_key() == Some("")));
}

#[test]
fn test_parse_escaped_dot_at_edges() {
    assert_eq!(parse_path("\\.a"), vec![Segment::key(".a")]);
    assert_eq!(parse_path("a\\."), vec![Segment::key("a.")]);
    assert_eq!(
        parse_path("\\..b"),
        vec![Segment::key("."), Segment::key("b")]
    );
}

#[test]
fn test_dollar_inside_key_is_not_an_index() {
    assert_eq!(parse_path("price$"), vec![Segment::key("price$")]);
    assert_eq!(
        parse_path("a.b$0"),
        vec![Segment::key("a"), Segment::key("b$0")]
    );
}

#[test]
fn test_invalid_index_is_deferred_to_resolve() {
    let path = parse_path("items.$first");
    let spec = path[1].as_index().expect("index segment");
    assert_eq!(
        resolve_index(spec, 3, true),
        Err(PathError::InvalidIndex("first".to_string()))
    );
}

#[test]
fn test_signed_and_fractional_indices_are_invalid() {
    for token in ["$-1", "$+1", "$1e3", "$ 1"] {
        let path = parse_path(token);
        assert!(
            matches!(path[0].as_index(), Some(IndexSpec::Invalid(_))),
            "{token} should be invalid"
        );
    }
}

#[test]
fn test_leading_zero_index_is_invalid() {
    let path = parse_path("items.$007");
    assert_eq!(
        resolve_index(path[1].as_index().expect("index segment"), 10, false),
        Err(PathError::InvalidIndex("007".to_string()))
    );
}

#[test]
fn test_unaddressable_keys_are_refused_not_mangled() {
    let trailing_backslash = vec![Segment::key("a\\"), Segment::key("b")];
    assert!(matches!(
        format_path(&trailing_backslash),
        Err(PathError::Unaddressable(_))
    ));

    let dollar_key = vec![Segment::key("$x")];
    assert!(matches!(
        format_path(&dollar_key),
        Err(PathError::Unaddressable(_))
    ));

    let last_key = vec![Segment::key("b"), Segment::key("a\\")];
    assert_eq!(parse_path(&format_path(&last_key).unwrap()), last_key);
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-z][a-z0-9_.]{0,6}".prop_map(Segment::Key),
        (0usize..10_000).prop_map(Segment::index),
        Just(Segment::Index(IndexSpec::Last)),
        Just(Segment::Index(IndexSpec::New)),
    ]
}

fn awkward_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[ab$.\\\\]{0,4}".prop_map(Segment::Key),
        "[0-9ab$.\\\\]{0,4}".prop_map(|raw| Segment::Index(IndexSpec::Invalid(raw))),
        (0usize..100).prop_map(Segment::index),
    ]
}

proptest! {
    #[test]
    fn formatted_paths_parse_back(path in prop::collection::vec(segment(), 1..6)) {
        let text = format_path(&path).unwrap();
        prop_assert_eq!(parse_path(&text), path);
    }

    #[test]
    fn format_is_exact_or_refused(path in prop::collection::vec(awkward_segment(), 0..5)) {
        if let Ok(text) = format_path(&path) {
            prop_assert_eq!(parse_path(&text), path);
        }
    }

    #[test]
    fn parse_never_panics(text in "\\PC{0,24}") {
        let _ = parse_path(&text);
    }
}
