//! Configuration file tests.

use std::io::Write;

use jsonapi_path_parser::NodeKind;
use jsonapi_path_runtime::{PathResolver, RuntimeConfig};

const CONFIG: &str = r#"{
    "resources": [
        {
            "name": "articles",
            "relationships": [
                { "json_name": "author", "target_type": "people" },
                { "json_name": "comments" }
            ],
            "actions": [
                { "name": "publish", "scope": "instance" },
                { "name": "trending", "scope": "collection" }
            ]
        },
        { "name": "people", "relationships": [{ "json_name": "articles" }] },
        { "name": "comments" }
    ]
}"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn resolver_from_file() {
    let file = write_config(CONFIG);
    let resolver = PathResolver::from_file(file.path()).unwrap();
    assert_eq!(resolver.registry().len(), 3);

    let path = resolver.parse("/articles/1/author/relationships/articles").unwrap();
    assert_eq!(
        path.into_kinds(),
        vec![
            NodeKind::resource_with_ids("articles", "1"),
            NodeKind::field("author"),
            NodeKind::relationship("articles"),
        ]
    );
}

#[test]
fn scoped_actions_from_file() {
    let resolver = PathResolver::from_config(&RuntimeConfig::from_json_str(CONFIG).unwrap())
        .unwrap();
    assert_eq!(resolver.parse("/articles/trending").unwrap().action(), Some("trending"));
    assert_eq!(resolver.parse("/articles/1/publish").unwrap().action(), Some("publish"));
    // publish is instance-only, so here it is an id
    assert_eq!(
        resolver.parse("/articles/publish").unwrap().root().ids().and_then(|ids| ids.single()),
        Some("publish")
    );
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PathResolver::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn invalid_file_records_its_path() {
    let file = write_config("{ \"resources\": 5 }");
    let err = RuntimeConfig::from_file(file.path()).unwrap_err();
    let ctx = err.context.expect("context");
    assert_eq!(ctx.path, Some(file.path().display().to_string()));
}

#[test]
fn invalid_mark_in_file_is_rejected() {
    let file = write_config(r#"{ "parser": { "relationship_mark": "a/b" } }"#);
    assert!(PathResolver::from_file(file.path()).is_err());
}

#[test]
fn separator_in_type_name_is_rejected() {
    let config = RuntimeConfig::from_json_str(r#"{ "resources": [{ "name": "a,b" }] }"#).unwrap();
    assert!(config.build_registry().is_err());
}

#[test]
fn config_serializes_back() {
    let config = RuntimeConfig::from_json_str(CONFIG).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(RuntimeConfig::from_json_str(&json).unwrap(), config);
}
