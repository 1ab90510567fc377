//! Transform Tests
//!
//! End-to-end behaviour of `transform_with_fs` against an in-memory project.

use component_metadata::file_system::testing::MockFileSystem;
use component_metadata::file_system::AbsoluteFsPath;
use component_metadata::{transform_with_fs, CapturingHost, ErrorCode, TransformError, TransformOptions};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const CONTEXT: &str = "/project/src";

fn project() -> MockFileSystem {
    let fs = MockFileSystem::new_posix().with_cwd("/project");
    fs.init_with_files(vec![
        ("/project/src/img/card.png", "png"),
        ("/project/src/img/button.png", "png"),
    ]);
    fs
}

fn options() -> TransformOptions {
    TransformOptions::new(AbsoluteFsPath::new(CONTEXT.to_string())).with_file_name("Card.jsx")
}

fn run(source: &str) -> (Result<String, TransformError>, CapturingHost) {
    let fs = project();
    let mut host = CapturingHost::new();
    let result = transform_with_fs(source, &options(), &fs, &mut host);
    (result, host)
}

fn artifact(host: &CapturingHost, name: &str) -> Value {
    let file = host
        .file(name)
        .unwrap_or_else(|| panic!("missing artifact {name}"));
    serde_json::from_str(&file.content).unwrap()
}

#[test]
fn should_return_sources_without_annotations_unchanged() {
    let source = "import React from 'react';\n\n// keep me\nexport class Card   extends React.Component {}\n";
    let (result, host) = run(source);
    assert_eq!(result.unwrap(), source);
    assert!(host.files.is_empty());
    assert!(host.diagnostics.is_empty());
}

#[test]
fn should_ignore_other_decorators() {
    let source = "@observer class Card {}\n";
    let (result, host) = run(source);
    assert_eq!(result.unwrap(), source);
    assert!(host.files.is_empty());
}

#[test]
fn should_emit_one_artifact_named_after_the_class() {
    let (result, host) = run(
        "@Metadata({ thumbnail: './img/card.png', description: 'A card' })\n\
         export class Card {\n  render() { return null; }\n}\n",
    );
    let code = result.unwrap();
    assert!(!code.contains("@Metadata"));
    assert!(code.contains("class Card"));
    assert!(code.contains("render()"));

    assert_eq!(host.files.len(), 1);
    assert_eq!(host.files[0].name, "Card.component.json");
    assert!(host.diagnostics.is_empty());
    assert_eq!(
        artifact(&host, "Card.component.json"),
        json!({
            "name": "Card",
            "thumbnail": "./img/card.png",
            "description": "A card",
            "env": { "context": CONTEXT }
        })
    );
}

#[test]
fn should_write_fields_in_source_order_with_env_last() {
    let (result, host) = run(
        "@Metadata({ thumbnail: './img/card.png', zeta: 1, alpha: 2 }) class Card {}",
    );
    result.unwrap();
    let content = &host.file("Card.component.json").unwrap().content;
    let expected = "{\n  \"name\": \"Card\",\n  \"thumbnail\": \"./img/card.png\",\n  \"zeta\": 1,\n  \"alpha\": 2,\n  \"env\": {\n    \"context\": \"/project/src\"\n  }\n}";
    assert_eq!(content, expected);
}

#[test]
fn should_keep_props_in_declaration_order() {
    let (_, host) = run(
        r#"@Metadata({
            thumbnail: "./img/card.png",
            props: [
                { name: "title", type: "string", required: true },
                { name: "count", type: "number", default: 3 },
                { name: "ratio", type: "number", default: 1.5 },
            ],
        })
        class Card {}"#,
    );
    let value = artifact(&host, "Card.component.json");
    assert_eq!(
        value["props"],
        json!([
            { "name": "title", "type": "string", "required": true },
            { "name": "count", "type": "number", "default": 3 },
            { "name": "ratio", "type": "number", "default": 1.5 }
        ])
    );
}

#[test]
fn should_report_missing_thumbnail_and_still_strip_the_decorator() {
    let (result, host) = run("@Metadata({ description: 'x' }) class Card {}");
    assert!(!result.unwrap().contains("Metadata"));
    assert!(host.files.is_empty());
    assert_eq!(host.diagnostics.len(), 1);
    let diagnostic = &host.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::MetadataMissingThumbnail);
    assert_eq!(diagnostic.class_name.as_deref(), Some("Card"));
    assert!(diagnostic.message.contains("'thumbnail'"));
}

#[test]
fn should_report_thumbnails_that_do_not_exist() {
    let (_, host) = run("@Metadata({ thumbnail: './img/missing.png' }) class Card {}");
    assert!(host.files.is_empty());
    assert_eq!(host.diagnostics.len(), 1);
    assert_eq!(host.diagnostics[0].code, ErrorCode::ThumbnailNotFound);
    assert!(host.diagnostics[0]
        .message
        .contains("/project/src/img/missing.png"));
}

#[test]
fn should_reject_non_string_thumbnails() {
    let (_, host) = run("@Metadata({ thumbnail: 42 }) class Card {}");
    assert!(host.files.is_empty());
    assert_eq!(host.diagnostics[0].code, ErrorCode::MetadataMissingThumbnail);
}

#[test]
fn should_treat_a_missing_argument_as_missing_thumbnail() {
    let (result, host) = run("@Metadata() class Card {}");
    assert!(!result.unwrap().contains("Metadata"));
    assert_eq!(host.diagnostics.len(), 1);
    assert_eq!(host.diagnostics[0].code, ErrorCode::MetadataMissingThumbnail);
}

#[test]
fn should_let_an_explicit_name_rename_the_artifact() {
    let (_, host) = run("@Metadata({ name: 'FancyCard', thumbnail: './img/card.png' }) class Card {}");
    assert_eq!(host.files.len(), 1);
    assert_eq!(host.files[0].name, "FancyCard.component.json");
    assert_eq!(artifact(&host, "FancyCard.component.json")["name"], "FancyCard");
}

#[test]
fn should_process_every_annotated_class_in_a_file() {
    let (result, host) = run(
        "@Metadata({ thumbnail: './img/card.png' }) export class Card {}\n\
         class Plain {}\n\
         @Metadata({ thumbnail: './img/button.png' }) export class Button {}\n",
    );
    let code = result.unwrap();
    assert!(!code.contains("@Metadata"));
    assert!(code.contains("class Plain"));
    let names: Vec<&str> = host.files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, vec!["Card.component.json", "Button.component.json"]);
}

#[test]
fn should_process_classes_nested_in_functions_and_methods() {
    let (result, host) = run(
        "function make() {\n  @Metadata({ thumbnail: './img/card.png' }) class Inner {}\n  return Inner;\n}\n\
         @Metadata({ thumbnail: './img/button.png' })\n\
         export class Button {\n  static variant() {\n    @Metadata({}) class Variant {}\n    return Variant;\n  }\n}\n",
    );
    let code = result.unwrap();
    assert!(!code.contains("@Metadata"));
    assert!(code.contains("class Inner"));
    assert!(code.contains("class Variant"));

    let names: Vec<&str> = host.files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, vec!["Inner.component.json", "Button.component.json"]);
    assert_eq!(host.diagnostics.len(), 1);
    assert_eq!(host.diagnostics[0].class_name.as_deref(), Some("Variant"));
    assert_eq!(host.diagnostics[0].code, ErrorCode::MetadataMissingThumbnail);
}

#[test]
fn should_only_consume_the_first_metadata_decorator() {
    let (result, host) = run(
        "@Metadata({ thumbnail: './img/card.png' })\n@Metadata({ thumbnail: './img/button.png' })\nclass Card {}",
    );
    let code = result.unwrap();
    assert_eq!(code.matches("@Metadata").count(), 1);
    assert_eq!(host.files.len(), 1);
    assert_eq!(artifact(&host, "Card.component.json")["thumbnail"], "./img/card.png");
}

#[test]
fn should_keep_unrelated_decorators() {
    let (result, _) = run("@observer\n@Metadata({ thumbnail: './img/card.png' })\nclass Card {}");
    let code = result.unwrap();
    assert!(code.contains("@observer"));
    assert!(!code.contains("@Metadata"));
}

#[test]
fn should_be_idempotent() {
    let (first, host) = run("@Metadata({ thumbnail: './img/card.png' }) export class Card {}");
    let first = first.unwrap();
    assert_eq!(host.files.len(), 1);

    let (second, host) = run(&first);
    assert_eq!(second.unwrap(), first);
    assert!(host.files.is_empty());
    assert!(host.diagnostics.is_empty());
}

#[test]
fn should_parse_jsx_by_default() {
    let fs = project();
    let mut host = CapturingHost::new();
    let options = TransformOptions::new(AbsoluteFsPath::new(CONTEXT.to_string()));
    let code = transform_with_fs(
        "@Metadata({ thumbnail: './img/card.png' })\nclass Card { render() { return <div>hi</div>; } }",
        &options,
        &fs,
        &mut host,
    )
    .unwrap();
    assert!(code.contains("<div>hi</div>"));
    assert_eq!(host.files.len(), 1);
}

#[test]
fn should_fail_on_syntax_errors_without_emitting() {
    let (result, host) = run("@Metadata({ thumbnail: './img/card.png' }) class Card {");
    let err = result.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::SourceParseFailure));
    assert!(err.to_string().starts_with("Failed to parse Card.jsx"));
    assert!(host.files.is_empty());
    assert!(host.diagnostics.is_empty());
}
