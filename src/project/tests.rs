//! Tests for the collection flow.

use super::*;
use crate::config::{Config, DependencyPolicy};
use crate::error::ReadmeError;
use crate::output::{BufferSink, LineKind};
use crate::prompt::Prompter;
use std::io::Cursor;

fn run(input: &str, config: &Config) -> (crate::error::Result<Collected>, BufferSink) {
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), BufferSink::new());
    let result = collect_project(&mut prompter, config);
    (result, prompter.into_sink())
}

const FULL_SESSION: &str = "\
Demo
A test.
Second line.
END
https://example.com
not a url
https://docs.example.com/demo
Jane
MIT
pip install demo
END
demo run
END
pytest
requests, click
";

#[test]
fn test_full_session_in_order() {
    let (result, sink) = run(FULL_SESSION, &Config::default());

    let Collected::Project {
        metadata,
        dependencies,
    } = result.unwrap()
    else {
        panic!("Expected a collected project");
    };

    assert_eq!(metadata.project_name, "Demo");
    assert_eq!(metadata.project_description, "A test.\nSecond line.");
    assert_eq!(metadata.project_homepage.as_deref(), Some("https://example.com"));
    assert_eq!(
        metadata.project_doc_url.as_deref(),
        Some("https://docs.example.com/demo")
    );
    assert_eq!(metadata.author, "Jane");
    assert_eq!(metadata.license_name, "MIT");
    assert_eq!(metadata.install_command, "pip install demo");
    assert_eq!(metadata.usage_instructions, "demo run");
    assert_eq!(metadata.test_command, "pytest");
    assert_eq!(dependencies, vec!["requests", "click"]);

    // One bad URL was re-asked.
    assert_eq!(sink.of_kind(LineKind::Error).len(), 1);
    assert!(sink.contains(LineKind::Info, "ENTER PROJECT INFORMATION"));
}

#[test]
fn test_empty_name_aborts_before_other_prompts() {
    let (result, sink) = run("\nshould never be read\n", &Config::default());

    assert_eq!(result.unwrap(), Collected::Aborted);
    assert_eq!(sink.of_kind(LineKind::Prompt), vec!["Enter the project name:"]);
}

#[test]
fn test_minimal_session_with_everything_blank() {
    let input = "Demo\nEND\n\n\n\n\nEND\nEND\n\n\n";
    let (result, _) = run(input, &Config::default());

    let Collected::Project {
        metadata,
        dependencies,
    } = result.unwrap()
    else {
        panic!("Expected a collected project");
    };

    assert_eq!(metadata, ProjectMetadata::named("Demo"));
    assert!(dependencies.is_empty());
}

#[test]
fn test_required_fields_are_enforced() {
    let config = Config::from_yaml(
        "required:\n  author: true\n  description: true\n  homepage: true\n",
    )
    .unwrap();
    let input = "Demo\nEND\nAbout\nEND\n\nhttps://example.com\n\n\nJane\n\nEND\nEND\n\n\n";

    let (result, sink) = run(input, &config);

    let Collected::Project { metadata, .. } = result.unwrap() else {
        panic!("Expected a collected project");
    };
    assert_eq!(metadata.project_description, "About");
    assert_eq!(metadata.project_homepage.as_deref(), Some("https://example.com"));
    assert_eq!(metadata.project_doc_url, None);
    assert_eq!(metadata.author, "Jane");
    // Empty description, blank homepage, blank author.
    assert_eq!(sink.of_kind(LineKind::Error).len(), 3);
}

#[test]
fn test_strict_dependency_policy() {
    let mut config = Config::default();
    config.dependency_policy = DependencyPolicy::Strict;
    let input = "Demo\nEND\n\n\n\n\nEND\nEND\n\nEND\nserde\n";

    let (result, _) = run(input, &config);

    let Collected::Project { dependencies, .. } = result.unwrap() else {
        panic!("Expected a collected project");
    };
    assert_eq!(dependencies, vec!["serde"]);
}

#[test]
fn test_input_closed_mid_session() {
    let (result, _) = run("Demo\nunterminated description\n", &Config::default());
    assert!(matches!(result, Err(ReadmeError::InputClosed(_))));
}
