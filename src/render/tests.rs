//! Tests for document rendering.

use super::*;

fn demo() -> ProjectMetadata {
    ProjectMetadata {
        project_name: "Demo".to_string(),
        project_description: "A test.".to_string(),
        project_homepage: None,
        project_doc_url: None,
        author: "Jane".to_string(),
        license_name: "MIT".to_string(),
        install_command: "pip install demo".to_string(),
        usage_instructions: "demo run".to_string(),
        test_command: "pytest".to_string(),
    }
}

fn deps(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_full_document_layout() {
    let mut metadata = demo();
    metadata.project_homepage = Some("https://example.com".to_string());
    metadata.project_doc_url = Some("https://docs.example.com".to_string());

    let document = render(&metadata, &deps(&["requests", "click"]));

    let expected = r#"# Demo

## Description
A test.

## Project Links
- [Homepage](https://example.com)
- [Documentation](https://docs.example.com)

## Author
Jane

## License
MIT

## Installation
```bash
pip install demo
```

## Usage
```bash
demo run
```

## Testing
```bash
pytest
```

## Dependencies
- requests
- click
"#;
    assert_eq!(document, expected);
}

#[test]
fn test_document_starts_with_title() {
    for name in ["Demo", "README.md Generator", "x"] {
        let document = render(&ProjectMetadata::named(name), &[]);
        assert!(document.starts_with(&format!("# {}\n", name)));
    }
}

#[test]
fn test_render_is_idempotent() {
    let metadata = demo();
    let dependencies = deps(&["a", "b"]);
    assert_eq!(
        render(&metadata, &dependencies),
        render(&metadata, &dependencies)
    );
}

#[test]
fn test_no_dependencies_section_when_empty() {
    let document = render(&demo(), &[]);
    assert!(!document.contains("## Dependencies"));
    assert!(document.ends_with("pytest\n```\n"));
}

#[test]
fn test_dependencies_section_once_in_order() {
    let document = render(&demo(), &deps(&["zeta", "alpha"]));

    assert_eq!(document.matches("## Dependencies").count(), 1);
    let tail = document.split("## Dependencies\n").nth(1).unwrap();
    assert_eq!(tail, "- zeta\n- alpha\n");
}

#[test]
fn test_special_characters_pass_through() {
    let mut metadata = demo();
    metadata.project_description = "Project with special characters: & < > \" '".to_string();

    let document = render(&metadata, &[]);

    assert!(document.contains("Project with special characters: & < > \" '"));
    assert!(!document.contains("&amp;"));
    assert!(!document.contains("&lt;"));
}

#[test]
fn test_multiline_fields_are_embedded_verbatim() {
    let mut metadata = demo();
    metadata.install_command = "git clone x\ncd x\n  make".to_string();

    let document = render(&metadata, &[]);

    assert!(document.contains("## Installation\n```bash\ngit clone x\ncd x\n  make\n```"));
}

#[test]
fn test_missing_links_render_empty_targets_by_default() {
    let document = render(&demo(), &[]);
    assert!(document.contains("## Project Links\n- [Homepage]()\n- [Documentation]()\n"));
}

#[test]
fn test_omit_policy_drops_missing_link() {
    let mut metadata = demo();
    metadata.project_doc_url = Some("https://docs.example.com".to_string());
    let options = RenderOptions {
        link_policy: LinkPolicy::Omit,
        ..RenderOptions::default()
    };

    let document = render_with(&metadata, &[], &options);

    assert!(document.contains("## Project Links\n- [Documentation](https://docs.example.com)\n"));
    assert!(!document.contains("Homepage"));
}

#[test]
fn test_omit_policy_drops_section_without_links() {
    let options = RenderOptions {
        link_policy: LinkPolicy::Omit,
        ..RenderOptions::default()
    };

    let document = render_with(&demo(), &[], &options);

    assert!(!document.contains("## Project Links"));
    assert!(document.contains("## Description\nA test.\n\n## Author\nJane"));
}

#[test]
fn test_code_fence_language_is_configurable() {
    let options = RenderOptions {
        code_fence_language: "sh".to_string(),
        ..RenderOptions::default()
    };

    let document = render_with(&demo(), &[], &options);

    assert_eq!(document.matches("```sh\n").count(), 3);
    assert!(!document.contains("```bash"));
}

#[test]
fn test_options_follow_config() {
    let config = Config::from_yaml("link_policy: omit\ncode_fence_language: console").unwrap();
    let options = RenderOptions::from(&config);
    assert_eq!(options.link_policy, LinkPolicy::Omit);
    assert_eq!(options.code_fence_language, "console");
}
