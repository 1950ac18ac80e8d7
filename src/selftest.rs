//! Built-in self-test scenarios (`--run-tests`).
//!
//! Each scenario checks one documented behavior of the shipped binary:
//! rendering laws, URL validation, conflict handling, and a full scripted
//! session. Scenarios that touch the filesystem work inside their own
//! temporary directory and never in the working directory.

use crate::app::{SessionOutcome, run_session};
use crate::config::Config;
use crate::error::{ReadmeError, Result};
use crate::output::{BufferSink, OutputSink};
use crate::project::ProjectMetadata;
use crate::prompt::{Prompter, is_valid_url};
use crate::render::render;
use crate::writer::{ConflictChoice, OutputPlan, WriteOutcome, write_outputs};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

type ScenarioResult = std::result::Result<(), String>;

/// A named check.
pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> ScenarioResult,
}

/// Tally of one self-test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    pub passed: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl SelfTestReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }
}

/// All scenarios, in reporting order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "render starts with the project title",
            run: render_starts_with_title,
        },
        Scenario {
            name: "render is idempotent",
            run: render_is_idempotent,
        },
        Scenario {
            name: "empty dependency list omits the section",
            run: empty_dependencies_omit_section,
        },
        Scenario {
            name: "dependencies render once in input order",
            run: dependencies_render_in_order,
        },
        Scenario {
            name: "special characters pass through unescaped",
            run: special_characters_pass_through,
        },
        Scenario {
            name: "url validation",
            run: url_validation,
        },
        Scenario {
            name: "create-new keeps the existing file",
            run: create_new_keeps_original,
        },
        Scenario {
            name: "exit leaves the filesystem unchanged",
            run: exit_leaves_filesystem_unchanged,
        },
        Scenario {
            name: "end-to-end demo project",
            run: end_to_end_demo,
        },
        Scenario {
            name: "sample project renders its links",
            run: sample_project_links,
        },
        Scenario {
            name: "scripted interactive session",
            run: scripted_session,
        },
    ]
}

/// Run `scenarios` and report each through `sink`.
pub fn run_scenarios<S: OutputSink>(scenarios: &[Scenario], sink: &mut S) -> SelfTestReport {
    let mut report = SelfTestReport::default();

    for scenario in scenarios {
        match (scenario.run)() {
            Ok(()) => {
                sink.print_success(&format!("PASS {}", scenario.name));
                report.passed.push(scenario.name);
            }
            Err(reason) => {
                sink.print_error(&format!("FAIL {}: {}", scenario.name, reason));
                report.failed.push((scenario.name, reason));
            }
        }
    }

    report
}

/// Run every scenario; any failure becomes [`ReadmeError::SelfTestFailure`].
pub fn run_all<S: OutputSink>(sink: &mut S) -> Result<()> {
    let report = run_scenarios(&scenarios(), sink);

    if report.failed.is_empty() {
        sink.print_success(&format!(
            "All {} self-test scenarios passed successfully!",
            report.total()
        ));
        Ok(())
    } else {
        Err(ReadmeError::SelfTestFailure {
            failed: report.failed.len(),
            total: report.total(),
        })
    }
}

fn ensure(condition: bool, message: impl Into<String>) -> ScenarioResult {
    if condition { Ok(()) } else { Err(message.into()) }
}

fn scratch_dir() -> std::result::Result<TempDir, String> {
    TempDir::new().map_err(|e| format!("failed to create scratch directory: {}", e))
}

fn read(path: &Path) -> std::result::Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

fn count_entries(dir: &Path) -> std::result::Result<usize, String> {
    fs::read_dir(dir)
        .map(|entries| entries.count())
        .map_err(|e| format!("failed to list '{}': {}", dir.display(), e))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn deps(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn demo_metadata() -> ProjectMetadata {
    ProjectMetadata {
        project_name: "Demo".to_string(),
        project_description: "A test.".to_string(),
        author: "Jane".to_string(),
        license_name: "MIT".to_string(),
        install_command: "pip install demo".to_string(),
        usage_instructions: "demo run".to_string(),
        test_command: "pytest".to_string(),
        ..ProjectMetadata::default()
    }
}

fn render_starts_with_title() -> ScenarioResult {
    for name in ["Demo", "README.md Generator", "Special Characters Project"] {
        let document = render(&ProjectMetadata::named(name), &[]);
        ensure(
            document.starts_with(&format!("# {}", name)),
            format!("document for '{}' does not start with its title", name),
        )?;
    }
    Ok(())
}

fn render_is_idempotent() -> ScenarioResult {
    let metadata = demo_metadata();
    let dependencies = deps(&["requests", "click"]);
    ensure(
        render(&metadata, &dependencies) == render(&metadata, &dependencies),
        "two renders of the same input differ",
    )
}

fn empty_dependencies_omit_section() -> ScenarioResult {
    let metadata = ProjectMetadata {
        project_name: "Empty Dependencies Project".to_string(),
        project_description: "Project with empty dependencies.".to_string(),
        project_homepage: Some("https://github.com/testuser/emptydepsproject".to_string()),
        project_doc_url: Some("https://emptydepsproject.readthedocs.io/".to_string()),
        author: "John Doe".to_string(),
        license_name: "Apache 2.0".to_string(),
        install_command: "pip install emptydepsproject".to_string(),
        usage_instructions: "python emptydepsproject.py".to_string(),
        test_command: "pytest".to_string(),
    };
    let document = render(&metadata, &[]);
    ensure(
        document.contains("Empty Dependencies Project"),
        "project name missing",
    )?;
    ensure(
        !document.contains("## Dependencies"),
        "found a Dependencies heading for an empty list",
    )
}

fn dependencies_render_in_order() -> ScenarioResult {
    let document = render(&demo_metadata(), &deps(&["dep1", "dep2"]));
    ensure(
        document.matches("## Dependencies").count() == 1,
        "Dependencies heading should appear exactly once",
    )?;
    ensure(
        document.ends_with("## Dependencies\n- dep1\n- dep2\n"),
        "dependency bullets missing or out of order",
    )
}

fn special_characters_pass_through() -> ScenarioResult {
    let mut metadata = demo_metadata();
    metadata.project_description = "Project with special characters: & < > \" '".to_string();
    let document = render(&metadata, &[]);
    for special in ["&", "<", ">", "\"", "'"] {
        ensure(
            document.contains(special),
            format!("'{}' was not embedded verbatim", special),
        )?;
    }
    ensure(!document.contains("&amp;"), "found HTML escaping")
}

fn url_validation() -> ScenarioResult {
    ensure(!is_valid_url("not a url"), "accepted 'not a url'")?;
    ensure(
        is_valid_url("https://example.com/path"),
        "rejected 'https://example.com/path'",
    )
}

fn create_new_keeps_original() -> ScenarioResult {
    let dir = scratch_dir()?;
    let original = dir.path().join("README.md");
    fs::write(&original, "original").map_err(|e| e.to_string())?;

    let plan = OutputPlan::from_config(&Config::default(), dir.path());
    let outcome = write_outputs(
        "replacement",
        &[],
        &plan,
        now(),
        &mut ConflictChoice::CreateNew,
    )
    .map_err(|e| e.to_string())?;

    let WriteOutcome::Written { document, .. } = outcome else {
        return Err("create-new did not write anything".to_string());
    };
    ensure(document != original, "create-new reused the existing path")?;
    ensure(read(&original)? == "original", "existing file was modified")?;
    ensure(read(&document)? == "replacement", "new file has wrong content")
}

fn exit_leaves_filesystem_unchanged() -> ScenarioResult {
    let dir = scratch_dir()?;
    let original = dir.path().join("README.md");
    fs::write(&original, "original").map_err(|e| e.to_string())?;

    let plan = OutputPlan::from_config(&Config::default(), dir.path());
    let outcome = write_outputs(
        "replacement",
        &deps(&["requests"]),
        &plan,
        now(),
        &mut ConflictChoice::Exit,
    )
    .map_err(|e| e.to_string())?;

    ensure(
        matches!(outcome, WriteOutcome::Aborted(_)),
        "exit still wrote output",
    )?;
    ensure(count_entries(dir.path())? == 1, "new files appeared")?;
    ensure(read(&original)? == "original", "existing file was modified")
}

fn end_to_end_demo() -> ScenarioResult {
    let dir = scratch_dir()?;
    let dependencies = deps(&["requests", "click"]);
    let document = render(&demo_metadata(), &dependencies);

    for expected in ["# Demo", "## Dependencies", "- requests", "- click"] {
        ensure(
            document.contains(expected),
            format!("document is missing '{}'", expected),
        )?;
    }

    let plan = OutputPlan::from_config(&Config::default(), dir.path());
    write_outputs(
        &document,
        &dependencies,
        &plan,
        now(),
        &mut ConflictChoice::Exit,
    )
    .map_err(|e| e.to_string())?;

    ensure(
        read(&dir.path().join("README.md"))? == document,
        "README.md does not match the rendered document",
    )?;
    ensure(
        read(&dir.path().join("requirements.txt"))? == "requests\nclick\n",
        "manifest content is wrong",
    )
}

fn sample_project_links() -> ScenarioResult {
    let homepage = "https://github.com/smritibangera/README.md-Generator";
    let metadata = ProjectMetadata {
        project_name: "README.md Generator".to_string(),
        project_description: "A command-line tool for generating README.md files for software projects.".to_string(),
        project_homepage: Some(homepage.to_string()),
        project_doc_url: Some(homepage.to_string()),
        author: "Smriti Bangera".to_string(),
        license_name: "MIT".to_string(),
        install_command: "cargo install readme-gen".to_string(),
        usage_instructions: "readme-gen".to_string(),
        test_command: "readme-gen --run-tests".to_string(),
    };
    let document = render(&metadata, &deps(&["clap", "url", "colored"]));

    ensure(document.contains("README.md Generator"), "project name missing")?;
    ensure(
        document.contains("generating README.md files for software projects."),
        "description missing",
    )?;
    ensure(
        document.contains(&format!("- [Homepage]({})", homepage)),
        "homepage link missing",
    )
}

fn scripted_session() -> ScenarioResult {
    let dir = scratch_dir()?;
    let input = "Demo\nA test.\nEND\nnot a url\nhttps://example.com\n\nJane\nMIT\npip install demo\nEND\ndemo run\nEND\npytest\nrequests, click\n";
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), BufferSink::new());

    let outcome = run_session(&mut prompter, &Config::default(), dir.path(), now())
        .map_err(|e| e.to_string())?;

    ensure(
        matches!(outcome, SessionOutcome::Generated { .. }),
        "session did not generate a document",
    )?;
    let readme = read(&dir.path().join("README.md"))?;
    ensure(
        readme.contains("- [Homepage](https://example.com)"),
        "homepage from the session is missing",
    )?;
    ensure(
        readme.contains("- [Documentation]()"),
        "blank documentation link should render an empty target",
    )
}
