//! Top-level run modes.
//!
//! [`run`] picks between the self-test runner and a normal interactive
//! session. [`run_session`] is the normal flow with every outside dependency
//! (input, output, working directory, clock) passed in.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{ReadmeError, Result};
use crate::output::{ConsoleSink, OutputSink};
use crate::project::{Collected, collect_project};
use crate::prompt::Prompter;
use crate::render::{RenderOptions, render_with};
use crate::selftest;
use crate::writer::{AbortReason, OutputPlan, WriteOutcome, write_outputs};
use chrono::{Local, NaiveDateTime};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const EXIT_MESSAGE: &str = "Exiting without generating README.";

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Generated {
        document: PathBuf,
        manifest: Option<PathBuf>,
    },
    /// Nothing was written.
    Aborted,
}

/// Entry point used by `main`.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.run_tests {
        return selftest::run_all(&mut ConsoleSink);
    }

    let cwd = std::env::current_dir().map_err(|e| {
        ReadmeError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    let mut config = Config::resolve(cli.config.as_deref(), &cwd)?;
    cli.apply_to(&mut config);
    config.validate()?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), ConsoleSink);
    run_session(&mut prompter, &config, &cwd, Local::now().naive_local())?;
    Ok(())
}

/// Collect, render, and write; then report the result through the sink.
pub fn run_session<R: BufRead, S: OutputSink>(
    prompter: &mut Prompter<R, S>,
    config: &Config,
    base_dir: &Path,
    now: NaiveDateTime,
) -> Result<SessionOutcome> {
    let (metadata, dependencies) = match collect_project(prompter, config)? {
        Collected::Project {
            metadata,
            dependencies,
        } => (metadata, dependencies),
        Collected::Aborted => {
            prompter.sink().print_error(EXIT_MESSAGE);
            return Ok(SessionOutcome::Aborted);
        }
    };

    let document = render_with(&metadata, &dependencies, &RenderOptions::from(config));
    let plan = OutputPlan::from_config(config, base_dir);

    match write_outputs(&document, &dependencies, &plan, now, prompter)? {
        WriteOutcome::Written { document, manifest } => {
            let sink = prompter.sink();
            sink.print_success(&format!(
                "{} generated successfully!",
                display_path(&document, base_dir)
            ));
            if let Some(manifest) = &manifest {
                sink.print_success(&format!(
                    "{} generated successfully!",
                    display_path(manifest, base_dir)
                ));
            }
            for dependency in &dependencies {
                sink.print_success(&format!("- {}", dependency));
            }
            Ok(SessionOutcome::Generated { document, manifest })
        }
        WriteOutcome::Aborted(AbortReason::UserExit) => {
            prompter.sink().print_error(EXIT_MESSAGE);
            Ok(SessionOutcome::Aborted)
        }
        WriteOutcome::Aborted(AbortReason::InvalidChoice(_)) => {
            prompter
                .sink()
                .print_error(&format!("Invalid choice. {}", EXIT_MESSAGE));
            Ok(SessionOutcome::Aborted)
        }
    }
}

/// `path` relative to `base_dir` when it lives underneath it.
fn display_path(path: &Path, base_dir: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BufferSink, LineKind};
    use chrono::NaiveDate;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const DEMO_SESSION: &str = "\
Demo
A test.
END


Jane
MIT
pip install demo
END
demo run
END
pytest
requests, click
";

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn session(input: &str, dir: &Path) -> (SessionOutcome, BufferSink) {
        let mut prompter =
            Prompter::new(Cursor::new(input.as_bytes().to_vec()), BufferSink::new());
        let outcome = run_session(&mut prompter, &Config::default(), dir, fixed_time()).unwrap();
        (outcome, prompter.into_sink())
    }

    #[test]
    fn test_demo_session_writes_document_and_manifest() {
        let temp_dir = TempDir::new().unwrap();

        let (outcome, sink) = session(DEMO_SESSION, temp_dir.path());

        assert_eq!(
            outcome,
            SessionOutcome::Generated {
                document: temp_dir.path().join("README.md"),
                manifest: Some(temp_dir.path().join("requirements.txt")),
            }
        );

        let readme = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# Demo\n"));
        assert!(readme.contains("## Dependencies\n- requests\n- click\n"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("requirements.txt")).unwrap(),
            "requests\nclick\n"
        );

        assert_eq!(
            sink.of_kind(LineKind::Success),
            vec![
                "README.md generated successfully!",
                "requirements.txt generated successfully!",
                "- requests",
                "- click",
            ]
        );
    }

    #[test]
    fn test_empty_name_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let (outcome, sink) = session("\n", temp_dir.path());

        assert_eq!(outcome, SessionOutcome::Aborted);
        assert!(sink.contains(LineKind::Error, EXIT_MESSAGE));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_conflict_exit_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "old").unwrap();

        let (outcome, sink) = session(&format!("{}e\n", DEMO_SESSION), temp_dir.path());

        assert_eq!(outcome, SessionOutcome::Aborted);
        assert!(sink.contains(LineKind::Error, EXIT_MESSAGE));
        assert!(!temp_dir.path().join("requirements.txt").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_conflict_invalid_choice_reports_and_aborts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "old").unwrap();

        let (outcome, sink) = session(&format!("{}q\n", DEMO_SESSION), temp_dir.path());

        assert_eq!(outcome, SessionOutcome::Aborted);
        assert!(sink.contains(LineKind::Error, "Invalid choice."));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_conflict_create_new_reports_new_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "old").unwrap();

        let (outcome, sink) = session(&format!("{}c\n", DEMO_SESSION), temp_dir.path());

        assert!(matches!(outcome, SessionOutcome::Generated { .. }));
        assert!(sink.contains(
            LineKind::Success,
            "README_20261019143000.md generated successfully!"
        ));
    }

    #[test]
    fn test_display_path_outside_base_is_unchanged() {
        assert_eq!(
            display_path(Path::new("/elsewhere/README.md"), Path::new("/work")),
            "/elsewhere/README.md"
        );
        assert_eq!(
            display_path(Path::new("/work/docs/README.md"), Path::new("/work")),
            "docs/README.md"
        );
    }
}
