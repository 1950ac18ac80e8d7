//! The prompt sequence that builds a [`ProjectMetadata`].
//!
//! Order is fixed: name, description, homepage, documentation URL, author,
//! license, install command, usage, test command, dependencies. An empty
//! name ends the session before anything else is asked.

use super::{DependencyList, ProjectMetadata};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputSink;
use crate::prompt::Prompter;
use std::io::BufRead;

/// Outcome of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// All questions answered.
    Project {
        metadata: ProjectMetadata,
        dependencies: DependencyList,
    },
    /// The user left the project name empty.
    Aborted,
}

/// Run the full prompt sequence.
pub fn collect_project<R: BufRead, S: OutputSink>(
    prompter: &mut Prompter<R, S>,
    config: &Config,
) -> Result<Collected> {
    let required = &config.required;

    prompter.sink().print("ENTER PROJECT INFORMATION:");

    let project_name = prompter.optional_text("Enter the project name:")?;
    if project_name.is_empty() {
        tracing::info!("empty project name, aborting collection");
        return Ok(Collected::Aborted);
    }

    let project_description =
        prompter.multiline_text("Describe your project:", !required.description)?;
    let project_homepage =
        prompter.validated_url("Enter the project homepage URL:", !required.homepage)?;
    let project_doc_url =
        prompter.validated_url("Enter the project documentation URL:", !required.documentation)?;
    let author = single_line(prompter, "Enter the author's name:", required.author)?;
    let license_name = single_line(prompter, "Enter the license name:", required.license)?;
    let install_command =
        prompter.multiline_text("Enter the installation command:", !required.install)?;
    let usage_instructions = prompter.multiline_text("Enter usage instructions:", !required.usage)?;
    let test_command = single_line(prompter, "Enter the test command:", required.test)?;

    let dependencies = prompter.dependency_list(
        "Enter project dependencies (comma-separated, or 'END' to finish):",
        config.dependency_policy,
    )?;

    tracing::debug!(
        project = %project_name,
        dependencies = dependencies.len(),
        "collected project metadata"
    );

    Ok(Collected::Project {
        metadata: ProjectMetadata {
            project_name,
            project_description,
            project_homepage,
            project_doc_url,
            author,
            license_name,
            install_command,
            usage_instructions,
            test_command,
        },
        dependencies,
    })
}

fn single_line<R: BufRead, S: OutputSink>(
    prompter: &mut Prompter<R, S>,
    prompt: &str,
    required: bool,
) -> Result<String> {
    if required {
        prompter.required_text(prompt)
    } else {
        prompter.optional_text(prompt)
    }
}
