//! CLI argument parsing for readme-gen.
//!
//! Uses clap derive macros for declarative argument definitions. Flags given
//! here override the matching values from the config file.

use crate::config::{Config, DependencyPolicy};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// readme-gen: interactively collect project metadata and write a README.md.
///
/// Prompts for the project name, description, links, author, license,
/// install/usage/test commands, and dependencies, then renders them into
/// a Markdown document. Dependencies are also written to a manifest file.
#[derive(Parser, Debug)]
#[command(name = "readme-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run the built-in self-test scenarios instead of prompting.
    #[arg(long)]
    pub run_tests: bool,

    /// Always write a new timestamped README instead of asking on conflict.
    #[arg(long)]
    pub create_new_readme: bool,

    /// Path of the generated document (default: README.md).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path of the dependency manifest, relative to the output's directory (default: requirements.txt).
    #[arg(long, value_name = "PATH", conflicts_with = "no_manifest")]
    pub manifest: Option<PathBuf>,

    /// Never write the dependency manifest.
    #[arg(long)]
    pub no_manifest: bool,

    /// Keep asking for dependencies until at least one is given.
    #[arg(long)]
    pub strict_dependencies: bool,

    /// YAML config file (default: .readme-gen.yaml if present).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Apply flag overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if self.create_new_readme {
            config.always_create_new = true;
        }
        if let Some(output) = &self.output {
            config.output_path = output.to_string_lossy().into_owned();
        }
        if let Some(manifest) = &self.manifest {
            config.manifest_path = manifest.to_string_lossy().into_owned();
        }
        if self.no_manifest {
            config.write_manifest = false;
        }
        if self.strict_dependencies {
            config.dependency_policy = DependencyPolicy::Strict;
        }
    }
}
