//! Output writing for readme-gen.
//!
//! Writes the rendered document and, when there are dependencies, the
//! manifest beside it. If the document path is already taken the caller's
//! [`ConflictResolver`] decides between overwriting, writing a timestamped
//! sibling, or giving up. Giving up touches nothing on disk.

pub mod naming;


use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::output::OutputSink;
use crate::prompt::Prompter;
use chrono::NaiveDateTime;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub use naming::{format_timestamp, new_document_path};

/// Answer to "the output file already exists".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    CreateNew,
    Exit,
    /// Anything else; treated like `Exit`.
    Invalid(String),
}

impl ConflictChoice {
    /// Parse `o`/`c`/`e` (or the full words), ignoring case and padding.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "o" | "overwrite" => ConflictChoice::Overwrite,
            "c" | "create" => ConflictChoice::CreateNew,
            "e" | "exit" => ConflictChoice::Exit,
            other => ConflictChoice::Invalid(other.to_string()),
        }
    }
}

/// Decides what to do when the document path already exists.
pub trait ConflictResolver {
    fn resolve_conflict(&mut self, existing: &Path) -> Result<ConflictChoice>;
}

impl<R: BufRead, S: OutputSink> ConflictResolver for Prompter<R, S> {
    fn resolve_conflict(&mut self, existing: &Path) -> Result<ConflictChoice> {
        let name = existing
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| existing.display().to_string());

        let answer = self.choice(&format!(
            "A {} file already exists. Do you want to (o)verwrite, (c)reate a new one, or (e)xit?",
            name
        ))?;
        Ok(ConflictChoice::parse(&answer))
    }
}

/// A fixed answer, for non-interactive runs.
impl ConflictResolver for ConflictChoice {
    fn resolve_conflict(&mut self, _existing: &Path) -> Result<ConflictChoice> {
        Ok(self.clone())
    }
}

/// Where output goes for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Default document path.
    pub document_path: PathBuf,
    /// Manifest path, or `None` when the manifest is disabled.
    pub manifest_path: Option<PathBuf>,
    /// Skip the conflict question and always write a timestamped document.
    pub always_create_new: bool,
    /// chrono format for the timestamp suffix.
    pub timestamp_format: String,
}

impl OutputPlan {
    /// Build a plan from config.
    ///
    /// `output_path` is resolved against `base_dir`; a relative
    /// `manifest_path` is resolved against the document's directory.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        let document_path = base_dir.join(&config.output_path);
        let document_dir = document_path.parent().unwrap_or(base_dir);
        let manifest_path = config
            .write_manifest
            .then(|| document_dir.join(&config.manifest_path));

        Self {
            document_path,
            manifest_path,
            always_create_new: config.always_create_new,
            timestamp_format: config.timestamp_format.clone(),
        }
    }
}

/// Why nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The user chose to exit.
    UserExit,
    /// The user typed something other than o/c/e.
    InvalidChoice(String),
}

/// Result of [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written {
        document: PathBuf,
        manifest: Option<PathBuf>,
    },
    Aborted(AbortReason),
}

/// Write the document, then the manifest if there is anything to list.
///
/// `now` only feeds the timestamped file name.
pub fn write_outputs<C: ConflictResolver>(
    document: &str,
    dependencies: &[String],
    plan: &OutputPlan,
    now: NaiveDateTime,
    resolver: &mut C,
) -> Result<WriteOutcome> {
    let target = if plan.always_create_new {
        new_document_path(&plan.document_path, now, &plan.timestamp_format)?
    } else if plan.document_path.exists() {
        match resolver.resolve_conflict(&plan.document_path)? {
            ConflictChoice::Overwrite => plan.document_path.clone(),
            ConflictChoice::CreateNew => {
                new_document_path(&plan.document_path, now, &plan.timestamp_format)?
            }
            ConflictChoice::Exit => {
                tracing::info!("user chose not to write {}", plan.document_path.display());
                return Ok(WriteOutcome::Aborted(AbortReason::UserExit));
            }
            ConflictChoice::Invalid(answer) => {
                tracing::info!("invalid conflict choice {:?}", answer);
                return Ok(WriteOutcome::Aborted(AbortReason::InvalidChoice(answer)));
            }
        }
    } else {
        plan.document_path.clone()
    };

    atomic_write_file(&target, document)?;
    tracing::info!("wrote document to {}", target.display());

    let manifest = match &plan.manifest_path {
        Some(path) if !dependencies.is_empty() => {
            atomic_write_file(path, &manifest_contents(dependencies))?;
            tracing::info!("wrote manifest to {}", path.display());
            Some(path.clone())
        }
        _ => None,
    };

    Ok(WriteOutcome::Written {
        document: target,
        manifest,
    })
}

/// One dependency per line, each newline-terminated, no header.
pub fn manifest_contents(dependencies: &[String]) -> String {
    dependencies.iter().map(|dep| format!("{}\n", dep)).collect()
}
