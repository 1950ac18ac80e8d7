//! Configuration types and defaults for readme-gen.

use serde::Deserialize;

/// How an empty answer to the dependency prompt is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DependencyPolicy {
    /// Blank input or `END` yields an empty list (default).
    #[default]
    AcceptEmpty,
    /// Keep asking until at least one dependency is given.
    Strict,
}

/// How the Project Links section renders a missing URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// Keep the bullet with an empty target, e.g. `- [Homepage]()` (default).
    #[default]
    Placeholder,
    /// Drop the bullet; drop the section when both links are missing.
    Omit,
}

/// Which optional fields must be answered before the run continues.
///
/// The project name is always required and is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RequiredFields {
    pub description: bool,
    pub homepage: bool,
    pub documentation: bool,
    pub author: bool,
    pub license: bool,
    pub install: bool,
    pub usage: bool,
    pub test: bool,
}

// Default value functions for serde
pub(crate) fn default_output_path() -> String {
    "README.md".to_string()
}
pub(crate) fn default_manifest_path() -> String {
    "requirements.txt".to_string()
}
pub(crate) fn default_timestamp_format() -> String {
    "%Y%m%d%H%M%S".to_string()
}
pub(crate) fn default_code_fence_language() -> String {
    "bash".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
