//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for a readme-gen run.
///
/// This struct represents the contents of `.readme-gen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Output settings
    // =========================================================================
    /// Default document path (default: "README.md").
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Dependency manifest path (default: "requirements.txt").
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Whether to write the manifest when dependencies were given.
    #[serde(default = "default_true")]
    pub write_manifest: bool,

    /// Always write a timestamped document instead of asking on conflict.
    #[serde(default)]
    pub always_create_new: bool,

    /// chrono format string for the timestamp suffix of a new document.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    // =========================================================================
    // Prompt settings
    // =========================================================================
    /// Treatment of an empty dependency answer.
    #[serde(default)]
    pub dependency_policy: DependencyPolicy,

    /// Fields that must be answered.
    #[serde(default)]
    pub required: RequiredFields,

    // =========================================================================
    // Render settings
    // =========================================================================
    /// Treatment of missing homepage/documentation URLs.
    #[serde(default)]
    pub link_policy: LinkPolicy,

    /// Info string for the Installation, Usage, and Testing code fences.
    #[serde(default = "default_code_fence_language")]
    pub code_fence_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            manifest_path: default_manifest_path(),
            write_manifest: default_true(),
            always_create_new: false,
            timestamp_format: default_timestamp_format(),
            dependency_policy: DependencyPolicy::default(),
            required: RequiredFields::default(),
            link_policy: LinkPolicy::default(),
            code_fence_language: default_code_fence_language(),
        }
    }
}
