//! Project metadata collected for one README.
//!
//! A [`ProjectMetadata`] plus its [`DependencyList`] is everything the
//! renderer needs. Both are built fresh each run by [`collect_project`] and
//! dropped once the document has been written.

mod collect;

#[cfg(test)]
mod tests;

pub use collect::{Collected, collect_project};

/// Ordered dependency names; order is render order.
pub type DependencyList = Vec<String>;

/// Answers for every section of the generated document.
///
/// Only `project_name` must be non-empty. Every other field may be empty
/// (or `None` for the links) and still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub project_name: String,
    pub project_description: String,
    pub project_homepage: Option<String>,
    pub project_doc_url: Option<String>,
    pub author: String,
    pub license_name: String,
    pub install_command: String,
    pub usage_instructions: String,
    pub test_command: String,
}

impl ProjectMetadata {
    /// Metadata with just a name; everything else empty.
    pub fn named(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }
}
