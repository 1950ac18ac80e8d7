//! Markdown rendering for readme-gen.
//!
//! [`render`] is a pure function of the metadata, the dependency list, and
//! static [`RenderOptions`]. No clock, no filesystem, no escaping: answers are
//! embedded exactly as typed, so Markdown-special characters pass through.
//!
//! # Layout
//!
//! Sections in fixed order, separated by one blank line:
//! Title, Description, Project Links, Author, License, Installation, Usage,
//! Testing, and Dependencies. Dependencies only appears when the list is
//! non-empty. The document ends with a single newline.

#[cfg(test)]
mod tests;

use crate::config::{Config, LinkPolicy};
use crate::project::ProjectMetadata;

/// Static choices that shape the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// What to do with a missing homepage or documentation URL.
    pub link_policy: LinkPolicy,
    /// Info string on the Installation, Usage, and Testing fences.
    pub code_fence_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            link_policy: config.link_policy,
            code_fence_language: config.code_fence_language.clone(),
        }
    }
}

/// Render with default options.
pub fn render(metadata: &ProjectMetadata, dependencies: &[String]) -> String {
    render_with(metadata, dependencies, &RenderOptions::default())
}

/// Render the full document.
pub fn render_with(
    metadata: &ProjectMetadata,
    dependencies: &[String],
    options: &RenderOptions,
) -> String {
    let mut sections = vec![
        format!("# {}", metadata.project_name),
        format!("## Description\n{}", metadata.project_description),
    ];

    if let Some(links) = links_section(metadata, options.link_policy) {
        sections.push(links);
    }

    sections.push(format!("## Author\n{}", metadata.author));
    sections.push(format!("## License\n{}", metadata.license_name));
    sections.push(fenced_section(
        "Installation",
        &options.code_fence_language,
        &metadata.install_command,
    ));
    sections.push(fenced_section(
        "Usage",
        &options.code_fence_language,
        &metadata.usage_instructions,
    ));
    sections.push(fenced_section(
        "Testing",
        &options.code_fence_language,
        &metadata.test_command,
    ));

    if !dependencies.is_empty() {
        sections.push(dependencies_section(dependencies));
    }

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

/// Project Links, or `None` when the omit policy leaves no bullets.
fn links_section(metadata: &ProjectMetadata, policy: LinkPolicy) -> Option<String> {
    let links = [
        ("Homepage", metadata.project_homepage.as_deref()),
        ("Documentation", metadata.project_doc_url.as_deref()),
    ];

    let bullets: Vec<String> = links
        .iter()
        .filter_map(|(label, url)| match (url, policy) {
            (Some(url), _) => Some(format!("- [{}]({})", label, url)),
            (None, LinkPolicy::Placeholder) => Some(format!("- [{}]()", label)),
            (None, LinkPolicy::Omit) => None,
        })
        .collect();

    if bullets.is_empty() {
        return None;
    }

    Some(format!("## Project Links\n{}", bullets.join("\n")))
}

fn fenced_section(heading: &str, language: &str, body: &str) -> String {
    format!("## {}\n```{}\n{}\n```", heading, language, body)
}

fn dependencies_section(dependencies: &[String]) -> String {
    let bullets: Vec<String> = dependencies.iter().map(|dep| format!("- {}", dep)).collect();
    format!("## Dependencies\n{}", bullets.join("\n"))
}
