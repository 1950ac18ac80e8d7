//! readme-gen: interactively collect project metadata and render a README.md.
//!
//! The pipeline is collector → renderer → writer:
//! [`project::collect_project`] asks the questions, [`render::render`] turns
//! the answers into Markdown, and [`writer::write_outputs`] puts the document
//! (and the dependency manifest) on disk, resolving conflicts with an
//! existing file.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod output;
pub mod project;
pub mod prompt;
pub mod render;
pub mod selftest;
pub mod writer;

#[cfg(test)]
mod test_support;
