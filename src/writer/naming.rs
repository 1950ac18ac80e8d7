//! Timestamped file names for the create-new conflict choice.

use crate::error::{ReadmeError, Result};
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::{Path, PathBuf, is_separator};

/// Format `now` with the chrono `format` string for use inside a file name.
///
/// Fails when the format needs data a naive time lacks (`%z`, `%Z`) or when
/// the result contains a path separator.
pub fn format_timestamp(now: NaiveDateTime, format: &str) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", now.format(format)).map_err(|_| {
        ReadmeError::ConfigError(format!(
            "timestamp_format '{}' cannot format a local date and time",
            format
        ))
    })?;

    if stamp.chars().any(is_separator) {
        return Err(ReadmeError::ConfigError(format!(
            "timestamp_format '{}' produces a path separator ('{}')",
            format, stamp
        )));
    }
    Ok(stamp)
}

/// Build `{stem}_{stamp}[_{counter}].{ext}` for `base`.
///
/// Example: `README.md` with stamp `20261019143000` becomes
/// `README_20261019143000.md`, or `README_20261019143000_1.md` for counter 1.
pub fn timestamped_file_name(base: &Path, stamp: &str, counter: u32) -> String {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "README".to_string());

    let mut name = format!("{}_{}", stem, stamp);
    if counter > 0 {
        name.push_str(&format!("_{}", counter));
    }
    if let Some(ext) = base.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    name
}

/// First timestamped sibling of `base` that does not exist yet.
///
pub fn new_document_path(base: &Path, now: NaiveDateTime, format: &str) -> Result<PathBuf> {
    let stamp = format_timestamp(now, format)?;

    let mut counter = 0;
    loop {
        let candidate = base.with_file_name(timestamped_file_name(base, &stamp, counter));
        if !candidate.exists() {
            return Ok(candidate);
        }
        counter += 1;
    }
}
