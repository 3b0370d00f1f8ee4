// src/discovery.rs
//! Enumerates submission files under a directory.
//!
//! Only drawing and document formats are collected; everything else in the
//! directory (readme files, sidecar exports, editor state) is noise to the
//! adapters. Hidden directories are pruned. The result is sorted so two
//! runs over the same tree see the same file list.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Drawing and document formats accepted as part of a submission.
pub const SUBMISSION_EXT_PATTERN: &str = r"(?i)\.(pdf|dwg|dxf|png|jpe?g|tiff?)$";

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collects submission files under `root`, recursively.
///
/// # Errors
///
/// Returns an error if the directory walk fails.
pub fn collect_submission_files(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Regex::new(SUBMISSION_EXT_PATTERN)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if pattern.is_match(&entry.path().to_string_lossy()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
