//! Document pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Resolve document paths and glob patterns to existing files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_pattern(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}
