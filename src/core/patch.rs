//! Endpoint patch engine — find and replace legacy SPARQL endpoint URLs
//! across a deployment tree.
//!
//! The sweep:
//! 1. Walks the tree, pruning hidden and dependency-cache directories
//! 2. Filters files by the compiled-in extension allow-list
//! 3. Replaces every occurrence of each legacy endpoint form
//! 4. Rewrites changed files in place and records a per-file outcome

use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::core::defaults;
use crate::core::error::{Error, Result};

// ============================================================================
// Patterns
// ============================================================================

/// One recognized legacy form of the query-service URL.
pub struct EndpointPattern {
    pub matcher: Regex,
    pub description: &'static str,
}

static ENDPOINT_PATTERNS: LazyLock<Vec<EndpointPattern>> = LazyLock::new(|| {
    vec![
        EndpointPattern {
            matcher: Regex::new(r"http://localhost:3030/chad-kg/sparql").unwrap(),
            description: "loopback host",
        },
        EndpointPattern {
            matcher: Regex::new(r"http://host\.docker\.internal:3030/chad-kg/sparql").unwrap(),
            description: "container-internal host",
        },
        EndpointPattern {
            matcher: Regex::new(r"http://127\.0\.0\.1:3030/chad-kg/sparql").unwrap(),
            description: "literal loopback IP",
        },
    ]
});

/// The ordered set of legacy endpoint forms the sweep recognizes.
///
/// The patterns are disjoint, so relative order is not observable in the
/// patched output. New legacy forms only need an entry here.
pub fn endpoint_patterns() -> &'static [EndpointPattern] {
    &ENDPOINT_PATTERNS
}

// ============================================================================
// Outcomes
// ============================================================================

/// Outcome of one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    /// At least one pattern matched and the file was rewritten.
    Patched { replacements: usize },
    /// No pattern produced a change; the file was left untouched.
    NoMatch,
    /// The file could not be read or written; the sweep continued without it.
    Skipped(Error),
}

/// Per-file record produced by the sweep.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

// ============================================================================
// File patch
// ============================================================================

/// Replace every occurrence of each legacy form in `content`.
/// Returns the new content and the total replacement count.
fn apply_patterns(content: &str, replacement: &str) -> (String, usize) {
    let mut patched = content.to_string();
    let mut total = 0;

    for pattern in endpoint_patterns() {
        let count = pattern.matcher.find_iter(&patched).count();
        if count == 0 {
            continue;
        }
        // NoExpand: the replacement is substituted verbatim, `$` included
        patched = pattern
            .matcher
            .replace_all(&patched, NoExpand(replacement))
            .into_owned();
        total += count;
    }

    (patched, total)
}

fn try_patch(path: &Path, replacement: &str) -> Result<Option<usize>> {
    let content = fs::read_to_string(path).map_err(Error::Read)?;

    let (patched, replacements) = apply_patterns(&content, replacement);
    if patched == content {
        return Ok(None);
    }

    // Full overwrite of the original path, no temp-file swap
    fs::write(path, &patched).map_err(Error::Write)?;

    Ok(Some(replacements))
}

/// Patch a single file, classifying the result instead of failing the sweep.
pub fn patch_file(path: &Path, replacement: &str) -> FileOutcome {
    match try_patch(path, replacement) {
        Ok(Some(replacements)) => FileOutcome::Patched { replacements },
        Ok(None) => FileOutcome::NoMatch,
        Err(err) => FileOutcome::Skipped(err),
    }
}

// ============================================================================
// Tree walk
// ============================================================================

fn has_patch_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
        defaults::PATCH_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// Sweep the tree under `root`, patching every candidate file.
///
/// A missing or unreadable root yields an empty report list. Per-file
/// failures are recorded as `Skipped` and never abort the sweep.
pub fn patch_tree(root: &Path, replacement: &str) -> Vec<FileReport> {
    let mut reports = Vec::new();
    walk_recursive(root, replacement, &mut reports);
    reports
}

fn walk_recursive(dir: &Path, replacement: &str, reports: &mut Vec<FileReport>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if name.starts_with('.') || defaults::SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            walk_recursive(&path, replacement, reports);
        } else if path.is_file() && has_patch_extension(&path) {
            let outcome = patch_file(&path, replacement);
            if let FileOutcome::Skipped(Error::Write(err)) = &outcome {
                crate::log_status!(
                    "patch",
                    "matched but could not rewrite {}: {}",
                    path.display(),
                    err
                );
            }
            reports.push(FileReport { path, outcome });
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
