// File selection: the pipeline decides which candidates an adapter sees
// through a pluggable predicate, then every survivor must exist on disk.

use std::path::{Path, PathBuf};

use crate::errors::{Result, ReviewError};

/// Predicate deciding which candidate files an adapter inspects.
pub trait FileFilter {
    fn matches(&self, file: &str) -> bool;
}

/// Keeps files whose extension is in an allow list, case-insensitively.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn matches(&self, file: &str) -> bool {
        Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Applies the filter and resolves survivors to concrete paths, preserving
/// candidate order. A surviving file that is absent on disk fails the whole
/// selection; files are never silently skipped. An empty selection is a
/// clean "no work" outcome, not an error.
pub fn select_files(candidates: &[String], filter: &dyn FileFilter) -> Result<Vec<PathBuf>> {
    let mut selected = Vec::new();
    for candidate in candidates {
        if !filter.matches(candidate) {
            continue;
        }
        let path = PathBuf::from(candidate);
        if !path.exists() {
            return Err(ReviewError::MissingFile(path));
        }
        selected.push(path);
    }
    Ok(selected)
}
