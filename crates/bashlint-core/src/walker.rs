//! Directory traversal producing the files to check.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File name patterns used when none are configured.
pub const DEFAULT_PATTERNS: &[&str] = &["*.sh"];

/// Errors that can occur while setting up traversal.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A file name pattern is not a valid glob.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying glob error.
        source: glob::PatternError,
    },
}

/// Builder for configuring a [`Walker`].
#[derive(Debug, Default)]
pub struct WalkerBuilder {
    roots: Vec<PathBuf>,
    patterns: Option<Vec<String>>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl WalkerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root path to traverse.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Adds multiple root paths.
    #[must_use]
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Replaces the file name patterns. An empty list matches every file.
    #[must_use]
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets a flag that stops traversal at the next directory entry once raised.
    #[must_use]
    pub fn interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Builds the walker.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob.
    pub fn build(self) -> Result<Walker, WalkError> {
        let roots = if self.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.roots
        };

        let patterns = self
            .patterns
            .unwrap_or_else(|| DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect());

        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                glob::Pattern::new(&pattern).map_err(|source| WalkError::Pattern { pattern, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Walker {
            roots,
            patterns,
            interrupt: self.interrupt.unwrap_or_default(),
        })
    }
}

/// Enumerates files matching the configured patterns under each root.
///
/// Traversal is depth-first. Within a directory, files come before
/// subdirectories and both are sorted by name, so the order is stable
/// across runs. Roots that are not directories are skipped.
#[derive(Debug)]
pub struct Walker {
    roots: Vec<PathBuf>,
    patterns: Vec<glob::Pattern>,
    interrupt: Arc<AtomicBool>,
}

impl Walker {
    /// Creates a new builder for configuring a walker.
    #[must_use]
    pub fn builder() -> WalkerBuilder {
        WalkerBuilder::new()
    }

    /// Returns the root paths.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Returns true once the interrupt flag has been raised.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(AtomicOrdering::SeqCst)
    }

    /// Checks whether a file name matches the patterns.
    ///
    /// Always true when no patterns are configured.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(file_name))
    }

    /// Lazily yields matching files, stopping early if interrupted.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots
            .iter()
            .filter(|root| {
                let is_dir = root.is_dir();
                if !is_dir {
                    debug!("Skipping non-directory path: {}", root.display());
                }
                is_dir
            })
            .flat_map(|root| self.walk_root(root))
            .take_while(|_| !self.is_interrupted())
    }

    fn walk_root<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(root)
            .sort_by(files_first_by_name)
            .into_iter()
            .take_while(|_| !self.is_interrupted())
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(is_file_or_link_to_file)
            .filter(|entry| self.matches(&entry.file_name().to_string_lossy()))
            .map(DirEntry::into_path)
    }
}

/// Symlinks are not followed during traversal, but a link to a file counts
/// as a file.
fn is_file_or_link_to_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
