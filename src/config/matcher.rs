//! File pattern matcher for source and translation files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::I18nSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid source include pattern '{pattern}': {source}")]
    InvalidSourceIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidTranslationPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Which class of workspace file a walk collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Source,
    Translation,
}

/// Matches files against configured glob patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    workspace_root: PathBuf,
    source_include_set: GlobSet,
    exclude_set: GlobSet,
    translation_set: GlobSet,
    translation_exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(workspace_root: PathBuf, settings: &I18nSettings) -> Result<Self, MatcherError> {
        let source_include_set =
            Self::build_glob_set(&settings.include_patterns, |pattern, source| {
                MatcherError::InvalidSourceIncludePattern { pattern, source }
            })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        let translation_set = Self::build_glob_set(
            &settings.translation_files.include_patterns,
            |pattern, source| MatcherError::InvalidTranslationPattern { pattern, source },
        )?;

        let translation_exclude_set = Self::build_glob_set(
            &settings.translation_files.exclude_patterns,
            |pattern, source| MatcherError::InvalidExcludePattern { pattern, source },
        )?;

        Ok(Self {
            workspace_root,
            source_include_set,
            exclude_set,
            translation_set,
            translation_exclude_set,
        })
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Returns true if the path matches `includePatterns` but not `excludePatterns`.
    ///
    /// The path must be relative to the workspace root.
    #[must_use]
    pub fn is_source_file(&self, relative_path: &Path) -> bool {
        self.source_include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }

    /// Returns true if the path matches `translationFiles.includePatterns`
    /// but not `excludePatterns` or `translationFiles.excludePatterns`.
    ///
    /// The path must be relative to the workspace root.
    #[must_use]
    pub fn is_translation_file(&self, relative_path: &Path) -> bool {
        self.translation_set.is_match(relative_path)
            && !self.exclude_set.is_match(relative_path)
            && !self.translation_exclude_set.is_match(relative_path)
    }

    /// Lists source files under the workspace root, sorted by path.
    #[must_use]
    pub fn source_files(&self) -> Vec<PathBuf> {
        self.walk(FileKind::Source)
    }

    /// Lists translation catalogs under the workspace root, sorted by path.
    #[must_use]
    pub fn translation_files(&self) -> Vec<PathBuf> {
        self.walk(FileKind::Translation)
    }

    /// Walks the workspace honouring `.gitignore` and keeps files of `kind`.
    fn walk(&self, kind: FileKind) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(&self.workspace_root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .sort_by_file_path(|a: &Path, b: &Path| a.cmp(b))
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(&self.workspace_root) else {
                continue;
            };

            let matched = match kind {
                FileKind::Source => self.is_source_file(relative_path),
                FileKind::Translation => self.is_translation_file(relative_path),
            };
            if matched {
                found_files.push(path.to_path_buf());
            }
        }

        found_files
    }
}
