//! Source file input definitions.

use std::collections::BTreeMap;
use std::path::Path;

/// Supported programming languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammingLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl ProgrammingLanguage {
    /// Infers the programming language from file extension.
    #[must_use]
    pub fn from_path(file_path: &Path) -> Option<Self> {
        match file_path.extension().and_then(|ext| ext.to_str()) {
            Some("tsx") => Some(Self::Tsx),
            Some("ts" | "mts" | "cts") => Some(Self::TypeScript),
            Some("jsx") => Some(Self::Jsx),
            Some("js" | "mjs" | "cjs") => Some(Self::JavaScript),
            _ => None,
        }
    }

    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Translation keys referenced by the sources, with occurrence counts.
///
/// Counts are informational and never persisted. Iteration is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUsage {
    counts: BTreeMap<String, usize>,
}

impl SourceUsage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key`.
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_default() += 1;
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SourceUsage {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut usage = Self::new();
        for key in iter {
            usage.record(key);
        }
        usage
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::tsx("file.tsx", Some(ProgrammingLanguage::Tsx))]
    #[case::ts("file.ts", Some(ProgrammingLanguage::TypeScript))]
    #[case::mts("file.mts", Some(ProgrammingLanguage::TypeScript))]
    #[case::jsx("file.jsx", Some(ProgrammingLanguage::Jsx))]
    #[case::js("file.js", Some(ProgrammingLanguage::JavaScript))]
    #[case::cjs("file.cjs", Some(ProgrammingLanguage::JavaScript))]
    #[case::multiple_dots("file.config.ts", Some(ProgrammingLanguage::TypeScript))]
    #[case::json("file.json", None)]
    #[case::no_ext("file", None)]
    #[case::unknown_ext("file.txt", None)]
    fn test_from_path(#[case] path: &str, #[case] expected: Option<ProgrammingLanguage>) {
        assert_eq!(ProgrammingLanguage::from_path(Path::new(path)), expected);
    }

    #[rstest]
    fn record_counts_occurrences() {
        let usage: SourceUsage = ["b.key", "a.key", "b.key"].into_iter().collect();

        assert_eq!(usage.len(), 2);
        assert_eq!(usage.count("b.key"), 2);
        assert_eq!(usage.count("missing"), 0);
        assert_eq!(usage.keys().collect::<Vec<_>>(), vec!["a.key", "b.key"]);
    }
}
