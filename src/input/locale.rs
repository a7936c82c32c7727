//! Locale discovery: maps translation catalogs on disk to locale codes.

use std::collections::{
    BTreeMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use thiserror::Error;

use crate::config::FileMatcher;

/// ISO 639-1 primary language subtags.
const ISO_639_1: &str = "aa ab ae af ak am an ar as av ay az ba be bg bh bi bm bn bo br bs ca ce \
    ch co cr cs cu cv cy da de dv dz ee el en eo es et eu fa ff fi fj fo fr fy ga gd gl gn gu gv \
    ha he hi ho hr ht hu hy hz ia id ie ig ii ik io is it iu ja jv ka kg ki kj kk kl km kn ko kr \
    ks ku kv kw ky la lb lg li ln lo lt lu lv mg mh mi mk ml mn mr ms mt my na nb nd ne ng nl nn \
    no nr nv ny oc oj om or os pa pi pl ps pt qu rm rn ro ru rw sa sc sd se sg si sk sl sm sn so \
    sq sr ss st su sv sw ta te tg th ti tk tl tn to tr ts tt tw ty ug uk ur uz ve vi vo wa wo xh \
    yi yo za zh zu";

static LANGUAGE_SUBTAGS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ISO_639_1.split_whitespace().collect());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Could not find an i18n file for locale: {locale}")]
    MissingReferenceLocale { locale: String },

    #[error("Found {} i18n files for locale {locale}, expected exactly one: {}", .files.len(), format_files(.files))]
    AmbiguousReferenceLocale { locale: String, files: Vec<PathBuf> },
}

fn format_files(files: &[PathBuf]) -> String {
    files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Normalize language code (lowercase and replace - with _)
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Checks whether `part` looks like a locale code (`en`, `en_US`, `zh-Hant-TW`, `es-419`).
fn is_language_code(part: &str) -> bool {
    let mut subtags = part.split(['-', '_']);
    let Some(primary) = subtags.next() else {
        return false;
    };
    if !LANGUAGE_SUBTAGS.contains(primary.to_lowercase().as_str()) {
        return false;
    }

    subtags.all(|subtag| {
        let len = subtag.len();
        let alphabetic = subtag.chars().all(|c| c.is_ascii_alphabetic());
        let numeric = subtag.chars().all(|c| c.is_ascii_digit());
        (len == 2 && alphabetic) || (len == 4 && alphabetic) || (len == 3 && numeric)
    })
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that looks like a locale code.
///
/// # Examples
/// - `i18n/resources/en_US.all.json` → `en_US`
/// - `locales/ja-JP.json` → `ja-JP`
/// - `translations/fr/common.json` → `fr`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<String> {
    let path_str = file_path.to_string_lossy();

    path_str
        .split(['/', '\\', '.'])
        .rev()
        .find(|part| is_language_code(part))
        .map(ToString::to_string)
}

/// Catalog files grouped by locale code, both levels sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFiles {
    files: BTreeMap<String, Vec<PathBuf>>,
}

impl LocaleFiles {
    /// Groups `paths` by detected locale, skipping files without one.
    ///
    /// Only the part of each path below `root` is searched for a locale code.
    #[must_use]
    pub fn from_paths(root: &Path, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut files: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        for path in paths {
            let relative_path = path.strip_prefix(root).unwrap_or(&path);
            let Some(locale) = detect_language_from_path(relative_path) else {
                tracing::debug!(path = %path.display(), "No locale detected, skipping file");
                continue;
            };
            files.entry(locale).or_default().push(path);
        }
        for paths in files.values_mut() {
            paths.sort();
        }

        Self { files }
    }

    /// Returns the single catalog of the reference locale.
    ///
    /// Locale codes are compared ignoring case and `-`/`_`, so `en-US`
    /// and `en_us` both satisfy a reference locale of `en_US`.
    pub fn reference_file(&self, reference_locale: &str) -> Result<&Path, LocaleError> {
        let wanted = normalize_language_code(reference_locale);
        let candidates: Vec<&PathBuf> = self
            .files
            .iter()
            .filter(|(locale, _)| normalize_language_code(locale) == wanted)
            .flat_map(|(_, paths)| paths)
            .collect();

        match candidates.as_slice() {
            [] => Err(LocaleError::MissingReferenceLocale { locale: reference_locale.to_string() }),
            [single] => Ok(single.as_path()),
            _ => Err(LocaleError::AmbiguousReferenceLocale {
                locale: reference_locale.to_string(),
                files: candidates.into_iter().cloned().collect(),
            }),
        }
    }

    /// Iterates `(locale, file)` pairs in locale then path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files
            .iter()
            .flat_map(|(locale, paths)| paths.iter().map(move |p| (locale.as_str(), p.as_path())))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Finds every translation catalog in the workspace and groups it by locale.
#[must_use]
pub fn discover_locale_files(matcher: &FileMatcher) -> LocaleFiles {
    let locale_files = LocaleFiles::from_paths(matcher.workspace_root(), matcher.translation_files());
    tracing::debug!(count = locale_files.len(), "Discovered translation files");
    locale_files
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::go_i18n("i18n/resources/en_US.all.json", Some("en_US"))]
    #[case::hyphen("locales/ja-JP.json", Some("ja-JP"))]
    #[case::directory("translations/fr/common.json", Some("fr"))]
    #[case::script("locales/zh-Hant-TW.json", Some("zh-Hant-TW"))]
    #[case::numeric_region("locales/es-419.json", Some("es-419"))]
    #[case::uppercase("i18n/DE.json", Some("DE"))]
    #[case::no_language("i18n/common.json", None)]
    #[case::all_is_not_a_language("i18n/all.json", None)]
    fn test_detect_language_from_path(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(detect_language_from_path(Path::new(path)).as_deref(), expected);
    }

    #[rstest]
    fn from_paths_groups_by_locale() {
        let files = LocaleFiles::from_paths(Path::new(""), vec![
            PathBuf::from("i18n/fr_FR.all.json"),
            PathBuf::from("i18n/en_US.all.json"),
            PathBuf::from("i18n/readme.json"),
        ]);

        let pairs: Vec<(&str, &Path)> = files.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("en_US", Path::new("i18n/en_US.all.json")),
                ("fr_FR", Path::new("i18n/fr_FR.all.json")),
            ]
        );
        assert_that!(files.len(), eq(2));
    }

    #[rstest]
    fn from_paths_ignores_locale_like_root_directories() {
        let root = Path::new("/home/ja/project");
        let files = LocaleFiles::from_paths(root, vec![
            root.join("i18n/common.json"),
            root.join("i18n/de.json"),
        ]);

        let locales: Vec<&str> = files.iter().map(|(locale, _)| locale).collect();
        assert_eq!(locales, vec!["de"]);
    }

    #[rstest]
    fn reference_file_matches_normalized_code() {
        let files = LocaleFiles::from_paths(Path::new(""), vec![PathBuf::from("locales/en-us.json")]);

        assert_eq!(files.reference_file("en_US"), Ok(Path::new("locales/en-us.json")));
    }

    #[rstest]
    fn reference_file_missing() {
        let files = LocaleFiles::from_paths(Path::new(""), vec![PathBuf::from("locales/fr.json")]);

        assert_eq!(
            files.reference_file("en_US"),
            Err(LocaleError::MissingReferenceLocale { locale: "en_US".to_string() })
        );
    }

    #[rstest]
    fn reference_file_ambiguous() {
        let files = LocaleFiles::from_paths(Path::new(""), vec![
            PathBuf::from("a/i18n/en_US.json"),
            PathBuf::from("b/i18n/en-US.json"),
        ]);

        let result = files.reference_file("en_US");

        assert!(matches!(
            result,
            Err(LocaleError::AmbiguousReferenceLocale { ref files, .. }) if files.len() == 2
        ));
    }
}
