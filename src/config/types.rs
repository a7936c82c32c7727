use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub translation_files: TranslationFilesConfig,

    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,

    /// Locale whose catalog is diffed against source usage.
    ///
    /// Matched against detected locale codes ignoring case and `-`/`_`.
    pub reference_locale: String,

    /// Callee names treated as translation markers (`T("key")`, `t("key")`).
    pub trans_fn_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/*.{js,ts,tsx}\"]",
            ));
        }
        validate_globs("includePatterns", &self.include_patterns, &mut errors);
        validate_globs("excludePatterns", &self.exclude_patterns, &mut errors);

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/i18n/**/*.json\"]",
            ));
        }
        validate_globs(
            "translationFiles.includePatterns",
            &self.translation_files.include_patterns,
            &mut errors,
        );
        validate_globs(
            "translationFiles.excludePatterns",
            &self.translation_files.exclude_patterns,
            &mut errors,
        );

        if self.reference_locale.trim().is_empty() {
            errors.push(ValidationError::new(
                "referenceLocale",
                "The reference locale cannot be empty. Example: \"en_US\"",
            ));
        }

        if self.trans_fn_names.is_empty() {
            errors.push(ValidationError::new(
                "transFnNames",
                "At least one function name is required. Example: [\"t\"]",
            ));
        }
        for (index, name) in self.trans_fn_names.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("transFnNames[{index}]"),
                    "The function name cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_globs(field: &str, patterns: &[String], errors: &mut Vec<ValidationError>) {
    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/{i18n,locales,translations}/**/*.json".to_string()],
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translation_files: TranslationFilesConfig::default(),
            include_patterns: vec!["**/*.{js,jsx,ts,tsx,mjs,cjs,mts,cts}".to_string()],
            exclude_patterns: vec!["**/node_modules/**".to_string()],
            reference_locale: "en_US".to_string(),
            trans_fn_names: vec!["T".to_string(), "t".to_string()],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = I18nSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"referenceLocale": "fr_FR"}"#;

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.reference_locale, eq("fr_FR"));
        assert_that!(settings.include_patterns, len(eq(1)));
        assert_that!(settings.trans_fn_names, elements_are![eq("T"), eq("t")]);
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.reference_locale, eq("en_US"));
        assert_that!(
            settings.include_patterns,
            elements_are![eq("**/*.{js,jsx,ts,tsx,mjs,cjs,mts,cts}")]
        );
        assert_that!(settings.exclude_patterns, elements_are![eq("**/node_modules/**")]);
        assert_that!(
            settings.translation_files.include_patterns,
            elements_are![eq("**/{i18n,locales,translations}/**/*.json")]
        );
        assert_that!(settings.translation_files.exclude_patterns, is_empty());
    }

    #[rstest]
    fn validate_invalid_reference_locale_empty() {
        let settings = I18nSettings { reference_locale: "  ".to_string(), ..I18nSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("referenceLocale")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_trans_fn_names() {
        let settings = I18nSettings {
            trans_fn_names: vec!["t".to_string(), String::new()],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("transFnNames[1]"))])
        );
    }

    #[rstest]
    fn validate_invalid_trans_fn_names_empty() {
        let settings = I18nSettings { trans_fn_names: vec![], ..I18nSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("transFnNames")),
                field!(ValidationError.message, contains_substring("At least one"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = I18nSettings { include_patterns: vec![], ..I18nSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_pattern_invalid_glob() {
        let settings = I18nSettings {
            include_patterns: vec!["**/*.{js,ts".to_string()],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("includePatterns[0]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("**/*.{js,ts"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = I18nSettings {
            exclude_patterns: vec![
                "node_modules/**".to_string(),
                "dist/**".to_string(),
                "invalid[pattern".to_string(),
            ],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("excludePatterns[2]"))])
        );
    }

    #[rstest]
    fn validate_invalid_translation_pattern() {
        let settings = I18nSettings {
            translation_files: TranslationFilesConfig {
                include_patterns: vec!["**/{i18n/*.json".to_string()],
                exclude_patterns: vec![],
            },
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.includePatterns[0]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = I18nSettings {
            reference_locale: String::new(),
            include_patterns: vec![],
            ..I18nSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. includePatterns"));
        assert_that!(error_message, contains_substring("2. referenceLocale"));
    }
}
