//! Errors surfaced by a fixup run.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigError,
    MatcherError,
};
use crate::indexer::types::IndexerError;
use crate::input::catalog::CatalogError;
use crate::input::locale::LocaleError;

#[derive(Error, Debug)]
pub enum FixupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid file patterns: {0}")]
    Matcher(#[from] MatcherError),

    #[error("Failed to scan sources: {0}")]
    Scan(#[from] IndexerError),

    #[error("Could not find an i18n file for locale: {locale}")]
    MissingReferenceLocale { locale: String },

    #[error("Found {count} i18n files for locale {locale}, expected exactly one")]
    AmbiguousReferenceLocale { locale: String, count: usize },

    #[error("Failed to load catalog {}: {source}", .path.display())]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    #[error("Failed to write catalog {}: {source}", .path.display())]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    /// 対話入出力の失敗
    #[error("Console I/O failed: {0}")]
    Prompt(#[from] std::io::Error),
}

impl From<LocaleError> for FixupError {
    fn from(err: LocaleError) -> Self {
        match err {
            LocaleError::MissingReferenceLocale { locale } => Self::MissingReferenceLocale { locale },
            LocaleError::AmbiguousReferenceLocale { locale, files } => {
                for file in &files {
                    tracing::error!(locale = %locale, file = %file.display(), "Candidate reference catalog");
                }
                Self::AmbiguousReferenceLocale { locale, count: files.len() }
            }
        }
    }
}
