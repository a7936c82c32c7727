//! Workspace configuration for the fixup run.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Source and translation file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    I18nSettings,
    TranslationFilesConfig,
    ValidationError,
};
