//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

/// Holds the validated settings for one workspace.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: I18nSettings,

    /// ワークスペースのルートパス
    workspace_root: PathBuf,
}

impl ConfigManager {
    /// Creates a manager with default settings rooted at `workspace_root`.
    #[must_use]
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { current_settings: I18nSettings::default(), workspace_root }
    }

    /// Loads `.i18n-fixup.json` from the workspace root (if any) and validates it.
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self) -> Result<(), ConfigError> {
        tracing::debug!(workspace_root = %self.workspace_root.display(), "Loading settings");

        let settings = loader::load_from_workspace(&self.workspace_root)?
            .map_or_else(I18nSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            });

        self.update_settings(settings)
    }

    /// Replaces the current settings after validating them.
    ///
    /// Used for command-line overrides on top of the loaded file.
    pub fn update_settings(&mut self, new_settings: I18nSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }
}
