//! Persisted user preferences.
//!
//! One value is stored: the display theme. Read at startup, written on every
//! change, kept as a small TOML file under the platform config directory.

use crate::config::constants::defaults;
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// File-backed preference storage.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at the default per-user location, e.g.
    /// `~/.config/rppgen/preferences.toml`.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir().context("cannot determine user config directory")?;
        Ok(Self::at(dir.join(defaults::PREFS_DIR).join(defaults::PREFS_FILE)))
    }

    /// Store backed by an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences: {}", self.path.display()))?;
        let prefs = toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences: {}", self.path.display()))?;
        Ok(prefs)
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences dir: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(prefs).context("Failed to encode preferences")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))?;
        Ok(())
    }

    /// Theme read at startup; a missing file yields the default.
    pub fn load_theme(&self) -> Result<Theme> {
        Ok(self.load()?.theme)
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        let mut prefs = self.load().unwrap_or_default();
        prefs.theme = theme;
        self.save(&prefs)
    }

    /// Flip the persisted theme and return the new value.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.load_theme()?.toggled();
        self.save_theme(next)?;
        Ok(next)
    }
}
