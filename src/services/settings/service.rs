use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{debug, info};

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";
const DATABASE_FILE: &str = "planner.db";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "DayPlanner", "DayPlanner")
        .ok_or_else(|| anyhow!("Could not determine a home directory for settings"))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(project_dirs()?.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }

    /// Where the planner database lives for `settings`
    pub fn database_path(settings: &Settings) -> Result<PathBuf> {
        match settings.database_path {
            Some(ref path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join(DATABASE_FILE)),
        }
    }
}
