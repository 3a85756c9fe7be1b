// Settings module
// User-configurable planner settings, stored as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::date::{DEFAULT_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed offset east of UTC used to decide which day "today" is
    pub utc_offset_minutes: i32,
    /// SQLite file holding the day entries; platform data dir when unset
    pub database_path: Option<PathBuf>,
    /// Reject events saved without a description
    pub require_description: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES, // UTC+5:30
            database_path: None,
            require_description: false,
        }
    }
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES as u32 {
            return Err(format!(
                "utc_offset_minutes must be within ±{}, got {}",
                MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
            ));
        }

        if let Some(ref path) = self.database_path {
            if path.as_os_str().is_empty() {
                return Err("database_path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
