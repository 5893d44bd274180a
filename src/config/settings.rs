//! User settings for Mes Dépenses
//!
//! Manages display preferences, the calendar convention used by the
//! "this week" filter and the default listing timeframe.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::DepensesPaths;
use crate::error::DepensesError;
use crate::filter::Timeframe;

/// User settings for Mes Dépenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for table output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Timeframe applied by `expense list` when none is given
    #[serde(default = "default_timeframe")]
    pub default_timeframe: Timeframe,

    /// File name used by `export csv` when no output is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_timeframe() -> Timeframe {
    Timeframe::ThisMonth
}

fn default_export_file_name() -> String {
    "mes-depenses.csv".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: default_first_day_of_week(),
            default_timeframe: default_timeframe(),
            export_file_name: default_export_file_name(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// The configured week start as a chrono weekday
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DepensesPaths) -> Result<Self, DepensesError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DepensesError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DepensesError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DepensesPaths) -> Result<(), DepensesError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DepensesError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DepensesError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
