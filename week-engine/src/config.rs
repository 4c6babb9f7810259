//! Week view configuration.

use crate::calendar_date::WeekStart;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings supplied by the hosting page; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekViewConfig {
    /// Base URL of the growth sessions server, empty for same-origin requests
    pub api_base_url: String,
    /// Query parameter holding the anchor date
    pub date_param: String,
    /// Window widths below this many pixels get the single-day view
    pub narrow_breakpoint: f64,
    pub week_start: WeekStart,
}

impl Default for WeekViewConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            date_param: "date".to_string(),
            narrow_breakpoint: 768.0,
            week_start: WeekStart::Monday,
        }
    }
}

impl WeekViewConfig {
    /// Parse and validate a JSON configuration blob
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.narrow_breakpoint.is_finite() && self.narrow_breakpoint > 0.0) {
            return Err(ConfigError::InvalidBreakpoint(self.narrow_breakpoint));
        }
        if self.date_param.trim().is_empty() {
            return Err(ConfigError::EmptyParameterName);
        }
        Ok(())
    }

    /// `api_base_url` joined with `path`, without doubled slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
