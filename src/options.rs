//! Render options. Every field has a default matching the stock dashboard, so an
//! options file only needs the keys it changes.

use crate::chart::LegendPosition;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Moment.js format of the x values sent by the server.
pub const DEFAULT_TIME_FORMAT: &str = "YYYY-MM-DD h:mm:ss.SSS";
/// Moment.js locale short date.
pub const DEFAULT_TOOLTIP_FORMAT: &str = "ll";
pub const DEFAULT_LOCATION_TITLE: &str = "Location Activity";
pub const DEFAULT_STATION_TITLE_PREFIX: &str = "Station Activity @ ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub time_format: String,
    pub tooltip_format: String,
    pub legend_position: LegendPosition,
    pub legend_font_color: String,
    pub location_title: String,
    pub station_title_prefix: String,
    /// Seed for dataset colors; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.into(),
            tooltip_format: DEFAULT_TOOLTIP_FORMAT.into(),
            legend_position: LegendPosition::Right,
            legend_font_color: "#FFFFFF".into(),
            location_title: DEFAULT_LOCATION_TITLE.into(),
            station_title_prefix: DEFAULT_STATION_TITLE_PREFIX.into(),
            seed: None,
        }
    }
}

impl RenderOptions {
    /// Load options from a JSON file; missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn station_title(&self, label: &str) -> String {
        format!("{}{}", self.station_title_prefix, label)
    }
}
