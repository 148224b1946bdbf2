//! Typed Chart.js (v2 schema) configuration.
//!
//! Everything here serializes to the JSON object the charting library expects:
//! `{ "type": ..., "data": { "labels": [...], "datasets": [...] }, "options": {...} }`.
//! Deserialization is also supported so a bundle written by the CLI can be read back.

use crate::models::SeriesPoint;
use serde::{Deserialize, Serialize};

/// Chart types used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    HorizontalBar,
}

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    /// Separate legend column on the right side (primary chart default).
    #[default]
    Right,
}

/// What a legend click on the primary chart does next.
///
/// Functions cannot travel through JSON, so the page dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendAction {
    /// Drill down into the stations of the clicked location.
    ShowStations,
    /// Return to the aggregate location view.
    ShowLocations,
}

/// Fill color of a dataset: one color for the whole series, or one per bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerItem(Vec<String>),
}

/// Dataset payload: time points for line charts, plain numbers for bar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValues {
    Points(Vec<SeriesPoint>),
    Values(Vec<f64>),
}

impl DataValues {
    pub fn len(&self) -> usize {
        match self {
            DataValues::Points(p) => p.len(),
            DataValues::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub fill: bool,
    pub background_color: Paint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    pub data: DataValues,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    pub fn from_datasets(datasets: Vec<ChartDataset>) -> Self {
        Self {
            labels: Vec::new(),
            datasets,
        }
    }

    /// Label of the dataset at `index`, if any.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.datasets.get(index).map(|d| d.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TitleOptions {
    pub fn hidden() -> Self {
        Self {
            display: false,
            text: None,
        }
    }

    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub font_color: String,
    pub font_size: u32,
    pub padding: u32,
    pub font_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub display: bool,
    #[serde(default)]
    pub position: LegendPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<LegendAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl LegendOptions {
    pub fn hidden() -> Self {
        Self {
            display: false,
            position: LegendPosition::default(),
            on_click: None,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions {
    /// Moment.js parse format for the x values.
    pub format: String,
    pub tooltip_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeOptions>,
    pub scale_label: ScaleLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<Axis>,
    pub y_axes: Vec<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub title: TitleOptions,
    pub legend: LegendOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

/// Complete configuration of one chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_chartjs_shape() {
        let cfg = ChartConfig {
            kind: ChartKind::HorizontalBar,
            data: ChartData {
                labels: vec!["a".into()],
                datasets: vec![ChartDataset {
                    label: "A".into(),
                    fill: false,
                    background_color: Paint::PerItem(vec!["#3e95cd".into()]),
                    border_color: None,
                    data: DataValues::Values(vec![1.0]),
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                title: TitleOptions::hidden(),
                legend: LegendOptions::hidden(),
                scales: None,
            },
        };
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["type"], json!("horizontalBar"));
        assert_eq!(v["data"]["datasets"][0]["backgroundColor"], json!(["#3e95cd"]));
        assert_eq!(v["options"]["maintainAspectRatio"], json!(false));
        assert!(v["data"]["datasets"][0].get("borderColor").is_none());
        assert!(v["options"]["legend"].get("onClick").is_none());
    }

    #[test]
    fn legend_action_tags() {
        assert_eq!(
            serde_json::to_string(&LegendAction::ShowStations).unwrap(),
            "\"showStations\""
        );
        assert_eq!(
            serde_json::to_string(&LegendPosition::Right).unwrap(),
            "\"right\""
        );
    }
}
