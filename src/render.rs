//! Chart construction for the activity dashboard.
//!
//! - `weekday_chart`: horizontal bars, Monday..Sunday
//! - `comparison_chart`: static example bars (not derived from live data)
//! - `primary_chart`: time-series line chart whose legend drives the granularity toggle
//! - `ChartRenderer::render`: validate input and assemble all mount targets into a [`Dashboard`]

use crate::chart::{
    Axis, ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, DataValues,
    LegendAction, LegendLabels, LegendOptions, Paint, ScaleLabel, Scales, TimeOptions,
    TitleOptions,
};
use crate::color::BAR_PALETTE;
use crate::datasets::DatasetBuilder;
use crate::error::Result;
use crate::models::DashboardInput;
use crate::options::RenderOptions;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// DOM ids of the page elements the dashboard renders into.
pub const WEEKDAY_CHART_ID: &str = "weekday-chart";
pub const COMPARISON_CHART_ID: &str = "comparison-chart";
pub const DATA_CHART_ID: &str = "data-chart";
pub const CHART_TITLE_ID: &str = "chart-title";

const COMPARISON_LABELS: [&str; 5] = ["Africa", "Asia", "Europe", "Latin America", "North America"];
const COMPARISON_VALUES: [f64; 5] = [2478.0, 5267.0, 734.0, 784.0, 433.0];

fn bar_options(title: &str) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        title: TitleOptions::shown(title),
        legend: LegendOptions::hidden(),
        scales: None,
    }
}

fn palette() -> Paint {
    Paint::PerItem(BAR_PALETTE.iter().map(|c| c.to_string()).collect())
}

/// Horizontal bar chart with one bar per weekday.
///
/// Values are copied as given; length is not checked here (see `DashboardInput::validate`).
pub fn weekday_chart(totals: &[f64]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::HorizontalBar,
        data: ChartData {
            labels: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            datasets: vec![ChartDataset {
                label: "Total Samples".into(),
                fill: false,
                background_color: palette(),
                border_color: None,
                data: DataValues::Values(totals.to_vec()),
            }],
        },
        options: bar_options("Total Samples by Weekday"),
    }
}

/// Static example chart; its values are fixed, not derived from live data.
pub fn comparison_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::HorizontalBar,
        data: ChartData {
            labels: COMPARISON_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![ChartDataset {
                label: "Population (millions)".into(),
                fill: false,
                background_color: palette(),
                border_color: None,
                data: DataValues::Values(COMPARISON_VALUES.to_vec()),
            }],
        },
        options: bar_options("Predicted world population (millions) in 2050"),
    }
}

/// Time-series line chart showing `location_data`, legend on the side.
///
/// The initial legend action drills down into stations.
pub fn primary_chart(location_data: ChartData, options: &RenderOptions) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: location_data,
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            title: TitleOptions::hidden(),
            legend: LegendOptions {
                display: true,
                position: options.legend_position,
                on_click: Some(LegendAction::ShowStations),
                labels: Some(LegendLabels {
                    use_point_style: true,
                    font_color: options.legend_font_color.clone(),
                    font_size: 15,
                    padding: 20,
                    font_style: "bold".into(),
                }),
            },
            scales: Some(Scales {
                x_axes: vec![Axis {
                    kind: Some("time".into()),
                    time: Some(TimeOptions {
                        format: options.time_format.clone(),
                        tooltip_format: options.tooltip_format.clone(),
                    }),
                    scale_label: ScaleLabel {
                        display: true,
                        label_string: Some("Date".into()),
                    },
                }],
                y_axes: vec![Axis {
                    kind: None,
                    time: None,
                    scale_label: ScaleLabel {
                        display: false,
                        label_string: None,
                    },
                }],
            }),
        },
    }
}

/// Everything the page needs: one config per mount point, the title text, and
/// the station views the primary chart can switch to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub weekday_chart: ChartConfig,
    pub comparison_chart: ChartConfig,
    pub data_chart: ChartConfig,
    pub chart_title: String,
    /// Data of the aggregate view (also the initial `data_chart.data`).
    pub location_data: ChartData,
    /// Station data per location, indexed like `location_data.datasets`.
    pub station_data: Vec<ChartData>,
}

#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    pub options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Validate `input` and build the dashboard.
    ///
    /// ### Errors
    /// `MalformedInputData` when `input` fails validation.
    pub fn render(&self, input: &DashboardInput) -> Result<Dashboard> {
        input.validate()?;
        let dashboard = match self.options.seed {
            Some(seed) => self.render_with(input, DatasetBuilder::seeded(seed)),
            None => self.render_with(input, DatasetBuilder::new()),
        };
        log::debug!(
            "rendered dashboard: {} locations, {} station views",
            dashboard.location_data.datasets.len(),
            dashboard.station_data.len()
        );
        Ok(dashboard)
    }

    fn render_with<R: Rng>(&self, input: &DashboardInput, mut builder: DatasetBuilder<R>) -> Dashboard {
        let location_data = builder.build_chart_data(&input.location_data);
        let station_data: Vec<ChartData> = input
            .station_data
            .iter()
            .map(|stations| builder.build_chart_data(stations))
            .collect();
        if station_data.len() < location_data.datasets.len() {
            log::warn!(
                "{} locations but only {} station views; clicks past the last view will be rejected",
                location_data.datasets.len(),
                station_data.len()
            );
        }
        Dashboard {
            weekday_chart: weekday_chart(&input.weekday_totals),
            comparison_chart: comparison_chart(),
            data_chart: primary_chart(location_data.clone(), &self.options),
            chart_title: self.options.location_title.clone(),
            location_data,
            station_data,
        }
    }
}
