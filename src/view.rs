//! Granularity toggle of the primary chart.
//!
//! The chart shows either the aggregate location series or the stations of one
//! location. A legend click flips between the two:
//!
//! ```text
//!   LocationView --click(i), i < stations--> StationView(i)
//!   StationView  --click(_)----------------> LocationView
//! ```
//!
//! [`transition`] is the pure step; [`ViewController`] owns the one chart
//! config and applies steps to it.

use crate::chart::{ChartConfig, ChartData, LegendAction};
use crate::error::{ChartError, Result};
use crate::options::RenderOptions;
use crate::render::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    LocationView,
    /// Stations of the location at this dataset index.
    StationView(usize),
}

impl ViewState {
    /// Legend action wired up while in this state.
    pub fn legend_action(self) -> LegendAction {
        match self {
            ViewState::LocationView => LegendAction::ShowStations,
            ViewState::StationView(_) => LegendAction::ShowLocations,
        }
    }
}

/// Result of one step: where to go, and the title to show there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub title: String,
}

/// Compute the next state for a legend click at `clicked_index`.
///
/// In `LocationView` the index must name both a location dataset and a station
/// view; otherwise `InvalidSeriesIndex` is returned. In `StationView` the index
/// is ignored and the step always returns to the location view.
pub fn transition(
    state: ViewState,
    clicked_index: usize,
    location_data: &ChartData,
    station_count: usize,
    options: &RenderOptions,
) -> Result<Transition> {
    match state {
        ViewState::LocationView => {
            let available = station_count.min(location_data.datasets.len());
            let label = location_data
                .label(clicked_index)
                .filter(|_| clicked_index < available)
                .ok_or(ChartError::InvalidSeriesIndex {
                    index: clicked_index,
                    available,
                })?;
            Ok(Transition {
                state: ViewState::StationView(clicked_index),
                title: options.station_title(label),
            })
        }
        ViewState::StationView(_) => Ok(Transition {
            state: ViewState::LocationView,
            title: options.location_title.clone(),
        }),
    }
}

/// Owns the primary chart and switches its data between granularities.
#[derive(Debug, Clone)]
pub struct ViewController {
    chart: ChartConfig,
    location_data: ChartData,
    station_data: Vec<ChartData>,
    state: ViewState,
    title: String,
    revision: u64,
    options: RenderOptions,
}

impl ViewController {
    /// Take over `chart`; its current data becomes the location view.
    pub fn new(mut chart: ChartConfig, station_data: Vec<ChartData>, options: RenderOptions) -> Self {
        chart.options.legend.on_click = Some(LegendAction::ShowStations);
        Self {
            location_data: chart.data.clone(),
            chart,
            station_data,
            state: ViewState::LocationView,
            title: options.location_title.clone(),
            revision: 0,
            options,
        }
    }

    pub fn from_dashboard(dashboard: &Dashboard, options: RenderOptions) -> Self {
        Self::new(
            dashboard.data_chart.clone(),
            dashboard.station_data.clone(),
            options,
        )
    }

    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of redraws so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handle a legend click on the dataset at `clicked_index`.
    ///
    /// On error nothing changes.
    pub fn toggle(&mut self, clicked_index: usize) -> Result<&ChartConfig> {
        let step = transition(
            self.state,
            clicked_index,
            &self.location_data,
            self.station_data.len(),
            &self.options,
        )
        .inspect_err(|e| log::warn!("legend click rejected: {e}"))?;
        self.apply(step);
        Ok(&self.chart)
    }

    /// Show the stations of the location at `clicked_index`.
    pub fn to_station_view(&mut self, clicked_index: usize) -> Result<&ChartConfig> {
        let step = transition(
            ViewState::LocationView,
            clicked_index,
            &self.location_data,
            self.station_data.len(),
            &self.options,
        )
        .inspect_err(|e| log::warn!("legend click rejected: {e}"))?;
        self.apply(step);
        Ok(&self.chart)
    }

    /// Restore the aggregate location view. No-op when already there.
    pub fn to_location_view(&mut self) -> &ChartConfig {
        if let ViewState::StationView(i) = self.state {
            // StationView steps never fail.
            if let Ok(step) = transition(
                self.state,
                i,
                &self.location_data,
                self.station_data.len(),
                &self.options,
            ) {
                self.apply(step);
            }
        }
        &self.chart
    }

    fn apply(&mut self, step: Transition) {
        self.chart.data = match step.state {
            ViewState::LocationView => self.location_data.clone(),
            ViewState::StationView(i) => self.station_data[i].clone(),
        };
        self.chart.options.legend.on_click = Some(step.state.legend_action());
        log::debug!("view {:?} -> {:?}: {}", self.state, step.state, step.title);
        self.state = step.state;
        self.title = step.title;
        self.redraw();
    }

    fn redraw(&mut self) {
        self.revision += 1;
    }
}
