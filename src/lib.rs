//! activity_charts
//!
//! Build Chart.js dashboard configurations from per-location and per-station
//! activity series. Pairs with the `activity-charts` CLI.
//!
//! ### Features
//! - Typed chart configuration (`chart`) serialized in the Chart.js v2 schema
//! - One colored dataset per series, with a seedable RNG (`datasets`)
//! - Weekday, comparison and time-series charts (`render`)
//! - Location ↔ station drill-down as an explicit state machine (`view`)
//! - Standalone HTML page output (`page`), JSON/CSV storage (`storage`)
//!
//! ### Example
//! ```no_run
//! use activity_charts::{ChartRenderer, RenderOptions, ViewController, storage};
//!
//! let input = storage::load_input("activity.json")?;
//! let options = RenderOptions { seed: Some(7), ..RenderOptions::default() };
//! let dashboard = ChartRenderer::new(options.clone()).render(&input)?;
//!
//! let mut view = ViewController::from_dashboard(&dashboard, options);
//! view.toggle(0)?;
//! println!("{}", view.title());
//! # Ok::<(), activity_charts::ChartError>(())
//! ```

pub mod chart;
pub mod color;
pub mod datasets;
pub mod error;
pub mod models;
pub mod options;
pub mod page;
pub mod render;
pub mod storage;
pub mod tree;
pub mod view;

pub use chart::{ChartConfig, ChartData, ChartDataset};
pub use datasets::DatasetBuilder;
pub use error::{ChartError, Result};
pub use models::{DashboardInput, SeriesMap, SeriesPoint};
pub use options::RenderOptions;
pub use render::{ChartRenderer, Dashboard};
pub use view::{ViewController, ViewState};
