use crate::error::{ChartError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One observation of a series: a timestamp on the x-axis and a count on the y-axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    /// Timestamp in the chart time format (`YYYY-MM-DD h:mm:ss.SSS`).
    pub x: String,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }

    /// Parse `x` into a timestamp.
    ///
    /// Accepts `2020-11-01 9:30:00.000`, `2020-11-01T09:30:00`, a bare `2020-11-01`,
    /// and the RFC 2822 form Flask's JSON encoder emits (`Sun, 01 Nov 2020 09:30:00 GMT`),
    /// which is converted to UTC.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.x)
    }
}

pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(s) {
        return Some(ts.naive_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Series label (location or station name) → ordered points.
///
/// Iteration follows insertion order, which for JSON input is document order.
/// Dataset indices used by legend clicks are positions in this order.
pub type SeriesMap = IndexMap<String, Vec<SeriesPoint>>;

/// The three values the host page injects at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardInput {
    /// Aggregate series, one per location.
    pub location_data: SeriesMap,
    /// Station series per location, indexed by the location's position in `location_data`.
    #[serde(default)]
    pub station_data: Vec<SeriesMap>,
    /// Sample totals Monday..Sunday.
    #[serde(default)]
    pub weekday_totals: Vec<f64>,
}

impl DashboardInput {
    /// Boundary validation.
    ///
    /// ### Errors
    /// `MalformedInputData` when the weekday totals are not exactly seven finite
    /// numbers, a label is empty, a value is not finite, or a timestamp does not parse.
    ///
    /// Fewer station maps than locations is accepted here; it is reported as
    /// `InvalidSeriesIndex` by the click that reaches the missing entry.
    pub fn validate(&self) -> Result<()> {
        if self.weekday_totals.len() != 7 {
            return Err(ChartError::malformed(format!(
                "weekday_totals must have 7 entries, got {}",
                self.weekday_totals.len()
            )));
        }
        if let Some(pos) = self.weekday_totals.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::malformed(format!(
                "weekday_totals[{pos}] is not a finite number"
            )));
        }
        validate_series(&self.location_data, "location_data")?;
        for (i, stations) in self.station_data.iter().enumerate() {
            validate_series(stations, &format!("station_data[{i}]"))?;
        }
        Ok(())
    }
}

pub(crate) fn validate_series(series: &SeriesMap, context: &str) -> Result<()> {
    for (label, points) in series {
        if label.trim().is_empty() {
            return Err(ChartError::malformed(format!("{context}: empty series label")));
        }
        for p in points {
            if !p.y.is_finite() {
                return Err(ChartError::malformed(format!(
                    "{context}[{label}]: value at {} is not finite",
                    p.x
                )));
            }
            if p.timestamp().is_none() {
                return Err(ChartError::malformed(format!(
                    "{context}[{label}]: unparseable timestamp {:?}",
                    p.x
                )));
            }
        }
    }
    Ok(())
}
