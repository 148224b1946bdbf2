//! Nested activity data: location → station → points.
//!
//! Collapsing the tree gives a [`DashboardInput`] whose location series are
//! the per-timestamp sums of their stations, and whose station views line up
//! with the location datasets index for index.

use crate::error::{ChartError, Result};
use crate::models::{DashboardInput, SeriesMap, SeriesPoint, parse_timestamp, validate_series};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityTree {
    pub locations: IndexMap<String, SeriesMap>,
    #[serde(default)]
    pub weekday_totals: Vec<f64>,
}

/// Sum the points of all series by timestamp, ordered by time.
///
/// The first spelling seen for a timestamp is kept as the point's `x`.
pub fn sum_by_timestamp(series: &SeriesMap) -> Result<Vec<SeriesPoint>> {
    let mut totals: BTreeMap<NaiveDateTime, (String, f64)> = BTreeMap::new();
    for (label, points) in series {
        for p in points {
            let ts = parse_timestamp(&p.x).ok_or_else(|| {
                ChartError::malformed(format!("{label}: unparseable timestamp {:?}", p.x))
            })?;
            totals.entry(ts).or_insert_with(|| (p.x.clone(), 0.0)).1 += p.y;
        }
    }
    Ok(totals
        .into_values()
        .map(|(x, y)| SeriesPoint { x, y })
        .collect())
}

impl ActivityTree {
    /// Collapse into the flat input the renderer consumes.
    pub fn into_input(self) -> Result<DashboardInput> {
        let mut location_data = SeriesMap::new();
        let mut station_data = Vec::with_capacity(self.locations.len());
        for (location, stations) in self.locations {
            validate_series(&stations, &location)?;
            location_data.insert(location, sum_by_timestamp(&stations)?);
            station_data.push(stations);
        }
        Ok(DashboardInput {
            location_data,
            station_data,
            weekday_totals: self.weekday_totals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_align_and_sort_by_time() {
        let mut stations = SeriesMap::new();
        stations.insert(
            "S1".into(),
            vec![
                SeriesPoint::new("2020-11-02 0:00:00.000", 2.0),
                SeriesPoint::new("2020-11-01 0:00:00.000", 1.0),
            ],
        );
        stations.insert(
            "S2".into(),
            vec![SeriesPoint::new("2020-11-01 0:00:00.000", 5.0)],
        );
        let summed = sum_by_timestamp(&stations).unwrap();
        assert_eq!(
            summed,
            vec![
                SeriesPoint::new("2020-11-01 0:00:00.000", 6.0),
                SeriesPoint::new("2020-11-02 0:00:00.000", 2.0),
            ]
        );
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let mut stations = SeriesMap::new();
        stations.insert("S1".into(), vec![SeriesPoint::new("soon", 1.0)]);
        assert!(matches!(
            sum_by_timestamp(&stations),
            Err(ChartError::MalformedInputData(_))
        ));
    }
}
