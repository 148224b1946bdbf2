use crate::error::Result;
use crate::models::{DashboardInput, SeriesMap};
use crate::render::Dashboard;
use crate::tree::ActivityTree;
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read the injected page data (`location_data`, `station_data`, `weekday_totals`).
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<DashboardInput> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read nested location → station data.
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<ActivityTree> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Save the rendered dashboard as pretty JSON.
pub fn save_dashboard_json<P: AsRef<Path>>(dashboard: &Dashboard, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(dashboard)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save series as tidy CSV: one row per point, header `series,timestamp,value`.
///
/// Labels and timestamps come from user data; both are guarded against formula injection.
pub fn save_series_csv<P: AsRef<Path>>(series: &SeriesMap, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("series", "timestamp", "value"))?;
    for (label, points) in series {
        let label = sanitize_cell(label);
        for p in points {
            wtr.serialize((&label, sanitize_cell(&p.x), p.y))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeriesPoint;
    use tempfile::tempdir;

    #[test]
    fn csv_has_one_row_per_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let mut series = SeriesMap::new();
        series.insert(
            "Gym".into(),
            vec![
                SeriesPoint::new("2020-11-01 0:00:00.000", 3.0),
                SeriesPoint::new("2020-11-02 0:00:00.000", 4.5),
            ],
        );
        save_series_csv(&series, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "series,timestamp,value");
        assert_eq!(lines[1], "Gym,2020-11-01 0:00:00.000,3.0");
        assert_eq!(lines.len(), 3);
    }
}
