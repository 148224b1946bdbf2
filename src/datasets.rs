//! Turn a `SeriesMap` into chart datasets, one per series, each with its own color.

use crate::chart::{ChartData, ChartDataset, DataValues, Paint};
use crate::color::{Rgba, random_color};
use crate::models::SeriesMap;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Builds line datasets from series maps.
///
/// The generator is seedable: use [`DatasetBuilder::seeded`] when the colors
/// must be reproducible (tests, `--seed` on the CLI).
#[derive(Debug, Clone)]
pub struct DatasetBuilder<R: Rng = ThreadRng> {
    rng: R,
}

impl DatasetBuilder<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for DatasetBuilder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> DatasetBuilder<R> {
    pub fn random_color(&mut self) -> Rgba {
        random_color(&mut self.rng)
    }

    /// One dataset per key, in the map's insertion order.
    ///
    /// Datasets are unfilled; the generated color is used for both fill and border.
    pub fn build_datasets(&mut self, series: &SeriesMap) -> Vec<ChartDataset> {
        let datasets: Vec<ChartDataset> = series
            .iter()
            .map(|(label, points)| {
                let color = self.random_color().to_string();
                ChartDataset {
                    label: label.clone(),
                    fill: false,
                    background_color: Paint::Solid(color.clone()),
                    border_color: Some(Paint::Solid(color)),
                    data: DataValues::Points(points.clone()),
                }
            })
            .collect();
        log::debug!("built {} datasets", datasets.len());
        datasets
    }

    /// Same as `build_datasets`, wrapped as chart `data`.
    pub fn build_chart_data(&mut self, series: &SeriesMap) -> ChartData {
        ChartData::from_datasets(self.build_datasets(series))
    }
}
