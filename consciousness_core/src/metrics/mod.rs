//! Derived time series consumed by the host's chart widget.

use serde::{Deserialize, Serialize};
use sim_rules::Parameters;
use std::collections::VecDeque;

use crate::scoring::parameter_impacts;

/// Ticks between chart samples.
pub const SAMPLE_INTERVAL: u64 = 30;

/// Number of retained samples; older points fall off the front.
pub const SAMPLE_CAPACITY: usize = 120;

/// One charted sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsPoint {
    pub tick: u64,
    pub score: f64,
    pub memory_impact: f64,
    pub processing_impact: f64,
    pub complexity_impact: f64,
}

/// Rolling window of chart samples, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSeries {
    points: VecDeque<MetricsPoint>,
}

impl MetricsSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample if the tick falls on the sampling interval.
    ///
    /// Off-interval ticks are ignored, so calling this every frame is
    /// cheap and keeps the chart rate fixed.
    pub fn record(&mut self, tick: u64, score: f64, parameters: &Parameters, module_count: usize) {
        if tick % SAMPLE_INTERVAL != 0 {
            return;
        }

        let impacts = parameter_impacts(parameters, module_count);
        self.points.push_back(MetricsPoint {
            tick,
            score,
            memory_impact: impacts.memory,
            processing_impact: impacts.processing,
            complexity_impact: impacts.complexity,
        });
        while self.points.len() > SAMPLE_CAPACITY {
            self.points.pop_front();
        }
    }

    /// Samples in chronological order.
    pub fn points(&self) -> impl Iterator<Item = &MetricsPoint> {
        self.points.iter()
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<&MetricsPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_only_on_interval() {
        let mut series = MetricsSeries::new();
        let params = Parameters::default();

        for tick in 1..=90 {
            series.record(tick, 0.5, &params, 0);
        }

        assert_eq!(series.len(), 3);
        let ticks: Vec<u64> = series.points().map(|p| p.tick).collect();
        assert_eq!(ticks, vec![30, 60, 90]);
    }

    #[test]
    fn test_point_carries_impacts() {
        let mut series = MetricsSeries::new();
        let params = Parameters::new(50, 50, 50);

        series.record(30, 0.5, &params, 0);

        let point = series.latest().unwrap();
        assert!((point.score - 0.5).abs() < 1e-9);
        assert!((point.memory_impact - 0.15).abs() < 1e-9);
        assert!((point.processing_impact - 0.2).abs() < 1e-9);
        assert!((point.complexity_impact - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut series = MetricsSeries::new();
        let params = Parameters::default();

        for i in 1..=(SAMPLE_CAPACITY as u64 + 5) {
            series.record(i * SAMPLE_INTERVAL, 0.5, &params, 0);
        }

        assert_eq!(series.len(), SAMPLE_CAPACITY);
        assert_eq!(series.points().next().unwrap().tick, 6 * SAMPLE_INTERVAL);
        assert_eq!(series.latest().unwrap().tick, 125 * SAMPLE_INTERVAL);
    }

    #[test]
    fn test_clear() {
        let mut series = MetricsSeries::new();
        series.record(30, 0.5, &Parameters::default(), 0);

        series.clear();

        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }
}
