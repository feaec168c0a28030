use atlas_data::{Metric, RegionCollection};

/// Aggregates for one metric across the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
    pub total: f64,
}

/// Per-metric aggregates computed once after load; the viewer header
/// reports from here and threshold tables can be eyeballed against it.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    feature_count: usize,
    by_metric: Vec<MetricSummary>,
}

impl DatasetSummary {
    pub fn compute(regions: &RegionCollection) -> Self {
        let by_metric = Metric::ALL
            .into_iter()
            .map(|metric| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                let mut total = 0.0;
                for feature in regions.features() {
                    let value = metric.value_of(feature.properties());
                    min = min.min(value);
                    max = max.max(value);
                    total += value;
                }
                MetricSummary {
                    metric,
                    min,
                    max,
                    total,
                }
            })
            .collect();
        Self {
            feature_count: regions.len(),
            by_metric,
        }
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricSummary> {
        self.by_metric.iter().find(|entry| entry.metric == metric)
    }

    pub fn entries(&self) -> &[MetricSummary] {
        &self.by_metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_covers_every_metric() {
        let regions = RegionCollection::builtin();
        let summary = DatasetSummary::compute(&regions);
        assert_eq!(summary.feature_count(), regions.len());
        assert_eq!(summary.entries().len(), Metric::ALL.len());
    }

    #[test]
    fn totals_and_extremes_are_consistent() {
        let regions = RegionCollection::builtin();
        let summary = DatasetSummary::compute(&regions);
        let conso = summary.metric(Metric::TotalConsumption).unwrap();
        assert!(conso.min <= conso.max);
        assert!(conso.total >= conso.max);
        let share = summary.metric(Metric::PopulationShare).unwrap();
        assert!(share.total <= 100.0 + 1e-9);
    }
}
