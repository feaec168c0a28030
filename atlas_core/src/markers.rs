use atlas_data::RegionCollection;

use crate::palette::Rgb;
use crate::tooltip::{population_tooltip, Tooltip};
use crate::viz_config::VizConfig;

/// Radius multiplier applied to the regional population share.
const RADIUS_PER_PERCENT: f64 = 5.0;

/// One population circle, anchored at the feature centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationMarker {
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Rgb,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub fill_color: Rgb,
    pub tooltip: Tooltip,
}

/// Builds the population overlay. Markers come back ordered largest
/// first so painting in order leaves the small circles on top.
pub fn population_markers(regions: &RegionCollection, config: &VizConfig) -> Vec<PopulationMarker> {
    let mut markers: Vec<PopulationMarker> = regions
        .features()
        .iter()
        .map(|feature| PopulationMarker {
            center: feature.centroid(),
            radius: feature.properties().pop_percentage * RADIUS_PER_PERCENT,
            color: config.colors().default_color(),
            weight: 1,
            opacity: config.opacity().stroke(),
            fill_opacity: config.opacity().lower(),
            fill_color: config.colors().default_color(),
            tooltip: population_tooltip(feature),
        })
        .collect();
    markers.sort_by(|a, b| b.radius.total_cmp(&a.radius));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_per_feature_scaled_by_population_share() {
        let regions = RegionCollection::builtin();
        let config = VizConfig::default();
        let markers = population_markers(&regions, &config);
        assert_eq!(markers.len(), regions.len());
        let metz = markers
            .iter()
            .find(|m| m.tooltip.name == "Metz Métropole")
            .unwrap();
        assert!((metz.radius - 4.06 * RADIUS_PER_PERCENT).abs() < 1e-9);
    }

    #[test]
    fn larger_circles_paint_first() {
        let regions = RegionCollection::builtin();
        let config = VizConfig::default();
        let markers = population_markers(&regions, &config);
        for pair in markers.windows(2) {
            assert!(pair[0].radius >= pair[1].radius);
        }
    }
}
