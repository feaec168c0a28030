use atlas_data::{ConsumptionKind, Metric, ProductionKind, RegionFeature};

use crate::palette::Rgb;
use crate::viz_config::VizConfig;

/// Which styling rule is applied to the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleMode {
    #[default]
    Default,
    Zone,
    Consumption(ConsumptionKind),
    Production(ProductionKind),
    RatioEnr,
}

/// Resolved per-feature paint, the shape handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub weight: u32,
    pub opacity: f64,
    pub color: Rgb,
    pub fill_opacity: f64,
    pub fill_color: Rgb,
}

fn base_style(fill_color: Rgb, config: &VizConfig) -> FeatureStyle {
    FeatureStyle {
        weight: 0,
        opacity: config.opacity().stroke(),
        color: config.colors().default_color(),
        fill_opacity: config.opacity().fill(),
        fill_color,
    }
}

/// Computes the paint for one feature under the given mode. Bucketed
/// modes with an unusable threshold table fall back to the default
/// style rather than failing.
pub fn style_for(feature: &RegionFeature, mode: StyleMode, config: &VizConfig) -> FeatureStyle {
    let properties = feature.properties();
    match mode {
        StyleMode::Default => FeatureStyle {
            weight: 2,
            fill_opacity: config.opacity().lower(),
            ..base_style(config.colors().default_color(), config)
        },
        StyleMode::Zone => base_style(config.colors().zone_color(&properties.forme_epci), config),
        StyleMode::Consumption(kind) => match config.consumption_scale(kind) {
            Some(scale) => {
                let value = kind.metric().value_of(properties);
                base_style(scale.color_for(value), config)
            }
            None => style_for(feature, StyleMode::Default, config),
        },
        StyleMode::Production(kind) => match config.production_scale(kind) {
            Some(scale) => {
                let value = kind.metric().value_of(properties);
                base_style(scale.color_for(value), config)
            }
            None => style_for(feature, StyleMode::Default, config),
        },
        StyleMode::RatioEnr => match config.ratio_enr_scale() {
            Some(scale) => {
                let value = Metric::EnrRatio.value_of(properties);
                base_style(scale.color_for(value), config)
            }
            None => style_for(feature, StyleMode::Default, config),
        },
    }
}
