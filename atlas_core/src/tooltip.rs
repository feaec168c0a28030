use atlas_data::{Metric, ProductionKind, RegionFeature};

use crate::viz_config::VizConfig;

/// Which detail lines accompany the feature name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TooltipMode {
    /// Name only.
    #[default]
    Zone,
    Consumption,
    Production(ProductionKind),
    RatioEnr,
}

/// Tooltip content: a name header plus zero or more detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub name: String,
    pub details: Vec<String>,
}

impl Tooltip {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.details.iter().map(String::as_str))
    }
}

/// MWh figures are whole numbers in the source data more often than
/// not; keep one decimal only when it carries information.
fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let rounded = format!("{value:.2}");
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn metric_line(metric: Metric, feature: &RegionFeature) -> String {
    format!(
        "{}: {} {}",
        metric.label(),
        format_value(metric.value_of(feature.properties())),
        metric.unit()
    )
}

/// Builds the tooltip for one feature under the given mode. Modes
/// without dedicated lines degrade to the name-only form.
pub fn tooltip_for(feature: &RegionFeature, mode: TooltipMode, _config: &VizConfig) -> Tooltip {
    let name = feature.properties().display_name().to_string();
    let details = match mode {
        TooltipMode::Zone => Vec::new(),
        TooltipMode::Consumption => vec![
            metric_line(Metric::TotalConsumption, feature),
            metric_line(Metric::PerCapitaConsumption, feature),
        ],
        TooltipMode::Production(kind) => vec![
            metric_line(kind.metric(), feature),
            metric_line(Metric::PredictedProduction2025, feature),
        ],
        TooltipMode::RatioEnr => vec![metric_line(Metric::EnrRatio, feature)],
    };
    Tooltip { name, details }
}

/// Tooltip of a population overlay marker.
pub fn population_tooltip(feature: &RegionFeature) -> Tooltip {
    Tooltip {
        name: feature.properties().display_name().to_string(),
        details: vec![metric_line(Metric::PopulationShare, feature)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_data::RegionCollection;
    use crate::viz_config::VizConfig;

    #[test]
    fn zone_tooltip_is_name_only() {
        let regions = RegionCollection::builtin();
        let config = VizConfig::default();
        let tooltip = tooltip_for(&regions.features()[0], TooltipMode::Zone, &config);
        assert!(tooltip.details.is_empty());
        assert_eq!(tooltip.lines().count(), 1);
    }

    #[test]
    fn consumption_tooltip_carries_total_and_per_capita() {
        let regions = RegionCollection::builtin();
        let config = VizConfig::default();
        let metz = regions
            .features()
            .iter()
            .find(|f| f.properties().nom_complet == "Metz Métropole")
            .unwrap();
        let tooltip = tooltip_for(metz, TooltipMode::Consumption, &config);
        assert_eq!(tooltip.details.len(), 2);
        assert_eq!(tooltip.details[0], "Total consommé: 1850000 MWh");
        assert_eq!(tooltip.details[1], "Conso. par habitant: 8.3 MWh");
    }

    #[test]
    fn production_tooltip_includes_the_2025_prediction() {
        let regions = RegionCollection::builtin();
        let config = VizConfig::default();
        let tooltip = tooltip_for(
            &regions.features()[0],
            TooltipMode::Production(ProductionKind::Eolien),
            &config,
        );
        assert!(tooltip.details[0].starts_with("Éolien: "));
        assert!(tooltip.details[1].starts_with("Pred. totale 2025: "));
    }

    #[test]
    fn population_tooltip_reports_the_regional_share() {
        let regions = RegionCollection::builtin();
        let saulnois = regions
            .features()
            .iter()
            .find(|f| f.properties().nom_complet == "CC du Saulnois")
            .unwrap();
        let tooltip = population_tooltip(saulnois);
        assert_eq!(tooltip.details, vec!["Part de la pop. rég.: 0.33 %".to_string()]);
    }
}
