use crate::feature::RegionProperties;

/// Consumption sub-metric selectable from the consumption menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsumptionKind {
    #[default]
    Total,
    PerCapita,
}

impl ConsumptionKind {
    pub const ALL: [ConsumptionKind; 2] = [ConsumptionKind::Total, ConsumptionKind::PerCapita];

    pub fn metric(self) -> Metric {
        match self {
            ConsumptionKind::Total => Metric::TotalConsumption,
            ConsumptionKind::PerCapita => Metric::PerCapitaConsumption,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.metric().id() == id)
    }
}

/// Production source selectable from the production menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductionKind {
    #[default]
    Total,
    Bio,
    Eolien,
    Geo,
    Hydro,
    Solaire,
    Other,
}

impl ProductionKind {
    pub const ALL: [ProductionKind; 7] = [
        ProductionKind::Total,
        ProductionKind::Bio,
        ProductionKind::Eolien,
        ProductionKind::Geo,
        ProductionKind::Hydro,
        ProductionKind::Solaire,
        ProductionKind::Other,
    ];

    pub fn metric(self) -> Metric {
        match self {
            ProductionKind::Total => Metric::TotalProduction,
            ProductionKind::Bio => Metric::BioProduction,
            ProductionKind::Eolien => Metric::WindProduction,
            ProductionKind::Geo => Metric::GeothermalProduction,
            ProductionKind::Hydro => Metric::HydroProduction,
            ProductionKind::Solaire => Metric::SolarProduction,
            ProductionKind::Other => Metric::OtherProduction,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.metric().id() == id)
    }
}

/// Every per-feature numeric column the presentation can visualize or
/// interpolate into a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalConsumption,
    PerCapitaConsumption,
    TotalProduction,
    BioProduction,
    WindProduction,
    GeothermalProduction,
    HydroProduction,
    SolarProduction,
    OtherProduction,
    EnrRatio,
    PopulationShare,
    PredictedProduction2025,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::TotalConsumption,
        Metric::PerCapitaConsumption,
        Metric::TotalProduction,
        Metric::BioProduction,
        Metric::WindProduction,
        Metric::GeothermalProduction,
        Metric::HydroProduction,
        Metric::SolarProduction,
        Metric::OtherProduction,
        Metric::EnrRatio,
        Metric::PopulationShare,
        Metric::PredictedProduction2025,
    ];

    /// Stable identifier, identical to the source property key.
    pub fn id(self) -> &'static str {
        match self {
            Metric::TotalConsumption => "total_conso_2022",
            Metric::PerCapitaConsumption => "per_capita_conso_2022",
            Metric::TotalProduction => "total_prod_2022",
            Metric::BioProduction => "prod_bio_2022",
            Metric::WindProduction => "prod_eolien_2022",
            Metric::GeothermalProduction => "prod_geo_2022",
            Metric::HydroProduction => "prod_hydro_2022",
            Metric::SolarProduction => "prod_solaire_2022",
            Metric::OtherProduction => "prod_other_2022",
            Metric::EnrRatio => "ratioenr_2022",
            Metric::PopulationShare => "pop_percentage",
            Metric::PredictedProduction2025 => "pred_prod_2025",
        }
    }

    /// Display label, in the language of the narrative.
    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalConsumption => "Total consommé",
            Metric::PerCapitaConsumption => "Conso. par habitant",
            Metric::TotalProduction => "Total produit",
            Metric::BioProduction => "Biomasse",
            Metric::WindProduction => "Éolien",
            Metric::GeothermalProduction => "Géothermique",
            Metric::HydroProduction => "Hydraulique",
            Metric::SolarProduction => "Photovoltaïque",
            Metric::OtherProduction => "Autres",
            Metric::EnrRatio => "Ratio ENR",
            Metric::PopulationShare => "Part de la pop. rég.",
            Metric::PredictedProduction2025 => "Pred. totale 2025",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::EnrRatio | Metric::PopulationShare => "%",
            _ => "MWh",
        }
    }

    pub fn value_of(self, properties: &RegionProperties) -> f64 {
        match self {
            Metric::TotalConsumption => properties.total_conso_2022,
            Metric::PerCapitaConsumption => properties.per_capita_conso_2022,
            Metric::TotalProduction => properties.total_prod_2022,
            Metric::BioProduction => properties.prod_bio_2022,
            Metric::WindProduction => properties.prod_eolien_2022,
            Metric::GeothermalProduction => properties.prod_geo_2022,
            Metric::HydroProduction => properties.prod_hydro_2022,
            Metric::SolarProduction => properties.prod_solaire_2022,
            Metric::OtherProduction => properties.prod_other_2022,
            Metric::EnrRatio => properties.ratioenr_2022,
            Metric::PopulationShare => properties.pop_percentage,
            Metric::PredictedProduction2025 => properties.pred_prod_2025,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.id() == id)
    }
}
