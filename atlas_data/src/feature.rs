use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, RegionGeometry};

/// Habitat-form category of an EPCI, as published in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HabitatForm {
    RuralAutonome,
    RuralPeriurbain,
    Urbain,
    /// Category labels outside the three documented forms are carried
    /// verbatim so they can still fall back to the default zone color.
    Other(String),
}

impl HabitatForm {
    pub fn label(&self) -> &str {
        match self {
            HabitatForm::RuralAutonome => "Rural autonome",
            HabitatForm::RuralPeriurbain => "Rural périurbain",
            HabitatForm::Urbain => "Urbain",
            HabitatForm::Other(label) => label,
        }
    }
}

impl From<String> for HabitatForm {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Rural autonome" => HabitatForm::RuralAutonome,
            "Rural périurbain" => HabitatForm::RuralPeriurbain,
            "Urbain" => HabitatForm::Urbain,
            _ => HabitatForm::Other(value),
        }
    }
}

impl From<HabitatForm> for String {
    fn from(value: HabitatForm) -> Self {
        value.label().to_string()
    }
}

/// Property bag of a region feature.
///
/// Field names match the keys emitted by the upstream processing
/// pipeline; figures are MWh for energy columns and percent for the
/// ENR ratio and population share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProperties {
    pub siren_epci: u64,
    pub nom_complet: String,
    pub forme_epci: HabitatForm,
    pub pmun_epci: u64,
    pub nb_com_epci: u32,
    pub total_conso_2022: f64,
    pub per_capita_conso_2022: f64,
    pub total_prod_2022: f64,
    pub prod_bio_2022: f64,
    pub prod_eolien_2022: f64,
    pub prod_geo_2022: f64,
    pub prod_hydro_2022: f64,
    pub prod_solaire_2022: f64,
    pub prod_other_2022: f64,
    #[serde(default)]
    pub ratioenr_2019: Option<f64>,
    #[serde(default)]
    pub ratioenr_2020: Option<f64>,
    #[serde(default)]
    pub ratioenr_2021: Option<f64>,
    pub ratioenr_2022: f64,
    pub pop_percentage: f64,
    pub pred_prod_2025: f64,
}

impl RegionProperties {
    /// Display name used by popups and tooltip headers.
    pub fn display_name(&self) -> &str {
        &self.nom_complet
    }
}

/// One EPCI polygon with its property bag and derived geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionFeature {
    properties: RegionProperties,
    geometry: RegionGeometry,
}

impl RegionFeature {
    pub fn new(properties: RegionProperties, geometry: RegionGeometry) -> Self {
        Self {
            properties,
            geometry,
        }
    }

    pub fn properties(&self) -> &RegionProperties {
        &self.properties
    }

    pub fn geometry(&self) -> &RegionGeometry {
        &self.geometry
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    pub fn centroid(&self) -> (f64, f64) {
        self.geometry.centroid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habitat_form_round_trips_known_labels() {
        for label in ["Rural autonome", "Rural périurbain", "Urbain"] {
            let form = HabitatForm::from(label.to_string());
            assert!(!matches!(form, HabitatForm::Other(_)), "{label}");
            assert_eq!(form.label(), label);
        }
    }

    #[test]
    fn unknown_habitat_form_is_preserved() {
        let form = HabitatForm::from("Littoral".to_string());
        assert_eq!(form, HabitatForm::Other("Littoral".to_string()));
        assert_eq!(form.label(), "Littoral");
    }
}
