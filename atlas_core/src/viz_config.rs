use std::{
    collections::BTreeMap,
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

use atlas_data::{ConsumptionKind, HabitatForm, ProductionKind};

use crate::palette::{PaletteError, Rgb, ThresholdScale};

pub const BUILTIN_VIZ_CONFIG: &str = include_str!("data/viz_config.json");

/// Presentation settings: view framing, backdrop, palettes, threshold
/// tables and narrative panel texts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    map: MapViewConfig,
    backdrop: BackdropConfig,
    opacity: OpacityConfig,
    colors: ColorConfig,
    thresholds: ThresholdConfig,
    panels: PanelConfig,
}

impl VizConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            VizConfig::from_json_str(BUILTIN_VIZ_CONFIG)
                .expect("builtin viz config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, VizConfigError> {
        let config: VizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, VizConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| VizConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        VizConfig::from_json_str(&contents)
    }

    /// Checks every threshold table against its ramp so styling can
    /// later rely on well-formed scales.
    fn validate(&self) -> Result<(), VizConfigError> {
        for kind in ConsumptionKind::ALL {
            ThresholdScale::new(
                self.thresholds.consumption(kind).to_vec(),
                self.colors.consumption_ramp.clone(),
            )?;
        }
        for kind in ProductionKind::ALL {
            ThresholdScale::new(
                self.thresholds.production(kind).to_vec(),
                self.colors.production_ramp.clone(),
            )?;
        }
        ThresholdScale::new(
            self.thresholds.ratio_enr.clone(),
            self.colors.ratio_enr_ramp.clone(),
        )?;
        Ok(())
    }

    pub fn map(&self) -> &MapViewConfig {
        &self.map
    }

    pub fn backdrop(&self) -> &BackdropConfig {
        &self.backdrop
    }

    pub fn opacity(&self) -> &OpacityConfig {
        &self.opacity
    }

    pub fn colors(&self) -> &ColorConfig {
        &self.colors
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn panel(&self, id: &str) -> Option<&PanelText> {
        self.panels.entries.get(id)
    }

    pub fn consumption_scale(&self, kind: ConsumptionKind) -> Option<ThresholdScale> {
        ThresholdScale::new(
            self.thresholds.consumption(kind).to_vec(),
            self.colors.consumption_ramp.clone(),
        )
        .ok()
    }

    pub fn production_scale(&self, kind: ProductionKind) -> Option<ThresholdScale> {
        ThresholdScale::new(
            self.thresholds.production(kind).to_vec(),
            self.colors.production_ramp.clone(),
        )
        .ok()
    }

    pub fn ratio_enr_scale(&self) -> Option<ThresholdScale> {
        ThresholdScale::new(
            self.thresholds.ratio_enr.clone(),
            self.colors.ratio_enr_ramp.clone(),
        )
        .ok()
    }
}

#[derive(Debug, Error)]
pub enum VizConfigError {
    #[error("failed to parse viz config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read viz config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid viz config: {0}")]
    Validate(#[from] PaletteError),
}

/// Initial framing of the map view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    center: (f64, f64),
    zoom: u8,
    fit_bounds: bool,
}

impl MapViewConfig {
    /// (latitude, longitude) of the initial center.
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Whether to refit the view to the dataset bounds once loaded.
    pub fn fit_bounds(&self) -> bool {
        self.fit_bounds
    }
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: (48.5, 6.0),
            zoom: 8,
            fit_bounds: true,
        }
    }
}

/// Basemap backdrop behind the choropleth. The tile URL is carried as
/// provenance; the terminal renderer only uses opacity and the
/// grayscale flag for its dimmed background field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    url: String,
    attribution: String,
    opacity: f64,
    grayscale: bool,
}

impl BackdropConfig {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn grayscale(&self) -> bool {
        self.grayscale
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap".to_string(),
            opacity: 0.5,
            grayscale: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpacityConfig {
    stroke: f64,
    fill: f64,
    lower: f64,
}

impl OpacityConfig {
    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    pub fn fill(&self) -> f64 {
        self.fill
    }

    /// Muted fill used by the initial black map.
    pub fn lower(&self) -> f64 {
        self.lower
    }
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self {
            stroke: 0.5,
            fill: 0.5,
            lower: 0.3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    default: Rgb,
    zone: BTreeMap<String, Rgb>,
    consumption_ramp: Vec<Rgb>,
    production_ramp: Vec<Rgb>,
    ratio_enr_ramp: Vec<Rgb>,
}

impl ColorConfig {
    pub fn default_color(&self) -> Rgb {
        self.default
    }

    /// Categorical zone color with the default fallback.
    pub fn zone_color(&self, form: &HabitatForm) -> Rgb {
        self.zone.get(form.label()).copied().unwrap_or(self.default)
    }

    pub fn consumption_ramp(&self) -> &[Rgb] {
        &self.consumption_ramp
    }

    pub fn production_ramp(&self) -> &[Rgb] {
        &self.production_ramp
    }

    pub fn ratio_enr_ramp(&self) -> &[Rgb] {
        &self.ratio_enr_ramp
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        let css = |raw: &str| Rgb::from_css(raw).expect("default palette color should parse");
        let mut zone = BTreeMap::new();
        zone.insert("Rural autonome".to_string(), css("lightgreen"));
        zone.insert("Rural périurbain".to_string(), css("lightslategray"));
        zone.insert("Urbain".to_string(), css("darkolivegreen"));
        Self {
            default: Rgb::BLACK,
            zone,
            consumption_ramp: vec![css("#edbb99"), css("#dc7633"), css("#a04000")],
            production_ramp: vec![
                css("antiquewhite"),
                css("lightsalmon"),
                css("sienna"),
                css("darkred"),
            ],
            ratio_enr_ramp: vec![
                css("#e8f6f3"),
                css("#a3e4d7"),
                css("#45b39d"),
                css("#229954"),
                css("#145a32"),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    consumption: ConsumptionThresholds,
    production: ProductionThresholds,
    ratio_enr: Vec<f64>,
}

impl ThresholdConfig {
    pub fn consumption(&self, kind: ConsumptionKind) -> &[f64] {
        match kind {
            ConsumptionKind::Total => &self.consumption.total,
            ConsumptionKind::PerCapita => &self.consumption.per_capita,
        }
    }

    pub fn production(&self, kind: ProductionKind) -> &[f64] {
        match kind {
            ProductionKind::Total => &self.production.total,
            ProductionKind::Bio => &self.production.bio,
            ProductionKind::Eolien => &self.production.eolien,
            ProductionKind::Geo => &self.production.geo,
            ProductionKind::Hydro => &self.production.hydro,
            ProductionKind::Solaire => &self.production.solaire,
            ProductionKind::Other => &self.production.other,
        }
    }

    pub fn ratio_enr(&self) -> &[f64] {
        &self.ratio_enr
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            consumption: ConsumptionThresholds::default(),
            production: ProductionThresholds::default(),
            ratio_enr: vec![17.0, 23.0, 37.0, 100.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsumptionThresholds {
    total: Vec<f64>,
    per_capita: Vec<f64>,
}

impl Default for ConsumptionThresholds {
    fn default() -> Self {
        Self {
            total: vec![421_000.0, 665_000.0],
            per_capita: vec![14.0, 26.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProductionThresholds {
    total: Vec<f64>,
    bio: Vec<f64>,
    eolien: Vec<f64>,
    geo: Vec<f64>,
    hydro: Vec<f64>,
    solaire: Vec<f64>,
    other: Vec<f64>,
}

impl Default for ProductionThresholds {
    fn default() -> Self {
        Self {
            total: vec![115_000.0, 175_000.0, 300_000.0],
            bio: vec![10.0, 9_904.0, 55_324.0],
            eolien: vec![10.0, 45_500.0, 55_077.0],
            geo: vec![15_300.0, 23_240.0, 36_170.0],
            hydro: vec![10.0, 45.0, 2_050.0],
            solaire: vec![1_960.0, 3_730.0, 8_155.0],
            other: vec![4_980.0, 79_350.0, 129_500.0],
        }
    }
}

/// Narrative text of one panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelText {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PanelConfig {
    entries: BTreeMap<String, PanelText>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        let mut insert = |id: &str, title: &str, body: &str| {
            entries.insert(
                id.to_string(),
                PanelText {
                    title: title.to_string(),
                    body: body.to_string(),
                },
            );
        };
        insert(
            "intro",
            "Énergie en région",
            "Un tour guidé de la consommation et de la production d'énergie \
             des intercommunalités de la région, données 2022.",
        );
        insert(
            "presentation",
            "Types d'habitats",
            "Chaque EPCI est classé selon sa forme d'habitat : rural autonome, \
             rural périurbain ou urbain.",
        );
        insert(
            "transition",
            "Vers la consommation",
            "La carte s'éteint un instant avant de passer aux volumes d'énergie.",
        );
        insert(
            "population",
            "Population",
            "Les cercles représentent la part de chaque EPCI dans la population \
             régionale.",
        );
        insert(
            "heatmap",
            "Consommation 2022",
            "Consommation totale et par habitant, en MWh, par intercommunalité.",
        );
        insert(
            "ratioenr",
            "Part d'énergies renouvelables",
            "Ratio entre production renouvelable et consommation en 2022.",
        );
        insert(
            "production",
            "Production 2022",
            "Production d'énergie par filière, avec la prédiction totale 2025 \
             issue du modèle.",
        );
        Self { entries }
    }
}

#[derive(Debug, Clone)]
pub struct VizConfigMetadata {
    path: Option<PathBuf>,
}

impl VizConfigMetadata {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

pub fn load_viz_config_from_env() -> (Arc<VizConfig>, VizConfigMetadata) {
    let override_path = env::var("ATLAS_VIZ_CONFIG_PATH").ok().map(PathBuf::from);

    if let Some(path) = override_path {
        match VizConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "energy_atlas::config",
                    path = %path.display(),
                    "viz_config.loaded=file"
                );
                return (Arc::new(config), VizConfigMetadata::new(Some(path)));
            }
            Err(err) => {
                tracing::warn!(
                    target: "energy_atlas::config",
                    path = %path.display(),
                    error = %err,
                    "viz_config.load_failed"
                );
            }
        }
    }

    let config = VizConfig::builtin();
    tracing::info!(
        target: "energy_atlas::config",
        "viz_config.loaded=builtin"
    );
    (config, VizConfigMetadata::new(None))
}
