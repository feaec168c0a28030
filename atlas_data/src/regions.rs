use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use geojson::{GeoJson, Value};
use thiserror::Error;

use crate::feature::{RegionFeature, RegionProperties};
use crate::geometry::{Bounds, RegionGeometry};

/// Small embedded slice of the regional dataset, enough to drive the
/// tour without the full published GeoJSON next to the binary.
pub const BUILTIN_REGIONS: &str = include_str!("data/regions.geojson");

/// The static feature collection the whole presentation runs over.
#[derive(Debug, Clone)]
pub struct RegionCollection {
    features: Vec<RegionFeature>,
    bounds: Bounds,
}

impl RegionCollection {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            RegionCollection::from_geojson_str(BUILTIN_REGIONS)
                .expect("builtin regions dataset should parse"),
        )
    }

    pub fn from_geojson_str(raw: &str) -> Result<Self, RegionDataError> {
        let geojson: GeoJson = raw.parse()?;
        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(RegionDataError::NotAFeatureCollection),
        };

        let mut features = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let properties = feature
                .properties
                .ok_or(RegionDataError::MissingProperties { index })?;
            let properties: RegionProperties =
                serde_json::from_value(serde_json::Value::Object(properties))
                    .map_err(|source| RegionDataError::Properties { index, source })?;
            let geometry = feature
                .geometry
                .ok_or_else(|| RegionDataError::MissingGeometry {
                    name: properties.nom_complet.clone(),
                })?;
            let rings = exterior_rings(&geometry.value);
            let geometry = RegionGeometry::from_rings(rings).ok_or_else(|| {
                RegionDataError::UnsupportedGeometry {
                    name: properties.nom_complet.clone(),
                }
            })?;
            features.push(RegionFeature::new(properties, geometry));
        }

        if features.is_empty() {
            return Err(RegionDataError::Empty);
        }

        let mut bounds = features[0].bounds();
        for feature in &features[1..] {
            bounds.union(&feature.bounds());
        }

        Ok(Self { features, bounds })
    }

    pub fn from_file(path: &Path) -> Result<Self, RegionDataError> {
        let contents = fs::read_to_string(path).map_err(|source| RegionDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        RegionCollection::from_geojson_str(&contents)
    }

    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Union of all feature bounds; the view is fit to this after load.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

fn exterior_rings(value: &Value) -> Vec<Vec<(f64, f64)>> {
    fn ring_points(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
        ring.iter()
            .filter(|position| position.len() >= 2)
            .map(|position| (position[0], position[1]))
            .collect()
    }

    match value {
        Value::Polygon(rings) => rings.first().map(|ring| ring_points(ring)).into_iter().collect(),
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .filter_map(|rings| rings.first().map(|ring| ring_points(ring)))
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Error)]
pub enum RegionDataError {
    #[error("failed to parse regions GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error("failed to read regions from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("regions input is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
    #[error("feature #{index} carries no properties")]
    MissingProperties { index: usize },
    #[error("feature #{index} has an invalid property bag: {source}")]
    Properties {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("feature {name:?} carries no geometry")]
    MissingGeometry { name: String },
    #[error("feature {name:?} has no polygonal geometry")]
    UnsupportedGeometry { name: String },
    #[error("regions dataset contains no features")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct RegionsMetadata {
    path: Option<PathBuf>,
}

impl RegionsMetadata {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

pub fn load_regions_from_env() -> (Arc<RegionCollection>, RegionsMetadata) {
    let override_path = env::var("ATLAS_REGIONS_PATH").ok().map(PathBuf::from);

    if let Some(path) = override_path {
        match RegionCollection::from_file(&path) {
            Ok(regions) => {
                tracing::info!(
                    target: "energy_atlas::data",
                    path = %path.display(),
                    features = regions.len(),
                    "regions.loaded=file"
                );
                return (Arc::new(regions), RegionsMetadata::new(Some(path)));
            }
            Err(err) => {
                tracing::warn!(
                    target: "energy_atlas::data",
                    path = %path.display(),
                    error = %err,
                    "regions.load_failed"
                );
            }
        }
    }

    let regions = RegionCollection::builtin();
    tracing::info!(
        target: "energy_atlas::data",
        features = regions.len(),
        "regions.loaded=builtin"
    );
    (regions, RegionsMetadata::new(None))
}
