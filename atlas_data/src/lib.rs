//! Dataset contracts for the Energy Atlas guided tour.
//!
//! Holds the region feature model (property bag, habitat forms, metric
//! identifiers) and the GeoJSON loading path, without depending on the
//! presentation engine in `atlas_core`.

mod feature;
mod geometry;
mod metric;
mod regions;

pub use feature::{HabitatForm, RegionFeature, RegionProperties};
pub use geometry::{Bounds, RegionGeometry};
pub use metric::{ConsumptionKind, Metric, ProductionKind};
pub use regions::{
    load_regions_from_env, RegionCollection, RegionDataError, RegionsMetadata, BUILTIN_REGIONS,
};
