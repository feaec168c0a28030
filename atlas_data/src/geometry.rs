use serde::{Deserialize, Serialize};

/// Axis-aligned geographic bounds in (longitude, latitude) degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn from_point(lon: f64, lat: f64) -> Self {
        Self {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        }
    }

    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn union(&mut self, other: &Bounds) {
        self.extend(other.min_lon, other.min_lat);
        self.extend(other.max_lon, other.max_lat);
    }

    /// Midpoint of the bounds, the anchor used for overlay markers.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Polygonal outline of a region, reduced to exterior rings.
///
/// Interior rings (holes) carry no styling information for a filled
/// choropleth at the scales this atlas targets, so they are dropped at
/// load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGeometry {
    rings: Vec<Vec<(f64, f64)>>,
}

impl RegionGeometry {
    /// Builds a geometry from exterior rings. Returns `None` when no
    /// ring carries at least three vertices.
    pub fn from_rings(rings: Vec<Vec<(f64, f64)>>) -> Option<Self> {
        let rings: Vec<Vec<(f64, f64)>> = rings
            .into_iter()
            .filter(|ring| ring.len() >= 3)
            .collect();
        if rings.is_empty() {
            None
        } else {
            Some(Self { rings })
        }
    }

    pub fn rings(&self) -> &[Vec<(f64, f64)>] {
        &self.rings
    }

    pub fn bounds(&self) -> Bounds {
        let (first_lon, first_lat) = self.rings[0][0];
        let mut bounds = Bounds::from_point(first_lon, first_lat);
        for ring in &self.rings {
            for &(lon, lat) in ring {
                bounds.extend(lon, lat);
            }
        }
        bounds
    }

    /// Marker anchor: the center of the feature bounds.
    pub fn centroid(&self) -> (f64, f64) {
        self.bounds().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_union_covers_both_inputs() {
        let mut a = Bounds::from_point(5.0, 48.0);
        a.extend(6.0, 49.0);
        let mut b = Bounds::from_point(6.5, 47.5);
        b.extend(7.0, 48.5);
        a.union(&b);
        assert_eq!(a.min_lon, 5.0);
        assert_eq!(a.max_lon, 7.0);
        assert_eq!(a.min_lat, 47.5);
        assert_eq!(a.max_lat, 49.0);
    }

    #[test]
    fn centroid_is_bounds_center() {
        let geometry = RegionGeometry::from_rings(vec![vec![
            (5.0, 48.0),
            (7.0, 48.0),
            (7.0, 49.0),
            (5.0, 49.0),
        ]])
        .unwrap();
        assert_eq!(geometry.centroid(), (6.0, 48.5));
    }

    #[test]
    fn degenerate_rings_are_rejected() {
        assert!(RegionGeometry::from_rings(vec![vec![(5.0, 48.0), (6.0, 48.0)]]).is_none());
        assert!(RegionGeometry::from_rings(vec![]).is_none());
    }
}
