use geo::Polygon;
use std::collections::HashSet;

use crate::geometry::{AreaUnit, convert, polygon_area_in_square_meters, polygon_centroid};

/// A named field boundary as drawn on the map
///
/// `polygon` is `None` until the user has drawn something.
#[derive(Debug, Clone)]
pub struct FieldBoundary {
    pub name: String,
    pub polygon: Option<Polygon<f64>>,
}

impl FieldBoundary {
    pub fn new(name: impl Into<String>, polygon: Polygon<f64>) -> Self {
        Self {
            name: name.into(),
            polygon: Some(polygon),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            polygon: None,
        }
    }

    /// Whether the exterior has at least 3 distinct vertices
    ///
    /// `geo::Polygon` closes every exterior, so two clicked points come back
    /// as a 3-vertex ring that still encloses nothing.
    pub fn is_drawn(&self) -> bool {
        self.distinct_vertex_count() >= 3
    }

    /// Exterior vertices with duplicates (including the closing one) removed
    pub fn distinct_vertex_count(&self) -> usize {
        let Some(polygon) = self.polygon.as_ref() else {
            return 0;
        };

        polygon
            .exterior()
            .coords()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn vertex_count(&self) -> usize {
        self.polygon
            .as_ref()
            .map(|p| p.exterior().0.len())
            .unwrap_or(0)
    }

    pub fn area_in_square_meters(&self) -> f64 {
        self.polygon
            .as_ref()
            .map(polygon_area_in_square_meters)
            .unwrap_or(0.0)
    }

    pub fn area(&self, unit: AreaUnit) -> f64 {
        convert(self.area_in_square_meters(), unit)
    }

    /// (lat, lon) vertex mean of the exterior
    pub fn centroid(&self) -> (f64, f64) {
        self.polygon
            .as_ref()
            .map(polygon_centroid)
            .unwrap_or((0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn plot() -> FieldBoundary {
        FieldBoundary::new(
            "north plot",
            polygon![
                (x: 0.0, y: 0.0),
                (x: 0.0, y: 0.01),
                (x: 0.01, y: 0.01),
                (x: 0.01, y: 0.0),
                (x: 0.0, y: 0.0)
            ],
        )
    }

    #[test]
    fn test_missing_boundary_is_degenerate() {
        let boundary = FieldBoundary::missing("empty");
        assert!(!boundary.is_drawn());
        assert_eq!(boundary.vertex_count(), 0);
        assert_eq!(boundary.area_in_square_meters(), 0.0);
        assert_eq!(boundary.area(AreaUnit::Acres), 0.0);
        assert_eq!(boundary.centroid(), (0.0, 0.0));
    }

    #[test]
    fn test_empty_polygon_is_degenerate() {
        let empty: Polygon<f64> = Polygon::new(geo::LineString::new(vec![]), vec![]);
        let boundary = FieldBoundary::new("empty", empty);
        assert!(!boundary.is_drawn());
        assert_eq!(boundary.area_in_square_meters(), 0.0);
        assert_eq!(boundary.centroid(), (0.0, 0.0));
    }

    #[test]
    fn test_two_clicked_points_are_not_drawn() {
        let line = FieldBoundary::new(
            "line",
            polygon![(x: 0.0, y: 0.0), (x: 0.01, y: 0.01)],
        );
        assert_eq!(line.vertex_count(), 3);
        assert_eq!(line.distinct_vertex_count(), 2);
        assert!(!line.is_drawn());
        assert_eq!(line.area_in_square_meters(), 0.0);
    }

    #[test]
    fn test_repeated_vertices_are_not_drawn() {
        let stacked = FieldBoundary::new(
            "stacked",
            polygon![
                (x: 0.0, y: 0.0),
                (x: 0.01, y: 0.01),
                (x: 0.01, y: 0.01),
                (x: 0.0, y: 0.0)
            ],
        );
        assert_eq!(stacked.vertex_count(), 4);
        assert!(!stacked.is_drawn());

        let triangle = FieldBoundary::new(
            "triangle",
            polygon![(x: 0.0, y: 0.0), (x: 0.01, y: 0.0), (x: 0.0, y: 0.01)],
        );
        assert_eq!(triangle.distinct_vertex_count(), 3);
        assert!(triangle.is_drawn());
    }

    #[test]
    fn test_drawn_boundary() {
        let boundary = plot();
        assert!(boundary.is_drawn());
        assert_eq!(boundary.vertex_count(), 5);

        let square_meters = boundary.area_in_square_meters();
        assert!(square_meters > 1.2e6 && square_meters < 1.3e6);
        assert!((boundary.area(AreaUnit::Acres) - square_meters * 0.000247105).abs() < 1e-9);

        let (lat, lon) = boundary.centroid();
        assert!((lat - 0.004).abs() < 1e-12);
        assert!((lon - 0.004).abs() < 1e-12);
    }
}
