use geo::{BoundingRect, LineString, Polygon, Rect};

/// Mean of all ring vertices as (lat, lon)
///
/// Every vertex counts once, so the closing vertex of a closed ring is
/// counted twice. This is a map-centering estimate, not an area centroid.
/// An empty ring yields `(0.0, 0.0)`.
pub fn centroid(ring: &LineString<f64>) -> (f64, f64) {
    let count = ring.0.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let (sum_lon, sum_lat) = ring
        .coords()
        .fold((0.0, 0.0), |(lon, lat), c| (lon + c.x, lat + c.y));

    (sum_lat / count as f64, sum_lon / count as f64)
}

/// Vertex mean of the exterior ring; holes are ignored
pub fn polygon_centroid(polygon: &Polygon<f64>) -> (f64, f64) {
    centroid(polygon.exterior())
}

/// Extent of the ring in (lon, lat) degrees, `None` when empty
pub fn bounding_box(ring: &LineString<f64>) -> Option<Rect<f64>> {
    ring.bounding_rect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn test_empty_ring_centroid() {
        let ring: LineString<f64> = LineString::new(vec![]);
        assert_eq!(centroid(&ring), (0.0, 0.0));
        assert!(bounding_box(&ring).is_none());
    }

    #[test]
    fn test_closed_square_is_pulled_toward_first_vertex() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.01),
            (x: 0.01, y: 0.01),
            (x: 0.01, y: 0.0),
            (x: 0.0, y: 0.0)
        ];
        let (lat, lon) = centroid(&ring);

        assert!((lat - 0.004).abs() < 1e-12);
        assert!((lon - 0.004).abs() < 1e-12);
        assert!(lat < 0.005 && lon < 0.005);
    }

    #[test]
    fn test_open_square_is_exact() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.01),
            (x: 0.01, y: 0.01),
            (x: 0.01, y: 0.0)
        ];
        let (lat, lon) = centroid(&ring);

        assert!((lat - 0.005).abs() < 1e-12);
        assert!((lon - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_returns_lat_first() {
        let ring = line_string![(x: 78.0, y: 20.0), (x: 80.0, y: 22.0)];
        assert_eq!(centroid(&ring), (21.0, 79.0));
    }

    #[test]
    fn test_bounding_box() {
        let ring = line_string![(x: 78.0, y: 20.0), (x: 80.0, y: 22.0), (x: 79.0, y: 19.5)];
        let rect = bounding_box(&ring).unwrap();

        assert_eq!(rect.min().x, 78.0);
        assert_eq!(rect.min().y, 19.5);
        assert_eq!(rect.max().x, 80.0);
        assert_eq!(rect.max().y, 22.0);
    }
}
