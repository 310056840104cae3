use geo::{LineString, Polygon};

/// Mean Earth radius in meters (IUGG)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Spherical area of a ring of (lon, lat) degree vertices, in square meters
///
/// Uses the Chamberlain-Duquette approximation: for each vertex the longitude
/// span of its two neighbours is weighted by the sine of its latitude. The
/// ring is walked cyclically, so open and closed rings give the same result.
///
/// Rings with fewer than 3 vertices have no area and return `0.0`.
/// NaN coordinates are not filtered and yield NaN.
pub fn area_in_square_meters(ring: &LineString<f64>) -> f64 {
    signed_ring_area(ring).abs()
}

/// Signed variant of [`area_in_square_meters`]
///
/// Positive for counter-clockwise rings, negative for clockwise ones.
pub fn signed_ring_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    let n = coords.len();
    if n < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let prev = coords[(i + n - 1) % n];
        let current = coords[i];
        let next = coords[(i + 1) % n];

        total += (next.x.to_radians() - prev.x.to_radians()) * current.y.to_radians().sin();
    }

    -total * EARTH_MEAN_RADIUS_M * EARTH_MEAN_RADIUS_M / 2.0
}

/// Area of a polygon with holes, in square meters
///
/// Interior rings are subtracted from the exterior. A hole set larger than
/// the exterior clamps to zero.
pub fn polygon_area_in_square_meters(polygon: &Polygon<f64>) -> f64 {
    let outer = area_in_square_meters(polygon.exterior());
    let holes: f64 = polygon.interiors().iter().map(area_in_square_meters).sum();

    (outer - holes).max(0.0)
}
