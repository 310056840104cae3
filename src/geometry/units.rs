use geo::LineString;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::area::area_in_square_meters;

pub const SQUARE_METERS_TO_ACRES: f64 = 0.000247105;
pub const SQUARE_METERS_TO_HECTARES: f64 = 0.0001;

/// Display unit for an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    Acres,
    Hectares,
    #[default]
    SquareMeters,
}

/// Conversion strategy per unit: (unit, canonical tag, factor from m²)
const CONVERSIONS: &[(AreaUnit, &str, f64)] = &[
    (AreaUnit::Acres, "acres", SQUARE_METERS_TO_ACRES),
    (AreaUnit::Hectares, "hectares", SQUARE_METERS_TO_HECTARES),
    (AreaUnit::SquareMeters, "square_meters", 1.0),
];

impl AreaUnit {
    /// Parse a unit tag, returning `None` for anything unrecognized
    ///
    /// Only the exact tags `acres`, `hectares` and `square_meters` match.
    pub fn parse_tag(tag: &str) -> Option<AreaUnit> {
        CONVERSIONS
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(unit, _, _)| *unit)
    }

    /// Parse a unit tag, falling back to square meters when unrecognized
    pub fn from_tag(tag: &str) -> AreaUnit {
        Self::parse_tag(tag).unwrap_or_default()
    }

    pub fn tag(self) -> &'static str {
        self.strategy().1
    }

    /// Short label appended after a formatted value
    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::Acres => "acres",
            AreaUnit::Hectares => "ha",
            AreaUnit::SquareMeters => "m²",
        }
    }

    fn factor(self) -> f64 {
        self.strategy().2
    }

    fn strategy(self) -> &'static (AreaUnit, &'static str, f64) {
        CONVERSIONS
            .iter()
            .find(|(unit, _, _)| *unit == self)
            .unwrap_or(&CONVERSIONS[2])
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rescale an area in square meters to `unit`. No rounding.
pub fn convert(square_meters: f64, unit: AreaUnit) -> f64 {
    square_meters * unit.factor()
}

/// Rescale by unit tag; unknown tags are treated as square meters
pub fn convert_tag(square_meters: f64, tag: &str) -> f64 {
    convert(square_meters, AreaUnit::from_tag(tag))
}

/// Spherical ring area expressed in `unit`
pub fn compute_area(ring: &LineString<f64>, unit: AreaUnit) -> f64 {
    convert(area_in_square_meters(ring), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn test_convert_acres_and_hectares() {
        for x in [0.0, 1.0, 4046.86, 1_236_000.0] {
            assert_eq!(convert(x, AreaUnit::Acres), x * 0.000247105);
            assert_eq!(convert(x, AreaUnit::Hectares), x * 0.0001);
            assert_eq!(convert(x, AreaUnit::SquareMeters), x);
        }
    }

    #[test]
    fn test_unknown_tag_is_identity() {
        assert_eq!(convert_tag(1234.5, "square_meters"), 1234.5);
        assert_eq!(convert_tag(1234.5, "furlongs"), 1234.5);
        assert_eq!(convert_tag(1234.5, ""), 1234.5);
        assert_eq!(convert_tag(10_000.0, "hectares"), 1.0);
    }

    #[test]
    fn test_near_miss_tags_are_identity() {
        let x = 10_000.0;
        for tag in ["ha", "ac", "m2", "Acres", "HECTARES", " acres ", "hectares\n"] {
            assert_eq!(convert_tag(x, tag), x, "tag {tag:?}");
        }
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(AreaUnit::parse_tag("acres"), Some(AreaUnit::Acres));
        assert_eq!(AreaUnit::parse_tag("hectares"), Some(AreaUnit::Hectares));
        assert_eq!(AreaUnit::parse_tag("square_meters"), Some(AreaUnit::SquareMeters));
        assert_eq!(AreaUnit::parse_tag(" Hectares "), None);
        assert_eq!(AreaUnit::parse_tag("ha"), None);
        assert_eq!(AreaUnit::parse_tag("bigha"), None);
        assert_eq!(AreaUnit::from_tag("bigha"), AreaUnit::SquareMeters);
    }

    #[test]
    fn test_tag_round_trips_through_parse() {
        for unit in [AreaUnit::Acres, AreaUnit::Hectares, AreaUnit::SquareMeters] {
            assert_eq!(AreaUnit::parse_tag(unit.tag()), Some(unit));
        }
        assert_eq!(AreaUnit::Hectares.to_string(), "hectares");
    }

    #[test]
    fn test_compute_area_in_hectares() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.01),
            (x: 0.01, y: 0.01),
            (x: 0.01, y: 0.0),
            (x: 0.0, y: 0.0)
        ];
        let square_meters = area_in_square_meters(&ring);
        let hectares = compute_area(&ring, AreaUnit::Hectares);

        assert!(square_meters > 0.0);
        assert!((hectares - square_meters * 0.0001).abs() < 1e-9);
        assert!(hectares > 120.0 && hectares < 130.0);
    }
}
