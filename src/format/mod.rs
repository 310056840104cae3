//! Human-readable rendering of areas and coordinates

use crate::geometry::AreaUnit;

/// Fixed two-decimal area, without a unit label
pub fn format_area(value: f64) -> String {
    format!("{:.2}", value)
}

/// `"{lat}°, {lng}°"` with six decimals each
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.6}°, {:.6}°", lat, lng)
}

pub fn format_area_with_unit(value: f64, unit: AreaUnit) -> String {
    format!("{} {}", format_area(value), unit.label())
}
