use serde::Serialize;

use super::FieldBoundary;
use crate::format::{format_area, format_area_with_unit, format_coordinates};
use crate::geometry::{AreaUnit, bounding_box, convert};

/// Bounding box in degrees, for fitting a map view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extent {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// Everything a caller needs to show one boundary
#[derive(Debug, Clone, Serialize)]
pub struct BoundaryReport {
    pub name: String,
    pub unit: AreaUnit,
    pub area: f64,
    pub area_square_meters: f64,
    pub area_display: String,
    pub centroid: (f64, f64),
    pub centroid_display: String,
    pub vertices: usize,
    pub drawn: bool,
    pub extent: Option<Extent>,
}

impl BoundaryReport {
    pub fn from_boundary(boundary: &FieldBoundary, unit: AreaUnit) -> Self {
        let area_square_meters = boundary.area_in_square_meters();
        let area = convert(area_square_meters, unit);
        let (lat, lon) = boundary.centroid();

        let extent = boundary
            .polygon
            .as_ref()
            .and_then(|p| bounding_box(p.exterior()))
            .map(|rect| Extent {
                min_lon: rect.min().x,
                min_lat: rect.min().y,
                max_lon: rect.max().x,
                max_lat: rect.max().y,
            });

        Self {
            name: boundary.name.clone(),
            unit,
            area,
            area_square_meters,
            area_display: format_area(area),
            centroid: (lat, lon),
            centroid_display: format_coordinates(lat, lon),
            vertices: boundary.vertex_count(),
            drawn: boundary.is_drawn(),
            extent,
        }
    }

    /// One line of text output
    pub fn summary_line(&self) -> String {
        if self.drawn {
            format!(
                "{}: {} {} | center {} | {} vertices",
                self.name,
                self.area_display,
                self.unit.label(),
                self.centroid_display,
                self.vertices
            )
        } else {
            format!(
                "{}: {} {} (boundary not yet drawn)",
                self.name,
                self.area_display,
                self.unit.label()
            )
        }
    }
}

/// Sum line for several reports, `None` for fewer than two
///
/// Square meters are appended unless they are already the display unit.
pub fn totals_line(reports: &[BoundaryReport], unit: AreaUnit) -> Option<String> {
    if reports.len() < 2 {
        return None;
    }

    let total: f64 = reports.iter().map(|r| r.area).sum();
    let mut line = format!(
        "Total: {} across {} boundaries",
        format_area_with_unit(total, unit),
        reports.len()
    );
    if unit != AreaUnit::SquareMeters {
        let square_meters: f64 = reports.iter().map(|r| r.area_square_meters).sum();
        line.push_str(&format!(" ({} m²)", format_area(square_meters)));
    }

    Some(line)
}
