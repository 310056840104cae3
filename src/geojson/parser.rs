use geo::{Coord, LineString, Polygon};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::document::{Document, Feature, Geometry, PolygonPositions, RingPositions};
use crate::domain::FieldBoundary;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("position {index} of ring {ring} needs at least [lon, lat], got {len} values")]
    InvalidPosition { ring: usize, index: usize, len: usize },
    #[error("unsupported GeoJSON type, expected Polygon, MultiPolygon, Feature or FeatureCollection")]
    Unsupported,
}

/// Parse a GeoJSON document into named field boundaries
///
/// # Naming
/// Features with a `name` property keep it. Everything else is called
/// `default_name`, or `default_name #n` when the document holds several
/// boundaries. Each part of a MultiPolygon becomes its own boundary.
pub fn parse_boundaries(
    json: &str,
    default_name: &str,
) -> Result<Vec<FieldBoundary>, BoundaryError> {
    let document: Document = serde_json::from_str(json)?;

    let mut parts: Vec<(Option<String>, Option<Polygon<f64>>)> = Vec::new();
    match document {
        Document::FeatureCollection { features } => {
            for feature in &features {
                collect_feature(feature, &mut parts)?;
            }
        }
        Document::Feature(feature) => collect_feature(&feature, &mut parts)?,
        Document::Polygon { coordinates } => {
            parts.push((None, Some(to_polygon(&coordinates)?)))
        }
        Document::MultiPolygon { coordinates } => {
            collect_multi_polygon(None, &coordinates, &mut parts)?
        }
        Document::Unsupported => return Err(BoundaryError::Unsupported),
    }

    let total = parts.len();
    let boundaries = parts
        .into_iter()
        .enumerate()
        .map(|(i, (name, polygon))| {
            let name = name.unwrap_or_else(|| {
                if total == 1 {
                    default_name.to_string()
                } else {
                    format!("{} #{}", default_name, i + 1)
                }
            });
            match polygon {
                Some(p) => FieldBoundary::new(name, p),
                None => FieldBoundary::missing(name),
            }
        })
        .collect();

    Ok(boundaries)
}

/// Read and parse a GeoJSON file; `-` reads stdin
pub fn read_boundaries(path: &Path) -> Result<Vec<FieldBoundary>, BoundaryError> {
    let io_error = |source| BoundaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    let default_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| *s != "-")
        .unwrap_or("boundary");

    parse_boundaries(&contents, default_name)
}

fn collect_feature(
    feature: &Feature,
    parts: &mut Vec<(Option<String>, Option<Polygon<f64>>)>,
) -> Result<(), BoundaryError> {
    let name = feature.name().map(str::to_string);

    match &feature.geometry {
        None => parts.push((name, None)),
        Some(Geometry::Polygon { coordinates }) => {
            parts.push((name, Some(to_polygon(coordinates)?)))
        }
        Some(Geometry::MultiPolygon { coordinates }) => {
            collect_multi_polygon(name, coordinates, parts)?
        }
        Some(Geometry::Unsupported) => return Err(BoundaryError::Unsupported),
    }

    Ok(())
}

fn collect_multi_polygon(
    name: Option<String>,
    polygons: &[PolygonPositions],
    parts: &mut Vec<(Option<String>, Option<Polygon<f64>>)>,
) -> Result<(), BoundaryError> {
    if polygons.is_empty() {
        parts.push((name, None));
        return Ok(());
    }

    let numbered = polygons.len() > 1;
    for (i, coordinates) in polygons.iter().enumerate() {
        let part_name = match &name {
            Some(n) if numbered => Some(format!("{} #{}", n, i + 1)),
            other => other.clone(),
        };
        parts.push((part_name, Some(to_polygon(coordinates)?)));
    }

    Ok(())
}

/// First ring is the exterior, the rest are holes
fn to_polygon(rings: &PolygonPositions) -> Result<Polygon<f64>, BoundaryError> {
    let mut converted = rings
        .iter()
        .enumerate()
        .map(|(i, ring)| to_line_string(i, ring))
        .collect::<Result<Vec<_>, _>>()?;

    if converted.is_empty() {
        return Ok(Polygon::new(LineString::new(Vec::new()), Vec::new()));
    }

    let exterior = converted.remove(0);
    Ok(Polygon::new(exterior, converted))
}

fn to_line_string(
    ring: usize,
    positions: &RingPositions,
) -> Result<LineString<f64>, BoundaryError> {
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| match position.as_slice() {
            [lon, lat, ..] => Ok(Coord { x: *lon, y: *lat }),
            _ => Err(BoundaryError::InvalidPosition {
                ring,
                index,
                len: position.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}
