use serde::Deserialize;
use serde_json::{Map, Value};

/// `[lon, lat, ...]`
pub type Position = Vec<f64>;
pub type RingPositions = Vec<Position>;
pub type PolygonPositions = Vec<RingPositions>;

/// Top-level GeoJSON document as emitted by the drawing widget
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Document {
    FeatureCollection {
        features: Vec<Feature>,
    },
    Feature(Feature),
    Polygon {
        #[serde(default)]
        coordinates: PolygonPositions,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Vec<PolygonPositions>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// The `name` property, if it is a non-empty string
    pub fn name(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        #[serde(default)]
        coordinates: PolygonPositions,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Vec<PolygonPositions>,
    },
    #[serde(other)]
    Unsupported,
}
