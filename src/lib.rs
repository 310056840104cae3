//! fieldarea - Geodetic area and center estimates for field boundaries drawn on a map

pub mod config;
pub mod domain;
pub mod format;
pub mod geojson;
pub mod geometry;
