pub mod document;
pub mod parser;

pub use document::{Document, Feature, Geometry};
pub use parser::{BoundaryError, parse_boundaries, read_boundaries};
