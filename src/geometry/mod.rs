pub mod area;
pub mod centroid;
pub mod units;

pub use area::{area_in_square_meters, polygon_area_in_square_meters, signed_ring_area};
pub use centroid::{bounding_box, centroid, polygon_centroid};
pub use units::{AreaUnit, compute_area, convert, convert_tag};
