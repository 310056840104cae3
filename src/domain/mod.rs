pub mod boundary;
pub mod report;

pub use boundary::FieldBoundary;
pub use report::{BoundaryReport, Extent, totals_line};
