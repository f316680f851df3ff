pub mod receipt;

pub use receipt::{Item, PointsResponse, ProcessResponse, Receipt};
