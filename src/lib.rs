pub mod citygml;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod stl;
pub mod tessellation;

pub use error::{Citygml2StlError, Result};
