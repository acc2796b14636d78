//! Loading and validation of house-rule data.

pub mod load;

pub use load::*;
