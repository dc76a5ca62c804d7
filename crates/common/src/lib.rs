//! Types and helpers shared by the cheque service crates.

pub mod types;
pub mod utils;
