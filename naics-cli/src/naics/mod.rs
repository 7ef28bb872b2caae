//! NAICS classification pipeline
//!
//! Reads the census classification workbook into three flat code tables
//! (sectors, categories, facility types) and emits the lookup artifacts
//! consumed by the facility application.

pub mod classify;
pub mod emit;
pub mod excel;
pub mod normalize;
pub mod table;
pub mod types;

pub use table::{InvalidCombination, NaicsTable};
pub use types::NaicsCode;
