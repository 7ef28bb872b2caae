//! Workbook input for the classification pipeline

mod reader;

pub use reader::{RawRow, SheetLayout, read_workbook};
