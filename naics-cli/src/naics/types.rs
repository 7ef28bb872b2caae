//! Core record type shared by every pipeline stage

use serde::{Deserialize, Serialize};

/// Hierarchy depth of a sector record
pub const SECTOR_LEVEL: u8 = 2;
/// Hierarchy depth of a category record
pub const CATEGORY_LEVEL: u8 = 3;
/// Hierarchy depth of a facility type record
pub const FACILITY_TYPE_LEVEL: u8 = 6;

/// One entry in the three-level NAICS hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaicsCode {
    /// Canonical identifier: all digits, except the synthetic "31-33" sector
    pub code: String,
    /// Human-readable label
    pub title: String,
    /// Hierarchy depth: 2 = sector, 3 = category, 6 = facility type
    pub level: u8,
    /// Code of the immediate ancestor; empty for sectors
    pub parent: String,
}

impl NaicsCode {
    pub fn sector(code: impl Into<String>, title: impl Into<String>) -> Self {
        NaicsCode {
            code: code.into(),
            title: title.into(),
            level: SECTOR_LEVEL,
            parent: String::new(),
        }
    }

    pub fn category(
        code: impl Into<String>,
        title: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        NaicsCode {
            code: code.into(),
            title: title.into(),
            level: CATEGORY_LEVEL,
            parent: parent.into(),
        }
    }

    pub fn facility_type(
        code: impl Into<String>,
        title: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        NaicsCode {
            code: code.into(),
            title: title.into(),
            level: FACILITY_TYPE_LEVEL,
            parent: parent.into(),
        }
    }
}
