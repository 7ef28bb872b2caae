//! In-memory lookup table and its query operations
//!
//! This is the typed counterpart of the generated artifacts: the same three
//! tables and four operations, loadable from the JSON data file so consumers
//! (and the `resolve`/`describe` commands) never re-read the workbook.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::naics::types::NaicsCode;

/// Fallback returned by [`NaicsTable::describe`] for codes it cannot chain
pub const UNKNOWN_CODE: &str = "Unknown NAICS code";

/// Error returned when a sector/category/type triple does not chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCombination {
    pub sector: String,
    pub category: String,
    pub type_code: String,
}

impl std::fmt::Display for InvalidCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid NAICS code combination: {} / {} / {}",
            self.sector, self.category, self.type_code
        )
    }
}

impl std::error::Error for InvalidCombination {}

/// The three flat tables, in emission order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaicsTable {
    pub sectors: Vec<NaicsCode>,
    pub categories: Vec<NaicsCode>,
    pub facility_types: Vec<NaicsCode>,
}

impl NaicsTable {
    /// All categories whose parent is the given sector code
    pub fn categories_by_sector(&self, sector_code: &str) -> Vec<&NaicsCode> {
        self.categories
            .iter()
            .filter(|c| c.parent == sector_code)
            .collect()
    }

    /// All facility types whose parent is the given category code
    pub fn types_by_category(&self, category_code: &str) -> Vec<&NaicsCode> {
        self.facility_types
            .iter()
            .filter(|t| t.parent == category_code)
            .collect()
    }

    /// Validate a sector/category/type triple against the parent chain and
    /// return the 6-digit type code unchanged
    pub fn resolve_code(
        &self,
        sector: &str,
        category: &str,
        type_code: &str,
    ) -> Result<&str, InvalidCombination> {
        let invalid = || InvalidCombination {
            sector: sector.to_string(),
            category: category.to_string(),
            type_code: type_code.to_string(),
        };

        let sector_rec = self
            .sectors
            .iter()
            .find(|s| s.code == sector)
            .ok_or_else(invalid)?;
        let category_rec = self
            .categories
            .iter()
            .find(|c| c.code == category && c.parent == sector_rec.code)
            .ok_or_else(invalid)?;
        let type_rec = self
            .facility_types
            .iter()
            .find(|t| t.code == type_code && t.parent == category_rec.code)
            .ok_or_else(invalid)?;

        Ok(&type_rec.code)
    }

    /// Full "sector > category > type" chain for a facility type code, or the
    /// fixed fallback string. Never fails.
    pub fn describe(&self, type_code: &str) -> String {
        let Some(facility_type) = self.facility_types.iter().find(|t| t.code == type_code)
        else {
            return UNKNOWN_CODE.to_string();
        };

        let category = self.categories.iter().find(|c| c.code == facility_type.parent);
        let sector =
            category.and_then(|c| self.sectors.iter().find(|s| s.code == c.parent));

        match (sector, category) {
            (Some(sector), Some(category)) => {
                format!("{} > {} > {}", sector.title, category.title, facility_type.title)
            }
            _ => UNKNOWN_CODE.to_string(),
        }
    }

    /// Check referential closure and code uniqueness before emission
    pub fn validate(&self) -> Result<()> {
        let sector_codes: HashSet<&str> = self.sectors.iter().map(|s| s.code.as_str()).collect();
        if sector_codes.len() != self.sectors.len() {
            bail!("Duplicate sector codes in classified data");
        }

        let category_codes: HashSet<&str> =
            self.categories.iter().map(|c| c.code.as_str()).collect();
        if category_codes.len() != self.categories.len() {
            bail!("Duplicate category codes in classified data");
        }

        for category in &self.categories {
            if !sector_codes.contains(category.parent.as_str()) {
                bail!(
                    "Category {} references unknown sector '{}'",
                    category.code,
                    category.parent
                );
            }
        }
        for facility_type in &self.facility_types {
            if !category_codes.contains(facility_type.parent.as_str()) {
                bail!(
                    "Facility type {} references unknown category '{}'",
                    facility_type.code,
                    facility_type.parent
                );
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize NAICS tables")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse NAICS data file")
    }

    /// Load the table from a generated JSON data file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read NAICS data file: {}", path.display()))?;
        Self::from_json(&text)
    }
}

/// Small closed table shared by tests across the pipeline
#[cfg(test)]
pub(crate) fn sample_table() -> NaicsTable {
    NaicsTable {
        sectors: vec![
            NaicsCode::sector("11", "Agriculture, forestry, fishing and hunting"),
            NaicsCode::sector("31-33", "Manufacturing"),
        ],
        categories: vec![
            NaicsCode::category("111", "Crop Production", "11"),
            NaicsCode::category("311", "Food Manufacturing", "31-33"),
        ],
        facility_types: vec![
            NaicsCode::facility_type("111110", "Soybean Farming", "111"),
            NaicsCode::facility_type("311111", "Dog and Cat Food Manufacturing", "311"),
        ],
    }
}
