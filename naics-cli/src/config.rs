//! Generator configuration
//!
//! The sector allow-list and the canonical display titles are versioned data,
//! not logic: a future NAICS revision year should only need a new config file,
//! never a code change. All fields default to the 2022 standard, so running
//! without a config file reproduces the current tables.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::naics::excel::SheetLayout;

pub const DEFAULT_WORKBOOK: &str = "attached_assets/NAICS Lookup.xlsx";
pub const DEFAULT_SHEET: &str = "2022 NAICS Structure";
pub const DEFAULT_MODULE_OUT: &str = "shared/naics_data.rs";
pub const DEFAULT_DATA_OUT: &str = "shared/naics-data.json";

/// Sector codes retained by the facility application. 31/32/33 are the
/// manufacturing sub-sectors, collapsed into one "31-33" record downstream.
const ALLOWED_SECTORS: [&str; 9] = ["11", "21", "22", "23", "31", "32", "33", "48", "56"];

/// Canonical display titles, keyed by emitted sector code.
const SECTOR_TITLES: [(&str, &str); 7] = [
    ("11", "Agriculture, forestry, fishing and hunting"),
    ("21", "Mining, quarrying, and oil and gas extraction"),
    ("22", "Utilities"),
    ("23", "Construction"),
    ("31-33", "Manufacturing"),
    ("48", "Transportation and warehousing"),
    (
        "56",
        "Administrative and support, waste management and remediation services",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path to the classification workbook
    pub workbook: PathBuf,
    /// Worksheet to read
    pub sheet: String,
    /// Physical layout of the worksheet
    pub layout: SheetLayout,
    /// Where to write the generated Rust module
    pub module_out: PathBuf,
    /// Where to write the JSON data file
    pub data_out: PathBuf,
    /// 2-digit sector codes to retain (descendants follow by prefix)
    pub allowed_sectors: Vec<String>,
    /// Strip trailing revision markers and surrounding whitespace from titles
    pub clean_titles: bool,
    /// Sort each emitted table alphabetically by title
    pub sort_by_title: bool,
    /// Replace workbook sector titles with the canonical display titles
    pub canonical_sector_titles: bool,
    /// Canonical display title per emitted sector code
    pub sector_titles: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_string(),
            layout: SheetLayout::default(),
            module_out: PathBuf::from(DEFAULT_MODULE_OUT),
            data_out: PathBuf::from(DEFAULT_DATA_OUT),
            allowed_sectors: ALLOWED_SECTORS.iter().map(|s| s.to_string()).collect(),
            clean_titles: true,
            sort_by_title: true,
            canonical_sector_titles: false,
            sector_titles: SECTOR_TITLES
                .iter()
                .map(|(code, title)| (code.to_string(), title.to_string()))
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file, or the built-in defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => GeneratorConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Whether the given sector code is retained
    pub fn sector_allowed(&self, code: &str) -> bool {
        self.allowed_sectors.iter().any(|s| s == code)
    }

    fn validate(&self) -> Result<()> {
        if self.allowed_sectors.is_empty() {
            bail!("Config lists no allowed sectors");
        }
        for code in &self.allowed_sectors {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_digit()) {
                bail!("Invalid sector code in allow-list: '{}'", code);
            }
        }
        Ok(())
    }
}
