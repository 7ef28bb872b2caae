//! Row classification and sector filtering
//!
//! Splits the raw workbook rows into the three hierarchy levels, applies the
//! sector allow-list, collapses the manufacturing sub-sectors, and derives
//! parent codes.

use log::info;

use crate::config::GeneratorConfig;
use crate::naics::excel::RawRow;
use crate::naics::normalize::{clean_title, sort_by_title};
use crate::naics::table::NaicsTable;
use crate::naics::types::NaicsCode;

/// The three manufacturing sub-sectors the standard groups under one sector
const MANUFACTURING_SUBSECTORS: [&str; 3] = ["31", "32", "33"];
/// Code of the combined manufacturing sector
pub const MANUFACTURING_SECTOR: &str = "31-33";

/// Build the three lookup tables from the raw workbook rows.
///
/// The code length alone decides the hierarchy level: 2 = sector,
/// 3 = category, 6 = facility type. Everything else is dropped.
pub fn classify(rows: &[RawRow], config: &GeneratorConfig) -> NaicsTable {
    let mut table = NaicsTable {
        sectors: extract_sectors(rows, config),
        categories: extract_categories(rows, config),
        facility_types: extract_facility_types(rows, config),
    };

    if config.sort_by_title {
        sort_by_title(&mut table.sectors);
        sort_by_title(&mut table.categories);
        sort_by_title(&mut table.facility_types);
    }

    info!(
        "Classified {} sectors, {} categories, {} facility types",
        table.sectors.len(),
        table.categories.len(),
        table.facility_types.len()
    );

    table
}

fn extract_sectors(rows: &[RawRow], config: &GeneratorConfig) -> Vec<NaicsCode> {
    let mut sectors = Vec::new();
    let mut manufacturing_seen = false;

    for row in rows {
        if row.code.len() != 2 || !config.sector_allowed(&row.code) {
            continue;
        }

        // 31/32/33 collapse into one synthetic record at the position of the
        // first manufacturing row; later siblings are dropped
        let code = if MANUFACTURING_SUBSECTORS.contains(&row.code.as_str()) {
            if manufacturing_seen {
                continue;
            }
            manufacturing_seen = true;
            MANUFACTURING_SECTOR
        } else {
            row.code.as_str()
        };

        sectors.push(NaicsCode::sector(code, sector_title(code, &row.title, config)));
    }

    sectors
}

fn extract_categories(rows: &[RawRow], config: &GeneratorConfig) -> Vec<NaicsCode> {
    let mut categories = Vec::new();

    for row in rows {
        if row.code.len() != 3 {
            continue;
        }
        let Some(sector) = row.code.get(..2) else {
            continue;
        };
        if !config.sector_allowed(sector) {
            continue;
        }

        let parent = if MANUFACTURING_SUBSECTORS.contains(&sector) {
            MANUFACTURING_SECTOR
        } else {
            sector
        };

        categories.push(NaicsCode::category(
            row.code.as_str(),
            apply_cleaning(&row.title, config),
            parent,
        ));
    }

    categories
}

fn extract_facility_types(rows: &[RawRow], config: &GeneratorConfig) -> Vec<NaicsCode> {
    let mut facility_types = Vec::new();

    for row in rows {
        if row.code.len() != 6 {
            continue;
        }
        let Some(sector) = row.code.get(..2) else {
            continue;
        };
        if !config.sector_allowed(sector) {
            continue;
        }
        let Some(parent) = row.code.get(..3) else {
            continue;
        };

        facility_types.push(NaicsCode::facility_type(
            row.code.as_str(),
            apply_cleaning(&row.title, config),
            parent,
        ));
    }

    facility_types
}

fn sector_title(code: &str, raw: &str, config: &GeneratorConfig) -> String {
    if config.canonical_sector_titles {
        if let Some(title) = config.sector_titles.get(code) {
            return title.clone();
        }
    }
    apply_cleaning(raw, config)
}

fn apply_cleaning(raw: &str, config: &GeneratorConfig) -> String {
    if config.clean_titles {
        clean_title(raw)
    } else {
        raw.to_string()
    }
}
