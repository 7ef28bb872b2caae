//! Generated Rust module artifact
//!
//! Renders a dependency-free source file holding the three literal tables and
//! the four lookup functions, for consumers that want the data compiled in
//! rather than loaded from the JSON file. String literals are rendered with
//! `{:?}` so titles with quotes or other special characters cannot break the
//! generated source.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::naics::table::NaicsTable;
use crate::naics::types::NaicsCode;

const PRELUDE: &str = r#"/// One entry in the NAICS facility hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaicsCode {
    pub code: &'static str,
    pub title: &'static str,
    pub level: u8,
    pub parent: &'static str,
}

/// Error returned by [`resolve_code`] for a triple that does not chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCombination;

impl std::fmt::Display for InvalidCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid NAICS code combination")
    }
}

impl std::error::Error for InvalidCombination {}

/// Fallback returned by [`describe`] for codes that do not chain.
pub const UNKNOWN_NAICS_CODE: &str = "Unknown NAICS code";
"#;

const HELPERS: &str = r#"/// All categories whose parent is the given sector code.
pub fn categories_by_sector(sector_code: &str) -> Vec<&'static NaicsCode> {
    FACILITY_CATEGORIES
        .iter()
        .filter(|c| c.parent == sector_code)
        .collect()
}

/// All facility types whose parent is the given category code.
pub fn types_by_category(category_code: &str) -> Vec<&'static NaicsCode> {
    FACILITY_TYPES
        .iter()
        .filter(|t| t.parent == category_code)
        .collect()
}

/// Validate a sector/category/type triple against the parent chain and return
/// the 6-digit type code unchanged.
pub fn resolve_code(
    sector_code: &str,
    category_code: &str,
    type_code: &str,
) -> Result<&'static str, InvalidCombination> {
    FACILITY_SECTORS
        .iter()
        .find(|s| s.code == sector_code)
        .ok_or(InvalidCombination)?;
    FACILITY_CATEGORIES
        .iter()
        .find(|c| c.code == category_code && c.parent == sector_code)
        .ok_or(InvalidCombination)?;
    let facility_type = FACILITY_TYPES
        .iter()
        .find(|t| t.code == type_code && t.parent == category_code)
        .ok_or(InvalidCombination)?;
    Ok(facility_type.code)
}

/// Full "sector > category > type" chain for a facility type code, or
/// [`UNKNOWN_NAICS_CODE`]. Never fails.
pub fn describe(type_code: &str) -> String {
    let Some(facility_type) = FACILITY_TYPES.iter().find(|t| t.code == type_code) else {
        return UNKNOWN_NAICS_CODE.to_string();
    };
    let category = FACILITY_CATEGORIES
        .iter()
        .find(|c| c.code == facility_type.parent);
    let sector = category.and_then(|c| FACILITY_SECTORS.iter().find(|s| s.code == c.parent));
    match (sector, category) {
        (Some(sector), Some(category)) => format!(
            "{} > {} > {}",
            sector.title, category.title, facility_type.title
        ),
        _ => UNKNOWN_NAICS_CODE.to_string(),
    }
}
"#;

/// Render the complete generated module
pub fn render_module(table: &NaicsTable, workbook: &str, sheet: &str) -> Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "// Generated by naics-cli from {:?}, sheet {:?}. Do not edit by hand.",
        workbook, sheet
    )?;
    writeln!(
        out,
        "// {} sectors, {} categories, {} facility types.",
        table.sectors.len(),
        table.categories.len(),
        table.facility_types.len()
    )?;
    out.push('\n');
    out.push_str(PRELUDE);
    out.push('\n');

    write_table(
        &mut out,
        "Facility sectors (2-digit codes).",
        "FACILITY_SECTORS",
        &table.sectors,
    )?;
    write_table(
        &mut out,
        "Facility categories (3-digit codes).",
        "FACILITY_CATEGORIES",
        &table.categories,
    )?;
    write_table(
        &mut out,
        "Facility types (6-digit codes).",
        "FACILITY_TYPES",
        &table.facility_types,
    )?;

    out.push_str(HELPERS);
    Ok(out)
}

fn write_table(
    out: &mut String,
    doc: &str,
    name: &str,
    records: &[NaicsCode],
) -> Result<()> {
    writeln!(out, "/// {doc}")?;
    writeln!(out, "pub static {name}: &[NaicsCode] = &[")?;
    for record in records {
        writeln!(
            out,
            "    NaicsCode {{ code: {:?}, title: {:?}, level: {}, parent: {:?} }},",
            record.code, record.title, record.level, record.parent
        )?;
    }
    writeln!(out, "];")?;
    out.push('\n');
    Ok(())
}

/// Render and write the generated module
pub fn write_module_file(
    table: &NaicsTable,
    path: &Path,
    workbook: &str,
    sheet: &str,
) -> Result<()> {
    let source = render_module(table, workbook, sheet)?;
    super::write_atomic(path, &source)?;

    info!(
        "Wrote {} ({} sectors, {} categories, {} facility types)",
        path.display(),
        table.sectors.len(),
        table.categories.len(),
        table.facility_types.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naics::table::sample_table;

    fn render_sample() -> String {
        render_module(&sample_table(), "NAICS Lookup.xlsx", "2022 NAICS Structure").unwrap()
    }

    #[test]
    fn test_module_contains_tables_in_emission_order() {
        let source = render_sample();

        let sectors = source.find("pub static FACILITY_SECTORS").unwrap();
        let categories = source.find("pub static FACILITY_CATEGORIES").unwrap();
        let types = source.find("pub static FACILITY_TYPES").unwrap();
        assert!(sectors < categories && categories < types);

        assert!(source.contains(
            r#"NaicsCode { code: "31-33", title: "Manufacturing", level: 2, parent: "" },"#
        ));
        assert!(source.contains(
            r#"NaicsCode { code: "111110", title: "Soybean Farming", level: 6, parent: "111" },"#
        ));
    }

    #[test]
    fn test_module_contains_the_four_helpers() {
        let source = render_sample();
        assert!(source.contains("pub fn categories_by_sector("));
        assert!(source.contains("pub fn types_by_category("));
        assert!(source.contains("pub fn resolve_code("));
        assert!(source.contains("pub fn describe("));
        assert!(source.contains(r#"pub const UNKNOWN_NAICS_CODE: &str = "Unknown NAICS code";"#));
    }

    #[test]
    fn test_titles_with_quotes_render_as_valid_literals() {
        let mut table = sample_table();
        table.sectors[0].title = r#"Mining "and" quarrying's"#.to_string();

        let source = render_module(&table, "wb.xlsx", "sheet").unwrap();
        assert!(source.contains(r#"title: "Mining \"and\" quarrying's""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_sample(), render_sample());
    }

    #[test]
    fn test_header_names_the_source() {
        let source = render_sample();
        let first_line = source.lines().next().unwrap();
        assert!(first_line.contains("NAICS Lookup.xlsx"));
        assert!(first_line.contains("2022 NAICS Structure"));
    }
}
