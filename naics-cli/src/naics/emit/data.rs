//! JSON data artifact

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::naics::table::NaicsTable;

/// Write the three tables as a pretty-printed JSON file
pub fn write_data_file(table: &NaicsTable, path: &Path) -> Result<()> {
    let mut json = table.to_json()?;
    json.push('\n');
    super::write_atomic(path, &json)?;

    info!(
        "Wrote {} ({} sectors, {} categories, {} facility types)",
        path.display(),
        table.sectors.len(),
        table.categories.len(),
        table.facility_types.len()
    );

    Ok(())
}
