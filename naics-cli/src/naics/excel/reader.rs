//! Read classification rows from the NAICS workbook

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx, open_workbook};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

/// Column indices for the structured 2022 sheet (fixed by the census export)
mod cols {
    pub const CODE: usize = 1;
    pub const TITLE: usize = 2;
}

/// Header names for the flat structure sheet
mod headers {
    pub const CODE: &str = "Code";
    pub const LEVEL: &str = "Level";
    pub const TITLE: &str = "Class title";
}

/// Physical layout of the worksheet being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SheetLayout {
    /// "2022 NAICS Structure": change-indicator / code / title columns by
    /// position, with one metadata row above the header
    #[default]
    Structure2022,
    /// "naics-scian-2022-structure-v1-e": named Code / Level / Class title
    /// columns resolved from the header row
    Flat,
}

/// One usable row from the workbook, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub code: String,
    pub title: String,
}

/// Read every row carrying a classification code from the named sheet.
///
/// Rows without a code cell are dropped; the code length decides everything
/// downstream, so they carry no information for the lookup tables.
pub fn read_workbook(path: &Path, sheet: &str, layout: SheetLayout) -> Result<Vec<RawRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Failed to read sheet: {}", sheet))?;

    let rows: Vec<_> = range.rows().collect();

    let (code_col, title_col, data_start) = match layout {
        SheetLayout::Structure2022 => {
            if range.width() <= cols::TITLE {
                bail!(
                    "Sheet '{}' has {} columns, expected change-indicator / code / title",
                    sheet,
                    range.width()
                );
            }
            // one metadata row, then the header row
            (cols::CODE, cols::TITLE, 2)
        }
        SheetLayout::Flat => {
            let header = rows
                .first()
                .with_context(|| format!("Sheet '{}' is empty", sheet))?;
            let code_col = find_header(header, headers::CODE, sheet)?;
            let title_col = find_header(header, headers::TITLE, sheet)?;
            // present in this layout but unused: the code length is authoritative
            find_header(header, headers::LEVEL, sheet)?;
            (code_col, title_col, 1)
        }
    };

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for row in rows.iter().skip(data_start) {
        let code = get_cell_string(row, code_col);
        if code.is_empty() {
            dropped += 1;
            continue;
        }
        out.push(RawRow {
            code,
            title: get_cell_string(row, title_col),
        });
    }

    debug!(
        "Read {} coded rows from sheet '{}' ({} rows without a code dropped)",
        out.len(),
        sheet,
        dropped
    );

    Ok(out)
}

fn find_header(header: &[Data], name: &str, sheet: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell.to_string().trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("Sheet '{}' has no '{}' column in its header row", sheet, name))
}

fn get_cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|cell| match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Excel stores bare codes as floats; "31.0" must become "31"
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}
