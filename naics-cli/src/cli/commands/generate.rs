//! Generate command: workbook in, lookup artifacts out

use anyhow::Result;
use log::info;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::GeneratorConfig;
use crate::naics::{classify, emit, excel};

pub fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let mut config = GeneratorConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    info!(
        "Reading {} (sheet '{}')",
        config.workbook.display(),
        config.sheet
    );
    let rows = excel::read_workbook(&config.workbook, &config.sheet, config.layout)?;

    let table = classify::classify(&rows, &config);
    table.validate()?;

    let workbook = config.workbook.display().to_string();
    if matches!(args.format, OutputFormat::Json | OutputFormat::Both) {
        emit::write_data_file(&table, &config.data_out)?;
    }
    if matches!(args.format, OutputFormat::Module | OutputFormat::Both) {
        emit::write_module_file(&table, &config.module_out, &workbook, &config.sheet)?;
    }

    Ok(())
}

fn apply_overrides(config: &mut GeneratorConfig, args: &GenerateArgs) {
    if let Some(ref workbook) = args.workbook {
        config.workbook = workbook.clone();
    }
    if let Some(ref sheet) = args.sheet {
        config.sheet = sheet.clone();
    }
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(ref path) = args.data_out {
        config.data_out = path.clone();
    }
    if let Some(ref path) = args.module_out {
        config.module_out = path.clone();
    }
    if args.no_clean_titles {
        config.clean_titles = false;
    }
    if args.no_sort {
        config.sort_by_title = false;
    }
    if args.canonical_sector_titles {
        config.canonical_sector_titles = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naics::NaicsTable;
    use rust_xlsxwriter::Workbook;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_fixture_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("2022 NAICS Structure").unwrap();
        sheet.write_string(0, 0, "metadata").unwrap();
        sheet.write_string(1, 1, "Code").unwrap();
        sheet.write_string(1, 2, "Title").unwrap();
        let rows: &[(&str, &str)] = &[
            ("11", "Agriculture, Forestry, Fishing and HuntingT"),
            ("111", "Crop Production T"),
            ("111110", "Soybean Farming"),
            ("31", "Manufacturing T"),
            ("32", "Manufacturing T"),
            ("311", "Food Manufacturing T"),
            ("311111", "Dog and Cat Food Manufacturing"),
            ("44", "Retail TradeT"),
            ("445", "Food RetailersT"),
            ("445110", "Supermarkets"),
        ];
        for (i, (code, title)) in rows.iter().enumerate() {
            let row = (i + 2) as u32;
            sheet.write_string(row, 1, *code).unwrap();
            sheet.write_string(row, 2, *title).unwrap();
        }
        workbook.save(path).unwrap();
    }

    fn generate_args(dir: &TempDir) -> GenerateArgs {
        let workbook = dir.path().join("naics.xlsx");
        write_fixture_workbook(&workbook);
        GenerateArgs {
            workbook: Some(workbook),
            sheet: None,
            layout: None,
            format: OutputFormat::Both,
            data_out: Some(dir.path().join("naics-data.json")),
            module_out: Some(dir.path().join("naics_data.rs")),
            config: None,
            no_clean_titles: false,
            no_sort: false,
            canonical_sector_titles: false,
        }
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let dir = TempDir::new().unwrap();
        let args = generate_args(&dir);
        let data_out = args.data_out.clone().unwrap();
        let module_out = args.module_out.clone().unwrap();

        handle_generate_command(args).unwrap();

        let table = NaicsTable::load(&data_out).unwrap();
        // the disallowed 44 sector and its descendants are gone
        assert_eq!(table.sectors.len(), 2);
        assert!(table.sectors.iter().any(|s| s.code == "31-33"));
        assert!(table.sectors.iter().all(|s| s.code != "44"));
        assert_eq!(table.categories.len(), 2);
        assert_eq!(table.facility_types.len(), 2);
        // cleaned and alphabetized
        assert_eq!(table.sectors[0].title, "Agriculture, Forestry, Fishing and Hunting");
        assert!(table.validate().is_ok());
        assert_eq!(
            table.describe("311111"),
            "Manufacturing > Food Manufacturing > Dog and Cat Food Manufacturing"
        );

        let module = fs::read_to_string(&module_out).unwrap();
        assert!(module.contains("pub static FACILITY_SECTORS"));
    }

    #[test]
    fn test_two_runs_produce_identical_artifacts() {
        let dir = TempDir::new().unwrap();
        let first = generate_args(&dir);
        let data_out = first.data_out.clone().unwrap();
        let module_out = first.module_out.clone().unwrap();

        handle_generate_command(first).unwrap();
        let data_a = fs::read(&data_out).unwrap();
        let module_a = fs::read(&module_out).unwrap();

        handle_generate_command(generate_args(&dir)).unwrap();
        assert_eq!(fs::read(&data_out).unwrap(), data_a);
        assert_eq!(fs::read(&module_out).unwrap(), module_a);
    }

    #[test]
    fn test_no_sort_preserves_source_order() {
        let dir = TempDir::new().unwrap();
        let mut args = generate_args(&dir);
        args.no_sort = true;
        args.format = OutputFormat::Json;
        let data_out = args.data_out.clone().unwrap();

        handle_generate_command(args).unwrap();

        let table = NaicsTable::load(&data_out).unwrap();
        let codes: Vec<_> = table.sectors.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["11", "31-33"]);
    }

    #[test]
    fn test_missing_workbook_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            workbook: Some(PathBuf::from("no-such-file.xlsx")),
            data_out: Some(dir.path().join("naics-data.json")),
            module_out: Some(dir.path().join("naics_data.rs")),
            ..generate_args(&dir)
        };
        let data_out = args.data_out.clone().unwrap();

        assert!(handle_generate_command(args).is_err());
        assert!(!data_out.exists());
    }
}
