//! Resolve and describe commands over a generated data file

use anyhow::Result;

use crate::cli::{DescribeArgs, ResolveArgs};
use crate::naics::NaicsTable;

pub fn handle_resolve_command(args: ResolveArgs) -> Result<()> {
    let table = NaicsTable::load(&args.data)?;
    let code = table.resolve_code(&args.sector, &args.category, &args.type_code)?;
    println!("{}", code);
    Ok(())
}

pub fn handle_describe_command(args: DescribeArgs) -> Result<()> {
    let table = NaicsTable::load(&args.data)?;
    // unknown codes print the fallback string, they are not an error
    println!("{}", table.describe(&args.code));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naics::emit::write_data_file;
    use crate::naics::table::sample_table;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn data_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("naics-data.json");
        write_data_file(&sample_table(), &path).unwrap();
        path
    }

    #[test]
    fn test_resolve_command_round_trips() {
        let dir = TempDir::new().unwrap();
        let args = ResolveArgs {
            sector: "31-33".to_string(),
            category: "311".to_string(),
            type_code: "311111".to_string(),
            data: data_file(&dir),
        };
        assert!(handle_resolve_command(args).is_ok());
    }

    #[test]
    fn test_resolve_command_fails_on_bad_combination() {
        let dir = TempDir::new().unwrap();
        let args = ResolveArgs {
            sector: "11".to_string(),
            category: "311".to_string(),
            type_code: "311111".to_string(),
            data: data_file(&dir),
        };
        assert!(handle_resolve_command(args).is_err());
    }

    #[test]
    fn test_describe_command_never_fails_on_unknown_code() {
        let dir = TempDir::new().unwrap();
        let args = DescribeArgs {
            code: "999999".to_string(),
            data: data_file(&dir),
        };
        assert!(handle_describe_command(args).is_ok());
    }

    #[test]
    fn test_commands_fail_on_missing_data_file() {
        let args = DescribeArgs {
            code: "111110".to_string(),
            data: PathBuf::from("missing.json"),
        };
        assert!(handle_describe_command(args).is_err());
    }
}
