//! Output artifacts: the JSON data file and the generated Rust module

mod data;
mod module;

pub use data::write_data_file;
pub use module::{render_module, write_module_file};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `contents` through a sibling temp file and rename it into place, so
/// a failed run never leaves a truncated artifact behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory: {}", dir.display())
            })?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move {} into place", path.display()))?;

    Ok(())
}
