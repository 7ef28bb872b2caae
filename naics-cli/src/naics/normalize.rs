//! Title cleanup helpers

use crate::naics::types::NaicsCode;

/// Strip one trailing revision marker and surrounding whitespace.
///
/// The census workbook suffixes revised titles with a superscript "T" that
/// survives the export as a literal character, sometimes with a space before
/// it ("Crop Production T", "Soybean FarmingT"). Titles without a marker come
/// back trimmed but otherwise unchanged.
pub fn clean_title(raw: &str) -> String {
    let trimmed = raw.trim_end();
    let stripped = trimmed.strip_suffix('T').unwrap_or(trimmed);
    stripped.trim().to_string()
}

/// Stable alphabetical sort used by the sorted output variant
pub fn sort_by_title(records: &mut [NaicsCode]) {
    records.sort_by(|a, b| a.title.cmp(&b.title));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_strips_spaced_marker() {
        assert_eq!(clean_title("Crop Production T"), "Crop Production");
    }

    #[test]
    fn test_clean_title_strips_glued_marker() {
        assert_eq!(clean_title("Soybean FarmingT"), "Soybean Farming");
    }

    #[test]
    fn test_clean_title_leaves_unmarked_titles_alone() {
        assert_eq!(clean_title("Utilities"), "Utilities");
    }

    #[test]
    fn test_clean_title_trims_whitespace() {
        assert_eq!(clean_title("  Construction  "), "Construction");
        assert_eq!(clean_title("  Mining T  "), "Mining");
    }

    #[test]
    fn test_clean_title_strips_only_one_marker() {
        assert_eq!(clean_title("ACT T"), "ACT");
    }

    #[test]
    fn test_sort_by_title_is_stable() {
        let mut records = vec![
            NaicsCode::category("311", "Food", "31-33"),
            NaicsCode::category("111", "Crops", "11"),
            NaicsCode::category("312", "Food", "31-33"),
        ];
        sort_by_title(&mut records);
        assert_eq!(records[0].code, "111");
        assert_eq!(records[1].code, "311");
        assert_eq!(records[2].code, "312");
    }
}
