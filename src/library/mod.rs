//! Where characters come from: the compiled-in table or a listing file.

mod builtin;
mod remote;

pub use builtin::builtin_characters;
pub use remote::parse_remote_listing;

use std::path::Path;

use crate::character::CharacterRecord;
use crate::error::LibraryError;

/// Human label for a category key. Unknown keys are shown as-is.
pub fn category_label(key: &str) -> &str {
    match key {
        "numbers" => "Numbers (0-10)",
        "largeNumbers" => "Large Numbers",
        "basic" => "Basic Characters",
        "learning" => "Learning & Education",
        "family" => "Family",
        "verbs" => "Common Verbs",
        "time" => "Time",
        other => other,
    }
}

/// Distinct categories in the order they first appear.
pub fn categories(records: &[CharacterRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if !seen.iter().any(|c| c == record.category()) {
            seen.push(record.category().to_owned());
        }
    }
    seen
}

/// Read a listing in the hosted API's shape from disk.
pub fn load_listing_file(path: &Path) -> Result<Vec<CharacterRecord>, LibraryError> {
    let json = std::fs::read_to_string(path)?;
    parse_remote_listing(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let records = builtin_characters();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn builtin_categories_keep_table_order() {
        let cats = categories(&builtin_characters());
        assert_eq!(
            cats,
            vec!["numbers", "largeNumbers", "basic", "learning", "family", "verbs", "time"]
        );
        assert_eq!(category_label("verbs"), "Common Verbs");
        assert_eq!(category_label("hsk1"), "hsk1");
    }
}
