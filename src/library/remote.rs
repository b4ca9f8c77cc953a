//! Remapping of the hosted character listing into [`CharacterRecord`]s.
//!
//! Fetching is left to the host; this module only understands the payload.

use serde::Deserialize;

use crate::character::{CharacterRecord, Difficulty};
use crate::error::LibraryError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteId {
    Number(u64),
    Text(String),
}

impl RemoteId {
    fn into_string(self) -> String {
        match self {
            RemoteId::Number(n) => n.to_string(),
            RemoteId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCharacter {
    id: RemoteId,
    character: String,
    #[serde(default)]
    pinyin: String,
    #[serde(default)]
    definition: String,
    #[serde(default, rename = "definition_en")]
    definition_en: Option<String>,
    #[serde(default)]
    strokes: Option<u32>,
    #[serde(default)]
    hsk_level: Option<u32>,
    #[serde(default)]
    frequency: Option<u32>,
}

impl From<RemoteCharacter> for CharacterRecord {
    fn from(item: RemoteCharacter) -> Self {
        let english = item.definition_en.unwrap_or_else(|| item.definition.clone());
        let category = match item.hsk_level {
            Some(level) => format!("hsk{level}"),
            None => "general".to_owned(),
        };
        CharacterRecord::new(item.id.into_string(), item.character, item.pinyin, item.definition)
            .with_english_gloss(english)
            .with_stroke_count(item.strokes.unwrap_or(0))
            .with_difficulty(Difficulty::Beginner)
            .with_category(category)
            .with_frequency(item.frequency)
    }
}

/// Parse a JSON array as served by the character API.
pub fn parse_remote_listing(json: &str) -> Result<Vec<CharacterRecord>, LibraryError> {
    let items: Vec<RemoteCharacter> = serde_json::from_str(json)?;
    log::info!("Parsed {} characters from remote listing", items.len());
    Ok(items.into_iter().map(CharacterRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fields_and_defaults() {
        let json = r#"[
            {"id": 12, "character": "你", "pinyin": "nǐ", "definition": "you",
             "strokes": 7, "hskLevel": 1, "frequency": 20},
            {"id": "x-2", "character": "好", "pinyin": "hǎo", "definition": "good",
             "definition_en": "good, well"}
        ]"#;
        let records = parse_remote_listing(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "12");
        assert_eq!(records[0].english_gloss(), "you");
        assert_eq!(records[0].stroke_count(), 7);
        assert_eq!(records[0].category(), "hsk1");
        assert_eq!(records[0].frequency(), Some(20));

        assert_eq!(records[1].id(), "x-2");
        assert_eq!(records[1].english_gloss(), "good, well");
        assert_eq!(records[1].stroke_count(), 0);
        assert_eq!(records[1].category(), "general");
        assert_eq!(records[1].frequency(), None);
        assert_eq!(records[1].difficulty(), Difficulty::Beginner);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(matches!(parse_remote_listing("{\"oops\": 1}"), Err(LibraryError::Parse(_))));
    }
}
