//! Dataset loader: turns the nested raw document into a [`Catalog`].
//!
//! The expected document looks like
//!
//! ```json
//! {
//!   "Proverbs": [ { "source": "...", "target": "..." } ],
//!   "Lesson 1": { "Vocabulary": [ { "source": "house", "target": "domus" } ] },
//!   "Lesson 2": { "Vocabulary": [ ... ] }
//! }
//! ```
//!
//! Key and field names come from [`DatasetSchema`]. Loading a parsed value is
//! total: bad entries, unlabeled keys and missing sections are skipped, and a
//! document with nothing recognisable yields an empty catalog.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::study_engine::{
    catalog::Catalog,
    models::{Deck, LessonCard, ProverbCard, TextPair},
};

/// Names of the keys and fields the loader looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSchema {
    pub proverbs_key: String,
    pub vocabulary_key: String,
    pub source_field: String,
    pub target_field: String,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        DatasetSchema {
            proverbs_key: "Proverbs".to_string(),
            vocabulary_key: "Vocabulary".to_string(),
            source_field: "source".to_string(),
            target_field: "target".to_string(),
        }
    }
}

/// Read and load a dataset file.
pub fn load_path(path: impl AsRef<Path>, schema: &DatasetSchema) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text, schema)
}

/// Parse and load a dataset held in memory.
pub fn load_str(text: &str, schema: &DatasetSchema) -> Result<Catalog, LoadError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(load_value(&raw, schema))
}

/// Build a catalog from an already-parsed document.
pub fn load_value(raw: &Value, schema: &DatasetSchema) -> Catalog {
    let Some(root) = raw.as_object() else {
        warn!("dataset root is not an object; loading an empty catalog");
        return Catalog::default();
    };

    let proverbs = load_proverbs(root, schema);
    let (cards, decks) = load_lessons(root, schema);

    info!(
        "loaded {} lesson cards in {} decks and {} proverbs",
        cards.len(),
        decks.len(),
        proverbs.len()
    );
    Catalog::from_parts(cards, decks, proverbs)
}

fn load_proverbs(root: &Map<String, Value>, schema: &DatasetSchema) -> Vec<ProverbCard> {
    let Some(section) = root.get(&schema.proverbs_key) else {
        return Vec::new();
    };
    let Some(entries) = section.as_array() else {
        warn!("\"{}\" is not a list; skipping proverbs", schema.proverbs_key);
        return Vec::new();
    };
    entries
        .iter()
        .enumerate()
        .filter_map(|(pos, entry)| {
            let text = parse_entry(entry, schema);
            if text.is_none() {
                debug!("skipping malformed proverb entry {pos}");
            }
            text
        })
        .map(|text| ProverbCard { text })
        .collect()
}

fn load_lessons(root: &Map<String, Value>, schema: &DatasetSchema) -> (Vec<LessonCard>, Vec<Deck>) {
    let mut labels: Vec<(u32, &str, &Value)> = root
        .iter()
        .filter(|(key, _)| **key != schema.proverbs_key)
        .filter_map(|(key, value)| match lesson_number(key) {
            Some(n) => Some((n, key.as_str(), value)),
            None => {
                warn!("ignoring key \"{key}\": no lesson number");
                None
            }
        })
        .collect();
    // Stable, so duplicate numbers keep document order.
    labels.sort_by_key(|(n, _, _)| *n);

    let mut cards = Vec::new();
    let mut decks = Vec::new();
    let mut seen = HashSet::new();
    let mut next_index: u32 = 1;

    for (lesson, label, value) in labels {
        if !seen.insert(lesson) {
            warn!("ignoring \"{label}\": lesson {lesson} already loaded");
            continue;
        }
        let Some(entries) = value.get(&schema.vocabulary_key).and_then(Value::as_array) else {
            debug!("\"{label}\" has no \"{}\" list; skipping", schema.vocabulary_key);
            continue;
        };

        let start = next_index;
        for (pos, entry) in entries.iter().enumerate() {
            match parse_entry(entry, schema) {
                Some(text) => {
                    cards.push(LessonCard { text, lesson, global_index: next_index });
                    next_index += 1;
                }
                None => debug!("skipping malformed entry {pos} in \"{label}\""),
            }
        }

        if next_index > start {
            decks.push(Deck {
                id: lesson,
                title: label.to_string(),
                count: (next_index - start) as usize,
                global_start: start,
                global_end: next_index - 1,
            });
        }
    }

    (cards, decks)
}

/// The decimal value of all digits in `label`, e.g. "Lesson 12" -> 12.
///
/// `None` when the label has no digits or the number does not fit in `u32`.
pub fn lesson_number(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// A valid entry has both texts present as non-empty strings.
fn parse_entry(entry: &Value, schema: &DatasetSchema) -> Option<TextPair> {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };
    let source = field(&schema.source_field)?;
    let target = field(&schema.target_field)?;
    Some(TextPair::new(source, target))
}
