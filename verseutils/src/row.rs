// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use verses::types::{Audio, Available, Gloss, Padas, Verse};

/// Shown in place of the meter when it is not given.
const METER_PLACEHOLDER: &str = "—";

/// Column holding the Sanskrit gloss.
const GLOSS_SA_COLUMN: &str = "अर्थः";

/// Cell values which are treated as true, after trimming and lowercasing.
const TRUE_VALUES: [&str; 5] = ["true", "t", "1", "yes", "y"];

/// A row of a verse table, mapping column names to cell values.
pub trait Row {
    /// Returns the raw value of the given column, if the row has it.
    fn get(&self, column: &str) -> Option<&str>;
}

impl Row for HashMap<String, String> {
    fn get(&self, column: &str) -> Option<&str> {
        HashMap::get(self, column).map(String::as_str)
    }
}

impl Row for BTreeMap<String, String> {
    fn get(&self, column: &str) -> Option<&str> {
        BTreeMap::get(self, column).map(String::as_str)
    }
}

impl<T: Row + ?Sized> Row for &T {
    fn get(&self, column: &str) -> Option<&str> {
        (**self).get(column)
    }
}

/// Returns the trimmed value of the given column, or an empty string if it is missing.
pub fn extract(row: &impl Row, column: &str) -> String {
    row.get(column).unwrap_or_default().trim().to_string()
}

/// Returns whether the given cell value should be treated as true.
pub fn truthy(value: &str) -> bool {
    TRUE_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Returns `primary` unless it is empty, in which case returns `fallback`.
pub fn or_fallback(primary: String, fallback: &str) -> String {
    if primary.is_empty() {
        fallback.to_string()
    } else {
        primary
    }
}

/// Converts a row of a verse table to a verse, or returns `None` if it has no ID.
///
/// Missing cells are treated as empty, so this never fails for a row with an ID.
pub fn row_to_verse(row: &impl Row) -> Option<Verse> {
    let id = extract(row, "id");
    if id.is_empty() {
        return None;
    }
    let g = |column: &str| extract(row, column);

    let text = Padas {
        p1: g("p1"),
        p2: g("p2"),
        p3: g("p3"),
        p4: g("p4"),
    };
    let practice = Padas {
        p1: or_fallback(g("pr_p1"), &text.p1),
        p2: or_fallback(g("pr_p2"), &text.p2),
        p3: or_fallback(g("pr_p3"), &text.p3),
        p4: or_fallback(g("pr_p4"), &text.p4),
    };
    let available = Available {
        p12: truthy(&g("has_p12")),
        p34: truthy(&g("has_p34")),
    };

    Some(Verse {
        title: or_fallback(g("title"), &id),
        meter: or_fallback(g("meter"), METER_PLACEHOLDER),
        full: g("full"),
        text,
        practice,
        needs_split_practice: truthy(&g("needs_split_practice")),
        available,
        audio: Audio::for_verse(&id, available),
        gloss: Gloss {
            sa: g(GLOSS_SA_COLUMN),
            en: g("meaning"),
        },
        id,
    })
}

/// Converts the rows of a verse table to verses, in order, skipping rows without an ID.
pub fn rows_to_verses<R: Row>(rows: impl IntoIterator<Item = R>) -> Vec<Verse> {
    let mut verses = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        match row_to_verse(&row) {
            Some(verse) => verses.push(verse),
            None => debug!("Skipping row {index} with no ID"),
        }
    }
    info!("Converted {} verses", verses.len());
    verses
}
