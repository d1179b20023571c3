// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{Error, rows_to_verses};
use csv::ReaderBuilder;
use log::{info, warn};
use std::{
    collections::HashMap,
    io::{Read, Write},
};
use verses::types::Verse;

/// Reads all rows of a tab-separated table with a header row.
///
/// Rows with fewer cells than the header are missing the trailing columns, and extra cells are
/// ignored.
pub fn read_tsv_rows(reader: impl Read) -> Result<Vec<HashMap<String, String>>, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    info!("Columns: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            warn!(
                "Ignoring {} extra cells on line {}",
                record.len() - headers.len(),
                record.position().map_or(0, |position| position.line())
            );
        }
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect(),
        );
    }
    Ok(rows)
}

/// Reads a tab-separated verse table and converts it to verses.
pub fn tsv_to_verses(reader: impl Read) -> Result<Vec<Verse>, Error> {
    Ok(rows_to_verses(read_tsv_rows(reader)?))
}

/// Writes the given verses as a pretty-printed JSON array.
pub fn write_verses(mut writer: impl Write, verses: &[Verse]) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, verses)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id\ttitle\tmeter\tfull\tp1\tp2\tp3\tp4\tpr_p1\tpr_p2\tpr_p3\tpr_p4\thas_p12\thas_p34\tneeds_split_practice\tअर्थः\tmeaning\n";

    #[test]
    fn header_only() {
        assert!(tsv_to_verses(HEADER.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(tsv_to_verses("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn short_and_blank_rows() {
        let table = format!(
            "{HEADER}niti_001\t\t\tfull\ta\tb\tc\td\t\tB\t\t\ttrue\tno\tyes\tअर्थः\twisdom\n\
             \t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\n\
             niti_002\tTitle\n"
        );
        let verses = tsv_to_verses(table.as_bytes()).unwrap();
        assert_eq!(verses.len(), 2);

        assert_eq!(verses[0].id, "niti_001");
        assert_eq!(verses[0].title, "niti_001");
        assert_eq!(verses[0].practice.p2, "B");
        assert_eq!(verses[0].practice.p1, "a");
        assert!(verses[0].needs_split_practice);
        assert_eq!(verses[0].gloss.sa, "अर्थः");
        assert_eq!(verses[0].gloss.en, "wisdom");

        assert_eq!(verses[1].id, "niti_002");
        assert_eq!(verses[1].title, "Title");
        assert_eq!(verses[1].meter, "—");
        assert_eq!(verses[1].text.p1, "");
        assert_eq!(verses[1].audio.p12, None);
    }

    #[test]
    fn extra_cells_ignored() {
        let rows = read_tsv_rows("id\ttitle\nx\ty\tz\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["title"], "y");
    }

    #[test]
    fn invalid_utf8() {
        let table = b"id\ttitle\n\xff\xfe\ttitle\n";
        assert!(matches!(tsv_to_verses(&table[..]), Err(Error::Table(_))));
    }

    #[test]
    fn write_json() {
        let verses = tsv_to_verses(format!("{HEADER}v\tश्लोकः\n").as_bytes()).unwrap();
        let mut json = Vec::new();
        write_verses(&mut json, &verses).unwrap();
        let json = String::from_utf8(json).unwrap();

        assert!(json.starts_with("[\n  {\n    \"id\": \"v\",\n    \"title\": \"श्लोकः\",\n"));
        assert!(json.contains("\"p12\": null"));
        assert!(json.contains("\"needsSplitPractice\": false"));
        assert_eq!(serde_json::from_str::<Vec<Verse>>(&json).unwrap(), verses);
    }

    #[test]
    fn write_empty() {
        let mut json = Vec::new();
        write_verses(&mut json, &[]).unwrap();
        assert_eq!(json, b"[]");
    }
}
