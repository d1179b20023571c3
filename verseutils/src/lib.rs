// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

mod row;
mod tsv;

pub use crate::{
    row::{Row, extract, or_fallback, row_to_verse, rows_to_verses, truthy},
    tsv::{read_tsv_rows, tsv_to_verses, write_verses},
};
use thiserror::Error;

/// An error reading a verse table or writing verse documents.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid verse table: {0}")]
    Table(#[from] csv::Error),
    #[error("Error writing verses: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
