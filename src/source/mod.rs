pub mod table_file;

pub use table_file::TableFileSource;

use std::collections::BTreeMap;

use crate::error::{AlignError, Result};

/// A single row from a per-language word table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    /// Row identifier, shared across language tables for the same entry
    pub uid: String,
    /// The word in that language
    pub word: String,
}

/// Lazy stream of word rows. The consumer pulls rows at its own pace, so a
/// slow consumer throttles the producer instead of buffering a whole table.
pub type RowStream<'a> = Box<dyn Iterator<Item = Result<WordRow>> + 'a>;

/// A backing store holding one `(uid, word)` table per language code.
pub trait WordSource {
    /// Open a row stream for one language table.
    ///
    /// Fails with `SourceUnavailable` when the store itself is unreachable
    /// and `Query` when the per-language read cannot be started. Individual
    /// stream items carry `Query` errors for failures mid-read.
    fn rows(&mut self, lang: &str) -> Result<RowStream<'_>>;
}

/// In-memory word source backed by fixed tables. Used by tests and small
/// fixtures; counts how many table reads were requested.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: BTreeMap<String, Vec<(String, String)>>,
    fetches: usize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language table from `(uid, word)` pairs.
    pub fn with_table(mut self, lang: impl Into<String>, rows: &[(&str, &str)]) -> Self {
        self.tables.insert(
            lang.into(),
            rows.iter()
                .map(|(uid, word)| (uid.to_string(), word.to_string()))
                .collect(),
        );
        self
    }

    /// Number of table reads served so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

impl WordSource for MemorySource {
    fn rows(&mut self, lang: &str) -> Result<RowStream<'_>> {
        self.fetches += 1;
        let rows = self
            .tables
            .get(lang)
            .ok_or_else(|| AlignError::query(lang, "no such table"))?;
        Ok(Box::new(rows.iter().map(|(uid, word)| {
            Ok(WordRow {
                uid: uid.clone(),
                word: word.clone(),
            })
        })))
    }
}
