use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{AlignError, Result};
use crate::source::{RowStream, WordRow, WordSource};

/// Word source reading per-language table exports from a directory.
///
/// Each language table is a file `<dir>/<lang>.tsv` with one
/// `uid<TAB>word` row per line. Rows are streamed through a buffered
/// reader, never loaded as a whole, so arbitrarily large tables stay
/// within bounded memory.
pub struct TableFileSource {
    dir: PathBuf,
}

impl TableFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, lang: &str) -> PathBuf {
        self.dir.join(format!("{}.tsv", lang))
    }
}

impl WordSource for TableFileSource {
    fn rows(&mut self, lang: &str) -> Result<RowStream<'_>> {
        if !self.dir.is_dir() {
            return Err(AlignError::source_unavailable(format!(
                "no word store directory at {}",
                self.dir.display()
            )));
        }

        let path = self.table_path(lang);
        let file = File::open(&path)
            .map_err(|e| AlignError::query(lang, format!("{}: {}", path.display(), e)))?;

        let lang = lang.to_string();
        let lines = BufReader::new(file).lines().enumerate();
        Ok(Box::new(lines.filter_map(move |(idx, line)| match line {
            Err(e) => Some(Err(AlignError::query(&lang, e.to_string()))),
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => match parse_row(&line) {
                Some(row) => Some(Ok(row)),
                None => Some(Err(AlignError::query(
                    &lang,
                    format!("malformed row at line {}", idx + 1),
                ))),
            },
        })))
    }
}

fn parse_row(line: &str) -> Option<WordRow> {
    let (uid, word) = line.split_once('\t')?;
    if uid.is_empty() || word.is_empty() {
        return None;
    }
    Some(WordRow {
        uid: uid.to_string(),
        word: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_rows_in_file_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ru.tsv"), "1\tкот\n2\tдом\n").unwrap();

        let mut source = TableFileSource::new(dir.path());
        let rows: Result<Vec<_>> = source.rows("ru").unwrap().collect();
        let rows = rows.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].uid, "1");
        assert_eq!(rows[1].word, "дом");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ru.tsv"), "1\tкот\n\n2\tдом\n").unwrap();

        let mut source = TableFileSource::new(dir.path());
        let rows: Result<Vec<_>> = source.rows("ru").unwrap().collect();
        assert_eq!(rows.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_store_directory_is_unavailable() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut source = TableFileSource::new(&missing);
        let err = source.rows("ru").err().unwrap();
        assert!(matches!(err, AlignError::SourceUnavailable(_)));
    }

    #[test]
    fn test_missing_table_is_query_error() {
        let dir = tempdir().unwrap();
        let mut source = TableFileSource::new(dir.path());
        let err = source.rows("ru").err().unwrap();
        assert!(matches!(err, AlignError::Query { .. }));
    }

    #[test]
    fn test_malformed_row_surfaces_mid_stream() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ru.tsv"), "1\tкот\ngarbage\n2\tдом\n").unwrap();

        let mut source = TableFileSource::new(dir.path());
        let rows: Vec<_> = source.rows("ru").unwrap().collect();
        assert!(rows[0].is_ok());
        let err = rows[1].as_ref().err().unwrap();
        assert!(err.to_string().contains("line 2"));
        assert!(rows[2].is_ok());
    }
}
