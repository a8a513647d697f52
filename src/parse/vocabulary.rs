use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AlignError, Result};

/// One line of a GIZA vocabulary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    /// Tool-internal vocabulary id (first column, kept verbatim)
    pub id: String,
    /// The word (second column)
    pub word: String,
}

/// A parsed `.vcb` vocabulary, in file order.
///
/// Conversion iterates entries in the order they appeared in the file, so
/// the entries are kept as a sequence rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// Parse a vocabulary file: one entry per line, columns separated by a
    /// single space, first column id, second column word. Extra columns
    /// (e.g. a count) are ignored; lines missing either column are skipped.
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AlignError::VocabularyNotFound(path.to_path_buf()),
            _ => AlignError::Io(e),
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse vocabulary text. Infallible: malformed lines produce no entry.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        for line in content.lines() {
            let mut columns = line.split(' ');
            let id = columns.next().unwrap_or_default();
            let word = columns.next().unwrap_or_default();
            if !id.is_empty() && !word.is_empty() {
                entries.push(VocabEntry {
                    id: id.to_string(),
                    word: word.to_string(),
                });
            }
        }
        Self { entries }
    }

    /// Fixture helper: build a vocabulary from `(id, word)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(id, word)| VocabEntry {
                    id: id.to_string(),
                    word: word.to_string(),
                })
                .collect(),
        }
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_id_word_and_count() {
        let vocab = Vocabulary::parse("1 cat 42\n2 dog 7\n");
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.entries()[0], VocabEntry {
            id: "1".to_string(),
            word: "cat".to_string(),
        });
        assert_eq!(vocab.entries()[1].word, "dog");
    }

    #[test]
    fn test_blank_and_malformed_lines_are_skipped() {
        let vocab = Vocabulary::parse("1 cat\n\nlonely\n2 dog\n");
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.entries()[1].id, "2");
    }

    #[test]
    fn test_double_space_leaves_empty_word_out() {
        // "1  cat" splits into ["1", "", "cat"]; the empty second column
        // drops the line, same as a single-token line.
        let vocab = Vocabulary::parse("1  cat\n2 dog\n");
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.entries()[0].word, "dog");
    }

    #[test]
    fn test_parse_file_preserves_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "3 кот 5\n1 дом 2\n").unwrap();

        let vocab = Vocabulary::parse_file(file.path()).unwrap();
        assert_eq!(vocab.entries()[0].id, "3");
        assert_eq!(vocab.entries()[1].id, "1");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Vocabulary::parse_file(Path::new("does/not/exist.vcb"))
            .err()
            .unwrap();
        assert!(matches!(err, AlignError::VocabularyNotFound(_)));
    }
}
