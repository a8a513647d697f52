use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::dictionary::{self, BilingualDictionary};
use crate::error::{AlignError, Result};
use crate::source::WordSource;

/// File-backed store for the merged bilingual dictionary.
///
/// The on-disk format is a UTF-8 JSON object `{ uid: { lang: word } }`.
/// A missing file is not an error: it triggers a rebuild from the word
/// source, and the rebuilt dictionary is persisted for later runs. A file
/// that exists but cannot be read or parsed is fatal.
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the cached dictionary, or build it from the source and persist it.
    ///
    /// The file is read to end-of-stream rather than to a stat-reported
    /// length, so a file that grows between stat and open cannot be
    /// truncated on read.
    pub fn load_or_build(
        &self,
        source: &mut dyn WordSource,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<BilingualDictionary> {
        info!("looking for dictionary file {:?}...", self.path);
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                info!("using dictionary file {:?}", self.path);
                serde_json::from_str(&content)
                    .map_err(|e| AlignError::cache_corrupt(&self.path, e))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("dictionary file not found.");
                let dict = dictionary::build(source, &[source_lang, target_lang])?;
                self.persist(&dict)?;
                Ok(dict)
            }
            Err(e) => Err(AlignError::cache_read(&self.path, e)),
        }
    }

    /// Write the dictionary as JSON to the cache path.
    pub fn persist(&self, dict: &BilingualDictionary) -> Result<()> {
        info!("creating file {:?}...", self.path);
        let json = serde_json::to_string(dict).map_err(io::Error::from)?;
        fs::write(&self.path, json)?;
        info!("file created.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use tempfile::tempdir;

    fn seeded_source() -> MemorySource {
        MemorySource::new()
            .with_table("ru", &[("7", "кот")])
            .with_table("en_GB", &[("7", "cat")])
    }

    #[test]
    fn test_missing_cache_builds_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict_ru-en_GB");
        let store = DictionaryStore::new(&path);
        let mut source = seeded_source();

        let dict = store.load_or_build(&mut source, "ru", "en_GB").unwrap();
        assert_eq!(source.fetches(), 2);
        assert_eq!(dict["7"]["ru"], "кот");
        assert!(path.exists());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"cat\""));
    }

    #[test]
    fn test_existing_cache_skips_the_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict_ru-en_GB");
        fs::write(&path, r#"{"7":{"ru":"кот","en_GB":"cat"}}"#).unwrap();

        let store = DictionaryStore::new(&path);
        let mut source = seeded_source();
        let dict = store.load_or_build(&mut source, "ru", "en_GB").unwrap();
        assert_eq!(source.fetches(), 0);
        assert_eq!(dict["7"]["en_GB"], "cat");
    }

    #[test]
    fn test_corrupt_cache_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict_ru-en_GB");
        fs::write(&path, "{not json").unwrap();

        let store = DictionaryStore::new(&path);
        let mut source = seeded_source();
        let err = store.load_or_build(&mut source, "ru", "en_GB").err().unwrap();
        assert!(matches!(err, AlignError::CacheCorrupt { .. }));
        assert_eq!(source.fetches(), 0);
    }

    #[test]
    fn test_round_trip_preserves_dictionary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict");
        let store = DictionaryStore::new(&path);

        let dict = dictionary::build(&mut seeded_source(), &["ru", "en_GB"]).unwrap();
        store.persist(&dict).unwrap();

        let reloaded = store
            .load_or_build(&mut MemorySource::new(), "ru", "en_GB")
            .unwrap();
        assert_eq!(reloaded, dict);
    }
}
