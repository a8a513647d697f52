use std::path::{Path, PathBuf};

use crate::convert::Alphabet;

/// Explicit configuration for one alignment run.
///
/// Every path is derived from the language pair and data directory by
/// default and can be overridden individually. There is no global state:
/// each component receives what it needs from this value.
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Source language code (names the word table and the source .vcb file)
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Directory holding the vocabulary files and the cache file
    pub data_dir: PathBuf,
    /// Dictionary cache file path
    pub cache_path: PathBuf,
    /// Source vocabulary file path
    pub source_vocab: PathBuf,
    /// Target vocabulary file path
    pub target_vocab: PathBuf,
    /// Alignment output file path
    pub output_path: PathBuf,
    /// Letter alphabet used when normalizing words for matching
    pub alphabet: Alphabet,
}

impl AlignConfig {
    /// Create a configuration with conventional file names:
    /// cache `dict_<source>-<target>`, vocabularies `<lang>.vcb`, and
    /// output `dict_<source>-<target>.giza`, all under `data_dir`.
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        let source_lang = source_lang.into();
        let target_lang = target_lang.into();
        let data_dir = data_dir.into();
        let dict_file_name = format!("dict_{}-{}", source_lang, target_lang);

        Self {
            cache_path: data_dir.join(&dict_file_name),
            source_vocab: data_dir.join(format!("{}.vcb", source_lang)),
            target_vocab: data_dir.join(format!("{}.vcb", target_lang)),
            output_path: data_dir.join(format!("{}.giza", dict_file_name)),
            source_lang,
            target_lang,
            data_dir,
            alphabet: Alphabet::russian_english(),
        }
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self.output_path = giza_path(&self.cache_path);
        self
    }

    pub fn with_vocab_paths(
        mut self,
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        self.source_vocab = source.into();
        self.target_vocab = target.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

/// Output path for a given cache file path: `<cache>.giza` alongside it.
fn giza_path(cache_path: &Path) -> PathBuf {
    let mut name = cache_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dict".to_string());
    name.push_str(".giza");
    cache_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_follow_language_pair() {
        let config = AlignConfig::new("ru", "en_GB", "data");
        assert_eq!(config.cache_path, PathBuf::from("data/dict_ru-en_GB"));
        assert_eq!(config.source_vocab, PathBuf::from("data/ru.vcb"));
        assert_eq!(config.target_vocab, PathBuf::from("data/en_GB.vcb"));
        assert_eq!(
            config.output_path,
            PathBuf::from("data/dict_ru-en_GB.giza")
        );
    }

    #[test]
    fn test_cache_override_moves_output() {
        let config = AlignConfig::new("ru", "en_GB", "data").with_cache_path("/tmp/mydict");
        assert_eq!(config.cache_path, PathBuf::from("/tmp/mydict"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/mydict.giza"));
    }

    #[test]
    fn test_explicit_output_override_wins() {
        let config = AlignConfig::new("ru", "en_GB", "data")
            .with_cache_path("/tmp/mydict")
            .with_output_path("/tmp/out.giza");
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.giza"));
    }
}
