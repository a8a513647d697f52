pub mod cache;
pub mod config;
pub mod convert;
pub mod dictionary;
pub mod error;
pub mod parse;
pub mod source;

use tracing::info;

// Re-export commonly used types
pub use cache::DictionaryStore;
pub use config::AlignConfig;
pub use convert::{to_giza, write_giza, AlignmentPair, Alphabet, Conversion, Converter};
pub use dictionary::BilingualDictionary;
pub use error::{AlignError, Result};
pub use parse::{VocabEntry, Vocabulary};
pub use source::{MemorySource, RowStream, TableFileSource, WordRow, WordSource};

/// Counters describing one pipeline run, for logging at the CLI layer
#[derive(Debug)]
pub struct PipelineSummary {
    pub dictionary_entries: usize,
    pub source_vocab_entries: usize,
    pub target_vocab_entries: usize,
    pub pairs_written: usize,
    pub lookup_misses: usize,
}

/// Run the whole alignment pipeline:
///
/// 1. Load the bilingual dictionary from the cache file, building it from
///    the word source (and persisting it) when the cache is absent.
/// 2. Parse both vocabulary files, concurrently; they share no state.
/// 3. Convert and write the `.giza` alignment file.
///
/// Any fatal error before the conversion stage leaves no output file
/// behind. Lookup misses during conversion are logged and skipped.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_pipeline(
    config: &AlignConfig,
    source: &mut dyn WordSource,
) -> Result<PipelineSummary> {
    let store = DictionaryStore::new(&config.cache_path);
    let dictionary = store.load_or_build(source, &config.source_lang, &config.target_lang)?;

    let (source_vocab, target_vocab) = std::thread::scope(|s| {
        let source_parse = s.spawn(|| Vocabulary::parse_file(&config.source_vocab));
        let target_parse = s.spawn(|| Vocabulary::parse_file(&config.target_vocab));
        (
            source_parse.join().expect("vocabulary parser panicked"),
            target_parse.join().expect("vocabulary parser panicked"),
        )
    });
    let source_vocab = source_vocab?;
    let target_vocab = target_vocab?;
    info!(
        "parsed vocabularies: {} source, {} target entries",
        source_vocab.len(),
        target_vocab.len()
    );

    let converter = Converter::new(
        &dictionary,
        &config.source_lang,
        &config.target_lang,
        &config.alphabet,
    );
    let outcome = converter.convert(&source_vocab, &target_vocab);
    write_giza(&outcome.pairs, &config.output_path)?;

    Ok(PipelineSummary {
        dictionary_entries: dictionary.len(),
        source_vocab_entries: source_vocab.len(),
        target_vocab_entries: target_vocab.len(),
        pairs_written: outcome.pairs.len(),
        lookup_misses: outcome.misses,
    })
}
