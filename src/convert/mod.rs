use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use tracing::{info, warn};

use crate::dictionary::BilingualDictionary;
use crate::error::Result;
use crate::parse::Vocabulary;

/// The set of letters recognized when normalizing a word for matching.
///
/// Normalization uppercases the word and trims leading/trailing characters
/// outside the alphabet. The default covers a Russian↔English pairing;
/// other language pairs supply their own ranges.
#[derive(Debug, Clone)]
pub struct Alphabet {
    ranges: Vec<RangeInclusive<char>>,
}

impl Alphabet {
    pub fn new(ranges: Vec<RangeInclusive<char>>) -> Self {
        Self { ranges }
    }

    /// Uppercase Cyrillic (А-Я plus Ё) and Latin (A-Z) letters.
    pub fn russian_english() -> Self {
        Self::new(vec!['А'..='Я', 'Ё'..='Ё', 'A'..='Z'])
    }

    fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(&c))
    }

    /// Uppercase the word, then strip leading and trailing characters that
    /// are not letters of this alphabet.
    pub fn normalize(&self, word: &str) -> String {
        word.to_uppercase()
            .trim_matches(|c: char| !self.contains(c))
            .to_string()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian_english()
    }
}

/// One emitted alignment: source vocabulary id paired with target vocabulary id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentPair {
    pub source_id: String,
    pub target_id: String,
}

/// Result of a conversion run
#[derive(Debug, Default)]
pub struct Conversion {
    /// Pairs in source-vocabulary order
    pub pairs: Vec<AlignmentPair>,
    /// Source words that found no dictionary entry or no target vocab id
    pub misses: usize,
}

/// Matches vocabulary words through the bilingual dictionary.
pub struct Converter<'a> {
    dictionary: &'a BilingualDictionary,
    source_lang: &'a str,
    target_lang: &'a str,
    alphabet: &'a Alphabet,
}

impl<'a> Converter<'a> {
    pub fn new(
        dictionary: &'a BilingualDictionary,
        source_lang: &'a str,
        target_lang: &'a str,
        alphabet: &'a Alphabet,
    ) -> Self {
        Self {
            dictionary,
            source_lang,
            target_lang,
            alphabet,
        }
    }

    /// Align both vocabularies through the dictionary.
    ///
    /// For each source entry (file order): find the first dictionary entry
    /// whose source-language word normalizes equal to the source word, then
    /// the first target-vocabulary id (file order) whose word normalizes
    /// equal to that entry's target-language word. Misses are logged and
    /// skipped; they never abort the run.
    pub fn convert(&self, source_vocab: &Vocabulary, target_vocab: &Vocabulary) -> Conversion {
        info!("converting dictionary to GIZA format...");
        let mut out = Conversion::default();

        for entry in source_vocab.entries() {
            let normalized = self.alphabet.normalize(&entry.word);

            // Dictionary iteration order is the BTreeMap uid order, so the
            // first-match rule is deterministic across runs.
            let translation = self.dictionary.values().find(|words| {
                words
                    .get(self.source_lang)
                    .is_some_and(|w| self.alphabet.normalize(w) == normalized)
            });

            let Some(translation) = translation else {
                warn!("word \"{}\" not found in dictionary.", entry.word);
                out.misses += 1;
                continue;
            };

            // An entry merged from only the source table has no target word.
            let Some(target_word) = translation.get(self.target_lang) else {
                warn!("no {} word for \"{}\".", self.target_lang, entry.word);
                out.misses += 1;
                continue;
            };

            let normalized_target = self.alphabet.normalize(target_word);
            let target_id = target_vocab
                .entries()
                .iter()
                .find(|t| self.alphabet.normalize(&t.word) == normalized_target)
                .map(|t| t.id.clone());

            match target_id {
                Some(target_id) => out.pairs.push(AlignmentPair {
                    source_id: entry.id.clone(),
                    target_id,
                }),
                None => {
                    warn!("translation of \"{}\" not found in target vocabulary.", entry.word);
                    out.misses += 1;
                }
            }
        }

        out
    }
}

/// Serialize pairs as newline-joined `"sourceId targetId"` lines.
pub fn to_giza(pairs: &[AlignmentPair]) -> String {
    pairs
        .iter()
        .map(|p| format!("{} {}", p.source_id, p.target_id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the alignment output file.
pub fn write_giza(pairs: &[AlignmentPair], path: &Path) -> Result<()> {
    info!("creating file {:?}...", path);
    fs::write(path, to_giza(pairs))?;
    info!("file created.");
    Ok(())
}
