use std::collections::BTreeMap;

use tracing::info;

use crate::error::Result;
use crate::source::{RowStream, WordSource};

/// Bilingual lookup table: uid -> language code -> word.
///
/// BTreeMap keeps iteration deterministic, which makes the "first match
/// wins" rule during conversion stable across runs. Serializes as a JSON
/// object `{ uid: { lang: word } }`.
pub type BilingualDictionary = BTreeMap<String, BTreeMap<String, String>>;

/// Drain a row stream into a uid -> word map for one language.
/// A duplicate uid keeps the last row seen.
pub fn collect_words(stream: RowStream<'_>) -> Result<BTreeMap<String, String>> {
    let mut words = BTreeMap::new();
    for row in stream {
        let row = row?;
        words.insert(row.uid, row.word);
    }
    Ok(words)
}

/// Merge one language's words into a dictionary.
///
/// Pure value-in, value-out: sets `result[uid][lang]` for every uid in
/// `words` and leaves every other uid untouched.
pub fn merge(
    mut dict: BilingualDictionary,
    lang: &str,
    words: BTreeMap<String, String>,
) -> BilingualDictionary {
    for (uid, word) in words {
        dict.entry(uid).or_default().insert(lang.to_string(), word);
    }
    dict
}

/// Build a dictionary by fetching and merging each language table in turn.
pub fn build(source: &mut dyn WordSource, langs: &[&str]) -> Result<BilingualDictionary> {
    let mut dict = BilingualDictionary::new();
    for lang in langs {
        info!("fetching words for language \"{}\"...", lang);
        let words = collect_words(source.rows(lang)?)?;
        info!("{} fetched for \"{}\".", words.len(), lang);
        dict = merge(dict, lang, words);
    }
    Ok(dict)
}
