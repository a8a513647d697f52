pub mod vocabulary;

pub use vocabulary::{VocabEntry, Vocabulary};
