/*! Word-table generation pipeline

Derives the word table of a language-learning corpus from its sentence
table: per sentence, a bounded random subset of eligible words, each with
its closest cache neighbours and translations.
!*/
mod pipeline;

pub use pipeline::{
    extract_vocabulary, WordGen, WordGenParams, DEFAULT_CAP, DEFAULT_TOP_N,
};
