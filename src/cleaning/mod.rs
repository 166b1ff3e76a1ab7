/*! Sentence cleaning

Normalizes a raw sentence for vocabulary extraction: named entities are
stripped, the remainder is lowercased, punctuation becomes whitespace and
whitespace runs are collapsed.
!*/
use itertools::Itertools;

use crate::error::Error;
use crate::tagging::EntityRecognizer;

/// Entity-stripping sentence normalizer.
///
/// Pure modulo the recognizer call. There is no fallback cleaning path: a
/// recognizer failure aborts the whole run.
pub struct SentenceCleaner<R> {
    ner: R,
}

impl<R> SentenceCleaner<R>
where
    R: EntityRecognizer,
{
    pub fn new(ner: R) -> Self {
        Self { ner }
    }

    /// Clean a sentence: drop entity tokens, lowercase, replace ASCII
    /// punctuation with a space and collapse whitespace.
    pub fn clean(&self, sentence: &str) -> Result<String, Error> {
        let tokens = self.ner.entities(sentence)?;
        let kept = tokens
            .iter()
            .filter(|token| !token.is_entity())
            .map(|token| token.surface())
            .join(" ");

        let lowered = kept.to_lowercase();
        let depunct: String = lowered
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect();

        Ok(depunct.split_whitespace().join(" "))
    }
}
