//! Candidate eligibility
use std::collections::HashSet;

use crate::embedding::EmbeddingCache;
use crate::tagging::TaggedToken;

/// A token eligible for selection.
///
/// `idx` is the 1-based position in the tagged token sequence, not a
/// character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub idx: usize,
    pub word: String,
}

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibilityReason {
    ProperNoun,
    Stopword,
    NotEmbedded,
}

/// Assessment outcome for one token. Rejections keep their reason so that
/// exclusion is observable instead of silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible(Candidate),
    Ineligible {
        idx: usize,
        word: String,
        reason: IneligibilityReason,
    },
}

/// Assess every tagged token of one sentence.
///
/// Proper nouns and words without a cached embedding are out; the stopword
/// check only applies when a stopword set is supplied.
pub fn assess(
    tokens: &[TaggedToken],
    cache: &EmbeddingCache,
    stopwords: Option<&HashSet<String>>,
) -> Vec<Eligibility> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let idx = i + 1;
            let reason = if token.is_proper_noun() {
                Some(IneligibilityReason::ProperNoun)
            } else if stopwords.map_or(false, |set| set.contains(token.surface())) {
                Some(IneligibilityReason::Stopword)
            } else if !cache.contains(token.surface()) {
                Some(IneligibilityReason::NotEmbedded)
            } else {
                None
            };

            match reason {
                Some(reason) => Eligibility::Ineligible {
                    idx,
                    word: token.surface().to_string(),
                    reason,
                },
                None => Eligibility::Eligible(Candidate {
                    idx,
                    word: token.surface().to_string(),
                }),
            }
        })
        .collect()
}

/// Keep the eligible candidates, in token order.
pub fn eligible(assessed: Vec<Eligibility>) -> Vec<Candidate> {
    assessed
        .into_iter()
        .filter_map(|e| match e {
            Eligibility::Eligible(candidate) => Some(candidate),
            Eligibility::Ineligible { .. } => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::embedding::Embedder;
    use crate::error::Error;
    use crate::tagging::PROPER_NOUN_TAG;

    struct UnitEmbedder;

    impl Embedder for UnitEmbedder {
        fn embed(&self, _word: &str) -> Result<Vec<f32>, Error> {
            Ok(vec![1.0])
        }
    }

    fn cache_of(words: &[&str]) -> EmbeddingCache {
        let vocab: BTreeSet<String> = words.iter().map(|w| w.to_string()).collect();
        EmbeddingCache::build(&vocab, &UnitEmbedder, 1).unwrap()
    }

    fn tokens() -> Vec<TaggedToken> {
        vec![
            TaggedToken::new("con", "Nc"),
            TaggedToken::new("Hà_Nội", PROPER_NOUN_TAG),
            TaggedToken::new("chạy", "V"),
            TaggedToken::new("nhanh", "A"),
        ]
    }

    #[test]
    fn test_reasons() {
        let cache = cache_of(&["con", "Hà_Nội", "chạy"]);
        let assessed = assess(&tokens(), &cache, None);

        assert_eq!(
            assessed[0],
            Eligibility::Eligible(Candidate { idx: 1, word: "con".to_string() })
        );
        assert_eq!(
            assessed[1],
            Eligibility::Ineligible {
                idx: 2,
                word: "Hà_Nội".to_string(),
                reason: IneligibilityReason::ProperNoun,
            }
        );
        assert_eq!(
            assessed[2],
            Eligibility::Eligible(Candidate { idx: 3, word: "chạy".to_string() })
        );
        assert_eq!(
            assessed[3],
            Eligibility::Ineligible {
                idx: 4,
                word: "nhanh".to_string(),
                reason: IneligibilityReason::NotEmbedded,
            }
        );
    }

    #[test]
    fn test_stopword_reason() {
        let cache = cache_of(&["con", "chạy", "nhanh"]);
        let stopwords: HashSet<String> = ["con".to_string()].into_iter().collect();
        let assessed = assess(&tokens(), &cache, Some(&stopwords));

        assert_eq!(
            assessed[0],
            Eligibility::Ineligible {
                idx: 1,
                word: "con".to_string(),
                reason: IneligibilityReason::Stopword,
            }
        );
    }

    #[test]
    fn test_eligible_keeps_token_order() {
        let cache = cache_of(&["con", "chạy", "nhanh"]);
        let candidates = eligible(assess(&tokens(), &cache, None));
        let positions: Vec<usize> = candidates.iter().map(|c| c.idx).collect();
        assert_eq!(positions, vec![1, 3, 4]);
    }
}
