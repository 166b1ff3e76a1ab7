/*! Segmentation + POS tagging capability

All taggers should implement [Tagger] to be useable in vocabulary extraction
and candidate selection.
!*/
use crate::error::Error;

/// Reserved POS tag for proper nouns.
pub const PROPER_NOUN_TAG: &str = "Np";

/// A segmented token along with its POS tag.
///
/// Multi-word compounds are a single token, joined with `_`
/// (`học_sinh`), since the target language segments across whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    surface: String,
    pos: String,
}

impl TaggedToken {
    pub fn new<S: Into<String>, P: Into<String>>(surface: S, pos: P) -> Self {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }

    /// Get a reference to the token's surface form.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Get a reference to the token's POS tag.
    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn is_proper_noun(&self) -> bool {
        self.pos == PROPER_NOUN_TAG
    }
}

pub trait Tagger {
    /// Segment and tag a sentence, returning tokens in sentence order.
    ///
    /// Stateless: the embedding layer is where caching happens.
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Error>;
}
