//! Vaporetto adapters
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vaporetto::{Model, Predictor, Sentence};

use super::{EntityRecognizer, EntityToken, TaggedToken, Tagger, OUTSIDE_TAG};
use crate::error::Error;

/// Read a (non-compressed) vaporetto model file and build a tag-predicting
/// [Predictor] out of it.
fn load_predictor(path: &Path) -> Result<Predictor, Error> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let model = Model::read(&mut reader)?;
    Ok(Predictor::new(model, true)?)
}

/// Join the inner whitespace of a multi-word token with `_` so that a
/// compound is one vocabulary unit.
fn join_compound(surface: &str) -> String {
    surface.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Word segmenter + POS tagger backed by a vaporetto model.
///
/// The model's first tag class is the POS tag; proper nouns carry
/// [super::PROPER_NOUN_TAG].
pub struct VaporettoTagger {
    predictor: Predictor,
}

impl VaporettoTagger {
    /// Load a segmentation + POS model.
    ///
    /// # Errors
    /// Propagates [vaporetto::errors::VaporettoError] on unreadable or
    /// invalid model files.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            predictor: load_predictor(path)?,
        })
    }
}

impl Tagger for VaporettoTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Error> {
        // vaporetto rejects empty input, but an empty sentence simply has no tokens
        if sentence.is_empty() {
            return Ok(Vec::new());
        }
        let mut s = Sentence::from_raw(sentence)?;
        self.predictor.predict(&mut s);
        s.fill_tags();

        Ok(s.iter_tokens()
            .map(|token| {
                let pos = token
                    .tags()
                    .first()
                    .and_then(|tag| tag.as_ref())
                    .map(|tag| tag.to_string())
                    .unwrap_or_default();
                TaggedToken::new(join_compound(token.surface()), pos)
            })
            .collect())
    }
}

/// Entity recognizer backed by a vaporetto model whose tag classes are
/// entity labels (`"O"` outside entities).
pub struct VaporettoRecognizer {
    predictor: Predictor,
}

impl VaporettoRecognizer {
    /// Load an entity-recognition model.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            predictor: load_predictor(path)?,
        })
    }
}

impl EntityRecognizer for VaporettoRecognizer {
    fn entities(&self, sentence: &str) -> Result<Vec<EntityToken>, Error> {
        if sentence.is_empty() {
            return Ok(Vec::new());
        }
        let mut s = Sentence::from_raw(sentence)?;
        self.predictor.predict(&mut s);
        s.fill_tags();

        Ok(s.iter_tokens()
            .map(|token| {
                let label = token
                    .tags()
                    .first()
                    .and_then(|tag| tag.as_ref())
                    .map(|tag| tag.to_string())
                    .unwrap_or_else(|| OUTSIDE_TAG.to_string());
                // surfaces stay as-is: the cleaner re-joins kept tokens itself
                EntityToken::new(token.surface(), label)
            })
            .collect())
    }
}
