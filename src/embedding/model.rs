//! Embedding model adapter
use std::path::Path;

use fasttext::FastText as FastTextLib;

use crate::error::Error;

/// Embedding capability.
///
/// Embeds one surface form at a time, out of sentence context; the cache
/// layer memoizes, so implementations stay stateless.
pub trait Embedder {
    /// Embed a single word into a fixed-length vector.
    ///
    /// # Errors
    /// An error means this word cannot be embedded. Callers treat it as
    /// "absent from the cache", not as a fatal condition.
    fn embed(&self, word: &str) -> Result<Vec<f32>, Error>;
}

impl<E: Embedder + ?Sized> Embedder for &E {
    fn embed(&self, word: &str) -> Result<Vec<f32>, Error> {
        (**self).embed(word)
    }
}

/// Holds a [fasttext::FastText] word-vector model.
///
/// Word vectors come out of subword-ngram averaging, so any surface form
/// yields a vector of the model's dimension.
pub struct FastTextEmbedder {
    model: FastTextLib,
}

impl FastTextEmbedder {
    /// Load a fasttext `.bin` model.
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors. Failing to load the model is
    /// fatal for the pipeline: there is no fallback embedding path.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let filename = path.to_str().ok_or_else(|| {
            Error::Custom(format!("invalid filepath for embedding model: {:?}", path))
        })?;
        let mut model = FastTextLib::new();
        model.load_model(filename).map_err(Error::FastText)?;
        Ok(Self { model })
    }
}

impl Embedder for FastTextEmbedder {
    fn embed(&self, word: &str) -> Result<Vec<f32>, Error> {
        let vector = self.model.get_word_vector(word).map_err(Error::FastText)?;
        // a zero vector has no direction, so it cannot enter similarity ranking
        if vector.iter().all(|x| *x == 0.0) {
            return Err(Error::FastText(format!("no embedding for {:?}", word)));
        }
        Ok(vector)
    }
}
