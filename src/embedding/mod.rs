/*! Word embeddings

Holds the [Embedder] trait, the persistent embedding cache and
cosine-similarity ranking over it.

The current embedding model used is [fastText](https://fasttext.cc) !*/
mod cache;
mod model;
mod similarity;

pub use cache::{vocabulary_fingerprint, EmbeddingCache};
pub use model::{Embedder, FastTextEmbedder};
pub use similarity::{cosine_similarity, top_similar};
