/*! Persistent word-embedding cache

The cache is a `word -> vector` mapping serialized wholesale into a single
binary blob. It is keyed by a fingerprint of the vocabulary that produced it:
a run whose vocabulary matches reuses the blob without ever touching the
embedding model, anything else triggers a full rebuild. Stale mappings are
never served silently.

The blob is written all-or-nothing: nothing lands on disk until the whole
vocabulary has been embedded.
!*/
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use super::model::Embedder;
use crate::error::Error;

/// Fingerprint of a vocabulary: sha256 over its newline-separated words.
///
/// The input set is ordered, so the digest is stable across runs.
pub fn vocabulary_fingerprint(vocab: &BTreeSet<String>) -> String {
    let mut hasher = Sha256::new();
    for word in vocab {
        hasher.update(word.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

/// Memoized `word -> vector` mapping plus the fingerprint of the vocabulary
/// it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingCache {
    fingerprint: String,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Get a reference to the cache's vocabulary fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Vector of `word`, if it has been embedded.
    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(|v| v.as_slice())
    }

    /// All `(word, vector)` entries, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.vectors.iter().map(|(w, v)| (w.as_str(), v.as_slice()))
    }

    /// Deserialize a cache blob.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let cache = bincode::deserialize_from(BufReader::new(file))?;
        Ok(cache)
    }

    /// Serialize the whole mapping into `path`, atomically.
    ///
    /// The blob is staged in a sibling temp file and moved into place, so a
    /// crash mid-write cannot leave a truncated cache behind.
    pub fn persist(&self, path: &Path) -> Result<(), Error> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let staging = NamedTempFile::new_in(parent)?;
        bincode::serialize_into(BufWriter::new(&staging), self)?;
        staging.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Embed every vocabulary word through `embedder`, fanning out over a
    /// bounded worker pool.
    ///
    /// Per-word embeddings are independent, so no ordering is required
    /// between workers. A word the embedder rejects is logged and left out
    /// of the mapping; absence later reads as "ineligible candidate".
    pub fn build<E>(vocab: &BTreeSet<String>, embedder: &E, workers: usize) -> Result<Self, Error>
    where
        E: Embedder + Sync,
    {
        info!("generating embeddings for {} words", vocab.len());
        let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
        let vectors: HashMap<String, Vec<f32>> = pool.install(|| {
            vocab
                .par_iter()
                .filter_map(|word| match embedder.embed(word) {
                    Ok(vector) => Some((word.clone(), vector)),
                    Err(e) => {
                        warn!("could not embed {:?}: {:?}", word, e);
                        None
                    }
                })
                .collect()
        });

        Ok(Self {
            fingerprint: vocabulary_fingerprint(vocab),
            vectors,
        })
    }

    /// Load the cache at `path` if its fingerprint matches `vocab`,
    /// otherwise build, persist and return a fresh one.
    ///
    /// The hit path never invokes the embedding model. A stale or unreadable
    /// blob is rebuilt from scratch; the rebuilt mapping is persisted before
    /// returning.
    pub fn get_or_build<E>(
        path: &Path,
        vocab: &BTreeSet<String>,
        embedder: &E,
        workers: usize,
    ) -> Result<Self, Error>
    where
        E: Embedder + Sync,
    {
        if path.exists() {
            match Self::load(path) {
                Ok(cache) if cache.fingerprint == vocabulary_fingerprint(vocab) => {
                    info!("loading cached embeddings ({} words)", cache.len());
                    return Ok(cache);
                }
                Ok(_) => warn!("embedding cache {:?} is stale, rebuilding", path),
                Err(e) => warn!("could not read embedding cache {:?}: {:?}, rebuilding", path, e),
            }
        }

        let cache = Self::build(vocab, embedder, workers)?;
        cache.persist(path)?;
        Ok(cache)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Deterministic embedder counting how often the model is invoked.
    struct CountingEmbedder {
        calls: AtomicUsize,
        reject: Option<&'static str>,
    }

    impl CountingEmbedder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reject: None,
            }
        }

        fn rejecting(word: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reject: Some(word),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Embedder for CountingEmbedder {
        fn embed(&self, word: &str) -> Result<Vec<f32>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject == Some(word) {
                return Err(Error::Custom(format!("cannot embed {:?}", word)));
            }
            // direction derived from the word bytes, stable across calls
            let x = word.bytes().map(f32::from).sum::<f32>();
            Ok(vec![x, 1.0, word.len() as f32])
        }
    }

    fn vocab(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fingerprint_stable() {
        let a = vocabulary_fingerprint(&vocab(&["chó", "chạy", "nhanh"]));
        let b = vocabulary_fingerprint(&vocab(&["nhanh", "chó", "chạy"]));
        assert_eq!(a, b);
        assert_ne!(a, vocabulary_fingerprint(&vocab(&["chó", "chạy"])));
    }

    #[test]
    fn test_build_covers_vocabulary() {
        let vocab = vocab(&["một", "hai", "ba"]);
        let cache = EmbeddingCache::build(&vocab, &CountingEmbedder::new(), 2).unwrap();
        assert_eq!(cache.len(), 3);
        for word in &vocab {
            assert!(cache.contains(word));
        }
    }

    #[test]
    fn test_rejected_word_absent() {
        let vocab = vocab(&["một", "hai"]);
        let cache = EmbeddingCache::build(&vocab, &CountingEmbedder::rejecting("hai"), 2).unwrap();
        assert!(cache.contains("một"));
        assert!(!cache.contains("hai"));
    }

    #[test]
    fn test_persist_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.bin");

        let vocab = vocab(&["một", "hai"]);
        let cache = EmbeddingCache::build(&vocab, &CountingEmbedder::new(), 1).unwrap();
        cache.persist(&path).unwrap();

        let loaded = EmbeddingCache::load(&path).unwrap();
        assert_eq!(loaded.fingerprint(), cache.fingerprint());
        assert_eq!(loaded.vector("một"), cache.vector("một"));
        assert_eq!(loaded.len(), cache.len());
    }

    // an up-to-date cache file must short-circuit the embedding model entirely
    #[test]
    fn test_reuse_without_model_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.bin");
        let vocab = vocab(&["một", "hai", "ba"]);

        let first = CountingEmbedder::new();
        let built = EmbeddingCache::get_or_build(&path, &vocab, &first, 1).unwrap();
        assert_eq!(first.calls(), 3);

        let second = CountingEmbedder::new();
        let reused = EmbeddingCache::get_or_build(&path, &vocab, &second, 1).unwrap();
        assert_eq!(second.calls(), 0);
        assert_eq!(reused.fingerprint(), built.fingerprint());
        for word in &vocab {
            assert_eq!(reused.vector(word), built.vector(word));
        }
    }

    #[test]
    fn test_stale_cache_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.bin");

        let old = vocab(&["một", "hai"]);
        EmbeddingCache::get_or_build(&path, &old, &CountingEmbedder::new(), 1).unwrap();

        let new = vocab(&["một", "hai", "ba"]);
        let embedder = CountingEmbedder::new();
        let rebuilt = EmbeddingCache::get_or_build(&path, &new, &embedder, 1).unwrap();

        assert_eq!(embedder.calls(), 3);
        assert!(rebuilt.contains("ba"));
        // the rebuilt blob replaced the stale one on disk
        let reloaded = EmbeddingCache::load(&path).unwrap();
        assert_eq!(reloaded.fingerprint(), vocabulary_fingerprint(&new));
    }
}
