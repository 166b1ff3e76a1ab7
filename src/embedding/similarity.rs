//! Cosine-similarity ranking over the embedding cache
use super::cache::EmbeddingCache;

/// Cosine similarity between two vectors, in `[-1, 1]`.
///
/// A zero-norm vector has no direction and scores 0 against anything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Up to `n` cache words closest to `word`, best first.
///
/// Full scan over the cache; fine while the vocabulary stays in the
/// thousands, an ANN index can replace it behind the same signature beyond
/// that. The target itself is excluded. Equal scores order lexicographically
/// so runs are reproducible. An absent target yields an empty result, not an
/// error.
pub fn top_similar(word: &str, cache: &EmbeddingCache, n: usize) -> Vec<String> {
    let target = match cache.vector(word) {
        Some(v) => v,
        None => return Vec::new(),
    };

    let mut scored: Vec<(f32, &str)> = cache
        .entries()
        .filter(|(other, _)| *other != word)
        .map(|(other, vector)| (cosine_similarity(target, vector), other))
        .collect();

    scored.sort_unstable_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().take(n).map(|(_, w)| w.to_string()).collect()
}
