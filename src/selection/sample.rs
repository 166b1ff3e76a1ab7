//! Bounded random sampling and word-id allocation
use rand::seq::SliceRandom;
use rand::Rng;

use super::Candidate;

/// Sample without replacement up to `cap` candidates.
///
/// Fewer candidates than `cap` means all of them come back. Output order is
/// the sampling order; the record builder preserves it.
pub fn sample<'a, R>(candidates: &'a [Candidate], cap: usize, rng: &mut R) -> Vec<&'a Candidate>
where
    R: Rng + ?Sized,
{
    candidates.choose_multiple(rng, cap).collect()
}

/// Monotonic `w_id` allocator: 1-based, contiguous across the whole run.
///
/// Owned by the pipeline run and threaded through the record builder, so no
/// global state is involved.
#[derive(Debug)]
pub struct IdGen {
    next: u32,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn candidates(n: usize) -> Vec<Candidate> {
        (1..=n)
            .map(|idx| Candidate {
                idx,
                word: format!("từ{}", idx),
            })
            .collect()
    }

    #[test]
    fn test_bounded_by_cap() {
        let pool = candidates(10);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&pool, 5, &mut rng).len(), 5);
    }

    #[test]
    fn test_takes_all_when_short() {
        let pool = candidates(3);
        let mut rng = StdRng::seed_from_u64(7);
        let selected = sample(&pool, 5, &mut rng);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_no_replacement() {
        let pool = candidates(8);
        let mut rng = StdRng::seed_from_u64(7);
        let selected = sample(&pool, 8, &mut rng);
        let mut positions: Vec<usize> = selected.iter().map(|c| c.idx).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 8);
    }

    #[test]
    fn test_idgen_contiguous() {
        let mut idgen = IdGen::new();
        let ids: Vec<u32> = (0..5).map(|_| idgen.next_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
