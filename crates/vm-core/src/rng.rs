//! Random number generation for map generation
//!
//! Uses a seeded ChaCha RNG so identical seeds produce identical maps.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Map random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns lo..hi-1
    ///
    /// Returns `lo` if the range is empty.
    pub fn range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rn2(2) == 1
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.range(50, 100);
            assert!((50..100).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = MapRng::new(42);
        let mut rng2 = MapRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.coin(), rng2.coin());
        }
    }

    #[test]
    fn test_coin_hits_both_sides() {
        let mut rng = MapRng::new(7);
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!(heads > 0 && heads < 1000);
    }

    #[test]
    fn test_empty_inputs() {
        let mut rng = MapRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 3), 9);
    }
}
