// ═══════════════════════════════════════════════════════════════════════
// Randomness seam — every random decision in the engine goes through here
// so games can be replayed from a seed or scripted in tests.
// ═══════════════════════════════════════════════════════════════════════

use rand::{Rng, RngCore};

pub const DIE_FACES: u8 = 6;

pub trait RandomSource {
    /// One six-sided die, 1..=6.
    fn roll_die(&mut self) -> u8;

    /// Uniform index in 0..len. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Roll `count` dice, highest first.
    fn roll_sorted(&mut self, count: usize) -> Vec<u8> {
        let mut dice: Vec<u8> = (0..count).map(|_| self.roll_die()).collect();
        dice.sort_unstable_by(|a, b| b.cmp(a));
        dice
    }
}

impl<R: RngCore> RandomSource for R {
    fn roll_die(&mut self) -> u8 {
        self.gen_range(1..=DIE_FACES)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_dice_in_range_and_sorted() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let dice = rng.roll_sorted(3);
            assert_eq!(dice.len(), 3);
            assert!(dice.iter().all(|d| (1..=6).contains(d)));
            assert!(dice.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let ra: Vec<u8> = (0..20).map(|_| a.roll_die()).collect();
        let rb: Vec<u8> = (0..20).map(|_| b.roll_die()).collect();
        assert_eq!(ra, rb);
    }
}
