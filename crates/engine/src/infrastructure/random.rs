//! Random source implementations.

use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fixed random for testing.
///
/// Always yields the same value, clamped into the requested range, so a
/// `FixedRandom(0)` deterministically picks the lowest length and the first option.
#[cfg(test)]
pub struct FixedRandom(pub u32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        self.0.clamp(min, max)
    }

    fn pick(&self, len: usize) -> usize {
        (self.0 as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_inclusive_range() {
        let random = SystemRandom::new();
        for _ in 0..1000 {
            let value = random.gen_range(3, 5);
            assert!((3..=5).contains(&value));
        }
        assert_eq!(random.gen_range(7, 7), 7);
    }

    #[test]
    fn system_random_picks_valid_index() {
        let random = SystemRandom::new();
        for _ in 0..1000 {
            assert!(random.pick(3) < 3);
        }
    }

    #[test]
    fn fixed_random_clamps() {
        assert_eq!(FixedRandom(0).gen_range(10, 29), 10);
        assert_eq!(FixedRandom(500).gen_range(30, 100), 100);
        assert_eq!(FixedRandom(2).pick(2), 1);
    }
}
