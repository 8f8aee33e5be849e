//! Random pattern generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use decode_types::{PadId, Pattern, PatternSource, PADS, PAD_COUNT};

pub const DEFAULT_RESAMPLE_ATTEMPTS: u32 = 10;

/// Draw `length` pads uniformly from the first `pad_count` pads.
///
/// A draw that would make three identical pads in a row is resampled, up to
/// `attempts` draws per position. When the budget runs out the last draw is
/// kept, so runs of three are rare but possible.
pub fn generate_pattern<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    pad_count: usize,
    attempts: u32,
) -> Pattern {
    let pad_count = pad_count.clamp(1, PAD_COUNT);
    let attempts = attempts.max(1);
    let mut pattern: Pattern = Vec::with_capacity(length);

    for i in 0..length {
        let mut pad = draw(rng, pad_count);
        let mut drawn = 1;
        while drawn < attempts && i >= 2 && pattern[i - 1] == pad && pattern[i - 2] == pad {
            pad = draw(rng, pad_count);
            drawn += 1;
        }
        pattern.push(pad);
    }

    pattern
}

fn draw<R: Rng + ?Sized>(rng: &mut R, pad_count: usize) -> PadId {
    PADS[rng.gen_range(0..pad_count)].id
}

/// Length of the longest run of identical consecutive pads.
pub fn longest_run(pattern: &[PadId]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<PadId> = None;
    for &pad in pattern {
        current = if prev == Some(pad) { current + 1 } else { 1 };
        longest = longest.max(current);
        prev = Some(pad);
    }
    longest
}

/// Seedable generator used by the engine for each new round.
pub struct PatternGenerator {
    rng: StdRng,
    pad_count: usize,
    attempts: u32,
}

impl PatternGenerator {
    pub fn new(pad_count: usize, attempts: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            pad_count: pad_count.clamp(1, PAD_COUNT),
            attempts: attempts.max(1),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(PAD_COUNT, DEFAULT_RESAMPLE_ATTEMPTS, Some(seed))
    }

    pub fn pad_count(&self) -> usize {
        self.pad_count
    }
}

impl PatternSource for PatternGenerator {
    fn generate(&mut self, length: usize) -> Pattern {
        generate_pattern(&mut self.rng, length, self.pad_count, self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_length_from_allowed_pads() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in 0..12 {
            for pad_count in 1..=PAD_COUNT {
                let pattern = generate_pattern(&mut rng, length, pad_count, 10);
                assert_eq!(pattern.len(), length);
                assert!(pattern.iter().all(|p| p.index() < pad_count));
            }
        }
    }

    #[test]
    fn triple_runs_are_rare() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let trials = 2_000;
        let violations = (0..trials)
            .filter(|_| longest_run(&generate_pattern(&mut rng, 6, PAD_COUNT, 10)) >= 3)
            .count();
        // With six pads a resample hits the same pad with p = 1/6; ten misses in
        // a row is about 1.6e-8 per position.
        assert!(violations * 100 < trials, "{} violations", violations);
    }

    #[test]
    fn single_attempt_allows_runs() {
        let mut rng = StdRng::seed_from_u64(3);
        let violations = (0..2_000)
            .filter(|_| longest_run(&generate_pattern(&mut rng, 6, 2, 1)) >= 3)
            .count();
        assert!(violations > 0);
    }

    #[test]
    fn single_pad_accepts_repeats_after_budget() {
        let mut rng = StdRng::seed_from_u64(9);
        let pattern = generate_pattern(&mut rng, 5, 1, 10);
        assert_eq!(pattern.len(), 5);
        assert_eq!(longest_run(&pattern), 5);
    }

    #[test]
    fn same_seed_same_patterns() {
        let mut a = PatternGenerator::seeded(42);
        let mut b = PatternGenerator::seeded(42);
        for len in [3, 3, 4, 4, 5, 6] {
            assert_eq!(a.generate(len), b.generate(len));
        }
    }

    #[test]
    fn longest_run_counts() {
        let p = |i| PadId::new(i).unwrap();
        assert_eq!(longest_run(&[]), 0);
        assert_eq!(longest_run(&[p(1)]), 1);
        assert_eq!(longest_run(&[p(1), p(1), p(2), p(2), p(2)]), 3);
    }
}
