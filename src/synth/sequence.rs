//! Seeded pseudo-random sequence.
//!
//! A linear congruential generator over `f64` state. The state is an explicit
//! value: [`SeededSequence::step`] returns the drawn value together with the
//! next state and never mutates in place. The [`Iterator`] impl is a thin
//! adapter over `step`.
//!
//! Seeding from a string is a pure function of the string, so the sequence is
//! identical across processes. Not suitable for anything security-related.

use rand::Rng;

const MULTIPLIER: f64 = 9301.0;
const INCREMENT: f64 = 49297.0;
const MODULUS: f64 = 233280.0;

/// Deterministic LCG yielding floats in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededSequence {
    state: f64,
}

impl SeededSequence {
    /// Seed from a string via its 32-bit rolling hash.
    pub fn from_seed(seed: &str) -> Self {
        Self::from_state(normalize_hash(string_hash(seed)))
    }

    /// Seed from a non-deterministic source.
    pub fn from_entropy() -> Self {
        Self::from_state(rand::thread_rng().gen_range(0.0..1.0))
    }

    /// Seed from an explicit initial state.
    pub fn from_state(state: f64) -> Self {
        Self { state }
    }

    /// Seeded when a seed is given, otherwise from entropy.
    pub fn from_optional_seed(seed: Option<&str>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Current internal state.
    pub fn state(&self) -> f64 {
        self.state
    }

    /// Advance once: returns the drawn value and the successor state.
    pub fn step(&self) -> (f64, SeededSequence) {
        let next = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        (next / MODULUS, Self { state: next })
    }

    /// Draw a value scaled into `[min, max)`.
    pub fn next_in(&mut self, min: f64, max: f64) -> f64 {
        let (value, next) = self.step();
        *self = next;
        min + value * (max - min)
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let (value, next) = self.step();
        *self = next;
        Some(value)
    }
}

/// 32-bit rolling string hash (`h = h * 31 + unit`) over UTF-16 code units.
pub fn string_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Map a hash onto `[0, 1]`.
fn normalize_hash(hash: i32) -> f64 {
    f64::from(hash).abs() / f64::from(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("abc"), 96354);
        assert_eq!(string_hash("hello"), 99162322);
    }

    #[test]
    fn test_string_hash_wraps() {
        // Long inputs overflow 32 bits and must wrap rather than panic.
        let long = "z".repeat(64);
        assert_eq!(string_hash(&long), string_hash(&long));
    }

    #[test]
    fn test_first_step_from_zero() {
        let (value, next) = SeededSequence::from_state(0.0).step();
        assert_eq!(next.state(), 49297.0);
        assert!((value - 49297.0 / 233280.0).abs() < 1e-15);
    }

    #[test]
    fn test_step_does_not_mutate() {
        let seq = SeededSequence::from_seed("abc");
        let (a, _) = seq.step();
        let (b, _) = seq.step();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a: Vec<f64> = SeededSequence::from_seed("abc").take(64).collect();
        let b: Vec<f64> = SeededSequence::from_seed("abc").take(64).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a: Vec<f64> = SeededSequence::from_seed("abc").take(8).collect();
        let b: Vec<f64> = SeededSequence::from_seed("abd").take(8).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_in_unit_range() {
        for seed in ["", "abc", "user@example.com", "🦀", "ZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ"] {
            for v in SeededSequence::from_seed(seed).take(500) {
                assert!((0.0..1.0).contains(&v), "seed {:?} produced {}", seed, v);
            }
        }
    }

    #[test]
    fn test_iterator_matches_step() {
        let seq = SeededSequence::from_seed("xyz");
        let (first, after) = seq.step();
        let (second, _) = after.step();
        let drawn: Vec<f64> = seq.take(2).collect();
        assert_eq!(drawn, vec![first, second]);
    }

    #[test]
    fn test_next_in_range() {
        let mut seq = SeededSequence::from_seed("range");
        for _ in 0..100 {
            let v = seq.next_in(0.15, 0.4);
            assert!((0.15..0.4).contains(&v));
        }
    }

    #[test]
    fn test_entropy_values_in_range() {
        for v in SeededSequence::from_entropy().take(100) {
            assert!((0.0..1.0).contains(&v));
        }
    }
}
