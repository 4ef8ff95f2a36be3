//! This file contains simple helper functions and test helpers.

#[cfg(test)]
use super::float::Float;
#[cfg(test)]
use super::sign::Sign;

/// Returns list of interesting values that various tests use to catch edge
/// cases: every special category with both signs, and normal numbers with
/// small, large, negative and multi-limb parts.
#[cfg(test)]
pub fn get_special_test_values() -> [Float; 14] {
    use super::magnitude::Magnitude;
    let normal = |neg: bool, exp: i64, parts: &[u64]| {
        Float::new(Sign::from_negative(neg), exp, Magnitude::from_parts(parts))
    };
    [
        Float::nan(Sign::Positive),
        Float::nan(Sign::Negative),
        Float::inf(Sign::Positive),
        Float::inf(Sign::Negative),
        Float::zero(Sign::Positive),
        Float::zero(Sign::Negative),
        Float::one(Sign::Positive),
        Float::one(Sign::Negative),
        normal(false, 0, &[u64::MAX]),
        normal(true, 3, &[10]),
        normal(false, -2, &[1, 2, 3]),
        normal(true, -1, &[1 << 63]),
        normal(false, 7, &[0, 0, 1]),
        normal(true, -5, &[0x5555_5555_5555_5555, 42]),
    ]
}

// Linear-feedback shift register. We use this as a random number generator for
// tests and for `Magnitude::pseudorandom`.
pub struct Lfsr {
    state: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    /// Generate a new LFSR number generator that starts with a specific state.
    pub fn new_with_seed(seed: u32) -> Lfsr {
        Lfsr {
            state: 0x13371337 ^ seed,
        }
    }

    fn step(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    fn get(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.step();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    pub fn get64(&mut self) -> u64 {
        ((self.get() as u64) << 32) | self.get() as u64
    }
}

impl Iterator for Lfsr {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.get64())
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_seeds_diverge() {
    let mut a = Lfsr::new_with_seed(1);
    let mut b = Lfsr::new_with_seed(2);
    let same = (0..64).filter(|_| a.get64() == b.get64()).count();
    assert!(same < 4);
}

#[test]
fn test_special_values_cover_categories() {
    use super::float::Category;
    let values = get_special_test_values();
    for cat in [
        Category::NaN,
        Category::Infinity,
        Category::Zero,
        Category::Normal,
    ] {
        assert!(values.iter().any(|v| v.get_category() == cat));
        assert!(values
            .iter()
            .any(|v| v.get_category() == cat && v.is_negative()));
    }
}
