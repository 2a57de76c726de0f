//! Hints module - derived facts about the secret key
//!
//! Three facts are computed from the key digits: their sum, their product
//! and their min -> max range. The set is derived once per session and one
//! fact is picked uniformly at random per request.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::secret::SecretKey;

/// One derived fact about the secret key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Sum(u32),
    Product(u32),
    Range { min: u8, max: u8 },
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Sum(sum) => write!(f, "The sum of the digits is: {sum}"),
            Hint::Product(product) => write!(f, "The product of the digits is: {product}"),
            Hint::Range { min, max } => write!(f, "The range of the digits is: {min} -> {max}"),
        }
    }
}

/// The full hint set for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hints {
    all: [Hint; 3],
}

impl Hints {
    pub fn derive(secret: &SecretKey) -> Self {
        let digits = secret.digits();
        let sum = digits.iter().map(|&d| u32::from(d)).sum();
        // At most 9! for unique digits, fits in u32.
        let product = digits.iter().map(|&d| u32::from(d)).product();
        let min = digits.iter().copied().min().unwrap_or(0);
        let max = digits.iter().copied().max().unwrap_or(0);

        Self {
            all: [Hint::Sum(sum), Hint::Product(product), Hint::Range { min, max }],
        }
    }

    pub fn all(&self) -> &[Hint; 3] {
        &self.all
    }

    /// Pick one hint uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Hint {
        self.all.choose(rng).copied().unwrap_or(self.all[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_derive_facts() {
        let secret: SecretKey = "3917".parse().unwrap();
        let hints = Hints::derive(&secret);
        assert_eq!(
            hints.all(),
            &[
                Hint::Sum(20),
                Hint::Product(189),
                Hint::Range { min: 1, max: 9 }
            ]
        );
    }

    #[test]
    fn test_zero_digit_product() {
        let secret: SecretKey = "905".parse().unwrap();
        assert_eq!(Hints::derive(&secret).all()[1], Hint::Product(0));
    }

    #[test]
    fn test_hint_text() {
        assert_eq!(Hint::Sum(6).to_string(), "The sum of the digits is: 6");
        assert_eq!(Hint::Product(6).to_string(), "The product of the digits is: 6");
        assert_eq!(
            Hint::Range { min: 1, max: 3 }.to_string(),
            "The range of the digits is: 1 -> 3"
        );
    }

    #[test]
    fn test_pick_reaches_every_hint() {
        let secret: SecretKey = "123".parse().unwrap();
        let hints = Hints::derive(&secret);
        let mut rng = StdRng::seed_from_u64(5);

        let mut seen = [false; 3];
        for _ in 0..300 {
            let hint = hints.pick(&mut rng);
            let idx = hints.all().iter().position(|&h| h == hint).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_pick_is_uniform() {
        let secret: SecretKey = "4071".parse().unwrap();
        let hints = Hints::derive(&secret);
        let mut rng = StdRng::seed_from_u64(31);

        let mut counts = [0u32; 3];
        for _ in 0..3_000 {
            let hint = hints.pick(&mut rng);
            let idx = hints.all().iter().position(|&h| h == hint).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((850..1150).contains(&count), "skewed count {count}");
        }
    }
}
