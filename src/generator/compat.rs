//! Length-mutating helpers that swallow errors.
//!
//! Each helper overwrites the generator's stored length before generating,
//! so later [`Generator::generate`] calls keep using the last length set
//! here. Failures are logged and reported as an empty string. Prefer
//! [`Generator::generate_with_length`] and [`Generator::generate_strength`]
//! in new code.

use super::Generator;
use crate::charset::Strength;
use rand_core::{CryptoRng, RngCore};

impl<R: RngCore + CryptoRng> Generator<R> {
    /// Stores `length` as the generator's length and generates one password.
    ///
    /// Returns an empty string if generation fails.
    pub fn generate_by_length(&mut self, length: u32) -> String {
        self.set_length(length);
        match self.generate() {
            Ok(password) => password,
            Err(e) => {
                tracing::error!(error = %e, length, "Password generation failed");
                String::new()
            }
        }
    }

    /// Stores the weak tier length and generates one password.
    pub fn generate_by_weak(&mut self) -> String {
        self.generate_by_strength(Strength::Weak)
    }

    /// Stores the OK tier length and generates one password.
    pub fn generate_by_ok(&mut self) -> String {
        self.generate_by_strength(Strength::Ok)
    }

    /// Stores the strong tier length and generates one password.
    pub fn generate_by_strong(&mut self) -> String {
        self.generate_by_strength(Strength::Strong)
    }

    /// Stores the very strong tier length and generates one password.
    pub fn generate_by_very_strong(&mut self) -> String {
        self.generate_by_strength(Strength::VeryStrong)
    }

    fn generate_by_strength(&mut self, strength: Strength) -> String {
        self.generate_by_length(strength.length())
    }
}

#[cfg(test)]
mod tests {
    use crate::charset::{LENGTH_OK, LENGTH_VERY_STRONG, LENGTH_WEAK};
    use crate::config::Config;
    use crate::generator::testing::FailingRng;
    use crate::generator::Generator;

    #[test]
    fn test_tiers_produce_fixed_lengths() {
        let mut generator = Generator::with_config(Config::with_length(100));

        assert_eq!(generator.generate_by_weak().chars().count(), 6);
        assert_eq!(generator.generate_by_ok().chars().count(), 12);
        assert_eq!(generator.generate_by_strong().chars().count(), 24);
        assert_eq!(generator.generate_by_very_strong().chars().count(), 36);
    }

    #[test]
    fn test_tier_leaves_length_mutated() {
        let mut generator = Generator::with_config(Config::with_length(100));

        generator.generate_by_weak();
        assert_eq!(generator.length(), LENGTH_WEAK);
        assert_eq!(generator.generate().unwrap().chars().count(), 6);

        generator.generate_by_ok();
        assert_eq!(generator.length(), LENGTH_OK);

        generator.generate_by_very_strong();
        assert_eq!(generator.generate_many(2).unwrap()[1].chars().count(), 36);
        assert_eq!(generator.length(), LENGTH_VERY_STRONG);
    }

    #[test]
    fn test_by_length_mutates() {
        let mut generator = Generator::new();
        assert_eq!(generator.generate_by_length(50).chars().count(), 50);
        assert_eq!(generator.length(), 50);
    }

    #[test]
    fn test_failure_yields_empty_string() {
        let mut generator = Generator::with_config(Config::empty());
        assert_eq!(generator.generate_by_strong(), "");
        assert_eq!(generator.length(), 24);

        let mut generator = Generator::with_rng(Config::default(), FailingRng::after(0));
        assert_eq!(generator.generate_by_length(10), "");
        assert_eq!(generator.length(), 10);
    }
}
