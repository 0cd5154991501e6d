//! Seeded number generation and primality classification for the `random`
//! subcommand. Mirrors `gen_factor_sat/number_generator.py`: draw uniformly
//! from a seeded PRNG, classify each draw, and keep the first draw matching
//! the requested kind.

use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Roots;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which kind of number the caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeFilter {
    Prime,
    Composite,
    Any,
}

#[derive(Debug, Clone)]
pub struct GeneratedNumber {
    pub value: BigUint,
    pub seed: u64,
}

#[derive(Debug)]
pub struct GenerationError {
    filter: PrimeFilter,
    tries: u32,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.filter {
            PrimeFilter::Prime => "prime",
            PrimeFilter::Composite => "composite",
            PrimeFilter::Any => "random",
        };
        write!(f, "failed to generate a {} number within {} tries", kind, self.tries)
    }
}

impl std::error::Error for GenerationError {}

/// Draws numbers uniformly from `[min_value, max_value]` under the PRNG
/// seeded by `seed` (one is drawn from the OS RNG and returned if `seed` is
/// `None`), keeping the first draw whose primality (per `error`, see
/// [`is_probably_prime`]) matches `filter`. Gives up after `max_tries` draws.
pub fn generate_number(
    min_value: &BigUint,
    max_value: &BigUint,
    seed: Option<u64>,
    filter: PrimeFilter,
    error: Option<f64>,
    max_tries: u32,
) -> Result<GeneratedNumber, GenerationError> {
    let seed = seed.unwrap_or_else(|| rand::random());
    let mut rng = StdRng::seed_from_u64(seed);

    let exclusive_max = max_value + BigUint::from(1u32);
    for _ in 0..max_tries {
        let candidate = rng.gen_biguint_range(min_value, &exclusive_max);
        let matches = match filter {
            PrimeFilter::Any => true,
            PrimeFilter::Prime => is_probably_prime(&candidate, error, &mut rng),
            PrimeFilter::Composite => !is_probably_prime(&candidate, error, &mut rng),
        };
        if matches {
            return Ok(GeneratedNumber { value: candidate, seed });
        }
    }

    Err(GenerationError { filter, tries: max_tries })
}

/// `error` of `None` or `<= 0.0` selects deterministic trial division
/// (`gen_factor_sat::is_det_prime`); a positive `error` selects Miller–Rabin
/// with `iterations = ceil(-ln(error) / ln(4))`
/// (`gen_factor_sat::is_prob_prime`).
pub fn is_probably_prime(n: &BigUint, error: Option<f64>, rng: &mut StdRng) -> bool {
    match error {
        Some(e) if e > 0.0 => {
            let iterations = (-e.ln() / 4f64.ln()).ceil() as u32;
            (0..iterations).all(|_| miller_rabin_round(n, rng))
        }
        _ => is_prime_trial_division(n),
    }
}

fn is_prime_trial_division(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if (n % &two).is_zero() {
        return false;
    }
    let limit = n.sqrt();
    let mut candidate = BigUint::from(3u32);
    while candidate <= limit {
        if (n % &candidate).is_zero() {
            return false;
        }
        candidate += &two;
    }
    true
}

/// One Miller–Rabin round against a fresh random base. Returns `true` if `n`
/// passes (probably prime by this witness), `false` if `n` is proven
/// composite.
fn miller_rabin_round(n: &BigUint, rng: &mut StdRng) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if (n % &two).is_zero() {
        return false;
    }

    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while (&d % &two).is_zero() {
        d /= &two;
        r += 1;
    }

    let a = rng.gen_biguint_range(&two, &n_minus_one);
    let mut x = a.modpow(&d, n);
    if x == one || x == n_minus_one {
        return true;
    }
    for _ in 0..r.saturating_sub(1) {
        x = x.modpow(&two, n);
        if x == n_minus_one {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_division_agrees_with_known_primes() {
        for p in [2u32, 3, 5, 7, 11, 13, 32771] {
            assert!(is_prime_trial_division(&BigUint::from(p)), "{p} should be prime");
        }
        for c in [4u32, 6, 8, 9, 1675 * 1585 % 100000] {
            assert!(!is_prime_trial_division(&BigUint::from(c)), "{c} should be composite");
        }
    }

    #[test]
    fn miller_rabin_matches_trial_division_on_small_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 2u32..500 {
            let n = BigUint::from(n);
            let expected = is_prime_trial_division(&n);
            let probable = is_probably_prime(&n, Some(1e-9), &mut rng);
            assert_eq!(probable, expected, "mismatch at {}", n);
        }
    }

    #[test]
    fn generate_number_is_deterministic_given_a_seed() {
        let min = BigUint::from(2u32);
        let max = BigUint::from(1_000_000u32);
        let a = generate_number(&min, &max, Some(7), PrimeFilter::Any, None, 10).unwrap();
        let b = generate_number(&min, &max, Some(7), PrimeFilter::Any, None, 10).unwrap();
        assert_eq!(a.value, b.value);
        assert_eq!(a.seed, 7);
    }

    #[test]
    fn generate_number_honors_prime_filter() {
        let min = BigUint::from(2u32);
        let max = BigUint::from(10_000u32);
        let generated = generate_number(&min, &max, Some(42), PrimeFilter::Prime, None, 1000).unwrap();
        assert!(is_prime_trial_division(&generated.value));
    }

    #[test]
    fn generate_number_gives_up_after_max_tries() {
        // min == max - 1 means every draw is the same composite value.
        let min = BigUint::from(4u32);
        let max = BigUint::from(5u32);
        let result = generate_number(&min, &max, Some(1), PrimeFilter::Prime, None, 5);
        assert!(result.is_err());
    }
}
