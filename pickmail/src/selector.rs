//! Random selection: shuffle, then keep a prefix.
//!
//! [`shuffle`] and [`take`] are kept as separate steps so that a selection can
//! be checked against the exact permutation it was cut from. [`Selector`]
//! owns the generator; production code seeds it from system entropy, tests and
//! `--seed` seed it explicitly.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::EmailAddress;

/// Returns a uniformly random permutation of `items` (Fisher–Yates).
#[must_use]
pub fn shuffle<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items
}

/// Keeps the first `count` items, or all of them when there are fewer.
#[must_use]
pub fn take<T>(mut shuffled: Vec<T>, count: usize) -> Vec<T> {
    shuffled.truncate(count);
    shuffled
}

/// Shuffles `addresses` and keeps the first `count`.
#[must_use]
pub fn pick<R>(addresses: Vec<EmailAddress>, count: usize, rng: &mut R) -> Vec<EmailAddress>
where
    R: Rng + ?Sized,
{
    take(shuffle(addresses, rng), count)
}

/// Owns the random generator used for a pick run.
#[derive(Clone, Debug)]
pub struct Selector {
    rng: StdRng,
}

impl Selector {
    /// Seeds the generator from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds the generator deterministically.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when given, system entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Shuffles `addresses` and keeps the first `count`.
    #[must_use]
    pub fn pick(&mut self, addresses: Vec<EmailAddress>, count: usize) -> Vec<EmailAddress> {
        pick(addresses, count, &mut self.rng)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
