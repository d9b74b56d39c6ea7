//! Deck shuffling with an injectable random source.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Uniform in-place permutation (Fisher-Yates) driven by `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(cards: &mut [T], rng: &mut R) {
    cards.shuffle(rng);
}

/// Shared random source for deck shuffles.
///
/// Seeded from OS entropy in production; a fixed seed makes every shuffle
/// sequence reproducible.
pub struct DeckRng {
    rng: Mutex<StdRng>,
}

impl DeckRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    pub fn shuffle<T>(&self, cards: &mut [T]) {
        let mut rng = self.rng.lock();
        shuffle(cards, &mut *rng);
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for DeckRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckRng").finish_non_exhaustive()
    }
}
