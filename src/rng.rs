//! Randomness source shared by the engines.
//!
//! Engines take any `R: Rng + ?Sized`; the shell hands them a [`GameRng`],
//! seeded from `--seed`/`BRAINI_SEED` when given so a session can be replayed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type GameRng = ChaCha8Rng;

pub fn seeded(seed: Option<u64>) -> GameRng
{
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
