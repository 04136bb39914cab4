//! The random sources backing the chance checks.
//!
//! Both default sources are safe to use from any number of threads: the fast
//! source is thread-local, and the secure source is the operating system's
//! entropy facility.

use rand::rngs::{StdRng, SysRng, ThreadRng};
use rand::SeedableRng;

/// The fast, non-cryptographic generator behind
/// [`fast_chance`](crate::chance::fast_chance). Not suitable where outcomes
/// must resist prediction.
pub fn fast_rng() -> ThreadRng {
    rand::rng()
}

/// The OS-backed generator behind
/// [`secure_chance`](crate::chance::secure_chance).
pub fn secure_rng() -> SysRng {
    SysRng
}

/// A seeded generator for reproducible outcomes, usable with
/// [`fast_chance_with`](crate::chance::fast_chance_with).
/// ```
/// let mut a = chancer::sources::seeded_rng(42);
/// let mut b = chancer::sources::seeded_rng(42);
/// assert_eq!(
///     chancer::chance::fast_chance_with(&mut a, 50.0),
///     chancer::chance::fast_chance_with(&mut b, 50.0),
/// );
/// ```
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
