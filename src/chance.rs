use rand::rngs::SysRng;
use rand::{RngExt, TryCryptoRng, TryRng};

use crate::error::EntropyError;

/// One percentage point expressed in basis points (0.01% steps).
pub const BASIS_POINTS_PER_PERCENT: u32 = 100;

/// 100% in basis points, the inclusive top of the secure draw.
pub const MAX_BASIS_POINTS: u32 = 100 * BASIS_POINTS_PER_PERCENT;

// the secure draw spans [0, MAX_BASIS_POINTS], which is 10001 distinct values
const DRAW_RANGE: u64 = MAX_BASIS_POINTS as u64 + 1;
// largest multiple of DRAW_RANGE representable in a u32 draw; anything at or
// above this would bias the modulo towards low values and gets redrawn
const DRAW_ZONE: u64 = (1u64 << 32) / DRAW_RANGE * DRAW_RANGE;

#[inline]
fn clamp_percent(chance: f64) -> f64 {
    chance.clamp(0.0, 100.0)
}

#[inline]
fn basis_point_threshold(chance: f64) -> u32 {
    (clamp_percent(chance) * f64::from(BASIS_POINTS_PER_PERCENT)).round() as u32
}

/// Returns true with probability `chance / 100`, drawn from the thread-local
/// fast generator.
///
/// `chance` is clamped into `[0, 100]`: anything at or below 0 never wins,
/// anything at or above 100 always wins. A NaN `chance` never wins.
/// ```
/// assert!(!chancer::chance::fast_chance(0.0));
/// assert!(chancer::chance::fast_chance(100.0));
/// ```
#[inline]
pub fn fast_chance(chance: f64) -> bool {
    fast_chance_with(&mut crate::sources::fast_rng(), chance)
}

/// Same check as [`fast_chance`], drawing from a caller-supplied generator.
///
/// Passing a seeded generator makes the outcome reproducible:
/// ```
/// let mut rng = chancer::sources::seeded_rng(7);
/// let first = chancer::chance::fast_chance_with(&mut rng, 50.0);
///
/// let mut rng = chancer::sources::seeded_rng(7);
/// assert_eq!(first, chancer::chance::fast_chance_with(&mut rng, 50.0));
/// ```
#[inline]
pub fn fast_chance_with<R: RngExt + ?Sized>(rng: &mut R, chance: f64) -> bool {
    let threshold = clamp_percent(chance) / 100.0;
    rng.random::<f64>() < threshold
}

/// Returns true with probability `chance / 100`, drawn from the operating
/// system's entropy source.
///
/// The draw is made at basis-point granularity: `chance` is clamped into
/// `[0, 100]`, rounded to the nearest 0.01%, and compared against a uniform
/// integer in the inclusive range `[0, 10000]`. Because the draw range is
/// inclusive, `secure_chance(100.0)` wins with probability 10000/10001
/// (about 99.99%), not exactly 1, unlike [`fast_chance`]. A NaN `chance`
/// never wins.
///
/// If the entropy source fails, the failure is returned rather than a
/// default outcome.
/// ```
/// assert!(!chancer::chance::secure_chance(0.0).unwrap());
/// ```
#[inline]
pub fn secure_chance(chance: f64) -> Result<bool, EntropyError> {
    secure_chance_with(&mut SysRng, chance).map_err(EntropyError::from_source)
}

/// Same check as [`secure_chance`], drawing from a caller-supplied
/// cryptographically secure generator.
pub fn secure_chance_with<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    chance: f64,
) -> Result<bool, R::Error> {
    let threshold = basis_point_threshold(chance);
    Ok(draw_basis_points(rng)? < threshold)
}

// Uniform draw in [0, MAX_BASIS_POINTS], inclusive. Draws at or above
// DRAW_ZONE are rejected to keep the modulo unbiased.
fn draw_basis_points<R: TryRng + ?Sized>(rng: &mut R) -> Result<u32, R::Error> {
    loop {
        let draw = u64::from(rng.try_next_u32()?);
        if draw < DRAW_ZONE {
            return Ok((draw % DRAW_RANGE) as u32);
        }
    }
}
