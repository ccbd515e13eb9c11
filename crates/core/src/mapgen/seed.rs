//! Random draws over a borrowed generator and per-level seed derivation.

use rand_chacha::rand_core::Rng;

use super::model::LayoutVariant;

pub(crate) fn random_usize<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: usize,
    max_value: usize,
) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value) as u64 + 1;
    min_value + (rng.next_u64() % range_size) as usize
}

/// Uniform draw from `[0, 1)` built from the top 53 bits.
pub(crate) fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

pub(crate) fn roll_chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    random_unit(rng) < probability
}

pub(crate) fn choose<R: Rng + ?Sized, T: Copy>(rng: &mut R, candidates: &[T]) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(random_usize(rng, 0, candidates.len() - 1)).copied()
}

/// Seed for one level of a session, so a single level can be reproduced
/// without generating the levels before it.
pub fn derive_level_seed(session_seed: u64, level_index: u32, variant: LayoutVariant) -> u64 {
    let variant_code = match variant {
        LayoutVariant::Dungeon => 1_u64,
        LayoutVariant::Tilt => 2_u64,
    };
    let mut mixed = session_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level_index).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= variant_code.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
