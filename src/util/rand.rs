// RustPixel
// copyright zipxing@hotmail.com 2022~2024

use rand::Rng;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a, stable across platforms and releases,
/// used to turn string seeds into rng seeds
pub fn seed_hash(s: &str) -> u64 {
    s.bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
}

/// RNG
pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

/// Xoshiro256** wrapper
impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn rand64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// uniform in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// uniform in [-extent, extent]
    pub fn spread(&mut self, extent: f64) -> f64 {
        (self.unit() * 2.0 - 1.0) * extent
    }
}
