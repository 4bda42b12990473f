//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal PCG32 generator from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait so it can be used wherever [rand::Rng] is required.
//!
//! The library itself makes no random choices.
//! The generator is used to draw [random formulas](crate::structures::formula::generate), for example when checking that printing and parsing agree, and as the generator is seeded the formulas drawn are the same from run to run.

use rand_core::{impls, RngCore, SeedableRng};

/// The increment of the generator, fixed to an odd constant.
const INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}
