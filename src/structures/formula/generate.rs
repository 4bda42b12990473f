//! Random formulas.
//!
//! Formulas are drawn from any source of [rng](rand::Rng), though for repeatable draws a seeded source such as [MinimalPCG32](crate::generic::random::MinimalPCG32) is useful.
//!
//! ```rust
//! # use prop_proof::generic::random::MinimalPCG32;
//! # use prop_proof::structures::formula::generate::random_formula;
//! # use rand::SeedableRng;
//! let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());
//!
//! for _ in 0..16 {
//!     assert!(random_formula(&mut rng, 5).depth() <= 5);
//! }
//! ```

use super::{BinaryOperator, Formula, UnaryOperator};

/// The probability of stopping with an atomic proposition before the maximum depth is reached.
const TRIVIAL_BIAS: f64 = 0.25;

/// A random formula, of depth at most `depth`.
pub fn random_formula(rng: &mut impl rand::Rng, depth: usize) -> Formula {
    if depth == 0 || rng.random_bool(TRIVIAL_BIAS) {
        return Formula::trivial(random_letter(rng));
    }

    let choice = rng.random_range(0..UnaryOperator::ALL.len() + BinaryOperator::ALL.len());
    match UnaryOperator::ALL.get(choice) {
        Some(operator) => Formula::Unary(*operator, Box::new(random_formula(rng, depth - 1))),

        None => {
            let operator = BinaryOperator::ALL[choice - UnaryOperator::ALL.len()];
            let left = random_formula(rng, depth - 1);
            let right = random_formula(rng, depth - 1);
            Formula::binary(operator, left, right)
        }
    }
}

/// A random letter, `A`–`Z`.
pub fn random_letter(rng: &mut impl rand::Rng) -> char {
    (b'A' + rng.random_range(0..26_u8)) as char
}
