//! Generic structures, independent of formulas and proofs.

pub mod random;
