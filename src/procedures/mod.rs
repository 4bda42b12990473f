//! Various procedures run from a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! - [echo] parses each line, and hands the formula read to a callback.
//! - [axioms] classifies each line as an axiom of some type, or not.
//! - [proof] verifies a proof, and if configured [optimizes](optimize) the proof.

pub mod axioms;
pub mod echo;
pub mod optimize;
pub mod proof;
