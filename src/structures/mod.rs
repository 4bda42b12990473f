//! Abstract structures: formulas, the notations they are written in, and proofs built from them.
//!
//! - [formula] contains the formula tree, and the composite formulas used to build a formula in parts.
//! - [notation] contains the three notations a formula may be written in.
//! - [proof] contains proofs, as sequences of formulas with references to the formulas they follow from.

pub mod formula;
pub mod notation;
pub mod proof;
