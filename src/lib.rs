//! A library for parsing propositional formulas and checking proofs built from them.
//!
//! prop_proof reads one formula per line, in prefix, infix, or postfix notation, and builds a [formula](crate::structures::formula) tree from each line.
//! On top of the parsers sits a proof checker, which classifies each line of a proof as an axiom, a restated premise, or a deduction from earlier lines, and which may go on to find the part of a proof needed to derive the final line.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and a [proof system](crate::system).
//! Formulas are read from anything which implements [BufRead](std::io::BufRead), and the context supports three procedures:
//! - [echo](crate::context::GenericContext::echo), which parses each line and passes the formula to a callback.
//! - [check_axioms](crate::context::GenericContext::check_axioms), which classifies each line as an axiom, or not.
//! - [prove](crate::context::GenericContext::prove), which verifies, and optionally optimizes, a proof.
//!
//! Useful starting points, then, may be:
//! - The [parsers](crate::parse), each a small state machine over the characters of a line.
//! - The [structures] to familiarise yourself with formulas and proofs.
//! - The [proof procedure](crate::procedures::proof) to see how a proof is checked.
//!
//! # Notation
//!
//! Letters `A`–`Z` are atomic propositions, `-` is negation, and `.`, `+`, `>`, `=` are conjunction, disjunction, implication and equivalence.
//! Infix formulas use brackets around each binary connective, so `(A>(B>A))` in infix is `>A>BA` in prefix and `ABA>>` in postfix.
//! Spaces and tabs are ignored.
//!
//! # Examples
//!
//! + Parse a formula in each notation.
//!
//! ```rust
//! # use prop_proof::structures::notation::Notation;
//! let infix = Notation::Infix.parse(&mut "(A > -B)\n".as_bytes());
//! let prefix = Notation::Prefix.parse(&mut ">A-B\n".as_bytes());
//! let postfix = Notation::Postfix.parse(&mut "AB->\n".as_bytes());
//!
//! assert_eq!(infix, prefix);
//! assert_eq!(prefix, postfix);
//! assert!(infix.is_ok_and(|formula| formula.is_some()));
//! ```
//!
//! + Verify a short proof, with one premise.
//!
//! ```rust
//! # use prop_proof::config::Config;
//! # use prop_proof::context::Context;
//! # use prop_proof::reports::ProofReport;
//! let mut config = Config::default();
//! config.premises.value = 1;
//!
//! let mut the_context = Context::from_config(config);
//!
//! let proof = b"A
//! A
//! (A>(B>A))
//! (B>A)
//! ";
//!
//! match the_context.prove(proof.as_slice()) {
//!     Ok(ProofReport::Verified(proof)) => assert_eq!(proof.len(), 3),
//!     _ => panic!("A valid proof"),
//! }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each accepted proof step can be found with `RUST_LOG=proof=trace …` or,
//! - Logs of optimization, without parse details, with `RUST_LOG=optimization …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod system;
pub mod types;
