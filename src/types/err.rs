//! Error types used in the library.
//!
//! - Parse errors are raised by the [parsers](crate::parse) on a malformed line.
//!   Those which carry a character and position discard the remainder of the offending line, so a caller which continues to read resumes at the next line.
//! - Proof errors are raised while [checking a proof](crate::procedures::proof), and always end the run.
//!
//! Names of the error enums overlap with the names of structures and procedures, for the most part.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::proof::StepIndex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Proof(ProofError),
}

/// Errors during parsing.
///
/// Positions are 1-based, and count only the non-whitespace characters of a line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character outside the alphabet of formulas.
    IllegalCharacter { character: char, position: usize },

    /// A character which cannot appear at its position, given what has been read.
    UnexpectedElement { character: char, position: usize },

    /// A character read after the formula of the line was already complete.
    RedundantElement { character: char, position: usize },

    /// The input ended part way through a line.
    UnexpectedEndOfInput,

    /// The line ended with operators still waiting on operands, or brackets left open.
    IncompleteFormula,

    /// The reader failed.
    Input(std::io::ErrorKind),
}

impl ParseError {
    /// Whether the error was raised on some character of a line, in which case the remainder of the line is discarded.
    pub fn is_detailed(&self) -> bool {
        matches!(
            self,
            Self::IllegalCharacter { .. }
                | Self::UnexpectedElement { .. }
                | Self::RedundantElement { .. }
        )
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Input(e.kind())
    }
}

/// Errors when checking a proof.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProofError {
    /// The formula is not an instance of any axiom.
    /// Only raised when checking axioms, as a proof may still deduce the formula.
    NotAnAxiom,

    /// The formula is not an axiom, not a premise, and not deducible from the proof so far.
    NotDeducible,

    /// Every step of the proof is needed to derive the final step.
    AlreadyOptimal,

    /// A proof system named a witness which is not an earlier step of the proof.
    UnknownWitness(StepIndex),
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter {
                character,
                position,
            } => write!(f, "Illegal character '{character}' at position {position}."),

            Self::UnexpectedElement {
                character,
                position,
            } => write!(f, "Unexpected element '{character}' at position {position}."),

            Self::RedundantElement {
                character,
                position,
            } => write!(f, "Redundant element '{character}' at position {position}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::IncompleteFormula => write!(f, "Incomplete formula."),

            Self::Input(kind) => write!(f, "Failed to read input: {kind}."),
        }
    }
}

impl std::fmt::Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnAxiom => write!(f, "Not an axiom."),
            Self::NotDeducible => write!(f, "Formula not deducible."),
            Self::AlreadyOptimal => write!(f, "Proof already optimal."),
            Self::UnknownWitness(index) => write!(f, "Unknown witness {index}."),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Proof(e) => write!(f, "{e}"),
        }
    }
}
