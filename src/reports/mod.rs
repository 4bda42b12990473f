/*!
Reports for the context.

- A [Report] is the high-level outcome of echoing or checking axioms.
- A [ProofReport] is the outcome of a successful proof run, and a [ProofFailure] the outcome of an unsuccessful run.
- A [Step] narrates how a single line of a proof was accepted.
*/

use crate::{
    structures::proof::{Proof, StepIndex},
    system::AxiomType,
    types::err::{self},
};

/// High-level reports regarding a run over some input.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every line was accepted.
    Success,

    /// Some line was not accepted.
    Failure,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// The result of a successful proof run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofReport {
    /// Every step of the proof was accepted.
    Verified(Proof),

    /// Every step of the proof was accepted, and the members needed to derive the final step are [preserved](crate::structures::proof::ProofMember::preserved).
    Optimized(Proof),
}

impl ProofReport {
    pub fn proof(&self) -> &Proof {
        match self {
            Self::Verified(proof) | Self::Optimized(proof) => proof,
        }
    }
}

/// An unsuccessful proof run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofFailure {
    /// The 1-based line on which the run stopped, counting premises.
    ///
    /// Zero when the failure concerns the proof as a whole, e.g. when the proof is already optimal.
    pub line: usize,

    /// The index the formula on the line would have taken in the proof, or zero as with `line`.
    ///
    /// For a failure on a premise this is the index of the first member of the proof.
    pub step: StepIndex,

    pub error: err::ErrorKind,
}

impl std::fmt::Display for ProofFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            0 => write!(f, "{}", self.error),
            line => write!(f, "Line {line}: {}", self.error),
        }
    }
}

/// How a formula was accepted as a step of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// An instance of the axiom of the given type.
    Axiom(AxiomType),

    /// A restatement of the premise at the given (1-based) index.
    Premise(usize),

    /// Deduced from the given members of the proof.
    Deduction(Vec<StepIndex>),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Axiom(axiom_type) => write!(f, "Axiom of type {axiom_type}."),

            Self::Premise(index) => write!(f, "Premise of type {index}."),

            Self::Deduction(witnesses) => {
                write!(f, "Deducible using formulas")?;
                for witness in witnesses {
                    write!(f, " {witness}")?;
                }
                write!(f, " as witnesses.")
            }
        }
    }
}
