/*!
Checks a proof, line by line.

# Overview

A proof is read as a sequence of lines, ending at the first line with no formula.

The first lines are premises, as many as [configured](crate::config::Config::premises), and are collected without being checked.
Each line after is a step of the proof, and is accepted if it is, in order of preference:
1. An instance of some axiom of the proof system.
2. A restatement of some premise, in which case the first equal premise is used.
3. Deducible from the steps already accepted, as witnessed by the proof system.

A step which is none of these ends the run with [NotDeducible](crate::types::err::ProofError::NotDeducible), as does any line which fails to parse.
There is no recovery from a failure, and nothing of a failed run is kept.

When [verifying](crate::config::ProofMode::Verify), each accepted step is passed to the [step callback](GenericContext::set_callback_step).
When [optimizing](crate::config::ProofMode::Optimize), no callback is made and, on reading every line, the proof is [optimized](crate::procedures::optimize).

# Example

```rust
# use prop_proof::config::{Config, ProofMode};
# use prop_proof::context::Context;
# use prop_proof::reports::ProofReport;
# use prop_proof::structures::notation::Notation;
let mut config = Config::default();
config.premises.value = 2;
config.proof_mode.value = ProofMode::Optimize;

let mut the_context = Context::from_config(config);

let proof = b"A
(A>B)
A
(A>B)
(C>(D>C))
B
";

let Ok(ProofReport::Optimized(proof)) = the_context.prove(proof.as_slice()) else {
    panic!("An optimizable proof");
};

let optimized: Vec<String> = proof
    .preserved()
    .map(|formula| formula.as_string(Notation::Infix))
    .collect();
assert_eq!(optimized, vec!["A", "(A>B)", "B"]);
```
*/

use std::io::BufRead;

use crate::{
    config::ProofMode,
    context::GenericContext,
    misc::log::targets::{self},
    reports::{ProofFailure, ProofReport, Step},
    structures::{formula::Formula, proof::Proof},
    system::ProofSystem,
    types::err::{self},
};

impl<S: ProofSystem> GenericContext<S> {
    /// Checks the proof read from `reader`, and if configured to, optimizes the proof.
    ///
    /// See the [module documentation](crate::procedures::proof) for details.
    pub fn prove(&mut self, mut reader: impl BufRead) -> Result<ProofReport, ProofFailure> {
        self.counters = Default::default();

        let premise_count = self.config.premises.value;
        let mode = self.config.proof_mode.value;
        log::debug!(target: targets::PROOF, "Reading a proof with {} and {}", self.config.premises, self.config.proof_mode);

        let mut premises: Vec<Formula> = Vec::default();
        let mut proof = Proof::default();

        loop {
            let formula = match self.config.notation.value.parse(&mut reader) {
                Ok(None) => break,

                Ok(Some(formula)) => {
                    self.counters.lines += 1;
                    formula
                }

                Err(e) => {
                    self.counters.lines += 1;
                    return Err(self.failure(proof.len() + 1, e));
                }
            };

            if premises.len() < premise_count {
                log::trace!(target: targets::PROOF, "Premise {}: {formula}", premises.len() + 1);
                self.counters.premises += 1;
                premises.push(formula);
                continue;
            }

            let Some(step) = self.justify(&formula, &premises, &proof) else {
                log::info!(target: targets::PROOF, "Not deducible: {formula}");
                return Err(self.failure(proof.len() + 1, err::ProofError::NotDeducible));
            };

            let witnesses = match &step {
                Step::Deduction(witnesses) => witnesses.clone(),
                Step::Axiom(_) | Step::Premise(_) => Vec::default(),
            };

            let index = match proof.push(formula, witnesses) {
                Ok(index) => index,
                Err(e) => return Err(self.failure(proof.len() + 1, e)),
            };

            match step {
                Step::Axiom(_) => self.counters.axioms += 1,
                Step::Premise(_) => self.counters.restatements += 1,
                Step::Deduction(_) => self.counters.deductions += 1,
            }

            if let Some(formula) = proof.formula(index) {
                log::trace!(target: targets::PROOF, "Step {index}: {formula} ({step})");

                if mode == ProofMode::Verify {
                    self.make_callback_step(index, formula, &step);
                }
            }
        }

        log::info!(target: targets::PROOF, "Proof of {} steps from {} premises", proof.len(), premises.len());

        match mode {
            ProofMode::Verify => Ok(ProofReport::Verified(proof)),

            ProofMode::Optimize => match proof.optimize() {
                Ok(_) => Ok(ProofReport::Optimized(proof)),

                Err(e) => {
                    self.counters.failures += 1;
                    Err(ProofFailure {
                        line: 0,
                        step: 0,
                        error: e.into(),
                    })
                }
            },
        }
    }

    /// How `formula` may be accepted as the next step of `proof`, if at all.
    fn justify(&self, formula: &Formula, premises: &[Formula], proof: &Proof) -> Option<Step> {
        if let Some(axiom_type) = self.system().classify_axiom(formula) {
            return Some(Step::Axiom(axiom_type));
        }

        if let Some(offset) = premises.iter().position(|premise| premise == formula) {
            return Some(Step::Premise(offset + 1));
        }

        let witnesses = self.system().deducible_witnesses(formula, proof);
        match witnesses.is_empty() {
            true => None,
            false => Some(Step::Deduction(witnesses)),
        }
    }

    /// A failure on the most recently read line.
    fn failure(&mut self, step: usize, error: impl Into<err::ErrorKind>) -> ProofFailure {
        self.counters.failures += 1;
        ProofFailure {
            line: self.counters.lines,
            step,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        config::Config,
        context::Context,
        structures::proof::StepIndex,
    };

    fn context(premises: usize, mode: ProofMode) -> Context {
        let mut config = Config::default();
        config.premises.value = premises;
        config.proof_mode.value = mode;
        Context::from_config(config)
    }

    #[test]
    fn narration() {
        let mut the_context = context(2, ProofMode::Verify);

        let steps: Rc<RefCell<Vec<(StepIndex, Step)>>> = Rc::default();
        let callback_steps = steps.clone();
        the_context.set_callback_step(Box::new(move |index, _, step| {
            callback_steps.borrow_mut().push((index, step.clone()))
        }));

        let proof = b"A\n(A>B)\n(A>(B>A))\nA\n(A>B)\nB\n";
        let report = the_context.prove(proof.as_slice());
        assert!(matches!(report, Ok(ProofReport::Verified(_))));

        assert_eq!(
            *steps.borrow(),
            vec![
                (1, Step::Axiom(1)),
                (2, Step::Premise(1)),
                (3, Step::Premise(2)),
                (4, Step::Deduction(vec![2, 3])),
            ]
        );
    }

    #[test]
    fn counters() {
        let mut the_context = context(2, ProofMode::Verify);

        let proof = b"A\n(A>B)\nA\n(A>B)\nB\n(B>(C>B))\n(C>B)\n";
        assert!(the_context.prove(proof.as_slice()).is_ok());

        assert_eq!(the_context.counters.lines, 7);
        assert_eq!(the_context.counters.premises, 2);
        assert_eq!(the_context.counters.restatements, 2);
        assert_eq!(the_context.counters.axioms, 1);
        assert_eq!(the_context.counters.deductions, 2);
        assert_eq!(the_context.counters.failures, 0);
    }

    #[test]
    fn axioms_before_premises() {
        let mut the_context = context(1, ProofMode::Verify);

        let steps: Rc<RefCell<Vec<Step>>> = Rc::default();
        let callback_steps = steps.clone();
        the_context.set_callback_step(Box::new(move |_, _, step| {
            callback_steps.borrow_mut().push(step.clone())
        }));

        let proof = b"(A>(B>A))\n(A>(B>A))\n";
        assert!(the_context.prove(proof.as_slice()).is_ok());
        assert_eq!(*steps.borrow(), vec![Step::Axiom(1)]);
    }

    #[test]
    fn not_deducible() {
        let mut the_context = context(0, ProofMode::Verify);

        let proof = b"(A>(B>A))\nB\n(A>A)\n";
        let failure = ProofFailure {
            line: 2,
            step: 2,
            error: err::ErrorKind::Proof(err::ProofError::NotDeducible),
        };
        assert_eq!(the_context.prove(proof.as_slice()), Err(failure));
        assert_eq!(the_context.counters.lines, 2);
    }

    #[test]
    fn parse_failure_on_premise() {
        let mut the_context = context(2, ProofMode::Optimize);

        let proof = b"A\n(A>\n";
        let failure = ProofFailure {
            line: 2,
            step: 1,
            error: err::ErrorKind::Parse(err::ParseError::IncompleteFormula),
        };
        assert_eq!(the_context.prove(proof.as_slice()), Err(failure));
    }

    #[test]
    fn no_narration_when_optimizing() {
        let mut the_context = context(1, ProofMode::Optimize);

        let steps: Rc<RefCell<usize>> = Rc::default();
        let callback_steps = steps.clone();
        the_context.set_callback_step(Box::new(move |_, _, _| {
            *callback_steps.borrow_mut() += 1
        }));

        let proof = b"A\nA\n(A>(B>A))\n(B>A)\n";
        let failure = ProofFailure {
            line: 0,
            step: 0,
            error: err::ErrorKind::Proof(err::ProofError::AlreadyOptimal),
        };
        assert_eq!(the_context.prove(proof.as_slice()), Err(failure));
        assert_eq!(*steps.borrow(), 0);
    }

    #[test]
    fn empty_proof() {
        let mut the_context = context(0, ProofMode::Verify);
        assert_eq!(
            the_context.prove(b"".as_slice()),
            Ok(ProofReport::Verified(Proof::default()))
        );

        let mut the_context = context(0, ProofMode::Optimize);
        assert!(the_context.prove(b"\n".as_slice()).is_err());
    }
}
