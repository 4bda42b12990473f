/*!
Callbacks associated with a context.

Each procedure reports on the lines it reads through callbacks, if set.
Nothing is written to any stream by the library, and so callbacks are the place to print a formula or narrate a proof.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::{
    reports::Step,
    structures::{formula::Formula, proof::StepIndex},
    system::{AxiomType, ProofSystem},
    types::err::{self},
};

use super::GenericContext;

/// Called on each formula [echoed](GenericContext::echo).
pub type CallbackFormula = dyn FnMut(&Formula);

/// Called on each formula whose axiom type was [checked](GenericContext::check_axioms), with `None` if the formula is not an axiom.
pub type CallbackAxiom = dyn FnMut(&Formula, Option<AxiomType>);

/// Called on each step accepted while [verifying](GenericContext::prove) a proof, with the index of the step.
pub type CallbackStep = dyn FnMut(StepIndex, &Formula, &Step);

/// Called on each line which fails to parse when echoing or checking axioms, with the (1-based) line.
pub type CallbackParseError = dyn FnMut(usize, &err::ParseError);

impl<S: ProofSystem> GenericContext<S> {
    pub fn set_callback_formula(&mut self, callback: Box<CallbackFormula>) {
        self.callback_formula = Some(callback);
    }

    pub fn set_callback_axiom(&mut self, callback: Box<CallbackAxiom>) {
        self.callback_axiom = Some(callback);
    }

    pub fn set_callback_step(&mut self, callback: Box<CallbackStep>) {
        self.callback_step = Some(callback);
    }

    pub fn set_callback_parse_error(&mut self, callback: Box<CallbackParseError>) {
        self.callback_parse_error = Some(callback);
    }

    pub(crate) fn make_callback_formula(&mut self, formula: &Formula) {
        if let Some(callback) = &mut self.callback_formula {
            callback(formula)
        }
    }

    pub(crate) fn make_callback_axiom(&mut self, formula: &Formula, axiom_type: Option<AxiomType>) {
        if let Some(callback) = &mut self.callback_axiom {
            callback(formula, axiom_type)
        }
    }

    pub(crate) fn make_callback_step(&mut self, index: StepIndex, formula: &Formula, step: &Step) {
        if let Some(callback) = &mut self.callback_step {
            callback(index, formula, step)
        }
    }

    pub(crate) fn make_callback_parse_error(&mut self, line: usize, error: &err::ParseError) {
        if let Some(callback) = &mut self.callback_parse_error {
            callback(line, error)
        }
    }
}
