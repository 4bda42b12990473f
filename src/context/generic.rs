use crate::{config::Config, system::ProofSystem};

use super::{
    Counters,
    callbacks::{CallbackAxiom, CallbackFormula, CallbackParseError, CallbackStep},
};

/// A generic context, parameratised to a proof system.
///
/// # Example
///
/// ```rust
/// # use prop_proof::context::GenericContext;
/// # use prop_proof::system::Hilbert;
/// # use prop_proof::config::Config;
/// let context = GenericContext::from_system(Config::default(), Hilbert::default());
/// assert_eq!(context.system().schemas().len(), 12);
/// ```
pub struct GenericContext<S: ProofSystem> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent run.
    pub counters: Counters,

    /// The proof system with which axioms are classified and deductions are found.
    system: S,

    pub(super) callback_formula: Option<Box<CallbackFormula>>,

    pub(super) callback_axiom: Option<Box<CallbackAxiom>>,

    pub(super) callback_step: Option<Box<CallbackStep>>,

    pub(super) callback_parse_error: Option<Box<CallbackParseError>>,
}

impl<S: ProofSystem> GenericContext<S> {
    /// Creates a context from some given configuration and proof system.
    pub fn from_system(config: Config, system: S) -> Self {
        Self {
            config,
            counters: Counters::default(),
            system,

            callback_formula: None,
            callback_axiom: None,
            callback_step: None,
            callback_parse_error: None,
        }
    }

    pub fn system(&self) -> &S {
        &self.system
    }
}
