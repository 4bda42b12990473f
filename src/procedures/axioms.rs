//! Classifies each line of some input as an axiom, or not.

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    reports::Report,
    system::ProofSystem,
};

impl<S: ProofSystem> GenericContext<S> {
    /// Checks whether each formula read from `reader` is an axiom of the proof system of the context.
    ///
    /// The axiom type of each formula, or `None` if the formula is not an axiom, is passed to the [axiom callback](GenericContext::set_callback_axiom).
    /// Parse errors are passed to the [parse error callback](GenericContext::set_callback_parse_error).
    ///
    /// The report is a failure if any line failed to parse or was not an axiom.
    /// If the context is strict, reading stops at the first such line.
    pub fn check_axioms(&mut self, mut reader: impl BufRead) -> Report {
        self.counters = Default::default();
        let mut report = Report::Success;

        loop {
            let failed = match self.config.notation.value.parse(&mut reader) {
                Ok(None) => break,

                Ok(Some(formula)) => {
                    self.counters.lines += 1;
                    let axiom_type = self.system().classify_axiom(&formula);
                    self.make_callback_axiom(&formula, axiom_type);

                    match axiom_type {
                        Some(_) => {
                            self.counters.axioms += 1;
                            false
                        }
                        None => {
                            log::debug!(target: targets::AXIOM, "Not an axiom: {formula}");
                            true
                        }
                    }
                }

                Err(e) => {
                    self.counters.lines += 1;
                    self.make_callback_parse_error(self.counters.lines, &e);
                    true
                }
            };

            if failed {
                self.counters.failures += 1;
                report = Report::Failure;

                if self.config.strict.value {
                    break;
                }
            }
        }

        report
    }
}
