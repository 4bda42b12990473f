//! Parses each line of some input.

use std::io::BufRead;

use crate::{context::GenericContext, reports::Report, system::ProofSystem};

impl<S: ProofSystem> GenericContext<S> {
    /// Parses each line read from `reader` in the configured notation, until a line contains no formula.
    ///
    /// Each formula is passed to the [formula callback](GenericContext::set_callback_formula), and each parse error to the [parse error callback](GenericContext::set_callback_parse_error).
    ///
    /// The report is a failure if any line failed to parse.
    /// If the context is strict, reading stops at the first failure.
    pub fn echo(&mut self, mut reader: impl BufRead) -> Report {
        self.counters = Default::default();
        let mut report = Report::Success;

        loop {
            match self.config.notation.value.parse(&mut reader) {
                Ok(None) => break,

                Ok(Some(formula)) => {
                    self.counters.lines += 1;
                    self.make_callback_formula(&formula);
                }

                Err(e) => {
                    self.counters.lines += 1;
                    self.counters.failures += 1;
                    self.make_callback_parse_error(self.counters.lines, &e);
                    report = Report::Failure;

                    if self.config.strict.value {
                        break;
                    }
                }
            }
        }

        report
    }
}
