/// Counts for various things which count, over the most recent run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every line read, including lines which failed to parse.
    pub lines: usize,

    /// A count of the premises collected before the first step of a proof.
    pub premises: usize,

    /// A count of lines which were instances of some axiom.
    pub axioms: usize,

    /// A count of proof steps which restated a premise.
    pub restatements: usize,

    /// A count of proof steps which were deduced from earlier steps.
    pub deductions: usize,

    /// A count of lines which failed, either to parse or to be accepted.
    pub failures: usize,
}
