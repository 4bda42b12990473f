/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [parsers](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [proof checking](crate::procedures::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to [axiom classification](crate::system)
    pub const AXIOM: &str = "axiom";

    /// Logs related to deductions, by some [proof system](crate::system)
    pub const DEDUCTION: &str = "deduction";

    /// Logs related to [optimization](crate::procedures::optimize)
    pub const OPTIMIZATION: &str = "optimization";
}
