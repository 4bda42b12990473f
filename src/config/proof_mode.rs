use std::str::FromStr;

/// What to do with a proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProofMode {
    /// Check each step of the proof, reporting how each step is justified.
    Verify = 0,

    /// Check each step of the proof silently, and if the proof is valid find the steps needed to derive the final step.
    Optimize,
}

impl std::fmt::Display for ProofMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verify => write!(f, "verify"),
            Self::Optimize => write!(f, "optimize"),
        }
    }
}

impl ProofMode {
    /// The minimum ProofMode type.
    pub const MIN: ProofMode = ProofMode::Verify;

    /// The maximum ProofMode type.
    pub const MAX: ProofMode = ProofMode::Optimize;
}

impl FromStr for ProofMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verify" => Ok(Self::Verify),

            "optimize" | "optimise" => Ok(Self::Optimize),

            unknown => Err(format!("unknown proof mode '{unknown}', expected verify or optimize")),
        }
    }
}
