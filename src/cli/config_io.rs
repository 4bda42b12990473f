use std::path::PathBuf;

use clap::ArgMatches;

use prop_proof::structures::notation::Notation;

/// What to do with the formulas read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Write each formula.
    Echo,

    /// Check whether each formula is an axiom.
    Axioms,

    /// Check a proof, verifying or optimizing as configured.
    Proof,
}

#[derive(Clone)]
pub struct ConfigIO {
    pub path: Option<PathBuf>,
    pub target: Target,
    pub print: Option<Notation>,
    pub quiet: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            path: None,
            target: Target::Echo,
            print: None,
            quiet: false,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut config_io = ConfigIO::default();

        if let Ok(Some(path)) = args.try_get_one::<PathBuf>("path") {
            config_io.path = Some(path.clone())
        };

        if let Ok(Some(notation)) = args.try_get_one::<Notation>("print") {
            config_io.print = Some(*notation)
        };

        if let Ok(Some(true)) = args.try_get_one::<bool>("quiet") {
            config_io.quiet = true
        };

        if let Ok(Some(true)) = args.try_get_one::<bool>("axioms") {
            config_io.target = Target::Axioms
        };

        if args.contains_id("verify") || args.contains_id("optimize") {
            config_io.target = Target::Proof
        };

        config_io
    }
}
