use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use prop_proof::structures::notation::Notation;

pub fn cli() -> Command {
    Command::new("prop_proof")
        .about("Reads propositional formulas, one per line, and checks axioms and proofs built from them")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The file to read formulas from.
Default: standard input"))

        .arg(Arg::new("notation")
            .long("notation")
            .short('n')
            .value_name("NOTATION")
            .value_parser(value_parser!(Notation))
            .required(false)
            .num_args(1)
            .help(format!("The notation formulas are read in.
Default: {}", Notation::Infix))
            .long_help(format!("The notation formulas are read in.
Default: {}

  - prefix : Operators before their operands, e.g. >A-B
  - infix  : Binary operators between bracketed operands, e.g. (A>-B)
  - postfix: Operators after their operands, e.g. AB->", Notation::Infix)))

        .arg(Arg::new("print")
            .long("print")
            .short('p')
            .value_name("NOTATION")
            .value_parser(value_parser!(Notation))
            .required(false)
            .num_args(1)
            .help("The notation formulas are written in.
Default: The notation formulas are read in"))

        .arg(Arg::new("axioms")
            .long("axioms")
            .short('a')
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Check whether each formula is an axiom."))

        .arg(Arg::new("verify")
            .long("verify")
            .short('v')
            .value_name("PREMISES")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Verify a proof, following the given number of premises.")
            .long_help("Verify a proof, following the given number of premises.

Each line of the proof is narrated as an axiom, a restated premise, or a deduction from earlier lines.
The first line which is none of these ends the proof."))

        .arg(Arg::new("optimize")
            .long("optimize")
            .short('o')
            .value_name("PREMISES")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Optimize a proof, following the given number of premises.")
            .long_help("Optimize a proof, following the given number of premises.

The proof is verified without narration, and on success only those lines needed to derive the final line are written."))

        .group(ArgGroup::new("target")
            .args(["axioms", "verify", "optimize"])
            .required(false)
            .multiple(false))

        .arg(Arg::new("strict")
            .long("strict")
            .short('s')
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Stop at the first line which fails to parse, or is not an axiom."))

        .arg(Arg::new("quiet")
            .long("quiet")
            .short('q')
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write nothing, and report only through the exit status."))
}
