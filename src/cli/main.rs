use std::io::Write;

use prop_proof::{
    config::ProofMode,
    context::Context,
    reports::{ProofFailure, ProofReport, Report},
    structures::{notation::Notation, proof::Proof},
    types::err::{self},
};

mod cli;
mod config;
mod config_io;
mod misc;

use config_io::{ConfigIO, Target};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli::cli().get_matches();

    let config = config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    let reader = match misc::open_input(config_io.path.as_deref()) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Could not read input: {e}");
            std::process::exit(1);
        }
    };

    let print = config_io.print.unwrap_or(config.notation.value);
    let quiet = config_io.quiet;
    let mode = config.proof_mode.value;

    let mut the_context = Context::from_config(config);

    if !quiet {
        the_context.set_callback_formula(Box::new(move |formula| {
            println!("{}", formula.as_string(print))
        }));

        the_context.set_callback_axiom(Box::new(|_, axiom_type| match axiom_type {
            Some(axiom_type) => println!("Axiom of type {axiom_type}."),
            None => println!("Not an axiom."),
        }));

        the_context.set_callback_step(Box::new(|_, _, step| println!("{step}")));

        the_context.set_callback_parse_error(Box::new(|_, e| eprintln!("{e}")));
    }

    let success = match config_io.target {
        Target::Echo => the_context.echo(reader) == Report::Success,

        Target::Axioms => the_context.check_axioms(reader) == Report::Success,

        Target::Proof => match the_context.prove(reader) {
            Ok(ProofReport::Verified(_)) => true,

            Ok(ProofReport::Optimized(proof)) => match quiet {
                true => true,

                false => match write_preserved(&mut std::io::stdout().lock(), &proof, print) {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("Could not write the optimized proof: {e}");
                        false
                    }
                },
            },

            Err(failure) => {
                if !quiet {
                    report_failure(&failure, mode);
                }
                false
            }
        },
    };

    match success {
        true => std::process::exit(0),
        false => std::process::exit(1),
    }
}

/// Writes each preserved formula of `proof` to `out`, one per line.
fn write_preserved(out: &mut impl Write, proof: &Proof, print: Notation) -> std::io::Result<()> {
    for formula in proof.preserved() {
        writeln!(out, "{}", formula.as_string(print))?;
    }
    out.flush()
}

fn report_failure(failure: &ProofFailure, mode: ProofMode) {
    match (&failure.error, mode) {
        (err::ErrorKind::Proof(err::ProofError::NotDeducible), ProofMode::Verify) => {
            println!("{}", err::ProofError::NotDeducible)
        }

        (err::ErrorKind::Proof(err::ProofError::NotDeducible), ProofMode::Optimize) => {
            eprintln!("Invalid proof given.")
        }

        (err::ErrorKind::Parse(_), ProofMode::Optimize) => {
            eprintln!("Invalid formula {}.", failure.step)
        }

        (e, _) => eprintln!("{e}"),
    }
}
