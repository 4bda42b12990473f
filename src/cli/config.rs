use clap::ArgMatches;

use prop_proof::{
    config::{Config, ProofMode},
    structures::notation::Notation,
};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(notation)) = args.try_get_one::<Notation>("notation") {
        the_config.notation.value = *notation
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("strict") {
        the_config.strict.value = true
    };

    if let Ok(Some(premises)) = args.try_get_one::<usize>("verify") {
        the_config.premises.value = *premises;
        the_config.proof_mode.value = ProofMode::Verify;
    };

    if let Ok(Some(premises)) = args.try_get_one::<usize>("optimize") {
        the_config.premises.value = *premises;
        the_config.proof_mode.value = ProofMode::Optimize;
    };

    the_config
}
