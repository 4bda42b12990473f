use prop_proof::{
    generic::random::MinimalPCG32,
    structures::{formula::generate::random_formula, notation::Notation},
};

use rand::SeedableRng;

const NOTATIONS: [Notation; 3] = [Notation::Prefix, Notation::Infix, Notation::Postfix];

mod round_trip {
    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = MinimalPCG32::from_seed(91_u64.to_le_bytes());

        for _ in 0..256 {
            let formula = random_formula(&mut rng, 6);

            for notation in NOTATIONS {
                let line = format!("{}\n", formula.as_string(notation));
                assert_eq!(
                    notation.parse(&mut line.as_bytes()),
                    Ok(Some(formula.clone())),
                    "{notation}: {line}"
                );
            }
        }
    }

    #[test]
    fn many_lines() {
        let mut rng = MinimalPCG32::from_seed(17_u64.to_le_bytes());
        let formulas: Vec<_> = (0..64).map(|_| random_formula(&mut rng, 4)).collect();

        for notation in NOTATIONS {
            let mut lines = String::default();
            for formula in &formulas {
                lines.push_str(&formula.as_string(notation));
                lines.push('\n');
            }

            let mut input = lines.as_bytes();
            for formula in &formulas {
                assert_eq!(notation.parse(&mut input), Ok(Some(formula.clone())));
            }
            assert_eq!(notation.parse(&mut input), Ok(None));
        }
    }

    #[test]
    fn between_notations() {
        let mut rng = MinimalPCG32::from_seed(5_u64.to_le_bytes());

        for _ in 0..64 {
            let formula = random_formula(&mut rng, 5);
            let prefix = format!("{}\n", formula.as_string(Notation::Prefix));

            let Ok(Some(read)) = Notation::Prefix.parse(&mut prefix.as_bytes()) else {
                panic!("Failed to read {prefix}");
            };
            let postfix = format!("{}\n", read.as_string(Notation::Postfix));

            assert_eq!(Notation::Postfix.parse(&mut postfix.as_bytes()), Ok(Some(formula)));
        }
    }
}
