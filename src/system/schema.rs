//! Axiom schemas, aka. formulas whose letters stand for arbitrary formulas.
//!
//! A formula is an instance of a schema if some substitution of formulas for the letters of the schema gives the formula.
//! Each letter is substituted consistently, so `(A>A)` has `(B>B)` and `((B.C)>(B.C))` as instances, but not `(B>C)`.
//!
//! ```rust
//! # use prop_proof::structures::formula::Formula;
//! # use prop_proof::system::schema::Schema;
//! let a = Formula::trivial('A');
//! let schema = Schema::new(Formula::implication(a.clone(), a));
//!
//! let b = Formula::trivial('B');
//! let c = Formula::trivial('C');
//! assert!(schema.matches(&Formula::implication(b.clone(), b.clone())));
//! assert!(!schema.matches(&Formula::implication(b, c)));
//! ```

use crate::structures::formula::Formula;

/// A formula pattern, with letters as metavariables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    pattern: Formula,
}

/// The formula bound to each letter, indexed from `A`.
type Bindings<'f> = [Option<&'f Formula>; 26];

impl Schema {
    pub fn new(pattern: Formula) -> Self {
        Schema { pattern }
    }

    /// Whether `formula` is an instance of the schema.
    pub fn matches(&self, formula: &Formula) -> bool {
        let mut bindings: Bindings = [None; 26];
        bind(&self.pattern, formula, &mut bindings)
    }
}

fn bind<'f>(pattern: &Formula, formula: &'f Formula, bindings: &mut Bindings<'f>) -> bool {
    match (pattern, formula) {
        (Formula::Trivial(letter), _) => {
            let Some(slot) = (*letter as usize)
                .checked_sub('A' as usize)
                .and_then(|index| bindings.get_mut(index))
            else {
                return false;
            };

            match *slot {
                Some(bound) => bound == formula,
                None => {
                    *slot = Some(formula);
                    true
                }
            }
        }

        (Formula::Unary(p_operator, p_operand), Formula::Unary(f_operator, f_operand)) => {
            p_operator == f_operator && bind(p_operand, f_operand, bindings)
        }

        (
            Formula::Binary(p_operator, p_left, p_right),
            Formula::Binary(f_operator, f_left, f_right),
        ) => {
            p_operator == f_operator
                && bind(p_left, f_left, bindings)
                && bind(p_right, f_right, bindings)
        }

        _ => false,
    }
}
