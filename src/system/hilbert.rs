//! A Hilbert-style system for classical propositional logic.
//!
//! # Axioms
//!
//! Twelve schemas, numbered from 1:
//!
//! | # | Schema |
//! |---|--------|
//! | 1 | `(A>(B>A))` |
//! | 2 | `((A>(B>C))>((A>B)>(A>C)))` |
//! | 3 | `((-A>-B)>(B>A))` |
//! | 4 | `((A.B)>A)` |
//! | 5 | `((A.B)>B)` |
//! | 6 | `(A>(B>(A.B)))` |
//! | 7 | `(A>(A+B))` |
//! | 8 | `(B>(A+B))` |
//! | 9 | `((A>C)>((B>C)>((A+B)>C)))` |
//! | 10 | `((A=B)>(A>B))` |
//! | 11 | `((A=B)>(B>A))` |
//! | 12 | `((A>B)>((B>A)>(A=B)))` |
//!
//! The first three schemas are complete for implication and negation, and the remainder characterise conjunction, disjunction, and equivalence.
//!
//! # Deduction
//!
//! The only rule is modus ponens: from `A` and `(A>B)`, deduce `B`.
//! The witnesses of a deduction are the index of `A` followed by the index of `(A>B)`.

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::{BinaryOperator, Formula},
        proof::{Proof, StepIndex},
    },
};

use super::{schema::Schema, AxiomType, ProofSystem};

/// Classical propositional logic, with modus ponens.
pub struct Hilbert {
    schemas: Vec<Schema>,
}

impl Hilbert {
    /// The axiom schemas, in order of their type.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }
}

impl Default for Hilbert {
    fn default() -> Self {
        let a = || Formula::trivial('A');
        let b = || Formula::trivial('B');
        let c = || Formula::trivial('C');

        let and = |l, r| Formula::binary(BinaryOperator::Conjunction, l, r);
        let or = |l, r| Formula::binary(BinaryOperator::Disjunction, l, r);
        let iff = |l, r| Formula::binary(BinaryOperator::Equivalence, l, r);
        let imp = Formula::implication;
        let not = Formula::negation;

        let patterns = vec![
            imp(a(), imp(b(), a())),
            imp(
                imp(a(), imp(b(), c())),
                imp(imp(a(), b()), imp(a(), c())),
            ),
            imp(imp(not(a()), not(b())), imp(b(), a())),
            imp(and(a(), b()), a()),
            imp(and(a(), b()), b()),
            imp(a(), imp(b(), and(a(), b()))),
            imp(a(), or(a(), b())),
            imp(b(), or(a(), b())),
            imp(
                imp(a(), c()),
                imp(imp(b(), c()), imp(or(a(), b()), c())),
            ),
            imp(iff(a(), b()), imp(a(), b())),
            imp(iff(a(), b()), imp(b(), a())),
            imp(imp(a(), b()), imp(imp(b(), a()), iff(a(), b()))),
        ];

        Hilbert {
            schemas: patterns.into_iter().map(Schema::new).collect(),
        }
    }
}

impl ProofSystem for Hilbert {
    fn classify_axiom(&self, formula: &Formula) -> Option<AxiomType> {
        let position = self.schemas.iter().position(|schema| schema.matches(formula))?;
        let axiom_type = position as AxiomType + 1;
        log::trace!(target: targets::AXIOM, "{formula} is an instance of axiom {axiom_type}");
        Some(axiom_type)
    }

    fn deducible_witnesses(&self, formula: &Formula, proof: &Proof) -> Vec<StepIndex> {
        for (implication_index, member) in proof.iter() {
            let Formula::Binary(BinaryOperator::Implication, antecedent, consequent) =
                member.formula()
            else {
                continue;
            };

            if consequent.as_ref() != formula {
                continue;
            }

            let antecedent_index = proof
                .iter()
                .find(|(_, candidate)| candidate.formula() == antecedent.as_ref());

            if let Some((antecedent_index, _)) = antecedent_index {
                log::trace!(target: targets::DEDUCTION, "{formula} by modus ponens from {antecedent_index} and {implication_index}");
                return vec![antecedent_index, implication_index];
            }
        }

        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::notation::Notation;

    fn infix(line: &str) -> Formula {
        match Notation::Infix.parse(&mut line.as_bytes()) {
            Ok(Some(formula)) => formula,
            _ => panic!("Malformed test formula: {line}"),
        }
    }

    #[test]
    fn schema_types() {
        let system = Hilbert::default();

        assert_eq!(system.classify_axiom(&infix("(P>(Q>P))\n")), Some(1));
        assert_eq!(
            system.classify_axiom(&infix("((P>((Q>P)>R))>((P>(Q>P))>(P>R)))\n")),
            Some(2)
        );
        assert_eq!(system.classify_axiom(&infix("((--P>-Q)>(Q>-P))\n")), Some(3));
        assert_eq!(system.classify_axiom(&infix("(((P+Q).R)>(P+Q))\n")), Some(4));
        assert_eq!(system.classify_axiom(&infix("(Q>(P+Q))\n")), Some(8));
        assert_eq!(system.classify_axiom(&infix("((P=Q)>(Q>P))\n")), Some(11));
    }

    #[test]
    fn not_axioms() {
        let system = Hilbert::default();

        assert_eq!(system.classify_axiom(&infix("(P>P)\n")), None);
        assert_eq!(system.classify_axiom(&infix("(P>(Q>R))\n")), None);
        assert_eq!(system.classify_axiom(&infix("P\n")), None);
    }

    #[test]
    fn modus_ponens() {
        let system = Hilbert::default();
        let mut proof = Proof::default();

        assert!(proof.push(infix("(A>B)\n"), vec![]).is_ok());
        assert!(proof.push(infix("C\n"), vec![]).is_ok());
        assert!(proof.push(infix("A\n"), vec![]).is_ok());

        assert_eq!(system.deducible_witnesses(&infix("B\n"), &proof), vec![3, 1]);
        assert!(system.deducible_witnesses(&infix("A\n"), &proof).is_empty());
        assert!(system.deducible_witnesses(&infix("C\n"), &proof).is_empty());
    }
}
