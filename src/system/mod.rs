/*!
Proof systems, aka. axioms together with rules of deduction.

A proof checker knows nothing of particular axioms or rules.
Instead, it consults anything which implements [ProofSystem], asking:
- Whether a formula is an axiom, and if so of which type.
- Whether a formula is deducible from some proof, and if so from which members of the proof.

The canonical implementation is [Hilbert], with axiom [schemas](schema) for each connective and modus ponens as the only rule.

# Example

A proof system with a single axiom, `A`, and a rule permitting deduction of the negation of any formula already proved.

```rust
# use prop_proof::structures::formula::Formula;
# use prop_proof::structures::proof::{Proof, StepIndex};
# use prop_proof::system::{AxiomType, ProofSystem};
struct Negations;

impl ProofSystem for Negations {
    fn classify_axiom(&self, formula: &Formula) -> Option<AxiomType> {
        match formula {
            Formula::Trivial('A') => Some(1),
            _ => None,
        }
    }

    fn deducible_witnesses(&self, formula: &Formula, proof: &Proof) -> Vec<StepIndex> {
        let Formula::Unary(_, operand) = formula else {
            return vec![];
        };
        proof
            .iter()
            .find(|(_, member)| member.formula() == operand.as_ref())
            .map(|(index, _)| vec![index])
            .unwrap_or_default()
    }
}
```
*/

mod hilbert;
pub mod schema;

pub use hilbert::Hilbert;

use crate::structures::{
    formula::Formula,
    proof::{Proof, StepIndex},
};

/// The type of an axiom, a positive number identifying the schema an axiom is an instance of.
pub type AxiomType = u32;

/// Axioms and rules of deduction.
pub trait ProofSystem {
    /// The type of axiom `formula` is an instance of, if any.
    ///
    /// Types are positive.
    fn classify_axiom(&self, formula: &Formula) -> Option<AxiomType>;

    /// The indicies of members of `proof` from which `formula` may be deduced, in the order the rule of deduction uses them.
    ///
    /// An empty vector, if `formula` is not deducible from `proof`.
    fn deducible_witnesses(&self, formula: &Formula, proof: &Proof) -> Vec<StepIndex>;
}
