//! Proofs, aka. sequences of formulas each justified by the formulas before it.
//!
//! A proof is stored as a vector of [ProofMember]s, and members are referred to by 1-based [StepIndex]s, the same indicies used when reporting on a proof.
//!
//! Each member records the formula it proves together with its witnesses: the indicies of the earlier members used to deduce the formula.
//! Axioms and restated premises have no witnesses.
//!
//! ```rust
//! # use prop_proof::structures::formula::Formula;
//! # use prop_proof::structures::proof::Proof;
//! let mut proof = Proof::default();
//!
//! let a = Formula::trivial('A');
//! let a_b = Formula::implication(Formula::trivial('A'), Formula::trivial('B'));
//!
//! assert_eq!(proof.push(a, vec![]), Ok(1));
//! assert_eq!(proof.push(a_b, vec![]), Ok(2));
//! assert_eq!(proof.push(Formula::trivial('B'), vec![1, 2]), Ok(3));
//!
//! assert!(proof.push(Formula::trivial('C'), vec![4]).is_err());
//! assert_eq!(proof.get(3).map(|member| member.witnesses()), Some([1, 2].as_slice()));
//! ```

use crate::{
    structures::formula::Formula,
    types::err::{self},
};

/// The 1-based index of a member of a proof.
pub type StepIndex = usize;

/// A formula proved by a proof, and the members of the proof it was deduced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofMember {
    formula: Formula,

    witnesses: Vec<StepIndex>,

    /// Set when the member is needed to derive the final member of the proof.
    pub(crate) preserve: bool,
}

impl ProofMember {
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The indicies of the members the formula was deduced from, in the order used by the rule of deduction.
    pub fn witnesses(&self) -> &[StepIndex] {
        &self.witnesses
    }

    /// Whether the last [optimization](crate::procedures::optimize) found the member to be needed.
    pub fn preserved(&self) -> bool {
        self.preserve
    }
}

/// A sequence of proof members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Proof {
    members: Vec<ProofMember>,
}

impl Proof {
    /// Appends a member to the proof, returning its index.
    ///
    /// Every witness must be the index of some member already in the proof.
    pub fn push(
        &mut self,
        formula: Formula,
        witnesses: Vec<StepIndex>,
    ) -> Result<StepIndex, err::ProofError> {
        if let Some(unknown) = witnesses
            .iter()
            .find(|index| **index == 0 || **index > self.members.len())
        {
            return Err(err::ProofError::UnknownWitness(*unknown));
        }

        self.members.push(ProofMember {
            formula,
            witnesses,
            preserve: false,
        });
        Ok(self.members.len())
    }

    /// The member at `index`, if there is one.
    pub fn get(&self, index: StepIndex) -> Option<&ProofMember> {
        match index {
            0 => None,
            _ => self.members.get(index - 1),
        }
    }

    pub fn formula(&self, index: StepIndex) -> Option<&Formula> {
        self.get(index).map(|member| &member.formula)
    }

    pub(crate) fn get_mut(&mut self, index: StepIndex) -> Option<&mut ProofMember> {
        match index {
            0 => None,
            _ => self.members.get_mut(index - 1),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// An iterator over the members of the proof, paired with their index, in order.
    pub fn iter(&self) -> impl Iterator<Item = (StepIndex, &ProofMember)> {
        self.members
            .iter()
            .enumerate()
            .map(|(offset, member)| (offset + 1, member))
    }

    /// The formulas of each preserved member, in order.
    pub fn preserved(&self) -> impl Iterator<Item = &Formula> {
        self.members
            .iter()
            .filter(|member| member.preserve)
            .map(|member| &member.formula)
    }

    pub(crate) fn clear_preserve(&mut self) {
        for member in &mut self.members {
            member.preserve = false;
        }
    }

    /// A proof of only the preserved members, with witnesses renumbered to match.
    ///
    /// Members keep their relative order, and no member of the new proof is marked as preserved.
    pub fn into_preserved(self) -> Proof {
        let mut renumbering: Vec<Option<StepIndex>> = Vec::with_capacity(self.members.len());
        let mut members = Vec::default();

        for member in self.members {
            if !member.preserve {
                renumbering.push(None);
                continue;
            }

            let witnesses = member
                .witnesses
                .iter()
                .filter_map(|index| renumbering.get(index - 1).copied().flatten())
                .collect();

            members.push(ProofMember {
                formula: member.formula,
                witnesses,
                preserve: false,
            });
            renumbering.push(Some(members.len()));
        }

        Proof { members }
    }
}
