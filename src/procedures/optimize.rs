/*!
A procedure to find the members of a proof needed to derive the final member.

A member is needed if it is the final member, or a witness to some needed member.
So, the needed members are those reachable from the final member by following witnesses, and these are found by a breadth-first traversal from the final member.

Each needed member is marked as [preserved](crate::structures::proof::ProofMember::preserved), and the formulas of preserved members, in order, are a proof of the final formula.

# Example

```rust
# use prop_proof::structures::formula::Formula;
# use prop_proof::structures::proof::Proof;
# use prop_proof::types::err::ProofError;
let mut proof = Proof::default();

let a = Formula::trivial('A');
let a_b = Formula::implication(Formula::trivial('A'), Formula::trivial('B'));

assert!(proof.push(a, vec![]).is_ok());
assert!(proof.push(Formula::trivial('C'), vec![]).is_ok());
assert!(proof.push(a_b, vec![]).is_ok());
assert!(proof.push(Formula::trivial('B'), vec![1, 3]).is_ok());

assert_eq!(proof.optimize(), Ok(3));
assert_eq!(proof.preserved().count(), 3);
assert!(proof.get(2).is_some_and(|member| !member.preserved()));

let mut optimized = proof.into_preserved();
assert_eq!(optimized.optimize(), Err(ProofError::AlreadyOptimal));
```
*/

use std::collections::VecDeque;

use crate::{
    misc::log::targets::{self},
    structures::proof::{Proof, StepIndex},
    types::err::{self},
};

impl Proof {
    /// Marks each member needed to derive the final member as preserved, and returns a count of the preserved members.
    ///
    /// Any marks from an earlier optimization are cleared.
    ///
    /// Returns [AlreadyOptimal](err::ProofError::AlreadyOptimal) if every member is needed, and so also if the proof is empty.
    pub fn optimize(&mut self) -> Result<usize, err::ProofError> {
        self.clear_preserve();

        let mut preserved = 0;
        let mut todo: VecDeque<StepIndex> = VecDeque::default();
        todo.push_back(self.len());

        while let Some(index) = todo.pop_front() {
            let Some(member) = self.get_mut(index) else {
                continue;
            };

            if member.preserve {
                continue;
            }
            member.preserve = true;
            preserved += 1;

            todo.extend(member.witnesses().iter().copied());
        }

        log::info!(target: targets::OPTIMIZATION, "Preserved {preserved} of {} members", self.len());

        match preserved == self.len() {
            true => Err(err::ProofError::AlreadyOptimal),
            false => Ok(preserved),
        }
    }
}
