/*!
The context, from which formulas are read and within which proofs are checked.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [proof system](crate::system) used to classify axioms and find deductions.
A [Context] uses the [Hilbert](crate::system::Hilbert) system, and [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a proof system to be supplied alongside a config.

A context is reused across runs, though each run begins afresh.
Only the [counters](Counters) of the most recent run are kept.

# Example
```rust
# use prop_proof::context::Context;
# use prop_proof::config::Config;
# use prop_proof::reports::Report;
# use std::{cell::RefCell, rc::Rc};
let mut the_context = Context::from_config(Config::default());

let axiom_types = Rc::new(RefCell::new(Vec::default()));
let callback_types = axiom_types.clone();
the_context.set_callback_axiom(Box::new(move |_, axiom_type| {
    callback_types.borrow_mut().push(axiom_type)
}));

let lines = b"(P>(Q>P))
(P>Q)
";

assert_eq!(the_context.check_axioms(lines.as_slice()), Report::Failure);
assert_eq!(the_context.counters.lines, 2);
assert_eq!(*axiom_types.borrow(), vec![Some(1), None]);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
