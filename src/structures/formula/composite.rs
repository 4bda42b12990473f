//! Composite formulas under construction.
//!
//! A parser reads the operator of a composite formula before (prefix, infix) or after (postfix) its operands, and so builds composite formulas in steps.
//! A [Composite] is an operator together with whichever of its operands have been read so far, and is filled by one of two methods:
//! - [fill_leading](Composite::fill_leading), which fills the left-most empty operand.
//! - [fill_trailing](Composite::fill_trailing), which fills the right-most empty operand.
//!
//! Each method takes ownership of the composite and returns a [Fill], which is either the composite with an operand still to fill or the completed [Formula].
//! As a completed formula is no longer a composite, no operand can be filled after completion.
//!
//! ```rust
//! # use prop_proof::structures::formula::{BinaryOperator, Formula};
//! # use prop_proof::structures::formula::composite::{Composite, Fill};
//! let implication = Composite::Binary(BinaryOperator::Implication);
//!
//! let Fill::Partial(implication) = implication.fill_trailing(Formula::trivial('B')) else {
//!     panic!("An implication has two operands");
//! };
//! let Fill::Complete(formula) = implication.fill_trailing(Formula::trivial('A')) else {
//!     panic!("Both operands are filled");
//! };
//!
//! assert_eq!(formula.to_string(), "(A>B)");
//! ```
//!
//! Composites exist only within a parser.
//! Formulas outside a parser are always complete.

use super::{BinaryOperator, Formula, UnaryOperator};

/// An operator with some of its operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Composite {
    /// A unary operator without its operand.
    Unary(UnaryOperator),

    /// A binary operator without either operand.
    Binary(BinaryOperator),

    /// A binary operator with only the left operand.
    LeftFilled(BinaryOperator, Box<Formula>),

    /// A binary operator with only the right operand.
    RightFilled(BinaryOperator, Box<Formula>),
}

/// The result of filling an operand of a composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Some operand remains empty.
    Partial(Composite),

    /// Every operand is filled.
    Complete(Formula),
}

impl Composite {
    /// Fills the left-most empty operand.
    pub fn fill_leading(self, operand: Formula) -> Fill {
        match self {
            Self::Unary(operator) => Fill::Complete(Formula::Unary(operator, Box::new(operand))),

            Self::Binary(operator) => Fill::Partial(Self::LeftFilled(operator, Box::new(operand))),

            Self::LeftFilled(operator, left) => {
                Fill::Complete(Formula::Binary(operator, left, Box::new(operand)))
            }

            Self::RightFilled(operator, right) => {
                Fill::Complete(Formula::Binary(operator, Box::new(operand), right))
            }
        }
    }

    /// Fills the right-most empty operand.
    pub fn fill_trailing(self, operand: Formula) -> Fill {
        match self {
            Self::Unary(operator) => Fill::Complete(Formula::Unary(operator, Box::new(operand))),

            Self::Binary(operator) => {
                Fill::Partial(Self::RightFilled(operator, Box::new(operand)))
            }

            Self::LeftFilled(operator, left) => {
                Fill::Complete(Formula::Binary(operator, left, Box::new(operand)))
            }

            Self::RightFilled(operator, right) => {
                Fill::Complete(Formula::Binary(operator, Box::new(operand), right))
            }
        }
    }

    /// The number of operands which remain empty.
    pub fn vacancies(&self) -> usize {
        match self {
            Self::Unary(_) | Self::LeftFilled(..) | Self::RightFilled(..) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Fills the composite by repeatedly popping a formula from the top of `operands` to fill the right-most empty operand.
    ///
    /// So, for a binary operator, the top of the stack becomes the right operand and the formula below it the left operand.
    ///
    /// Returns None if the stack is exhausted before the composite is complete.
    pub fn saturate_trailing(self, operands: &mut Vec<Formula>) -> Option<Formula> {
        let mut pending = self;
        loop {
            let operand = operands.pop()?;
            match pending.fill_trailing(operand) {
                Fill::Complete(formula) => return Some(formula),
                Fill::Partial(composite) => pending = composite,
            }
        }
    }
}
