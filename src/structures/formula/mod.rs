//! Formulas, aka. trees of connectives over atomic propositions.
//!
//! A formula is one of:
//! - A trivial formula, an atomic proposition named by a letter `A`–`Z`.
//! - A unary formula, a [unary operator](UnaryOperator) applied to a formula.
//! - A binary formula, a [binary operator](BinaryOperator) applied to a left and a right formula.
//!
//! Each formula owns its operands, and two formulas are equal exactly when they have the same shape, the same operators, and the same letters.
//!
//! ```rust
//! # use prop_proof::structures::formula::{BinaryOperator, Formula};
//! # use prop_proof::structures::notation::Notation;
//! let formula = Formula::implication(
//!     Formula::negation(Formula::trivial('A')),
//!     Formula::binary(BinaryOperator::Disjunction, Formula::trivial('B'), Formula::trivial('C')),
//! );
//!
//! assert_eq!(formula.as_string(Notation::Prefix), ">-A+BC");
//! assert_eq!(formula.as_string(Notation::Infix), "(-A>(B+C))");
//! assert_eq!(formula.as_string(Notation::Postfix), "A-BC+>");
//! ```

pub mod composite;
pub mod generate;
mod operator;

pub use operator::{BinaryOperator, UnaryOperator};

use crate::structures::notation::Notation;

/// A (complete) formula.
///
/// Formulas may be arbitrarily deep, and so every traversal of a formula, including those for equality, cloning, and dropping, uses an explicit stack.
pub enum Formula {
    /// An atomic proposition.
    Trivial(char),

    /// A unary operator and its operand.
    Unary(UnaryOperator, Box<Formula>),

    /// A binary operator and its left and right operands.
    Binary(BinaryOperator, Box<Formula>, Box<Formula>),
}

/// A part of a formula still to be written.
enum Piece<'f> {
    Formula(&'f Formula),
    Symbol(char),
}

impl Formula {
    /// The atomic proposition named by `letter`.
    pub fn trivial(letter: char) -> Self {
        Self::Trivial(letter)
    }

    pub fn negation(operand: Formula) -> Self {
        Self::Unary(UnaryOperator::Negation, Box::new(operand))
    }

    pub fn binary(operator: BinaryOperator, left: Formula, right: Formula) -> Self {
        Self::Binary(operator, Box::new(left), Box::new(right))
    }

    pub fn implication(antecedent: Formula, consequent: Formula) -> Self {
        Self::binary(BinaryOperator::Implication, antecedent, consequent)
    }

    /// The length of the longest path from the formula to an atomic proposition.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut todo: Vec<(&Formula, usize)> = vec![(self, 0)];

        while let Some((formula, depth)) = todo.pop() {
            deepest = deepest.max(depth);
            match formula {
                Self::Trivial(_) => {}
                Self::Unary(_, operand) => todo.push((operand, depth + 1)),
                Self::Binary(_, left, right) => {
                    todo.push((left, depth + 1));
                    todo.push((right, depth + 1));
                }
            }
        }

        deepest
    }

    /// The formula written in the given notation, without whitespace.
    pub fn as_string(&self, notation: Notation) -> String {
        let mut buffer = String::new();
        let mut todo: Vec<Piece> = vec![Piece::Formula(self)];

        // Pieces are pushed in reverse, so the top of the stack is written first.
        while let Some(piece) = todo.pop() {
            let formula = match piece {
                Piece::Symbol(symbol) => {
                    buffer.push(symbol);
                    continue;
                }
                Piece::Formula(formula) => formula,
            };

            match (formula, notation) {
                (Self::Trivial(letter), _) => buffer.push(*letter),

                (Self::Unary(operator, operand), Notation::Prefix | Notation::Infix) => {
                    todo.push(Piece::Formula(operand));
                    todo.push(Piece::Symbol(operator.symbol()));
                }

                (Self::Unary(operator, operand), Notation::Postfix) => {
                    todo.push(Piece::Symbol(operator.symbol()));
                    todo.push(Piece::Formula(operand));
                }

                (Self::Binary(operator, left, right), Notation::Prefix) => {
                    todo.push(Piece::Formula(right));
                    todo.push(Piece::Formula(left));
                    todo.push(Piece::Symbol(operator.symbol()));
                }

                (Self::Binary(operator, left, right), Notation::Infix) => {
                    todo.push(Piece::Symbol(')'));
                    todo.push(Piece::Formula(right));
                    todo.push(Piece::Symbol(operator.symbol()));
                    todo.push(Piece::Formula(left));
                    todo.push(Piece::Symbol('('));
                }

                (Self::Binary(operator, left, right), Notation::Postfix) => {
                    todo.push(Piece::Symbol(operator.symbol()));
                    todo.push(Piece::Formula(right));
                    todo.push(Piece::Formula(left));
                }
            }
        }

        buffer
    }

    /// Moves the non-trivial operands of the formula to `todo`, leaving trivial formulas in their place.
    fn take_operands(&mut self, todo: &mut Vec<Formula>) {
        let mut take = |operand: &mut Box<Formula>| {
            if !matches!(operand.as_ref(), Self::Trivial(_)) {
                todo.push(std::mem::replace(operand.as_mut(), Self::Trivial('A')));
            }
        };

        match self {
            Self::Trivial(_) => {}
            Self::Unary(_, operand) => take(operand),
            Self::Binary(_, left, right) => {
                take(left);
                take(right);
            }
        }
    }
}

impl Drop for Formula {
    fn drop(&mut self) {
        let mut todo = Vec::default();
        self.take_operands(&mut todo);

        while let Some(mut formula) = todo.pop() {
            formula.take_operands(&mut todo);
        }
    }
}

impl Clone for Formula {
    fn clone(&self) -> Self {
        enum Visit<'f> {
            Enter(&'f Formula),
            Exit(&'f Formula),
        }

        let mut built: Vec<Formula> = Vec::default();
        let mut todo = vec![Visit::Enter(self)];

        while let Some(visit) = todo.pop() {
            match visit {
                Visit::Enter(Self::Trivial(letter)) => built.push(Self::Trivial(*letter)),

                Visit::Enter(formula @ Self::Unary(_, operand)) => {
                    todo.push(Visit::Exit(formula));
                    todo.push(Visit::Enter(operand));
                }

                Visit::Enter(formula @ Self::Binary(_, left, right)) => {
                    todo.push(Visit::Exit(formula));
                    todo.push(Visit::Enter(right));
                    todo.push(Visit::Enter(left));
                }

                Visit::Exit(Self::Unary(operator, _)) => {
                    let operand = built.pop().unwrap_or(Self::Trivial('A'));
                    built.push(Self::Unary(*operator, Box::new(operand)));
                }

                Visit::Exit(Self::Binary(operator, _, _)) => {
                    let right = built.pop().unwrap_or(Self::Trivial('A'));
                    let left = built.pop().unwrap_or(Self::Trivial('A'));
                    built.push(Self::binary(*operator, left, right));
                }

                Visit::Exit(Self::Trivial(letter)) => built.push(Self::Trivial(*letter)),
            }
        }

        built.pop().unwrap_or(Self::Trivial('A'))
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        let mut todo: Vec<(&Formula, &Formula)> = vec![(self, other)];

        while let Some(pair) = todo.pop() {
            match pair {
                (Self::Trivial(a), Self::Trivial(b)) => {
                    if a != b {
                        return false;
                    }
                }

                (Self::Unary(a_operator, a_operand), Self::Unary(b_operator, b_operand)) => {
                    if a_operator != b_operator {
                        return false;
                    }
                    todo.push((a_operand, b_operand));
                }

                (
                    Self::Binary(a_operator, a_left, a_right),
                    Self::Binary(b_operator, b_left, b_right),
                ) => {
                    if a_operator != b_operator {
                        return false;
                    }
                    todo.push((a_right, b_right));
                    todo.push((a_left, b_left));
                }

                _ => return false,
            }
        }

        true
    }
}

impl Eq for Formula {}

/// Formulas are displayed in infix notation.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string(Notation::Infix))
    }
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Formula")
            .field(&self.as_string(Notation::Infix))
            .finish()
    }
}
