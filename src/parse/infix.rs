//! Formulas in infix notation, e.g. `(A>-B)`.
//!
//! Each binary operator is written between its operands, and the pair is wrapped in brackets.
//! A unary operator precedes its operand, without brackets, and unary operators may be chained, e.g. `--A` or `-(A.B)`.
//! A single letter, possibly negated, is also a formula.
//!
//! Note, each pair of brackets contains exactly one binary operator, so `(A>B>C)` is not a formula.
//!
//! The parser keeps a stack of [levels](Level), one for each open bracket and one for each unary operator still waiting on its operand, together with a stack of operands read so far.
//! A bracket level moves from [Blank](Level::Blank), to [FirstOperand](Level::FirstOperand), to [Operator](Level::Operator), to [LastOperand](Level::LastOperand), at which point it may be closed.
//! On closing, the binary operator is filled with the top two operands, and the result wraps through any unary operators waiting below the bracket before settling as an operand of the enclosing level.

use std::io::BufRead;

use crate::{
    structures::formula::{
        composite::{Composite, Fill},
        Formula,
    },
    types::err::ParseError,
};

use super::tokens::{Token, Tokens};

/// The state of an open bracket, or a unary operator waiting on its operand.
#[derive(Debug)]
enum Level {
    /// A unary operator.
    Unary(Composite),

    /// An open bracket.
    Blank,

    /// A bracket with its first operand.
    FirstOperand,

    /// A bracket with its first operand and a binary operator.
    Operator(Composite),

    /// A bracket with both operands, ready to close.
    LastOperand(Composite),
}

impl Level {
    /// The level after an operand has been settled.
    fn advance(self) -> Self {
        match self {
            Self::Blank => Self::FirstOperand,
            Self::Operator(composite) => Self::LastOperand(composite),
            other => other,
        }
    }

    /// Whether the level permits the start of an operand: a letter, a unary operator, or an open bracket.
    fn awaits_operand(&self) -> bool {
        matches!(self, Self::Unary(_) | Self::Blank | Self::Operator(_))
    }
}

pub(super) fn parse<R: BufRead>(tokens: &mut Tokens<'_, R>) -> Result<Option<Formula>, ParseError> {
    let mut levels: Vec<Level> = Vec::default();
    let mut operands: Vec<Formula> = Vec::default();

    loop {
        let token = tokens.next_token()?;
        match token {
            Token::Letter(letter) => match levels.last() {
                None => match tokens.at_start() {
                    true => operands.push(Formula::Trivial(letter)),
                    false => return Err(tokens.unexpected(token)),
                },

                Some(level) if level.awaits_operand() => {
                    settle(&mut levels, &mut operands, Formula::Trivial(letter))?
                }

                Some(_) => return Err(tokens.unexpected(token)),
            },

            Token::Unary(operator) => match levels.last() {
                None if !tokens.at_start() => return Err(tokens.redundant(token)),

                None => levels.push(Level::Unary(Composite::Unary(operator))),

                Some(level) if level.awaits_operand() => {
                    levels.push(Level::Unary(Composite::Unary(operator)))
                }

                Some(_) => return Err(tokens.unexpected(token)),
            },

            Token::Binary(operator) => match levels.pop() {
                None => match tokens.at_start() {
                    true => return Err(tokens.unexpected(token)),
                    false => return Err(tokens.redundant(token)),
                },

                Some(Level::FirstOperand) => {
                    levels.push(Level::Operator(Composite::Binary(operator)))
                }

                Some(_) => return Err(tokens.unexpected(token)),
            },

            Token::Open => match levels.last() {
                None => match tokens.at_start() {
                    true => levels.push(Level::Blank),
                    false => return Err(tokens.redundant(token)),
                },

                Some(level) if level.awaits_operand() => levels.push(Level::Blank),

                Some(_) => return Err(tokens.unexpected(token)),
            },

            Token::Close => match levels.pop() {
                None => return Err(tokens.redundant(token)),

                Some(Level::LastOperand(composite)) => {
                    let formula = composite
                        .saturate_trailing(&mut operands)
                        .ok_or(ParseError::IncompleteFormula)?;
                    settle(&mut levels, &mut operands, formula)?;
                }

                Some(_) => return Err(tokens.unexpected(token)),
            },

            Token::Illegal(character) => return Err(tokens.illegal(character)),

            Token::LineEnd => break,

            Token::InputEnd => match tokens.at_start() {
                true => break,
                false => return Err(ParseError::UnexpectedEndOfInput),
            },
        }
    }

    match levels.is_empty() {
        true => Ok(operands.pop()),
        false => Err(ParseError::IncompleteFormula),
    }
}

/// Wraps `formula` in each unary operator waiting at the top of `levels`, then records the result as an operand of the enclosing bracket, if any.
fn settle(
    levels: &mut Vec<Level>,
    operands: &mut Vec<Formula>,
    formula: Formula,
) -> Result<(), ParseError> {
    let mut formula = formula;

    loop {
        match levels.pop() {
            Some(Level::Unary(composite)) => match composite.fill_leading(formula) {
                Fill::Complete(wrapped) => formula = wrapped,
                Fill::Partial(_) => return Err(ParseError::IncompleteFormula),
            },

            Some(level) => {
                levels.push(level.advance());
                break;
            }

            None => break,
        }
    }

    operands.push(formula);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        structures::formula::{BinaryOperator, Formula},
        structures::notation::Notation,
        types::err::ParseError,
    };

    fn parse(line: &str) -> Result<Option<Formula>, ParseError> {
        Notation::Infix.parse(&mut line.as_bytes())
    }

    fn a() -> Formula {
        Formula::trivial('A')
    }

    fn b() -> Formula {
        Formula::trivial('B')
    }

    #[test]
    fn single_letter() {
        assert_eq!(parse("Q\n"), Ok(Some(Formula::trivial('Q'))));
    }

    #[test]
    fn chained_negation() {
        let expected = Formula::negation(Formula::negation(a()));
        assert_eq!(parse("--A\n"), Ok(Some(expected)));
    }

    #[test]
    fn negated_bracket() {
        let expected = Formula::negation(Formula::binary(BinaryOperator::Disjunction, a(), b()));
        assert_eq!(parse("-(A+B)\n"), Ok(Some(expected)));
    }

    #[test]
    fn negated_operands() {
        let expected = Formula::implication(
            Formula::negation(a()),
            Formula::negation(Formula::negation(Formula::implication(a(), b()))),
        );
        assert_eq!(parse("(-A > --(A>B))\n"), Ok(Some(expected)));
    }

    #[test]
    fn nested_left() {
        let expected = Formula::binary(
            BinaryOperator::Equivalence,
            Formula::binary(BinaryOperator::Conjunction, a(), b()),
            Formula::trivial('C'),
        );
        assert_eq!(parse("((A.B)=C)\n"), Ok(Some(expected)));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(
            parse("(A>)\n"),
            Err(ParseError::UnexpectedElement {
                character: ')',
                position: 4
            })
        );
    }

    #[test]
    fn chained_binary() {
        assert_eq!(
            parse("(A>B>C)\n"),
            Err(ParseError::UnexpectedElement {
                character: '>',
                position: 5
            })
        );
    }

    #[test]
    fn bracketed_letter() {
        assert_eq!(
            parse("(A)\n"),
            Err(ParseError::UnexpectedElement {
                character: ')',
                position: 3
            })
        );
    }

    #[test]
    fn after_completion() {
        assert_eq!(
            parse("A B\n"),
            Err(ParseError::UnexpectedElement {
                character: 'B',
                position: 2
            })
        );
        assert_eq!(
            parse("(A>B))\n"),
            Err(ParseError::RedundantElement {
                character: ')',
                position: 6
            })
        );
        assert_eq!(
            parse("-A-\n"),
            Err(ParseError::RedundantElement {
                character: '-',
                position: 3
            })
        );
        assert_eq!(
            parse("A(\n"),
            Err(ParseError::RedundantElement {
                character: '(',
                position: 2
            })
        );
    }

    #[test]
    fn leading_binary_operator() {
        assert_eq!(
            parse(">\n"),
            Err(ParseError::UnexpectedElement {
                character: '>',
                position: 1
            })
        );
    }

    #[test]
    fn incomplete() {
        assert_eq!(parse("(A>B\n"), Err(ParseError::IncompleteFormula));
        assert_eq!(parse("--\n"), Err(ParseError::IncompleteFormula));
        assert_eq!(parse("(\n"), Err(ParseError::IncompleteFormula));
    }

    #[test]
    fn unterminated() {
        assert_eq!(parse("(A>B)"), Err(ParseError::UnexpectedEndOfInput));
    }
}
