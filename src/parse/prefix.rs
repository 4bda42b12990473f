//! Formulas in prefix notation, e.g. `>A-B`.
//!
//! Each operator precedes its operands, so no brackets are required (or permitted).
//!
//! Operators are kept on a stack of [composites](Composite) until their operands have been read.
//! On reading a letter the letter fills the left-most empty operand of the composite at the top of the stack, and whenever this completes the composite the composite is popped and, in turn, used to fill the composite below.
//! When the stack empties the formula of the line is complete, and any further token is redundant.

use std::io::BufRead;

use crate::{
    structures::formula::{
        composite::{Composite, Fill},
        Formula,
    },
    types::err::ParseError,
};

use super::tokens::{Token, Tokens};

pub(super) fn parse<R: BufRead>(tokens: &mut Tokens<'_, R>) -> Result<Option<Formula>, ParseError> {
    let mut operators: Vec<Composite> = Vec::default();
    let mut formula: Option<Formula> = None;

    loop {
        let token = tokens.next_token()?;
        match token {
            Token::Letter(letter) => {
                if operators.is_empty() && !tokens.at_start() {
                    return Err(tokens.redundant(token));
                }
                formula = settle(&mut operators, Formula::Trivial(letter));
            }

            Token::Unary(operator) => {
                if operators.is_empty() && !tokens.at_start() {
                    return Err(tokens.redundant(token));
                }
                operators.push(Composite::Unary(operator));
            }

            Token::Binary(operator) => {
                if operators.is_empty() && !tokens.at_start() {
                    return Err(tokens.redundant(token));
                }
                operators.push(Composite::Binary(operator));
            }

            Token::Open | Token::Close | Token::Illegal(_) => {
                return Err(tokens.illegal(token.character()));
            }

            Token::LineEnd => break,

            Token::InputEnd => match tokens.at_start() {
                true => break,
                false => return Err(ParseError::UnexpectedEndOfInput),
            },
        }
    }

    match operators.is_empty() {
        true => Ok(formula),
        false => Err(ParseError::IncompleteFormula),
    }
}

/// Fills the composite at the top of `operators` with `operand`, popping and propagating each completed composite.
///
/// Returns the formula of the line, if the stack was emptied.
fn settle(operators: &mut Vec<Composite>, operand: Formula) -> Option<Formula> {
    let mut operand = operand;
    loop {
        match operators.pop() {
            None => return Some(operand),

            Some(composite) => match composite.fill_leading(operand) {
                Fill::Complete(formula) => operand = formula,

                Fill::Partial(composite) => {
                    operators.push(composite);
                    return None;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        structures::formula::{BinaryOperator, Formula},
        structures::notation::Notation,
        types::err::ParseError,
    };

    fn parse(line: &str) -> Result<Option<Formula>, ParseError> {
        Notation::Prefix.parse(&mut line.as_bytes())
    }

    #[test]
    fn nested() {
        let expected = Formula::binary(
            BinaryOperator::Conjunction,
            Formula::negation(Formula::trivial('A')),
            Formula::implication(Formula::trivial('B'), Formula::trivial('C')),
        );

        assert_eq!(parse(".-A>BC\n"), Ok(Some(expected)));
    }

    #[test]
    fn redundant_after_completion() {
        assert_eq!(
            parse("-AB\n"),
            Err(ParseError::RedundantElement {
                character: 'B',
                position: 3
            })
        );
        assert_eq!(
            parse("A -\n"),
            Err(ParseError::RedundantElement {
                character: '-',
                position: 2
            })
        );
    }

    #[test]
    fn incomplete() {
        assert_eq!(parse(">A\n"), Err(ParseError::IncompleteFormula));
        assert_eq!(parse("-\n"), Err(ParseError::IncompleteFormula));
    }

    #[test]
    fn brackets_are_illegal() {
        assert_eq!(
            parse("(A)\n"),
            Err(ParseError::IllegalCharacter {
                character: '(',
                position: 1
            })
        );
    }

    #[test]
    fn blank() {
        assert_eq!(parse("\n"), Ok(None));
        assert_eq!(parse(" \t \n"), Ok(None));
        assert_eq!(parse(""), Ok(None));
    }

    #[test]
    fn unterminated() {
        assert_eq!(parse(">AB"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse(">A"), Err(ParseError::UnexpectedEndOfInput));
    }
}
