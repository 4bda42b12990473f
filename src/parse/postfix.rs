//! Formulas in postfix notation, e.g. `AB->`.
//!
//! Each operator follows its operands.
//! Letters are pushed to a stack of formulas, and each operator pops its operands from the stack and pushes the formula it forms.
//! The first formula popped is the right-most operand.

use std::io::BufRead;

use crate::{
    structures::formula::{composite::Composite, Formula},
    types::err::ParseError,
};

use super::tokens::{Token, Tokens};

pub(super) fn parse<R: BufRead>(tokens: &mut Tokens<'_, R>) -> Result<Option<Formula>, ParseError> {
    let mut operands: Vec<Formula> = Vec::default();

    loop {
        let token = tokens.next_token()?;
        let composite = match token {
            Token::Letter(letter) => {
                operands.push(Formula::Trivial(letter));
                continue;
            }

            Token::Unary(operator) => Composite::Unary(operator),

            Token::Binary(operator) => Composite::Binary(operator),

            Token::Open | Token::Close | Token::Illegal(_) => {
                return Err(tokens.illegal(token.character()));
            }

            Token::LineEnd => break,

            Token::InputEnd => match tokens.at_start() {
                true => break,
                false => return Err(ParseError::UnexpectedEndOfInput),
            },
        };

        if operands.len() < composite.vacancies() {
            return Err(tokens.redundant(token));
        }

        let formula = composite
            .saturate_trailing(&mut operands)
            .ok_or(ParseError::IncompleteFormula)?;
        operands.push(formula);
    }

    match operands.len() {
        0 | 1 => Ok(operands.pop()),
        _ => Err(ParseError::IncompleteFormula),
    }
}
