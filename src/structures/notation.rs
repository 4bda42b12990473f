//! The notations in which formulas are read and written.

use std::{io::BufRead, str::FromStr};

use crate::{
    parse,
    structures::formula::Formula,
    types::err::{self},
};

/// Where an operator is written relative to its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Notation {
    /// `>AB`
    Prefix,

    /// `(A>B)`
    Infix,

    /// `AB>`
    Postfix,
}

impl Notation {
    pub const MIN: Notation = Notation::Prefix;
    pub const MAX: Notation = Notation::Postfix;

    /// Reads the next line of `reader` as a formula in the notation.
    ///
    /// Returns `Ok(None)` if the line contains no formula, which is taken to mark the end of the input.
    /// See [parse] for details.
    pub fn parse(&self, reader: &mut impl BufRead) -> Result<Option<Formula>, err::ParseError> {
        parse::parse_line(*self, reader)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Infix => write!(f, "infix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prefix" | "polish" => Ok(Self::Prefix),
            "infix" => Ok(Self::Infix),
            "postfix" | "rpn" => Ok(Self::Postfix),
            _ => Err(format!("unknown notation '{s}', expected prefix, infix, or postfix")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for notation in [Notation::Prefix, Notation::Infix, Notation::Postfix] {
            assert_eq!(notation.to_string().parse::<Notation>(), Ok(notation));
        }
        assert_eq!("RPN".parse::<Notation>(), Ok(Notation::Postfix));
        assert!("outfix".parse::<Notation>().is_err());
    }
}
