/*!
Parsers, from a line of characters to a [formula](crate::structures::formula).

There is one parser for each [notation](crate::structures::notation::Notation):
- [prefix], e.g. `>A-B`.
- [infix], e.g. `(A>-B)`.
- [postfix], e.g. `A B- >`.

Each parser reads characters up to and including the next line end, and is a small state machine over the characters read.
The parsers share the [composite](crate::structures::formula::composite) structure used to build a formula, and the [errors](crate::types::err::ParseError) they may return, but are otherwise independent.

# The line protocol

A call to [parse_line] returns:
- `Ok(Some(formula))`, if the line contains a formula.
- `Ok(None)`, if the line contains no formula, as it is empty or contains only whitespace, or if there are no more lines.
  Callers take this to mark the end of a sequence of formulas.
- An error, if the line is malformed, or the input ends part way through a line.

An error raised on some character of a line (an illegal character, or an unexpected or redundant element) discards the remainder of the line, so a subsequent call reads the next line.

```rust
# use prop_proof::parse::parse_line;
# use prop_proof::structures::notation::Notation;
# use prop_proof::types::err::ParseError;
let mut input = "(A>B\n(A>?)\n-A\n".as_bytes();

assert_eq!(parse_line(Notation::Infix, &mut input), Err(ParseError::IncompleteFormula));
assert_eq!(
    parse_line(Notation::Infix, &mut input),
    Err(ParseError::IllegalCharacter { character: '?', position: 4 })
);
assert!(parse_line(Notation::Infix, &mut input).is_ok_and(|formula| formula.is_some()));
assert_eq!(parse_line(Notation::Infix, &mut input), Ok(None));
```
*/

pub mod infix;
pub mod postfix;
pub mod prefix;
mod tokens;

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{formula::Formula, notation::Notation},
    types::err::ParseError,
};

use tokens::Tokens;

/// Reads a line from `reader` as a formula written in `notation`.
pub fn parse_line(
    notation: Notation,
    reader: &mut impl BufRead,
) -> Result<Option<Formula>, ParseError> {
    let mut tokens = Tokens::new(reader);

    let result = match notation {
        Notation::Prefix => prefix::parse(&mut tokens),
        Notation::Infix => infix::parse(&mut tokens),
        Notation::Postfix => postfix::parse(&mut tokens),
    };

    match &result {
        Ok(Some(formula)) => log::trace!(target: targets::PARSE, "Read {notation} formula: {formula}"),

        Ok(None) => log::trace!(target: targets::PARSE, "No formula"),

        Err(e) => {
            log::debug!(target: targets::PARSE, "Failed to read {notation} formula: {e}");
            if e.is_detailed() {
                tokens.skip_line()?;
            }
        }
    }

    result
}
