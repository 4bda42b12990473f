//! The connectives of a formula.

/// Connectives which take one operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negation,
}

/// Connectives which take two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `.`
    Conjunction,

    /// `+`
    Disjunction,

    /// `>`
    Implication,

    /// `=`
    Equivalence,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 1] = [UnaryOperator::Negation];

    /// The character used for the operator, in every notation.
    pub fn symbol(&self) -> char {
        match self {
            Self::Negation => '-',
        }
    }

    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'-' => Some(Self::Negation),
            _ => None,
        }
    }
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Conjunction,
        BinaryOperator::Disjunction,
        BinaryOperator::Implication,
        BinaryOperator::Equivalence,
    ];

    /// The character used for the operator, in every notation.
    pub fn symbol(&self) -> char {
        match self {
            Self::Conjunction => '.',
            Self::Disjunction => '+',
            Self::Implication => '>',
            Self::Equivalence => '=',
        }
    }

    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'.' => Some(Self::Conjunction),
            b'+' => Some(Self::Disjunction),
            b'>' => Some(Self::Implication),
            b'=' => Some(Self::Equivalence),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
