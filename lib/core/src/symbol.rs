use std::fmt::{Display, Formatter};

use crate::lit::Lit;

/// A compile-time known Boolean value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    pub fn to_bool(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// A gate payload: either a known constant or a CNF literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    Const(Bit),
    Var(Lit),
}

impl Symbol {
    pub const ZERO: Symbol = Symbol::Const(Bit::Zero);
    pub const ONE: Symbol = Symbol::Const(Bit::One);

    pub fn is_constant(self) -> bool {
        matches!(self, Symbol::Const(_))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Const(bit) => write!(f, "{}", bit),
            Symbol::Var(lit) => write!(f, "{}", lit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_from_bool() {
        assert_eq!(Bit::from_bool(true), Bit::One);
        assert_eq!(Bit::from_bool(false), Bit::Zero);
    }

    #[test]
    fn symbol_is_constant() {
        assert!(Symbol::ZERO.is_constant());
        assert!(Symbol::ONE.is_constant());
        assert!(!Symbol::Var(Lit::new(1)).is_constant());
    }
}
