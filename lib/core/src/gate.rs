//! The polymorphic gate strategy (§4.3): shared constant-folding table over a
//! payload `Sym`, instantiated once as a constant evaluator and once as a
//! Tseitin CNF emitter.

use crate::builder::CnfBuilder;
use crate::symbol::{Bit, Symbol};
use crate::tseitin;

pub trait GateStrategy {
    type Sym: Copy + Eq;

    fn zero(&self) -> Self::Sym;
    fn one(&self) -> Self::Sym;
    fn is_zero(&self, s: Self::Sym) -> bool;
    fn is_one(&self, s: Self::Sym) -> bool;

    fn is_constant(&self, s: Self::Sym) -> bool {
        self.is_zero(s) || self.is_one(s)
    }

    /// Delegated branch of `wire_and` for two non-constant operands.
    fn raw_and(&mut self, x: Self::Sym, y: Self::Sym) -> Self::Sym;
    /// Delegated branch of `wire_or` for two non-constant operands.
    fn raw_or(&mut self, x: Self::Sym, y: Self::Sym) -> Self::Sym;
    /// Delegated branch of `wire_not` for a non-constant operand.
    fn raw_not(&mut self, x: Self::Sym) -> Self::Sym;

    fn wire_and(&mut self, x: Self::Sym, y: Self::Sym) -> Self::Sym {
        if self.is_zero(x) || self.is_zero(y) {
            self.zero()
        } else if self.is_one(x) {
            y
        } else if self.is_one(y) {
            x
        } else {
            self.raw_and(x, y)
        }
    }

    fn wire_or(&mut self, x: Self::Sym, y: Self::Sym) -> Self::Sym {
        if self.is_one(x) || self.is_one(y) {
            self.one()
        } else if self.is_zero(x) {
            y
        } else if self.is_zero(y) {
            x
        } else {
            self.raw_or(x, y)
        }
    }

    fn wire_not(&mut self, x: Self::Sym) -> Self::Sym {
        if self.is_zero(x) {
            self.one()
        } else if self.is_one(x) {
            self.zero()
        } else {
            self.raw_not(x)
        }
    }
}

/// Evaluates gates directly on known Bits. Every payload this strategy ever
/// sees is constant, so `raw_and`/`raw_or`/`raw_not` are unreachable: reaching
/// them means a caller handed a non-constant bit to the constant evaluator,
/// an internal contract violation (`FoldPreconditionViolated`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstEval;

impl GateStrategy for ConstEval {
    type Sym = Bit;

    fn zero(&self) -> Bit {
        Bit::Zero
    }

    fn one(&self) -> Bit {
        Bit::One
    }

    fn is_zero(&self, s: Bit) -> bool {
        s == Bit::Zero
    }

    fn is_one(&self, s: Bit) -> bool {
        s == Bit::One
    }

    fn raw_and(&mut self, _x: Bit, _y: Bit) -> Bit {
        unreachable!("FoldPreconditionViolated: raw_and invoked on two non-constant Bits")
    }

    fn raw_or(&mut self, _x: Bit, _y: Bit) -> Bit {
        unreachable!("FoldPreconditionViolated: raw_or invoked on two non-constant Bits")
    }

    fn raw_not(&mut self, _x: Bit) -> Bit {
        unreachable!("FoldPreconditionViolated: raw_not invoked on a non-constant Bit")
    }
}

/// Emits Tseitin clauses into a borrowed [`CnfBuilder`]. `wire_not` never
/// touches the builder: negation is always a sign flip on the literal.
pub struct TseitinGate<'a> {
    pub builder: &'a mut CnfBuilder,
}

impl<'a> TseitinGate<'a> {
    pub fn new(builder: &'a mut CnfBuilder) -> Self {
        TseitinGate { builder }
    }

    fn as_var(s: Symbol) -> crate::lit::Lit {
        match s {
            Symbol::Var(lit) => lit,
            Symbol::Const(_) => {
                unreachable!("FoldPreconditionViolated: Tseitin gate reached with a constant operand")
            }
        }
    }

    /// Forces `x` to equal `v`. If `x` is already the opposite constant, the
    /// empty clause is appended instead of raising an error, guaranteeing the
    /// resulting CNF is UNSAT while keeping this operation total.
    pub fn expect(&mut self, x: Symbol, v: Bit) -> Symbol {
        match x {
            Symbol::Const(b) if b == v => {}
            Symbol::Const(_) => self.builder.add_clauses([tseitin::empty_clause()]),
            Symbol::Var(lit) => {
                let asserted = if v == Bit::One { lit } else { -lit };
                self.builder.add_clauses([tseitin::unit_clause(asserted)]);
            }
        }
        Symbol::Const(v)
    }
}

impl<'a> GateStrategy for TseitinGate<'a> {
    type Sym = Symbol;

    fn zero(&self) -> Symbol {
        Symbol::ZERO
    }

    fn one(&self) -> Symbol {
        Symbol::ONE
    }

    fn is_zero(&self, s: Symbol) -> bool {
        s == Symbol::ZERO
    }

    fn is_one(&self, s: Symbol) -> bool {
        s == Symbol::ONE
    }

    fn raw_and(&mut self, x: Symbol, y: Symbol) -> Symbol {
        let (x, y) = (Self::as_var(x), Self::as_var(y));
        Symbol::Var(self.builder.from_tseitin(|z| tseitin::and_clauses(x, y, z)))
    }

    fn raw_or(&mut self, x: Symbol, y: Symbol) -> Symbol {
        let (x, y) = (Self::as_var(x), Self::as_var(y));
        Symbol::Var(self.builder.from_tseitin(|z| tseitin::or_clauses(x, y, z)))
    }

    fn raw_not(&mut self, x: Symbol) -> Symbol {
        Symbol::Var(-Self::as_var(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_and_folds_zero_without_touching_builder() {
        let mut builder = CnfBuilder::new();
        let before = builder.next_variable();
        let mut gate = TseitinGate::new(&mut builder);
        let result = gate.wire_and(Symbol::ZERO, Symbol::Var(before));
        assert_eq!(result, Symbol::ZERO);
        assert_eq!(builder.build().number_of_variables, 1);
    }

    #[test]
    fn wire_not_is_a_sign_flip() {
        let mut builder = CnfBuilder::new();
        let v = builder.next_variable();
        let mut gate = TseitinGate::new(&mut builder);
        let result = gate.wire_not(Symbol::Var(v));
        assert_eq!(result, Symbol::Var(-v));
        assert_eq!(builder.build().number_of_variables, 1);
    }

    #[test]
    fn const_eval_folds_without_panicking() {
        let mut ce = ConstEval;
        assert_eq!(ce.wire_and(Bit::Zero, Bit::One), Bit::Zero);
        assert_eq!(ce.wire_or(Bit::Zero, Bit::One), Bit::One);
        assert_eq!(ce.wire_not(Bit::One), Bit::Zero);
    }
}
