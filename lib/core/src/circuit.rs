//! The simple-circuit strategy (§4.4): half/full adders, equality, and xor —
//! built solely from gate ops, writing no clauses of their own.

use crate::gate::{ConstEval, GateStrategy, TseitinGate};
use crate::symbol::Symbol;
use crate::tseitin;

/// `xor` is required (not a default method) because the Tseitin instantiation
/// overrides the generic AND/OR/NOT composition with a direct, smaller
/// Tseitin XOR gate whenever both operands are variables.
pub trait SimpleCircuit: GateStrategy {
    fn xor(&mut self, a: Self::Sym, b: Self::Sym) -> Self::Sym;

    fn equality(&mut self, a: Self::Sym, b: Self::Sym) -> Self::Sym {
        let both_true = self.wire_and(a, b);
        let na = self.wire_not(a);
        let nb = self.wire_not(b);
        let both_false = self.wire_and(na, nb);
        self.wire_or(both_true, both_false)
    }

    fn half_adder(&mut self, a: Self::Sym, b: Self::Sym) -> (Self::Sym, Self::Sym) {
        let sum = self.xor(a, b);
        let carry = self.wire_and(a, b);
        (sum, carry)
    }

    fn full_adder(&mut self, a: Self::Sym, b: Self::Sym, c: Self::Sym) -> (Self::Sym, Self::Sym) {
        let (s1, c1) = self.half_adder(a, b);
        let (sum, c2) = self.half_adder(s1, c);
        let carry = self.wire_or(c1, c2);
        (sum, carry)
    }
}

/// `(a ∧ ¬b) ∨ (¬a ∧ b)`, the generic composition shared by both
/// instantiations whenever at least one operand is constant.
pub fn compose_xor<G: GateStrategy + ?Sized>(g: &mut G, a: G::Sym, b: G::Sym) -> G::Sym {
    let na = g.wire_not(a);
    let nb = g.wire_not(b);
    let t1 = g.wire_and(a, nb);
    let t2 = g.wire_and(na, b);
    g.wire_or(t1, t2)
}

impl SimpleCircuit for ConstEval {
    fn xor(&mut self, a: Self::Sym, b: Self::Sym) -> Self::Sym {
        compose_xor(self, a, b)
    }
}

impl<'a> SimpleCircuit for TseitinGate<'a> {
    fn xor(&mut self, a: Symbol, b: Symbol) -> Symbol {
        match (a, b) {
            (Symbol::Var(x), Symbol::Var(y)) => {
                Symbol::Var(self.builder.from_tseitin(|z| tseitin::xor_clauses(x, y, z)))
            }
            _ => compose_xor(self, a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CnfBuilder;
    use crate::symbol::Bit;

    #[test]
    fn const_eval_half_adder() {
        let mut ce = ConstEval;
        assert_eq!(ce.half_adder(Bit::One, Bit::One), (Bit::Zero, Bit::One));
        assert_eq!(ce.half_adder(Bit::One, Bit::Zero), (Bit::One, Bit::Zero));
    }

    #[test]
    fn const_eval_full_adder() {
        let mut ce = ConstEval;
        assert_eq!(ce.full_adder(Bit::One, Bit::One, Bit::One), (Bit::One, Bit::One));
        assert_eq!(ce.full_adder(Bit::Zero, Bit::Zero, Bit::Zero), (Bit::Zero, Bit::Zero));
    }

    #[test]
    fn const_eval_equality() {
        let mut ce = ConstEval;
        assert_eq!(ce.equality(Bit::One, Bit::One), Bit::One);
        assert_eq!(ce.equality(Bit::One, Bit::Zero), Bit::Zero);
    }

    #[test]
    fn tseitin_xor_of_two_variables_uses_direct_gate() {
        let mut builder = CnfBuilder::new();
        let a = builder.next_variable();
        let b = builder.next_variable();
        let mut gate = TseitinGate::new(&mut builder);
        let z = gate.xor(Symbol::Var(a), Symbol::Var(b));
        assert!(matches!(z, Symbol::Var(_)));
        let cnf = builder.build();
        // direct Tseitin XOR is exactly 4 clauses, one fresh variable
        assert_eq!(cnf.number_of_variables, 3);
        assert_eq!(cnf.clauses.len(), 4);
    }
}
