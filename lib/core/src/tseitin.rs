//! Pure clause-set generators for the Tseitin gate equivalences (§4.1).
//!
//! Each function is a total function of three literals; it never inspects
//! whether `x`/`y` are "really" constants — callers (the gate strategy) are
//! responsible for routing constants through constant folding before ever
//! reaching here.

use crate::cnf::clause::Clause;
use crate::lit::Lit;

/// Clauses encoding `z ≡ x ∧ y`.
pub fn and_clauses(x: Lit, y: Lit, z: Lit) -> Vec<Clause> {
    vec![Clause::new([x, -z]), Clause::new([y, -z]), Clause::new([-x, -y, z])]
}

/// Clauses encoding `z ≡ x ∨ y`.
pub fn or_clauses(x: Lit, y: Lit, z: Lit) -> Vec<Clause> {
    vec![Clause::new([-x, z]), Clause::new([-y, z]), Clause::new([x, y, -z])]
}

/// Clauses encoding `z ≡ x ⊕ y`.
pub fn xor_clauses(x: Lit, y: Lit, z: Lit) -> Vec<Clause> {
    vec![
        Clause::new([-x, -y, -z]),
        Clause::new([-x, y, z]),
        Clause::new([x, -y, z]),
        Clause::new([x, y, -z]),
    ]
}

/// Clauses encoding `z ≡ (x = y)`.
pub fn eq_clauses(x: Lit, y: Lit, z: Lit) -> Vec<Clause> {
    vec![
        Clause::new([x, y, z]),
        Clause::new([x, -y, -z]),
        Clause::new([-x, y, -z]),
        Clause::new([-x, -y, z]),
    ]
}

pub fn unit_clause(lit: Lit) -> Clause {
    Clause::unit(lit)
}

pub fn empty_clause() -> Clause {
    Clause::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_gate_matches_scenario_s6() {
        let x = Lit::new(1);
        let y = Lit::new(2);
        let z = Lit::new(3);
        let clauses: std::collections::HashSet<Clause> = and_clauses(x, y, z).into_iter().collect();
        let expected: std::collections::HashSet<Clause> = [
            Clause::from_iter([1, -3]),
            Clause::from_iter([2, -3]),
            Clause::from_iter([-1, -2, 3]),
        ]
        .into_iter()
        .collect();
        assert_eq!(clauses, expected);
    }
}
