use log::debug;

use crate::cnf::clause::Clause;
use crate::cnf::Cnf;
use crate::lit::Lit;

/// Mutable aggregate of a monotonic variable counter and the pending clause
/// set. `build()` consumes it and seals the result into an immutable [`Cnf`].
#[derive(Debug, Default)]
pub struct CnfBuilder {
    counter: usize,
    clauses: std::collections::HashSet<Clause>,
}

impl CnfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_variable(&mut self) -> Lit {
        self.counter += 1;
        Lit::new(self.counter as i32)
    }

    pub fn next_variables(&mut self, n: usize) -> Vec<Lit> {
        (0..n).map(|_| self.next_variable()).collect()
    }

    /// Allocates a fresh variable `z`, hands it to `gate` to produce the
    /// Tseitin clause set for `z ≡ op(inputs...)`, and records those clauses.
    pub fn from_tseitin<F>(&mut self, gate: F) -> Lit
    where
        F: FnOnce(Lit) -> Vec<Clause>,
    {
        let z = self.next_variable();
        let clauses = gate(z);
        self.add_clauses(clauses);
        z
    }

    pub fn add_clauses<I>(&mut self, clauses: I)
    where
        I: IntoIterator<Item = Clause>,
    {
        self.clauses.extend(clauses);
    }

    pub fn build(self) -> Cnf {
        let clauses: std::collections::HashSet<Clause> =
            self.clauses.into_iter().filter(|clause| !clause.is_tautology()).collect();
        debug!(
            "sealing CnfBuilder into Cnf: {} variables, {} clauses",
            self.counter,
            clauses.len()
        );
        Cnf {
            number_of_variables: self.counter,
            clauses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_variable_is_monotonic() {
        let mut builder = CnfBuilder::new();
        let a = builder.next_variable();
        let b = builder.next_variable();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn next_variables_is_ascending() {
        let mut builder = CnfBuilder::new();
        let vars = builder.next_variables(4);
        assert_eq!(vars.iter().map(|l| l.get()).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn build_filters_tautologies() {
        let mut builder = CnfBuilder::new();
        let a = builder.next_variable();
        builder.add_clauses([Clause::from_iter([a.get(), -a.get()])]);
        let cnf = builder.build();
        assert!(cnf.clauses.is_empty());
    }

    #[test]
    fn build_dedups_clauses() {
        let mut builder = CnfBuilder::new();
        builder.add_clauses([Clause::from_iter([1, 2]), Clause::from_iter([2, 1])]);
        let cnf = builder.build();
        assert_eq!(cnf.clauses.len(), 1);
    }

    #[test]
    fn from_tseitin_allocates_and_records_clauses() {
        let mut builder = CnfBuilder::new();
        let x = Lit::new(1);
        let y = Lit::new(2);
        let z = builder.from_tseitin(|z| crate::tseitin::and_clauses(x, y, z));
        assert_eq!(z.get(), 3);
        let cnf = builder.build();
        assert_eq!(cnf.number_of_variables, 3);
        assert_eq!(cnf.clauses.len(), 3);
    }
}
