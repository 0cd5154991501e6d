use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::lit::Lit;

/// A disjunction of literals, represented as a set (no duplicate literals).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Clause {
    lits: BTreeSet<Lit>,
}

impl Clause {
    pub fn new<I>(lits: I) -> Self
    where
        I: IntoIterator<Item = Lit>,
    {
        Clause {
            lits: lits.into_iter().collect(),
        }
    }

    pub fn unit(lit: Lit) -> Self {
        Clause::new([lit])
    }

    /// The empty clause: unsatisfiable by definition.
    pub fn empty() -> Self {
        Clause::new([])
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lit> {
        self.lits.iter()
    }

    /// A literal and its negation both present.
    pub fn is_tautology(&self) -> bool {
        self.lits.iter().any(|&lit| self.lits.contains(&-lit))
    }
}

impl<L> FromIterator<L> for Clause
where
    L: Into<Lit>,
{
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Clause::new(iter.into_iter().map_into::<Lit>())
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.lits.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{} 0", self.lits.iter().map(|lit| lit.to_string()).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tautology_detected() {
        let c = Clause::from_iter([1, -2, -1]);
        assert!(c.is_tautology());
    }

    #[test]
    fn non_tautology() {
        let c = Clause::from_iter([1, -2, 3]);
        assert!(!c.is_tautology());
    }

    #[test]
    fn duplicate_literals_collapse() {
        let c = Clause::from_iter([1, 2, 1]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn empty_clause_display() {
        assert_eq!(Clause::empty().to_string(), "0");
    }

    #[test]
    fn unit_clause_display() {
        assert_eq!(Clause::unit(Lit::new(-3)).to_string(), "-3 0");
    }

    #[test]
    fn order_independent_equality() {
        let a = Clause::from_iter([1, 2, 3]);
        let b = Clause::from_iter([3, 1, 2]);
        assert_eq!(a, b);
    }
}
