use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use clause::Clause;

pub mod clause;

/// The conjunction of its clauses, over `number_of_variables` variable ids.
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    pub number_of_variables: usize,
    pub clauses: HashSet<Clause>,
}

impl Cnf {
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Writes this CNF in DIMACS form, with `comments` rendered as `c `-prefixed
    /// lines before the problem line.
    pub fn write_dimacs<W: Write>(&self, mut writer: W, comments: &[String]) -> io::Result<()> {
        for comment in comments {
            writeln!(writer, "c {}", comment)?;
        }
        writeln!(writer, "p cnf {} {}", self.number_of_variables, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(writer, "{}", clause)?;
        }
        Ok(())
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.number_of_variables, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_problem_line() {
        let mut cnf = Cnf::default();
        cnf.number_of_variables = 3;
        cnf.clauses.insert(Clause::from_iter([1, -2]));
        cnf.clauses.insert(Clause::from_iter([2, 3]));

        let mut out = Vec::new();
        cnf.write_dimacs(&mut out, &["hello".to_string()]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("c hello\n"));
        assert!(text.contains("p cnf 3 2\n"));
    }

    #[test]
    fn empty_clause_renders_as_bare_zero() {
        let mut cnf = Cnf::default();
        cnf.clauses.insert(Clause::empty());
        let mut out = Vec::new();
        cnf.write_dimacs(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n0\n"));
    }
}
