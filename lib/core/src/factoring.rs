//! Factoring composition (§4.7): multiply the two factor bit-vectors, assert
//! their product equals N, and package the result as a [`FactoringInstance`].

use log::debug;
use num_bigint::BigUint;

use crate::builder::CnfBuilder;
use crate::cnf::Cnf;
use crate::gate::TseitinGate;
use crate::karatsuba::{self, karatsuba_multiply_with};
use crate::lit::Lit;
use crate::nbit::NBitCircuit;
use crate::symbol::{Bit, Symbol};

/// Optional knobs that shaped how a [`FactoringInstance`] was generated.
/// Carried alongside the instance purely for provenance (e.g. DIMACS
/// comments); it never affects the CNF's shape beyond `min_len`.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
    pub min_len: Option<usize>,
}

/// `{N, factor_1_vars, factor_2_vars, cnf, generator_config}`.
#[derive(Debug, Clone)]
pub struct FactoringInstance {
    pub n: BigUint,
    pub factor_1_vars: Vec<Lit>,
    pub factor_2_vars: Vec<Lit>,
    pub cnf: Cnf,
    pub generator_config: Option<GeneratorConfig>,
}

/// Encodes `factorize(N)` with the default Karatsuba threshold.
pub fn factorize(n: &BigUint) -> FactoringInstance {
    factorize_with(n, karatsuba::MIN_LEN, None)
}

/// Encodes `factorize(N)` with an explicit Karatsuba threshold and optional
/// generator provenance.
pub fn factorize_with(n: &BigUint, min_len: usize, generator_config: Option<GeneratorConfig>) -> FactoringInstance {
    assert!(*n >= BigUint::from(2u32), "N must be at least 2");

    let number_bits = bits_msb(n);
    let bit_len = number_bits.len();
    let factor_1_len = (bit_len + 1) / 2;
    let factor_2_len = bit_len - 1;

    debug!(
        "factorizing N with {} bits: factor_1 gets {} bits, factor_2 gets {} bits",
        bit_len, factor_1_len, factor_2_len
    );

    let mut builder = CnfBuilder::new();
    let factor_1_vars = builder.next_variables(factor_1_len);
    let factor_2_vars = builder.next_variables(factor_2_len);

    let factor_1: Vec<Symbol> = factor_1_vars.iter().map(|&lit| Symbol::Var(lit)).collect();
    let factor_2: Vec<Symbol> = factor_2_vars.iter().map(|&lit| Symbol::Var(lit)).collect();
    let number_bits: Vec<Symbol> = number_bits
        .into_iter()
        .map(|bit| Symbol::Const(Bit::from_bool(bit)))
        .collect();

    let mut gate = TseitinGate::new(&mut builder);
    let product = karatsuba_multiply_with(&mut gate, &factor_1, &factor_2, min_len);
    let eq = gate.n_bit_equality(&product, &number_bits);
    gate.expect(eq, Bit::One);

    let cnf = builder.build();
    FactoringInstance {
        n: n.clone(),
        factor_1_vars,
        factor_2_vars,
        cnf,
        generator_config,
    }
}

/// The msb-first binary expansion of `n` (no leading zero bit).
fn bits_msb(n: &BigUint) -> Vec<bool> {
    n.to_str_radix(2).chars().map(|c| c == '1').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_lengths_match_data_model() {
        let instance = factorize(&BigUint::from(15u32));
        // |bin(15)| = 4
        assert_eq!(instance.factor_1_vars.len(), 2); // ceil(4/2)
        assert_eq!(instance.factor_2_vars.len(), 3); // 4 - 1
    }

    #[test]
    fn variable_ranges_are_disjoint_and_in_bounds() {
        let instance = factorize(&BigUint::from(1675u32 * 1585u32));
        let max_var = instance.cnf.number_of_variables;
        for &lit in instance.factor_1_vars.iter().chain(instance.factor_2_vars.iter()) {
            assert!(lit.var() as usize <= max_var);
        }
        let factor_1_set: std::collections::HashSet<_> = instance.factor_1_vars.iter().map(|l| l.var()).collect();
        for &lit in &instance.factor_2_vars {
            assert!(!factor_1_set.contains(&lit.var()));
        }
    }

    #[test]
    fn determinism_modulo_clause_set_order() {
        let a = factorize(&BigUint::from(91u32));
        let b = factorize(&BigUint::from(91u32));
        assert_eq!(a.cnf.number_of_variables, b.cnf.number_of_variables);
        assert_eq!(a.cnf.clauses, b.cnf.clauses);
    }

    #[test]
    fn clause_hygiene_no_tautologies_survive() {
        let instance = factorize(&BigUint::from(35u32));
        for clause in instance.cnf.iter() {
            assert!(!clause.is_tautology());
        }
    }
}
