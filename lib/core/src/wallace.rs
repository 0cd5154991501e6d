//! Wallace-tree base multiplier (§4.6.1).

use std::collections::BTreeMap;

use crate::circuit::SimpleCircuit;
use crate::nbit::NBitCircuit;

/// Multiplies two msb-first bit-vectors via weighted partial products reduced
/// in a Wallace tree, then a final ascending-weight carry-propagation sweep.
pub fn wallace_multiply<G: SimpleCircuit>(g: &mut G, a: &[G::Sym], b: &[G::Sym]) -> Vec<G::Sym> {
    let a = g.normalize(a);
    let b = g.normalize(b);
    if a.is_empty() || b.is_empty() {
        return vec![g.zero()];
    }

    let len_a = a.len();
    let len_b = b.len();

    // Leftmost bit of each operand carries weight equal to the operand's
    // length; weights descend to 1 at the rightmost (lsb) bit.
    let mut buckets: BTreeMap<usize, Vec<G::Sym>> = BTreeMap::new();
    for (i, &x) in a.iter().enumerate() {
        let w_i = len_a - i;
        for (j, &y) in b.iter().enumerate() {
            let w_j = len_b - j;
            let product = g.wire_and(x, y);
            buckets.entry(w_i + w_j).or_default().push(product);
        }
    }

    while buckets.values().any(|symbols| symbols.len() > 2) {
        let mut next: BTreeMap<usize, Vec<G::Sym>> = BTreeMap::new();
        for (&w, symbols) in &buckets {
            match symbols.len() {
                0 => {}
                1 => next.entry(w).or_default().push(symbols[0]),
                2 => {
                    let (sum, carry) = g.half_adder(symbols[0], symbols[1]);
                    next.entry(w).or_default().push(sum);
                    next.entry(w + 1).or_default().push(carry);
                }
                _ => {
                    let (sum, carry) = g.full_adder(symbols[0], symbols[1], symbols[2]);
                    next.entry(w).or_default().push(sum);
                    next.entry(w + 1).or_default().push(carry);
                    next.entry(w).or_default().extend_from_slice(&symbols[3..]);
                }
            }
        }
        buckets = next;
    }

    let mut lsb_first: Vec<G::Sym> = Vec::new();
    let mut carry_in: Option<G::Sym> = None;
    for (_w, symbols) in buckets {
        let mut items = symbols;
        if let Some(carry) = carry_in.take() {
            items.push(carry);
        }
        let (sum, carry) = match items.len() {
            0 => (g.zero(), None),
            1 => (items[0], None),
            2 => {
                let (sum, carry) = g.half_adder(items[0], items[1]);
                (sum, Some(carry))
            }
            3 => {
                let (sum, carry) = g.full_adder(items[0], items[1], items[2]);
                (sum, Some(carry))
            }
            _ => unreachable!("wallace reduction left a bucket with more than 3 entries"),
        };
        lsb_first.push(sum);
        carry_in = carry;
    }
    if let Some(carry) = carry_in {
        lsb_first.push(carry);
    }
    lsb_first.reverse();
    lsb_first
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::gate::ConstEval;
    use crate::symbol::Bit;

    fn bits(n: u32, len: usize) -> Vec<Bit> {
        (0..len)
            .rev()
            .map(|i| Bit::from_bool((n >> i) & 1 == 1))
            .collect()
    }

    fn value(bits: &[Bit]) -> u64 {
        bits.iter().fold(0u64, |acc, &b| (acc << 1) | b.to_bool() as u64)
    }

    #[test]
    fn wallace_matches_integer_multiplication() {
        let mut ce = ConstEval;
        for x in 0..32u32 {
            for y in 0..32u32 {
                let product = wallace_multiply(&mut ce, &bits(x, 5), &bits(y, 5));
                assert_eq!(value(&product), x as u64 * y as u64, "{x} * {y}");
            }
        }
    }

    #[test]
    fn wallace_of_zero_operand_is_zero() {
        let mut ce = ConstEval;
        let product = wallace_multiply(&mut ce, &bits(0, 4), &bits(9, 4));
        assert_eq!(value(&product), 0);
    }

    // spec.md §8, property 4 (Wallace half): wallace(x, y) = x * y.
    #[quickcheck]
    fn prop_wallace_matches_multiplication(x: u16, y: u16) -> bool {
        let mut ce = ConstEval;
        let product = wallace_multiply(&mut ce, &bits(x as u32, 16), &bits(y as u32, 16));
        value(&product) == x as u64 * y as u64
    }
}
