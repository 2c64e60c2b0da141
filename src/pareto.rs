use ordered_float::OrderedFloat;

use crate::error::{Error, Result};

pub type F64 = OrderedFloat<f64>;

/// Indices of the score tuples not dominated by any other tuple.
///
/// Every attribute is oriented larger-is-better; negate anything meant to be
/// minimized before calling. Tuple A dominates tuple B when A >= B in every
/// attribute and A > B in at least one, so identical tuples never dominate
/// each other and exact duplicates all survive. Callers wanting a single
/// representative de-duplicate separately.
///
/// O(n^2 * k); candidate sets here stay within a few dozen entries.
pub fn pareto_indices(scores: &[Vec<F64>]) -> Result<Vec<usize>> {
    let arity = match scores.first() {
        Some(first) => first.len(),
        None => return Ok(Vec::new()),
    };
    for tuple in scores {
        if tuple.len() != arity {
            return Err(Error::ArityMismatch {
                expected: arity,
                got: tuple.len(),
            });
        }
    }
    Ok((0..scores.len())
        .filter(|&candidate| {
            !scores
                .iter()
                .any(|other| dominates(other, &scores[candidate]))
        })
        .collect())
}

fn dominates(a: &[F64], b: &[F64]) -> bool {
    a.iter().zip(b).all(|(x, y)| x >= y) && a.iter().zip(b).any(|(x, y)| x > y)
}
