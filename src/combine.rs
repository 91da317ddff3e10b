//! Cross product of per-token readings

use crate::classify::{Component, ComponentSet};
use smallvec::SmallVec;

/// One reading per token, in token order
pub type Combination = SmallVec<[Component; 3]>;

/// Every way of picking exactly one component from each set.
///
/// The first token varies slowest, so output order follows the order of each
/// set. Any empty set makes the product empty.
pub fn combinations(sets: &[ComponentSet]) -> Vec<Combination> {
    let mut product: Vec<Combination> = vec![Combination::new()];

    for set in sets {
        let mut next = Vec::with_capacity(product.len() * set.len());
        for prefix in &product {
            for component in set {
                let mut combination = prefix.clone();
                combination.push(*component);
                next.push(combination);
            }
        }
        product = next;
    }

    product
}
