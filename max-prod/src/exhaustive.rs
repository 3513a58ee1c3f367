//! Straight enumeration: every index tuple of the cartesian product, keeping
//! only those whose indices are pairwise distinct.

use itertools::Itertools;
use num_bigint_dig::BigInt;
use num_traits::{One, Zero};

fn product_at(arrays: &[Vec<i64>], indices: &[usize]) -> BigInt {
    arrays
        .iter()
        .zip(indices)
        .fold(BigInt::one(), |acc, (array, &idx)| acc * BigInt::from(array[idx]))
}

fn admissible_products(arrays: &[Vec<i64>]) -> impl Iterator<Item = BigInt> + '_ {
    // with no arrays there is nothing to pick from, not one empty pick
    let ranges = if arrays.is_empty() {
        Vec::new()
    } else {
        arrays.iter().map(|array| 0..array.len()).collect_vec()
    };
    ranges
        .into_iter()
        .multi_cartesian_product()
        .filter(|indices| indices.iter().all_unique())
        .map(move |indices| product_at(arrays, &indices))
}

pub fn max_product(arrays: &[Vec<i64>]) -> Option<BigInt> {
    if arrays.is_empty() {
        return None;
    }
    admissible_products(arrays).max()
}

pub fn sum_of_products(arrays: &[Vec<i64>]) -> BigInt {
    if arrays.is_empty() {
        return BigInt::zero();
    }
    admissible_products(arrays).fold(BigInt::zero(), |acc, product| acc + product)
}
