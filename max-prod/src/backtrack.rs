use im::{HashSet, Vector};
use num_bigint_dig::BigInt;
use num_traits::{One, Zero};

/// A partial choice: one index per array visited so far.
#[derive(Debug, Clone)]
struct Pick {
    indices: Vector<usize>,
    used: HashSet<usize>,
    product: BigInt,
}

impl Pick {
    fn empty() -> Self {
        Self {
            indices: Vector::new(),
            used: HashSet::new(),
            product: BigInt::one(),
        }
    }

    fn depth(&self) -> usize {
        self.indices.len()
    }

    fn fits(&self, idx: usize) -> bool {
        !self.used.contains(&idx)
    }

    fn take(&self, idx: usize, value: i64) -> Self {
        debug_assert!(self.fits(idx));
        let mut indices = self.indices.clone();
        indices.push_back(idx);
        Self {
            indices,
            used: self.used.update(idx),
            product: &self.product * BigInt::from(value),
        }
    }
}

fn visit(arrays: &[Vec<i64>], pick: &Pick, on_complete: &mut impl FnMut(&Pick)) {
    let depth = pick.depth();
    if depth == arrays.len() {
        on_complete(pick);
        return;
    }
    for (idx, &value) in arrays[depth].iter().enumerate() {
        if pick.fits(idx) {
            visit(arrays, &pick.take(idx, value), on_complete);
        }
    }
}

/// Best product together with the indices producing it. On ties the
/// lexicographically smallest index tuple is kept.
pub fn best_pick(arrays: &[Vec<i64>]) -> Option<(Vec<usize>, BigInt)> {
    if arrays.is_empty() {
        return None;
    }
    let mut best: Option<Pick> = None;
    visit(arrays, &Pick::empty(), &mut |pick| {
        if best.as_ref().map_or(true, |best| pick.product > best.product) {
            best = Some(pick.clone());
        }
    });
    best.map(|pick| (pick.indices.into_iter().collect(), pick.product))
}

pub fn max_product(arrays: &[Vec<i64>]) -> Option<BigInt> {
    best_pick(arrays).map(|(_, product)| product)
}

pub fn sum_of_products(arrays: &[Vec<i64>]) -> BigInt {
    if arrays.is_empty() {
        return BigInt::zero();
    }
    let mut sum = BigInt::zero();
    visit(arrays, &Pick::empty(), &mut |pick| sum += &pick.product);
    sum
}
