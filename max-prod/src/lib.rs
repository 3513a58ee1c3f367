//! Expected answers for the "one distinct index per array" test cases: pick
//! one element from every array, no two picks sharing an index, and maximise
//! (or sum over all admissible picks) the product of the chosen elements.

pub mod backtrack;
pub mod exhaustive;

pub use backtrack::{best_pick, max_product, sum_of_products};
