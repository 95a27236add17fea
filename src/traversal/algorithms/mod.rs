//! Ubiquitous algorithms for trees.
//!
//! This includes:
//! - Leaf collection
//! - *More to come*

mod collect_leaves;
pub use collect_leaves::*;
