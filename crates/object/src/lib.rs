//! Prototype-chained objects and visible-key iteration.
//!
//! # Purpose
//!
//! - Seam: [`PropertyGraph`] exposes own keys, live ownership checks and delegate links.
//! - Storage: [`ObjectHeap`] is an insertion-ordered object store implementing the seam.
//! - Iteration: [`PropIter`] enumerates every key visible through a delegation chain.
//!
//! # Invariants
//!
//! - Delegation chains are acyclic.
//!   - Enforced in: [`ObjectHeap::set_prototype`], heap deserialization.
//!   - Tested by: `heap::tests::set_prototype_rejects_cycles`
//!   - Failure symptom: [`PropIter`] never terminates.
//! - Each visible key is yielded once, by the nearest object that owns it.
//!   - Enforced in: [`PropIter::next_key`] (seen set plus live ownership check).
//!   - Tested by: `tests/prop_iter.rs`
//!   - Failure symptom: shadowed keys reported twice or deleted keys resurrected.

mod error;
mod graph;
mod heap;
mod key;
mod prop_iter;
mod value;

pub use error::ObjectError;
pub use graph::PropertyGraph;
pub use heap::{Object, ObjectHeap, ObjectId};
pub use key::PropertyKey;
pub use prop_iter::{Keys, PropIter};
pub use value::Value;
