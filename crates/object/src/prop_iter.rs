//! Visible-key enumeration along a delegation chain.
//!
//! [`PropIter`] walks from an object to its delegates, yielding each key the
//! first time an object in the chain owns it. Nearer objects shadow farther ones.
//! Each object's keys are snapshotted when the cursor reaches it, and every key is
//! re-checked against the live graph before it is yielded, so keys deleted after
//! the snapshot are skipped. Keys added after the snapshot may or may not appear.
//!
//! Enumerability is not modelled: every own key counts. Order is per-object
//! insertion order, nearest object first.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use rustc_hash::FxHashSet as HashSet;

use crate::graph::PropertyGraph;
use crate::key::PropertyKey;

/// Pull cursor over the keys visible on an object.
///
/// The graph is passed to every [`PropIter::next_key`] call, so callers may mutate
/// it between calls. A cyclic delegation chain makes the cursor loop forever.
pub struct PropIter<G: PropertyGraph> {
	state: State<G::Handle>,
	seen: HashSet<PropertyKey>,
}

enum State<H> {
	Active { current: H, frontier: VecDeque<PropertyKey> },
	Exhausted,
}

impl<G: PropertyGraph> PropIter<G> {
	/// Starts at `initial`, snapshotting its own keys now.
	pub fn new(graph: &G, initial: G::Handle) -> Self {
		Self {
			state: State::Active {
				current: initial,
				frontier: graph.own_keys(initial).into(),
			},
			seen: HashSet::default(),
		}
	}

	/// Returns the next visible key, or `None` once the chain is exhausted.
	pub fn next_key(&mut self, graph: &G) -> Option<PropertyKey> {
		loop {
			let State::Active { current, frontier } = &mut self.state else {
				return None;
			};

			while let Some(key) = frontier.pop_front() {
				if graph.has_own_property(*current, &key) && !self.seen.contains(&key) {
					self.seen.insert(key.clone());
					return Some(key);
				}
			}

			match graph.prototype_of(*current) {
				Some(delegate) => {
					tracing::trace!(from = ?*current, to = ?delegate, yielded = self.seen.len(), "advancing to delegate");
					*frontier = graph.own_keys(delegate).into();
					*current = delegate;
				}
				None => {
					self.state = State::Exhausted;
					return None;
				}
			}
		}
	}

	/// Returns true once the whole chain has been walked.
	pub fn is_exhausted(&self) -> bool {
		matches!(self.state, State::Exhausted)
	}

	/// Binds the cursor to `graph` as an [`Iterator`].
	pub fn with_graph(self, graph: &G) -> Keys<'_, G> {
		Keys { graph, iter: self }
	}
}

/// [`PropIter`] bound to a borrowed graph.
pub struct Keys<'g, G: PropertyGraph> {
	graph: &'g G,
	iter: PropIter<G>,
}

impl<G: PropertyGraph> Iterator for Keys<'_, G> {
	type Item = PropertyKey;

	fn next(&mut self) -> Option<PropertyKey> {
		self.iter.next_key(self.graph)
	}
}

impl<G: PropertyGraph> FusedIterator for Keys<'_, G> {}
