use crate::generic::{node::Position, slab::Index};
use std::fmt;

/// A key-value pair stored in a [`TreeMap`](crate::generic::TreeMap), aware of the node which
/// holds it.
///
/// The key never changes once the entry is built. The value can be mutated in place.
#[derive(Clone)]
pub struct Entry<K, V, I> {
	key: K,
	value: V,
	/// Node currently holding this entry.
	position: Position<I>,
}

impl<K, V, I: Index> Entry<K, V, I> {
	#[inline]
	pub(crate) fn new(key: K, value: V, position: Position<I>) -> Self {
		Entry { key, value, position }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	/// The position of the node currently holding this entry.
	#[inline]
	pub fn position(&self) -> Position<I> {
		self.position
	}

	#[inline]
	pub(crate) fn relocate(&mut self, position: Position<I>) {
		self.position = position;
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	#[inline]
	pub fn as_pair_mut(&mut self) -> (&K, &mut V) {
		(&self.key, &mut self.value)
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}

	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}
}

impl<K: fmt::Debug, V: fmt::Debug, I: fmt::Debug> fmt::Debug for Entry<K, V, I> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Entry")
			.field("key", &self.key)
			.field("value", &self.value)
			.field("position", &self.position)
			.finish()
	}
}

/// `(key, value)`, the way entries are rendered inside a map.
impl<K: fmt::Display, V: fmt::Display, I> fmt::Display for Entry<K, V, I> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "({}, {})", self.key, self.value)
	}
}
