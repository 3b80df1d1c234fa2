use crate::error::MapError;
use crate::generic::{map::MapNode, Slab, TreeMap};
use crate::generic::slab::Index;
use compare::Compare;
use std::collections::BTreeMap;
use std::fmt;

/// The contract between an ordered map and the application storing data in it.
///
/// Keys cross this boundary as `Option`s: an absent key is rejected with
/// [`MapError::InvalidKey`] before anything is read or written. A key which is simply not in
/// the map is not an error, it yields `Ok(None)`.
///
/// Enumerations are in ascending key order.
pub trait OrderedMap<K, V> {
	/// Returns the value stored under `key`, if any.
	fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError>;

	/// Stores `value` under `key`, returning the value it replaces, if any.
	fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError>;

	/// Removes `key`, returning the value it held, if any.
	fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError>;

	/// Number of entries.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn keys(&self) -> Box<dyn Iterator<Item=&K> + '_>;

	fn values(&self) -> Box<dyn Iterator<Item=&V> + '_>;

	fn entries(&self) -> Box<dyn Iterator<Item=(&K, &V)> + '_>;

	/// Renders the whole map as `{(k1, v1),(k2, v2),...}`.
	fn render(&self) -> String
	where
		K: fmt::Display,
		V: fmt::Display,
	{
		let mut out = String::from("{");
		for (i, (key, value)) in self.entries().enumerate() {
			if i > 0 {
				out.push(',');
			}
			out.push_str(&format!("({}, {})", key, value));
		}
		out.push('}');
		out
	}
}

impl<K, V, F: Compare<K>, I: Index, C: Slab<MapNode<K, V, I>, Index=I>> OrderedMap<K, V> for TreeMap<K, V, F, I, C> {
	#[inline]
	fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(TreeMap::get(self, key))
	}

	#[inline]
	fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(self.insert(key, value))
	}

	#[inline]
	fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(TreeMap::remove(self, key))
	}

	#[inline]
	fn len(&self) -> usize {
		TreeMap::len(self)
	}

	#[inline]
	fn keys(&self) -> Box<dyn Iterator<Item=&K> + '_> {
		Box::new(TreeMap::keys(self))
	}

	#[inline]
	fn values(&self) -> Box<dyn Iterator<Item=&V> + '_> {
		Box::new(TreeMap::values(self))
	}

	#[inline]
	fn entries(&self) -> Box<dyn Iterator<Item=(&K, &V)> + '_> {
		Box::new(self.iter())
	}

	#[inline]
	fn render(&self) -> String
	where
		K: fmt::Display,
		V: fmt::Display,
	{
		self.to_string()
	}
}

/// The standard library's B-tree, ordered by `K`'s [`Ord`] implementation.
impl<K: Ord, V> OrderedMap<K, V> for BTreeMap<K, V> {
	#[inline]
	fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(BTreeMap::get(self, key))
	}

	#[inline]
	fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(self.insert(key, value))
	}

	#[inline]
	fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError> {
		let key = key.ok_or(MapError::InvalidKey)?;
		Ok(BTreeMap::remove(self, key))
	}

	#[inline]
	fn len(&self) -> usize {
		BTreeMap::len(self)
	}

	#[inline]
	fn keys(&self) -> Box<dyn Iterator<Item=&K> + '_> {
		Box::new(BTreeMap::keys(self))
	}

	#[inline]
	fn values(&self) -> Box<dyn Iterator<Item=&V> + '_> {
		Box::new(BTreeMap::values(self))
	}

	#[inline]
	fn entries(&self) -> Box<dyn Iterator<Item=(&K, &V)> + '_> {
		Box::new(self.iter())
	}
}
