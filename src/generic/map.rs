use crate::error::TreeError;
use crate::generic::{
	node::{Node, Position},
	slab::{Index, OwnedSlab, Slab, SlabView},
	tree::{InOrderElements, LinkedBinaryTree},
};
use compare::{natural, Compare, Natural};
use std::{
	cmp::Ordering,
	fmt,
	iter::{ExactSizeIterator, FromIterator, FusedIterator},
};

mod entry;

pub use entry::*;

/// A node of the tree behind a [`TreeMap`].
pub type MapNode<K, V, I> = Node<Entry<K, V, I>, I>;

/// An ordered map based on an unbalanced binary search tree with sentinel leaves.
///
/// Every entry lives in an internal node of a [`LinkedBinaryTree`]. Below every entry are two
/// children, which are either other entries or sentinels marking that nothing is stored there
/// yet. Keys are ordered by the comparator `F` given at construction, which never changes
/// afterwards: for every entry, the keys on its left compare less and the keys on its right
/// compare greater.
///
/// The tree is not rebalanced. Inserting keys in sorted order degenerates it into a chain, in
/// which case lookups are linear. Searches are iterative, so this never overflows the stack.
///
/// Nodes are stored in a slab (`C`), addressed by indices (`I`). Each [`Entry`] remembers the
/// position of the node holding it, which is updated whenever the entry moves.
///
/// # Example
///
/// ```
/// use bst_store::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.insert("gamma", 3);
/// map.insert("alpha", 1);
/// map.insert("beta", 2);
///
/// assert_eq!(map.get(&"alpha"), Some(&1));
/// assert_eq!(map.insert("beta", 20), Some(2));
/// assert_eq!(map.remove(&"gamma"), Some(3));
/// assert_eq!(map.to_string(), "{(alpha, 1),(beta, 20)}");
///
/// // Two entries, each with two children: 2 * 2 + 1 nodes.
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.node_count(), 5);
/// ```
///
/// A custom ordering is any function comparing two keys:
///
/// ```
/// use bst_store::TreeMap;
///
/// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.extend([(1, "one"), (3, "three"), (2, "two")]);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub struct TreeMap<K, V, F, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> {
	tree: LinkedBinaryTree<Entry<K, V, I>, I, C>,
	/// Total order on keys, fixed for the lifetime of the map.
	cmp: F,
}

/// Unwrap the result of a tree operation the map has already checked.
#[inline]
fn checked<T>(result: Result<T, TreeError>) -> T {
	match result {
		Ok(t) => t,
		Err(e) => panic!("corrupted tree: {}", e),
	}
}

impl<K: Ord, V, I: Index, C: Slab<MapNode<K, V, I>, Index=I> + Default> TreeMap<K, V, Natural<K>, I, C> {
	/// Create a new empty map ordered by `K`'s [`Ord`] implementation, with a new store.
	#[inline]
	pub fn new() -> Self {
		Self::with_comparator(natural())
	}
}

impl<K: Ord, V, I: Index, C: OwnedSlab<MapNode<K, V, I>, Index=I> + Default> TreeMap<K, V, Natural<K>, I, C> {
	/// Create a new empty map ordered by `K`'s [`Ord`] implementation, whose store has room for
	/// `capacity` entries.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		let mut map = Self::new();
		map.reserve(capacity);
		map
	}
}

impl<K: Ord, V, I: Index, C: Slab<MapNode<K, V, I>, Index=I>> TreeMap<K, V, Natural<K>, I, C> {
	/// Create a new empty map ordered by `K`'s [`Ord`] implementation, with a pre-existing store.
	#[inline]
	pub fn new_in(store: C) -> Self {
		Self::with_comparator_in(natural(), store)
	}
}

impl<K, V, F: Compare<K>, I: Index, C: Slab<MapNode<K, V, I>, Index=I> + Default> TreeMap<K, V, F, I, C> {
	/// Create a new empty map ordered by `cmp`, with a new store.
	#[inline]
	pub fn with_comparator(cmp: F) -> Self {
		Self::with_comparator_in(cmp, Default::default())
	}
}

impl<K, V, F: Compare<K>, I: Index, C: Slab<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Create a new empty map ordered by `cmp`, with a pre-existing store.
	#[inline]
	pub fn with_comparator_in(cmp: F, store: C) -> Self {
		TreeMap {
			tree: LinkedBinaryTree::new_in(store),
			cmp,
		}
	}
}

impl<K, V, F, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Returns the number of entries in the map.
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.internal_count()
	}

	/// Returns `true` if the map contains no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of nodes in the tree, sentinels included.
	///
	/// This is always `2 * self.len() + 1`.
	#[inline]
	pub fn node_count(&self) -> usize {
		self.tree.node_count()
	}

	/// Returns the height of the tree, see [`LinkedBinaryTree::height`].
	#[inline]
	pub fn height(&self) -> usize {
		self.tree.height()
	}

	/// The comparator ordering the keys.
	#[inline]
	pub fn comparator(&self) -> &F {
		&self.cmp
	}

	/// The underlying tree, to navigate the map by position.
	#[inline]
	pub fn tree(&self) -> &LinkedBinaryTree<Entry<K, V, I>, I, C> {
		&self.tree
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		self.first_id().and_then(|id| self.entry_in(id)).map(Entry::as_pair)
	}

	/// Returns the last key-value pair in the map.
	/// The key in this pair is the maximum key in the map.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		self.last_id().and_then(|id| self.entry_in(id)).map(Entry::as_pair)
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	#[inline]
	pub fn entries(&self) -> Entries<K, V, I, C> {
		Entries {
			inner: self.tree.inorder_elements(),
			remaining: self.len(),
		}
	}

	/// Gets an iterator over the key-value pairs of the map, sorted by key.
	///
	/// # Example
	///
	/// ```
	/// use bst_store::TreeMap;
	///
	/// let mut map = TreeMap::new();
	/// map.insert(3, "c");
	/// map.insert(2, "b");
	/// map.insert(1, "a");
	///
	/// for (key, value) in map.iter() {
	///     println!("{}: {}", key, value);
	/// }
	///
	/// let (first_key, first_value) = map.iter().next().unwrap();
	/// assert_eq!((*first_key, *first_value), (1, "a"));
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<K, V, I, C> {
		Iter { inner: self.entries() }
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	#[inline]
	pub fn keys(&self) -> Keys<K, V, I, C> {
		Keys { inner: self.entries() }
	}

	/// Gets an iterator over the values of the map, in order by key.
	#[inline]
	pub fn values(&self) -> Values<K, V, I, C> {
		Values { inner: self.entries() }
	}

	#[inline]
	fn entry_in(&self, id: I) -> Option<&Entry<K, V, I>> {
		self.tree.node(id).element()
	}

	/// The leftmost internal node.
	fn first_id(&self) -> Option<I> {
		let mut id = self.tree.root_id();
		let mut internal = None;
		while let Some(left) = self.tree.node(id).left() {
			internal = Some(id);
			id = left;
		}
		internal
	}

	/// The rightmost internal node.
	fn last_id(&self) -> Option<I> {
		let mut id = self.tree.root_id();
		let mut internal = None;
		while let Some(right) = self.tree.node(id).right() {
			internal = Some(id);
			id = right;
		}
		internal
	}
}

impl<K, V, F: Compare<K>, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Descend from the root following the comparator.
	///
	/// Returns the internal node holding `key` if there is one, otherwise the sentinel where
	/// `key` would be inserted.
	pub fn search(&self, key: &K) -> Position<I> {
		let mut id = self.tree.root_id();
		loop {
			let node = self.tree.node(id);
			let (entry, (left, right)) = match (node.element(), node.children()) {
				(Some(entry), Some(children)) => (entry, children),
				_ => break,
			};
			id = match self.cmp.compare(key, entry.key()) {
				Ordering::Less => left,
				Ordering::Greater => right,
				Ordering::Equal => break,
			};
		}
		self.tree.position(id)
	}

	/// Returns the position of the node holding `key`, if any.
	#[inline]
	pub fn position_of(&self, key: &K) -> Option<Position<I>> {
		let p = self.search(key);
		if self.tree.node(p.index()).is_internal() {
			Some(p)
		} else {
			None
		}
	}

	/// Returns the entry holding `key`, if any.
	#[inline]
	pub fn get_entry(&self, key: &K) -> Option<&Entry<K, V, I>> {
		self.entry_in(self.search(key).index())
	}

	/// Returns the value corresponding to the supplied key.
	///
	/// # Example
	///
	/// ```
	/// use bst_store::TreeMap;
	///
	/// let mut map: TreeMap<i32, &str> = TreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get(&1), Some(&"a"));
	/// assert_eq!(map.get(&2), None);
	/// ```
	#[inline]
	pub fn get(&self, key: &K) -> Option<&V> {
		self.get_entry(key).map(Entry::value)
	}

	/// Returns the key-value pair corresponding to the supplied key.
	#[inline]
	pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
		self.get_entry(key).map(Entry::as_pair)
	}

	/// Returns `true` if the map contains a value for the specified key.
	#[inline]
	pub fn contains_key(&self, key: &K) -> bool {
		self.get_entry(key).is_some()
	}
}

impl<K, V, F: Compare<K>, I: Index, C: Slab<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Returns a mutable reference to the value corresponding to the supplied key.
	#[inline]
	pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
		let p = self.search(key);
		self.tree.node_mut(p.index()).element_mut().map(Entry::value_mut)
	}

	/// Insert a key-value pair in the map.
	///
	/// If the map did not have this key present, `None` is returned.
	///
	/// If the map did have this key present, the entry is replaced in place by a new one made of
	/// the given key and value, and the old value is returned. The key is replaced too, which
	/// matters for keys that compare equal without being identical.
	///
	/// # Example
	///
	/// ```
	/// use bst_store::TreeMap;
	///
	/// let mut map = TreeMap::new();
	/// assert_eq!(map.insert(37, "a"), None);
	/// assert_eq!(map.is_empty(), false);
	///
	/// map.insert(37, "b");
	/// assert_eq!(map.insert(37, "c"), Some("b"));
	/// assert_eq!(map[&37], "c");
	/// ```
	pub fn insert(&mut self, key: K, value: V) -> Option<V> {
		let p = self.search(&key);
		let entry = Entry::new(key, value, p);
		if self.tree.node(p.index()).is_external() {
			checked(self.tree.attach_children(p, entry));
			None
		} else {
			Some(checked(self.tree.set_element(p, entry)).into_value())
		}
	}

	/// Removes a key from the map, returning the value at the key if the key was previously in
	/// the map.
	///
	/// # Example
	///
	/// ```
	/// use bst_store::TreeMap;
	///
	/// let mut map = TreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.remove(&1), Some("a"));
	/// assert_eq!(map.remove(&1), None);
	/// ```
	#[inline]
	pub fn remove(&mut self, key: &K) -> Option<V> {
		self.remove_entry(key).map(|(_, value)| value)
	}

	/// Removes a key from the map, returning the stored key and value if the key was previously
	/// in the map.
	#[inline]
	pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
		let p = self.search(key);
		self.remove_at(p.index())
	}

	/// Removes and returns the first entry in the map.
	/// The key of this entry is the minimum key that was in the map.
	#[inline]
	pub fn pop_first(&mut self) -> Option<(K, V)> {
		self.first_id().and_then(|id| self.remove_at(id))
	}

	/// Removes and returns the last entry in the map.
	/// The key of this entry is the maximum key that was in the map.
	#[inline]
	pub fn pop_last(&mut self) -> Option<(K, V)> {
		self.last_id().and_then(|id| self.remove_at(id))
	}

	/// Clears the map, removing all entries. The tree goes back to a single sentinel.
	#[inline]
	pub fn clear(&mut self) {
		self.tree.clear()
	}

	/// Retains only the entries specified by the predicate.
	///
	/// In other words, remove all pairs `(k, v)` such that `f(&k, &mut v)` returns `false`.
	/// Entries are visited in ascending key order.
	///
	/// # Example
	///
	/// ```
	/// use bst_store::TreeMap;
	///
	/// let mut map: TreeMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
	/// map.retain(|&k, _| k % 2 == 0);
	/// assert!(map.iter().eq(vec![(&0, &0), (&2, &20), (&4, &40), (&6, &60)]));
	/// ```
	pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
		let ids: Vec<I> = self.tree.inorder().map(|p| p.index()).collect();
		let mut doomed = Vec::new();
		for id in ids {
			if let Some(entry) = self.tree.node_mut(id).element_mut() {
				let (key, value) = entry.as_pair_mut();
				if !f(key, value) {
					doomed.push(id);
				}
			}
		}

		// Removing an entry only moves its predecessor, so in ascending order the remaining ids
		// still hold their entries.
		for id in doomed {
			self.remove_at(id);
		}
	}

	/// Remove the entry held by the node `id`, if it is internal.
	fn remove_at(&mut self, id: I) -> Option<(K, V)> {
		let (left, right) = self.tree.node(id).children()?;

		let target = if self.tree.node(left).is_external() {
			log::debug!("removing {:?}: left child is a sentinel", id);
			left
		} else if self.tree.node(right).is_external() {
			log::debug!("removing {:?}: right child is a sentinel", id);
			right
		} else {
			// The predecessor is the parent of the first sentinel to the right of `left`.
			let mut x = left;
			while let Some(next) = self.tree.node(x).right() {
				x = next;
			}
			log::debug!("removing {:?}: moving up the predecessor above {:?}", id, x);

			let r = self.tree.position(id);
			let Some(mut predecessor) = checked(self.tree.excise(self.tree.position(x))) else {
				panic!("corrupted tree: sentinel {:?} has no parent", x)
			};
			predecessor.relocate(r);
			return Some(checked(self.tree.set_element(r, predecessor)).into_pair());
		};

		checked(self.tree.excise(self.tree.position(target))).map(Entry::into_pair)
	}
}

impl<K, V, F, I: Index, C: OwnedSlab<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Reserve room in the store for `additional` more entries and their sentinels.
	#[inline]
	pub fn reserve(&mut self, additional: usize) {
		self.tree.reserve(2 * additional + 1)
	}
}

impl<K: fmt::Display, V: fmt::Display, I: Index + fmt::Display, C: SlabView<MapNode<K, V, I>, Index=I>, F> TreeMap<K, V, F, I, C> {
	/// Write the tree, sentinels included, in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(any(doc, feature = "dot"))]
	#[inline]
	pub fn dot_write(&self, f: &mut impl std::io::Write) -> std::io::Result<()> {
		self.tree.dot_write(f)
	}
}

impl<K, V, F: Compare<K>, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> TreeMap<K, V, F, I, C> {
	/// Validate the map.
	///
	/// Panics if the tree is malformed, if keys are not in strictly ascending order, or if an
	/// entry does not know where it is.
	pub fn validate(&self) {
		self.tree.validate();

		let mut previous: Option<&K> = None;
		for p in self.tree.inorder() {
			if let Some(entry) = self.entry_in(p.index()) {
				assert_eq!(entry.position(), p, "entry does not know its position");
				if let Some(previous) = previous {
					assert_eq!(
						self.cmp.compare(previous, entry.key()),
						Ordering::Less,
						"keys are not in ascending order"
					);
				}
				previous = Some(entry.key());
			}
		}
	}
}

impl<K, V, F: Compare<K>, I: Index, C: Slab<MapNode<K, V, I>, Index=I>> Extend<(K, V)> for TreeMap<K, V, F, I, C> {
	#[inline]
	fn extend<T: IntoIterator<Item=(K, V)>>(&mut self, iter: T) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K: Ord, V, I: Index, C: Slab<MapNode<K, V, I>, Index=I> + Default> FromIterator<(K, V)> for TreeMap<K, V, Natural<K>, I, C> {
	#[inline]
	fn from_iter<T: IntoIterator<Item=(K, V)>>(iter: T) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K, V, F: Compare<K>, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> std::ops::Index<&K> for TreeMap<K, V, F, I, C> {
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the map.
	#[inline]
	fn index(&self, key: &K) -> &V {
		match self.get(key) {
			Some(value) => value,
			None => panic!("no entry found for key"),
		}
	}
}

impl<
	K: PartialEq,
	V: PartialEq,
	F,
	G,
	I: Index,
	J: Index,
	C: SlabView<MapNode<K, V, I>, Index=I>,
	D: SlabView<MapNode<K, V, J>, Index=J>
> PartialEq<TreeMap<K, V, G, J, D>> for TreeMap<K, V, F, I, C> {
	/// Maps are equal when they hold equal pairs in the same order.
	#[inline]
	fn eq(&self, other: &TreeMap<K, V, G, J, D>) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<K: fmt::Debug, V: fmt::Debug, F, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> fmt::Debug for TreeMap<K, V, F, I, C> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

/// Renders the entries in ascending order as `{(k1, v1),(k2, v2)}`.
impl<K: fmt::Display, V: fmt::Display, F, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> fmt::Display for TreeMap<K, V, F, I, C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("{")?;
		for (i, entry) in self.entries().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}
			write!(f, "{}", entry)?;
		}
		f.write_str("}")
	}
}

impl<'a, K, V, F, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> IntoIterator for &'a TreeMap<K, V, F, I, C> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V, I, C>;

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V, I, C> {
		self.iter()
	}
}

/// Iterator over the entries of a [`TreeMap`], in ascending key order.
///
/// Sentinels are skipped. A clone walks the rest of the map independently.
pub struct Entries<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> {
	inner: InOrderElements<'a, Entry<K, V, I>, I, C>,
	/// Entries not yielded yet.
	remaining: usize,
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Clone for Entries<'a, K, V, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		Entries {
			inner: self.inner.clone(),
			remaining: self.remaining,
		}
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Iterator for Entries<'a, K, V, I, C> {
	type Item = &'a Entry<K, V, I>;

	#[inline]
	fn next(&mut self) -> Option<&'a Entry<K, V, I>> {
		let entry = self.inner.find_map(|element| element)?;
		self.remaining -= 1;
		Some(entry)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> FusedIterator for Entries<'a, K, V, I, C> {}
impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> ExactSizeIterator for Entries<'a, K, V, I, C> {}

/// Iterator over the key-value pairs of a [`TreeMap`], in ascending key order.
pub struct Iter<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> {
	inner: Entries<'a, K, V, I, C>,
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Clone for Iter<'a, K, V, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		Iter { inner: self.inner.clone() }
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Iterator for Iter<'a, K, V, I, C> {
	type Item = (&'a K, &'a V);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		self.inner.next().map(Entry::as_pair)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> FusedIterator for Iter<'a, K, V, I, C> {}
impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> ExactSizeIterator for Iter<'a, K, V, I, C> {}

/// Iterator over the keys of a [`TreeMap`], in ascending order.
pub struct Keys<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> {
	inner: Entries<'a, K, V, I, C>,
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Clone for Keys<'a, K, V, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		Keys { inner: self.inner.clone() }
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Iterator for Keys<'a, K, V, I, C> {
	type Item = &'a K;

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(Entry::key)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> FusedIterator for Keys<'a, K, V, I, C> {}
impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> ExactSizeIterator for Keys<'a, K, V, I, C> {}

/// Iterator over the values of a [`TreeMap`], in ascending key order.
pub struct Values<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> {
	inner: Entries<'a, K, V, I, C>,
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Clone for Values<'a, K, V, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		Values { inner: self.inner.clone() }
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> Iterator for Values<'a, K, V, I, C> {
	type Item = &'a V;

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(Entry::value)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> FusedIterator for Values<'a, K, V, I, C> {}
impl<'a, K, V, I: Index, C: SlabView<MapNode<K, V, I>, Index=I>> ExactSizeIterator for Values<'a, K, V, I, C> {}
