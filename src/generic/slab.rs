mod index;

pub use index::*;

/// Trait for a generic immutable view of a slab. It must support immutable indexing
pub trait SlabView<T> {
	/// The type of index or key used to remember and retrieve elements from this slab
	type Index: Index;

	/// Get the element inserted at the given index, if any
	fn get(&self, index: Self::Index) -> Option<&T>;
}

/// Trait for a generic slab. It must support insertion, removal, and indexing
pub trait Slab<T>: SlabView<T> {
	/// Insert an element into the slab, returning the index at which it was inserted.
	/// Subsequent calls to [SlabView::get] and [Self::get_mut] with the returned index must
	/// return a reference to the inserted element.
	///
	/// The returned index must never be [Index::nowhere].
	fn insert(&mut self, value: T) -> Self::Index;
	/// Remove an element from the slab, returning the element that was removed.
	/// Subsequent calls to [SlabView::get] and [Self::get_mut] with the given index must return
	/// `None` until a new element is inserted, then they can refer to any new element.
	fn remove(&mut self, index: Self::Index) -> Option<T>;
	/// Get a mutable reference to an element in the slab, if any.
	/// [SlabView::get] and [Self::get_mut] must both return `Some` or both return `None`.
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;
	/// If this slab is completely owned by one tree, clear all elements and return `true`.
	/// Otherwise return `false`, and the caller removes its elements one by one.
	fn clear_fast(&mut self) -> bool;
}

/// Marker trait for a slab which is completely owned by a tree.
///
/// This means that there are no elements from other trees, so its length is always the tree's
/// node count and clearing the tree can clear the slab in one go.
pub trait OwnedSlab<T>: Slab<T> {
	/// Clear all elements. This trait's `clear_fast` should call this and then return `true`.
	fn clear(&mut self);

	/// Reserve room for at least `additional` more elements.
	fn reserve(&mut self, additional: usize);
}

#[cfg(any(doc, feature = "slab"))]
impl<T> SlabView<T> for slab::Slab<T> {
	type Index = usize;

	#[inline]
	fn get(&self, index: Self::Index) -> Option<&T> {
		slab::Slab::get(self, index)
	}
}

#[cfg(any(doc, feature = "slab"))]
impl<T> Slab<T> for slab::Slab<T> {
	#[inline]
	fn insert(&mut self, value: T) -> Self::Index {
		slab::Slab::insert(self, value)
	}

	#[inline]
	fn remove(&mut self, index: Self::Index) -> Option<T> {
		slab::Slab::try_remove(self, index)
	}

	#[inline]
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
		slab::Slab::get_mut(self, index)
	}

	#[inline]
	fn clear_fast(&mut self) -> bool {
		// Is owned
		self.clear();
		true
	}
}

#[cfg(any(doc, feature = "slab"))]
impl<T> OwnedSlab<T> for slab::Slab<T> {
	#[inline]
	fn clear(&mut self) {
		slab::Slab::clear(self);
	}

	#[inline]
	fn reserve(&mut self, additional: usize) {
		slab::Slab::reserve(self, additional);
	}
}

#[cfg(all(test, feature = "slab"))]
mod tests {
	use super::*;

	#[test]
	fn slab_store_reuses_removed_slots() {
		let mut store: slab::Slab<&str> = slab::Slab::new();
		let a = Slab::insert(&mut store, "a");
		let b = Slab::insert(&mut store, "b");
		assert_eq!(SlabView::get(&store, a), Some(&"a"));
		assert_eq!(Slab::remove(&mut store, a), Some("a"));
		assert_eq!(SlabView::get(&store, a), None);
		assert_eq!(Slab::remove(&mut store, a), None);
		let c = Slab::insert(&mut store, "c");
		assert_eq!(c, a);
		assert_eq!(SlabView::get(&store, b), Some(&"b"));
		assert_eq!(SlabView::get(&store, usize::nowhere()), None);
	}

	#[test]
	fn clear_fast_clears_owned_store() {
		let mut store: slab::Slab<u8> = slab::Slab::new();
		Slab::insert(&mut store, 1);
		Slab::insert(&mut store, 2);
		assert!(store.clear_fast());
		assert!(store.is_empty());
	}
}
