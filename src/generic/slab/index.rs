/// A way to identify a node in a slab.
///
/// Nodes link to each other through indices, so an index must stay valid until the node it
/// refers to is removed. One value is reserved to mean "no node" (e.g. the parent of the root).
pub trait Index: Copy + Eq + std::fmt::Debug {
	fn nowhere() -> Self;
	fn is_nowhere(&self) -> bool;

	/// `None` if this is [Index::nowhere].
	#[inline]
	fn somewhere(self) -> Option<Self> {
		if self.is_nowhere() {
			None
		} else {
			Some(self)
		}
	}
}

impl Index for usize {
	#[inline]
	fn nowhere() -> Self {
		usize::MAX
	}

	#[inline]
	fn is_nowhere(&self) -> bool {
		*self == usize::MAX
	}
}
