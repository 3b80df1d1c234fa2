use crate::generic::slab::Index;
use std::mem;

/// A stable handle to one node of a [`LinkedBinaryTree`](crate::generic::LinkedBinaryTree).
///
/// A position stays valid for as long as its node is in the tree. Once the node is excised the
/// position is stale, even if the store hands its index out again to a new node. A position is
/// only ever valid in the tree which issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position<I> {
	index: I,
	/// Identity of the issuing tree.
	tree: u64,
	/// Generation of the node at `index` when the position was issued.
	generation: u64,
}

impl<I: Index> Position<I> {
	#[inline]
	pub(crate) fn new(index: I, tree: u64, generation: u64) -> Self {
		debug_assert!(!index.is_nowhere());
		Position { index, tree, generation }
	}

	/// The store index of the node.
	#[inline]
	pub fn index(&self) -> I {
		self.index
	}

	#[inline]
	pub(crate) fn tree(&self) -> u64 {
		self.tree
	}

	#[inline]
	pub(crate) fn generation(&self) -> u64 {
		self.generation
	}
}

/// A tree node, as stored in the slab.
///
/// External nodes (sentinels) hold nothing and have no children. Internal nodes hold one
/// element and always have exactly two children.
#[derive(Clone, Debug)]
pub struct Node<T, I> {
	/// Parent node, or nowhere for the root.
	parent: I,
	/// Unique among the nodes ever created by the owning tree.
	generation: u64,
	body: Body<T, I>,
}

#[derive(Clone, Debug)]
enum Body<T, I> {
	External,
	Internal {
		element: T,
		left: I,
		right: I,
	},
}

impl<T, I: Index> Node<T, I> {
	/// A fresh sentinel.
	#[inline]
	pub(crate) fn external(parent: I, generation: u64) -> Self {
		Node {
			parent,
			generation,
			body: Body::External,
		}
	}

	#[inline]
	pub(crate) fn generation(&self) -> u64 {
		self.generation
	}

	#[inline]
	pub fn parent(&self) -> Option<I> {
		self.parent.somewhere()
	}

	#[inline]
	pub(crate) fn set_parent(&mut self, parent: I) {
		self.parent = parent;
	}

	#[inline]
	pub fn is_external(&self) -> bool {
		matches!(self.body, Body::External)
	}

	#[inline]
	pub fn is_internal(&self) -> bool {
		!self.is_external()
	}

	#[inline]
	pub fn element(&self) -> Option<&T> {
		match &self.body {
			Body::Internal { element, .. } => Some(element),
			Body::External => None,
		}
	}

	#[inline]
	pub fn element_mut(&mut self) -> Option<&mut T> {
		match &mut self.body {
			Body::Internal { element, .. } => Some(element),
			Body::External => None,
		}
	}

	/// Replace the element of an internal node, returning the previous one.
	///
	/// Returns `Err` with the given element if the node is external.
	#[inline]
	pub(crate) fn replace_element(&mut self, new: T) -> Result<T, T> {
		match &mut self.body {
			Body::Internal { element, .. } => Ok(mem::replace(element, new)),
			Body::External => Err(new),
		}
	}

	#[inline]
	pub fn left(&self) -> Option<I> {
		match self.body {
			Body::Internal { left, .. } => Some(left),
			Body::External => None,
		}
	}

	#[inline]
	pub fn right(&self) -> Option<I> {
		match self.body {
			Body::Internal { right, .. } => Some(right),
			Body::External => None,
		}
	}

	/// Both children, left first. `None` for a sentinel.
	#[inline]
	pub fn children(&self) -> Option<(I, I)> {
		match self.body {
			Body::Internal { left, right, .. } => Some((left, right)),
			Body::External => None,
		}
	}

	/// Turn a sentinel into an internal node.
	///
	/// Returns `Err` with the given element if the node is already internal.
	#[inline]
	pub(crate) fn internalize(&mut self, element: T, left: I, right: I) -> Result<(), T> {
		match self.body {
			Body::External => {
				self.body = Body::Internal { element, left, right };
				Ok(())
			}
			Body::Internal { .. } => Err(element),
		}
	}

	/// Re-link the child `old` to `new`. Does nothing if `old` is not a child of this node.
	#[inline]
	pub(crate) fn replace_child(&mut self, old: I, new: I) {
		if let Body::Internal { left, right, .. } = &mut self.body {
			if *left == old {
				*left = new;
			} else if *right == old {
				*right = new;
			}
		}
	}

	/// Consume the node, returning its element if it was internal.
	#[inline]
	pub(crate) fn into_element(self) -> Option<T> {
		match self.body {
			Body::Internal { element, .. } => Some(element),
			Body::External => None,
		}
	}

	/// Write the label of this node in the DOT graph description language.
	#[cfg(any(doc, feature = "dot"))]
	#[inline]
	pub(crate) fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: std::fmt::Display,
	{
		match &self.body {
			Body::Internal { element, .. } => write!(f, "{}", element),
			Body::External => write!(f, "·"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn internalize_and_relink() {
		let mut node: Node<&str, usize> = Node::external(usize::nowhere(), 0);
		assert!(node.is_external());
		assert_eq!(node.parent(), None);
		assert_eq!(node.replace_element("x"), Err("x"));

		node.internalize("a", 1, 2).unwrap();
		assert!(node.is_internal());
		assert_eq!(node.children(), Some((1, 2)));
		assert_eq!(node.internalize("b", 3, 4), Err("b"));

		node.replace_child(2, 7);
		assert_eq!(node.right(), Some(7));
		node.replace_child(9, 8);
		assert_eq!(node.children(), Some((1, 7)));

		assert_eq!(node.replace_element("c"), Ok("a"));
		assert_eq!(node.into_element(), Some("c"));
	}
}
