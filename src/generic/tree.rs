use crate::error::{PositionFault, TreeError};
use crate::generic::{
	node::{Node, Position},
	slab::{Index, OwnedSlab, Slab, SlabView},
};
use smallvec::SmallVec;
use std::{
	iter::{ExactSizeIterator, FusedIterator},
	marker::PhantomData,
	sync::atomic::{AtomicU64, Ordering},
};

/// Inline capacity of the traversal stacks. Deeper trees spill to the heap.
const STACK_INLINE: usize = 32;

/// Source of tree identities.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// A proper binary tree whose nodes live in a slab.
///
/// Every node is either *internal*, holding one element and exactly two children, or *external*
/// (a sentinel), holding nothing and having no children. The tree always has at least one node:
/// a new tree is a single external root.
///
/// Nodes are addressed by [`Position`]s, which wrap the slab index of the node. Children are owned
/// through indices and each node remembers the index of its parent, so no node holds a reference
/// to another.
///
/// The checked functions return [`TreeError::InvalidPosition`] when given a position which is
/// not in this tree or which lacks the requested relative. Positions carry the identity of the
/// tree which issued them and the generation of their node, so a position from another tree, or
/// one whose node was removed, is rejected even when its index is occupied.
pub struct LinkedBinaryTree<T, I: Index, C: SlabView<Node<T, I>, Index=I>> {
	/// Contains allocated nodes.
	store: C,
	/// Root node id. Never nowhere.
	root: I,
	/// Number of nodes, sentinels included.
	len: usize,
	/// Identity of this tree, stamped on every position it issues.
	id: u64,
	/// Generation of the next node created.
	next_generation: u64,
	t: PhantomData<T>,
}

impl<T, I: Index, C: Slab<Node<T, I>, Index=I> + Default> LinkedBinaryTree<T, I, C> {
	/// Create a tree made of a single sentinel in a new store.
	#[inline]
	pub fn new() -> Self {
		Self::new_in(Default::default())
	}
}

impl<T, I: Index, C: Slab<Node<T, I>, Index=I> + Default> Default for LinkedBinaryTree<T, I, C> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T, I: Index, C: Slab<Node<T, I>, Index=I>> LinkedBinaryTree<T, I, C> {
	/// Create a tree made of a single sentinel in a pre-existing store.
	#[inline]
	pub fn new_in(mut store: C) -> Self {
		let root = store.insert(Node::external(I::nowhere(), 0));
		LinkedBinaryTree {
			store,
			root,
			len: 1,
			id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
			next_generation: 1,
			t: PhantomData,
		}
	}
}

impl<T, I: Index, C: SlabView<Node<T, I>, Index=I>> LinkedBinaryTree<T, I, C> {
	/// The root position. There always is one.
	#[inline]
	pub fn root(&self) -> Position<I> {
		self.position(self.root)
	}

	/// Number of nodes, sentinels included. Always odd.
	#[inline]
	pub fn node_count(&self) -> usize {
		self.len
	}

	/// Number of internal nodes.
	#[inline]
	pub fn internal_count(&self) -> usize {
		self.len / 2
	}

	/// Get the node associated to the given `id`.
	///
	/// Panics if `id` is not in the store.
	#[inline]
	pub(crate) fn node(&self, id: I) -> &Node<T, I> {
		match self.store.get(id) {
			Some(node) => node,
			None => panic!("invalid node index {:?}", id),
		}
	}

	#[inline]
	pub(crate) fn root_id(&self) -> I {
		self.root
	}

	/// The position of the node `id`.
	#[inline]
	pub(crate) fn position(&self, id: I) -> Position<I> {
		Position::new(id, self.id, self.node(id).generation())
	}

	/// Get the node at `p`, if it belongs to this tree.
	#[inline]
	fn checked(&self, p: Position<I>) -> Result<&Node<T, I>, TreeError> {
		if p.tree() == self.id {
			if let Some(node) = self.store.get(p.index()) {
				if node.generation() == p.generation() {
					return Ok(node);
				}
			}
		}
		Err(PositionFault::Foreign.into())
	}

	#[inline]
	pub fn is_internal(&self, p: Position<I>) -> Result<bool, TreeError> {
		Ok(self.checked(p)?.is_internal())
	}

	#[inline]
	pub fn is_external(&self, p: Position<I>) -> Result<bool, TreeError> {
		Ok(self.checked(p)?.is_external())
	}

	#[inline]
	pub fn is_root(&self, p: Position<I>) -> Result<bool, TreeError> {
		self.checked(p)?;
		Ok(p.index() == self.root)
	}

	#[inline]
	pub fn parent(&self, p: Position<I>) -> Result<Position<I>, TreeError> {
		match self.checked(p)?.parent() {
			Some(parent) => Ok(self.position(parent)),
			None => Err(PositionFault::NoParent.into()),
		}
	}

	#[inline]
	pub fn left(&self, p: Position<I>) -> Result<Position<I>, TreeError> {
		match self.checked(p)?.left() {
			Some(left) => Ok(self.position(left)),
			None => Err(PositionFault::NoChildren.into()),
		}
	}

	#[inline]
	pub fn right(&self, p: Position<I>) -> Result<Position<I>, TreeError> {
		match self.checked(p)?.right() {
			Some(right) => Ok(self.position(right)),
			None => Err(PositionFault::NoChildren.into()),
		}
	}

	/// The other child of `p`'s parent.
	#[inline]
	pub fn sibling(&self, p: Position<I>) -> Result<Position<I>, TreeError> {
		let parent = match self.checked(p)?.parent() {
			Some(parent) => parent,
			None => return Err(PositionFault::NoSibling.into()),
		};
		Ok(self.position(self.sibling_of(p.index(), parent)))
	}

	/// Both children of `p`, left first.
	#[inline]
	pub fn children(&self, p: Position<I>) -> Result<(Position<I>, Position<I>), TreeError> {
		match self.checked(p)?.children() {
			Some((left, right)) => Ok((self.position(left), self.position(right))),
			None => Err(PositionFault::NoChildren.into()),
		}
	}

	/// The element held at `p`, `None` if `p` is a sentinel.
	#[inline]
	pub fn element(&self, p: Position<I>) -> Result<Option<&T>, TreeError> {
		Ok(self.checked(p)?.element())
	}

	/// Returns the number of edges on the longest path from the root to a sentinel.
	///
	/// The tree is not balanced, so this can be as large as the number of internal nodes.
	pub fn height(&self) -> usize {
		let mut height = 0;
		let mut stack: SmallVec<[(I, usize); STACK_INLINE]> = SmallVec::new();
		stack.push((self.root, 0));
		while let Some((id, depth)) = stack.pop() {
			match self.node(id).children() {
				Some((left, right)) => {
					stack.push((left, depth + 1));
					stack.push((right, depth + 1));
				}
				None => height = height.max(depth),
			}
		}
		height
	}

	/// Iterate over every position in in-order: left subtree, node, right subtree.
	///
	/// Sentinels are included, so a tree holding `n` elements yields `2n + 1` positions, the
	/// first and last of which are sentinels.
	#[inline]
	pub fn inorder(&self) -> InOrder<T, I, C> {
		InOrder::new(self)
	}

	/// Iterate over what every position holds, in in-order.
	///
	/// Yields `None` for each sentinel. Flattening it gives the elements in order.
	#[inline]
	pub fn inorder_elements(&self) -> InOrderElements<T, I, C> {
		InOrderElements { inner: self.inorder() }
	}

	/// Returns the index of the child of `parent` which is not `id`.
	#[inline]
	pub(crate) fn sibling_of(&self, id: I, parent: I) -> I {
		match self.node(parent).children() {
			Some((left, right)) if left == id => right,
			Some((left, _)) => left,
			None => panic!("node {:?} is a sentinel but has a child {:?}", parent, id),
		}
	}

	/// Validate the tree.
	///
	/// Panics if the tree is not a proper binary tree with consistent parent links and node
	/// count.
	pub fn validate(&self) {
		assert!(self.node(self.root).parent().is_none(), "root has a parent");

		let mut count = 0;
		let mut internals = 0;
		let mut stack: SmallVec<[I; STACK_INLINE]> = SmallVec::new();
		stack.push(self.root);
		while let Some(id) = stack.pop() {
			count += 1;
			let node = self.node(id);
			match node.children() {
				Some((left, right)) => {
					internals += 1;
					assert!(node.element().is_some(), "internal node {:?} has no element", id);
					assert!(left != right, "node {:?} has the same child twice", id);
					assert_eq!(self.node(left).parent(), Some(id), "broken parent link");
					assert_eq!(self.node(right).parent(), Some(id), "broken parent link");
					stack.push(left);
					stack.push(right);
				}
				None => assert!(node.element().is_none(), "sentinel {:?} has an element", id),
			}
		}

		assert_eq!(count, self.len, "node count mismatch");
		assert_eq!(count, 2 * internals + 1, "not a proper binary tree");
	}
}

impl<T, I: Index, C: Slab<Node<T, I>, Index=I>> LinkedBinaryTree<T, I, C> {
	#[inline]
	pub(crate) fn node_mut(&mut self, id: I) -> &mut Node<T, I> {
		match self.store.get_mut(id) {
			Some(node) => node,
			None => panic!("invalid node index {:?}", id),
		}
	}

	/// Get the node at `p` mutably, if it belongs to this tree.
	#[inline]
	fn checked_mut(&mut self, p: Position<I>) -> Result<&mut Node<T, I>, TreeError> {
		self.checked(p)?;
		Ok(self.node_mut(p.index()))
	}

	/// Insert a new sentinel below `parent`.
	#[inline]
	fn insert_external(&mut self, parent: I) -> I {
		let generation = self.next_generation;
		self.next_generation += 1;
		self.store.insert(Node::external(parent, generation))
	}

	/// The element held at `p`, mutably. `None` if `p` is a sentinel.
	#[inline]
	pub fn element_mut(&mut self, p: Position<I>) -> Result<Option<&mut T>, TreeError> {
		Ok(self.checked_mut(p)?.element_mut())
	}

	/// Replace the element held at the internal position `p`, returning the previous one.
	#[inline]
	pub fn set_element(&mut self, p: Position<I>, element: T) -> Result<T, TreeError> {
		self.checked_mut(p)?
			.replace_element(element)
			.map_err(|_| PositionFault::NotInternal.into())
	}

	/// Convert the sentinel `p` into an internal node holding `element`, with two new sentinels
	/// as children.
	pub fn attach_children(&mut self, p: Position<I>, element: T) -> Result<(), TreeError> {
		if self.checked(p)?.is_internal() {
			return Err(PositionFault::NotExternal.into());
		}

		let id = p.index();
		let left = self.insert_external(id);
		let right = self.insert_external(id);
		if self.node_mut(id).internalize(element, left, right).is_err() {
			self.store.remove(left);
			self.store.remove(right);
			return Err(PositionFault::NotExternal.into());
		}

		self.len += 2;
		log::trace!("attached sentinels {:?} and {:?} below {:?}", left, right, id);
		Ok(())
	}

	/// Remove the sentinel `p` and its parent, promoting `p`'s sibling into the parent's place.
	///
	/// Returns the element the removed parent held. If `p` is the root (the tree is empty), it is
	/// replaced by a fresh sentinel and `None` is returned.
	pub fn excise(&mut self, p: Position<I>) -> Result<Option<T>, TreeError> {
		let id = p.index();
		let parent = {
			let node = self.checked(p)?;
			if node.is_internal() {
				return Err(PositionFault::NotExternal.into());
			}
			node.parent()
		};

		match parent {
			None => {
				self.store.remove(id);
				self.root = self.insert_external(I::nowhere());
				log::trace!("replaced sentinel root {:?} with {:?}", id, self.root);
				Ok(None)
			}
			Some(parent) => {
				let sibling = self.sibling_of(id, parent);
				let grandparent = self.node(parent).parent();

				match grandparent {
					Some(grandparent) => {
						self.node_mut(sibling).set_parent(grandparent);
						self.node_mut(grandparent).replace_child(parent, sibling);
					}
					None => {
						self.node_mut(sibling).set_parent(I::nowhere());
						self.root = sibling;
					}
				}

				self.store.remove(id);
				let element = self.store.remove(parent).and_then(Node::into_element);
				self.len -= 2;
				log::trace!("excised {:?} and {:?}, promoted {:?}", id, parent, sibling);
				Ok(element)
			}
		}
	}

	/// Remove every node and start again from a single sentinel root.
	pub fn clear(&mut self) {
		if !self.store.clear_fast() {
			// Remove each node individually
			let mut stack: SmallVec<[I; STACK_INLINE]> = SmallVec::new();
			stack.push(self.root);
			while let Some(id) = stack.pop() {
				if let Some(node) = self.store.remove(id) {
					if let Some((left, right)) = node.children() {
						stack.push(left);
						stack.push(right);
					}
				}
			}
		}

		self.root = self.insert_external(I::nowhere());
		self.len = 1;
		log::debug!("cleared tree");
	}
}

impl<T, I: Index, C: OwnedSlab<Node<T, I>, Index=I>> LinkedBinaryTree<T, I, C> {
	/// Reserve room in the store for `additional` more nodes.
	#[inline]
	pub fn reserve(&mut self, additional: usize) {
		self.store.reserve(additional)
	}
}

impl<T: std::fmt::Display, I: Index + std::fmt::Display, C: SlabView<Node<T, I>, Index=I>> LinkedBinaryTree<T, I, C> {
	/// Write the tree, sentinels included, in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(any(doc, feature = "dot"))]
	pub fn dot_write(&self, f: &mut impl std::io::Write) -> std::io::Result<()> {
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		let mut stack: SmallVec<[I; STACK_INLINE]> = SmallVec::new();
		stack.push(self.root);
		while let Some(id) = stack.pop() {
			let node = self.node(id);
			write!(f, "\tn{} [label=\"", id)?;
			node.dot_write_label(f)?;
			writeln!(f, "|({})\"];", id)?;
			if let Some((left, right)) = node.children() {
				writeln!(f, "\tn{} -> n{}", id, left)?;
				writeln!(f, "\tn{} -> n{}", id, right)?;
				stack.push(right);
				stack.push(left);
			}
		}
		write!(f, "}}")
	}
}

/// In-order iterator over the positions of a [`LinkedBinaryTree`].
///
/// Cloning it gives an independent iterator starting from the same point.
pub struct InOrder<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> {
	tree: &'a LinkedBinaryTree<T, I, C>,
	/// Nodes whose left subtree is being visited.
	stack: SmallVec<[I; STACK_INLINE]>,
	/// Next subtree to descend into, or nowhere.
	descend: I,
	remaining: usize,
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> InOrder<'a, T, I, C> {
	#[inline]
	fn new(tree: &'a LinkedBinaryTree<T, I, C>) -> Self {
		InOrder {
			tree,
			stack: SmallVec::new(),
			descend: tree.root,
			remaining: tree.len,
		}
	}
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> Clone for InOrder<'a, T, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		InOrder {
			tree: self.tree,
			stack: self.stack.clone(),
			descend: self.descend,
			remaining: self.remaining,
		}
	}
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> Iterator for InOrder<'a, T, I, C> {
	type Item = Position<I>;

	fn next(&mut self) -> Option<Position<I>> {
		while !self.descend.is_nowhere() {
			self.stack.push(self.descend);
			self.descend = self.tree.node(self.descend).left().unwrap_or_else(I::nowhere);
		}

		let id = self.stack.pop()?;
		self.descend = self.tree.node(id).right().unwrap_or_else(I::nowhere);
		self.remaining -= 1;
		Some(self.tree.position(id))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> FusedIterator for InOrder<'a, T, I, C> {}
impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> ExactSizeIterator for InOrder<'a, T, I, C> {}

/// In-order iterator over what each node of a [`LinkedBinaryTree`] holds.
///
/// Yields `None` for sentinels.
pub struct InOrderElements<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> {
	inner: InOrder<'a, T, I, C>,
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> Clone for InOrderElements<'a, T, I, C> {
	#[inline]
	fn clone(&self) -> Self {
		InOrderElements { inner: self.inner.clone() }
	}
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> Iterator for InOrderElements<'a, T, I, C> {
	type Item = Option<&'a T>;

	#[inline]
	fn next(&mut self) -> Option<Option<&'a T>> {
		let tree = self.inner.tree;
		self.inner.next().map(|p| tree.node(p.index()).element())
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> FusedIterator for InOrderElements<'a, T, I, C> {}
impl<'a, T, I: Index, C: SlabView<Node<T, I>, Index=I>> ExactSizeIterator for InOrderElements<'a, T, I, C> {}

#[cfg(all(test, feature = "slab"))]
mod tests {
	use super::*;

	type Tree = LinkedBinaryTree<char, usize, slab::Slab<Node<char, usize>>>;

	/// Builds
	/// ```text
	///       b
	///     /   \
	///    a     c
	///   / \   / \
	///  .   . .   .
	/// ```
	fn abc() -> Tree {
		let mut tree = Tree::new();
		let root = tree.root();
		tree.attach_children(root, 'b').unwrap();
		let (left, right) = tree.children(root).unwrap();
		tree.attach_children(left, 'a').unwrap();
		tree.attach_children(right, 'c').unwrap();
		tree
	}

	#[test]
	fn empty_tree_is_a_single_sentinel() {
		let tree = Tree::new();
		let root = tree.root();
		assert_eq!(tree.node_count(), 1);
		assert_eq!(tree.is_external(root), Ok(true));
		assert_eq!(tree.is_root(root), Ok(true));
		assert_eq!(tree.element(root), Ok(None));
		assert_eq!(tree.parent(root), Err(TreeError::InvalidPosition(PositionFault::NoParent)));
		assert_eq!(tree.sibling(root), Err(TreeError::InvalidPosition(PositionFault::NoSibling)));
		assert_eq!(tree.left(root), Err(TreeError::InvalidPosition(PositionFault::NoChildren)));
		assert_eq!(tree.height(), 0);
		tree.validate();
	}

	#[test]
	fn navigation() {
		let tree = abc();
		tree.validate();
		let root = tree.root();
		let left = tree.left(root).unwrap();
		let right = tree.right(root).unwrap();
		assert_eq!(tree.sibling(left), Ok(right));
		assert_eq!(tree.sibling(right), Ok(left));
		assert_eq!(tree.parent(left), Ok(root));
		assert_eq!(tree.element(left), Ok(Some(&'a')));
		assert_eq!(tree.node_count(), 7);
		assert_eq!(tree.internal_count(), 3);
		assert_eq!(tree.height(), 2);
	}

	#[test]
	fn foreign_positions_are_rejected() {
		let mut tree = abc();
		let leaf = tree.left(tree.left(tree.root()).unwrap()).unwrap();
		tree.excise(leaf).unwrap();
		let foreign = TreeError::InvalidPosition(PositionFault::Foreign);
		assert_eq!(tree.parent(leaf), Err(foreign));
		assert_eq!(tree.is_internal(leaf), Err(foreign));
		assert_eq!(tree.set_element(leaf, 'z'), Err(foreign));
		assert_eq!(tree.excise(leaf), Err(foreign));
	}

	#[test]
	fn positions_of_another_tree_are_rejected() {
		let a = abc();
		let b = abc();
		let foreign = TreeError::InvalidPosition(PositionFault::Foreign);
		assert_eq!(b.root().index(), a.root().index());
		assert_eq!(a.element(b.root()), Err(foreign));
		assert_eq!(b.left(a.root()), Err(foreign));
		assert_eq!(a.element(a.root()), Ok(Some(&'b')));
	}

	#[test]
	fn reused_slots_do_not_revive_positions() {
		let mut tree = abc();
		let a = tree.left(tree.root()).unwrap();
		let leaf = tree.left(a).unwrap();
		tree.excise(leaf).unwrap();

		// The store hands the freed slots out again.
		let promoted = tree.left(tree.root()).unwrap();
		tree.attach_children(promoted, 'z').unwrap();
		let (left, right) = tree.children(promoted).unwrap();
		assert!([left.index(), right.index()].contains(&a.index()));

		let foreign = TreeError::InvalidPosition(PositionFault::Foreign);
		assert_eq!(tree.element(a), Err(foreign));
		assert_eq!(tree.element(leaf), Err(foreign));
		assert_eq!(tree.set_element(a, 'y'), Err(foreign));
		tree.validate();
	}

	#[test]
	fn clear_invalidates_every_position() {
		let mut tree = Tree::new();
		let root = tree.root();
		tree.clear();
		assert_eq!(tree.is_root(root), Err(TreeError::InvalidPosition(PositionFault::Foreign)));
		assert_eq!(tree.is_root(tree.root()), Ok(true));
	}

	#[test]
	fn attach_and_set_check_the_node_kind() {
		let mut tree = abc();
		let root = tree.root();
		assert_eq!(
			tree.attach_children(root, 'x'),
			Err(TreeError::InvalidPosition(PositionFault::NotExternal))
		);
		let sentinel = tree.right(tree.right(root).unwrap()).unwrap();
		assert_eq!(
			tree.set_element(sentinel, 'x'),
			Err(TreeError::InvalidPosition(PositionFault::NotInternal))
		);
		assert_eq!(tree.excise(root), Err(TreeError::InvalidPosition(PositionFault::NotExternal)));
		assert_eq!(tree.set_element(root, 'B'), Ok('b'));
		assert_eq!(tree.node_count(), 7);
		tree.validate();
	}

	#[test]
	fn inorder_visits_sentinels_between_elements() {
		let tree = abc();
		let elements: Vec<_> = tree.inorder_elements().collect();
		assert_eq!(
			elements,
			vec![None, Some(&'a'), None, Some(&'b'), None, Some(&'c'), None]
		);
		assert_eq!(tree.inorder().len(), 7);

		let mut positions = tree.inorder();
		positions.next();
		let restarted: Vec<_> = positions.clone().collect();
		assert_eq!(restarted, positions.collect::<Vec<_>>());
	}

	#[test]
	fn excise_promotes_the_sibling() {
		let mut tree = abc();
		let root = tree.root();
		let a = tree.left(root).unwrap();
		let c = tree.right(root).unwrap();

		// Remove `a`'s left sentinel and `a`: `a`'s right sentinel takes its place.
		let promoted = tree.right(a).unwrap();
		assert_eq!(tree.excise(tree.left(a).unwrap()), Ok(Some('a')));
		assert_eq!(tree.left(root), Ok(promoted));
		assert_eq!(tree.parent(promoted), Ok(root));
		assert_eq!(tree.node_count(), 5);
		tree.validate();

		// Remove the root through its left sentinel: `c` becomes the root.
		assert_eq!(tree.excise(promoted), Ok(Some('b')));
		assert_eq!(tree.root(), c);
		assert_eq!(tree.is_root(c), Ok(true));
		assert_eq!(tree.node_count(), 3);
		tree.validate();

		let elements: Vec<_> = tree.inorder_elements().flatten().collect();
		assert_eq!(elements, vec![&'c']);
	}

	#[test]
	fn excise_root_sentinel_keeps_a_root() {
		let mut tree = Tree::new();
		assert_eq!(tree.excise(tree.root()), Ok(None));
		assert_eq!(tree.node_count(), 1);
		assert_eq!(tree.is_external(tree.root()), Ok(true));
		tree.validate();
	}

	#[test]
	fn clear_reseeds_a_sentinel() {
		let mut tree = abc();
		tree.clear();
		assert_eq!(tree.node_count(), 1);
		assert_eq!(tree.is_external(tree.root()), Ok(true));
		tree.validate();
	}

	#[test]
	fn height_of_a_degenerate_chain() {
		let mut tree = Tree::new();
		let mut p = tree.root();
		for c in "abcdefghijklmnopqrstuvwxyz0123456789".chars() {
			tree.attach_children(p, c).unwrap();
			p = tree.right(p).unwrap();
		}
		assert_eq!(tree.height(), 36);
		assert_eq!(tree.inorder_elements().flatten().count(), 36);
		tree.validate();
	}
}
