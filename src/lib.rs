#![doc = include_str!("../README.md")]

pub use compare::{natural, Compare, Natural};
pub use error::{MapError, PositionFault, TreeError};
pub use ordered::OrderedMap;

pub mod error;
pub mod generic;
mod ordered;

/// Tree map based on `Slab`.
#[cfg(any(doc, feature = "slab"))]
pub type TreeMap<K, V, F = Natural<K>> = generic::TreeMap<K, V, F, usize, slab::Slab<generic::MapNode<K, V, usize>>>;

/// Binary tree based on `Slab`.
#[cfg(any(doc, feature = "slab"))]
pub type LinkedBinaryTree<T> = generic::LinkedBinaryTree<T, usize, slab::Slab<generic::Node<T, usize>>>;
