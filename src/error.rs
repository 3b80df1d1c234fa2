//! Error types.
//!
//! A lookup miss is never an error: it is `None`. Only an absent key at the [`OrderedMap`]
//! boundary and misuse of the tree primitive are.
//!
//! [`OrderedMap`]: crate::OrderedMap

use thiserror::Error;

/// Error raised through the [`OrderedMap`](crate::OrderedMap) contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
	/// The supplied key was absent. Nothing was read or mutated.
	#[error("invalid key: null key")]
	InvalidKey,
}

/// Error raised by the checked navigation and mutation functions of
/// [`LinkedBinaryTree`](crate::generic::LinkedBinaryTree).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
	#[error("invalid position: {0}")]
	InvalidPosition(PositionFault),
}

/// Why a position was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFault {
	#[error("position does not belong to this tree")]
	Foreign,
	#[error("the root has no parent")]
	NoParent,
	#[error("the root has no sibling")]
	NoSibling,
	#[error("an external node has no children")]
	NoChildren,
	#[error("position is external but must be internal")]
	NotInternal,
	#[error("position is internal but must be external")]
	NotExternal,
}

impl From<PositionFault> for TreeError {
	#[inline]
	fn from(fault: PositionFault) -> Self {
		TreeError::InvalidPosition(fault)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages() {
		assert_eq!(MapError::InvalidKey.to_string(), "invalid key: null key");
		assert_eq!(
			TreeError::from(PositionFault::NoParent).to_string(),
			"invalid position: the root has no parent"
		);
	}
}
