pub mod node;
pub use node::{Node, Position};

pub mod tree;
pub use tree::LinkedBinaryTree;

pub mod map;
pub use map::{Entry, MapNode, TreeMap};

pub mod slab;
pub use self::slab::{Index, OwnedSlab, Slab, SlabView};
