//! Tree construction errors.

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A child list does not fit a `NodeRange` (u16 length, u32 start).
    #[error("child list of {len} nodes does not fit a node range")]
    ListTooLong { len: usize },
    /// The arena already holds `u32::MAX - 1` nodes.
    #[error("syntax tree is full ({count} nodes)")]
    TooManyNodes { count: usize },
    /// A node id that does not belong to this tree.
    #[error("{id:?} is not a node of this tree")]
    UnknownNode { id: NodeId },
}
