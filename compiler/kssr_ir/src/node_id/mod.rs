//! Node ids and id ranges for the flat syntax tree.
//!
//! - `NodeId(u32)` instead of `Box<Node>`
//! - `NodeRange` for child lists (arguments, statements, parameters)
//! - `NodeId::INVALID` stands in for an absent optional child

use std::fmt;

/// Index into a `SyntaxTree` node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for an absent child (`else` branch, initializer, label...).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True unless this is the `INVALID` sentinel.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 != u32::MAX
    }

    /// `Some(self)` when present.
    #[inline]
    pub const fn present(self) -> Option<NodeId> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<Option<NodeId>> for NodeId {
    fn from(id: Option<NodeId>) -> Self {
        id.unwrap_or(NodeId::INVALID)
    }
}

/// Contiguous slice of the tree's shared id list.
///
/// `start` indexes `SyntaxTree::lists`, `len` counts ids.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NodeRange {
    pub start: u32,
    pub len: u16,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        NodeRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub(crate) fn as_range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len()
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeRange({}..{})",
            self.start,
            self.start + u32::from(self.len)
        )
    }
}

#[cfg(test)]
mod tests;
