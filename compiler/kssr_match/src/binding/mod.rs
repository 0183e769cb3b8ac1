//! Substitution variable bindings.
//!
//! The matcher never decides on its own whether a variable accepts a code
//! node; it asks a [`BindingStore`]. The store answers three questions:
//! which variable (if any) sits at a pattern position, whether a candidate
//! code node is acceptable for it, and it records accepted candidates.
//!
//! Backtracking (any-order lists, named argument retries) needs bindings
//! made by a failed attempt to disappear again, so stores also hand out
//! snapshots and restore them on request.

mod store;
mod variables;

pub use store::{Binding, SubstitutionStore};
pub use variables::{PatternVariables, VariableConstraint, VariableError};

use kssr_ir::{NodeId, SyntaxTree};

/// Index of a substitution variable within its `PatternVariables`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct VarId(u32);

impl VarId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        VarId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque restore point of a binding store.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BindingSnapshot(usize);

impl BindingSnapshot {
    #[inline]
    pub const fn new(mark: usize) -> Self {
        BindingSnapshot(mark)
    }

    #[inline]
    pub const fn mark(self) -> usize {
        self.0
    }
}

/// Variable bookkeeping for one match session.
pub trait BindingStore {
    /// Variable declared at `pattern_node`.
    fn lookup_variable(&self, pattern_node: NodeId) -> Option<VarId>;

    /// Whether `node` of `code` is an acceptable value for `var`, given the
    /// variable's constraint and whatever it is already bound to.
    fn validate(&self, var: VarId, code: &SyntaxTree, node: NodeId) -> bool;

    /// Record `node` as a value of `var`. Callers validate first.
    fn record_binding(&mut self, var: VarId, code: &SyntaxTree, node: NodeId);

    fn snapshot(&self) -> BindingSnapshot;

    /// Drop every binding recorded after `snapshot` was taken.
    fn restore(&mut self, snapshot: BindingSnapshot);
}
