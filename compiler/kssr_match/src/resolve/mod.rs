//! Semantic information about code trees.
//!
//! Calls are matched by which parameter each argument ends up in, and
//! properties by their declared or inferred type. Neither is visible in
//! the tree, so the matcher asks a [`Resolver`].

mod table;

pub use table::{FunctionSignature, Param, ParameterSignature, SignatureTable};

use kssr_ir::{Name, NodeId, SyntaxTree};
use smallvec::SmallVec;

/// Outcome of resolving a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    Success,
    /// More than one candidate fits equally well.
    Ambiguous,
    Failed,
}

/// A resolved type: `Int` and `kotlin.Int`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub short_name: Name,
    pub fq_name: Name,
}

/// Arguments that ended up in one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentSlot {
    pub parameter: Name,
    /// Source order; several only for a vararg parameter.
    pub arguments: SmallVec<[NodeId; 2]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCall {
    pub status: ResolutionStatus,
    /// Explicit or inferred type arguments.
    pub type_arguments: Vec<TypeRef>,
    /// Slots in parameter declaration order; `None` when no mapping exists.
    pub arguments_by_parameter: Option<Vec<ArgumentSlot>>,
}

impl ResolvedCall {
    pub fn failed(status: ResolutionStatus) -> Self {
        ResolvedCall {
            status,
            type_arguments: Vec::new(),
            arguments_by_parameter: None,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == ResolutionStatus::Success
    }

    /// All mapped arguments, parameter by parameter.
    pub fn flattened_arguments(&self) -> Option<SmallVec<[NodeId; 8]>> {
        let slots = self.arguments_by_parameter.as_ref()?;
        Some(
            slots
                .iter()
                .flat_map(|slot| slot.arguments.iter().copied())
                .collect(),
        )
    }
}

/// Semantic queries the matcher needs about code.
pub trait Resolver {
    /// Resolve the call node `call` of `code`.
    fn resolve_call(&self, code: &SyntaxTree, call: NodeId) -> Option<ResolvedCall>;

    /// Type of a property or parameter declaration.
    fn resolve_type(&self, code: &SyntaxTree, declaration: NodeId) -> Option<TypeRef>;
}
