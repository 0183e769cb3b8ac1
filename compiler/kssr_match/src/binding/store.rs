//! Trail-based binding store.

use kssr_ir::{NodeId, SyntaxTree};

use super::{BindingSnapshot, BindingStore, PatternVariables, VarId};

/// One accepted value of a variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub var: VarId,
    pub node: NodeId,
    /// Rendered text of `node` at the time it was bound.
    pub text: String,
}

/// Binding store for a single candidate match.
///
/// Bindings are kept on a trail so a snapshot is just the trail length.
/// The first binding of a variable pins its text: later occurrences of the
/// same variable must render identically.
pub struct SubstitutionStore<'v> {
    variables: &'v PatternVariables,
    trail: Vec<Binding>,
}

impl<'v> SubstitutionStore<'v> {
    pub fn new(variables: &'v PatternVariables) -> Self {
        SubstitutionStore {
            variables,
            trail: Vec::new(),
        }
    }

    #[inline]
    pub fn variables(&self) -> &'v PatternVariables {
        self.variables
    }

    /// Every recorded binding, oldest first.
    #[inline]
    pub fn bindings(&self) -> &[Binding] {
        &self.trail
    }

    fn first_binding(&self, var: VarId) -> Option<&Binding> {
        self.trail.iter().find(|binding| binding.var == var)
    }

    /// Pinned text of the variable `name`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        let var = self.variables.get(name)?;
        self.first_binding(var).map(|binding| binding.text.as_str())
    }

    /// `(name, text)` for every bound variable, in declaration order.
    pub fn resolved(&self) -> Vec<(String, String)> {
        let mut vars: Vec<VarId> = self.trail.iter().map(|binding| binding.var).collect();
        vars.sort_unstable();
        vars.dedup();
        vars.into_iter()
            .filter_map(|var| {
                let binding = self.first_binding(var)?;
                Some((self.variables.name(var).to_owned(), binding.text.clone()))
            })
            .collect()
    }
}

impl BindingStore for SubstitutionStore<'_> {
    fn lookup_variable(&self, pattern_node: NodeId) -> Option<VarId> {
        self.variables.at(pattern_node)
    }

    fn validate(&self, var: VarId, code: &SyntaxTree, node: NodeId) -> bool {
        let text = code.text(node);
        let accepted = self
            .variables
            .constraint(var)
            .is_some_and(|constraint| constraint.accepts(&text));
        accepted
            && self
                .first_binding(var)
                .is_none_or(|pinned| pinned.text == text)
    }

    fn record_binding(&mut self, var: VarId, code: &SyntaxTree, node: NodeId) {
        tracing::trace!(var = self.variables.name(var), ?node, "bind");
        self.trail.push(Binding {
            var,
            node,
            text: code.text(node),
        });
    }

    fn snapshot(&self) -> BindingSnapshot {
        BindingSnapshot::new(self.trail.len())
    }

    fn restore(&mut self, snapshot: BindingSnapshot) {
        self.trail.truncate(snapshot.mark());
    }
}
