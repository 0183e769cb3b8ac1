//! Variable discovery and constraints.

use kssr_ir::{NodeId, NodeKind, SyntaxTree, TokenTag};
use regex::Regex;
use rustc_hash::FxHashMap;

use super::VarId;

#[derive(Debug, thiserror::Error)]
pub enum VariableError {
    #[error("pattern has no variable named `{name}`")]
    UnknownVariable { name: String },
    #[error("invalid text filter `{filter}`")]
    InvalidFilter {
        filter: String,
        #[source]
        source: regex::Error,
    },
}

/// What values a variable accepts, besides staying consistent with its
/// first binding.
#[derive(Clone, Debug, Default)]
pub struct VariableConstraint {
    text_filter: Option<Regex>,
    invert: bool,
}

impl VariableConstraint {
    /// Accept anything.
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept only values whose whole text matches `filter`.
    pub fn text(filter: &str) -> Result<Self, VariableError> {
        let regex = Regex::new(&format!("^(?:{filter})$")).map_err(|source| {
            VariableError::InvalidFilter {
                filter: filter.to_owned(),
                source,
            }
        })?;
        Ok(VariableConstraint {
            text_filter: Some(regex),
            invert: false,
        })
    }

    /// Accept exactly the values the filter rejects.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = !self.invert;
        self
    }

    pub fn accepts(&self, text: &str) -> bool {
        match &self.text_filter {
            Some(regex) => regex.is_match(text) != self.invert,
            None => true,
        }
    }
}

/// Substitution variables of one pattern tree.
///
/// A variable is written `$name$` in an identifier or a string-template
/// literal. Every position spelling the same name shares one `VarId`.
#[derive(Clone, Debug, Default)]
pub struct PatternVariables {
    by_node: FxHashMap<NodeId, VarId>,
    by_name: FxHashMap<String, VarId>,
    names: Vec<String>,
    constraints: Vec<VariableConstraint>,
}

impl PatternVariables {
    /// Collect the variables below `root`.
    pub fn scan(pattern: &SyntaxTree, root: NodeId) -> Self {
        let mut variables = PatternVariables::default();
        for node in pattern.descendants(root) {
            let text = match pattern.kind(node) {
                Some(&NodeKind::Leaf {
                    tag: TokenTag::Identifier,
                    text,
                })
                | Some(&NodeKind::LiteralEntry { text }) => pattern.lookup(text),
                _ => continue,
            };
            if let Some(name) = variable_name(text) {
                let var = variables.declare(name);
                variables.by_node.insert(node, var);
            }
        }
        variables
    }

    fn declare(&mut self, name: &str) -> VarId {
        if let Some(&var) = self.by_name.get(name) {
            return var;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a pattern cannot hold u32::MAX distinct variables"
        )]
        let var = VarId::new(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.constraints.push(VariableConstraint::any());
        self.by_name.insert(name.to_owned(), var);
        var
    }

    /// Replace the constraint of the variable `name` (without `$`).
    pub fn constrain(
        &mut self,
        name: &str,
        constraint: VariableConstraint,
    ) -> Result<(), VariableError> {
        let var = self
            .get(name)
            .ok_or_else(|| VariableError::UnknownVariable {
                name: name.to_owned(),
            })?;
        self.constraints[var.index()] = constraint;
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    /// Variable at a pattern position.
    #[inline]
    pub fn at(&self, node: NodeId) -> Option<VarId> {
        self.by_node.get(&node).copied()
    }

    pub fn name(&self, var: VarId) -> &str {
        self.names.get(var.index()).map_or("", String::as_str)
    }

    pub fn constraint(&self, var: VarId) -> Option<&VariableConstraint> {
        self.constraints.get(var.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `x` for `$x$`.
fn variable_name(text: &str) -> Option<&str> {
    let name = text.strip_prefix('$')?.strip_suffix('$')?;
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(name)
}
