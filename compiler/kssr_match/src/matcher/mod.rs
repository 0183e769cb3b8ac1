//! Structural node matcher.
//!
//! Matching is driven by the pattern: the kind of the pattern node picks a
//! rule, and the rule decides which code kinds are acceptable and which
//! children to compare. A pattern kind without a rule of its own never
//! matches anything.
//!
//! Every comparison goes through [`NodeMatcher::match_nodes`], which handles
//! absent nodes and rolls back bindings made by a failed comparison. Rules
//! can therefore try alternatives freely without cleaning up after
//! themselves.

mod call;
mod declarations;
mod expressions;
mod sequence;

use std::borrow::Cow;

use kssr_ir::{ensure_sufficient_stack, NodeId, NodeKind, SyntaxTree, TokenTag};

use crate::binding::{BindingStore, VarId};
use crate::resolve::Resolver;
use crate::MatchOptions;

/// Entry point: matches nodes of one pattern tree against one code tree.
pub struct Matcher<'a> {
    pattern: &'a SyntaxTree,
    code: &'a SyntaxTree,
    resolver: &'a dyn Resolver,
    options: MatchOptions,
}

impl<'a> Matcher<'a> {
    pub fn new(pattern: &'a SyntaxTree, code: &'a SyntaxTree, resolver: &'a dyn Resolver) -> Self {
        Matcher {
            pattern,
            code,
            resolver,
            options: MatchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Whether `pattern_node` matches `code_node`.
    ///
    /// Variable bindings made along a successful match stay in `bindings`;
    /// a failed match leaves `bindings` as it found them.
    pub fn is_match(
        &self,
        pattern_node: NodeId,
        code_node: NodeId,
        bindings: &mut dyn BindingStore,
    ) -> bool {
        let mut matcher = NodeMatcher {
            pattern: self.pattern,
            code: self.code,
            resolver: self.resolver,
            options: self.options,
            bindings,
        };
        matcher.match_nodes(pattern_node, code_node)
    }
}

/// State of one match session.
pub(crate) struct NodeMatcher<'m> {
    pattern: &'m SyntaxTree,
    code: &'m SyntaxTree,
    resolver: &'m dyn Resolver,
    options: MatchOptions,
    bindings: &'m mut dyn BindingStore,
}

impl<'m> NodeMatcher<'m> {
    /// Compare two possibly absent nodes.
    ///
    /// Two absent nodes match. An absent pattern node against a present
    /// code node matches only under loose matching. A present pattern node
    /// never matches an absent code node.
    pub(crate) fn match_nodes(&mut self, pattern: NodeId, code: NodeId) -> bool {
        match (pattern.is_present(), code.is_present()) {
            (false, false) => true,
            (false, true) => self.options.loose_matching,
            (true, false) => false,
            (true, true) => {
                let snapshot = self.bindings.snapshot();
                let matched = ensure_sufficient_stack(|| self.dispatch(pattern, code));
                if !matched {
                    self.bindings.restore(snapshot);
                }
                matched
            }
        }
    }

    /// Pick the rule for the pattern node's kind.
    fn dispatch(&mut self, p: NodeId, c: NodeId) -> bool {
        let (pattern, code) = (self.pattern, self.code);
        let (Some(&pattern_kind), Some(&code_kind)) = (pattern.kind(p), code.kind(c)) else {
            return false;
        };

        match pattern_kind {
            NodeKind::Leaf { tag, .. } => {
                code.token_tag(c) == Some(tag)
                    && (tag != TokenTag::Identifier || self.match_text_or_variable(p, c))
            }
            NodeKind::Constant { .. } => pattern.text(p) == code.text(c),
            NodeKind::SimpleName { ident } => self.match_simple_name(p, ident, c),

            NodeKind::ArrayAccess { .. }
            | NodeKind::Indices { .. }
            | NodeKind::Binary { .. }
            | NodeKind::Prefix { .. }
            | NodeKind::Postfix { .. }
            | NodeKind::Block { .. }
            | NodeKind::DotQualified { .. }
            | NodeKind::Lambda { .. }
            | NodeKind::FunctionLiteral { .. }
            | NodeKind::ValueArgument { .. }
            | NodeKind::If { .. } => self.match_expression(pattern_kind, p, code_kind, c),

            NodeKind::Call { .. } => self.match_call(p, c),

            NodeKind::Break { .. }
            | NodeKind::Continue { .. }
            | NodeKind::This { .. }
            | NodeKind::Super { .. }
            | NodeKind::Return { .. } => self.match_expression_with_label(pattern_kind, code_kind),

            NodeKind::StringTemplate { .. }
            | NodeKind::LiteralEntry { .. }
            | NodeKind::EscapeEntry { .. }
            | NodeKind::SimpleNameEntry { .. }
            | NodeKind::BlockEntry { .. } => self.match_template(pattern_kind, p, code_kind, c),

            NodeKind::TypeReference { .. }
            | NodeKind::UserType { .. }
            | NodeKind::NullableType { .. } => self.match_type(pattern_kind, code_kind),

            NodeKind::ModifierList { .. }
            | NodeKind::TypeParameter { .. }
            | NodeKind::TypeParameterList { .. }
            | NodeKind::Parameter { .. }
            | NodeKind::ParameterList { .. }
            | NodeKind::PrimaryConstructor { .. }
            | NodeKind::ClassBody { .. } => self.match_declaration_part(pattern_kind, code_kind),

            NodeKind::Class { .. } => self.match_class(pattern_kind, code_kind),
            NodeKind::Property { .. } => self.match_property(pattern_kind, p, code_kind, c),
        }
    }

    /// A simple name is either a variable (bound to the code identifier) or
    /// must name the same identifier as the code.
    fn match_simple_name(&mut self, p: NodeId, ident: NodeId, c: NodeId) -> bool {
        let code = self.code;
        if let Some(var) = self.variable_at(ident).or_else(|| self.variable_at(p)) {
            let target = code.referenced_name(c).unwrap_or(c);
            return self.bind(var, target);
        }
        match code.referenced_name(c) {
            Some(code_ident) => self.match_text(ident, code_ident),
            None => false,
        }
    }

    /// Name-like positions: a variable binds the code node, anything else
    /// compares text. Absent on exactly one side never matches.
    pub(crate) fn match_text_or_variable(&mut self, p: NodeId, c: NodeId) -> bool {
        if !p.is_present() || !c.is_present() {
            return p.is_present() == c.is_present();
        }
        let var = self.variable_at(p).or_else(|| {
            self.pattern
                .referenced_name(p)
                .and_then(|ident| self.variable_at(ident))
        });
        match var {
            Some(var) => self.bind(var, c),
            None => self.match_text(p, c),
        }
    }

    /// Texts of two nodes, compared under the case option.
    pub(crate) fn match_text(&self, p: NodeId, c: NodeId) -> bool {
        self.options
            .texts_equal(&node_text(self.pattern, p), &node_text(self.code, c))
    }

    #[inline]
    fn variable_at(&self, p: NodeId) -> Option<VarId> {
        self.bindings.lookup_variable(p)
    }

    /// Validate, then record.
    fn bind(&mut self, var: VarId, c: NodeId) -> bool {
        if self.bindings.validate(var, self.code, c) {
            self.bindings.record_binding(var, self.code, c);
            true
        } else {
            tracing::trace!(?var, node = ?c, "binding rejected");
            false
        }
    }
}

/// Own text of leaves without allocating, rendered text otherwise.
fn node_text(tree: &SyntaxTree, id: NodeId) -> Cow<'_, str> {
    match tree.leaf_text(id) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(tree.text(id)),
    }
}

#[cfg(test)]
mod tests;
