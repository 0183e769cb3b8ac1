//! Arena-allocated syntax tree.
//!
//! Nodes live in one `Vec<Node>` and child lists in one `Vec<NodeId>`.
//! Pattern trees and code trees use the same type; a pattern tree is simply
//! one whose identifiers may be `$name$` placeholders.

mod builder;

pub use builder::PropertyDecl;

use smallvec::SmallVec;

use crate::{
    Name, Node, NodeFlags, NodeId, NodeKind, NodeRange, SharedInterner, Span, TokenTag, TreeError,
};

/// Flat syntax tree.
pub struct SyntaxTree {
    interner: SharedInterner,
    nodes: Vec<Node>,
    lists: Vec<NodeId>,
    root: NodeId,
}

impl SyntaxTree {
    /// Create an empty tree interning into `interner`.
    pub fn new(interner: SharedInterner) -> Self {
        SyntaxTree {
            interner,
            nodes: Vec::new(),
            lists: Vec::new(),
            root: NodeId::INVALID,
        }
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node, `NodeId::INVALID` until set.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    // Allocation

    /// Allocate a node.
    pub fn try_alloc(
        &mut self,
        kind: NodeKind,
        flags: NodeFlags,
        span: Span,
    ) -> Result<NodeId, TreeError> {
        let count = self.nodes.len();
        let index = u32::try_from(count)
            .ok()
            .filter(|index| *index != u32::MAX)
            .ok_or(TreeError::TooManyNodes { count })?;
        self.nodes.push(Node { kind, flags, span });
        Ok(NodeId::new(index))
    }

    /// Allocate a node with flags.
    ///
    /// # Panics
    /// Panics if the arena is full. Use `try_alloc` to handle that case.
    pub fn alloc_flagged(&mut self, kind: NodeKind, flags: NodeFlags) -> NodeId {
        self.try_alloc(kind, flags, Span::DUMMY)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Allocate a node without flags.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.alloc_flagged(kind, NodeFlags::empty())
    }

    /// Copy `ids` into the shared list buffer.
    pub fn try_alloc_list(&mut self, ids: &[NodeId]) -> Result<NodeRange, TreeError> {
        if ids.is_empty() {
            return Ok(NodeRange::EMPTY);
        }
        let too_long = TreeError::ListTooLong { len: ids.len() };
        let len = u16::try_from(ids.len()).map_err(|_| too_long.clone())?;
        let start = u32::try_from(self.lists.len()).map_err(|_| too_long)?;
        self.lists.extend_from_slice(ids);
        Ok(NodeRange::new(start, len))
    }

    /// # Panics
    /// Panics if the list is longer than `u16::MAX`.
    pub fn alloc_list(&mut self, ids: &[NodeId]) -> NodeRange {
        self.try_alloc_list(ids).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Attach a source span to an allocated node.
    pub fn set_span(&mut self, id: NodeId, span: Span) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownNode { id })?;
        node.span = span;
        Ok(())
    }

    // Access

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_present() {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// Node for `id`, or `TreeError::UnknownNode`.
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.get(id).ok_or(TreeError::UnknownNode { id })
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|node| &node.kind)
    }

    /// Flags of `id`; empty for absent nodes.
    #[inline]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.get(id).map_or(NodeFlags::empty(), |node| node.flags)
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).map_or(Span::DUMMY, |node| node.span)
    }

    /// Ids of a child list; empty when the range does not belong to this tree.
    #[inline]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        self.lists.get(range.as_range()).unwrap_or(&[])
    }

    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Own text of leaf-like nodes (tokens, constants, literal and escape
    /// template entries).
    pub fn leaf_text(&self, id: NodeId) -> Option<&str> {
        match *self.kind(id)? {
            NodeKind::Leaf { text, .. }
            | NodeKind::Constant { text }
            | NodeKind::LiteralEntry { text }
            | NodeKind::EscapeEntry { text } => Some(self.lookup(text)),
            _ => None,
        }
    }

    /// Token tag of a leaf.
    pub fn token_tag(&self, id: NodeId) -> Option<TokenTag> {
        match *self.kind(id)? {
            NodeKind::Leaf { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Identifier leaf referenced by a simple name; the label sigil is not
    /// part of it.
    pub fn referenced_name(&self, id: NodeId) -> Option<NodeId> {
        match *self.kind(id)? {
            NodeKind::SimpleName { ident } => ident.present(),
            _ => None,
        }
    }

    /// Name text of a value argument, `None` for positional arguments.
    pub fn argument_name(&self, arg: NodeId) -> Option<&str> {
        let NodeKind::ValueArgument { name, .. } = *self.kind(arg)? else {
            return None;
        };
        let ident = self.referenced_name(name)?;
        self.leaf_text(ident)
    }

    /// Body of a lambda (through its function literal).
    pub fn lambda_body(&self, lambda: NodeId) -> NodeId {
        let Some(&NodeKind::Lambda { literal }) = self.kind(lambda) else {
            return NodeId::INVALID;
        };
        match self.kind(literal) {
            Some(&NodeKind::FunctionLiteral { body, .. }) => body,
            _ => NodeId::INVALID,
        }
    }

    /// Structural children in source order, absent children skipped.
    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        let Some(kind) = self.kind(id) else {
            return out;
        };
        let mut push = |child: NodeId| {
            if child.is_present() {
                out.push(child);
            }
        };
        match *kind {
            NodeKind::Leaf { .. }
            | NodeKind::Constant { .. }
            | NodeKind::LiteralEntry { .. }
            | NodeKind::EscapeEntry { .. } => {}
            NodeKind::SimpleName { ident } => push(ident),
            NodeKind::ArrayAccess { array, indices } => {
                push(array);
                push(indices);
            }
            NodeKind::Binary { left, right, .. } => {
                push(left);
                push(right);
            }
            NodeKind::Prefix { operand, .. } | NodeKind::Postfix { operand, .. } => push(operand),
            NodeKind::Indices { items: list }
            | NodeKind::Block { statements: list }
            | NodeKind::StringTemplate { entries: list }
            | NodeKind::ModifierList { modifiers: list }
            | NodeKind::TypeParameterList { params: list }
            | NodeKind::ParameterList { params: list }
            | NodeKind::ClassBody { members: list } => {
                self.list(list).iter().copied().for_each(&mut push);
            }
            NodeKind::DotQualified { receiver, selector } => {
                push(receiver);
                push(selector);
            }
            NodeKind::Lambda { literal } => push(literal),
            NodeKind::FunctionLiteral { params, body } => {
                push(params);
                push(body);
            }
            NodeKind::Call {
                callee,
                type_args,
                args,
            } => {
                push(callee);
                self.list(type_args).iter().copied().for_each(&mut push);
                self.list(args).iter().copied().for_each(&mut push);
            }
            NodeKind::ValueArgument { name, expr } => {
                push(name);
                push(expr);
            }
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                push(cond);
                push(then_branch);
                push(else_branch);
            }
            NodeKind::Break { label }
            | NodeKind::Continue { label }
            | NodeKind::This { label } => push(label),
            NodeKind::Super { label, qualifier } => {
                push(qualifier);
                push(label);
            }
            NodeKind::Return { label, value } => {
                push(label);
                push(value);
            }
            NodeKind::SimpleNameEntry { expr } | NodeKind::BlockEntry { expr } => push(expr),
            NodeKind::TypeReference { element } => push(element),
            NodeKind::UserType {
                qualifier,
                name,
                type_args,
            } => {
                push(qualifier);
                push(name);
                self.list(type_args).iter().copied().for_each(&mut push);
            }
            NodeKind::NullableType { inner } => push(inner),
            NodeKind::TypeParameter { name } => push(name),
            NodeKind::Parameter {
                modifiers,
                name,
                type_ref,
                default,
            } => {
                push(modifiers);
                push(name);
                push(type_ref);
                push(default);
            }
            NodeKind::PrimaryConstructor {
                type_params,
                value_params,
            } => {
                push(type_params);
                push(value_params);
            }
            NodeKind::Class {
                modifiers,
                keyword,
                name,
                constructor,
                body,
            } => {
                push(modifiers);
                push(keyword);
                push(name);
                push(constructor);
                push(body);
            }
            NodeKind::Property {
                modifiers,
                name,
                type_ref,
                value,
            } => {
                push(modifiers);
                push(name);
                push(type_ref);
                push(value);
            }
        }
        out
    }

    /// `root` and all nodes below it, pre-order, source order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.get(id).is_none() {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        out
    }
}
