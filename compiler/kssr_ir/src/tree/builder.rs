//! Construction helpers.
//!
//! A front end (or a test) assembles trees bottom-up with these methods.
//! Each returns the id of the node it allocated.

use super::SyntaxTree;
use crate::{NodeFlags, NodeId, NodeKind, TokenTag};

/// Parts of a property declaration.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyDecl<'a> {
    pub name: &'a str,
    /// `var` instead of `val`.
    pub mutable: bool,
    pub type_ref: Option<NodeId>,
    pub value: Option<NodeId>,
    /// `by value` instead of `= value`.
    pub delegated: bool,
    pub modifiers: Option<NodeId>,
}

impl SyntaxTree {
    // Leaves

    /// Token leaf with its fixed text.
    pub fn leaf(&mut self, tag: TokenTag) -> NodeId {
        self.token(tag, tag.fixed_text().unwrap_or_default())
    }

    /// Token leaf with explicit text.
    pub fn token(&mut self, tag: TokenTag, text: &str) -> NodeId {
        let text = self.intern(text);
        self.alloc(NodeKind::Leaf { tag, text })
    }

    pub fn ident(&mut self, text: &str) -> NodeId {
        self.token(TokenTag::Identifier, text)
    }

    // Expressions

    pub fn name_ref(&mut self, text: &str) -> NodeId {
        let ident = self.ident(text);
        self.alloc(NodeKind::SimpleName { ident })
    }

    /// Label reference `@text`.
    pub fn label(&mut self, text: &str) -> NodeId {
        let ident = self.ident(text);
        self.alloc_flagged(NodeKind::SimpleName { ident }, NodeFlags::LABEL)
    }

    pub fn constant(&mut self, text: &str) -> NodeId {
        let text = self.intern(text);
        self.alloc(NodeKind::Constant { text })
    }

    pub fn binary(&mut self, op: TokenTag, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(NodeKind::Binary { op, left, right })
    }

    pub fn prefix(&mut self, op: TokenTag, operand: NodeId) -> NodeId {
        self.alloc(NodeKind::Prefix { op, operand })
    }

    pub fn postfix(&mut self, operand: NodeId, op: TokenTag) -> NodeId {
        self.alloc(NodeKind::Postfix { op, operand })
    }

    pub fn block(&mut self, statements: &[NodeId]) -> NodeId {
        let statements = self.alloc_list(statements);
        self.alloc(NodeKind::Block { statements })
    }

    pub fn array_access(&mut self, array: NodeId, indices: &[NodeId]) -> NodeId {
        let items = self.alloc_list(indices);
        let indices = self.alloc(NodeKind::Indices { items });
        self.alloc(NodeKind::ArrayAccess { array, indices })
    }

    pub fn dot(&mut self, receiver: NodeId, selector: NodeId) -> NodeId {
        self.alloc(NodeKind::DotQualified { receiver, selector })
    }

    /// `{ params -> statements }`; no parameter list when `params` is empty.
    pub fn lambda(&mut self, params: &[NodeId], statements: &[NodeId]) -> NodeId {
        let params = if params.is_empty() {
            NodeId::INVALID
        } else {
            self.param_list(params)
        };
        let body = self.block(statements);
        let literal = self.alloc(NodeKind::FunctionLiteral { params, body });
        self.alloc(NodeKind::Lambda { literal })
    }

    /// `callee(args)` with a simple-name callee.
    pub fn call(&mut self, callee: &str, args: &[NodeId]) -> NodeId {
        let callee = self.name_ref(callee);
        self.call_with(callee, &[], args)
    }

    /// `callee<type_args>(args)`.
    pub fn call_with(&mut self, callee: NodeId, type_args: &[NodeId], args: &[NodeId]) -> NodeId {
        let type_args = self.alloc_list(type_args);
        let args = self.alloc_list(args);
        self.alloc(NodeKind::Call {
            callee,
            type_args,
            args,
        })
    }

    /// Positional argument.
    pub fn arg(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::ValueArgument {
            name: NodeId::INVALID,
            expr,
        })
    }

    /// `name = expr`
    pub fn named_arg(&mut self, name: &str, expr: NodeId) -> NodeId {
        let name = self.name_ref(name);
        self.alloc(NodeKind::ValueArgument { name, expr })
    }

    /// `*expr`
    pub fn spread_arg(&mut self, expr: NodeId) -> NodeId {
        self.alloc_flagged(
            NodeKind::ValueArgument {
                name: NodeId::INVALID,
                expr,
            },
            NodeFlags::SPREAD,
        )
    }

    pub fn if_expr(&mut self, cond: NodeId, then_branch: NodeId, else_branch: Option<NodeId>) -> NodeId {
        self.alloc(NodeKind::If {
            cond,
            then_branch,
            else_branch: else_branch.into(),
        })
    }

    fn opt_label(&mut self, label: Option<&str>) -> NodeId {
        label.map_or(NodeId::INVALID, |text| self.label(text))
    }

    pub fn break_expr(&mut self, label: Option<&str>) -> NodeId {
        let label = self.opt_label(label);
        self.alloc(NodeKind::Break { label })
    }

    pub fn continue_expr(&mut self, label: Option<&str>) -> NodeId {
        let label = self.opt_label(label);
        self.alloc(NodeKind::Continue { label })
    }

    pub fn this_expr(&mut self, label: Option<&str>) -> NodeId {
        let label = self.opt_label(label);
        self.alloc(NodeKind::This { label })
    }

    pub fn super_expr(&mut self, label: Option<&str>, qualifier: Option<NodeId>) -> NodeId {
        let label = self.opt_label(label);
        self.alloc(NodeKind::Super {
            label,
            qualifier: qualifier.into(),
        })
    }

    pub fn return_expr(&mut self, label: Option<&str>, value: Option<NodeId>) -> NodeId {
        let label = self.opt_label(label);
        self.alloc(NodeKind::Return {
            label,
            value: value.into(),
        })
    }

    // String templates

    pub fn template(&mut self, entries: &[NodeId]) -> NodeId {
        let entries = self.alloc_list(entries);
        self.alloc(NodeKind::StringTemplate { entries })
    }

    pub fn literal_entry(&mut self, text: &str) -> NodeId {
        let text = self.intern(text);
        self.alloc(NodeKind::LiteralEntry { text })
    }

    /// Escape sequence entry, e.g. `\n`.
    pub fn escape_entry(&mut self, text: &str) -> NodeId {
        let text = self.intern(text);
        self.alloc(NodeKind::EscapeEntry { text })
    }

    /// `$name`
    pub fn name_entry(&mut self, name: &str) -> NodeId {
        let expr = self.name_ref(name);
        self.alloc(NodeKind::SimpleNameEntry { expr })
    }

    /// `${expr}`
    pub fn block_entry(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::BlockEntry { expr })
    }

    // Types

    /// Type reference from source text: dotted qualifiers and a trailing `?`
    /// are understood (`kotlin.Int`, `String?`).
    pub fn type_ref(&mut self, text: &str) -> NodeId {
        self.type_ref_with_args(text, &[])
    }

    /// Type reference whose innermost user type carries type arguments
    /// (`Map<K, V>` is `type_ref_with_args("Map", &[k, v])`).
    pub fn type_ref_with_args(&mut self, text: &str, type_args: &[NodeId]) -> NodeId {
        let (path, nullable) = match text.strip_suffix('?') {
            Some(path) => (path, true),
            None => (text, false),
        };
        let segments: Vec<&str> = path.split('.').collect();
        let mut element = NodeId::INVALID;
        for (i, segment) in segments.iter().enumerate() {
            let name = self.name_ref(segment);
            let args = if i + 1 == segments.len() {
                self.alloc_list(type_args)
            } else {
                self.alloc_list(&[])
            };
            element = self.alloc(NodeKind::UserType {
                qualifier: element,
                name,
                type_args: args,
            });
        }
        if nullable {
            element = self.alloc(NodeKind::NullableType { inner: element });
        }
        self.alloc(NodeKind::TypeReference { element })
    }

    // Declarations

    pub fn modifiers(&mut self, tags: &[TokenTag]) -> NodeId {
        let leaves: Vec<NodeId> = tags.iter().map(|tag| self.leaf(*tag)).collect();
        let modifiers = self.alloc_list(&leaves);
        self.alloc(NodeKind::ModifierList { modifiers })
    }

    pub fn type_param(&mut self, name: &str) -> NodeId {
        let name = self.ident(name);
        self.alloc(NodeKind::TypeParameter { name })
    }

    pub fn type_param_list(&mut self, params: &[NodeId]) -> NodeId {
        let params = self.alloc_list(params);
        self.alloc(NodeKind::TypeParameterList { params })
    }

    pub fn param(&mut self, name: &str, type_ref: Option<NodeId>, default: Option<NodeId>) -> NodeId {
        let name = self.ident(name);
        self.alloc(NodeKind::Parameter {
            modifiers: NodeId::INVALID,
            name,
            type_ref: type_ref.into(),
            default: default.into(),
        })
    }

    pub fn param_list(&mut self, params: &[NodeId]) -> NodeId {
        let params = self.alloc_list(params);
        self.alloc(NodeKind::ParameterList { params })
    }

    pub fn primary_constructor(
        &mut self,
        type_params: Option<NodeId>,
        value_params: Option<NodeId>,
    ) -> NodeId {
        self.alloc(NodeKind::PrimaryConstructor {
            type_params: type_params.into(),
            value_params: value_params.into(),
        })
    }

    /// Class or interface declaration. `keyword` is `KwClass` or
    /// `KwInterface`; `members: None` means no body at all.
    pub fn class_decl(
        &mut self,
        keyword: TokenTag,
        name: &str,
        constructor: Option<NodeId>,
        members: Option<&[NodeId]>,
    ) -> NodeId {
        let keyword = self.leaf(keyword);
        let name = self.ident(name);
        let body = members.map_or(NodeId::INVALID, |members| {
            let members = self.alloc_list(members);
            self.alloc(NodeKind::ClassBody { members })
        });
        self.alloc(NodeKind::Class {
            modifiers: NodeId::INVALID,
            keyword,
            name,
            constructor: constructor.into(),
            body,
        })
    }

    pub fn property(&mut self, decl: PropertyDecl<'_>) -> NodeId {
        let name = self.ident(decl.name);
        let mut flags = NodeFlags::empty();
        flags.set(NodeFlags::MUTABLE, decl.mutable);
        flags.set(NodeFlags::DELEGATED, decl.delegated);
        self.alloc_flagged(
            NodeKind::Property {
                modifiers: decl.modifiers.into(),
                name,
                type_ref: decl.type_ref.into(),
                value: decl.value.into(),
            },
            flags,
        )
    }

    /// Attach a modifier list to a class, property or parameter.
    /// Other kinds are left untouched and `false` is returned.
    pub fn set_modifiers(&mut self, decl: NodeId, list: NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(decl.index()) else {
            return false;
        };
        match &mut node.kind {
            NodeKind::Class { modifiers, .. }
            | NodeKind::Property { modifiers, .. }
            | NodeKind::Parameter { modifiers, .. } => {
                *modifiers = list;
                true
            }
            _ => false,
        }
    }
}
