//! Syntax node kinds.
//!
//! The set of kinds is closed: the matcher handles every variant
//! exhaustively. Children are `NodeId`s (absent = `NodeId::INVALID`) and
//! child lists are `NodeRange`s into the tree's id buffer.

use crate::{Name, NodeFlags, NodeId, NodeRange, Span, TokenTag};

/// One node of a pattern or code tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub flags: NodeFlags,
    pub span: Span,
}

/// Node variants, one per syntax construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// Token leaf: identifier, keyword, modifier or operator.
    Leaf { tag: TokenTag, text: Name },

    // Expressions
    /// Literal constant: `42`, `'c'`, `true`, `null`.
    Constant { text: Name },
    /// Name reference. `ident` is the identifier leaf; with
    /// `NodeFlags::LABEL` the node is a label reference and renders as
    /// `@ident`.
    SimpleName { ident: NodeId },
    /// `array[indices]`; `indices` is an `Indices` node.
    ArrayAccess { array: NodeId, indices: NodeId },
    Indices { items: NodeRange },
    Binary {
        op: TokenTag,
        left: NodeId,
        right: NodeId,
    },
    Prefix { op: TokenTag, operand: NodeId },
    Postfix { op: TokenTag, operand: NodeId },
    Block { statements: NodeRange },
    /// `receiver.selector`
    DotQualified { receiver: NodeId, selector: NodeId },
    /// `{ params -> body }`; `literal` is a `FunctionLiteral`.
    Lambda { literal: NodeId },
    /// Parameter list and body of a lambda.
    FunctionLiteral { params: NodeId, body: NodeId },
    /// `callee<type_args>(args)`; type arguments are `TypeReference`s and
    /// arguments are `ValueArgument`s.
    Call {
        callee: NodeId,
        type_args: NodeRange,
        args: NodeRange,
    },
    /// `name = expr`, `*expr` (`NodeFlags::SPREAD`) or plain `expr`. `name`
    /// is a `SimpleName` when the argument is named.
    ValueArgument { name: NodeId, expr: NodeId },
    If {
        cond: NodeId,
        then_branch: NodeId,
        else_branch: NodeId,
    },

    // Expressions with label
    Break { label: NodeId },
    Continue { label: NodeId },
    This { label: NodeId },
    /// `super<qualifier>@label`
    Super { label: NodeId, qualifier: NodeId },
    /// `return@label value`
    Return { label: NodeId, value: NodeId },

    // String templates
    StringTemplate { entries: NodeRange },
    LiteralEntry { text: Name },
    EscapeEntry { text: Name },
    /// `$name`
    SimpleNameEntry { expr: NodeId },
    /// `${expr}`
    BlockEntry { expr: NodeId },

    // Types
    /// Type annotation wrapping a type element (`UserType`, `NullableType`).
    TypeReference { element: NodeId },
    /// `qualifier.name<type_args>`
    UserType {
        qualifier: NodeId,
        name: NodeId,
        type_args: NodeRange,
    },
    NullableType { inner: NodeId },

    // Declarations
    ModifierList { modifiers: NodeRange },
    TypeParameter { name: NodeId },
    TypeParameterList { params: NodeRange },
    /// `name: type_ref = default`
    Parameter {
        modifiers: NodeId,
        name: NodeId,
        type_ref: NodeId,
        default: NodeId,
    },
    ParameterList { params: NodeRange },
    PrimaryConstructor { type_params: NodeId, value_params: NodeId },
    /// `modifiers keyword name ctor body`; `keyword` is the `class` or
    /// `interface` leaf.
    Class {
        modifiers: NodeId,
        keyword: NodeId,
        name: NodeId,
        constructor: NodeId,
        body: NodeId,
    },
    ClassBody { members: NodeRange },
    /// `modifiers val|var name: type_ref = value`. `NodeFlags::MUTABLE` marks
    /// `var`, `NodeFlags::DELEGATED` marks `by value`.
    Property {
        modifiers: NodeId,
        name: NodeId,
        type_ref: NodeId,
        value: NodeId,
    },
}

impl NodeKind {
    /// True for `break`, `continue`, `this`, `super` and `return`.
    pub const fn is_expression_with_label(&self) -> bool {
        matches!(
            self,
            NodeKind::Break { .. }
                | NodeKind::Continue { .. }
                | NodeKind::This { .. }
                | NodeKind::Super { .. }
                | NodeKind::Return { .. }
        )
    }
}
