//! Rules for expressions, jump expressions and string templates.

use kssr_ir::{NodeId, NodeKind};

use super::NodeMatcher;

impl NodeMatcher<'_> {
    /// Expressions whose code counterpart must be of the same kind.
    pub(super) fn match_expression(
        &mut self,
        pattern_kind: NodeKind,
        p: NodeId,
        code_kind: NodeKind,
        c: NodeId,
    ) -> bool {
        let (pattern, code) = (self.pattern, self.code);
        match (pattern_kind, code_kind) {
            (
                NodeKind::ArrayAccess { array, indices },
                NodeKind::ArrayAccess {
                    array: code_array,
                    indices: code_indices,
                },
            ) => self.match_nodes(array, code_array) && self.match_sons(indices, code_indices),
            (NodeKind::Indices { items }, NodeKind::Indices { items: code_items }) => {
                self.match_lists(items, code_items)
            }
            (
                NodeKind::Binary { op, left, right },
                NodeKind::Binary {
                    op: code_op,
                    left: code_left,
                    right: code_right,
                },
            ) => {
                op == code_op
                    && self.match_nodes(left, code_left)
                    && self.match_nodes(right, code_right)
            }
            (
                NodeKind::Prefix { op, operand },
                NodeKind::Prefix {
                    op: code_op,
                    operand: code_operand,
                },
            )
            | (
                NodeKind::Postfix { op, operand },
                NodeKind::Postfix {
                    op: code_op,
                    operand: code_operand,
                },
            ) => op == code_op && self.match_nodes(operand, code_operand),
            (
                NodeKind::Block { statements },
                NodeKind::Block {
                    statements: code_statements,
                },
            ) => self.match_lists(statements, code_statements),
            (
                NodeKind::DotQualified { receiver, selector },
                NodeKind::DotQualified {
                    receiver: code_receiver,
                    selector: code_selector,
                },
            ) => {
                self.match_nodes(receiver, code_receiver)
                    && self.match_nodes(selector, code_selector)
            }
            (NodeKind::Lambda { literal }, NodeKind::Lambda { literal: code_literal }) => {
                self.match_nodes(literal, code_literal)
                    && self.match_nodes(pattern.lambda_body(p), code.lambda_body(c))
            }
            // The body is compared by the enclosing lambda.
            (
                NodeKind::FunctionLiteral { params, .. },
                NodeKind::FunctionLiteral {
                    params: code_params,
                    ..
                },
            ) => self.match_nodes(params, code_params),
            (
                NodeKind::ValueArgument { name, expr },
                NodeKind::ValueArgument {
                    name: code_name,
                    expr: code_expr,
                },
            ) => {
                pattern.flags(p).is_spread() == code.flags(c).is_spread()
                    && self.match_nodes(name, code_name)
                    && self.match_nodes(expr, code_expr)
            }
            (
                NodeKind::If {
                    cond,
                    then_branch,
                    else_branch,
                },
                NodeKind::If {
                    cond: code_cond,
                    then_branch: code_then,
                    else_branch: code_else,
                },
            ) => {
                self.match_nodes(cond, code_cond)
                    && self.match_nodes(then_branch, code_then)
                    && (!else_branch.is_present() || self.match_nodes(else_branch, code_else))
            }
            _ => false,
        }
    }

    /// `break`, `continue`, `this`, `super` and `return`: same kind, same
    /// label, and for `super`/`return` the same qualifier or value.
    pub(super) fn match_expression_with_label(
        &mut self,
        pattern_kind: NodeKind,
        code_kind: NodeKind,
    ) -> bool {
        if !code_kind.is_expression_with_label() {
            return false;
        }
        match (pattern_kind, code_kind) {
            (NodeKind::Break { label }, NodeKind::Break { label: code_label })
            | (NodeKind::Continue { label }, NodeKind::Continue { label: code_label })
            | (NodeKind::This { label }, NodeKind::This { label: code_label }) => {
                self.match_nodes(label, code_label)
            }
            (
                NodeKind::Super { label, qualifier },
                NodeKind::Super {
                    label: code_label,
                    qualifier: code_qualifier,
                },
            ) => self.match_nodes(label, code_label) && self.match_nodes(qualifier, code_qualifier),
            (
                NodeKind::Return { label, value },
                NodeKind::Return {
                    label: code_label,
                    value: code_value,
                },
            ) => self.match_nodes(label, code_label) && self.match_nodes(value, code_value),
            _ => false,
        }
    }

    /// String templates and their entries.
    pub(super) fn match_template(
        &mut self,
        pattern_kind: NodeKind,
        p: NodeId,
        code_kind: NodeKind,
        c: NodeId,
    ) -> bool {
        match (pattern_kind, code_kind) {
            (
                NodeKind::StringTemplate { entries },
                NodeKind::StringTemplate {
                    entries: code_entries,
                },
            ) => self.match_lists(entries, code_entries),
            // A literal entry may stand for any code node through a variable.
            (NodeKind::LiteralEntry { .. }, _)
            | (NodeKind::EscapeEntry { .. }, NodeKind::EscapeEntry { .. }) => {
                self.match_text_or_variable(p, c)
            }
            (NodeKind::SimpleNameEntry { expr }, NodeKind::SimpleNameEntry { expr: code_expr }) => {
                self.match_text_or_variable(expr, code_expr)
            }
            (NodeKind::BlockEntry { expr }, NodeKind::BlockEntry { expr: code_expr }) => {
                self.match_nodes(expr, code_expr)
            }
            _ => false,
        }
    }
}
