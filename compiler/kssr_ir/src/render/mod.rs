//! Canonical source text of a subtree.
//!
//! Trees do not keep their original source, so text comparisons (constants,
//! binding images, declared type names) go through this renderer. Layout is
//! canonical: single spaces around binary operators, `", "` between list
//! items, `"; "` between statements.

use std::fmt::Write;

use crate::{ensure_sufficient_stack, NodeFlags, NodeId, NodeKind, NodeRange, SyntaxTree};

impl SyntaxTree {
    /// Rendered text of `id`; empty for absent nodes.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.render(id, &mut out);
        out
    }

    fn render_list(&self, range: NodeRange, sep: &str, out: &mut String) {
        for (i, item) in self.list(range).iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            self.render(*item, out);
        }
    }

    fn render_label(&self, label: NodeId, out: &mut String) {
        if label.is_present() {
            self.render(label, out);
        }
    }

    fn render(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        ensure_sufficient_stack(|| match node.kind {
            NodeKind::Leaf { text, .. }
            | NodeKind::Constant { text }
            | NodeKind::LiteralEntry { text }
            | NodeKind::EscapeEntry { text } => out.push_str(self.lookup(text)),
            NodeKind::SimpleName { ident } => {
                if node.flags.contains(NodeFlags::LABEL) {
                    out.push('@');
                }
                self.render(ident, out);
            }
            NodeKind::ArrayAccess { array, indices } => {
                self.render(array, out);
                out.push('[');
                self.render(indices, out);
                out.push(']');
            }
            NodeKind::Indices { items } => self.render_list(items, ", ", out),
            NodeKind::Binary { op, left, right } => {
                self.render(left, out);
                let _ = write!(out, " {} ", op.fixed_text().unwrap_or_default());
                self.render(right, out);
            }
            NodeKind::Prefix { op, operand } => {
                out.push_str(op.fixed_text().unwrap_or_default());
                self.render(operand, out);
            }
            NodeKind::Postfix { op, operand } => {
                self.render(operand, out);
                out.push_str(op.fixed_text().unwrap_or_default());
            }
            NodeKind::Block { statements } => {
                if statements.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("{ ");
                    self.render_list(statements, "; ", out);
                    out.push_str(" }");
                }
            }
            NodeKind::DotQualified { receiver, selector } => {
                self.render(receiver, out);
                out.push('.');
                self.render(selector, out);
            }
            NodeKind::Lambda { literal } => self.render(literal, out),
            NodeKind::FunctionLiteral { params, body } => {
                out.push('{');
                if let Some(&NodeKind::ParameterList { params }) = self.kind(params) {
                    out.push(' ');
                    self.render_list(params, ", ", out);
                    out.push_str(" ->");
                }
                if let Some(&NodeKind::Block { statements }) = self.kind(body) {
                    if !statements.is_empty() {
                        out.push(' ');
                        self.render_list(statements, "; ", out);
                    }
                }
                out.push_str(" }");
            }
            NodeKind::Call {
                callee,
                type_args,
                args,
            } => {
                self.render(callee, out);
                if !type_args.is_empty() {
                    out.push('<');
                    self.render_list(type_args, ", ", out);
                    out.push('>');
                }
                out.push('(');
                self.render_list(args, ", ", out);
                out.push(')');
            }
            NodeKind::ValueArgument { name, expr } => {
                if node.flags.contains(NodeFlags::SPREAD) {
                    out.push('*');
                }
                if name.is_present() {
                    self.render(name, out);
                    out.push_str(" = ");
                }
                self.render(expr, out);
            }
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("if (");
                self.render(cond, out);
                out.push_str(") ");
                self.render(then_branch, out);
                if else_branch.is_present() {
                    out.push_str(" else ");
                    self.render(else_branch, out);
                }
            }
            NodeKind::Break { label } => {
                out.push_str("break");
                self.render_label(label, out);
            }
            NodeKind::Continue { label } => {
                out.push_str("continue");
                self.render_label(label, out);
            }
            NodeKind::This { label } => {
                out.push_str("this");
                self.render_label(label, out);
            }
            NodeKind::Super { label, qualifier } => {
                out.push_str("super");
                if qualifier.is_present() {
                    out.push('<');
                    self.render(qualifier, out);
                    out.push('>');
                }
                self.render_label(label, out);
            }
            NodeKind::Return { label, value } => {
                out.push_str("return");
                self.render_label(label, out);
                if value.is_present() {
                    out.push(' ');
                    self.render(value, out);
                }
            }
            NodeKind::StringTemplate { entries } => {
                out.push('"');
                self.render_list(entries, "", out);
                out.push('"');
            }
            NodeKind::SimpleNameEntry { expr } => {
                out.push('$');
                self.render(expr, out);
            }
            NodeKind::BlockEntry { expr } => {
                out.push_str("${");
                self.render(expr, out);
                out.push('}');
            }
            NodeKind::TypeReference { element } => self.render(element, out),
            NodeKind::UserType {
                qualifier,
                name,
                type_args,
            } => {
                if qualifier.is_present() {
                    self.render(qualifier, out);
                    out.push('.');
                }
                self.render(name, out);
                if !type_args.is_empty() {
                    out.push('<');
                    self.render_list(type_args, ", ", out);
                    out.push('>');
                }
            }
            NodeKind::NullableType { inner } => {
                self.render(inner, out);
                out.push('?');
            }
            NodeKind::ModifierList { modifiers } => self.render_list(modifiers, " ", out),
            NodeKind::TypeParameter { name } => self.render(name, out),
            NodeKind::TypeParameterList { params } => {
                out.push('<');
                self.render_list(params, ", ", out);
                out.push('>');
            }
            NodeKind::Parameter {
                modifiers,
                name,
                type_ref,
                default,
            } => {
                self.render_modifiers(modifiers, out);
                self.render(name, out);
                if type_ref.is_present() {
                    out.push_str(": ");
                    self.render(type_ref, out);
                }
                if default.is_present() {
                    out.push_str(" = ");
                    self.render(default, out);
                }
            }
            NodeKind::ParameterList { params } => {
                out.push('(');
                self.render_list(params, ", ", out);
                out.push(')');
            }
            NodeKind::PrimaryConstructor {
                type_params,
                value_params,
            } => {
                self.render(type_params, out);
                self.render(value_params, out);
            }
            NodeKind::Class {
                modifiers,
                keyword,
                name,
                constructor,
                body,
            } => {
                self.render_modifiers(modifiers, out);
                self.render(keyword, out);
                out.push(' ');
                self.render(name, out);
                self.render(constructor, out);
                if body.is_present() {
                    out.push(' ');
                    self.render(body, out);
                }
            }
            NodeKind::ClassBody { members } => {
                if members.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("{ ");
                    self.render_list(members, "; ", out);
                    out.push_str(" }");
                }
            }
            NodeKind::Property {
                modifiers,
                name,
                type_ref,
                value,
            } => {
                self.render_modifiers(modifiers, out);
                out.push_str(if node.flags.contains(NodeFlags::MUTABLE) {
                    "var "
                } else {
                    "val "
                });
                self.render(name, out);
                if type_ref.is_present() {
                    out.push_str(": ");
                    self.render(type_ref, out);
                }
                if value.is_present() {
                    out.push_str(if node.flags.contains(NodeFlags::DELEGATED) {
                        " by "
                    } else {
                        " = "
                    });
                    self.render(value, out);
                }
            }
        });
    }

    fn render_modifiers(&self, modifiers: NodeId, out: &mut String) {
        let Some(&NodeKind::ModifierList { modifiers: list }) = self.kind(modifiers) else {
            return;
        };
        if !list.is_empty() {
            self.render_list(list, " ", out);
            out.push(' ');
        }
    }
}
