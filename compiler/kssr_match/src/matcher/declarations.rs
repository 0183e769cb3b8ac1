//! Rules for types and declarations.

use kssr_ir::{NodeId, NodeKind};

use super::NodeMatcher;

impl NodeMatcher<'_> {
    pub(super) fn match_type(&mut self, pattern_kind: NodeKind, code_kind: NodeKind) -> bool {
        match (pattern_kind, code_kind) {
            (
                NodeKind::TypeReference { element },
                NodeKind::TypeReference {
                    element: code_element,
                },
            ) => self.match_sons(element, code_element),
            (
                NodeKind::UserType {
                    qualifier,
                    name,
                    type_args,
                },
                NodeKind::UserType {
                    qualifier: code_qualifier,
                    name: code_name,
                    type_args: code_type_args,
                },
            ) => {
                self.match_nodes(qualifier, code_qualifier)
                    && self.match_nodes(name, code_name)
                    && self.match_lists(type_args, code_type_args)
            }
            (NodeKind::NullableType { inner }, NodeKind::NullableType { inner: code_inner }) => {
                self.match_nodes(inner, code_inner)
            }
            _ => false,
        }
    }

    /// Modifier lists, parameters and the pieces of a class header.
    pub(super) fn match_declaration_part(
        &mut self,
        pattern_kind: NodeKind,
        code_kind: NodeKind,
    ) -> bool {
        match (pattern_kind, code_kind) {
            (
                NodeKind::ModifierList { modifiers },
                NodeKind::ModifierList {
                    modifiers: code_modifiers,
                },
            ) => self.match_lists(modifiers, code_modifiers),
            (NodeKind::TypeParameter { name }, NodeKind::TypeParameter { name: code_name }) => {
                self.match_text_or_variable(name, code_name)
            }
            // Declaration order of parameters is not significant.
            (
                NodeKind::TypeParameterList { params },
                NodeKind::TypeParameterList {
                    params: code_params,
                },
            )
            | (
                NodeKind::ParameterList { params },
                NodeKind::ParameterList {
                    params: code_params,
                },
            ) => self.match_lists_in_any_order(params, code_params),
            (
                NodeKind::Parameter {
                    name,
                    type_ref,
                    default,
                    ..
                },
                NodeKind::Parameter {
                    name: code_name,
                    type_ref: code_type,
                    default: code_default,
                    ..
                },
            ) => {
                self.match_text_or_variable(name, code_name)
                    && self.match_nodes(type_ref, code_type)
                    && self.match_nodes(default, code_default)
            }
            (
                NodeKind::PrimaryConstructor {
                    type_params,
                    value_params,
                },
                NodeKind::PrimaryConstructor {
                    type_params: code_type_params,
                    value_params: code_value_params,
                },
            ) => {
                self.match_nodes(type_params, code_type_params)
                    && self.match_nodes(value_params, code_value_params)
            }
            (NodeKind::ClassBody { members }, NodeKind::ClassBody { members: code_members }) => {
                self.match_lists_in_any_order(members, code_members)
            }
            _ => false,
        }
    }

    /// Class header first, then members in any order.
    pub(super) fn match_class(&mut self, pattern_kind: NodeKind, code_kind: NodeKind) -> bool {
        let (
            NodeKind::Class {
                modifiers,
                keyword,
                name,
                constructor,
                body,
            },
            NodeKind::Class {
                modifiers: code_modifiers,
                keyword: code_keyword,
                name: code_name,
                constructor: code_constructor,
                body: code_body,
            },
        ) = (pattern_kind, code_kind)
        else {
            return false;
        };
        self.match_nodes(constructor, code_constructor)
            && self.match_text_or_variable(name, code_name)
            && self.match_nodes(keyword, code_keyword)
            && self.match_nodes(modifiers, code_modifiers)
            && self.match_sons_in_any_order(body, code_body)
    }

    /// Properties compare the code's resolved type against the written
    /// pattern type, then modifiers, mutability, name and initializer.
    pub(super) fn match_property(
        &mut self,
        pattern_kind: NodeKind,
        p: NodeId,
        code_kind: NodeKind,
        c: NodeId,
    ) -> bool {
        let (
            NodeKind::Property {
                modifiers,
                name,
                type_ref,
                value,
            },
            NodeKind::Property {
                modifiers: code_modifiers,
                name: code_name,
                value: code_value,
                ..
            },
        ) = (pattern_kind, code_kind)
        else {
            return false;
        };
        let (pattern, code) = (self.pattern, self.code);

        let type_matched = match self.resolver.resolve_type(code, c) {
            None => !type_ref.is_present(),
            Some(_) if !type_ref.is_present() => true,
            Some(ty) => {
                let written = pattern.text(type_ref);
                self.options.texts_equal(&written, code.lookup(ty.short_name))
                    || self.options.texts_equal(&written, code.lookup(ty.fq_name))
            }
        };
        if !type_matched {
            tracing::trace!(property = ?c, "property type differs");
            return false;
        }

        self.match_nodes(modifiers, code_modifiers)
            && pattern.flags(p).is_mutable() == code.flags(c).is_mutable()
            && self.match_text_or_variable(name, code_name)
            && (!value.is_present() || self.match_nodes(value, code_value))
    }
}
