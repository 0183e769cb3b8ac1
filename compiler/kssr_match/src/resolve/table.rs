//! Table-driven resolver.
//!
//! `SignatureTable` knows a fixed set of functions and types, declared up
//! front. It maps call arguments to parameters the way Kotlin does for
//! ordinary calls: positional arguments first, then named ones, with a
//! vararg parameter absorbing every positional and spread argument that
//! reaches it. Enough for hosts without a type checker, and for tests.

use kssr_ir::{Name, NodeId, NodeKind, SharedInterner, SyntaxTree};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{ArgumentSlot, ResolutionStatus, ResolvedCall, Resolver, TypeRef};

/// How a parameter is declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Param<'a> {
    Required(&'a str),
    /// Has a default value and may be omitted.
    Defaulted(&'a str),
    Vararg(&'a str),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParameterSignature {
    pub name: Name,
    pub vararg: bool,
    pub has_default: bool,
}

/// One overload.
#[derive(Clone, Debug, Default)]
pub struct FunctionSignature {
    parameters: Vec<ParameterSignature>,
    type_arguments: Vec<TypeRef>,
    returns: Option<TypeRef>,
}

impl FunctionSignature {
    #[inline]
    pub fn parameters(&self) -> &[ParameterSignature] {
        &self.parameters
    }

    /// Type argument reported when the call has none written out.
    pub fn type_argument(&mut self, ty: TypeRef) -> &mut Self {
        self.type_arguments.push(ty);
        self
    }

    pub fn returns(&mut self, ty: TypeRef) -> &mut Self {
        self.returns = Some(ty);
        self
    }
}

/// Resolver over declared signatures.
///
/// Must share its interner with the code trees it resolves; the names in
/// returned `TypeRef`s and `ArgumentSlot`s are read back through the code
/// tree.
pub struct SignatureTable {
    interner: SharedInterner,
    functions: FxHashMap<Name, Vec<FunctionSignature>>,
    /// Keyed by both short and fully qualified name.
    types: FxHashMap<Name, TypeRef>,
}

const KOTLIN_BUILTINS: &[&str] = &[
    "Any", "Nothing", "Unit", "Boolean", "Char", "String", "Byte", "Short", "Int", "Long",
    "Float", "Double",
];

impl SignatureTable {
    pub fn new(interner: SharedInterner) -> Self {
        SignatureTable {
            interner,
            functions: FxHashMap::default(),
            types: FxHashMap::default(),
        }
    }

    /// Table that already knows the `kotlin.*` builtin types.
    pub fn with_builtins(interner: SharedInterner) -> Self {
        let mut table = Self::new(interner);
        for short in KOTLIN_BUILTINS {
            table.declare_type(short, &format!("kotlin.{short}"));
        }
        table
    }

    pub fn declare_type(&mut self, short_name: &str, fq_name: &str) -> TypeRef {
        let ty = TypeRef {
            short_name: self.interner.intern(short_name),
            fq_name: self.interner.intern(fq_name),
        };
        self.types.insert(ty.short_name, ty);
        self.types.insert(ty.fq_name, ty);
        ty
    }

    /// Type written as `text`; unknown types resolve to themselves.
    pub fn type_named(&self, text: &str) -> TypeRef {
        let name = self.interner.intern(text);
        self.types.get(&name).copied().unwrap_or(TypeRef {
            short_name: name,
            fq_name: name,
        })
    }

    /// Add an overload of `name`.
    pub fn declare_function(&mut self, name: &str, params: &[Param<'_>]) -> &mut FunctionSignature {
        let parameters = params
            .iter()
            .map(|param| {
                let (text, vararg, has_default) = match *param {
                    Param::Required(text) => (text, false, false),
                    Param::Defaulted(text) => (text, false, true),
                    Param::Vararg(text) => (text, true, false),
                };
                ParameterSignature {
                    name: self.interner.intern(text),
                    vararg,
                    has_default,
                }
            })
            .collect();
        let overloads = self.functions.entry(self.interner.intern(name)).or_default();
        overloads.push(FunctionSignature {
            parameters,
            ..FunctionSignature::default()
        });
        let last = overloads.len() - 1;
        &mut overloads[last]
    }

    /// The single overload whose parameters accept `call`'s arguments.
    fn select<'t>(
        &'t self,
        code: &SyntaxTree,
        call: NodeId,
    ) -> Option<Result<(&'t FunctionSignature, Vec<ArgumentSlot>), ResolutionStatus>> {
        let NodeKind::Call { callee, args, .. } = *code.kind(call)? else {
            return None;
        };
        let ident = code.referenced_name(callee)?;
        let name = self.interner.intern(code.leaf_text(ident)?);
        let overloads = self.functions.get(&name)?;
        let arguments = code.list(args);

        let mut fitting = overloads.iter().filter_map(|signature| {
            self.map_arguments(code, signature, arguments)
                .map(|slots| (signature, slots))
        });
        let Some(first) = fitting.next() else {
            return Some(Err(ResolutionStatus::Failed));
        };
        if fitting.next().is_some() {
            return Some(Err(ResolutionStatus::Ambiguous));
        }
        Some(Ok(first))
    }

    fn map_arguments(
        &self,
        code: &SyntaxTree,
        signature: &FunctionSignature,
        arguments: &[NodeId],
    ) -> Option<Vec<ArgumentSlot>> {
        let params = &signature.parameters;
        let mut slots: Vec<ArgumentSlot> = params
            .iter()
            .map(|param| ArgumentSlot {
                parameter: param.name,
                arguments: SmallVec::new(),
            })
            .collect();
        let mut next_positional = 0;
        let mut named_seen = false;

        for &arg in arguments {
            let index = match code.argument_name(arg) {
                Some(name) => {
                    named_seen = true;
                    let index = params
                        .iter()
                        .position(|param| self.interner.lookup(param.name) == name)?;
                    if !slots[index].arguments.is_empty() {
                        return None;
                    }
                    index
                }
                None => {
                    if named_seen {
                        return None;
                    }
                    let index = next_positional;
                    if !params.get(index)?.vararg {
                        next_positional += 1;
                    }
                    index
                }
            };
            if code.flags(arg).is_spread() && !params[index].vararg {
                return None;
            }
            slots[index].arguments.push(arg);
        }

        let complete = params
            .iter()
            .zip(&slots)
            .all(|(param, slot)| param.vararg || param.has_default || !slot.arguments.is_empty());
        complete.then_some(slots)
    }

    fn infer(&self, code: &SyntaxTree, expr: NodeId) -> Option<TypeRef> {
        match *code.kind(expr)? {
            NodeKind::Constant { text } => literal_type(code.lookup(text)).map(|ty| self.type_named(ty)),
            NodeKind::StringTemplate { .. } => Some(self.type_named("String")),
            NodeKind::Prefix { operand, .. } => self.infer(code, operand),
            NodeKind::Call { .. } => match self.select(code, expr)? {
                Ok((signature, _)) => signature.returns,
                Err(_) => None,
            },
            _ => None,
        }
    }
}

/// Builtin type name of a literal.
fn literal_type(text: &str) -> Option<&'static str> {
    let ty = match text {
        "true" | "false" => "Boolean",
        "null" => return None,
        _ if text.starts_with('\'') => "Char",
        _ if text.starts_with('"') => "String",
        _ if text.starts_with("0x") || text.starts_with("0b") => {
            if text.ends_with('L') {
                "Long"
            } else {
                "Int"
            }
        }
        _ if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
            if text.ends_with('L') {
                "Long"
            } else if text.ends_with(['f', 'F']) {
                "Float"
            } else if text.contains(['.', 'e', 'E']) {
                "Double"
            } else {
                "Int"
            }
        }
        _ => return None,
    };
    Some(ty)
}

impl Resolver for SignatureTable {
    fn resolve_call(&self, code: &SyntaxTree, call: NodeId) -> Option<ResolvedCall> {
        let (signature, slots) = match self.select(code, call)? {
            Ok(selected) => selected,
            Err(status) => return Some(ResolvedCall::failed(status)),
        };
        let explicit = match code.kind(call) {
            Some(&NodeKind::Call { type_args, .. }) => code.list(type_args),
            _ => &[],
        };
        let type_arguments = if explicit.is_empty() {
            signature.type_arguments.clone()
        } else {
            explicit
                .iter()
                .map(|ty| self.type_named(&code.text(*ty)))
                .collect()
        };
        Some(ResolvedCall {
            status: ResolutionStatus::Success,
            type_arguments,
            arguments_by_parameter: Some(slots),
        })
    }

    fn resolve_type(&self, code: &SyntaxTree, declaration: NodeId) -> Option<TypeRef> {
        let (type_ref, value) = match *code.kind(declaration)? {
            NodeKind::Property {
                type_ref, value, ..
            } => (type_ref, value),
            NodeKind::Parameter {
                type_ref, default, ..
            } => (type_ref, default),
            _ => return None,
        };
        if type_ref.is_present() {
            return Some(self.type_named(&code.text(type_ref)));
        }
        self.infer(code, value)
    }
}
