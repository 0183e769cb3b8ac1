//! Call matching.
//!
//! Pattern arguments are compared against the code call's arguments as the
//! resolver mapped them to parameters, not as they were written. Named
//! arguments therefore line up regardless of the order they appear in.
//!
//! Spread arguments get special treatment: `*arrayOf(a, b)` on one side
//! stands for the arguments `a, b` on the other.

use kssr_ir::{NodeId, NodeKind, SyntaxTree};
use smallvec::SmallVec;

use super::NodeMatcher;
use crate::resolve::TypeRef;

/// Pattern arguments against the flattened, parameter-ordered code
/// arguments, walked with one cursor per side.
struct ArgumentCorrespondence<'c> {
    pattern: &'c [NodeId],
    code: &'c [NodeId],
    pattern_index: usize,
    code_index: usize,
}

impl<'c> ArgumentCorrespondence<'c> {
    fn new(pattern: &'c [NodeId], code: &'c [NodeId]) -> Self {
        ArgumentCorrespondence {
            pattern,
            code,
            pattern_index: 0,
            code_index: 0,
        }
    }

    fn pattern_rest(&self) -> &'c [NodeId] {
        self.pattern.get(self.pattern_index..).unwrap_or(&[])
    }

    fn code_rest(&self) -> &'c [NodeId] {
        self.code.get(self.code_index..).unwrap_or(&[])
    }
}

/// Arguments of the call a spread argument spreads, as in `*intArrayOf(1, 2)`.
fn spread_source(tree: &SyntaxTree, arg: NodeId) -> Option<&[NodeId]> {
    let NodeKind::ValueArgument { expr, .. } = *tree.kind(arg)? else {
        return None;
    };
    match *tree.kind(expr)? {
        NodeKind::Call { args, .. } => Some(tree.list(args)),
        _ => None,
    }
}

impl NodeMatcher<'_> {
    #[tracing::instrument(level = "trace", skip_all, fields(pattern = ?pattern_call, code = ?code_call))]
    pub(super) fn match_call(&mut self, pattern_call: NodeId, code_call: NodeId) -> bool {
        let (pattern, code) = (self.pattern, self.code);
        let Some(&NodeKind::Call {
            callee,
            type_args,
            args,
        }) = pattern.kind(pattern_call)
        else {
            return false;
        };
        let Some(&NodeKind::Call {
            callee: code_callee,
            ..
        }) = code.kind(code_call)
        else {
            return false;
        };

        if !self.match_nodes(callee, code_callee) {
            return false;
        }

        let Some(resolved) = self.resolver.resolve_call(code, code_call) else {
            tracing::trace!("code call is unresolved");
            return false;
        };
        if !resolved.is_success() {
            tracing::trace!(status = ?resolved.status, "code call did not resolve cleanly");
            return false;
        }
        if !self.match_type_arguments(pattern.list(type_args), &resolved.type_arguments) {
            tracing::trace!("type arguments differ");
            return false;
        }
        let Some(code_args) = resolved.flattened_arguments() else {
            tracing::trace!("code call has no argument mapping");
            return false;
        };

        let mut walk = ArgumentCorrespondence::new(pattern.list(args), &code_args);
        self.match_arguments(&mut walk)
    }

    /// Written pattern type arguments against the resolved ones, all by
    /// short name or all by fully qualified name. The lists compare whole,
    /// so a pattern without type arguments only matches a call that
    /// resolves to none.
    fn match_type_arguments(&self, pattern_type_args: &[NodeId], resolved: &[TypeRef]) -> bool {
        if pattern_type_args.len() != resolved.len() {
            return false;
        }
        let (pattern, code) = (self.pattern, self.code);
        let written: SmallVec<[String; 2]> =
            pattern_type_args.iter().map(|ty| pattern.text(*ty)).collect();
        let all_equal = |select: fn(&TypeRef) -> kssr_ir::Name| {
            written
                .iter()
                .zip(resolved)
                .all(|(text, ty)| text == code.lookup(select(ty)))
        };
        all_equal(|ty| ty.short_name) || all_equal(|ty| ty.fq_name)
    }

    /// Walk the pattern arguments against the code arguments, expanding
    /// spreads. A named pattern argument that fails positionally hands the
    /// rest of both lists to name-based reconciliation. The walk is driven
    /// by the pattern: running out of code arguments fails, code arguments
    /// left over once the pattern is done do not.
    fn match_arguments(&mut self, walk: &mut ArgumentCorrespondence<'_>) -> bool {
        let (pattern, code) = (self.pattern, self.code);

        while let Some(&pattern_arg) = walk.pattern.get(walk.pattern_index) {
            let Some(&code_arg) = walk.code.get(walk.code_index) else {
                tracing::trace!(argument = walk.pattern_index, "code arguments ran out");
                return false;
            };
            let pattern_spread = pattern.flags(pattern_arg).is_spread();
            let code_spread = code.flags(code_arg).is_spread();

            if pattern_spread && !code_spread {
                // `*arrayOf(p1, p2)` in the pattern against plain `c1, c2`.
                let Some(inner) = spread_source(pattern, pattern_arg) else {
                    return false;
                };
                for &inner_arg in inner {
                    let Some(&code_arg) = walk.code.get(walk.code_index) else {
                        return false;
                    };
                    if !self.match_nodes(inner_arg, code_arg) {
                        return false;
                    }
                    walk.code_index += 1;
                }
                walk.pattern_index += 1;
            } else if code_spread && !pattern_spread {
                // Plain `p1, p2` in the pattern against `*arrayOf(c1, c2)`.
                let Some(inner) = spread_source(code, code_arg) else {
                    return false;
                };
                for &inner_arg in inner {
                    let Some(&pattern_arg) = walk.pattern.get(walk.pattern_index) else {
                        return false;
                    };
                    if !self.match_nodes(pattern_arg, inner_arg) {
                        return false;
                    }
                    walk.pattern_index += 1;
                }
                walk.code_index += 1;
            } else if self.match_nodes(pattern_arg, code_arg) {
                walk.pattern_index += 1;
                walk.code_index += 1;
            } else if pattern.argument_name(pattern_arg).is_some() {
                return self.match_named_remainder(walk.pattern_rest(), walk.code_rest());
            } else {
                tracing::trace!(argument = walk.pattern_index, "positional argument differs");
                return false;
            }
        }
        true
    }

    /// Whatever is left on both sides, paired after sorting each side by
    /// argument name. Unnamed arguments sort first. Every remaining pattern
    /// argument needs a partner; surplus code arguments are ignored.
    fn match_named_remainder(&mut self, pattern_rest: &[NodeId], code_rest: &[NodeId]) -> bool {
        if pattern_rest.len() > code_rest.len() {
            tracing::trace!(
                pattern = pattern_rest.len(),
                code = code_rest.len(),
                "too few code arguments"
            );
            return false;
        }
        let (pattern, code) = (self.pattern, self.code);
        let mut pattern_sorted: SmallVec<[NodeId; 8]> = pattern_rest.into();
        pattern_sorted.sort_by(|a, b| pattern.argument_name(*a).cmp(&pattern.argument_name(*b)));
        let mut code_sorted: SmallVec<[NodeId; 8]> = code_rest.into();
        code_sorted.sort_by(|a, b| code.argument_name(*a).cmp(&code.argument_name(*b)));

        pattern_sorted
            .iter()
            .zip(&code_sorted)
            .all(|(&p, &c)| self.match_nodes(p, c))
    }
}
