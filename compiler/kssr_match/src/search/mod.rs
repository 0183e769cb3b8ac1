//! Searching code trees for occurrences of a pattern.
//!
//! Every node of a code tree is a candidate. Each candidate is matched
//! with a fresh binding store, so bindings never leak between candidates.

use kssr_ir::{NodeId, Span, SyntaxTree};
use rayon::prelude::*;

use crate::binding::{PatternVariables, SubstitutionStore};
use crate::resolve::Resolver;
use crate::{MatchOptions, Matcher};

/// One occurrence of the pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub node: NodeId,
    pub span: Span,
    /// `(variable, text)` in variable declaration order.
    pub bindings: Vec<(String, String)>,
}

impl MatchResult {
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, text)| text.as_str())
    }
}

/// A compiled search: a pattern root plus its variables and options.
pub struct Searcher<'a> {
    pattern: &'a SyntaxTree,
    root: NodeId,
    variables: &'a PatternVariables,
    options: MatchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(pattern: &'a SyntaxTree, root: NodeId, variables: &'a PatternVariables) -> Self {
        Searcher {
            pattern,
            root,
            variables,
            options: MatchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Occurrences in `code`, in pre-order of the code tree.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = code.len()))]
    pub fn find_matches(&self, code: &SyntaxTree, resolver: &dyn Resolver) -> Vec<MatchResult> {
        let matcher = Matcher::new(self.pattern, code, resolver).with_options(self.options);
        let results: Vec<MatchResult> = code
            .descendants(code.root())
            .into_iter()
            .filter_map(|candidate| {
                let mut store = SubstitutionStore::new(self.variables);
                matcher
                    .is_match(self.root, candidate, &mut store)
                    .then(|| MatchResult {
                        node: candidate,
                        span: code.span(candidate),
                        bindings: store.resolved(),
                    })
            })
            .collect();
        tracing::debug!(matches = results.len(), "search complete");
        results
    }

    /// Occurrences across many trees in parallel, as `(tree index, match)`
    /// in tree order.
    #[tracing::instrument(level = "debug", skip_all, fields(trees = codes.len()))]
    pub fn find_matches_in_all<R>(&self, codes: &[SyntaxTree], resolver: &R) -> Vec<(usize, MatchResult)>
    where
        R: Resolver + Sync,
    {
        let per_tree: Vec<Vec<MatchResult>> = codes
            .par_iter()
            .map(|code| self.find_matches(code, resolver))
            .collect();
        per_tree
            .into_iter()
            .enumerate()
            .flat_map(|(index, results)| results.into_iter().map(move |result| (index, result)))
            .collect()
    }
}
