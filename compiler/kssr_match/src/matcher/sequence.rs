//! List comparisons: in order, and in any order.

use kssr_ir::{NodeId, NodeRange};
use smallvec::SmallVec;

use super::NodeMatcher;

impl NodeMatcher<'_> {
    /// Equal length, pairwise in order.
    pub(crate) fn match_sequentially(&mut self, patterns: &[NodeId], codes: &[NodeId]) -> bool {
        patterns.len() == codes.len()
            && patterns
                .iter()
                .zip(codes)
                .all(|(&p, &c)| self.match_nodes(p, c))
    }

    /// Child lists of the two trees, in order.
    pub(super) fn match_lists(&mut self, patterns: NodeRange, codes: NodeRange) -> bool {
        let (pattern, code) = (self.pattern, self.code);
        self.match_sequentially(pattern.list(patterns), code.list(codes))
    }

    /// All structural children, in order.
    pub(super) fn match_sons(&mut self, p: NodeId, c: NodeId) -> bool {
        if !p.is_present() || !c.is_present() {
            return self.match_nodes(p, c);
        }
        let pattern_children = self.pattern.children(p);
        let code_children = self.code.children(c);
        self.match_sequentially(&pattern_children, &code_children)
    }

    /// Equal length, and some one-to-one assignment of code elements to
    /// pattern elements matches pairwise.
    ///
    /// Pattern elements are assigned in order, each to the first unused code
    /// element that matches; on a dead end the search backs up and bindings
    /// made along the abandoned path are rolled back.
    pub(crate) fn match_in_any_order(&mut self, patterns: &[NodeId], codes: &[NodeId]) -> bool {
        if patterns.len() != codes.len() {
            return false;
        }
        let mut used: SmallVec<[bool; 8]> = SmallVec::from_elem(false, codes.len());
        self.assign(patterns, codes, &mut used)
    }

    fn assign(&mut self, patterns: &[NodeId], codes: &[NodeId], used: &mut [bool]) -> bool {
        let Some((&first, rest)) = patterns.split_first() else {
            return true;
        };
        for (i, &code) in codes.iter().enumerate() {
            if used[i] {
                continue;
            }
            let snapshot = self.bindings.snapshot();
            if self.match_nodes(first, code) {
                used[i] = true;
                if self.assign(rest, codes, used) {
                    return true;
                }
                used[i] = false;
            }
            self.bindings.restore(snapshot);
        }
        false
    }

    pub(super) fn match_lists_in_any_order(&mut self, patterns: NodeRange, codes: NodeRange) -> bool {
        let (pattern, code) = (self.pattern, self.code);
        self.match_in_any_order(pattern.list(patterns), code.list(codes))
    }

    /// All structural children, in any order.
    pub(super) fn match_sons_in_any_order(&mut self, p: NodeId, c: NodeId) -> bool {
        if !p.is_present() || !c.is_present() {
            return self.match_nodes(p, c);
        }
        let pattern_children = self.pattern.children(p);
        let code_children = self.code.children(c);
        self.match_in_any_order(&pattern_children, &code_children)
    }
}
