//! KSSR Match - Structural Matching for Kotlin Search Patterns
//!
//! Decides whether a pattern tree matches a code tree, binding the
//! pattern's `$name$` variables along the way:
//! - `Matcher`, the node-by-node structural comparison
//! - `BindingStore`, the variable bookkeeping the matcher consults, with
//!   `SubstitutionStore` as the standard implementation
//! - `Resolver`, the semantic queries (call argument mapping, declaration
//!   types), with `SignatureTable` as a table-driven implementation
//! - `Searcher`, which runs a pattern over every node of one or many trees
//!
//! # Tracing
//!
//! Set `RUST_LOG=kssr_match=trace` and call [`init_tracing`] to see why a
//! candidate was rejected.

mod binding;
mod matcher;
mod options;
mod resolve;
mod search;

use std::sync::Once;

pub use binding::{
    Binding, BindingSnapshot, BindingStore, PatternVariables, SubstitutionStore, VarId,
    VariableConstraint, VariableError,
};
pub use matcher::Matcher;
pub use options::MatchOptions;
pub use resolve::{
    ArgumentSlot, FunctionSignature, Param, ParameterSignature, ResolutionStatus, ResolvedCall,
    Resolver, SignatureTable, TypeRef,
};
pub use search::{MatchResult, Searcher};

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber. Does nothing when `RUST_LOG`
/// is unset or a subscriber was already installed by this function.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
