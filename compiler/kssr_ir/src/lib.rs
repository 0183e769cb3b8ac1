//! KSSR IR - Syntax Trees for Structural Search
//!
//! This crate contains the data structures shared by pattern trees and code
//! trees:
//! - Names for interned identifiers and leaf text
//! - `NodeId`/`NodeRange` indices into a flat arena
//! - Token tags for leaf tokens (keywords, modifiers, operators)
//! - `NodeKind`, the closed set of Kotlin node kinds the matcher understands
//! - `SyntaxTree`, the arena with children access and traversal
//! - A canonical text renderer
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: leaf text is `Name(u32)`, shared across trees
//!   through one `SharedInterner` so pattern and code names compare in O(1)
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)`
//!   indices and lists are `NodeRange` slices of one id buffer
//! - **Immutable While Matching**: trees are built up front, then only read

mod error;
mod flags;
mod interner;
mod name;
mod node;
mod node_id;
mod render;
mod span;
mod stack;
mod token;
mod tree;

pub use error::TreeError;
pub use flags::NodeFlags;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use node::{Node, NodeKind};
pub use node_id::{NodeId, NodeRange};
pub use span::Span;
pub use stack::ensure_sufficient_stack;
pub use token::TokenTag;
pub use tree::{PropertyDecl, SyntaxTree};
