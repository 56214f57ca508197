//! Agent configuration tree - declarations, validation, and canonical resolution.
//!
//! # Key Concepts
//! - **AgentNode**: one agent's declared configuration, validated at build time
//! - **AgentTree**: arena of nodes with parent index links, built from an owned root
//! - **Canonical value**: the fully-resolved, non-deferred value of a field,
//!   recomputed on every call (never cached)
//!
//! # Resolution Rules
//! - `model` inherits from the nearest ancestor that declares one; reaching the
//!   root without a declaration is an error
//! - `instruction` inherits the same way, but an undeclared chain resolves to
//!   the empty string
//! - `global_instruction` is tree-scoped: only the root's declaration counts
//! - `include_contents` is node-local and never inherited

mod content;
mod context;
mod generation;
mod node;
mod provider;
mod resolve;
mod tree;
mod validation;

pub use content::{ContentConfig, IncludeContents, SummarizationConfig};
pub use context::{ReadonlyContext, StateMap};
pub use generation::{GenerationConfig, ThinkingConfig};
pub use node::{AgentNode, ModelSpec, NodeBuilder, OutputSchema};
pub use provider::{InstructionProvider, InstructionSource};
pub use resolve::ConfigurationError;
pub use tree::{AgentTree, NodeId, TreeError};
pub use validation::ValidationError;
