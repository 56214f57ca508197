//! # agenttree
//!
//! Hierarchical configuration resolution for trees of cooperating LLM agents.
//!
//! An agent node may declare its fields (model, instruction, content-inclusion
//! policy, generation parameters) as concrete values, as deferred providers, or
//! not at all — in which case the effective value is inherited from the nearest
//! ancestor that declares one. This library computes the single canonical value
//! of each field at the moment it is needed, and rejects structurally
//! contradictory declarations before a node ever becomes live.
//!
//! ## Resolution Flow
//!
//! ```text
//!   caller ──► AgentTree::canonical_model(id, registry)
//!                        │
//!                        ▼
//!              ancestor walk (nearest declared value wins)
//!                        │
//!                        ▼
//!              field resolution (literal, or provider(ctx))
//! ```
//!
//! Construction flows the other way: `NodeBuilder::build()` runs the
//! cross-field validator over the node's own declarations, so an invalid
//! combination (e.g. an output schema together with tools) never produces a
//! node at all.
//!
//! ## Modules
//! - `agents`: node declarations, the tree arena, and canonical resolution
//! - `models`: model handles and the registry collaborator interface
//! - `tools`: declarative tool descriptors
//!
//! This library never issues model calls, never constructs sessions or
//! contexts, never caches a resolved value, and never retries a failing
//! provider. Those concerns belong to the surrounding execution and session
//! layers.

pub mod agents;
pub mod models;
pub mod tools;

pub use agents::{
    AgentNode, AgentTree, ConfigurationError, ContentConfig, GenerationConfig, IncludeContents,
    NodeBuilder, NodeId, ReadonlyContext, SummarizationConfig, TreeError, ValidationError,
};
pub use models::{LanguageModel, ModelError, ModelRef, ModelRegistry, StaticModelRegistry};
pub use tools::ToolDescriptor;
