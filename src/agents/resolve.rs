//! Canonical field resolution.
//!
//! Every `canonical_*` entry point computes its value from scratch on each
//! call: the ancestor walk is re-run, registry lookups are re-issued, and
//! providers are re-invoked. Nothing is memoized, because the same node
//! resolved under two different contexts may legitimately yield two
//! different values.

use std::sync::Arc;

use crate::models::{ModelError, ModelRef, ModelRegistry};

use super::content::{ContentConfig, IncludeContents};
use super::context::ReadonlyContext;
use super::node::{AgentNode, ModelSpec};
use super::tree::{AgentTree, NodeId};

/// A field could not be resolved to a canonical value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Neither the node nor any ancestor declares a model.
    #[error("No model found for agent '{agent}' or any of its ancestors")]
    MissingModel { agent: String },

    /// Registry lookup failed; surfaced unchanged.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl AgentTree {
    /// Nearest declared value along the ancestor chain, starting at `id`.
    ///
    /// The accessor decides what "declared" means for its field; anything it
    /// maps to `None` (absent, or an empty-string declaration) is walked
    /// past. Returns `None` when the walk reaches the root empty-handed; the
    /// caller decides whether that is an error.
    fn nearest_declared<'a, T: ?Sized>(
        &'a self,
        id: NodeId,
        accessor: impl Fn(&'a AgentNode) -> Option<&'a T>,
    ) -> Option<&'a T> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if let Some(value) = accessor(self.node(node_id)) {
                return Some(value);
            }
            current = self.parent(node_id);
        }
        None
    }

    /// Resolve the effective model for a node.
    ///
    /// Walks the ancestor chain for the nearest declared model. A `Named`
    /// declaration goes through the registry on every call - the handle is
    /// never cached on the node. A `Handle` declaration is returned as-is.
    ///
    /// # Errors
    /// - [`ConfigurationError::MissingModel`] when the walk reaches the root
    ///   without finding a declaration
    /// - registry failures, propagated unchanged
    pub fn canonical_model(
        &self,
        id: NodeId,
        registry: &dyn ModelRegistry,
    ) -> Result<ModelRef, ConfigurationError> {
        let declared =
            self.nearest_declared(id, |node| node.model.as_ref().filter(|m| m.is_declared()));
        match declared {
            Some(ModelSpec::Handle(handle)) => Ok(Arc::clone(handle)),
            Some(ModelSpec::Named(identifier)) => Ok(registry.resolve(identifier)?),
            None => Err(ConfigurationError::MissingModel {
                agent: self.node(id).name().to_string(),
            }),
        }
    }

    /// Resolve the effective instruction for a node.
    ///
    /// Walks the ancestor chain for the nearest declared instruction and
    /// resolves it against `ctx` (invoking a provider exactly once). An
    /// undeclared chain resolves to the empty string - no instruction is a
    /// valid configuration, not an error.
    ///
    /// # Errors
    /// Provider failures, propagated verbatim.
    pub fn canonical_instruction(
        &self,
        id: NodeId,
        ctx: &ReadonlyContext,
    ) -> anyhow::Result<String> {
        let declared = self.nearest_declared(id, |node| {
            node.instruction.as_ref().filter(|s| s.is_declared())
        });
        match declared {
            Some(source) => source.resolve(ctx),
            None => Ok(String::new()),
        }
    }

    /// Resolve the tree's global instruction.
    ///
    /// The global instruction is tree-scoped: only the root's declaration
    /// counts, regardless of which node is asking. Mid-tree declarations are
    /// ignored by design - one preamble per tree. Empty string when the root
    /// declares none.
    ///
    /// # Errors
    /// Provider failures, propagated verbatim.
    pub fn canonical_global_instruction(
        &self,
        id: NodeId,
        ctx: &ReadonlyContext,
    ) -> anyhow::Result<String> {
        let root = self.ancestors(id).last().unwrap_or(id);
        match &self.node(root).global_instruction {
            Some(source) => source.resolve(ctx),
            None => Ok(String::new()),
        }
    }

    /// Normalize a node's content-inclusion declaration.
    ///
    /// Node-local; never inherited. The shorthand strings expand to fresh
    /// defaults; a structured declaration is returned by identity - the very
    /// `Arc` the caller supplied, with no defensive copy. The caller and the
    /// resolver deliberately share that one object.
    pub fn canonical_content_config(&self, id: NodeId) -> Arc<ContentConfig> {
        match self.node(id).include_contents {
            IncludeContents::Default => Arc::new(ContentConfig::default()),
            IncludeContents::None => Arc::new(ContentConfig::disabled()),
            IncludeContents::Config(ref config) => Arc::clone(config),
        }
    }
}
