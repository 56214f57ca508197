//! Model handles and the model registry.
//!
//! A node may declare its model as a bare identifier string; turning that
//! string into a live handle is the registry's job, performed on every
//! resolution call (never cached on the node). The registry is a collaborator
//! interface — the execution layer supplies the real one. `StaticModelRegistry`
//! is the in-memory implementation used by tests and small deployments.

use std::collections::HashMap;
use std::sync::Arc;

/// A live, callable model handle.
///
/// This library only needs the identifier back out of a handle; issuing
/// requests through it is the execution engine's business.
pub trait LanguageModel: std::fmt::Debug + Send + Sync {
    /// Registry identifier for this model (e.g. `"gemini-pro"`).
    fn identifier(&self) -> &str;
}

/// Shared reference to a model handle.
pub type ModelRef = Arc<dyn LanguageModel>;

/// Minimal model handle carrying only its identifier.
#[derive(Debug, Clone)]
pub struct StaticModel {
    identifier: String,
}

impl StaticModel {
    /// Create a handle for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl LanguageModel for StaticModel {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Errors from model lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found in registry: {0}")]
    NotFound(String),
}

/// Turns model identifiers into live handles.
///
/// Lookup failures propagate to the resolution caller unchanged; this library
/// adds no context and performs no recovery.
pub trait ModelRegistry: Send + Sync {
    /// Resolve an identifier into a live handle.
    fn resolve(&self, identifier: &str) -> Result<ModelRef, ModelError>;
}

/// In-memory model registry.
pub struct StaticModelRegistry {
    models: HashMap<String, ModelRef>,
}

impl StaticModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Register a model handle under its own identifier.
    ///
    /// A later registration with the same identifier replaces the earlier one.
    pub fn register(&mut self, model: ModelRef) {
        self.models.insert(model.identifier().to_string(), model);
    }

    /// Register a plain [`StaticModel`] for the given identifier.
    pub fn register_named(&mut self, identifier: impl Into<String>) {
        self.register(Arc::new(StaticModel::new(identifier)));
    }

    /// Get a registered handle without the error wrapping of [`ModelRegistry`].
    pub fn get(&self, identifier: &str) -> Option<ModelRef> {
        self.models.get(identifier).cloned()
    }

    /// List registered identifiers, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.models.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for StaticModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry for StaticModelRegistry {
    fn resolve(&self, identifier: &str) -> Result<ModelRef, ModelError> {
        self.get(identifier)
            .ok_or_else(|| ModelError::NotFound(identifier.to_string()))
    }
}
