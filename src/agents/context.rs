//! Read-only invocation context handed to instruction providers.

use std::collections::HashMap;

use serde_json::Value;

/// Key-value session state visible to providers.
pub type StateMap = HashMap<String, Value>;

/// Read-only view of the current invocation.
///
/// Constructed by the session/execution layer and passed through to provider
/// callables; this library only ever reads it. Two resolutions of the same
/// node with different contexts may legitimately produce different values,
/// which is why no resolution result is cached.
#[derive(Debug, Clone, Default)]
pub struct ReadonlyContext {
    agent_name: String,
    invocation_id: String,
    state: StateMap,
}

impl ReadonlyContext {
    /// Create a context for one invocation.
    pub fn new(
        agent_name: impl Into<String>,
        invocation_id: impl Into<String>,
        state: StateMap,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            invocation_id: invocation_id.into(),
            state,
        }
    }

    /// Name of the agent being invoked.
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Identifier of the current invocation.
    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    /// The full session state.
    pub fn state(&self) -> &StateMap {
        &self.state
    }

    /// Look up one state value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }
}
