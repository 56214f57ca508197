//! Declarative tool descriptors.
//!
//! A descriptor names a tool and carries its parameter schema. This library
//! only counts and forwards descriptors — binding them to callables and
//! executing them is the execution engine's job.

use serde::{Deserialize, Serialize};

/// Description of a tool an agent may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool's arguments.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl ToolDescriptor {
    /// Create a descriptor with no parameter schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::Value::Null,
        }
    }

    /// Attach a parameter schema.
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }
}
