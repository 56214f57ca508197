//! Generation parameters a node may declare for its model calls.
//!
//! The sampling knobs are passed through to the execution engine untouched.
//! Four sub-fields (`thinking`, `tools`, `system_instruction`,
//! `response_schema`) are owned by the engine, which populates them from the
//! node's own `instruction`/`tools`/`output_schema` declarations at call
//! time; declaring them here is rejected at node construction (see
//! [`crate::agents::ValidationError`]).

use serde::{Deserialize, Serialize};

use crate::tools::ToolDescriptor;

/// Model reasoning/"thinking" policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThinkingConfig {
    /// Whether thought content is surfaced in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_thoughts: Option<bool>,

    /// Token budget for thinking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tokens: Option<u32>,
}

/// Per-node generation parameters.
///
/// These are intentionally conservative; nothing here is validated for
/// semantic correctness, only the engine-owned fields are checked for
/// presence at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature (0 = deterministic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Top-p nucleus sampling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// Maximum output tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,

    /// Sequences that stop generation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,

    /// Engine-owned; must not be declared by callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<ThinkingConfig>,

    /// Engine-owned; must not be declared by callers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDescriptor>,

    /// Engine-owned; must not be declared by callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,

    /// Engine-owned; must not be declared by callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}
