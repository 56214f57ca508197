//! Agent node declarations and validated construction.
//!
//! # Invariants
//! - A node that fails cross-field validation is never constructed
//! - Declarations are immutable after `build()`; canonical values are
//!   recomputed per resolution call, not cached on the node

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{LanguageModel, ModelRef};
use crate::tools::ToolDescriptor;

use super::content::IncludeContents;
use super::generation::GenerationConfig;
use super::provider::InstructionSource;
use super::validation::{self, ValidationError};

/// Declared model of a node.
///
/// Either a registry identifier resolved into a live handle on every
/// resolution call, or an already-live handle returned as-is.
#[derive(Clone)]
pub enum ModelSpec {
    /// Registry identifier, e.g. `"gemini-pro"`.
    Named(String),
    /// Already-resolved handle.
    Handle(ModelRef),
}

impl From<&str> for ModelSpec {
    fn from(identifier: &str) -> Self {
        Self::Named(identifier.to_string())
    }
}

impl From<String> for ModelSpec {
    fn from(identifier: String) -> Self {
        Self::Named(identifier)
    }
}

impl From<ModelRef> for ModelSpec {
    fn from(handle: ModelRef) -> Self {
        Self::Handle(handle)
    }
}

impl ModelSpec {
    /// Whether this declaration actually names a model.
    ///
    /// An empty identifier counts as undeclared and the ancestor walk moves
    /// past it; a live handle always counts.
    pub fn is_declared(&self) -> bool {
        match self {
            Self::Named(identifier) => !identifier.is_empty(),
            Self::Handle(_) => true,
        }
    }
}

impl fmt::Debug for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(identifier) => f.debug_tuple("Named").field(identifier).finish(),
            Self::Handle(handle) => f.debug_tuple("Handle").field(&handle.identifier()).finish(),
        }
    }
}

/// Structured-output schema descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSchema {
    pub name: String,
    /// JSON schema the model's output must conform to.
    pub schema: serde_json::Value,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// One agent's declared configuration.
///
/// Built through [`AgentNode::builder`]; `build()` runs the cross-field
/// validator, so every live node satisfies the mutual-exclusion invariants.
/// Fields left undeclared are inherited from ancestors at resolution time
/// (model, instruction) or fall back to defaults (content inclusion).
#[derive(Debug, Clone)]
pub struct AgentNode {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) model: Option<ModelSpec>,
    pub(crate) instruction: Option<InstructionSource>,
    pub(crate) global_instruction: Option<InstructionSource>,
    pub(crate) include_contents: IncludeContents,
    pub(crate) output_schema: Option<OutputSchema>,
    pub(crate) tools: Vec<ToolDescriptor>,
    pub(crate) sub_agents: Vec<AgentNode>,
    pub(crate) disallow_transfer_to_parent: bool,
    pub(crate) disallow_transfer_to_peers: bool,
    pub(crate) generation_config: Option<GenerationConfig>,
}

impl AgentNode {
    /// Start building a node with the given name.
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            name: name.into(),
            description: String::new(),
            model: None,
            instruction: None,
            global_instruction: None,
            include_contents: IncludeContents::Default,
            output_schema: None,
            tools: Vec::new(),
            sub_agents: Vec::new(),
            disallow_transfer_to_parent: false,
            disallow_transfer_to_peers: false,
            generation_config: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> Option<&ModelSpec> {
        self.model.as_ref()
    }

    pub fn instruction(&self) -> Option<&InstructionSource> {
        self.instruction.as_ref()
    }

    pub fn global_instruction(&self) -> Option<&InstructionSource> {
        self.global_instruction.as_ref()
    }

    pub fn include_contents(&self) -> &IncludeContents {
        &self.include_contents
    }

    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Declared children. Empty once the node has been consumed into a tree,
    /// which owns the relationships from then on.
    pub fn sub_agents(&self) -> &[AgentNode] {
        &self.sub_agents
    }

    pub fn disallow_transfer_to_parent(&self) -> bool {
        self.disallow_transfer_to_parent
    }

    pub fn disallow_transfer_to_peers(&self) -> bool {
        self.disallow_transfer_to_peers
    }

    pub fn generation_config(&self) -> Option<&GenerationConfig> {
        self.generation_config.as_ref()
    }
}

/// Builder for [`AgentNode`].
pub struct NodeBuilder {
    name: String,
    description: String,
    model: Option<ModelSpec>,
    instruction: Option<InstructionSource>,
    global_instruction: Option<InstructionSource>,
    include_contents: IncludeContents,
    output_schema: Option<OutputSchema>,
    tools: Vec<ToolDescriptor>,
    sub_agents: Vec<AgentNode>,
    disallow_transfer_to_parent: bool,
    disallow_transfer_to_peers: bool,
    generation_config: Option<GenerationConfig>,
}

impl NodeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare the model: an identifier string or a live handle.
    pub fn model(mut self, model: impl Into<ModelSpec>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Declare a fixed instruction.
    pub fn instruction(mut self, instruction: impl Into<InstructionSource>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Declare the instruction as a provider evaluated per invocation.
    pub fn instruction_provider<F>(mut self, f: F) -> Self
    where
        F: Fn(&super::context::ReadonlyContext) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.instruction = Some(InstructionSource::provider(f));
        self
    }

    /// Declare a fixed global instruction (meaningful on the tree root).
    pub fn global_instruction(mut self, instruction: impl Into<InstructionSource>) -> Self {
        self.global_instruction = Some(instruction.into());
        self
    }

    /// Declare the global instruction as a provider.
    pub fn global_instruction_provider<F>(mut self, f: F) -> Self
    where
        F: Fn(&super::context::ReadonlyContext) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.global_instruction = Some(InstructionSource::provider(f));
        self
    }

    pub fn include_contents(mut self, include_contents: impl Into<IncludeContents>) -> Self {
        self.include_contents = include_contents.into();
        self
    }

    pub fn output_schema(mut self, schema: OutputSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn tool(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn sub_agent(mut self, child: AgentNode) -> Self {
        self.sub_agents.push(child);
        self
    }

    pub fn sub_agents(mut self, children: impl IntoIterator<Item = AgentNode>) -> Self {
        self.sub_agents.extend(children);
        self
    }

    pub fn disallow_transfer_to_parent(mut self, disallow: bool) -> Self {
        self.disallow_transfer_to_parent = disallow;
        self
    }

    pub fn disallow_transfer_to_peers(mut self, disallow: bool) -> Self {
        self.disallow_transfer_to_peers = disallow;
        self
    }

    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Validate and construct the node.
    ///
    /// # Errors
    /// Returns the first violated cross-field rule; the node is not
    /// constructed in that case. Note that declaring an output schema
    /// silently forces both transfer-disallow flags to `true` (with a
    /// warning diagnostic) rather than erroring.
    pub fn build(self) -> Result<AgentNode, ValidationError> {
        let mut node = AgentNode {
            name: self.name,
            description: self.description,
            model: self.model,
            instruction: self.instruction,
            global_instruction: self.global_instruction,
            include_contents: self.include_contents,
            output_schema: self.output_schema,
            tools: self.tools,
            sub_agents: self.sub_agents,
            disallow_transfer_to_parent: self.disallow_transfer_to_parent,
            disallow_transfer_to_peers: self.disallow_transfer_to_peers,
            generation_config: self.generation_config,
        };
        validation::validate(&mut node)?;
        Ok(node)
    }
}
