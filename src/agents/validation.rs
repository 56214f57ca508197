//! Construction-time cross-field validation.
//!
//! Runs once, synchronously, inside `NodeBuilder::build()`, inspecting only
//! the node's own declarations - never ancestors or descendants. A node that
//! violates a rule is never constructed.

use tracing::warn;

use super::node::AgentNode;

/// A cross-field rule violated at node construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Agent name must not be empty")]
    EmptyName,

    #[error("Agent '{0}': an agent with a forced output schema cannot delegate to sub-agents")]
    SchemaWithSubAgents(String),

    #[error("Agent '{0}': an agent with a forced output schema cannot use tools")]
    SchemaWithTools(String),

    #[error(
        "Agent '{0}': generation_config.thinking is populated by the execution engine and must not be declared"
    )]
    GenerationThinking(String),

    #[error(
        "Agent '{0}': generation_config.tools is populated by the execution engine; declare tools on the agent instead"
    )]
    GenerationTools(String),

    #[error(
        "Agent '{0}': generation_config.system_instruction is populated by the execution engine; use the instruction field instead"
    )]
    GenerationSystemInstruction(String),

    #[error(
        "Agent '{0}': generation_config.response_schema is populated by the execution engine; use the output_schema field instead"
    )]
    GenerationResponseSchema(String),
}

/// Validate a freshly assembled node, in fixed rule order.
///
/// The one mutating rule: an output schema forces both transfer-disallow
/// flags to `true` and emits a single warning diagnostic instead of
/// rejecting. Callers rely on the silent override.
pub(crate) fn validate(node: &mut AgentNode) -> Result<(), ValidationError> {
    if node.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if node.output_schema.is_some() {
        if !node.sub_agents.is_empty() {
            return Err(ValidationError::SchemaWithSubAgents(node.name.clone()));
        }
        if !node.tools.is_empty() {
            return Err(ValidationError::SchemaWithTools(node.name.clone()));
        }
        warn!(
            agent = %node.name,
            "output schema cannot co-exist with agent transfer configuration; \
             disabling transfer to parent and peers"
        );
        node.disallow_transfer_to_parent = true;
        node.disallow_transfer_to_peers = true;
    }

    if let Some(config) = &node.generation_config {
        if config.thinking.is_some() {
            return Err(ValidationError::GenerationThinking(node.name.clone()));
        }
        if !config.tools.is_empty() {
            return Err(ValidationError::GenerationTools(node.name.clone()));
        }
        if config.system_instruction.is_some() {
            return Err(ValidationError::GenerationSystemInstruction(
                node.name.clone(),
            ));
        }
        if config.response_schema.is_some() {
            return Err(ValidationError::GenerationResponseSchema(node.name.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::agents::generation::{GenerationConfig, ThinkingConfig};
    use crate::agents::node::OutputSchema;
    use crate::tools::ToolDescriptor;

    fn schema() -> OutputSchema {
        OutputSchema::new("Result", json!({"type": "object"}))
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_schema_with_sub_agents_rejected() {
        let sub = AgentNode::builder("sub_agent").build().unwrap();
        let err = AgentNode::builder("test_agent")
            .output_schema(schema())
            .sub_agent(sub)
            .build()
            .unwrap_err();

        assert!(matches!(err, ValidationError::SchemaWithSubAgents(_)));
    }

    #[test]
    fn test_schema_with_tools_rejected() {
        let err = AgentNode::builder("test_agent")
            .output_schema(schema())
            .tool(ToolDescriptor::new("a_tool", "does a thing"))
            .build()
            .unwrap_err();

        assert!(matches!(err, ValidationError::SchemaWithTools(_)));
    }

    #[test]
    fn test_schema_disables_transfer_and_warns_once() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        let node = tracing::subscriber::with_default(subscriber, || {
            AgentNode::builder("test_agent")
                .output_schema(schema())
                .build()
                .unwrap()
        });

        assert!(node.disallow_transfer_to_parent());
        assert!(node.disallow_transfer_to_peers());

        let logs = writer.contents();
        assert!(logs.contains("output schema cannot co-exist"));
        assert_eq!(logs.matches("WARN").count(), 1);
    }

    #[test]
    fn test_transfer_allowed_by_default() {
        let sub = AgentNode::builder("sub_agent").build().unwrap();
        let node = AgentNode::builder("test_agent")
            .sub_agent(sub)
            .build()
            .unwrap();

        assert!(!node.disallow_transfer_to_parent());
        assert!(!node.disallow_transfer_to_peers());
    }

    #[test]
    fn test_generation_thinking_rejected() {
        let err = AgentNode::builder("test_agent")
            .generation_config(GenerationConfig {
                thinking: Some(ThinkingConfig::default()),
                ..GenerationConfig::default()
            })
            .build()
            .unwrap_err();

        assert!(matches!(err, ValidationError::GenerationThinking(_)));
    }

    #[test]
    fn test_generation_tools_rejected() {
        let err = AgentNode::builder("test_agent")
            .generation_config(GenerationConfig {
                tools: vec![ToolDescriptor::new("a_tool", "does a thing")],
                ..GenerationConfig::default()
            })
            .build()
            .unwrap_err();

        assert!(matches!(err, ValidationError::GenerationTools(_)));
    }

    #[test]
    fn test_generation_system_instruction_rejected() {
        let err = AgentNode::builder("test_agent")
            .generation_config(GenerationConfig {
                system_instruction: Some("system instruction".to_string()),
                ..GenerationConfig::default()
            })
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::GenerationSystemInstruction(_)
        ));
    }

    #[test]
    fn test_generation_response_schema_rejected() {
        let err = AgentNode::builder("test_agent")
            .generation_config(GenerationConfig {
                response_schema: Some(json!({"type": "object"})),
                ..GenerationConfig::default()
            })
            .build()
            .unwrap_err();

        assert!(matches!(err, ValidationError::GenerationResponseSchema(_)));
    }

    #[test]
    fn test_sampling_knobs_pass_validation() {
        let node = AgentNode::builder("test_agent")
            .generation_config(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.9),
                max_output_tokens: Some(2048),
                stop_sequences: vec!["END".to_string()],
                ..GenerationConfig::default()
            })
            .build()
            .unwrap();

        assert!(node.generation_config().is_some());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = AgentNode::builder("").build().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName));
    }
}
