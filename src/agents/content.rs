//! Content-inclusion policy and its canonical structured form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Declared content-inclusion policy of a node.
///
/// The declaration is polymorphic: the shorthand strings `"default"` and
/// `"none"`, or a full [`ContentConfig`]. Both shorthands normalize to a
/// `ContentConfig` at resolution time; a structured declaration is passed
/// through by identity (see [`crate::agents::AgentTree::canonical_content_config`]).
/// Any other shape is rejected when the declaration is deserialized, before a
/// node exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IncludeContents {
    /// Include prior conversation contents (shorthand `"default"`).
    #[default]
    Default,
    /// Exclude prior conversation contents (shorthand `"none"`).
    None,
    /// Full structured policy.
    Config(Arc<ContentConfig>),
}

impl From<ContentConfig> for IncludeContents {
    fn from(config: ContentConfig) -> Self {
        Self::Config(Arc::new(config))
    }
}

impl Serialize for IncludeContents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Default => serializer.serialize_str("default"),
            Self::None => serializer.serialize_str("none"),
            Self::Config(config) => config.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IncludeContents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Mode(String),
            Config(ContentConfig),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Mode(mode) => match mode.as_str() {
                "default" => Ok(Self::Default),
                "none" => Ok(Self::None),
                other => Err(serde::de::Error::custom(format!(
                    "unrecognized include_contents mode {other:?} (expected \"default\" or \"none\")"
                ))),
            },
            Repr::Config(config) => Ok(Self::Config(Arc::new(config))),
        }
    }
}

/// Canonical structured content-inclusion policy.
///
/// Describes which prior conversational events are included in a request and
/// how they may be summarized. Every field is independently optional; absence
/// means default behavior, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Whether prior contents are included at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Only include events from these authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_authors: Option<Vec<String>>,

    /// Drop events from these authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_authors: Option<Vec<String>>,

    /// Cap on the number of included events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_events: Option<u32>,

    /// Whether overflowing events are summarized instead of dropped.
    #[serde(default)]
    pub summarize: bool,

    /// Template wrapping the summary; must contain `{summary}`.
    #[serde(default = "default_summary_template")]
    pub summary_template: String,

    /// How the summary itself is produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization_config: Option<SummarizationConfig>,

    /// Number of trailing events fed to the summarizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization_window: Option<u32>,

    /// Number of most recent events always included verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_include_last_n: Option<u32>,

    /// State keys injected as additional context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_from_state: Option<Vec<String>>,

    /// Template wrapping injected state; must contain `{context}`.
    #[serde(default = "default_state_template")]
    pub state_template: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            include_authors: None,
            exclude_authors: None,
            max_events: None,
            summarize: false,
            summary_template: default_summary_template(),
            summarization_config: None,
            summarization_window: None,
            always_include_last_n: None,
            context_from_state: None,
            state_template: default_state_template(),
        }
    }
}

impl ContentConfig {
    /// A policy that excludes prior contents entirely.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// How overflowing content is summarized.
///
/// All fields independently optional; unset fields fall back to the execution
/// engine's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizationConfig {
    /// Model used for summarization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Instruction given to the summarizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,

    /// Token budget for the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_summary_template() -> String {
    "Previous conversation summary: {summary}".to_string()
}

fn default_state_template() -> String {
    "Session Information:\n{context}".to_string()
}
