//! Field values that are either declared inline or computed per invocation.

use std::fmt;
use std::sync::Arc;

use super::context::ReadonlyContext;

/// Deferred instruction computation over the read-only context.
pub type InstructionProvider =
    Arc<dyn Fn(&ReadonlyContext) -> anyhow::Result<String> + Send + Sync>;

/// An instruction-like field value.
///
/// # Resolution
/// - `Static` returns the text unchanged
/// - `Provider` is invoked exactly once per resolution call; its error (if
///   any) propagates to the caller verbatim - no retry, no wrapping
///
/// Providers are expected to be side-effect-free; this is not enforced, only
/// single invocation per resolution is.
#[derive(Clone)]
pub enum InstructionSource {
    /// Fixed text.
    Static(String),
    /// Deferred computation, evaluated against the caller's context.
    Provider(InstructionProvider),
}

impl InstructionSource {
    /// Wrap a provider closure.
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn(&ReadonlyContext) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self::Provider(Arc::new(f))
    }

    /// Resolve to a concrete string for the given context.
    pub fn resolve(&self, ctx: &ReadonlyContext) -> anyhow::Result<String> {
        match self {
            Self::Static(text) => Ok(text.clone()),
            Self::Provider(f) => f(ctx),
        }
    }

    /// Whether this declaration carries anything to resolve.
    ///
    /// An empty static string counts as undeclared (the ancestor walk moves
    /// past it); a provider always counts, whatever it may later return.
    pub fn is_declared(&self) -> bool {
        match self {
            Self::Static(text) => !text.is_empty(),
            Self::Provider(_) => true,
        }
    }
}

impl From<&str> for InstructionSource {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

impl From<String> for InstructionSource {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

impl fmt::Debug for InstructionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}
