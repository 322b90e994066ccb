//! Evaluation context configuration

/// Configuration for evaluation.
///
/// Passed by reference into every evaluation call. It is never mutated
/// during evaluation, so one context can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum operand stack depth; `None` means unbounded
    pub max_stack_depth: Option<usize>,

    /// Whether to emit a trace event per token (for debugging)
    pub trace: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom stack depth limit.
    pub fn with_max_stack_depth(max_depth: usize) -> Self {
        Self {
            max_stack_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Enable or disable per-token tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
