// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System message sent with every completion request.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
