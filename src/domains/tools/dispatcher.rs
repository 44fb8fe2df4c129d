//! Tool dispatch - the protocol core.
//!
//! Each invocation runs a small linear state machine:
//! resolve the tool, validate the arguments, execute the handler, respond.
//! Every path produces exactly one response envelope; no handler outcome,
//! including a panic, escapes to the transport uncaught. An uncontained
//! fault in one invocation must never take down the server or corrupt the
//! transport framing.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, error, warn};

use super::catalog::ToolCatalog;
use super::definitions::ToolSpec;
use super::error::ToolError;
use super::handlers::HandlerTable;
use super::validator::{ValidationResult, validate};

/// Internal classification of a dispatch outcome.
///
/// Used for logging and tests only. The wire contract stays a bare
/// `isError` flag plus free text; this tag is never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    Success,
    UnknownTool,
    InvalidArguments,
    HandlerError,
    HandlerFault,
}

/// Validates and routes invocations to their handlers.
///
/// Built from an explicit list of tool specs, so several independent
/// dispatchers can coexist in one process (one per test, for instance).
/// Shares no mutable state between in-flight requests.
pub struct Dispatcher {
    catalog: ToolCatalog,
    handlers: HandlerTable,
}

impl Dispatcher {
    /// Build the catalog and handler table from tool specs.
    ///
    /// Each spec binds one definition to one handler, so the two structures
    /// cannot drift apart. Duplicate names fail construction.
    pub fn new(specs: Vec<ToolSpec>) -> Result<Self, ToolError> {
        let mut handlers = HandlerTable::new();
        let mut definitions = Vec::with_capacity(specs.len());

        for spec in specs {
            handlers.register(spec.definition.name, spec.handler)?;
            definitions.push(spec.definition);
        }

        Ok(Self {
            catalog: ToolCatalog::new(definitions)?,
            handlers,
        })
    }

    /// The tool catalog, used to answer discovery queries.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// The handler table backing this dispatcher.
    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// Dispatch one invocation to completion.
    ///
    /// Always returns an envelope; failures are reported through
    /// `is_error` and the text content, never as a transport error.
    pub async fn dispatch(&self, name: &str, arguments: &JsonObject) -> CallToolResult {
        let (result, kind) = self.dispatch_classified(name, arguments).await;
        debug!("Dispatch of '{}' finished: {:?}", name, kind);
        result
    }

    /// Dispatch and also report the internal outcome classification.
    pub async fn dispatch_classified(
        &self,
        name: &str,
        arguments: &JsonObject,
    ) -> (CallToolResult, DispatchKind) {
        // Resolve
        let Some(definition) = self.catalog.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return (
                error_envelope(format!("Unknown tool: {name}")),
                DispatchKind::UnknownTool,
            );
        };

        // Validate
        if let ValidationResult::Invalid(reasons) = validate(definition, arguments) {
            warn!(
                "Rejected call to '{}': {} validation error(s)",
                name,
                reasons.len()
            );
            return (
                error_envelope(format!(
                    "Invalid arguments for tool '{}': {}",
                    name,
                    reasons.join("; ")
                )),
                DispatchKind::InvalidArguments,
            );
        }

        // The catalog and handler table are built from the same specs, so a
        // resolved definition always has a handler.
        let Some(handler) = self.handlers.lookup(name) else {
            error!("No handler registered for catalog tool '{}'", name);
            return (
                error_envelope(format!("Unknown tool: {name}")),
                DispatchKind::UnknownTool,
            );
        };

        // Execute, containing panics inside the per-request boundary.
        match AssertUnwindSafe(handler.execute(arguments)).catch_unwind().await {
            Ok(Ok(value)) => {
                let text = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| value.to_string());
                (
                    CallToolResult::success(vec![Content::text(text)]),
                    DispatchKind::Success,
                )
            }
            Ok(Err(err)) => {
                warn!("Tool '{}' failed: {}", name, err);
                (
                    error_envelope(format!("Error: {err}")),
                    DispatchKind::HandlerError,
                )
            }
            Err(_) => {
                error!("Tool '{}' panicked during execution", name);
                (
                    error_envelope(format!("Error: tool '{name}' failed unexpectedly")),
                    DispatchKind::HandlerFault,
                )
            }
        }
    }
}

fn error_envelope(text: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text)])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog::{ParamKind, ParamSpec, ToolDefinition};
    use crate::domains::tools::handlers::ToolHandler;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Handler that counts invocations and echoes a fixed payload.
    struct SpyHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ToolHandler for SpyHandler {
        async fn execute(&self, _arguments: &JsonObject) -> Result<Value, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "status": "ok" }))
        }
    }

    struct FailingHandler;

    #[async_trait::async_trait]
    impl ToolHandler for FailingHandler {
        async fn execute(&self, _arguments: &JsonObject) -> Result<Value, ToolError> {
            Err(ToolError::execution_failed("record unavailable"))
        }
    }

    struct PanickingHandler;

    #[async_trait::async_trait]
    impl ToolHandler for PanickingHandler {
        async fn execute(&self, _arguments: &JsonObject) -> Result<Value, ToolError> {
            panic!("handler blew up");
        }
    }

    fn spy_spec(calls: Arc<AtomicUsize>) -> ToolSpec {
        ToolSpec::new(
            ToolDefinition::new("spy", "Counts calls")
                .param(ParamSpec::required("query", ParamKind::String, "text")),
            Arc::new(SpyHandler { calls }),
        )
    }

    fn test_dispatcher(calls: Arc<AtomicUsize>) -> Dispatcher {
        Dispatcher::new(vec![
            spy_spec(calls),
            ToolSpec::new(
                ToolDefinition::new("failing", "Always fails"),
                Arc::new(FailingHandler),
            ),
            ToolSpec::new(
                ToolDefinition::new("panicking", "Always panics"),
                Arc::new(PanickingHandler),
            ),
        ])
        .unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = test_dispatcher(calls.clone());

        let (result, kind) = dispatcher
            .dispatch_classified("frobnicate", &args(json!({})))
            .await;

        assert_eq!(kind, DispatchKind::UnknownTool);
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Unknown tool: frobnicate"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = test_dispatcher(calls.clone());

        let (result, kind) = dispatcher.dispatch_classified("spy", &args(json!({}))).await;

        assert_eq!(kind, DispatchKind::InvalidArguments);
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("missing required field 'query'"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = test_dispatcher(calls.clone());

        let (result, kind) = dispatcher
            .dispatch_classified("spy", &args(json!({ "query": "hi" })))
            .await;

        assert_eq!(kind, DispatchKind::Success);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(text_of(&result).contains("\"status\""));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_handler_error_becomes_error_envelope() {
        let dispatcher = test_dispatcher(Arc::new(AtomicUsize::new(0)));

        let (result, kind) = dispatcher
            .dispatch_classified("failing", &args(json!({})))
            .await;

        assert_eq!(kind, DispatchKind::HandlerError);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: record unavailable");
    }

    #[tokio::test]
    async fn test_panic_is_contained_and_dispatcher_stays_alive() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = test_dispatcher(calls.clone());

        let (result, kind) = dispatcher
            .dispatch_classified("panicking", &args(json!({})))
            .await;

        assert_eq!(kind, DispatchKind::HandlerFault);
        assert_eq!(result.is_error, Some(true));
        assert!(!text_of(&result).is_empty());

        // The next request on the same dispatcher succeeds.
        let (result, kind) = dispatcher
            .dispatch_classified("spy", &args(json!({ "query": "still here" })))
            .await;
        assert_eq!(kind, DispatchKind::Success);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_identical_requests_yield_identical_envelopes() {
        let dispatcher = test_dispatcher(Arc::new(AtomicUsize::new(0)));
        let arguments = args(json!({ "query": "same" }));

        let first = dispatcher.dispatch("spy", &arguments).await;
        let second = dispatcher.dispatch("spy", &arguments).await;

        assert_eq!(first.is_error, second.is_error);
        assert_eq!(text_of(&first), text_of(&second));
    }

    #[tokio::test]
    async fn test_sequential_dispatch_preserves_order() {
        let dispatcher = test_dispatcher(Arc::new(AtomicUsize::new(0)));

        let mut responses = Vec::new();
        for name in ["spy", "failing"] {
            let arguments = args(json!({ "query": "q" }));
            responses.push((name, dispatcher.dispatch(name, &arguments).await));
        }

        // Responses come back in request order: A's envelope first, then B's.
        assert_eq!(responses[0].0, "spy");
        assert!(text_of(&responses[0].1).contains("\"status\""));
        assert_eq!(responses[1].0, "failing");
        assert!(text_of(&responses[1].1).starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_duplicate_spec_fails_construction() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = Dispatcher::new(vec![spy_spec(calls.clone()), spy_spec(calls)]);
        assert!(result.is_err());
    }
}
