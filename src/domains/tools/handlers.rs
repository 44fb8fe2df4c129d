//! Tool handler trait and handler table.
//!
//! A handler is the unit of execution behind one tool: given already
//! validated arguments it produces a single terminal outcome, either a
//! domain result value or a `ToolError`. Handlers never see unvalidated
//! input and must not swallow errors meant for the dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;

/// Executable behavior behind one tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated arguments.
    async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError>;
}

/// Maps tool names to their handlers. Populated at startup, read-only after.
pub struct HandlerTable {
    handlers: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a tool name.
    ///
    /// Registering the same name twice is a startup configuration error.
    pub fn register(
        &mut self,
        name: &'static str,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        if self.handlers.insert(name, handler).is_some() {
            return Err(ToolError::configuration(format!(
                "duplicate handler registration: {name}"
            )));
        }
        Ok(())
    }

    /// Look up a handler by tool name.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoHandler;

    #[async_trait::async_trait]
    impl ToolHandler for EchoHandler {
        async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError> {
            Ok(Value::Object(arguments.clone()))
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut table = HandlerTable::new();
        table.register("echo", Arc::new(EchoHandler)).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.lookup("echo").is_some());
        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut table = HandlerTable::new();
        table.register("echo", Arc::new(EchoHandler)).unwrap();

        let err = table.register("echo", Arc::new(EchoHandler)).unwrap_err();
        assert!(err.to_string().contains("duplicate handler registration: echo"));
    }

    #[tokio::test]
    async fn test_handler_executes() {
        let mut table = HandlerTable::new();
        table.register("echo", Arc::new(EchoHandler)).unwrap();

        let args = json!({ "key": "value" }).as_object().unwrap().clone();
        let handler = table.lookup("echo").unwrap();
        let result = handler.execute(&args).await.unwrap();
        assert_eq!(result["key"], "value");
    }
}
