//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Dispatch Architecture
//!
//! The server owns a [`Dispatcher`] built from an explicit list of tool
//! specs (see `domains/tools/definitions/`). Discovery requests are
//! answered straight from the dispatcher's catalog; invocation requests go
//! through the full resolve/validate/execute pipeline. The dispatcher
//! always answers with an envelope, so `call_tool` never surfaces a
//! per-tool failure as a protocol error.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use tracing::{info, instrument};

use super::config::Config;
use crate::core::Result;
use crate::domains::allergies::{AllergyStore, InMemoryAllergyStore, SymptomAnalyzer};
use crate::domains::tools::{Dispatcher, all_specs};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and routes protocol
/// messages to the tool dispatch pipeline.
#[derive(Clone)]
pub struct AllergyMcpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher: catalog plus handler table.
    dispatcher: Arc<Dispatcher>,
}

impl AllergyMcpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the tool specs are misconfigured (duplicate tool names).
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let store: Arc<dyn AllergyStore> = Arc::new(InMemoryAllergyStore::new());
        let analyzer = Arc::new(SymptomAnalyzer::new(store.clone()));
        let dispatcher = Arc::new(Dispatcher::new(all_specs(store, analyzer))?);

        Ok(Self { config, dispatcher })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool dispatcher (for tests and embedding).
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }
}

impl ServerHandler for AllergyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Allergy assistant server. Provides tools to search allergies, fetch \
                 allergy details, analyze symptoms, and get treatment recommendations."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.catalog().to_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.dispatch(&request.name, &arguments).await)
    }
}
