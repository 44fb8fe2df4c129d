//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::ServiceExt;
use tracing::info;

use super::service::shutdown_signal;
use super::{TransportError, TransportResult};
use crate::core::AllergyMcpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Serves until the peer closes stdin or an interrupt signal arrives.
    /// On interrupt the running service is cancelled, which flushes pending
    /// writes before the channel is released.
    pub async fn run(server: AllergyMcpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let cancel = service.cancellation_token();
        tokio::spawn(async move {
            shutdown_signal().await;
            info!("Interrupt received, closing transport");
            cancel.cancel();
        });

        service
            .waiting()
            .await
            .map_err(|e| TransportError::protocol(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
