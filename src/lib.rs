//! Allergy MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! schema-validated tool catalog for an allergy assistant: allergy search,
//! record lookup, symptom analysis, and treatment recommendations.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the dispatch pipeline (catalog, validator, handler table,
//!     dispatcher) and the tool definitions
//!   - **allergies**: allergy records, lookup, and symptom analysis
//!
//! # Example
//!
//! ```rust,no_run
//! use allergy_mcp_server::{core::AllergyMcpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = AllergyMcpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{AllergyMcpServer, Config, Error, Result};
