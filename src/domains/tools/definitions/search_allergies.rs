//! Allergy search tool definition.
//!
//! Keyword search over the allergy catalog with an optional severity filter.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::allergies::{AllergyCategory, AllergyStore, Severity};
use crate::domains::tools::catalog::{ParamKind, ParamSpec, ToolDefinition};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;

use super::{ToolSpec, parse_params};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the allergy search tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchAllergiesParams {
    /// Keyword matched against names, descriptions, triggers, and symptoms.
    pub query: String,

    /// Restrict results to records with this typical severity.
    #[serde(default)]
    pub severity: Option<Severity>,
}

// ============================================================================
// Result Payload
// ============================================================================

/// Structured output for an allergy search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchAllergiesResult {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_filter: Option<Severity>,
    pub matches: Vec<AllergySummary>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllergySummary {
    pub id: String,
    pub name: String,
    pub category: AllergyCategory,
    pub severity: Severity,
    pub description: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Allergy search tool - keyword search over the catalog.
pub struct SearchAllergiesTool {
    store: Arc<dyn AllergyStore>,
}

impl SearchAllergiesTool {
    /// Tool name as advertised to clients.
    pub const NAME: &'static str = "search_allergies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the allergy catalog by name, trigger food, or \
        symptom keyword. Optionally filter results by typical severity \
        (mild, moderate, severe).";

    pub fn new(store: Arc<dyn AllergyStore>) -> Self {
        Self { store }
    }

    /// Declarative schema for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION)
            .param(ParamSpec::required(
                "query",
                ParamKind::String,
                "Keyword matched against allergy names, triggers, and symptoms",
            ))
            .param(ParamSpec::optional(
                "severity",
                ParamKind::Enum(Severity::WIRE_VALUES),
                "Only return allergies with this typical severity",
            ))
    }

    /// Bind the schema to a handler instance.
    pub fn spec(store: Arc<dyn AllergyStore>) -> ToolSpec {
        ToolSpec::new(Self::definition(), Arc::new(Self::new(store)))
    }
}

#[async_trait::async_trait]
impl ToolHandler for SearchAllergiesTool {
    async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError> {
        let params: SearchAllergiesParams = parse_params(arguments)?;
        info!("Searching allergies for '{}'", params.query);

        let records = self.store.search(&params.query, params.severity).await?;

        let result = SearchAllergiesResult {
            query: params.query,
            severity_filter: params.severity,
            total_count: records.len(),
            matches: records
                .into_iter()
                .map(|r| AllergySummary {
                    id: r.id.to_string(),
                    name: r.name.to_string(),
                    category: r.category,
                    severity: r.severity,
                    description: r.description.to_string(),
                })
                .collect(),
        };

        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::allergies::InMemoryAllergyStore;
    use serde_json::json;

    fn tool() -> SearchAllergiesTool {
        SearchAllergiesTool::new(Arc::new(InMemoryAllergyStore::new()))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let result = tool()
            .execute(&args(json!({ "query": "peanut" })))
            .await
            .unwrap();

        assert_eq!(result["total_count"], 1);
        assert_eq!(result["matches"][0]["id"], "peanut");
        assert_eq!(result["matches"][0]["severity"], "severe");
    }

    #[tokio::test]
    async fn test_search_with_severity_filter() {
        let result = tool()
            .execute(&args(json!({ "query": "hives", "severity": "severe" })))
            .await
            .unwrap();

        let matches = result["matches"].as_array().unwrap();
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|m| m["severity"] == "severe"));
        assert_eq!(result["severity_filter"], "severe");
    }

    #[tokio::test]
    async fn test_search_no_results_is_success() {
        let result = tool()
            .execute(&args(json!({ "query": "chocolate" })))
            .await
            .unwrap();

        assert_eq!(result["total_count"], 0);
        assert!(result["matches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_definition_schema() {
        let definition = SearchAllergiesTool::definition();
        assert_eq!(definition.name, "search_allergies");

        let schema = definition.input_schema();
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(
            schema["properties"]["severity"]["enum"],
            json!(["mild", "moderate", "severe"])
        );
    }
}
