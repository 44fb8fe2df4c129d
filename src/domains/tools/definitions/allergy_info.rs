//! Allergy detail lookup tool definition.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::domains::allergies::AllergyStore;
use crate::domains::tools::catalog::{ParamKind, ParamSpec, ToolDefinition};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;

use super::{ToolSpec, parse_params};

/// Parameters for the allergy detail tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAllergyInfoParams {
    /// Catalog id of the allergy to fetch.
    #[serde(rename = "allergyId")]
    pub allergy_id: String,
}

/// Allergy detail tool - full record lookup by id.
pub struct GetAllergyInfoTool {
    store: Arc<dyn AllergyStore>,
}

impl GetAllergyInfoTool {
    /// Tool name as advertised to clients.
    pub const NAME: &'static str = "get_allergy_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the full record for one allergy by its catalog id: \
        symptoms, common triggers, severity-tiered treatments, and description.";

    pub fn new(store: Arc<dyn AllergyStore>) -> Self {
        Self { store }
    }

    /// Declarative schema for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION).param(ParamSpec::required(
            "allergyId",
            ParamKind::String,
            "Catalog id of the allergy (e.g. \"peanut\", \"pollen\")",
        ))
    }

    /// Bind the schema to a handler instance.
    pub fn spec(store: Arc<dyn AllergyStore>) -> ToolSpec {
        ToolSpec::new(Self::definition(), Arc::new(Self::new(store)))
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetAllergyInfoTool {
    async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError> {
        let params: GetAllergyInfoParams = parse_params(arguments)?;
        info!("Fetching allergy record '{}'", params.allergy_id);

        let record = self.store.get(&params.allergy_id).await?;

        serde_json::to_value(&record).map_err(|e| ToolError::internal(e.to_string()))
    }
}
