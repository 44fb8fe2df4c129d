//! Tool definitions module.
//!
//! One file per tool. Each tool exposes a `spec()` constructor that binds
//! its declarative schema to its handler in a single declaration; adding a
//! tool means adding a file and one entry in [`all_specs`].

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::allergies::{AllergyStore, SymptomAnalyzer};

use super::catalog::ToolDefinition;
use super::error::ToolError;
use super::handlers::ToolHandler;

mod allergy_info;
mod search_allergies;
mod symptom_analysis;
mod treatment;

pub use allergy_info::GetAllergyInfoTool;
pub use search_allergies::SearchAllergiesTool;
pub use symptom_analysis::AnalyzeSymptomsTool;
pub use treatment::TreatmentRecommendationsTool;

/// One tool: a schema definition bound to the handler that implements it.
pub struct ToolSpec {
    pub definition: ToolDefinition,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolSpec {
    pub fn new(definition: ToolDefinition, handler: Arc<dyn ToolHandler>) -> Self {
        Self {
            definition,
            handler,
        }
    }
}

/// All tool specs, in catalog order.
pub fn all_specs(store: Arc<dyn AllergyStore>, analyzer: Arc<SymptomAnalyzer>) -> Vec<ToolSpec> {
    vec![
        SearchAllergiesTool::spec(store.clone()),
        GetAllergyInfoTool::spec(store.clone()),
        AnalyzeSymptomsTool::spec(analyzer),
        TreatmentRecommendationsTool::spec(store),
    ]
}

/// Deserialize validated arguments into a tool's typed parameter struct.
pub(crate) fn parse_params<T: DeserializeOwned>(arguments: &JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
