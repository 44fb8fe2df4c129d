//! Treatment recommendation tool definition.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::allergies::{AllergyStore, Severity};
use crate::domains::tools::catalog::{ParamKind, ParamSpec, ToolDefinition};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;

use super::{ToolSpec, parse_params};

const EMERGENCY_NOTE: &str = "If signs of anaphylaxis appear (difficulty breathing, throat \
     swelling, dizziness), use epinephrine if available and call emergency \
     services immediately.";

/// Parameters for the treatment recommendation tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TreatmentParams {
    /// Display name or catalog id of the allergy.
    #[serde(rename = "allergyName")]
    pub allergy_name: String,

    /// Reaction severity to tailor recommendations to. Defaults to the
    /// allergy's typical severity.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Structured output for a treatment recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentResult {
    pub allergy_id: String,
    pub allergy_name: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_note: Option<String>,
}

/// Treatment recommendation tool - severity-tiered guidance per allergy.
pub struct TreatmentRecommendationsTool {
    store: Arc<dyn AllergyStore>,
}

impl TreatmentRecommendationsTool {
    /// Tool name as advertised to clients.
    pub const NAME: &'static str = "get_treatment_recommendations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get treatment recommendations for a named allergy, \
        tailored to a reaction severity (mild, moderate, severe). Defaults \
        to the allergy's typical severity when none is given.";

    pub fn new(store: Arc<dyn AllergyStore>) -> Self {
        Self { store }
    }

    /// Declarative schema for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION)
            .param(ParamSpec::required(
                "allergyName",
                ParamKind::String,
                "Allergy display name or catalog id (e.g. \"Peanut Allergy\" or \"peanut\")",
            ))
            .param(ParamSpec::optional(
                "severity",
                ParamKind::Enum(Severity::WIRE_VALUES),
                "Reaction severity the recommendations should target",
            ))
    }

    /// Bind the schema to a handler instance.
    pub fn spec(store: Arc<dyn AllergyStore>) -> ToolSpec {
        ToolSpec::new(Self::definition(), Arc::new(Self::new(store)))
    }
}

#[async_trait::async_trait]
impl ToolHandler for TreatmentRecommendationsTool {
    async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError> {
        let params: TreatmentParams = parse_params(arguments)?;
        info!("Treatment recommendations for '{}'", params.allergy_name);

        let record = self.store.find_by_name(&params.allergy_name).await?;
        let severity = params.severity.unwrap_or(record.severity);

        let result = TreatmentResult {
            allergy_id: record.id.to_string(),
            allergy_name: record.name.to_string(),
            severity,
            recommendations: record
                .treatments
                .for_severity(severity)
                .iter()
                .map(|t| t.to_string())
                .collect(),
            emergency_note: (severity == Severity::Severe).then(|| EMERGENCY_NOTE.to_string()),
        };

        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }
}
