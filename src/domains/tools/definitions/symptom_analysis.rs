//! Symptom analysis tool definition.
//!
//! Takes a list of reported symptoms and returns candidate allergies ranked
//! by overlap.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::allergies::{SymptomAnalyzer, SymptomMatch};
use crate::domains::tools::catalog::{ParamKind, ParamSpec, ToolDefinition};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;

use super::{ToolSpec, parse_params};

/// Parameters for the symptom analysis tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeSymptomsParams {
    /// Symptoms reported by the user.
    pub symptoms: Vec<String>,
}

/// Structured output for a symptom analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomAnalysisResult {
    pub reported_symptoms: Vec<String>,
    pub candidates: Vec<SymptomMatch>,
    pub total_candidates: usize,
    /// Present when nothing in the catalog matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Symptom analysis tool - ranks catalog allergies against reported symptoms.
pub struct AnalyzeSymptomsTool {
    analyzer: Arc<SymptomAnalyzer>,
}

impl AnalyzeSymptomsTool {
    /// Tool name as advertised to clients.
    pub const NAME: &'static str = "analyze_symptoms";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Analyze a list of reported symptoms and return \
        candidate allergies ranked by how many symptoms match, with a \
        confidence level per candidate.";

    pub fn new(analyzer: Arc<SymptomAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Declarative schema for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION).param(ParamSpec::required(
            "symptoms",
            ParamKind::StringArray,
            "Reported symptoms (e.g. [\"sneezing\", \"itchy eyes\"])",
        ))
    }

    /// Bind the schema to a handler instance.
    pub fn spec(analyzer: Arc<SymptomAnalyzer>) -> ToolSpec {
        ToolSpec::new(Self::definition(), Arc::new(Self::new(analyzer)))
    }
}

#[async_trait::async_trait]
impl ToolHandler for AnalyzeSymptomsTool {
    async fn execute(&self, arguments: &JsonObject) -> Result<Value, ToolError> {
        let params: AnalyzeSymptomsParams = parse_params(arguments)?;
        info!("Analyzing {} reported symptom(s)", params.symptoms.len());

        let candidates = self.analyzer.analyze(&params.symptoms).await?;

        let note = candidates.is_empty().then(|| {
            "No catalog allergy matches these symptoms. Consider consulting \
             a medical professional."
                .to_string()
        });

        let result = SymptomAnalysisResult {
            reported_symptoms: params.symptoms,
            total_candidates: candidates.len(),
            candidates,
            note,
        };

        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::allergies::InMemoryAllergyStore;
    use serde_json::json;

    fn tool() -> AnalyzeSymptomsTool {
        let store = Arc::new(InMemoryAllergyStore::new());
        AnalyzeSymptomsTool::new(Arc::new(SymptomAnalyzer::new(store)))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_analysis_returns_ranked_candidates() {
        let result = tool()
            .execute(&args(json!({ "symptoms": ["sneezing", "itchy eyes"] })))
            .await
            .unwrap();

        let candidates = result["candidates"].as_array().unwrap();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0]["match_count"], 2);
        assert!(result["note"].is_null());
    }

    #[tokio::test]
    async fn test_no_match_includes_note() {
        let result = tool()
            .execute(&args(json!({ "symptoms": ["glowing in the dark"] })))
            .await
            .unwrap();

        assert_eq!(result["total_candidates"], 0);
        assert!(result["note"].as_str().unwrap().contains("No catalog allergy"));
    }

    #[tokio::test]
    async fn test_empty_symptom_list_is_domain_error() {
        let err = tool()
            .execute(&args(json!({ "symptoms": [] })))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No symptoms provided");
    }

    #[test]
    fn test_definition_declares_sequence() {
        let schema = AnalyzeSymptomsTool::definition().input_schema();
        assert_eq!(schema["properties"]["symptoms"]["type"], "array");
        assert_eq!(schema["properties"]["symptoms"]["items"]["type"], "string");
    }
}
