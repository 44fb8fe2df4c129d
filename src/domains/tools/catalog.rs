//! Tool catalog - the declarative tool metadata.
//!
//! Tool schemas are plain data (`ParamSpec` lists) rather than per-tool
//! validation code. The catalog is built once at startup, answers discovery
//! queries, and resolves dispatch targets. It exposes no mutation API.

use std::collections::HashSet;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use super::error::ToolError;

// ============================================================================
// Parameter Specs
// ============================================================================

/// The declared type of a single tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A JSON string.
    String,

    /// Any JSON number.
    Number,

    /// A JSON boolean.
    Boolean,

    /// An array whose elements must all be strings.
    StringArray,

    /// A string restricted to a fixed set of values.
    Enum(&'static [&'static str]),
}

impl ParamKind {
    /// Human-readable type name used in validation messages.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "a string",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::StringArray => "an array of strings",
        }
    }

    /// JSON Schema fragment for this parameter type.
    fn schema(&self, description: &str) -> Value {
        match self {
            Self::String => json!({ "type": "string", "description": description }),
            Self::Number => json!({ "type": "number", "description": description }),
            Self::Boolean => json!({ "type": "boolean", "description": description }),
            Self::StringArray => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": description,
            }),
            Self::Enum(values) => json!({
                "type": "string",
                "enum": values,
                "description": description,
            }),
        }
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Wire-format parameter name.
    pub name: &'static str,

    /// Declared type.
    pub kind: ParamKind,

    /// Whether the parameter must be present in every invocation.
    pub required: bool,

    /// Description shown to clients in the discovery response.
    pub description: &'static str,
}

impl ParamSpec {
    /// Declare a required parameter.
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// Declare an optional parameter.
    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Identity and input schema of one tool.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    /// Unique catalog key.
    pub name: &'static str,

    /// Human-readable description shown to clients.
    pub description: &'static str,

    /// Declared parameters, in declaration order.
    pub params: Vec<ParamSpec>,
}

impl ToolDefinition {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            params: Vec::new(),
        }
    }

    /// Append a parameter declaration.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Render the wire-format JSON Schema object for this tool's input.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        for param in &self.params {
            properties.insert(param.name.to_string(), param.kind.schema(param.description));
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.to_string()))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }

    /// Create a Tool model for this definition (discovery metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tool Catalog
// ============================================================================

/// The immutable catalog of tool definitions.
pub struct ToolCatalog {
    definitions: Vec<ToolDefinition>,
}

impl ToolCatalog {
    /// Build the catalog, rejecting duplicate tool names.
    ///
    /// A duplicate is a startup configuration error: silently overwriting a
    /// definition would leave the catalog and handler table disagreeing.
    pub fn new(definitions: Vec<ToolDefinition>) -> Result<Self, ToolError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.name) {
                return Err(ToolError::configuration(format!(
                    "duplicate tool definition: {}",
                    definition.name
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// All definitions, in declaration order.
    pub fn list(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Resolve a definition by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// All tools as discovery metadata, in declaration order.
    pub fn to_tools(&self) -> Vec<Tool> {
        self.definitions.iter().map(ToolDefinition::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definition() -> ToolDefinition {
        ToolDefinition::new("sample", "A sample tool")
            .param(ParamSpec::required("query", ParamKind::String, "Search text"))
            .param(ParamSpec::optional(
                "severity",
                ParamKind::Enum(&["mild", "moderate", "severe"]),
                "Severity filter",
            ))
            .param(ParamSpec::optional(
                "tags",
                ParamKind::StringArray,
                "Tag list",
            ))
    }

    #[test]
    fn test_catalog_rejects_duplicate_names() {
        let result = ToolCatalog::new(vec![sample_definition(), sample_definition()]);
        let err = result.err().expect("duplicate should be rejected");
        assert!(err.to_string().contains("duplicate tool definition: sample"));
    }

    #[test]
    fn test_catalog_preserves_declaration_order() {
        let catalog = ToolCatalog::new(vec![
            ToolDefinition::new("bravo", "b"),
            ToolDefinition::new("alpha", "a"),
        ])
        .unwrap();

        let names: Vec<_> = catalog.list().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["bravo", "alpha"]);

        // Discovery metadata follows the same order on every call.
        let first: Vec<_> = catalog.to_tools().iter().map(|t| t.name.clone()).collect();
        let second: Vec<_> = catalog.to_tools().iter().map(|t| t.name.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = sample_definition().input_schema();

        assert_eq!(schema["type"], "object");
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties["query"]["type"], "string");
        assert_eq!(properties["tags"]["type"], "array");
        assert_eq!(properties["tags"]["items"]["type"], "string");
        assert_eq!(
            properties["severity"]["enum"],
            serde_json::json!(["mild", "moderate", "severe"])
        );

        // Only required params appear in the required list.
        assert_eq!(schema["required"], serde_json::json!(["query"]));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = sample_definition().to_tool();
        assert_eq!(tool.name.as_ref(), "sample");
        assert_eq!(tool.description.as_deref(), Some("A sample tool"));
        assert!(tool.input_schema.contains_key("properties"));
    }
}
