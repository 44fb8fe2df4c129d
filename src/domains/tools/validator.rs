//! Argument validation against declared tool schemas.
//!
//! Validation is a pure function of the definition and the incoming
//! arguments. Every violation is collected before returning, so one failed
//! call reports all of its problems at once and reason ordering follows
//! schema declaration order.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::catalog::{ParamKind, ParamSpec, ToolDefinition};

/// Outcome of validating one invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The arguments conform to the schema.
    Valid,

    /// One or more constraints were violated, one reason per violation.
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate `arguments` against a tool definition.
///
/// Arguments not declared in the schema are ignored: clients may send extra
/// fields without breaking older servers.
pub fn validate(definition: &ToolDefinition, arguments: &JsonObject) -> ValidationResult {
    let mut reasons = Vec::new();

    for param in &definition.params {
        match arguments.get(param.name) {
            None => {
                if param.required {
                    reasons.push(format!("missing required field '{}'", param.name));
                }
            }
            Some(value) => check_value(param, value, &mut reasons),
        }
    }

    if reasons.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(reasons)
    }
}

fn check_value(param: &ParamSpec, value: &Value, reasons: &mut Vec<String>) {
    match param.kind {
        ParamKind::String => {
            if !value.is_string() {
                reasons.push(type_mismatch(param));
            }
        }
        ParamKind::Number => {
            if !value.is_number() {
                reasons.push(type_mismatch(param));
            }
        }
        ParamKind::Boolean => {
            if !value.is_boolean() {
                reasons.push(type_mismatch(param));
            }
        }
        ParamKind::StringArray => match value.as_array() {
            None => reasons.push(type_mismatch(param)),
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        reasons.push(format!(
                            "field '{}' element {} must be a string",
                            param.name, index
                        ));
                    }
                }
            }
        },
        // Enum membership is reported separately from type errors.
        ParamKind::Enum(allowed) => match value.as_str() {
            None => reasons.push(type_mismatch(param)),
            Some(s) => {
                if !allowed.contains(&s) {
                    reasons.push(format!(
                        "field '{}' must be one of: {}",
                        param.name,
                        allowed.join(", ")
                    ));
                }
            }
        },
    }
}

fn type_mismatch(param: &ParamSpec) -> String {
    format!("field '{}' must be {}", param.name, param.kind.expected())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog::ParamSpec;
    use serde_json::json;

    fn definition() -> ToolDefinition {
        ToolDefinition::new("sample", "A sample tool")
            .param(ParamSpec::required("query", ParamKind::String, "text"))
            .param(ParamSpec::required("count", ParamKind::Number, "count"))
            .param(ParamSpec::optional(
                "severity",
                ParamKind::Enum(&["mild", "moderate", "severe"]),
                "filter",
            ))
            .param(ParamSpec::optional(
                "symptoms",
                ParamKind::StringArray,
                "symptom list",
            ))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_valid_arguments() {
        let result = validate(
            &definition(),
            &args(json!({
                "query": "peanut",
                "count": 3,
                "severity": "severe",
                "symptoms": ["hives", "wheezing"],
            })),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_missing_required_field() {
        let ValidationResult::Invalid(reasons) =
            validate(&definition(), &args(json!({ "count": 1 })))
        else {
            panic!("expected invalid");
        };
        assert_eq!(reasons, vec!["missing required field 'query'"]);
    }

    #[test]
    fn test_scalar_type_mismatch() {
        let ValidationResult::Invalid(reasons) =
            validate(&definition(), &args(json!({ "query": 42, "count": "three" })))
        else {
            panic!("expected invalid");
        };
        assert_eq!(
            reasons,
            vec![
                "field 'query' must be a string",
                "field 'count' must be a number",
            ]
        );
    }

    #[test]
    fn test_enum_membership_is_its_own_reason() {
        let ValidationResult::Invalid(reasons) = validate(
            &definition(),
            &args(json!({ "query": "x", "count": 1, "severity": "extreme" })),
        ) else {
            panic!("expected invalid");
        };
        assert_eq!(
            reasons,
            vec!["field 'severity' must be one of: mild, moderate, severe"]
        );
    }

    #[test]
    fn test_enum_with_non_string_value_is_type_error() {
        let ValidationResult::Invalid(reasons) = validate(
            &definition(),
            &args(json!({ "query": "x", "count": 1, "severity": 2 })),
        ) else {
            panic!("expected invalid");
        };
        assert_eq!(reasons, vec!["field 'severity' must be a string"]);
    }

    #[test]
    fn test_sequence_requires_array() {
        let ValidationResult::Invalid(reasons) = validate(
            &definition(),
            &args(json!({ "query": "x", "count": 1, "symptoms": "sneezing" })),
        ) else {
            panic!("expected invalid");
        };
        assert_eq!(reasons, vec!["field 'symptoms' must be an array of strings"]);
    }

    #[test]
    fn test_sequence_checks_each_element() {
        let ValidationResult::Invalid(reasons) = validate(
            &definition(),
            &args(json!({ "query": "x", "count": 1, "symptoms": ["ok", 2, false] })),
        ) else {
            panic!("expected invalid");
        };
        assert_eq!(
            reasons,
            vec![
                "field 'symptoms' element 1 must be a string",
                "field 'symptoms' element 2 must be a string",
            ]
        );
    }

    #[test]
    fn test_all_violations_collected_in_declaration_order() {
        let ValidationResult::Invalid(reasons) = validate(
            &definition(),
            &args(json!({ "count": true, "severity": "extreme", "symptoms": 7 })),
        ) else {
            panic!("expected invalid");
        };
        assert_eq!(
            reasons,
            vec![
                "missing required field 'query'",
                "field 'count' must be a number",
                "field 'severity' must be one of: mild, moderate, severe",
                "field 'symptoms' must be an array of strings",
            ]
        );
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let result = validate(
            &definition(),
            &args(json!({ "query": "x", "count": 1, "future_flag": true })),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let arguments = args(json!({ "severity": "extreme" }));
        let first = validate(&definition(), &arguments);
        let second = validate(&definition(), &arguments);
        assert_eq!(first, second);
    }
}
