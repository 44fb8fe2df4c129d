//! Core data types for the allergy domain.
//!
//! Records are static catalog data: constructed once at startup and shared
//! read-only between handlers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of an allergic reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Wire-format values accepted by tool schemas, in ascending order.
    pub const WIRE_VALUES: &'static [&'static str] = &["mild", "moderate", "severe"];

    /// The lowercase wire-format name of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category an allergy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllergyCategory {
    Food,
    Environmental,
}

/// Recommended treatments, tiered by reaction severity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TreatmentPlan {
    pub mild: &'static [&'static str],
    pub moderate: &'static [&'static str],
    pub severe: &'static [&'static str],
}

impl TreatmentPlan {
    /// Treatments for the given severity tier.
    pub fn for_severity(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Mild => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
        }
    }
}

/// A single allergy catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AllergyRecord {
    /// Stable identifier used by `get_allergy_info`.
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Food or environmental.
    pub category: AllergyCategory,

    /// Typical severity of reactions for this allergy.
    pub severity: Severity,

    /// Symptoms commonly associated with this allergy.
    pub symptoms: &'static [&'static str],

    /// Foods or environments that commonly trigger a reaction.
    pub common_triggers: &'static [&'static str],

    /// Severity-tiered treatment recommendations.
    pub treatments: TreatmentPlan,

    /// Short prose description.
    pub description: &'static str,
}

impl AllergyRecord {
    /// Case-insensitive match against the record name or id.
    pub fn matches_name(&self, name: &str) -> bool {
        let needle = name.trim();
        self.name.eq_ignore_ascii_case(needle) || self.id.eq_ignore_ascii_case(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_wire_values_round_trip() {
        for value in Severity::WIRE_VALUES {
            let parsed: Severity = serde_json::from_value(serde_json::json!(value)).unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn test_severity_rejects_unknown_value() {
        let result: Result<Severity, _> = serde_json::from_value(serde_json::json!("extreme"));
        assert!(result.is_err());
    }

    #[test]
    fn test_treatment_plan_selects_tier() {
        let plan = TreatmentPlan {
            mild: &["rest"],
            moderate: &["antihistamines"],
            severe: &["epinephrine"],
        };
        assert_eq!(plan.for_severity(Severity::Mild), &["rest"]);
        assert_eq!(plan.for_severity(Severity::Severe), &["epinephrine"]);
    }
}
