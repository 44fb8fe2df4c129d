//! Symptom analysis.
//!
//! Ranks catalog records by overlap with a reported symptom list. This is
//! deliberately simple keyword matching: the analyzer is a pluggable
//! collaborator, not a diagnostic engine.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::error::AllergyError;
use super::store::AllergyStore;

/// How strongly a candidate allergy matches the reported symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Moderate,
    Low,
}

impl MatchConfidence {
    fn from_match_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Low,
            2 => Self::Moderate,
            _ => Self::High,
        }
    }
}

/// One candidate allergy produced by an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomMatch {
    pub allergy_id: String,
    pub name: String,
    pub matched_symptoms: Vec<String>,
    pub match_count: usize,
    pub confidence: MatchConfidence,
}

/// Matches reported symptoms against the allergy catalog.
pub struct SymptomAnalyzer {
    store: Arc<dyn AllergyStore>,
}

impl SymptomAnalyzer {
    pub fn new(store: Arc<dyn AllergyStore>) -> Self {
        Self { store }
    }

    /// Rank catalog records by symptom overlap.
    ///
    /// Candidates are ordered by match count (descending), ties broken by
    /// name so repeated calls return identical orderings.
    pub async fn analyze(&self, symptoms: &[String]) -> Result<Vec<SymptomMatch>, AllergyError> {
        let reported: Vec<String> = symptoms
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if reported.is_empty() {
            return Err(AllergyError::NoSymptoms);
        }

        let mut candidates = Vec::new();

        for record in self.store.all().await? {
            let matched: Vec<String> = record
                .symptoms
                .iter()
                .filter(|known| {
                    let known = known.to_lowercase();
                    reported
                        .iter()
                        .any(|r| known.contains(r.as_str()) || r.contains(&known))
                })
                .map(|s| s.to_string())
                .collect();

            if matched.is_empty() {
                continue;
            }

            candidates.push(SymptomMatch {
                allergy_id: record.id.to_string(),
                name: record.name.to_string(),
                match_count: matched.len(),
                confidence: MatchConfidence::from_match_count(matched.len()),
                matched_symptoms: matched,
            });
        }

        candidates.sort_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(
            "Symptom analysis matched {} candidate(s) for {} symptom(s)",
            candidates.len(),
            reported.len()
        );

        Ok(candidates)
    }
}
