//! Allergy domain module.
//!
//! Domain logic consumed by the tool handlers:
//!
//! - `model` - record and severity types
//! - `dataset` - the built-in record set
//! - `store` - the `AllergyStore` lookup boundary and its in-memory impl
//! - `analyzer` - symptom-to-allergy matching
//! - `error` - domain error types

pub mod analyzer;
pub mod dataset;
mod error;
pub mod model;
pub mod store;

pub use analyzer::{MatchConfidence, SymptomAnalyzer, SymptomMatch};
pub use error::AllergyError;
pub use model::{AllergyCategory, AllergyRecord, Severity, TreatmentPlan};
pub use store::{AllergyStore, InMemoryAllergyStore};
