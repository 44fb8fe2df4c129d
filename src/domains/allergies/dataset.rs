//! Built-in allergy catalog data.
//!
//! The record set is fixed at compile time. The store owns the runtime copy.

use super::model::{AllergyCategory, AllergyRecord, Severity, TreatmentPlan};

/// All built-in allergy records, in catalog order.
pub fn records() -> Vec<AllergyRecord> {
    vec![
        AllergyRecord {
            id: "peanut",
            name: "Peanut Allergy",
            category: AllergyCategory::Food,
            severity: Severity::Severe,
            symptoms: &[
                "hives",
                "swelling of lips or tongue",
                "difficulty breathing",
                "wheezing",
                "stomach cramps",
                "anaphylaxis",
            ],
            common_triggers: &[
                "peanuts",
                "peanut butter",
                "peanut oil",
                "baked goods",
                "satay and other peanut sauces",
            ],
            treatments: TreatmentPlan {
                mild: &["oral antihistamines", "monitor symptoms for progression"],
                moderate: &[
                    "oral antihistamines",
                    "consult an allergist",
                    "carry an epinephrine auto-injector",
                ],
                severe: &[
                    "use epinephrine auto-injector immediately",
                    "call emergency services",
                    "strict avoidance of all peanut products",
                ],
            },
            description: "One of the most common and dangerous food allergies. \
                          Trace amounts can trigger reactions; cross-contamination \
                          in kitchens is a frequent cause.",
        },
        AllergyRecord {
            id: "shellfish",
            name: "Shellfish Allergy",
            category: AllergyCategory::Food,
            severity: Severity::Severe,
            symptoms: &[
                "hives",
                "nausea",
                "vomiting",
                "wheezing",
                "swelling of the throat",
                "dizziness",
                "anaphylaxis",
            ],
            common_triggers: &["shrimp", "crab", "lobster", "oysters", "mussels"],
            treatments: TreatmentPlan {
                mild: &["oral antihistamines", "avoid further exposure"],
                moderate: &[
                    "oral antihistamines",
                    "consult an allergist",
                    "carry an epinephrine auto-injector",
                ],
                severe: &[
                    "use epinephrine auto-injector immediately",
                    "call emergency services",
                    "avoid seafood restaurants due to airborne proteins",
                ],
            },
            description: "An immune reaction to crustaceans and mollusks. Usually \
                          lifelong and often first appears in adulthood.",
        },
        AllergyRecord {
            id: "dairy",
            name: "Dairy Allergy",
            category: AllergyCategory::Food,
            severity: Severity::Moderate,
            symptoms: &["bloating", "stomach cramps", "diarrhea", "hives", "vomiting"],
            common_triggers: &["milk", "cheese", "butter", "yogurt", "cream"],
            treatments: TreatmentPlan {
                mild: &["eliminate dairy temporarily", "try lactose-free alternatives"],
                moderate: &["oral antihistamines", "dietary review with a nutritionist"],
                severe: &[
                    "strict dairy elimination",
                    "consult an allergist for testing",
                ],
            },
            description: "An immune reaction to milk proteins (casein and whey), \
                          distinct from lactose intolerance.",
        },
        AllergyRecord {
            id: "gluten",
            name: "Gluten Sensitivity",
            category: AllergyCategory::Food,
            severity: Severity::Moderate,
            symptoms: &[
                "bloating",
                "abdominal pain",
                "diarrhea",
                "fatigue",
                "headache",
                "skin rash",
            ],
            common_triggers: &["wheat bread", "pasta", "barley", "rye", "beer"],
            treatments: TreatmentPlan {
                mild: &["reduce gluten intake", "keep a food diary"],
                moderate: &["gluten-free diet", "screen for celiac disease"],
                severe: &[
                    "strict gluten-free diet",
                    "gastroenterology referral",
                ],
            },
            description: "Adverse reaction to gluten proteins found in wheat, \
                          barley, and rye. Symptoms are mainly gastrointestinal.",
        },
        AllergyRecord {
            id: "egg",
            name: "Egg Allergy",
            category: AllergyCategory::Food,
            severity: Severity::Mild,
            symptoms: &[
                "skin rash",
                "hives",
                "nasal congestion",
                "vomiting",
                "stomach cramps",
            ],
            common_triggers: &[
                "eggs",
                "mayonnaise",
                "meringue",
                "baked goods",
                "some vaccines",
            ],
            treatments: TreatmentPlan {
                mild: &["oral antihistamines", "avoid egg-containing foods"],
                moderate: &["oral antihistamines", "consult an allergist"],
                severe: &[
                    "carry an epinephrine auto-injector",
                    "strict avoidance including baked-in egg",
                ],
            },
            description: "Common in children and frequently outgrown. Reactions \
                          to baked egg are often milder than to raw or lightly \
                          cooked egg.",
        },
        AllergyRecord {
            id: "pollen",
            name: "Pollen Allergy",
            category: AllergyCategory::Environmental,
            severity: Severity::Mild,
            symptoms: &[
                "sneezing",
                "runny nose",
                "itchy eyes",
                "nasal congestion",
                "watery eyes",
            ],
            common_triggers: &["tree pollen", "grass pollen", "ragweed"],
            treatments: TreatmentPlan {
                mild: &["oral antihistamines", "keep windows closed on high-pollen days"],
                moderate: &["nasal corticosteroid spray", "oral antihistamines"],
                severe: &["allergen immunotherapy", "allergist consultation"],
            },
            description: "Seasonal allergic rhinitis (hay fever) triggered by \
                          airborne pollen. Severity varies with season and region.",
        },
        AllergyRecord {
            id: "dust-mite",
            name: "Dust Mite Allergy",
            category: AllergyCategory::Environmental,
            severity: Severity::Mild,
            symptoms: &[
                "sneezing",
                "runny nose",
                "itchy eyes",
                "coughing",
                "postnasal drip",
                "wheezing",
            ],
            common_triggers: &["bedding", "upholstered furniture", "carpets"],
            treatments: TreatmentPlan {
                mild: &["wash bedding weekly in hot water", "oral antihistamines"],
                moderate: &["allergen-proof mattress covers", "nasal corticosteroid spray"],
                severe: &["allergen immunotherapy", "remove carpeting from bedroom"],
            },
            description: "Year-round reaction to microscopic mites in household \
                          dust. Symptoms are often worst in the bedroom.",
        },
        AllergyRecord {
            id: "pet-dander",
            name: "Pet Dander Allergy",
            category: AllergyCategory::Environmental,
            severity: Severity::Moderate,
            symptoms: &[
                "sneezing",
                "runny nose",
                "itchy eyes",
                "hives",
                "wheezing",
                "chest tightness",
            ],
            common_triggers: &["cats", "dogs", "rodents", "horses"],
            treatments: TreatmentPlan {
                mild: &["oral antihistamines", "keep pets out of the bedroom"],
                moderate: &["HEPA air filtration", "nasal corticosteroid spray"],
                severe: &["allergen immunotherapy", "consider rehoming the animal"],
            },
            description: "Reaction to proteins in animal skin flakes, saliva, and \
                          urine. Cat allergens are especially persistent indoors.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_unique() {
        let records = records();
        let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_every_record_has_symptoms_and_treatments() {
        for record in records() {
            assert!(!record.symptoms.is_empty(), "{} has no symptoms", record.id);
            assert!(
                !record.treatments.mild.is_empty()
                    && !record.treatments.moderate.is_empty()
                    && !record.treatments.severe.is_empty(),
                "{} has an empty treatment tier",
                record.id
            );
        }
    }
}
