use serde::{Deserialize, Serialize};

/// Tiered advice for one month, derived from the target-vs-actual gap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub month: String,
    pub overall: String,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    /// One line per week of the month, in week order.
    pub weekly: Vec<String>,
}
