//! Trend analysis output (stage 1).

use serde::{Deserialize, Serialize};

/// What currently works on senior-audience story channels.
///
/// # Examples
///
/// ```
/// use storyteller_core::AnalysisResult;
///
/// let json = r#"{"trends":["황혼 이혼"],"keywords":["복수"],"dramaTechniques":["반전"]}"#;
/// let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
/// assert_eq!(analysis.drama_techniques, vec!["반전".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Popular story trends
    pub trends: Vec<String>,
    /// Core keywords
    pub keywords: Vec<String>,
    /// Dramatic techniques in use
    pub drama_techniques: Vec<String>,
}
