use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
}

/// One rule-based scoring category. The service attaches extra diagnostic
/// fields to some categories (`count`, `word_count`); those are ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleCategory {
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsScore {
    pub total_score: f64,
    pub grade: String,
    pub rule_based_score: f64,
    pub llm_score: f64,
    /// Insertion order is meaningful: it drives axis/label order in both
    /// chart series.
    pub rule_breakdown: IndexMap<String, RuleCategory>,
    pub llm_feedback: Option<String>,
}

/// Parsed resume as returned by the parsing service. Every field is optional
/// on the wire; absent fields stay at their empty defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeArtifact {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub raw_text: Option<String>,
    pub lines: Vec<String>,
    pub extracted_skills: Vec<String>,
    pub extracted_keywords: Vec<String>,
    pub ats_score: Option<AtsScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_payload_with_empty_defaults() {
        let artifact: ResumeArtifact = serde_json::from_str("{}").unwrap();
        assert!(artifact.name.is_none());
        assert!(artifact.extracted_skills.is_empty());
        assert!(artifact.ats_score.is_none());
    }

    #[test]
    fn breakdown_preserves_wire_order_and_ignores_extras() {
        let raw = r#"{
            "ats_score": {
                "total_score": 82,
                "grade": "A (Very Good)",
                "rule_based_score": 58,
                "llm_score": 24,
                "rule_breakdown": {
                    "contact_info": {"score": 8, "max": 10},
                    "skills_detection": {"score": 15, "max": 15, "count": 12},
                    "resume_length": {"score": 7, "max": 10, "word_count": 950}
                }
            }
        }"#;

        let artifact: ResumeArtifact = serde_json::from_str(raw).unwrap();
        let ats = artifact.ats_score.unwrap();
        let keys: Vec<&str> = ats.rule_breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, ["contact_info", "skills_detection", "resume_length"]);
        assert_eq!(ats.rule_breakdown["resume_length"].score, 7.0);
    }
}
