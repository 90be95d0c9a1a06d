use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTiers {
    pub critical: Vec<String>,
    pub good: Vec<String>,
    pub optional: Vec<String>,
}

/// Keyword analysis attached to a match result. A keyword appears in at most
/// one of matched/missing per tier; that invariant is the service's to keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingKeywords {
    pub detected_roles: Vec<String>,
    pub matched: KeywordTiers,
    pub missing: KeywordTiers,
}

/// Body of a 2xx response from the matching service. `error` present means a
/// soft failure despite the successful status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchResponse {
    pub score: f64,
    pub missing_keywords: Option<MissingKeywords>,
    pub error: Option<String>,
}
