use crate::models::resume::ResumeArtifact;

/// Minimum character count the matcher will accept. Anything shorter reads
/// like a truncated or garbled extraction, not a real resume.
pub const MIN_MATCH_TEXT_LEN: usize = 50;

/// Canonical resume text for JD matching: the extractor's raw text when it
/// has one, otherwise the parsed lines joined by newline, otherwise joined by
/// a single space. Empty string only when neither field is usable.
pub fn resolve_resume_text(artifact: &ResumeArtifact) -> String {
    if let Some(raw) = &artifact.raw_text {
        if !raw.trim().is_empty() {
            return raw.clone();
        }
    }

    let joined = artifact.lines.join("\n");
    if !joined.trim().is_empty() {
        return joined;
    }

    artifact.lines.join(" ")
}

pub fn is_matchable(text: &str) -> bool {
    text.chars().count() >= MIN_MATCH_TEXT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_raw_text_over_lines() {
        let artifact = ResumeArtifact {
            raw_text: Some("full raw body".to_string()),
            lines: vec!["line one".to_string(), "line two".to_string()],
            ..ResumeArtifact::default()
        };
        assert_eq!(resolve_resume_text(&artifact), "full raw body");
    }

    #[test]
    fn falls_back_to_newline_joined_lines() {
        let artifact = ResumeArtifact {
            raw_text: Some("   ".to_string()),
            lines: vec!["line one".to_string(), "line two".to_string()],
            ..ResumeArtifact::default()
        };
        assert_eq!(resolve_resume_text(&artifact), "line one\nline two");
    }

    #[test]
    fn empty_artifact_resolves_to_empty_string() {
        assert_eq!(resolve_resume_text(&ResumeArtifact::default()), "");
    }

    #[test]
    fn threshold_is_exactly_fifty_characters() {
        assert!(!is_matchable(&"x".repeat(49)));
        assert!(is_matchable(&"x".repeat(50)));
    }
}
