use serde::Serialize;

/// One display block of the qualitative feedback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum FeedbackBlock {
    Header(String),
    Bullet(String),
    Paragraph(String),
}

/// Best-effort reader for the lightweight markup the scoring service emits.
/// Line-oriented only: each physical line maps to exactly one block, blank
/// lines are dropped, nested constructs are not supported.
pub fn parse_feedback(text: &str) -> Vec<FeedbackBlock> {
    let mut blocks = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
            let inner = trimmed[2..trimmed.len() - 2].trim().to_string();
            blocks.push(FeedbackBlock::Header(inner));
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            blocks.push(FeedbackBlock::Bullet(rest.trim().to_string()));
        } else {
            blocks.push(FeedbackBlock::Paragraph(trimmed.to_string()));
        }
    }

    blocks
}
