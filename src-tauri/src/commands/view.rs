use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::analysis::chart::{build_breakdown_charts, BreakdownCharts};
use crate::analysis::feedback::{parse_feedback, FeedbackBlock};
use crate::models::matching::KeywordTiers;
use crate::models::resume::ContactInfo;
use crate::models::session::SessionState;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub selected_file: Option<String>,
    pub loading: bool,
    pub candidate_name: Option<String>,
    pub contact: Option<ContactInfo>,
    pub extracted_skills: Vec<String>,
    pub extracted_keywords: Vec<String>,
    pub has_resume: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsOverview {
    pub total_score: f64,
    pub grade: String,
    pub rule_based_score: f64,
    pub llm_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub score: Option<String>,
    pub detected_roles: Vec<String>,
    pub matched: KeywordTiers,
    pub missing: KeywordTiers,
}

#[tauri::command]
pub async fn get_session_snapshot(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<SessionSnapshot, String> {
    session_snapshot_internal(session.inner())
}

pub fn session_snapshot_internal(
    session: &Arc<Mutex<SessionState>>,
) -> Result<SessionSnapshot, String> {
    let lock = session.lock().map_err(|_| "Session lock error".to_string())?;
    Ok(SessionSnapshot {
        selected_file: lock.selected_file.clone(),
        loading: lock.loading,
        candidate_name: lock.parsed.as_ref().and_then(|p| p.name.clone()),
        contact: lock.parsed.as_ref().map(|p| p.contact.clone()),
        extracted_skills: lock.extracted_skills.clone(),
        extracted_keywords: lock.extracted_keywords.clone(),
        has_resume: lock.parsed.is_some(),
    })
}

#[tauri::command]
pub async fn get_ats_overview(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<Option<AtsOverview>, String> {
    ats_overview_internal(session.inner())
}

pub fn ats_overview_internal(
    session: &Arc<Mutex<SessionState>>,
) -> Result<Option<AtsOverview>, String> {
    let lock = session.lock().map_err(|_| "Session lock error".to_string())?;
    let overview = lock
        .parsed
        .as_ref()
        .and_then(|p| p.ats_score.as_ref())
        .map(|ats| AtsOverview {
            total_score: ats.total_score,
            grade: ats.grade.clone(),
            rule_based_score: ats.rule_based_score,
            llm_score: ats.llm_score,
        });
    Ok(overview)
}

/// Both chart series, rebuilt in full from the current breakdown. `None`
/// (render nothing) when there is no breakdown to draw.
#[tauri::command]
pub async fn get_breakdown_charts(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<Option<BreakdownCharts>, String> {
    breakdown_charts_internal(session.inner())
}

pub fn breakdown_charts_internal(
    session: &Arc<Mutex<SessionState>>,
) -> Result<Option<BreakdownCharts>, String> {
    let lock = session.lock().map_err(|_| "Session lock error".to_string())?;
    let charts = lock
        .parsed
        .as_ref()
        .and_then(|p| p.ats_score.as_ref())
        .filter(|ats| !ats.rule_breakdown.is_empty())
        .map(|ats| build_breakdown_charts(&ats.rule_breakdown));
    Ok(charts)
}

#[tauri::command]
pub async fn get_feedback_blocks(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<Vec<FeedbackBlock>, String> {
    feedback_blocks_internal(session.inner())
}

pub fn feedback_blocks_internal(
    session: &Arc<Mutex<SessionState>>,
) -> Result<Vec<FeedbackBlock>, String> {
    let lock = session.lock().map_err(|_| "Session lock error".to_string())?;
    let blocks = lock
        .parsed
        .as_ref()
        .and_then(|p| p.ats_score.as_ref())
        .and_then(|ats| ats.llm_feedback.as_deref())
        .map(parse_feedback)
        .unwrap_or_default();
    Ok(blocks)
}

#[tauri::command]
pub async fn get_match_view(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<MatchView, String> {
    match_view_internal(session.inner())
}

pub fn match_view_internal(session: &Arc<Mutex<SessionState>>) -> Result<MatchView, String> {
    let lock = session.lock().map_err(|_| "Session lock error".to_string())?;
    let keywords = lock.missing_keywords.clone().unwrap_or_default();
    Ok(MatchView {
        score: lock.match_score.clone(),
        detected_roles: keywords.detected_roles,
        matched: keywords.matched,
        missing: keywords.missing,
    })
}
