use log::debug;
use std::sync::{Arc, Mutex};

use crate::analysis::resolver::{is_matchable, resolve_resume_text};
use crate::models::matching::MatchResponse;
use crate::models::session::SessionState;
use crate::service::{ServiceClient, ServiceFailure, ServiceResult};

/// Display form of a match score: the [0,1] fraction scaled to a percentage
/// with one decimal place, using the runtime's default rounding.
pub fn format_match_score(score: f64) -> String {
    format!("{:.1}", score * 100.0)
}

#[tauri::command]
pub async fn set_jd_text(
    text: String,
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<(), String> {
    let mut lock = session
        .lock()
        .map_err(|_| "Session lock error".to_string())?;
    lock.set_jd_text(text);
    Ok(())
}

#[tauri::command]
pub async fn run_match(
    jd_text: String,
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
    app: tauri::AppHandle,
) -> Result<MatchResponse, String> {
    let base_url = crate::commands::settings::effective_service_url(&app)?;
    run_match_internal(&base_url, &jd_text, session.inner())
        .await
        .map_err(|e| e.to_string())
}

/// Single match round trip. Validation failures (no upload yet, empty JD,
/// resume text below the matcher's minimum) are surfaced before any request
/// is made.
pub async fn run_match_internal(
    base_url: &str,
    jd_text: &str,
    session: &Arc<Mutex<SessionState>>,
) -> ServiceResult<MatchResponse> {
    let (seq, resume_text) = {
        let mut lock = session
            .lock()
            .map_err(|_| ServiceFailure::Validation("Session lock error".to_string()))?;
        lock.set_jd_text(jd_text.to_string());

        if jd_text.trim().is_empty() {
            return Err(ServiceFailure::Validation(
                "Paste a job description first.".to_string(),
            ));
        }
        let Some(parsed) = &lock.parsed else {
            return Err(ServiceFailure::Validation(
                "Upload a resume before matching.".to_string(),
            ));
        };
        let resume_text = resolve_resume_text(parsed);
        if !is_matchable(&resume_text) {
            return Err(ServiceFailure::Validation(
                "Resume text is too short for matching. Please re-upload your resume.".to_string(),
            ));
        }
        let Some(seq) = lock.begin_match() else {
            return Err(ServiceFailure::Validation(
                "Another request is still running.".to_string(),
            ));
        };
        (seq, resume_text)
    };

    let result = ServiceClient::new(base_url)
        .match_jd(&resume_text, jd_text)
        .await;

    let mut lock = session
        .lock()
        .map_err(|_| ServiceFailure::Validation("Session lock error".to_string()))?;
    match result {
        Ok(outcome) => {
            let display = format_match_score(outcome.score);
            if lock.match_succeeded(seq, display, outcome.missing_keywords.clone()) {
                Ok(outcome)
            } else {
                debug!("discarding stale match response");
                Err(ServiceFailure::Stale)
            }
        }
        Err(failure) => {
            lock.match_failed(seq);
            Err(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_display_is_one_decimal_place() {
        assert_eq!(format_match_score(0.6789), "67.9");
        assert_eq!(format_match_score(1.0), "100.0");
        assert_eq!(format_match_score(0.0), "0.0");
        assert_eq!(format_match_score(0.5), "50.0");
    }

    #[test]
    fn score_display_rounding_is_pinned() {
        // Rust's default float formatting; exact halves display unchanged.
        assert_eq!(format_match_score(0.12345), "12.3");
        assert_eq!(format_match_score(0.125), "12.5");
    }
}
