use log::debug;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::models::resume::ResumeArtifact;
use crate::models::session::SessionState;
use crate::service::{ServiceClient, ServiceFailure, ServiceResult};

#[tauri::command]
pub async fn select_resume_file(
    path: String,
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
) -> Result<(), String> {
    select_resume_file_internal(path, session.inner())
}

/// Records the chosen file and wipes every prior analysis, including any
/// response still in flight for the previous file.
pub fn select_resume_file_internal(
    path: String,
    session: &Arc<Mutex<SessionState>>,
) -> Result<(), String> {
    let mut lock = session
        .lock()
        .map_err(|_| "Session lock error".to_string())?;
    lock.select_file(path);
    Ok(())
}

#[tauri::command]
pub async fn upload_resume(
    session: tauri::State<'_, Arc<Mutex<SessionState>>>,
    app: tauri::AppHandle,
) -> Result<ResumeArtifact, String> {
    let base_url = crate::commands::settings::effective_service_url(&app)?;
    upload_resume_internal(&base_url, session.inner())
        .await
        .map_err(|e| e.to_string())
}

/// Single upload round trip: read the selected file, post it, republish the
/// parsed artifact. The loading flag is restored on every path.
pub async fn upload_resume_internal(
    base_url: &str,
    session: &Arc<Mutex<SessionState>>,
) -> ServiceResult<ResumeArtifact> {
    let (seq, path) = {
        let mut lock = session
            .lock()
            .map_err(|_| ServiceFailure::Validation("Session lock error".to_string()))?;
        let Some(path) = lock.selected_file.clone() else {
            return Err(ServiceFailure::Validation(
                "Select a resume file first.".to_string(),
            ));
        };
        let Some(seq) = lock.begin_upload() else {
            return Err(ServiceFailure::Validation(
                "Another request is still running.".to_string(),
            ));
        };
        (seq, path)
    };

    let result = read_and_upload(base_url, &path).await;

    let mut lock = session
        .lock()
        .map_err(|_| ServiceFailure::Validation("Session lock error".to_string()))?;
    match result {
        Ok(artifact) => {
            if lock.upload_succeeded(seq, artifact.clone()) {
                Ok(artifact)
            } else {
                debug!("discarding stale upload response for {path}");
                Err(ServiceFailure::Stale)
            }
        }
        Err(failure) => {
            lock.upload_failed(seq);
            Err(failure)
        }
    }
}

async fn read_and_upload(base_url: &str, path: &str) -> ServiceResult<ResumeArtifact> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| ServiceFailure::Validation(format!("Could not read {path}: {e}")))?;
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());

    ServiceClient::new(base_url).upload(&file_name, data).await
}
