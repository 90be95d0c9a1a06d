use log::{debug, error, info};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

use crate::models::matching::MatchResponse;
use crate::models::resume::ResumeArtifact;

pub type ServiceResult<T> = std::result::Result<T, ServiceFailure>;

/// Failure taxonomy for the two service round trips. Every variant is
/// recoverable: the session stays interactive and a retry is always allowed.
#[derive(Debug, Clone)]
pub enum ServiceFailure {
    /// Bad or missing local input; no request was made.
    Validation(String),
    /// The request never produced an HTTP response.
    Transport(String),
    /// Non-2xx status from the service.
    RemoteStatus(u16),
    /// 2xx response whose body carries an `error` field.
    RemoteSoft(String),
    /// 2xx response whose body does not match the expected schema.
    Decode(String),
    /// The response arrived after a newer file selection replaced it; its
    /// data was dropped, not published.
    Stale,
}

impl Display for ServiceFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceFailure::Validation(msg) => write!(f, "{msg}"),
            ServiceFailure::Transport(msg) => {
                write!(f, "Could not reach the resume service: {msg}")
            }
            ServiceFailure::RemoteStatus(code) => {
                write!(f, "Resume service returned HTTP {code}")
            }
            ServiceFailure::RemoteSoft(msg) => write!(f, "{msg}"),
            ServiceFailure::Decode(msg) => {
                write!(f, "Unexpected response from the resume service: {msg}")
            }
            ServiceFailure::Stale => {
                write!(f, "A newer file selection superseded this request.")
            }
        }
    }
}

impl std::error::Error for ServiceFailure {}

impl From<reqwest::Error> for ServiceFailure {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            ServiceFailure::RemoteStatus(status.as_u16())
        } else if error.is_decode() {
            ServiceFailure::Decode(error.to_string())
        } else {
            ServiceFailure::Transport(error.to_string())
        }
    }
}

/// A 2xx upload body: either a parsed resume or a soft error, never both.
#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    artifact: ResumeArtifact,
}

/// Typed client for the remote parsing/matching service. No timeout is set;
/// a hung service stalls the current operation but never the process.
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /upload` — multipart form with a single `file` field, original
    /// filename preserved.
    pub async fn upload(&self, file_name: &str, data: Vec<u8>) -> ServiceResult<ResumeArtifact> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let url = format!("{}/upload", self.base_url);
        debug!("uploading {file_name} to {url}");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ServiceFailure::from)?;

        let status = response.status();
        if !status.is_success() {
            error!("upload rejected with HTTP {status}");
            return Err(ServiceFailure::RemoteStatus(status.as_u16()));
        }

        let envelope: UploadEnvelope = response
            .json()
            .await
            .map_err(|e| ServiceFailure::Decode(e.to_string()))?;
        if let Some(message) = envelope.error {
            return Err(ServiceFailure::RemoteSoft(message));
        }

        info!(
            "parsed resume with {} skills and {} keywords",
            envelope.artifact.extracted_skills.len(),
            envelope.artifact.extracted_keywords.len()
        );
        Ok(envelope.artifact)
    }

    /// `POST /match` — JSON body `{resume_text, jd_text}`. A 2xx body may
    /// still carry a soft `error`.
    pub async fn match_jd(&self, resume_text: &str, jd_text: &str) -> ServiceResult<MatchResponse> {
        let url = format!("{}/match", self.base_url);
        let body = serde_json::json!({
            "resume_text": resume_text,
            "jd_text": jd_text,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ServiceFailure::from)?;

        let status = response.status();
        if !status.is_success() {
            error!("match rejected with HTTP {status}");
            return Err(ServiceFailure::RemoteStatus(status.as_u16()));
        }

        let mut outcome: MatchResponse = response
            .json()
            .await
            .map_err(|e| ServiceFailure::Decode(e.to_string()))?;
        if let Some(message) = outcome.error.take() {
            return Err(ServiceFailure::RemoteSoft(message));
        }

        debug!("match score {:.4}", outcome.score);
        Ok(outcome)
    }
}
