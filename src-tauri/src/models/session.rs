use crate::models::matching::MissingKeywords;
use crate::models::resume::ResumeArtifact;

/// Dashboard session state shared between the webview and the command layer.
///
/// All mutation happens through the named transitions below. The two network
/// operations (upload, match) each carry a sequence number issued by their
/// `begin_*` transition; a completion whose sequence is no longer current is
/// discarded, so a response that outlives a newer file selection can never
/// clobber fresher state.
#[derive(Debug, Default)]
pub struct SessionState {
    pub selected_file: Option<String>,
    pub jd_text: String,
    pub loading: bool,
    pub parsed: Option<ResumeArtifact>,
    pub extracted_skills: Vec<String>,
    pub extracted_keywords: Vec<String>,
    pub match_score: Option<String>,
    pub missing_keywords: Option<MissingKeywords>,
    upload_seq: u64,
    match_seq: u64,
}

impl SessionState {
    /// Selecting a file invalidates every prior analysis, including any
    /// request still in flight.
    pub fn select_file(&mut self, path: String) {
        self.selected_file = Some(path);
        self.parsed = None;
        self.extracted_skills.clear();
        self.extracted_keywords.clear();
        self.match_score = None;
        self.missing_keywords = None;
        self.upload_seq += 1;
        self.match_seq += 1;
    }

    pub fn set_jd_text(&mut self, text: String) {
        self.jd_text = text;
    }

    /// Issues a sequence number for a new upload, or `None` while another
    /// operation is still running.
    pub fn begin_upload(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.upload_seq += 1;
        Some(self.upload_seq)
    }

    /// Applies an upload result. Returns `false` when the result was stale
    /// and dropped. The loading flag clears either way so the UI stays
    /// interactive.
    pub fn upload_succeeded(&mut self, seq: u64, artifact: ResumeArtifact) -> bool {
        self.loading = false;
        if seq != self.upload_seq {
            return false;
        }
        self.extracted_skills = artifact.extracted_skills.clone();
        self.extracted_keywords = artifact.extracted_keywords.clone();
        self.parsed = Some(artifact);
        true
    }

    pub fn upload_failed(&mut self, _seq: u64) {
        self.loading = false;
    }

    pub fn begin_match(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.match_seq += 1;
        Some(self.match_seq)
    }

    pub fn match_succeeded(
        &mut self,
        seq: u64,
        score_display: String,
        missing: Option<MissingKeywords>,
    ) -> bool {
        self.loading = false;
        if seq != self.match_seq {
            return false;
        }
        self.match_score = Some(score_display);
        self.missing_keywords = missing;
        true
    }

    pub fn match_failed(&mut self, _seq: u64) {
        self.loading = false;
    }
}
