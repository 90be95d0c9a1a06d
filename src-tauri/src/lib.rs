pub mod analysis;
pub mod commands;
pub mod models;
pub mod service;

use commands::{
    matching::{run_match, set_jd_text},
    settings::{get_settings, save_settings},
    upload::{select_resume_file, upload_resume},
    view::{
        get_ats_overview, get_breakdown_charts, get_feedback_blocks, get_match_view,
        get_session_snapshot,
    },
};
use models::session::SessionState;
use std::sync::{Arc, Mutex};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(Arc::new(Mutex::new(SessionState::default())))
        .invoke_handler(tauri::generate_handler![
            select_resume_file,
            upload_resume,
            set_jd_text,
            run_match,
            get_session_snapshot,
            get_ats_overview,
            get_breakdown_charts,
            get_feedback_blocks,
            get_match_view,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
