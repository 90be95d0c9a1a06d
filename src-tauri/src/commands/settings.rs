use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 1;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

#[tauri::command]
pub async fn get_settings(app: tauri::AppHandle) -> Result<Value, String> {
    load_settings_from_disk(&config_dir(&app)?)
}

#[tauri::command]
pub async fn save_settings(settings: Value, app: tauri::AppHandle) -> Result<Value, String> {
    save_settings_to_disk(&config_dir(&app)?, settings)
}

fn config_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    use tauri::Manager;
    app.path()
        .app_config_dir()
        .map_err(|e| format!("Could not resolve config directory: {e}"))
}

/// Base URL for the parsing/matching service, as currently configured.
pub fn effective_service_url(app: &tauri::AppHandle) -> Result<String, String> {
    let settings = load_settings_from_disk(&config_dir(app)?)?;
    Ok(service_url_from(&settings))
}

pub fn service_url_from(settings: &Value) -> String {
    settings
        .get("serviceUrl")
        .and_then(Value::as_str)
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

pub fn load_settings_from_disk(dir: &Path) -> Result<Value, String> {
    let path = settings_path(dir);
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create config directory: {e}"))?;

    let original = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings.json: {e}"))?;
        serde_json::from_str::<Value>(&raw).unwrap_or_else(|_| json!({}))
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        write_settings_file(&path, &migrated)?;
    }

    Ok(migrated)
}

pub fn save_settings_to_disk(dir: &Path, settings: Value) -> Result<Value, String> {
    let path = settings_path(dir);
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create config directory: {e}"))?;

    let mut merged = load_settings_from_disk(dir).unwrap_or_else(|_| default_settings());
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, raw).map_err(|e| format!("Failed to write settings.json: {e}"))
}

fn migrate_settings(input: Value) -> Value {
    let defaults = default_settings();
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &defaults);
    sanitize_settings(&mut out);

    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "serviceUrl": DEFAULT_SERVICE_URL,
        "colorScheme": "default",
        "animationsEnabled": true
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object())
    else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    // A usable service URL: non-empty after trimming, no trailing slash.
    let url = obj
        .get("serviceUrl")
        .and_then(Value::as_str)
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    obj.insert("serviceUrl".to_string(), json!(url));

    sanitize_enum(
        obj,
        "colorScheme",
        &["default", "heatwave", "monochrome"],
        "default",
    );
    ensure_bool(obj, "animationsEnabled", true);
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_and_rejects_empty_url() {
        let migrated = migrate_settings(json!({ "serviceUrl": "http://host:9000/" }));
        assert_eq!(migrated["serviceUrl"], json!("http://host:9000"));

        let migrated = migrate_settings(json!({ "serviceUrl": "   " }));
        assert_eq!(migrated["serviceUrl"], json!(DEFAULT_SERVICE_URL));
    }

    #[test]
    fn unknown_color_scheme_resets_to_default() {
        let migrated = migrate_settings(json!({ "colorScheme": "neon" }));
        assert_eq!(migrated["colorScheme"], json!("default"));
    }

    #[test]
    fn merges_partial_settings_without_losing_existing_values() {
        let mut existing = default_settings();
        merge_settings(&mut existing, &json!({ "serviceUrl": "http://other:8000" }));
        let migrated = migrate_settings(existing);

        assert_eq!(migrated["serviceUrl"], json!("http://other:8000"));
        assert_eq!(migrated["animationsEnabled"], json!(true));
        assert_eq!(migrated["colorScheme"], json!("default"));
    }

    #[test]
    fn service_url_falls_back_to_default() {
        assert_eq!(service_url_from(&json!({})), DEFAULT_SERVICE_URL);
        assert_eq!(
            service_url_from(&json!({ "serviceUrl": "http://host/" })),
            "http://host"
        );
    }
}
