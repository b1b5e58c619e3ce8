use std::{error::Error, fs};
use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
    pub jwt_secret: String,
    pub jwt_expiration_in_minutes: u64,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,
}

impl Settings {
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        let content = fs::read_to_string(SETTINGS_FILENAME)
            .map_err(|e| format!("cannot read settings file {SETTINGS_FILENAME}: {e}"))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| format!("cannot parse JSON content from file {SETTINGS_FILENAME}: {e}"))?;
        Ok(settings)
    }
}
