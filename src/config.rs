use std::env;
use std::path::PathBuf;

pub struct Config {
    pub port: u16,
    pub preset_store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            preset_store_path: env::var("PRESET_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("presets.json")),
        }
    }
}
