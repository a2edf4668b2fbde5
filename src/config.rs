use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5001";
pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub pack_dir: PathBuf,
    pub json_pack_dir: PathBuf,
    pub static_dir: PathBuf,
    pub openai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_max_tokens: u32,
    pub ai_timeout_secs: u64,
}

impl Config {
    /// Reads the process environment (and `.env`, if any). Every setting has
    /// a default, so an empty environment yields a working configuration with
    /// the AI relay disabled.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            pack_dir: get_env_or("PACK_DIR", "pack").into(),
            json_pack_dir: get_env_or("JSON_PACK_DIR", "json pack").into(),
            static_dir: get_env_or("STATIC_DIR", "static").into(),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            ai_base_url: get_env_or("AI_BASE_URL", DEFAULT_AI_BASE_URL),
            ai_model: get_env_or("AI_MODEL", DEFAULT_AI_MODEL),
            ai_max_tokens: get_env_parse_or("AI_MAX_TOKENS", 500)?,
            ai_timeout_secs: get_env_parse_or("AI_TIMEOUT_SECS", 60)?,
        })
    }

    pub fn ai_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            pack_dir: PathBuf::from("pack"),
            json_pack_dir: PathBuf::from("json pack"),
            static_dir: PathBuf::from("static"),
            openai_api_key: None,
            ai_base_url: DEFAULT_AI_BASE_URL.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
            ai_max_tokens: 500,
            ai_timeout_secs: 60,
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
