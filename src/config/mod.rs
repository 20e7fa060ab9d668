use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::domain::TokenSpec;
use crate::infrastructure::ethereum::ProviderConfig;
use crate::services::default_tokens;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    pub address: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub rpc_url: Option<String>,

    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

impl Config {
    /// Configured tokens, or the built-in USDT/USDC pair when none are listed
    pub fn token_specs(&self) -> Vec<TokenSpec> {
        if self.tokens.is_empty() {
            return default_tokens();
        }
        self.tokens
            .iter()
            .map(|entry| {
                let name = entry
                    .name
                    .clone()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| crate::domain::shorten_address(&entry.address));
                TokenSpec::new(entry.address.trim(), name)
            })
            .collect()
    }
}

/// Load the config file. A missing or malformed file yields the defaults.
pub fn load(path: Option<&Path>) -> Config {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content)
}

pub fn parse(content: &str) -> Config {
    toml::from_str::<Config>(content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("WALLETLENS_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletlens").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("walletlens").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "walletlens", "walletlens")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletlens"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("walletlens"));
    }
    directories::ProjectDirs::from("io", "walletlens", "walletlens")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("walletlens.log"))
}

/// Pick the endpoint: `--ws` first, then `--rpc` (or its env var), then the
/// config file's `rpc_url`.
pub fn resolve_endpoint(
    ws: Option<&str>,
    rpc: Option<&str>,
    config: &Config,
) -> Result<ProviderConfig> {
    if let Some(ws) = non_empty(ws) {
        return Ok(ProviderConfig::WebSocket(ws.to_string()));
    }
    if let Some(rpc) = non_empty(rpc).or_else(|| non_empty(config.rpc_url.as_deref())) {
        if rpc.starts_with("ws://") || rpc.starts_with("wss://") {
            return Ok(ProviderConfig::WebSocket(rpc.to_string()));
        }
        return Ok(ProviderConfig::Http(normalize_http_endpoint(rpc)));
    }

    bail!("No RPC endpoint configured: pass --rpc, set WALLETLENS_RPC_URL, or add rpc_url to the config file")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn normalize_http_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
