use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Verbose logging.
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4), debug: false }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_file: default_data_file() }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_data_file() -> String { "data/data.json".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (defaults when the file is absent), apply env overrides, validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env_overrides()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// `SERVER_HOST`, `SERVER_PORT`, `APP_DEBUG`, `DATA_FILE`, `TOKIO_WORKER_THREADS`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT must be an integer in 1..=65535, got {port:?}"))?;
        }
        if let Some(debug) = lookup("APP_DEBUG") {
            self.server.debug = parse_bool(&debug)
                .ok_or_else(|| anyhow!("APP_DEBUG must be a boolean, got {debug:?}"))?;
        }
        if let Some(file) = lookup("DATA_FILE") {
            self.storage.data_file = file;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            let n = threads
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow!("TOKIO_WORKER_THREADS must be a positive integer, got {threads:?}"))?;
            self.server.worker_threads = Some(n);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(anyhow!("storage.data_file is empty; set it in config.toml or DATA_FILE"));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_development_setup() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8000");
        assert!(!cfg.server.debug);
        assert_eq!(cfg.storage.data_file, "data/data.json");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = parse("[server]\nport = 9090\n").unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.storage.data_file, "data/data.json");
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut cfg = parse("[server]\nhost = \"0.0.0.0\"\nport = 9090\n").unwrap();
        cfg.apply_overrides(lookup(&[
            ("SERVER_PORT", "8123"),
            ("APP_DEBUG", "true"),
            ("DATA_FILE", "/tmp/bookings.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8123);
        assert!(cfg.server.debug);
        assert_eq!(cfg.storage.data_file, "/tmp/bookings.json");
    }

    #[test]
    fn bad_env_values_are_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.apply_overrides(lookup(&[("SERVER_PORT", "eighty")])).is_err());
        assert!(cfg.apply_overrides(lookup(&[("APP_DEBUG", "maybe")])).is_err());
        assert!(cfg.apply_overrides(lookup(&[("TOKIO_WORKER_THREADS", "many")])).is_err());
    }

    #[test]
    fn worker_threads_override_is_applied() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(lookup(&[("TOKIO_WORKER_THREADS", " 8 ")])).unwrap();
        assert_eq!(cfg.server.worker_threads, Some(8));
    }

    #[test]
    fn validation_rejects_port_zero_and_empty_data_file() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.storage.data_file = "  ".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn zero_worker_threads_normalizes_to_four() {
        let mut cfg = AppConfig::default();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_from_file("/nonexistent/config-for-tests.toml").unwrap_err();
        assert!(is_not_found(&err));
    }
}
