//! Server configuration from environment.

use skyrelay_aviation::{AviationStackConfig, DEFAULT_BASE_URL};
use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    pub airports_csv: PathBuf,
    pub aviation: AviationStackConfig,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Process environment first, then `KEY=value` pairs from a dotenv file.
    ///
    /// Variables already set in the environment win over the file.
    pub fn from_env_file(path: &Path) -> Result<Self, dotenvy::Error> {
        let file = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| file.get(key).cloned())
        }))
    }

    /// Build from any key lookup; unset or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_port: lookup("SKYRELAY_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            bind_addr: lookup("SKYRELAY_BIND_ADDR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            airports_csv: lookup("SKYRELAY_AIRPORTS_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("in-airports.csv")),
            aviation: AviationStackConfig {
                base_url: lookup("AVIATION_STACK_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                access_key: lookup("AVIATION_STACK_API_KEY")
                    .filter(|key| !key.trim().is_empty()),
                timeout: lookup("AVIATION_STACK_TIMEOUT_S")
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs),
            },
            log_json: lookup("SKYRELAY_LOG_JSON")
                .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.airports_csv, PathBuf::from("in-airports.csv"));
        assert_eq!(config.aviation.base_url, DEFAULT_BASE_URL);
        assert!(config.aviation.access_key.is_none());
        assert!(config.aviation.timeout.is_none());
        assert!(!config.log_json);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SKYRELAY_PORT", "8080"),
            ("SKYRELAY_BIND_ADDR", "0.0.0.0"),
            ("SKYRELAY_AIRPORTS_CSV", "/data/airports.csv"),
            ("AVIATION_STACK_API_KEY", "secret"),
            ("AVIATION_STACK_BASE_URL", "https://api.aviationstack.com/v1"),
            ("AVIATION_STACK_TIMEOUT_S", "15"),
            ("SKYRELAY_LOG_JSON", "1"),
        ]));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.airports_csv, PathBuf::from("/data/airports.csv"));
        assert_eq!(config.aviation.access_key.as_deref(), Some("secret"));
        assert_eq!(config.aviation.base_url, "https://api.aviationstack.com/v1");
        assert_eq!(config.aviation.timeout, Some(Duration::from_secs(15)));
        assert!(config.log_json);
    }

    #[test]
    fn blank_key_and_bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("AVIATION_STACK_API_KEY", "  "),
            ("SKYRELAY_PORT", "not-a-port"),
            ("AVIATION_STACK_TIMEOUT_S", "0"),
        ]));
        assert!(config.aviation.access_key.is_none());
        assert_eq!(config.server_port, 5000);
        assert!(config.aviation.timeout.is_none());
    }

    #[test]
    fn reads_dotenv_file() {
        let path = env::temp_dir().join(format!("skyrelay-{}.env", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "# provider\nAVIATION_STACK_TIMEOUT_S=7\nSKYRELAY_AIRPORTS_CSV=\"/srv/data/in-airports.csv\"\n",
        )
        .unwrap();

        let config = Config::from_env_file(&path).unwrap();
        assert_eq!(config.aviation.timeout, Some(Duration::from_secs(7)));
        assert_eq!(config.airports_csv, PathBuf::from("/srv/data/in-airports.csv"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_dotenv_file_is_an_error() {
        let path = env::temp_dir().join(format!("skyrelay-missing-{}.env", uuid::Uuid::new_v4()));
        assert!(Config::from_env_file(&path).is_err());
    }
}
