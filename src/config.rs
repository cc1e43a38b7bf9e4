use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub environment: String,
    pub log_requests: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            database_path: "users.db".to_string(),
            environment: "development".to_string(),
            log_requests: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| "Invalid SERVER_PORT")?,
            None => defaults.server_port,
        };

        let database_path = lookup("DATABASE_PATH").unwrap_or(defaults.database_path);

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let log_requests = match lookup("LOG_REQUESTS") {
            Some(raw) => parse_bool(&raw).ok_or("Invalid LOG_REQUESTS")?,
            None => defaults.log_requests,
        };

        Ok(Config {
            server_host,
            server_port,
            database_path,
            environment,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_hardcoded_behaviour() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:5000");
        assert_eq!(config.database_path, "users.db");
        assert_eq!(config.environment, "development");
        assert!(config.log_requests);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_PATH", "./data/app.db"),
            ("ENVIRONMENT", "production"),
            ("LOG_REQUESTS", "off"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.database_path, "./data/app.db");
        assert_eq!(config.environment, "production");
        assert!(!config.log_requests);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert_eq!(err, "Invalid SERVER_PORT");
    }

    #[test]
    fn test_invalid_log_requests_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("LOG_REQUESTS", "maybe")])).unwrap_err();
        assert_eq!(err, "Invalid LOG_REQUESTS");
    }
}
