//! Server and database configuration loaded from environment variables.

use std::str::FromStr;

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&var, "PORT", "u16", 3000)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&var, "REQUEST_TIMEOUT_SECS", "u64", 30)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL from `DATABASE_URL`; takes precedence over the parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Set when `APP_ENV=test`; suffixes the database name with `_test`.
    pub test_mode: bool,
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default     |
    /// |----------------|-------------|
    /// | `DATABASE_URL` | (unset)     |
    /// | `DB_HOST`      | `localhost` |
    /// | `DB_PORT`      | `5432`      |
    /// | `DB_NAME`      | `taskboard` |
    /// | `DB_USER`      | `postgres`  |
    /// | `DB_PASSWORD`  | (empty)     |
    /// | `APP_ENV`      | (unset)     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`DatabaseConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: var("DATABASE_URL").filter(|url| !url.is_empty()),
            host: var("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&var, "DB_PORT", "u16", 5432)?,
            name: var("DB_NAME").unwrap_or_else(|| "taskboard".into()),
            user: var("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: var("DB_PASSWORD").unwrap_or_default(),
            test_mode: var("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("test")),
        })
    }

    /// Effective database name, with the `_test` suffix in test mode.
    pub fn database_name(&self) -> String {
        if self.test_mode {
            format!("{}_test", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Connection URL: `DATABASE_URL` verbatim if set, otherwise built from the parts.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{credentials}@{}:{}/{}",
            self.host,
            self.port,
            self.database_name()
        )
    }
}

fn parse_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match var(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn server_defaults() {
        let config = ServerConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn server_overrides() {
        let config = ServerConfig::from_vars(vars(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_vars(vars(&[("PORT", "eighty")])).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }

    #[test]
    fn database_url_from_parts() {
        let config = DatabaseConfig::from_vars(vars(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "boards"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.connection_url(), "postgres://app:secret@db:6543/boards");
    }

    #[test]
    fn test_mode_suffixes_database_name() {
        let config = DatabaseConfig::from_vars(vars(&[("APP_ENV", "test")])).unwrap();
        assert!(config.test_mode);
        assert_eq!(config.database_name(), "taskboard_test");
        assert_eq!(
            config.connection_url(),
            "postgres://postgres@localhost:5432/taskboard_test"
        );
    }

    #[test]
    fn other_env_is_not_test_mode() {
        let config = DatabaseConfig::from_vars(vars(&[("APP_ENV", "production")])).unwrap();
        assert_eq!(config.database_name(), "taskboard");
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = DatabaseConfig::from_vars(vars(&[
            ("DATABASE_URL", "postgres://elsewhere/db"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(config.connection_url(), "postgres://elsewhere/db");
    }

    #[test]
    fn invalid_db_port_is_an_error() {
        let err = DatabaseConfig::from_vars(vars(&[("DB_PORT", "-1")])).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "DB_PORT", .. });
    }
}
