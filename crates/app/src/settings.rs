//! Handles settings for the application.
//!
//! Configuration is read from `settings.toml` (optional) and then overridden
//! by `EXPENSE__`-prefixed environment variables, e.g.
//! `EXPENSE__SERVER__PORT=8080` or `EXPENSE__POLICY__PERSON_DELETE=cascade`.
//!
//! See `settings.toml` at the repository root for every key.

use config::{Config, ConfigError, Environment, File};
use engine::{PagingPolicy, PersonDeletePolicy};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the workspace crates (`trace`..`error`).
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            database: Database::Sqlite("expense_control.db".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub person_delete: PersonDeletePolicy,
    /// Reject people whose name differs from an existing one only by case,
    /// accents or punctuation.
    pub unique_person_names: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            person_delete: PersonDeletePolicy::default(),
            unique_person_names: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub pagination: PagingPolicy,
    #[serde(default)]
    pub policy: Policy,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("EXPENSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::new("does-not-exist").unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.pagination, PagingPolicy::default());
        assert_eq!(settings.policy.person_delete, PersonDeletePolicy::Restrict);
        assert!(settings.policy.unique_person_names);
    }

    #[test]
    fn sections_deserialize_from_toml() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [app]
                level = "debug"

                [server]
                port = 8080
                database = "memory"

                [pagination]
                max_page_size = 50

                [policy]
                person_delete = "cascade"
                unique_person_names = false
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.server.port, 8080);
        assert!(matches!(settings.server.database, Database::Memory));
        assert_eq!(settings.pagination.max_page_size, 50);
        assert_eq!(settings.pagination.default_page_size, 10);
        assert_eq!(settings.policy.person_delete, PersonDeletePolicy::Cascade);
        assert!(!settings.policy.unique_person_names);
    }
}
