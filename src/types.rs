pub use crate::utils::database;
use crate::modules::kitchen::facade::{KitchenFacade, KitchenFacadeService, RecipeStore};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub kitchen: Arc<dyn KitchenFacade>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name} value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => 3000,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw,
            })?,
            None => 4,
        };

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let store = match self.database.url {
            Some(url) => {
                let db_conn = database::connect(&url, self.database.max_connections).await?;
                database::migrate(&db_conn).await?;
                RecipeStore::Database(db_conn)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, recipes will be kept in memory");
                RecipeStore::in_memory()
            }
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            kitchen: Arc::new(KitchenFacadeService::new(store)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 3000);
        assert_eq!(config.app.environment, AppEnvironment::Development);
        assert!(config.database.url.is_none());
        assert_eq!(config.database.max_connections, 4);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("DATABASE_URL", "postgres://kitchen@localhost/kitchen"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.app.host, "127.0.0.1");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.environment, AppEnvironment::Production);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://kitchen@localhost/kitchen")
        );
        assert_eq!(config.database.max_connections, 12);
    }

    #[test]
    fn empty_database_url_means_in_memory() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "")])).unwrap();
        assert!(config.database.url.is_none());
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid PORT value: eighty");
    }

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(
            AppEnvironment::from(String::from("staging")),
            AppEnvironment::Development
        );
    }

    #[tokio::test]
    async fn builds_in_memory_context_without_database() {
        let ctx = Config::from_lookup(lookup_from(&[("PORT", "4000")]))
            .unwrap()
            .to_context()
            .await
            .unwrap();

        assert_eq!(ctx.app.port, 4000);
        assert!(ctx.kitchen.find_all_recipes().await.unwrap().is_empty());
    }
}
