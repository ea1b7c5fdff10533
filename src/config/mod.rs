use std::env;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// How the `users` table is prepared at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Drop and recreate the table.
    Create,
    /// Like `Create`, and drop the table again on graceful shutdown.
    CreateDrop,
    /// Create the table if it does not exist yet.
    Update,
    /// Fail start-up unless the table already exists.
    Validate,
    /// Leave the schema alone.
    None,
}

impl SchemaMode {
    pub fn drops_on_shutdown(&self) -> bool {
        matches!(self, SchemaMode::CreateDrop)
    }
}

impl FromStr for SchemaMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(SchemaMode::Create),
            "create-drop" | "create_drop" => Ok(SchemaMode::CreateDrop),
            "update" => Ok(SchemaMode::Update),
            "validate" => Ok(SchemaMode::Validate),
            "none" => Ok(SchemaMode::None),
            other => Err(format!("unknown schema mode '{}'", other)),
        }
    }
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaMode::Create => write!(f, "create"),
            SchemaMode::CreateDrop => write!(f, "create-drop"),
            SchemaMode::Update => write!(f, "update"),
            SchemaMode::Validate => write!(f, "validate"),
            SchemaMode::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// How long a connection waits on a locked database before giving up.
    pub database_busy_timeout_ms: u64,
    pub schema_mode: SchemaMode,
    pub log_sql: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://users.db".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("DATABASE_MAX_CONNECTIONS must be a valid number"),
            database_busy_timeout_ms: env::var("DATABASE_BUSY_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("DATABASE_BUSY_TIMEOUT_MS must be a valid number"),
            schema_mode: env::var("SCHEMA_MODE")
                .unwrap_or_else(|_| "update".to_string())
                .parse()
                .expect("SCHEMA_MODE must be one of create, create-drop, update, validate, none"),
            log_sql: env::var("LOG_SQL")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mode_parse() {
        assert_eq!("create".parse::<SchemaMode>(), Ok(SchemaMode::Create));
        assert_eq!("Create-Drop".parse::<SchemaMode>(), Ok(SchemaMode::CreateDrop));
        assert_eq!(" update ".parse::<SchemaMode>(), Ok(SchemaMode::Update));
        assert_eq!("validate".parse::<SchemaMode>(), Ok(SchemaMode::Validate));
        assert_eq!("none".parse::<SchemaMode>(), Ok(SchemaMode::None));
        assert!("auto".parse::<SchemaMode>().is_err());
    }

    #[test]
    fn test_schema_mode_display_round_trips() {
        for mode in [
            SchemaMode::Create,
            SchemaMode::CreateDrop,
            SchemaMode::Update,
            SchemaMode::Validate,
            SchemaMode::None,
        ] {
            assert_eq!(mode.to_string().parse::<SchemaMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_only_create_drop_drops_on_shutdown() {
        assert!(SchemaMode::CreateDrop.drops_on_shutdown());
        assert!(!SchemaMode::Create.drops_on_shutdown());
        assert!(!SchemaMode::Update.drops_on_shutdown());
    }
}
