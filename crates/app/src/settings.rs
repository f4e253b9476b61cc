//! Handles settings for the application. Configuration is read from
//! `settings.toml` (when present) and `EXPENSE__*` environment variables.
//!
//! See `settings.toml` at the repository root for an example.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", about = "Expense tracking HTTP service")]
pub struct Args {
    /// Optional settings file path (extension may be omitted).
    #[arg(long, env = "EXPENSE_CONFIG")]
    pub config: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        Self::load(Config::builder().add_source(File::with_name(path).required(false)))
    }

    fn load(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("app.level", "info")?
            .set_default("server.port", 8080)?
            .set_default("server.database", "memory")?
            .add_source(Environment::with_prefix("EXPENSE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
