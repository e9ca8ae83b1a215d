//! Runtime settings, from command-line flags or `APP_*` environment
//! variables.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Hosting environment. Development skips HSTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Company/employee CRUD service
#[derive(Debug, Clone, Parser)]
#[command(name = "company_employees")]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// HTTP listen host
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// HTTP listen port
    #[arg(long, env = "APP_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Hosting environment
    #[arg(long, env = "APP_ENVIRONMENT", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Public HTTPS port; plain-HTTP requests are redirected there when set
    #[arg(long, env = "APP_HTTPS_PORT")]
    pub https_port: Option<u16>,

    /// Directory served for paths no route matches
    #[arg(long, env = "APP_STATIC_DIR", default_value = "wwwroot")]
    pub static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins if set
    #[arg(long, env = "APP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
