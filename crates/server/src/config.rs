use cinema_client::config::CinemaConfig;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Address the server binds when `LISTEN_ADDR` is unset
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Process-wide configuration, read from the environment exactly once in
/// `main` and passed down by value. Nothing below this reads env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: String,
    pub cinema: CinemaConfig,
}

/// A required environment variable was not set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVar(pub &'static str);

impl Display for MissingVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "missing required environment variable: {}", self.0)
    }
}

impl Error for MissingVar {}

impl AppConfig {
    pub fn from_env() -> Result<Self, MissingVar> {
        let database_url = env::var("DATABASE_URL").map_err(|_| MissingVar("DATABASE_URL"))?;
        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url,
            listen_addr,
            cinema: CinemaConfig::from_env(),
        })
    }
}
