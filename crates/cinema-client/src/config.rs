use std::env;
use std::time::Duration;

/// Address used when `RESERVATION_SERVICE_URL` is unset
pub const DEFAULT_RESERVATION_URL: &str = "http://localhost:3002";

/// Address used when `METADATA_SERVICE_URL` is unset
pub const DEFAULT_METADATA_URL: &str = "http://localhost:3002";

/// Per-request timeout in seconds when `CINEMA_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the two remote collaborators: the seat
/// inventory (reserve/release) and the read-only studio metadata
/// service. Both usually point at the same cinema deployment.
///
/// Built once at process start and handed to [`CinemaClient::new`];
/// nothing in the request path reads the environment.
///
/// [`CinemaClient::new`]: crate::client::CinemaClient::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaConfig {
    pub reservation_url: String,
    pub metadata_url: String,
    pub request_timeout: Duration,
}

impl CinemaConfig {
    /// Reads `RESERVATION_SERVICE_URL`, `METADATA_SERVICE_URL`, and
    /// `CINEMA_TIMEOUT_SECS`, falling back to the documented defaults
    pub fn from_env() -> Self {
        let reservation_url = env::var("RESERVATION_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_RESERVATION_URL.to_string());
        let metadata_url =
            env::var("METADATA_SERVICE_URL").unwrap_or_else(|_| DEFAULT_METADATA_URL.to_string());
        let request_timeout = env::var("CINEMA_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Self {
            reservation_url,
            metadata_url,
            request_timeout,
        }
    }
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            reservation_url: DEFAULT_RESERVATION_URL.to_string(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_cinema_service() {
        let config = CinemaConfig::default();
        assert_eq!(config.reservation_url, "http://localhost:3002");
        assert_eq!(config.metadata_url, "http://localhost:3002");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
