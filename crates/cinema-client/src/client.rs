use async_trait::async_trait;
use log::error;
use models::details::{SeatDetails, StudioDetails};
use serde::{Deserialize, Serialize};

use crate::api::{SeatInventory, StudioDirectory};
use crate::config::CinemaConfig;
use crate::error::{MetadataError, ReservationError};

/// Body for the reserve and release endpoints
#[derive(Serialize)]
struct ReserveBody<'a> {
    #[serde(rename = "seatIds")]
    seat_ids: &'a [u32],
}

/// Body for the seat details endpoint
#[derive(Serialize)]
struct SeatDetailsBody<'a> {
    seat_ids: &'a [u32],
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed client for the cinema service.
///
/// Every request carries the timeout from [`CinemaConfig`]; a timed-out
/// call is indistinguishable from any other transport failure.
#[derive(Debug, Clone)]
pub struct CinemaClient {
    http: reqwest::Client,
    reservation_url: String,
    metadata_url: String,
}

impl CinemaClient {
    pub fn new(config: &CinemaConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            reservation_url: config.reservation_url.trim_end_matches('/').to_string(),
            metadata_url: config.metadata_url.trim_end_matches('/').to_string(),
        })
    }

    fn reserve_url(&self, path: &str) -> String {
        format!("{}{path}", self.reservation_url)
    }

    fn lookup_url(&self, path: &str) -> String {
        format!("{}{path}", self.metadata_url)
    }
}

#[async_trait]
impl SeatInventory for CinemaClient {
    async fn reserve_seats(&self, seat_ids: &[u32]) -> Result<(), ReservationError> {
        let response = self
            .http
            .post(self.reserve_url("/api/cinema/seats/reserve"))
            .json(&ReserveBody { seat_ids })
            .send()
            .await
            .map_err(|e| ReservationError::Unreachable(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ReservationError::Rejected(response.status().as_u16()))
        }
    }

    async fn release_seats(&self, seat_ids: &[u32]) {
        let result = self
            .http
            .post(self.reserve_url("/api/cinema/seats/release"))
            .json(&ReserveBody { seat_ids })
            .send()
            .await;

        // A lost release leaves the seats held with no booking behind
        // them; there is no retry path, only this log line.
        match result {
            Ok(response) if !response.status().is_success() => {
                error!(
                    "seat release rejected with status {} for seats {seat_ids:?}",
                    response.status()
                );
            }
            Err(e) => error!("seat release failed for seats {seat_ids:?}: {e}"),
            Ok(_) => {}
        }
    }
}

#[async_trait]
impl StudioDirectory for CinemaClient {
    async fn studio_details(&self, studio_id: u32) -> Result<StudioDetails, MetadataError> {
        let response = self
            .http
            .get(self.lookup_url(&format!("/api/cinema/studios/{studio_id}")))
            .send()
            .await
            .map_err(|e| MetadataError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::Failed {
                status: response.status().as_u16(),
                message: None,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MetadataError::Malformed(e.to_string()))
    }

    async fn seat_details(&self, seat_ids: &[u32]) -> Result<Vec<SeatDetails>, MetadataError> {
        let response = self
            .http
            .post(self.lookup_url("/api/cinema/seats/details"))
            .json(&SeatDetailsBody { seat_ids })
            .send()
            .await
            .map_err(|e| MetadataError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.ok().map(|body| body.error);
            return Err(MetadataError::Failed {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MetadataError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserve_body_uses_remote_field_name() {
        let body = serde_json::to_value(ReserveBody {
            seat_ids: &[101, 102],
        })
        .unwrap();
        assert_eq!(body, json!({ "seatIds": [101, 102] }));
    }

    #[test]
    fn test_seat_details_body_uses_snake_case() {
        let body = serde_json::to_value(SeatDetailsBody {
            seat_ids: &[101, 102],
        })
        .unwrap();
        assert_eq!(body, json!({ "seat_ids": [101, 102] }));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CinemaClient::new(&CinemaConfig {
            metadata_url: "http://cinema:3002/".to_string(),
            ..CinemaConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.lookup_url("/api/cinema/studios/7"),
            "http://cinema:3002/api/cinema/studios/7"
        );
    }
}
