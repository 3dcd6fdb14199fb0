use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What a scanned QR code decodes back into.
///
/// The payload binds the redemption key to the studio, the seats, and
/// the holder's name so a ticket can be checked offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub booking_code: String,
    pub studio_id: u32,
    pub seat_ids: Vec<u32>,
    pub user_id: Option<i64>,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Encode(String),
    Decode(String),
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Encode(reason) => write!(f, "failed to encode token: {reason}"),
            Self::Decode(reason) => write!(f, "failed to decode token: {reason}"),
        }
    }
}

impl Error for TokenError {}

/// Encodes the redemption payload carried inside the QR code
pub fn generate(payload: &TokenPayload) -> Result<String, TokenError> {
    let json = serde_json::to_vec(payload).map_err(|e| TokenError::Encode(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

/// Decodes a QR payload back into its fields
pub fn decode(token: &str) -> Result<TokenPayload, TokenError> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| TokenError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> TokenPayload {
        TokenPayload {
            booking_code: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
            studio_id: 7,
            seat_ids: vec![101, 102],
            user_id: None,
            user_name: "A. Lee".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let payload = sample_payload();
        let token = generate(&payload).unwrap();
        assert!(!token.is_empty());
        assert_eq!(decode(&token).unwrap(), payload);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!!!").is_err());
        assert!(decode(&STANDARD.encode(b"not json")).is_err());
    }
}
