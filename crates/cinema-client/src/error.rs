use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a seat reservation did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Transport-level failure, including timeouts
    Unreachable(String),
    /// The service answered with a non-success status
    Rejected(u16),
}

impl Display for ReservationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unreachable(reason) => write!(f, "cinema service unreachable: {reason}"),
            Self::Rejected(status) => write!(f, "seat reservation rejected with status {status}"),
        }
    }
}

impl Error for ReservationError {}

/// Why a studio or seat metadata lookup did not produce data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Transport-level failure, including timeouts
    Unreachable(String),
    /// Non-success status; the body may have carried an error message
    Failed { status: u16, message: Option<String> },
    /// The response body did not decode
    Malformed(String),
}

impl Display for MetadataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unreachable(reason) => write!(f, "cinema service unreachable: {reason}"),
            Self::Failed {
                status,
                message: Some(message),
            } => write!(f, "metadata lookup failed with status {status}: {message}"),
            Self::Failed {
                status,
                message: None,
            } => write!(f, "metadata lookup failed with status {status}"),
            Self::Malformed(reason) => write!(f, "malformed metadata response: {reason}"),
        }
    }
}

impl Error for MetadataError {}
