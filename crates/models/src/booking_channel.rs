use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[cfg(feature = "database")]
use sea_orm::Value;

/// How a booking entered the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingChannel {
    /// Self-service booking tied to a registered account
    Online,
    /// Walk-in booking entered by staff, no account attached
    Offline,
}

impl BookingChannel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl Display for BookingChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized channel string
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownChannel(pub String);

impl Display for UnknownChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown booking channel: {}", self.0)
    }
}

impl FromStr for BookingChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}

#[cfg(feature = "database")]
impl From<BookingChannel> for Value {
    fn from(channel: BookingChannel) -> Self {
        Value::String(Some(Box::new(channel.as_str().to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for BookingChannel {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse()
            .map_err(|e| sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!("{e}"))))
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for BookingChannel {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "BookingChannel".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for BookingChannel {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_channels() {
        assert_eq!("online".parse(), Ok(BookingChannel::Online));
        assert_eq!("offline".parse(), Ok(BookingChannel::Offline));
    }

    #[test]
    fn test_parse_rejects_unknown_channel() {
        let result = BookingChannel::from_str("phone");
        assert_eq!(result, Err(UnknownChannel("phone".to_string())));
    }

    #[test]
    fn test_display_round_trip() {
        for channel in [BookingChannel::Online, BookingChannel::Offline] {
            assert_eq!(channel.to_string().parse(), Ok(channel));
        }
    }
}
