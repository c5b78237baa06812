use serde::de::{self, Deserialize, Deserializer, Error, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Slack message timestamp such as `1440000000.000001`.
///
/// Slack uses these both as points in time and as message identifiers, so the
/// textual form must survive a round trip unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    microseconds: u64,
}

impl Timestamp {
    pub fn from_micros(microseconds: u64) -> Self {
        Timestamp { microseconds }
    }

    pub fn as_micros(&self) -> u64 {
        self.microseconds
    }

    pub fn to_datetime(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
        let seconds = self.microseconds / 1_000_000;
        let nanoseconds = (self.microseconds % 1_000_000) * 1_000;
        ::chrono::DateTime::from_timestamp(seconds as i64, nanoseconds as u32)
    }

    pub fn now() -> Self {
        ::chrono::Utc::now().into()
    }
}

impl From<::chrono::DateTime<::chrono::Utc>> for Timestamp {
    fn from(datetime: ::chrono::DateTime<::chrono::Utc>) -> Timestamp {
        Timestamp {
            microseconds: datetime.timestamp().max(0) as u64 * 1_000_000
                + datetime.timestamp_subsec_micros() as u64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as a Slack timestamp")]
pub struct ParseTimestampError {
    input: String,
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimestampError {
            input: value.to_string(),
        };
        let (seconds_str, fraction_str) = match value.find('.') {
            Some(dot) => (&value[..dot], &value[dot + 1..]),
            None => (value, ""),
        };
        if seconds_str.is_empty() || fraction_str.len() > 6 {
            return Err(invalid());
        }
        if !seconds_str.bytes().chain(fraction_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let seconds = seconds_str.parse::<u64>().map_err(|_| invalid())?;
        // "123.456" is 456 milliseconds, not 456 microseconds
        let mut microseconds = 0;
        for digit in fraction_str.bytes().chain(std::iter::repeat(b'0')).take(6) {
            microseconds = microseconds * 10 + u64::from(digit - b'0');
        }
        seconds
            .checked_mul(1_000_000)
            .and_then(|s| s.checked_add(microseconds))
            .map(Timestamp::from_micros)
            .ok_or_else(invalid)
    }
}

struct TimestampVisitor;
impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Unix-style timestamp, as a u64 or string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        value
            .checked_mul(1_000_000)
            .map(Timestamp::from_micros)
            .ok_or_else(|| Error::custom(format!("timestamp {} is out of range", value)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        if value.is_finite() && value >= 0.0 {
            Ok(Timestamp::from_micros((value * 1_000_000.0).round() as u64))
        } else {
            Err(Error::custom(format!("timestamp {} is out of range", value)))
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl ::std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(
            f,
            "{}.{:06}",
            self.microseconds / 1_000_000,
            self.microseconds % 1_000_000
        )
    }
}
