use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use yew::{Html, ToHtml, html};

/// Format used for naive timestamps, with optional fractional seconds.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// The same with a space separator, as some database exports write it.
const SPACED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A UTC instant as sent by the ticket API.
///
/// The API is not consistent about offsets: some records carry `Z` or an
/// explicit offset, others are naive local-less strings. Naive values are
/// read as UTC.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, SPACED_FORMAT))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Timestamp {
    /// Day, short month and year, e.g. `03 Jan 2025`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.0.format("%d %b %Y").to_string()
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.display_date() }
    }
}
