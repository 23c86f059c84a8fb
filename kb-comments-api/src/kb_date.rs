//! Timestamps as sent by the knowledge base: either RFC 3339 or the
//! `YYYY-MM-DD HH:MM:SS` format, the latter being UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::Time;

const KB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse(s: &str) -> Option<Time> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, KB_FORMAT)
        .ok()
        .map(|t| Utc.from_utc_datetime(&t))
}

pub fn serialize<S: Serializer>(t: &Option<Time>, s: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => s.serialize_some(&t.to_rfc3339()),
        None => s.serialize_none(),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Time>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formats() {
        let expected = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse("2023-01-02 03:04:05"), Some(expected));
        assert_eq!(parse("2023-01-02T03:04:05Z"), Some(expected));
        assert_eq!(parse("2023-01-02T05:04:05+02:00"), Some(expected));
        assert_eq!(parse("yesterday"), None);
    }
}
