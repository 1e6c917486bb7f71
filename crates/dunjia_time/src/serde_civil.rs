//! `#[serde(with = "dunjia_time::serde_civil")]` for civil timestamps.
//!
//! Accepts every layout [`parse_civil`] accepts, including date-only
//! strings, and writes `YYYY-MM-DDThh:mm:ss`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::civil::{format_civil, parse_civil};

pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_civil(ts))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_civil(&raw).map_err(de::Error::custom)
}
