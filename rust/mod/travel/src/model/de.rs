//! Lenient field decoders.
//!
//! The backends are pandas-over-CSV: ids come back as numbers or strings,
//! blank cells as `null` or `""`.

use serde::{Deserialize, Deserializer};

use super::Role;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Accept `"p1"`, `12` or `12.0` as an id.
pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(d)? {
        RawId::Str(s) => s,
        RawId::Int(i) => i.to_string(),
        RawId::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        RawId::Float(f) => f.to_string(),
    })
}

/// `null` → empty string.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// `null` / `""` → `None`.
pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(d)?.filter(|s| !s.is_empty()))
}

/// Unknown or blank roles decode as `None`.
pub fn role<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Role>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Ratings outside `[1, 5]` (or unparseable) are treated as missing.
pub fn rating<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u8>, D::Error> {
    let raw = Option::<RawRating>::deserialize(d)?;
    let value = match raw {
        None => None,
        Some(RawRating::Int(i)) => Some(i),
        Some(RawRating::Float(f)) if f.fract() == 0.0 => Some(f as i64),
        Some(RawRating::Float(_)) => None,
        Some(RawRating::Str(s)) => s.trim().parse::<i64>().ok(),
    };
    Ok(value.filter(|r| (1..=5).contains(r)).map(|r| r as u8))
}
