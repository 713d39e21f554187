use serde::{Deserialize, Serialize};

use super::de;

/// A review of a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    /// Author handle.
    #[serde(rename = "username", deserialize_with = "de::id")]
    pub author: String,

    #[serde(deserialize_with = "de::id")]
    pub place_id: String,

    #[serde(rename = "content", default, deserialize_with = "de::text")]
    pub body: String,

    #[serde(default, deserialize_with = "de::text")]
    pub date: String,

    /// 1..=5 when present.
    #[serde(default, deserialize_with = "de::rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// Denormalised place name some backends include for admin listings.
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
}
