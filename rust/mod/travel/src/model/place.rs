use serde::{Deserialize, Serialize};

use super::de;

/// A destination. Never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "place_id", deserialize_with = "de::id")]
    pub id: String,

    #[serde(rename = "place_name", default, deserialize_with = "de::text")]
    pub name: String,

    #[serde(default, deserialize_with = "de::text")]
    pub address: String,

    #[serde(default, deserialize_with = "de::text")]
    pub thumb_url: String,

    #[serde(default, deserialize_with = "de::text")]
    pub description: String,

    /// Long-form text, plain or markdown.
    #[serde(default, deserialize_with = "de::text")]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_id_and_nulls() {
        let p: Place = serde_json::from_str(
            r#"{"place_id": 3, "place_name": "Da Lat", "address": null, "thumb_url": "", "description": "cool", "content": null}"#,
        )
        .unwrap();
        assert_eq!(p.id, "3");
        assert_eq!(p.address, "");
        assert_eq!(p.content, "");
    }
}
