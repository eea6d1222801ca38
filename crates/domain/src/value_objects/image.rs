//! Image payloads stored inside records.
//!
//! Records travel as JSON (both in the store and in exports), so image bytes
//! are carried base64-encoded with their MIME type alongside.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
}

impl ImageData {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// File extension derived from the MIME subtype ("png" for "image/png").
    pub fn extension(&self) -> &str {
        self.mime_type.split('/').nth(1).unwrap_or("png")
    }
}

mod base64_bytes {
    use super::{Engine, BASE64};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_bytes_as_base64_string() {
        let image = ImageData::new(vec![1, 2, 3, 255], "image/png");
        let json = serde_json::to_string(&image).expect("serialize");
        assert!(json.contains("\"data\":\"AQID/w==\""));
        assert!(json.contains("\"mimeType\":\"image/png\""));
    }

    #[test]
    fn round_trips_through_json() {
        let image = ImageData::new(vec![0u8; 32], "image/jpeg");
        let json = serde_json::to_string(&image).expect("serialize");
        let back: ImageData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(image, back);
    }

    #[test]
    fn extension_falls_back_to_png() {
        assert_eq!(ImageData::new(vec![], "image/webp").extension(), "webp");
        assert_eq!(ImageData::new(vec![], "garbage").extension(), "png");
    }

    #[test]
    fn rejects_invalid_base64() {
        let result: Result<ImageData, _> =
            serde_json::from_str(r#"{"data": "!!!", "mimeType": "image/png"}"#);
        assert!(result.is_err());
    }
}
