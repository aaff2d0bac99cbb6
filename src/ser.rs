/// Serde codec for binary fields that travel as base64 strings, so logo
/// bytes can be carried in JSON bodies and form round-trips. Accepts the
/// padded RFC 4648 alphabet emitted by browsers and `data:` URLs.
pub mod base64_bytes {
    use data_encoding::BASE64;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| de::Error::custom(format!("invalid base64: {}", e)))
    }
}
