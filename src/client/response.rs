use serde::{Deserialize, Serialize};

/// Body of a successful response: `{"text": "..."}`.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub text: String,
}

/// How a 200 body is turned into a [`ResponseBody`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    /// Decode the first JSON value; anything after it is discarded.
    #[default]
    FirstValue,
    /// The whole body must be exactly one JSON value.
    Strict,
}

pub(crate) fn decode(bytes: &[u8], mode: DecodeMode) -> Result<ResponseBody, serde_json::Error> {
    match mode {
        DecodeMode::Strict => serde_json::from_slice(bytes),
        DecodeMode::FirstValue => serde_json::Deserializer::from_slice(bytes)
            .into_iter::<ResponseBody>()
            .next()
            // blank body: let the strict parser report the EOF
            .unwrap_or_else(|| serde_json::from_slice(bytes)),
    }
}
