//! Base64 handling for images sent inline as `data:` uris.
use crate::errors::ImageError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Prefix every image url sent upstream starts with
pub const DATA_URI_PREFIX: &str = "data:image/jpg;base64,";

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(payload: &str) -> Result<Vec<u8>, ImageError> {
    Ok(STANDARD.decode(payload)?)
}

/// True when the payload is non-empty and decodes as standard base64
pub fn is_base64(payload: &str) -> bool {
    !payload.trim().is_empty() && STANDARD.decode(payload).is_ok()
}

/// Read a file and return its contents as a base64 string
pub fn encode_file<P: AsRef<Path>>(path: P) -> Result<String, ImageError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode_bytes(&bytes))
}

/// Wrap a base64 payload in a jpg data uri
pub fn data_uri(payload: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, payload)
}

/// Strip any `data:<mime>;base64,` header from a caller supplied image, leaving the payload
pub fn payload_of(image: &str) -> &str {
    if image.starts_with("data:") {
        if let Some((_, payload)) = image.split_once(";base64,") {
            return payload;
        }
    }
    image
}

/// The fallback image, encoded once when the process starts
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultImage {
    payload: String,
}

impl DefaultImage {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let payload = encode_file(&path)?;
        tracing::info!(
            path = %path.as_ref().display(),
            encoded_len = payload.len(),
            "loaded default image"
        );
        Ok(Self { payload })
    }

    pub fn from_payload<S: Into<String>>(payload: S) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}
