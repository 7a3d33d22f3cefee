//! Operation payload extractor
//!
//! Callers may omit the body entirely for operations without inputs, or send
//! `null`. Both decode to the payload type's default, which leaves every field
//! unset so validation can name whatever is missing.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that treats an empty body as an empty object
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        parse_payload(&bytes).map(Payload)
    }
}

fn parse_payload<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Body is not valid JSON: {}", e)))?;
    if value.is_null() {
        return Ok(T::default());
    }

    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}
