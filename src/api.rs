use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::IdeaRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub niche: String,
}

impl GenerateRequest {
    /// Parses a raw request body. A body that is not JSON is a synthesis
    /// failure, while a JSON body lacking a non-empty string `niche` is
    /// invalid input.
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|err| ApiError::SynthesisFailure(format!("invalid request body: {}", err)))?;
        Self::from_value(&payload)
    }

    pub fn from_value(payload: &Value) -> ApiResult<Self> {
        let niche = payload
            .get("niche")
            .and_then(Value::as_str)
            .filter(|niche| !niche.is_empty())
            .ok_or(ApiError::InvalidInput)?;

        Ok(Self {
            niche: niche.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ideas: Vec<IdeaRecord>,
}

impl GenerateResponse {
    pub fn to_json(&self) -> ApiResult<Value> {
        serde_json::to_value(self)
            .map_err(|err| ApiError::SynthesisFailure(format!("failed to serialize ideas: {}", err)))
    }
}
