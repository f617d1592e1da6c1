use super::structs::Asset;
use crate::handler::error::ApiError;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetsBody {
    List(Vec<Asset>),
    Wrapped { data: Vec<Asset> },
}

/// Narrows a JSON response body to a list of assets.
///
/// Accepts a bare array or an object carrying the array under `data`.
/// Anything else, including a single malformed record, rejects the whole body.
pub fn parse_assets(body: &str) -> Result<Vec<Asset>, ApiError> {
    match serde_json::from_str::<AssetsBody>(body) {
        Ok(AssetsBody::List(assets)) | Ok(AssetsBody::Wrapped { data: assets }) => Ok(assets),
        Err(_) => {
            // Re-parse as a plain list so the error points at the offending field.
            let err = serde_json::from_str::<Vec<Asset>>(body)
                .err()
                .or_else(|| serde_json::from_str::<serde_json::Value>(body).err());
            match err {
                Some(e) => Err(ApiError::JsonError(e)),
                None => Err(ApiError::JsonError(serde::de::Error::custom(
                    "expected an array of assets or an object with a `data` array",
                ))),
            }
        }
    }
}
