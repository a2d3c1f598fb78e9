//! JSON body extractors that run payload validation before the handler.
//!
//! [`ValidatedJson`] is used for creates: it checks required keys, decodes,
//! and applies the DTO's `validator` rules. [`ValidatedPatch`] does the same
//! for partial updates, where every key is optional. Either way the handler
//! only ever sees a payload that is safe to hand to a repository.

use axum::extract::{FromRequest, Request};
use axum::Json;
use ecv_core::schema::{parse_create, parse_update, PayloadFields};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// A validated partial-update payload.
#[derive(Debug, Clone)]
pub struct ValidatedPatch<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + PayloadFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = read_json(req, state).await?;
        Ok(Self(parse_create(payload)?))
    }
}

impl<S, T> FromRequest<S> for ValidatedPatch<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + PayloadFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = read_json(req, state).await?;
        Ok(Self(parse_update(payload)?))
    }
}

/// Read the body as untyped JSON, turning axum's rejection into a JSON 400.
async fn read_json<S>(req: Request, state: &S) -> Result<Value, AppError>
where
    S: Send + Sync,
{
    let Json(payload) = Json::<Value>::from_request(req, state)
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(payload)
}
