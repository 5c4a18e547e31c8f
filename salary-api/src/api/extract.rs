//! Request body extraction with range validation.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use salary_common::Profile;

use crate::error::Error;

/// A profile that parsed and passed every numeric bound.
///
/// The body is read as JSON whatever the `Content-Type` header says. Parse
/// failures and range violations are both rejected with 422 before the
/// handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedProfile(pub Profile);

#[async_trait]
impl<S> FromRequest<S> for ValidatedProfile
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Error::Schema(rejection.body_text()))?;

        let profile: Profile =
            serde_json::from_slice(&body).map_err(|e| Error::Schema(e.to_string()))?;

        profile.validate()?;
        Ok(ValidatedProfile(profile))
    }
}
