//! `sample_4` tag: team summaries exposing only a subset of the sub-tree.

use crate::{ApiClient, error::ApiError, http::check_response, models::Sample4TeamDetail};

/// Operations under the `sample_4` tag.
pub struct Sample4<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_4` operations.
    #[must_use]
    pub const fn sample_4(&self) -> Sample4<'_> {
        Sample4 { client: self }
    }
}

impl Sample4<'_> {
    /// Team summaries with aggregate task counts; nested stories and tasks
    /// may be omitted by the service.
    ///
    /// `GET /sample_4/teams-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail(&self) -> Result<Vec<Sample4TeamDetail>, ApiError> {
        let url = self.client.url("/sample_4/teams-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
