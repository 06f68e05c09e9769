//! `sample_6` tag: page composition spanning every team, names only.

use crate::{ApiClient, error::ApiError, http::check_response, models::Sample6Root};

/// Operations under the `sample_6` tag.
pub struct Sample6<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_6` operations.
    #[must_use]
    pub const fn sample_6(&self) -> Sample6<'_> {
        Sample6 { client: self }
    }
}

impl Sample6<'_> {
    /// Page payload listing every team, trimmed to names and assigned
    /// users.
    ///
    /// `GET /sample_6/page-info`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn page_info(&self) -> Result<Sample6Root, ApiError> {
        let url = self.client.url("/sample_6/page-info");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
