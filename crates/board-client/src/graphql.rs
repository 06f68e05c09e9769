//! `graphql` surface: query execution and SDL introspection.
//!
//! The service exposes its entity graph over GraphQL next to the REST
//! views. Responses are arbitrary shapes driven by the query, so execution
//! returns raw JSON rather than a declared model.

use crate::{ApiClient, error::ApiError, http::check_response, models::GraphQlRequest};

/// Operations for the GraphQL surface.
pub struct GraphQl<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the GraphQL operations.
    #[must_use]
    pub const fn graphql(&self) -> GraphQl<'_> {
        GraphQl { client: self }
    }
}

impl GraphQl<'_> {
    /// Execute a GraphQL request and return the raw response document.
    ///
    /// `POST /graphql`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the service rejects the
    /// request body (422), and [`ApiError`] if the HTTP request fails, the
    /// service returns another non-success status, or the response cannot
    /// be parsed.
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.client.url("/graphql");
        let resp = check_response(self.client.http.post(&url).json(request).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Execute a bare query string.
    ///
    /// # Errors
    ///
    /// Same conditions as [`execute`](Self::execute).
    pub async fn query(&self, query: impl Into<String>) -> Result<serde_json::Value, ApiError> {
        self.execute(&GraphQlRequest::query(query)).await
    }

    /// Fetch the schema SDL as plain text.
    ///
    /// `GET /schema`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn schema_sdl(&self) -> Result<String, ApiError> {
        let url = self.client.url("/schema");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.text().await?)
    }
}
