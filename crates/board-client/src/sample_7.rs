//! `sample_7` tag: views assembled from the reusable base schemas.

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    models::{Sample7TaskDetail, Sample7TeamDetail},
};

/// Operations under the `sample_7` tag.
pub struct Sample7<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_7` operations.
    #[must_use]
    pub const fn sample_7(&self) -> Sample7<'_> {
        Sample7 { client: self }
    }
}

impl Sample7<'_> {
    /// Tasks with their assigned users resolved.
    ///
    /// `GET /sample_7/tasks`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn tasks(&self) -> Result<Vec<Sample7TaskDetail>, ApiError> {
        let url = self.client.url("/sample_7/tasks");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Teams a user participates in, with sprints and unresolved stories.
    ///
    /// `GET /sample_7/user/{id}/stat`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the service rejects `id`
    /// (422), and [`ApiError`] if the HTTP request fails, the service
    /// returns another non-success status, or the response cannot be
    /// parsed.
    pub async fn user_stat(&self, id: i64) -> Result<Vec<Sample7TeamDetail>, ApiError> {
        let url = self.client.url(&format!("/sample_7/user/{id}/stat"));
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Sample7TeamDetail;

    const FIXTURE: &str = r#"[
        {
            "id": 1,
            "name": "team-A",
            "sprints": [
                {
                    "id": 1,
                    "name": "Sprint A1",
                    "status": "active",
                    "team_id": 1,
                    "stories": [
                        {"id": 1, "name": "login page", "owner_id": 2, "sprint_id": 1}
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn parse_stat_with_unresolved_stories() {
        let teams: Vec<Sample7TeamDetail> = serde_json::from_str(FIXTURE).unwrap();
        let story = &teams[0].sprints[0].stories[0];
        assert_eq!(story.name, "login page");
        assert_eq!(story.sprint_id, 1);
    }
}
