//! `sample_3` tag: descendant nodes carrying ancestor-derived fields.

use crate::{ApiClient, error::ApiError, http::check_response, models::Sample3TeamDetail};

/// Operations under the `sample_3` tag.
pub struct Sample3<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_3` operations.
    #[must_use]
    pub const fn sample_3(&self) -> Sample3<'_> {
        Sample3 { client: self }
    }
}

impl Sample3<'_> {
    /// Teams whose leaf tasks carry a `full_name` composed from their
    /// team/sprint/story ancestors.
    ///
    /// `GET /sample_3/teams-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail(&self) -> Result<Vec<Sample3TeamDetail>, ApiError> {
        let url = self.client.url("/sample_3/teams-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Sample3TeamDetail;

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
                        {
                            "id": 1,
                            "name": "login page",
                            "owner_id": 2,
                            "sprint_id": 1,
                            "tasks": [
                                {
                                    "id": 1,
                                    "name": "mock api",
                                    "owner_id": 3,
                                    "story_id": 1,
                                    "estimate": 5,
                                    "user": null,
                                    "full_name": "team-A/Sprint A1/login page/mock api"
                                }
                            ]
                        }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn parse_ancestor_derived_full_name() {
        let teams: Vec<Sample3TeamDetail> = serde_json::from_str(FIXTURE).unwrap();
        let task = &teams[0].sprints[0].stories[0].tasks[0];
        assert_eq!(task.full_name, "team-A/Sprint A1/login page/mock api");
    }
}
