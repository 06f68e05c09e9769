//! `sample_5` tag: page composition rooted at a single team.

use crate::{ApiClient, error::ApiError, http::check_response, models::Sample5Root};

/// Operations under the `sample_5` tag.
pub struct Sample5<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_5` operations.
    #[must_use]
    pub const fn sample_5(&self) -> Sample5<'_> {
        Sample5 { client: self }
    }
}

impl Sample5<'_> {
    /// Full page payload for one team; `team` is null when the id does not
    /// exist.
    ///
    /// `GET /sample_5/page-info/{team_id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the service rejects
    /// `team_id` (422), and [`ApiError`] if the HTTP request fails, the
    /// service returns another non-success status, or the response cannot
    /// be parsed.
    pub async fn page_info(&self, team_id: i64) -> Result<Sample5Root, ApiError> {
        let url = self.client.url(&format!("/sample_5/page-info/{team_id}"));
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Sample5Root;

    const FIXTURE: &str = r#"{
        "summary": "team: team-A",
        "team": {
            "id": 1,
            "name": "team-A",
            "sprints": [
                {
                    "id": 1,
                    "name": "Sprint A1",
                    "status": "active",
                    "team_id": 1,
                    "task_count": 2,
                    "stories": [
                        {
                            "id": 1,
                            "name": "login page",
                            "owner_id": 2,
                            "sprint_id": 1,
                            "task_count": 2,
                            "tasks": [
                                {
                                    "id": 1,
                                    "name": "mock api",
                                    "owner_id": 3,
                                    "story_id": 1,
                                    "estimate": 5,
                                    "user": {"id": 3, "name": "jane", "level": "junior"}
                                },
                                {
                                    "id": 2,
                                    "name": "ui layout",
                                    "owner_id": 3,
                                    "story_id": 1,
                                    "estimate": 3,
                                    "user": null
                                }
                            ]
                        }
                    ]
                }
            ],
            "task_count": 2,
            "description": "many things to do"
        }
    }"#;

    #[test]
    fn parse_page_with_team() {
        let root: Sample5Root = serde_json::from_str(FIXTURE).unwrap();
        let team = root.team.expect("team present");
        assert_eq!(team.task_count, 2);
        assert_eq!(team.sprints[0].stories[0].tasks.len(), 2);
    }

    #[test]
    fn parse_page_for_missing_team() {
        let root: Sample5Root =
            serde_json::from_str(r#"{"summary": "not found", "team": null}"#).unwrap();
        assert!(root.team.is_none());
    }
}
