//! `demo` tag: story views with computed fields.
//!
//! Four variants of "stories with tasks and users": the base view, one
//! collecting related users, one summing task estimates, and one deriving
//! task display names.

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    models::{Payload, Story0, Story1, Story2, Story3},
};

/// Operations under the `demo` tag.
pub struct Demo<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `demo` operations.
    #[must_use]
    pub const fn demo(&self) -> Demo<'_> {
        Demo { client: self }
    }
}

impl Demo<'_> {
    /// Stories with tasks and assignees resolved. The payload is echoed to
    /// the service log, not persisted.
    ///
    /// `POST /demo/stories`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the service rejects the
    /// payload (422), and [`ApiError`] if the HTTP request fails, the
    /// service returns another non-success status, or the response cannot
    /// be parsed.
    pub async fn stories(&self, payload: &Payload) -> Result<Vec<Story0>, ApiError> {
        let url = self.client.url("/demo/stories");
        let resp = check_response(self.client.http.post(&url).json(payload).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Stories with every related user collected onto the story.
    ///
    /// `GET /demo/stories-1`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn stories_1(&self) -> Result<Vec<Story1>, ApiError> {
        let url = self.client.url("/demo/stories-1");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Stories with task estimates summed into `total_estimate`.
    ///
    /// `GET /demo/stories-2`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn stories_2(&self) -> Result<Vec<Story2>, ApiError> {
        let url = self.client.url("/demo/stories-2");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Stories whose tasks carry a user-derived `fullname`.
    ///
    /// `GET /demo/stories-3`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn stories_3(&self) -> Result<Vec<Story3>, ApiError> {
        let url = self.client.url("/demo/stories-3");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::{Story1, Story2};

    const STORY1_FIXTURE: &str = r#"[
        {
            "id": 1,
            "name": "login page",
            "owner_id": 2,
            "assignee": {"id": 2, "name": "john", "level": "senior"},
            "tasks": [
                {
                    "id": 1,
                    "name": "mock api",
                    "owner_id": 3,
                    "story_id": 1,
                    "estimate": 5,
                    "user": {"id": 3, "name": "jane", "level": "junior"}
                }
            ],
            "related_users": [
                {"id": 2, "name": "john", "level": "senior"},
                {"id": 3, "name": "jane", "level": "junior"}
            ]
        }
    ]"#;

    #[test]
    fn parse_story_with_related_users() {
        let stories: Vec<Story1> = serde_json::from_str(STORY1_FIXTURE).unwrap();
        let story = &stories[0];
        assert_eq!(story.assignee.as_ref().unwrap().name, "john");
        assert_eq!(story.related_users.len(), 2);
    }

    #[test]
    fn parse_story_with_total_estimate() {
        let json = r#"[
            {
                "id": 1,
                "name": "login page",
                "owner_id": 2,
                "assignee": null,
                "tasks": [
                    {"id": 1, "name": "a", "owner_id": 3, "story_id": 1, "estimate": 5, "user": null},
                    {"id": 2, "name": "b", "owner_id": 3, "story_id": 1, "estimate": 3, "user": null}
                ],
                "total_estimate": 8
            }
        ]"#;
        let stories: Vec<Story2> = serde_json::from_str(json).unwrap();
        assert_eq!(stories[0].total_estimate, 8);
        assert!(stories[0].assignee.is_none());
    }
}
