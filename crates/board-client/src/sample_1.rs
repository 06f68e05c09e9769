//! `sample_1` tag: flat lists and progressively nested detail views.
//!
//! The views walk up the graph one level at a time: tasks, tasks with
//! users, stories with tasks, sprints with stories, teams with sprints
//! and members.

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    models::{
        Sample1SprintDetail, Sample1StoryDetail, Sample1TaskDetail, Sample1TeamDetail,
        Sample1TeamDetail2, Task, User,
    },
};

/// Operations under the `sample_1` tag.
pub struct Sample1<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_1` operations.
    #[must_use]
    pub const fn sample_1(&self) -> Sample1<'_> {
        Sample1 { client: self }
    }
}

impl Sample1<'_> {
    /// Flat list of every user.
    ///
    /// `GET /sample_1/users`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.client.url("/sample_1/users");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Flat list of every task, relations unresolved.
    ///
    /// `GET /sample_1/tasks`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.client.url("/sample_1/tasks");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Tasks with their assigned users resolved.
    ///
    /// `GET /sample_1/tasks-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn tasks_with_detail(&self) -> Result<Vec<Sample1TaskDetail>, ApiError> {
        let url = self.client.url("/sample_1/tasks-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Stories with tasks (and their users) resolved.
    ///
    /// `GET /sample_1/stories-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn stories_with_detail(&self) -> Result<Vec<Sample1StoryDetail>, ApiError> {
        let url = self.client.url("/sample_1/stories-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Sprints with the full story sub-tree resolved.
    ///
    /// `GET /sample_1/sprints-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn sprints_with_detail(&self) -> Result<Vec<Sample1SprintDetail>, ApiError> {
        let url = self.client.url("/sample_1/sprints-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Teams with sprints and members resolved, four levels deep.
    ///
    /// `GET /sample_1/teams-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail(&self) -> Result<Vec<Sample1TeamDetail>, ApiError> {
        let url = self.client.url("/sample_1/teams-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Same view as [`teams_with_detail`](Self::teams_with_detail), served
    /// by the service's alternative composition route.
    ///
    /// `GET /sample_1/teams-with-detail2`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail2(&self) -> Result<Vec<Sample1TeamDetail2>, ApiError> {
        let url = self.client.url("/sample_1/teams-with-detail2");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::Sample1TeamDetail;

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
                            "owner": {"id": 2, "name": "john", "level": "senior"},
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
            "members": [
                {"id": 2, "name": "john", "level": "senior"},
                {"id": 3, "name": "jane", "level": "junior"}
            ]
        }
    ]"#;

    #[test]
    fn parse_nested_team_detail() {
        let teams: Vec<Sample1TeamDetail> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(teams.len(), 1);

        let team = &teams[0];
        assert_eq!(team.name, "team-A");
        assert_eq!(team.members.len(), 2);

        let story = &team.sprints[0].stories[0];
        assert_eq!(story.owner.as_ref().unwrap().name, "john");
        assert_eq!(story.tasks[0].user.as_ref().unwrap().level, "junior");
        assert!(story.tasks[1].user.is_none());
    }
}
