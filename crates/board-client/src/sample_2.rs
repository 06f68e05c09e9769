//! `sample_2` tag: team member views filtered by level.

use crate::{
    ApiClient,
    error::ApiError,
    http::check_response,
    models::{Sample2TeamDetail, Sample2TeamDetailMultipleLevel},
};

/// Operations under the `sample_2` tag.
pub struct Sample2<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Access the `sample_2` operations.
    #[must_use]
    pub const fn sample_2(&self) -> Sample2<'_> {
        Sample2 { client: self }
    }
}

impl Sample2<'_> {
    /// Teams with only their senior members.
    ///
    /// `GET /sample_2/teams-with-detail`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail(&self) -> Result<Vec<Sample2TeamDetail>, ApiError> {
        let url = self.client.url("/sample_2/teams-with-detail");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Teams with member lists filtered at multiple levels (senior, junior,
    /// and combined).
    ///
    /// `GET /sample_2/teams-with-detail-of-multiple-level`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns
    /// a non-success status, or the response cannot be parsed.
    pub async fn teams_with_detail_of_multiple_level(
        &self,
    ) -> Result<Vec<Sample2TeamDetailMultipleLevel>, ApiError> {
        let url = self.client.url("/sample_2/teams-with-detail-of-multiple-level");
        let resp = check_response(self.client.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Sample2TeamDetailMultipleLevel;

    const FIXTURE: &str = r#"[
        {
            "id": 1,
            "name": "team-A",
            "senior_members": [{"id": 2, "name": "john", "level": "senior"}],
            "junior_members": [{"id": 3, "name": "jane", "level": "junior"}],
            "senior_junior": [
                {"id": 2, "name": "john", "level": "senior"},
                {"id": 3, "name": "jane", "level": "junior"}
            ]
        }
    ]"#;

    #[test]
    fn parse_multiple_level_members() {
        let teams: Vec<Sample2TeamDetailMultipleLevel> = serde_json::from_str(FIXTURE).unwrap();
        let team = &teams[0];
        assert_eq!(team.senior_members.len(), 1);
        assert_eq!(team.junior_members.len(), 1);
        assert_eq!(team.senior_junior.len(), 2);
        assert_eq!(team.senior_junior[0].level, "senior");
    }
}
