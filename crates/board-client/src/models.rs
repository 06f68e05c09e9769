//! Wire types for the sprintboard demo API.
//!
//! Flat transcription of the service's schema namespace: records with the
//! wire field names, nullable fields as `Option`, omittable fields with
//! `#[serde(default)]`. These shapes have no lifecycle beyond a single
//! request/response round trip and no invariants beyond matching the wire.
//!
//! The per-view detail shapes (`Sample1TeamDetail`, `Story2`, ...) keep the
//! schema names the service declares; each view nests a different slice of
//! the team → sprint → story → task → user graph.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Base shapes ────────────────────────────────────────────────────

/// A user, assignable to tasks and stories and a member of teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Seniority level (e.g. `senior`, `junior`).
    pub level: String,
}

/// A task as stored, without resolved relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    /// Effort estimate in points.
    pub estimate: i64,
}

/// A story as stored, without resolved relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
}

// ── sample_1: progressively nested detail views ────────────────────

/// Task with its assigned user resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample1TaskDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

/// Story with tasks and owner resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample1StoryDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
    pub tasks: Vec<Sample1TaskDetail>,
    pub owner: Option<User>,
}

/// Sprint with the full story sub-tree resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample1SprintDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub team_id: i64,
    pub stories: Vec<Sample1StoryDetail>,
}

/// Team with sprints and members resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample1TeamDetail {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample1SprintDetail>,
    pub members: Vec<User>,
}

/// Same shape as [`Sample1TeamDetail`], declared separately by the service
/// for its second composition route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample1TeamDetail2 {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample1SprintDetail>,
    pub members: Vec<User>,
}

// ── sample_2: member views filtered by level ───────────────────────

/// Team with only its senior members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample2TeamDetail {
    pub id: i64,
    pub name: String,
    pub senior_members: Vec<User>,
}

/// Team with member lists filtered at multiple levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample2TeamDetailMultipleLevel {
    pub id: i64,
    pub name: String,
    pub senior_members: Vec<User>,
    pub junior_members: Vec<User>,
    /// Seniors first, then juniors.
    pub senior_junior: Vec<User>,
}

// ── sample_3: ancestor-derived fields on descendants ───────────────

/// Task carrying a name composed from its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample3TaskDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
    /// Path-style name built from team/sprint/story ancestors.
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample3StoryDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
    pub tasks: Vec<Sample3TaskDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample3SprintDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub team_id: i64,
    pub stories: Vec<Sample3StoryDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample3TeamDetail {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample3SprintDetail>,
}

// ── sample_4: team summaries with optional sub-trees ───────────────

/// Task whose resolved user may be omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample4TaskDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample4StoryDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Sample4TaskDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample4SprintDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<Sample4StoryDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,
}

/// Team summary with aggregate counts and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample4TeamDetail {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample4SprintDetail>,
    /// Tasks in the team's latest sprint slice.
    pub task_count: i64,
    /// Tasks across every sprint of the team.
    pub total_task_count: i64,
    pub description: String,
}

// ── sample_5: single-team page composition ─────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample5TaskDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample5StoryDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
    pub tasks: Vec<Sample5TaskDetail>,
    pub task_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample5SprintDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub team_id: i64,
    pub stories: Vec<Sample5StoryDetail>,
    pub task_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample5TeamDetail {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample5SprintDetail>,
    pub task_count: i64,
    pub description: String,
}

/// Page root for a single team, absent when the team does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample5Root {
    pub summary: String,
    pub team: Option<Sample5TeamDetail>,
}

// ── sample_6: all-teams page composition, names only ───────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample6TaskDetail {
    pub name: String,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample6StoryDetail {
    pub name: String,
    pub tasks: Vec<Sample6TaskDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample6SprintDetail {
    pub name: String,
    pub stories: Vec<Sample6StoryDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample6TeamDetail {
    pub name: String,
    pub sprints: Vec<Sample6SprintDetail>,
}

/// Page root spanning every team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample6Root {
    pub summary: String,
    pub teams: Vec<Sample6TeamDetail>,
}

// ── sample_7: views over the reusable base schemas ─────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample7TaskDetail {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

/// Sprint whose stories stay unresolved [`Story`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample7SprintDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub team_id: i64,
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample7TeamDetail {
    pub id: i64,
    pub name: String,
    pub sprints: Vec<Sample7SprintDetail>,
}

// ── demo: story views with computed fields ─────────────────────────

/// Request body for the demo story view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task0 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story0 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub sprint_id: i64,
    pub tasks: Vec<Task0>,
    pub assignee: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task1 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

/// Story with every user related to it collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story1 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub tasks: Vec<Task1>,
    pub assignee: Option<User>,
    /// Assignee plus every task user, deduplicated.
    pub related_users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task2 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
}

/// Story with its task estimates summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story2 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub tasks: Vec<Task2>,
    pub assignee: Option<User>,
    pub total_estimate: i64,
}

/// Task with a display name derived from its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task3 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub story_id: i64,
    pub estimate: i64,
    pub user: Option<User>,
    pub fullname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story3 {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub tasks: Vec<Task3>,
    pub assignee: Option<User>,
}

// ── graphql ────────────────────────────────────────────────────────

/// Request body for the GraphQL endpoint.
///
/// `variables` and `operation_name` are forwarded verbatim; the service
/// currently evaluates only `query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    /// Build a request carrying only a query string.
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }
}

// ── Validation errors (declared 422 body) ──────────────────────────

/// One segment of a validation error location path.
///
/// The wire carries a mixed list of field names and array indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    /// Named field or parameter.
    Field(String),
    /// Index into an array value.
    Index(i64),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location path of the offending value (e.g. `["path", "team_id"]`).
    pub loc: Vec<LocSegment>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable error code.
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ValidationError>>,
}

impl fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail.as_deref() {
            None | Some([]) => f.write_str("no detail provided"),
            Some(issues) => {
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    let loc: Vec<String> = issue.loc.iter().map(ToString::to_string).collect();
                    write!(f, "{}: {}", loc.join("."), issue.msg)?;
                }
                Ok(())
            }
        }
    }
}
