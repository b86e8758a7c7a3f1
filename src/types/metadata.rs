use serde::{Deserialize, Serialize};

/// Repository metadata supplied by the caller. The serde aliases match the
/// field names `gh repo list --json` emits so exported listings can be fed
/// in directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "stargazerCount")]
    pub star_count: u64,
    #[serde(default, alias = "forkCount")]
    pub fork_count: u64,
    #[serde(default, alias = "openIssuesCount")]
    pub open_issue_count: u64,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 timestamp of the last push, if known.
    #[serde(default, alias = "updatedAt")]
    pub last_updated: Option<String>,
}
