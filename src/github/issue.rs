//! Issue operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::client::GitHubClient;

/// An issue as listed by the API
///
/// GitHub's issues endpoint also returns pull requests; they are shown
/// like any other issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue number within the repository
    pub number: u64,
    /// Issue title
    pub title: String,
    /// `open` or `closed`
    pub state: String,
    /// The user who opened the issue
    pub user: Option<IssueAuthor>,
    /// Labels applied to the issue
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Web URL
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// The user who opened an issue
#[derive(Debug, Clone, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
}

/// A label attached to an issue
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Issue list filter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueState {
    /// The API query value for this state
    pub fn as_query(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

/// Query parameters for listing issues
#[derive(Debug, Serialize)]
struct ListIssuesParams {
    state: &'static str,
    sort: &'static str,
    direction: &'static str,
}

/// Parameters for creating an issue
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueParams {
    /// Issue title
    pub title: String,
    /// Issue body; omitted from the payload when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Label names; omitted from the payload when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Issue operations handler
pub struct IssueHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> IssueHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// List issues of a repository, most recently updated first
    pub async fn list(&self, owner: &str, repo: &str, state: IssueState) -> Result<Vec<Issue>> {
        let route = format!("/repos/{}/{}/issues", owner, repo);
        let params = ListIssuesParams {
            state: state.as_query(),
            sort: "updated",
            direction: "desc",
        };

        let issues: Vec<Issue> = self.client.octocrab().get(&route, Some(&params)).await?;
        Ok(issues)
    }

    /// Create a new issue
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        params: &CreateIssueParams,
    ) -> Result<Issue> {
        let route = format!("/repos/{}/{}/issues", owner, repo);
        let issue: Issue = self.client.octocrab().post(&route, Some(params)).await?;
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_issue() {
        let issue: Issue = serde_json::from_value(serde_json::json!({
            "number": 42,
            "title": "Something is broken",
            "state": "open",
            "user": { "login": "octocat" },
            "labels": [{ "name": "bug" }, { "name": "help wanted" }],
            "html_url": "https://github.com/octocat/hello-world/issues/42",
            "created_at": "2024-03-01T10:14:43Z"
        }))
        .unwrap();

        assert_eq!(issue.number, 42);
        assert_eq!(issue.state, "open");
        assert_eq!(issue.user.unwrap().login, "octocat");
        assert_eq!(issue.labels.len(), 2);
        assert_eq!(issue.labels[0].name, "bug");
    }

    #[test]
    fn test_deserialize_issue_without_labels() {
        let issue: Issue = serde_json::from_value(serde_json::json!({
            "number": 7,
            "title": "Bare issue",
            "state": "closed",
            "user": null,
            "html_url": "https://github.com/octocat/hello-world/issues/7",
            "created_at": null
        }))
        .unwrap();

        assert!(issue.labels.is_empty());
        assert!(issue.user.is_none());
    }

    #[test]
    fn test_state_query_values() {
        assert_eq!(IssueState::Open.as_query(), "open");
        assert_eq!(IssueState::Closed.as_query(), "closed");
        assert_eq!(IssueState::All.as_query(), "all");
        assert_eq!(IssueState::default(), IssueState::Open);
    }

    #[test]
    fn test_list_params_default_sort() {
        let params = ListIssuesParams {
            state: "open",
            sort: "updated",
            direction: "desc",
        };
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "state": "open", "sort": "updated", "direction": "desc" })
        );
    }

    #[test]
    fn test_create_params_omit_absent_body_and_labels() {
        let params = CreateIssueParams {
            title: "T".to_string(),
            body: None,
            labels: Vec::new(),
        };
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["title"], serde_json::json!("T"));
        assert!(!object.contains_key("body"));
        assert!(!object.contains_key("labels"));
    }

    #[test]
    fn test_create_params_keep_body_and_labels_when_present() {
        let params = CreateIssueParams {
            title: "T".to_string(),
            body: Some("Details".to_string()),
            labels: vec!["bug".to_string()],
        };
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["body"], serde_json::json!("Details"));
        assert_eq!(value["labels"], serde_json::json!(["bug"]));
    }
}
