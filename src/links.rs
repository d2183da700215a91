//! URL templates for the external trackers.

use crate::models::IssueId;

/// Repository whose tracker holds tracking issues and stabilization PRs by
/// default.
pub const DEFAULT_TRACKER: &str = "rust-lang/rust";

/// Pull request URL on the default tracker.
pub fn pr_url(pr: IssueId) -> String {
    format!("https://github.com/{DEFAULT_TRACKER}/pull/{pr}")
}

/// Issue URL, on `repo`'s tracker when given, the default tracker otherwise.
pub fn issue_url(repo: Option<&str>, issue: IssueId) -> String {
    format!(
        "https://github.com/{}/issues/{}",
        repo.unwrap_or(DEFAULT_TRACKER),
        issue
    )
}
