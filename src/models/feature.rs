use serde::Deserialize;

/// Issue or pull-request number on an external tracker.
pub type IssueId = u32;

/// One feature-status line on the generated page.
///
/// Records are defined in the data tables and never mutated. When
/// `unresolved` is set the record is still under discussion: the renderer
/// emits only the unresolved badge and skips stabilization, RFC, and
/// tracking fragments entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRecord {
    /// Display title. Text between single backtick pairs renders as inline code.
    pub title: String,
    /// RFC reference: a bare number for an unmerged proposal, or
    /// `<id>-<slug>[#fragment]` for a merged one.
    #[serde(default)]
    pub rfc: Option<String>,
    /// External repository (`owner/name`) whose tracker holds the tracking
    /// issue. Defaults to the main tracker when absent.
    #[serde(default)]
    pub repo: Option<String>,
    /// Tracking issue number.
    #[serde(default)]
    pub tracking: Option<IssueId>,
    /// Set once the feature landed in a numbered release.
    #[serde(default)]
    pub stabilized: Option<Stabilization>,
    /// RFC discussion anchor for a design question that is still open.
    #[serde(default)]
    pub unresolved: Option<String>,
}

/// The release and pull request that stabilized a feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Stabilization {
    /// Release version, e.g. `"1.26"`.
    pub version: String,
    /// Stabilization pull request number.
    pub pr: IssueId,
}
