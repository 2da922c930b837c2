//! Collector output contracts and their translation into builder calls.
//!
//! The scanners and the git collector run elsewhere; what arrives here is
//! their already-materialized output. Each `ingest_*` call adds nodes before
//! the edges that reference them, so a well-formed report can never trip
//! the store's endpoint check.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::attributes::{Attributes, attributes};
use crate::builder::{DriftSeverity, GraphBuilder};
use crate::error::ConstructionError;
use crate::graph::DateRange;

/// A path touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    pub author: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub files_changed: Vec<ChangedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub commit_count: u64,
}

/// Output of the git history collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHistory {
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(default)]
    pub developers: Vec<DeveloperRecord>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// A component discovered by the scanners, with the stories and tests that
/// exercise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub stories: Vec<String>,
    #[serde(default)]
    pub tests: Vec<String>,
}

/// A design token declared by the design system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDefinition {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub token: String,
    pub file: String,
    #[serde(default)]
    pub component: Option<String>,
}

/// A raw style value where a token was expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardcodedValue {
    pub file: String,
    #[serde(default)]
    pub component: Option<String>,
    pub property: String,
    pub value: String,
    #[serde(default = "default_severity")]
    pub severity: DriftSeverity,
    #[serde(default)]
    pub detected_at: Option<DateTime<Utc>>,
}

fn default_severity() -> DriftSeverity {
    DriftSeverity::Warning
}

/// Output of the usage scanners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub tokens: Vec<TokenDefinition>,
    #[serde(default)]
    pub token_usages: Vec<TokenUsage>,
    #[serde(default)]
    pub hardcoded_values: Vec<HardcodedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEdge {
    pub source_file: String,
    pub target_file: String,
    #[serde(default)]
    pub is_external: bool,
}

/// Output of the import collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    #[serde(default)]
    pub edges: Vec<ImportEdge>,
    #[serde(default)]
    pub external_packages: Vec<String>,
}

/// How many builder calls one ingest made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestSummary {
    pub nodes_touched: usize,
    pub edges_touched: usize,
}

impl GraphBuilder {
    /// Add commits, developers, and the files each commit changed.
    ///
    /// Developers are matched to commits by email, ignoring case. A commit
    /// whose author has no developer record gets one keyed by the lowercased
    /// email, with its commit count tallied from the history.
    pub fn ingest_history(&mut self, history: &GitHistory) -> Result<IngestSummary, ConstructionError> {
        let mut summary = IngestSummary::default();

        let mut by_email = BTreeMap::new();
        for dev in &history.developers {
            let id = self.add_developer(
                &dev.id,
                &dev.name,
                &dev.email,
                dev.avatar_url.as_deref(),
                dev.commit_count,
            )?;
            by_email.insert(dev.email.to_lowercase(), id);
            summary.nodes_touched += 1;
        }

        // Authors the collector did not report as developers.
        let mut synthesized: BTreeMap<String, (&str, u64)> = BTreeMap::new();
        for commit in &history.commits {
            let email = commit.author_email.to_lowercase();
            if !by_email.contains_key(&email) {
                synthesized.entry(email).or_insert((commit.author.as_str(), 0)).1 += 1;
            }
        }
        for (email, (name, count)) in synthesized {
            if email.is_empty() {
                continue;
            }
            debug!(email = %email, commits = count, "synthesizing developer from history");
            let id = self.add_developer(&email, name, &email, None, count)?;
            by_email.insert(email, id);
            summary.nodes_touched += 1;
        }

        for commit in &history.commits {
            let commit_id = self.add_commit(
                &commit.sha,
                &commit.message,
                &commit.author,
                &commit.author_email,
                commit.timestamp,
            )?;
            summary.nodes_touched += 1;

            if let Some(dev_id) = by_email.get(&commit.author_email.to_lowercase()) {
                self.link_authored(dev_id, &commit_id, commit.timestamp)?;
                summary.edges_touched += 1;
            } else {
                warn!(sha = %commit.sha, "commit has no author email; skipping AUTHORED edge");
            }

            for changed in &commit.files_changed {
                let file_id = self.add_file(&changed.path, None)?;
                self.link_changed(&commit_id, &file_id, commit.timestamp)?;
                summary.nodes_touched += 1;
                summary.edges_touched += 1;
            }
        }

        if let Some(range) = &history.date_range {
            self.set_history_range(range.clone());
        }

        debug!(
            commits = history.commits.len(),
            developers = history.developers.len(),
            "ingested git history"
        );
        Ok(summary)
    }

    /// Add components, tokens, stories, tests, usages, and hardcoded-value
    /// drift events.
    ///
    /// `now` stamps drift events whose finding carries no detection time.
    pub fn ingest_usage(
        &mut self,
        usage: &UsageReport,
        now: DateTime<Utc>,
    ) -> Result<IngestSummary, ConstructionError> {
        let mut summary = IngestSummary::default();

        for token in &usage.tokens {
            let mut attrs = Attributes::new();
            if let Some(value) = &token.value {
                attrs.insert("value".to_string(), json!(value));
            }
            if let Some(category) = &token.category {
                attrs.insert("category".to_string(), json!(category));
            }
            self.add_token(&token.name, attrs)?;
            summary.nodes_touched += 1;
        }

        for component in &usage.components {
            let mut attrs = Attributes::new();
            if let Some(file) = &component.file {
                let file_id = self.add_file(file, None)?;
                attrs.insert("file".to_string(), json!(file_id.natural_key()));
                summary.nodes_touched += 1;
            }
            let component_id = self.add_component(&component.name, attrs)?;
            summary.nodes_touched += 1;

            for story in &component.stories {
                let story_id = self.add_story(story, Attributes::new())?;
                self.link_story(&component_id, &story_id)?;
                summary.nodes_touched += 1;
                summary.edges_touched += 1;
            }
            for test in &component.tests {
                let test_id = self.add_test(test, Attributes::new())?;
                self.link_test(&component_id, &test_id)?;
                summary.nodes_touched += 1;
                summary.edges_touched += 1;
            }
        }

        for usage in &usage.token_usages {
            self.add_file(&usage.file, None)?;
            let token_id = self.add_token(&usage.token, Attributes::new())?;
            summary.nodes_touched += 2;

            // Without a component there is no USES_TOKEN source.
            if let Some(component) = &usage.component {
                let component_id = self.add_component(component, Attributes::new())?;
                self.link_token_usage(&component_id, &token_id)?;
                summary.nodes_touched += 1;
                summary.edges_touched += 1;
            }
        }

        for finding in &usage.hardcoded_values {
            let file_id = self.add_file(&finding.file, None)?;
            summary.nodes_touched += 1;
            let observer = match &finding.component {
                Some(component) => {
                    summary.nodes_touched += 1;
                    Some(self.add_component(component, Attributes::new())?)
                }
                None => None,
            };
            self.record_drift(
                &file_id,
                observer.as_ref(),
                finding.severity,
                finding.detected_at.unwrap_or(now),
                attributes([
                    ("property", json!(finding.property)),
                    ("value", json!(finding.value)),
                ]),
            )?;
            summary.edges_touched += 1;
        }

        debug!(
            components = usage.components.len(),
            tokens = usage.tokens.len(),
            token_usages = usage.token_usages.len(),
            hardcoded = usage.hardcoded_values.len(),
            "ingested usage report"
        );
        Ok(summary)
    }

    /// Add file-to-file imports; external targets only feed the package list.
    pub fn ingest_imports(&mut self, imports: &ImportReport) -> Result<IngestSummary, ConstructionError> {
        let mut summary = IngestSummary::default();

        for edge in &imports.edges {
            if edge.is_external {
                self.add_external_package(&edge.target_file);
                continue;
            }
            let from = self.add_file(&edge.source_file, None)?;
            let to = self.add_file(&edge.target_file, None)?;
            self.link_import(&from, &to)?;
            summary.nodes_touched += 2;
            summary.edges_touched += 1;
        }

        for package in &imports.external_packages {
            self.add_external_package(package);
        }

        debug!(edges = imports.edges.len(), "ingested import report");
        Ok(summary)
    }
}
