//! Report data structures and assembly.

use serde::Serialize;

use crate::geoip::LookupOutcome;

/// The two lookup paths of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Node address looked up directly.
    Entry,
    /// Egress address seen through the node.
    Landing,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::Entry => "entry",
            PathKind::Landing => "landing",
        }
    }
}

/// Outcome of one invocation, ready for rendering.
///
/// `errors` holds one message per path that failed or was skipped, landing
/// first. A successful path never appears in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub node_name: String,
    pub entry: Option<LookupOutcome>,
    pub landing: Option<LookupOutcome>,
    pub errors: Vec<String>,
}

impl Report {
    /// Merges both path outcomes into a report.
    ///
    /// A `None` outcome means the path was skipped and is recorded as such.
    pub fn assemble(
        node_name: impl Into<String>,
        entry: Option<LookupOutcome>,
        landing: Option<LookupOutcome>,
    ) -> Self {
        let errors = [(PathKind::Landing, &landing), (PathKind::Entry, &entry)]
            .into_iter()
            .filter_map(|(path, outcome)| path_error(path, outcome.as_ref()))
            .collect();

        Self {
            node_name: node_name.into(),
            entry,
            landing,
            errors,
        }
    }

    pub fn outcome(&self, path: PathKind) -> Option<&LookupOutcome> {
        match path {
            PathKind::Entry => self.entry.as_ref(),
            PathKind::Landing => self.landing.as_ref(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn path_error(path: PathKind, outcome: Option<&LookupOutcome>) -> Option<String> {
    match outcome {
        None => Some(format!("{} lookup: skipped", path.as_str())),
        Some(outcome) => outcome
            .failure_reason()
            .map(|reason| format!("{} lookup: {}", path.as_str(), reason)),
    }
}
