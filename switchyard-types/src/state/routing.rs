//! Routing location state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Route prefix every project workspace lives under.
pub const WORKSPACE_ROUTE: &str = "/workspace";

/// A routing location: path plus query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Workspace route for a project root. The root is appended verbatim, so an
    /// absolute root yields `/workspace//abs/path`.
    pub fn workspace(root: &str) -> Self {
        Self::new(format!("{}/{}", WORKSPACE_ROUTE, root))
    }

    /// Inverse of [`Location::workspace`].
    pub fn project_root(&self) -> Option<&str> {
        self.pathname
            .strip_prefix(WORKSPACE_ROUTE)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|root| !root.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingState {
    pub location: Location,
}
