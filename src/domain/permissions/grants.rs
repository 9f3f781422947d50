use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Builds the grant string for a (module, action) pair: `"<module>.<action>"`.
pub fn grant_key(module: &str, action: &str) -> String {
    format!("{}.{}", module, action)
}

/// Splits a grant string at its last `.` into (module, action).
pub fn split_grant(grant: &str) -> Option<(&str, &str)> {
    let (module, action) = grant.rsplit_once('.')?;
    if module.is_empty() || action.is_empty() {
        return None;
    }
    Some((module, action))
}

/// Flattened, denormalized permission strings held by an authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantSet(BTreeSet<String>);

impl GrantSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns false when the grant was already present.
    pub fn insert(&mut self, grant: impl Into<String>) -> bool {
        self.0.insert(grant.into())
    }

    pub fn contains(&self, grant: &str) -> bool {
        self.0.contains(grant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for GrantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
