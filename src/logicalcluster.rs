//! Logical cluster names.
//!
//! A logical cluster is addressed by a colon-separated path such as
//! `root:org:team`. [`Name`] wraps that path without validating it on
//! construction; call [`Name::is_valid`] when the input is untrusted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::consts::CLUSTER_ANNOTATION;

const SEPARATOR: char = ':';

// Segment length is left to the server.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(:[a-z]([a-z0-9-]*[a-z0-9])?)*$")
        .expect("cluster name pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The zero value. Never valid.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name follows the segment grammar: lowercase
    /// alphanumerics and inner hyphens, colon separated, with every segment
    /// after the first starting with a letter.
    pub fn is_valid(&self) -> bool {
        NAME_RE.is_match(&self.0)
    }

    /// Segment-wise prefix test: `root:foo` has prefix `root` but `rootx`
    /// does not.
    pub fn has_prefix(&self, other: &Name) -> bool {
        match self.0.strip_prefix(other.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
            None => false,
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// The enclosing cluster, or `None` for a single-segment name.
    pub fn parent(&self) -> Option<Name> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| Name::new(parent))
    }

    /// Splits off the last segment. A single-segment name has an empty
    /// parent.
    pub fn split(&self) -> (Name, &str) {
        match self.0.rsplit_once(SEPARATOR) {
            Some((parent, base)) => (Name::new(parent), base),
            None => (Name::empty(), &self.0),
        }
    }

    pub fn base(&self) -> &str {
        self.split().1
    }

    pub fn join(&self, segment: &str) -> Name {
        if self.is_empty() {
            return Name::new(segment);
        }
        Name(format!("{}{SEPARATOR}{segment}", self.0))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Name::new(s))
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name(value)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reads the cluster association from an object's annotations. Missing
/// annotations give the empty name.
pub fn from_annotations(annotations: &BTreeMap<String, String>) -> Name {
    annotations
        .get(CLUSTER_ANNOTATION)
        .map(|v| Name::new(v.as_str()))
        .unwrap_or_default()
}
