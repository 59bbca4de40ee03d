use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::logicalcluster::{self, Name};

/// An object that lives in a logical cluster.
///
/// How the cluster is attached to the object is up to the implementor;
/// [`ObjectMeta`] reads it from the cluster annotation.
pub trait ClusterObject {
    fn name(&self) -> &str;
    fn namespace(&self) -> Option<&str>;
    fn cluster(&self) -> Name;
}

/// The subset of Kubernetes object metadata needed to address an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ClusterObject for ObjectMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn cluster(&self) -> Name {
        logicalcluster::from_annotations(&self.annotations)
    }
}

/// A whole object as read from JSON; only `metadata` is kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Object {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

impl ClusterObject for Object {
    fn name(&self) -> &str {
        self.metadata.name()
    }

    fn namespace(&self) -> Option<&str> {
        self.metadata.namespace()
    }

    fn cluster(&self) -> Name {
        self.metadata.cluster()
    }
}
