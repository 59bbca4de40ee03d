//! Naming and addressing helpers for logical clusters and workspaces.

use std::fmt;
use tracing::debug;
use url::Url;

use crate::consts::{
    CLUSTERS_MARKER, ROOT_CLUSTER, SYSTEM_CLUSTER, WORKSPACE_NAME_LABEL, WORKSPACES_MARKER,
};
use crate::error::{Error, Result};
use crate::logicalcluster::Name;
use crate::object::ClusterObject;

/// Whether `cluster` follows the naming grammar and is rooted at `root` or
/// `system`.
pub fn is_valid_cluster(cluster: &Name) -> bool {
    if !cluster.is_valid() {
        return false;
    }
    cluster.has_prefix(&Name::new(ROOT_CLUSTER)) || cluster.has_prefix(&Name::new(SYSTEM_CLUSTER))
}

/// Builds `cluster|namespace/name`, or `cluster|name` for cluster-scoped
/// objects.
pub fn qualified_object_name<O: ClusterObject + ?Sized>(obj: &O) -> String {
    match obj.namespace() {
        Some(namespace) if !namespace.is_empty() => {
            format!("{}|{}/{}", obj.cluster(), namespace, obj.name())
        }
        _ => format!("{}|{}", obj.cluster(), obj.name()),
    }
}

/// Label selector matching objects that belong to the named workspace. The
/// name is not escaped.
pub fn workspace_label_selector(name: &str) -> String {
    format!("{WORKSPACE_NAME_LABEL}={name}")
}

/// A path marker that introduces a cluster name, and how to pull the name
/// out of the path that follows it.
#[derive(Debug, Clone, Copy)]
pub struct ClusterMarker {
    pub marker: &'static str,
    pub extract: fn(&str) -> &str,
}

/// Markers tried in order; the first one present in the path wins.
pub static CLUSTER_URL_MARKERS: [ClusterMarker; 2] = [
    ClusterMarker {
        marker: CLUSTERS_MARKER,
        extract: first_segment,
    },
    ClusterMarker {
        marker: WORKSPACES_MARKER,
        extract: first_segment,
    },
];

fn first_segment(rest: &str) -> &str {
    rest.split('/').next().unwrap_or_default()
}

/// A URL with the cluster portion of its path removed.
///
/// Held as the caller's own text: host, port and path are never
/// normalized, so the base prints exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    // scheme and authority
    origin: String,
    path: String,
    // query and fragment, with their leading `?` / `#`
    suffix: String,
}

impl BaseUrl {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The base parsed as a [`Url`]. Unlike `Display`, this form is
    /// normalized by the `url` crate (`https://Host:443` becomes
    /// `https://host/`).
    pub fn to_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.to_string())?)
    }

    /// The URL addressing `cluster` below this base.
    pub fn cluster_url(&self, cluster: &Name) -> String {
        format!(
            "{}{}{CLUSTERS_MARKER}{cluster}{}",
            self.origin, self.path, self.suffix
        )
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.origin, self.path, self.suffix)
    }
}

/// Result of [`parse_cluster_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUrl {
    base: BaseUrl,
    cluster: Name,
}

impl ClusterUrl {
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    pub fn cluster(&self) -> &Name {
        &self.cluster
    }

    pub fn into_parts(self) -> (BaseUrl, Name) {
        (self.base, self.cluster)
    }
}

impl fmt::Display for ClusterUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base.cluster_url(&self.cluster))
    }
}

/// Splits raw URL text into origin, path and suffix (`?query#fragment`).
/// Only meaningful for input `Url::parse` already accepted.
fn split_raw(input: &str) -> (&str, &str, &str) {
    let end = input.find(['?', '#']).unwrap_or(input.len());
    let (head, suffix) = input.split_at(end);
    let after_scheme = head.find(':').map_or(0, |i| i + 1);
    let path_start = match head[after_scheme..].strip_prefix("//") {
        Some(authority) => {
            let authority_start = after_scheme + 2;
            authority
                .find('/')
                .map_or(head.len(), |i| authority_start + i)
        }
        None => after_scheme,
    };
    let (origin, path) = head.split_at(path_start);
    (origin, path, suffix)
}

/// Splits a cluster workspace URL into its base URL and cluster name.
///
/// The path is searched for each of [`CLUSTER_URL_MARKERS`] in order. The
/// base keeps scheme, authority, query and fragment exactly as given; its
/// path ends where the marker starts, so anything after the cluster segment
/// is dropped. The cluster segment is percent-decoded before validation.
pub fn parse_cluster_url(host: &str) -> Result<ClusterUrl> {
    Url::parse(host)?;
    let input = host.trim_matches(|c: char| c <= ' ');
    let (origin, path, suffix) = split_raw(input);

    let found = CLUSTER_URL_MARKERS
        .iter()
        .find_map(|m| path.find(m.marker).map(|index| (m, index)));
    let Some((marker, index)) = found else {
        debug!(url = host, "no cluster marker in path");
        return Err(Error::invalid_cluster_url(host));
    };

    let segment = (marker.extract)(&path[index + marker.marker.len()..]);
    let Ok(decoded) = urlencoding::decode(segment) else {
        debug!(url = host, segment, "cluster segment is not valid UTF-8");
        return Err(Error::invalid_cluster_url(host));
    };
    let cluster = Name::new(decoded.into_owned());
    if cluster.is_empty() || !is_valid_cluster(&cluster) {
        debug!(url = host, %cluster, "rejected cluster segment");
        return Err(Error::invalid_cluster_url(host));
    }
    debug!(url = host, marker = marker.marker, %cluster, "parsed cluster URL");

    Ok(ClusterUrl {
        base: BaseUrl {
            origin: origin.to_string(),
            path: path[..index].to_string(),
            suffix: suffix.to_string(),
        },
        cluster,
    })
}
