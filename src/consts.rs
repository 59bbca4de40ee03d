//! Names and path fragments shared with external tooling.
//!
//! Everything here is part of the wire contract: kubectl plugins and other
//! clients build URLs and selectors from these exact strings, so they never
//! change between releases.

/// Path prefix under which workspace services are mounted.
pub const DEFAULT_ROOT_PATH_PREFIX: &str = "/services";

/// Marker preceding a cluster name in a direct cluster URL.
pub const CLUSTERS_MARKER: &str = "/clusters/";

/// Marker preceding a cluster name in a workspace service URL.
///
/// Always `DEFAULT_ROOT_PATH_PREFIX` followed by `/workspaces/`.
pub const WORKSPACES_MARKER: &str = "/services/workspaces/";

pub const ROOT_CLUSTER: &str = "root";
pub const SYSTEM_CLUSTER: &str = "system";

/// Label carrying a workspace's name on related objects.
pub const WORKSPACE_NAME_LABEL: &str = "workspaces.kcp.dev/name";

/// Annotation associating an object with its logical cluster.
pub const CLUSTER_ANNOTATION: &str = "kcp.dev/cluster";
