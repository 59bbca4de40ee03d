//! Resolving workspace references relative to the current workspace.
//!
//! | reference   | target                         |
//! |-------------|--------------------------------|
//! | `..`        | parent of the current workspace |
//! | `-`         | previously used workspace       |
//! | `:root:foo` | absolute path `root:foo`        |
//! | `root`      | the `root` (or `system`) cluster |
//! | `foo`       | child `foo` of the current one  |

use tracing::debug;

use crate::consts::{ROOT_CLUSTER, SYSTEM_CLUSTER};
use crate::error::{Error, Result};
use crate::helper::is_valid_cluster;
use crate::logicalcluster::Name;

pub fn resolve(current: &Name, previous: Option<&Name>, reference: &str) -> Result<Name> {
    let reference = reference.trim();
    let target = match reference {
        ".." => current
            .parent()
            .ok_or_else(|| Error::NoParent(current.to_string()))?,
        "-" => previous.cloned().ok_or(Error::NoPrevious)?,
        ROOT_CLUSTER | SYSTEM_CLUSTER => Name::new(reference),
        _ => match reference.strip_prefix(':') {
            Some(absolute) => Name::new(absolute),
            None => current.join(reference),
        },
    };
    debug!(%current, reference, %target, "resolved workspace reference");

    if !is_valid_cluster(&target) {
        return Err(Error::invalid_cluster(target.as_str()));
    }
    Ok(target)
}
