pub mod config;
pub mod consts;
pub mod error;
pub mod helper;
pub mod logicalcluster;
pub mod object;
pub mod output;
pub mod workspace;

pub use error::Error;
pub use helper::{
    is_valid_cluster, parse_cluster_url, qualified_object_name, workspace_label_selector,
};
pub use logicalcluster::Name;
