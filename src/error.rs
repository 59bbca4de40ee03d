//! Error type for cluster URL parsing and workspace navigation.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a URL at all.
    #[error("invalid URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// The URL parsed but does not carry a valid cluster. A missing marker
    /// and a rejected cluster name both end up here.
    #[error("current cluster URL {0} is not pointing to a cluster workspace")]
    InvalidClusterUrl(String),

    /// A navigation target is not a valid rooted cluster.
    #[error("{0} is not a valid workspace")]
    InvalidCluster(String),

    #[error("workspace {0} has no parent")]
    NoParent(String),

    #[error("no previous workspace")]
    NoPrevious,
}

impl Error {
    pub fn invalid_cluster_url(url: impl Into<String>) -> Self {
        Self::InvalidClusterUrl(url.into())
    }

    pub fn invalid_cluster(name: impl Into<String>) -> Self {
        Self::InvalidCluster(name.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cluster_url_names_the_input() {
        let err = Error::invalid_cluster_url("https://host/foo");
        assert_eq!(
            err.to_string(),
            "current cluster URL https://host/foo is not pointing to a cluster workspace"
        );
    }

    #[test]
    fn parse_errors_convert() {
        let parse_err = url::Url::parse("garbage").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::MalformedUrl(_)));
        assert!(err.to_string().starts_with("invalid URL: "));
    }
}
