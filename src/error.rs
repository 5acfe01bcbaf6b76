use thiserror::Error;

use crate::domain::item::Partition;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One of the two concurrent partition calls failed. The whole
    /// fetch+merge cycle is discarded.
    #[error("failed to fetch {partition} items: {source}")]
    PartitionFetch {
        partition: Partition,
        #[source]
        source: Box<Error>,
    },

    /// Stored catalog payload could not be deserialized. Recovered as a
    /// cache miss and never returned to callers of the items service.
    #[error("cached items payload is corrupt: {0}")]
    CacheDecode(#[source] serde_json::Error),

    /// Foreground fetch failed and no cached catalog was available.
    #[error("items are unavailable: {0}")]
    ServiceUnavailable(#[source] Box<Error>),

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Wrap an error from a single partition call.
    pub fn partition(partition: Partition, source: Error) -> Self {
        Self::PartitionFetch {
            partition,
            source: Box::new(source),
        }
    }

    /// The partition that failed, if this error came from a partition call.
    #[must_use]
    pub fn failed_partition(&self) -> Option<Partition> {
        match self {
            Self::PartitionFetch { partition, .. } => Some(*partition),
            Self::ServiceUnavailable(source) => source.failed_partition(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
