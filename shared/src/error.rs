use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or creating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Failed to access configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but is not valid
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors reported by the outbound messaging layer when a client-only block
/// override could not be delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The actor is no longer reachable through the messaging layer
    #[error("Actor {actor} is not connected")]
    ActorUnavailable { actor: String },

    /// The override message could not be built for the target protocol
    #[error("Failed to serialize block override for {kind}: {reason}")]
    Serialization { kind: String, reason: String },

    /// The underlying channel refused the message
    #[error("Outbound channel closed")]
    ChannelClosed,
}
