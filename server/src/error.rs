use thiserror::Error;

use ghostfix_shared::ConfigError;

/// Errors that prevent the fixer from starting
#[derive(Debug, Error)]
pub enum GhostFixError {
    /// The packet interception layer is a hard prerequisite
    #[error("Packet interception layer not found, cannot listen for block place/dig packets")]
    MissingPacketLayer,

    /// The configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
