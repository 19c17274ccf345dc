//! # Ghostfix Shared
//! Common vocabulary shared between the ghost block fixer crates: actor
//! identifiers, block and world positions, block state, configuration and
//! the millisecond clock used for cooldowns.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

mod config;
mod error;
mod timestamp;
mod types;

pub use config::{ConfigFile, ResyncConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, SendError};
pub use timestamp::{Clock, SystemClock, TimeError, Timestamp};
pub use types::{ActorId, BlockKind, BlockPosition, BlockState, Location, TickDelay};
