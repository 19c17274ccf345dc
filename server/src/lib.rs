//! # Ghostfix Server
//! Detects and repairs client/server block desynchronization ("ghost
//! blocks"). Block place/dig intents intercepted from the network schedule a
//! rate-limited, delayed resync of the targeted block and its neighbors;
//! movement onto a block the server considers air triggers an immediate
//! correction. Corrections only override what one client renders and never
//! touch the authoritative world.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use ghostfix_shared::{
        ActorId, BlockKind, BlockPosition, BlockState, Clock, ConfigError, ConfigFile,
        Location, ResyncConfig, SendError, SystemClock, TickDelay, CONFIG_FILE_NAME,
    };
}

mod anchor;
mod command;
mod coordinator;
mod cooldown;
mod emitter;
mod error;
mod events;
mod host;
mod live_config;
mod resync;
mod server;

pub use anchor::TerrainAnchorMonitor;
pub use command::{
    AdminCommand, CommandOutcome, ADMIN_PERMISSION, COMMAND_NAME, NO_PERMISSION_MESSAGE,
    RELOADED_MESSAGE,
};
pub use coordinator::{ResyncCoordinator, COOLDOWN_SWEEP_MULTIPLIER, MIN_COOLDOWN_SWEEP_AGE_MS};
pub use cooldown::CooldownGate;
pub use emitter::CorrectionEmitter;
pub use error::GhostFixError;
pub use events::{BlockIntentEvent, BlockIntentKind, DisconnectEvent, MoveEvent};
pub use host::{
    BlockIntentListener, ClientBlockSender, CommandSender, HostHandles, HostWorld,
    ListenerPriority, PacketInterceptor, ScheduledTask, TickScheduler,
};
pub use live_config::LiveConfig;
pub use resync::{DeferredResync, TargetResync, MAX_REACH_DISTANCE};
pub use server::GhostFixer;
