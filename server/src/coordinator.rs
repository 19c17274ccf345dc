use std::sync::Arc;

use log::info;

use ghostfix_shared::{BlockPosition, ResyncConfig};

use crate::{
    anchor::TerrainAnchorMonitor,
    cooldown::CooldownGate,
    emitter::CorrectionEmitter,
    events::{BlockIntentEvent, DisconnectEvent, MoveEvent},
    host::HostHandles,
    live_config::LiveConfig,
    resync::{DeferredResync, TargetResync},
};

/// Stale cooldown entries are swept once they are this many cooldown windows old
pub const COOLDOWN_SWEEP_MULTIPLIER: u64 = 8;
/// Lower bound on the sweep age, so a tiny cooldown does not cause churn
pub const MIN_COOLDOWN_SWEEP_AGE_MS: u64 = 1_000;

/// Receives both trigger sources and routes them to the shared correction
/// primitive: packet intents go through the cooldown and the delayed resync,
/// movement goes straight to the ghost anchor check.
pub struct ResyncCoordinator {
    config: Arc<LiveConfig>,
    resync: DeferredResync,
    anchor: TerrainAnchorMonitor,
}

impl ResyncCoordinator {
    pub fn new(host: &HostHandles, config: ResyncConfig) -> Self {
        let config = Arc::new(LiveConfig::new(config));
        let emitter = CorrectionEmitter::new(host.world.clone(), host.sender.clone());

        let target = TargetResync::new(host.world.clone(), emitter.clone(), config.clone());
        let resync = DeferredResync::new(
            config.clone(),
            CooldownGate::new(host.clock.clone()),
            host.scheduler.clone(),
            target,
        );
        let anchor = TerrainAnchorMonitor::new(host.world.clone(), emitter, config.clone());

        Self {
            config,
            resync,
            anchor,
        }
    }

    pub fn config(&self) -> ResyncConfig {
        self.config.snapshot()
    }

    /// Replaces the configuration. Resyncs that are already scheduled keep
    /// the delay they were scheduled with.
    pub fn reload(&self, config: ResyncConfig) {
        info!(
            "configuration reloaded: sync-delay-ticks={}, cooldown-ms={}, ghost-anchor-fix={}, debug={}",
            config.sync_delay_ticks,
            config.cooldown_ms,
            config.enable_ghost_anchor_fix,
            config.debug_messages
        );
        self.config.replace(config);
    }

    /// Returns true if a delayed resync was scheduled
    pub fn on_block_intent(&self, event: &BlockIntentEvent) -> bool {
        self.resync.on_block_intent(event)
    }

    /// Returns the corrected position if a ghost anchor was found
    pub fn on_move(&self, event: &MoveEvent) -> Option<BlockPosition> {
        self.anchor.on_move(event)
    }

    pub fn on_disconnect(&self, event: &DisconnectEvent) {
        self.resync.gate().forget(&event.actor);
    }

    /// For hosts without a disconnect hook: evicts cooldown entries that are
    /// several windows old. Returns how many were removed.
    pub fn sweep_cooldowns(&self) -> usize {
        let cooldown_ms = self.config.snapshot().cooldown_ms;
        let max_age = cooldown_ms
            .saturating_mul(COOLDOWN_SWEEP_MULTIPLIER)
            .max(MIN_COOLDOWN_SWEEP_AGE_MS);
        self.resync.gate().sweep(max_age)
    }

    /// Number of actors currently tracked by the cooldown gate
    pub fn tracked_actors(&self) -> usize {
        self.resync.gate().len()
    }
}
