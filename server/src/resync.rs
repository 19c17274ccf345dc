use std::sync::Arc;

use log::debug;

use ghostfix_shared::ActorId;

use crate::{
    cooldown::CooldownGate,
    emitter::CorrectionEmitter,
    events::BlockIntentEvent,
    host::{HostWorld, TickScheduler},
    live_config::LiveConfig,
};

/// How far away the looked-at block may be, in blocks
pub const MAX_REACH_DISTANCE: u32 = 6;

/// Resyncs the block an actor is looking at, plus its six face neighbors.
/// This is the body of the delayed callback.
#[derive(Clone)]
pub struct TargetResync {
    world: Arc<dyn HostWorld>,
    emitter: CorrectionEmitter,
    config: Arc<LiveConfig>,
}

impl TargetResync {
    pub fn new(
        world: Arc<dyn HostWorld>,
        emitter: CorrectionEmitter,
        config: Arc<LiveConfig>,
    ) -> Self {
        Self {
            world,
            emitter,
            config,
        }
    }

    /// Re-resolves the actor through the host and corrects the target block
    /// and its neighborhood. Returns the number of corrections delivered.
    pub fn run(&self, actor: &ActorId) -> usize {
        let debug = self.config.debug_messages();

        if !self.world.is_online(actor) {
            if debug {
                debug!("actor {} went offline before resync, skipping", actor);
            }
            return 0;
        }

        let Some(target) = self.world.target_block(actor, MAX_REACH_DISTANCE) else {
            return 0;
        };

        let mut delivered = 0;
        for position in target.neighborhood() {
            // each emission stands alone, a failure does not stop the rest
            if self.emitter.emit_correction(actor, &position, debug) {
                delivered += 1;
            }
        }
        delivered
    }
}

/// Turns block place/dig intents into delayed target resyncs, at most one
/// per actor per cooldown window.
pub struct DeferredResync {
    config: Arc<LiveConfig>,
    gate: CooldownGate,
    scheduler: Arc<dyn TickScheduler>,
    target: TargetResync,
}

impl DeferredResync {
    pub fn new(
        config: Arc<LiveConfig>,
        gate: CooldownGate,
        scheduler: Arc<dyn TickScheduler>,
        target: TargetResync,
    ) -> Self {
        Self {
            config,
            gate,
            scheduler,
            target,
        }
    }

    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Returns true if a resync was scheduled. Intents inside the cooldown
    /// window are dropped silently.
    pub fn on_block_intent(&self, event: &BlockIntentEvent) -> bool {
        let Some(actor) = event.actor else {
            return false;
        };
        let config = self.config.snapshot();

        if !self.gate.try_acquire(&actor, config.cooldown_ms) {
            return false;
        }

        if config.debug_messages {
            debug!(
                "{:?} intent from {}, resync in {} tick(s)",
                event.kind, actor, config.sync_delay_ticks
            );
        }

        // only the id crosses the delay; the actor is looked up again on wake
        let target = self.target.clone();
        self.scheduler.run_later(
            config.sync_delay_ticks,
            Box::new(move || {
                target.run(&actor);
            }),
        );
        true
    }
}
