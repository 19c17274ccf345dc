use std::sync::Arc;

use log::debug;

use ghostfix_shared::BlockPosition;

use crate::{
    emitter::CorrectionEmitter, events::MoveEvent, host::HostWorld, live_config::LiveConfig,
};

/// Watches movement for the ghost anchor case: the client claims to stand on
/// a block that the server says is air. The mismatch is already observed, so
/// the correction is sent immediately.
pub struct TerrainAnchorMonitor {
    world: Arc<dyn HostWorld>,
    emitter: CorrectionEmitter,
    config: Arc<LiveConfig>,
}

impl TerrainAnchorMonitor {
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

    /// Returns the corrected position if a ghost anchor was found
    pub fn on_move(&self, event: &MoveEvent) -> Option<BlockPosition> {
        let config = self.config.snapshot();
        if !config.enable_ghost_anchor_fix {
            return None;
        }
        if !event.changed_block() {
            return None;
        }

        let under = event.to.block_position().below();
        if !event.on_ground || !self.world.block_at(&under).is_air() {
            return None;
        }

        if config.debug_messages {
            debug!("ghost anchor under {} at {}", event.actor, under);
        }
        self.emitter
            .emit_correction(&event.actor, &under, config.debug_messages);
        Some(under)
    }
}
