use std::sync::Arc;

use log::warn;

use ghostfix_shared::{ActorId, BlockPosition};

use crate::host::{ClientBlockSender, HostWorld};

/// Sends one actor the authoritative state of a block, overriding only what
/// that client renders.
///
/// Knows nothing about cooldowns or scheduling; both trigger paths feed it.
#[derive(Clone)]
pub struct CorrectionEmitter {
    world: Arc<dyn HostWorld>,
    sender: Arc<dyn ClientBlockSender>,
}

impl CorrectionEmitter {
    pub fn new(world: Arc<dyn HostWorld>, sender: Arc<dyn ClientBlockSender>) -> Self {
        Self { world, sender }
    }

    /// Returns true if the override was handed to the messaging layer.
    /// Failures are never propagated; they are logged only when `debug` is set.
    pub fn emit_correction(&self, actor: &ActorId, position: &BlockPosition, debug: bool) -> bool {
        let state = self.world.block_at(position);
        match self.sender.send_block_change(actor, position, &state) {
            Ok(()) => true,
            Err(error) => {
                if debug {
                    warn!("Failed to sync block at: {} ({})", position, error);
                }
                false
            }
        }
    }
}
