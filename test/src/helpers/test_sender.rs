use std::{collections::HashSet, sync::Mutex};

use ghostfix_server::ClientBlockSender;
use ghostfix_shared::{ActorId, BlockPosition, BlockState, SendError};

/// One client-only override handed to the messaging layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentBlockChange {
    pub actor: ActorId,
    pub position: BlockPosition,
    pub state: BlockState,
}

/// Records every delivered override and can be told to fail for chosen
/// positions. Failed sends are counted but not recorded as delivered.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<SentBlockChange>>,
    failing: Mutex<HashSet<BlockPosition>>,
    attempts: Mutex<usize>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_at(&self, position: BlockPosition) {
        self.failing.lock().unwrap().insert(position);
    }

    pub fn sent(&self) -> Vec<SentBlockChange> {
        self.sent.lock().unwrap().clone()
    }

    pub fn positions(&self) -> Vec<BlockPosition> {
        self.sent().into_iter().map(|change| change.position).collect()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        *self.attempts.lock().unwrap() = 0;
    }
}

impl ClientBlockSender for RecordingSender {
    fn send_block_change(
        &self,
        actor: &ActorId,
        position: &BlockPosition,
        state: &BlockState,
    ) -> Result<(), SendError> {
        *self.attempts.lock().unwrap() += 1;
        if self.failing.lock().unwrap().contains(position) {
            return Err(SendError::Serialization {
                kind: state.kind.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.sent.lock().unwrap().push(SentBlockChange {
            actor: *actor,
            position: *position,
            state: state.clone(),
        });
        Ok(())
    }
}
