use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use ghostfix_server::HostWorld;
use ghostfix_shared::{ActorId, BlockPosition, BlockState};

/// In-memory authoritative world. Unset blocks read as air.
#[derive(Default)]
pub struct TestWorld {
    state: Mutex<WorldState>,
}

#[derive(Default)]
struct WorldState {
    blocks: HashMap<BlockPosition, BlockState>,
    online: HashSet<ActorId>,
    targets: HashMap<ActorId, BlockPosition>,
    target_queries: Vec<(ActorId, u32)>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_block(&self, position: BlockPosition, state: BlockState) {
        self.state.lock().unwrap().blocks.insert(position, state);
    }

    pub fn connect(&self, actor: ActorId) {
        self.state.lock().unwrap().online.insert(actor);
    }

    pub fn disconnect(&self, actor: &ActorId) {
        self.state.lock().unwrap().online.remove(actor);
    }

    /// Sets what the actor is looking at; None means nothing within reach
    pub fn look_at(&self, actor: ActorId, target: Option<BlockPosition>) {
        let mut state = self.state.lock().unwrap();
        match target {
            Some(position) => {
                state.targets.insert(actor, position);
            }
            None => {
                state.targets.remove(&actor);
            }
        }
    }

    /// Every `(actor, max_distance)` passed to `target_block` so far
    pub fn target_queries(&self) -> Vec<(ActorId, u32)> {
        self.state.lock().unwrap().target_queries.clone()
    }
}

impl HostWorld for TestWorld {
    fn is_online(&self, actor: &ActorId) -> bool {
        self.state.lock().unwrap().online.contains(actor)
    }

    fn block_at(&self, position: &BlockPosition) -> BlockState {
        self.state
            .lock()
            .unwrap()
            .blocks
            .get(position)
            .cloned()
            .unwrap_or_else(BlockState::air)
    }

    fn target_block(&self, actor: &ActorId, max_distance: u32) -> Option<BlockPosition> {
        let mut state = self.state.lock().unwrap();
        state.target_queries.push((*actor, max_distance));
        state.targets.get(actor).copied()
    }
}
