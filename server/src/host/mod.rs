//! Seams to the runtime the fixer is embedded in. The host game server, its
//! packet interception layer and its outbound messaging are all owned by the
//! embedding application; the fixer only calls into them through these
//! traits.

use std::sync::Arc;

use ghostfix_shared::{ActorId, BlockPosition, BlockState, Clock, SendError, TickDelay};

use crate::events::{BlockIntentEvent, BlockIntentKind};

/// Authoritative view of the world and its actors
pub trait HostWorld: Send + Sync {
    /// Returns true while the actor is connected
    fn is_online(&self, actor: &ActorId) -> bool;

    /// Authoritative state of the block at `position`
    fn block_at(&self, position: &BlockPosition) -> BlockState;

    /// Resolves the block the actor is currently looking at, no farther than
    /// `max_distance`. Every block kind is a valid target, liquids and
    /// transparent blocks included; the host must not apply a type filter.
    fn target_block(&self, actor: &ActorId, max_distance: u32) -> Option<BlockPosition>;
}

/// Work queued on the host's main thread
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Delayed-callback facility of the host server
pub trait TickScheduler: Send + Sync {
    /// Runs `task` on the host's scheduling thread once `delay` ticks have
    /// elapsed. There is no cancellation.
    fn run_later(&self, delay: TickDelay, task: ScheduledTask);
}

/// Outbound messaging used to override what one client renders
pub trait ClientBlockSender: Send + Sync {
    /// Tells `actor`'s client to render `state` at `position`. This never
    /// touches the authoritative world.
    fn send_block_change(
        &self,
        actor: &ActorId,
        position: &BlockPosition,
        state: &BlockState,
    ) -> Result<(), SendError>;
}

/// Order in which the packet layer invokes listeners for the same packet
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerPriority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    Monitor,
}

pub type BlockIntentListener = Box<dyn Fn(BlockIntentEvent) + Send + Sync>;

/// Packet interception layer sitting in front of the host server
pub trait PacketInterceptor: Send + Sync {
    /// Returns false if the layer is not installed in this host
    fn is_available(&self) -> bool;

    /// Registers `listener` for every packet of the given kinds, invoked
    /// before the host server handles the packet
    fn subscribe(
        &self,
        kinds: &[BlockIntentKind],
        priority: ListenerPriority,
        listener: BlockIntentListener,
    );
}

/// Whoever issued an administrative command
pub trait CommandSender {
    fn has_permission(&self, node: &str) -> bool;

    fn send_message(&self, message: &str);
}

/// Handles to every collaborator the fixer needs
#[derive(Clone)]
pub struct HostHandles {
    pub world: Arc<dyn HostWorld>,
    pub scheduler: Arc<dyn TickScheduler>,
    pub sender: Arc<dyn ClientBlockSender>,
    pub packets: Arc<dyn PacketInterceptor>,
    pub clock: Arc<dyn Clock>,
}
