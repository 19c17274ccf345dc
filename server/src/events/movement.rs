use ghostfix_shared::{ActorId, Location};

/// Position change reported by the host for one actor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    pub actor: ActorId,
    pub from: Location,
    pub to: Location,
    /// Support state as reported by the actor's client
    pub on_ground: bool,
}

impl MoveEvent {
    pub fn new(actor: ActorId, from: Location, to: Location, on_ground: bool) -> Self {
        Self {
            actor,
            from,
            to,
            on_ground,
        }
    }

    /// Returns true if the movement crossed into a different block
    pub fn changed_block(&self) -> bool {
        !self.from.same_block(&self.to)
    }
}

/// The host dropped the actor's connection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisconnectEvent {
    pub actor: ActorId,
}
