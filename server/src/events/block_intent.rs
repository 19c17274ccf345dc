use ghostfix_shared::ActorId;

/// Client packets that announce a block is about to be placed or removed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockIntentKind {
    /// Client is placing a block (or using an item against one)
    Place,
    /// Client started, aborted or finished digging a block
    Dig,
}

impl BlockIntentKind {
    pub const ALL: [BlockIntentKind; 2] = [BlockIntentKind::Place, BlockIntentKind::Dig];
}

/// Intercepted before the host server processes the packet, so any delay is
/// measured from the moment the client sent it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockIntentEvent {
    /// None when the packet arrived before the connection was bound to an actor
    pub actor: Option<ActorId>,
    pub kind: BlockIntentKind,
}

impl BlockIntentEvent {
    pub fn new(actor: ActorId, kind: BlockIntentKind) -> Self {
        Self {
            actor: Some(actor),
            kind,
        }
    }

    pub fn unbound(kind: BlockIntentKind) -> Self {
        Self { actor: None, kind }
    }
}
