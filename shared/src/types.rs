use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delay measured in host server ticks
pub type TickDelay = u64;

/// Stable identifier of a connected participant. The actor itself is owned
/// by the host server, this crate only ever refers to it by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(Uuid);

impl ActorId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ActorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// BlockPosition

/// Integer coordinates of a single block in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn relative(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// The block directly underneath this one
    pub fn below(&self) -> Self {
        self.relative(0, -1, 0)
    }

    /// This block followed by its six face-adjacent neighbors, in the order
    /// self, +X, -X, +Y, -Y, +Z, -Z.
    ///
    /// Changing one block can leave stale faces rendered on the blocks that
    /// touch it, so corrections are always issued for the whole set.
    pub fn neighborhood(&self) -> [BlockPosition; 7] {
        [
            *self,
            self.relative(1, 0, 0),
            self.relative(-1, 0, 0),
            self.relative(0, 1, 0),
            self.relative(0, -1, 0),
            self.relative(0, 0, 1),
            self.relative(0, 0, -1),
        ]
    }
}

impl fmt::Display for BlockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Location

/// Continuous world position of an actor
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The block containing this location. Each axis is floored, so
    /// `-0.5` lies in block `-1`.
    pub fn block_position(&self) -> BlockPosition {
        BlockPosition {
            x: floor_to_block(self.x),
            y: floor_to_block(self.y),
            z: floor_to_block(self.z),
        }
    }

    /// Returns true if both locations fall inside the same block
    pub fn same_block(&self, other: &Location) -> bool {
        self.block_position() == other.block_position()
    }
}

fn floor_to_block(value: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to 0
    value.floor() as i32
}

// BlockKind

/// Namespaced block type identifier as reported by the host, e.g. `stone`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockKind(String);

impl BlockKind {
    pub const AIR: &'static str = "air";
    const EMPTY_KINDS: [&'static str; 3] = [Self::AIR, "cave_air", "void_air"];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn air() -> Self {
        Self::new(Self::AIR)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// True for every kind the host uses to represent empty space
    pub fn is_air(&self) -> bool {
        Self::EMPTY_KINDS.contains(&self.0.as_str())
    }
}

impl From<&str> for BlockKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// BlockState

/// Authoritative state of one block: its kind plus the legacy data value for
/// protocols that still distinguish block sub-types by a numeric id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    pub kind: BlockKind,
    pub legacy_data: Option<u8>,
}

impl BlockState {
    pub fn new(kind: impl Into<BlockKind>) -> Self {
        Self {
            kind: kind.into(),
            legacy_data: None,
        }
    }

    pub fn with_legacy_data(kind: impl Into<BlockKind>, data: u8) -> Self {
        Self {
            kind: kind.into(),
            legacy_data: Some(data),
        }
    }

    pub fn air() -> Self {
        Self::new(BlockKind::air())
    }

    pub fn is_air(&self) -> bool {
        self.kind.is_air()
    }
}
