pub(crate) mod block_intent;
pub(crate) mod movement;

pub use block_intent::*;
pub use movement::*;
