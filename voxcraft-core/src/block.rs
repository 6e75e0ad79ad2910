use serde::{Deserialize, Serialize};

use crate::coordinates::BlockCoord;

/// Material tag of a placed block; a rendering and selection hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Dirt,
    Stone,
    Wood,
    Leaves,
}

impl BlockKind {
    /// Every placeable kind, in selector order.
    pub const ALL: [Self; 4] = [Self::Dirt, Self::Stone, Self::Wood, Self::Leaves];
}

/// One placed block. Consumers only ever receive copies; the store owns the
/// authoritative set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub coord: BlockCoord,
    pub kind: BlockKind,
}
