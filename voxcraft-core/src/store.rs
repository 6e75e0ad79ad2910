use std::collections::HashMap;

use crate::block::{Block, BlockKind};
use crate::coordinates::BlockCoord;

/// Sparse world geometry: at most one block per grid cell. Inserting at an
/// occupied cell replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: HashMap<BlockCoord, BlockKind>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
        }
    }

    pub fn add(&mut self, coord: BlockCoord, kind: BlockKind) {
        self.blocks.insert(coord, kind);
    }

    /// Removes the block at `coord` if present; returns whether a removal
    /// occurred.
    pub fn remove(&mut self, coord: BlockCoord) -> bool {
        self.blocks.remove(&coord).is_some()
    }

    pub fn get(&self, coord: BlockCoord) -> Option<BlockKind> {
        self.blocks.get(&coord).copied()
    }

    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates every placed block, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = Block> + '_ {
        self.blocks
            .iter()
            .map(|(&coord, &kind)| Block { coord, kind })
    }
}
