pub mod block;
pub mod coordinates;
pub mod interact;
pub mod physics;
pub mod player;
pub mod raycast;
pub mod store;
pub mod world;
pub mod worldgen;

pub use block::{Block, BlockKind};
pub use coordinates::BlockCoord;
pub use glam::Vec3;
pub use interact::{ActionButton, ActionError, ActionOutcome, ActionTimer};
pub use physics::Aabb;
pub use player::PlayerState;
pub use raycast::RayHit;
pub use store::BlockStore;
pub use world::{TickInput, World};
