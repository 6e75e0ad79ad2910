use glam::Vec3;

use crate::coordinates::BlockCoord;
use crate::player::PlayerState;
use crate::store::BlockStore;

/// Downward acceleration per tick while airborne.
pub const GRAVITY: f32 = 0.01;
/// Half-extent of the player box on x and z.
pub const PLAYER_HALF_WIDTH: f32 = 0.3;
/// Player box height, feet to head.
pub const PLAYER_HEIGHT: f32 = 1.8;
/// Thickness of the band in which a face contact snaps the player flush.
pub const CONTACT_BAND: f32 = 0.1;
/// Inward margin on the vertical span before side contacts count; a block
/// being stood on must not also push sideways.
pub const LATERAL_MARGIN: f32 = 0.1;
/// Per-tick horizontal velocity retention.
pub const DAMPING: f32 = 0.8;
/// Horizontal speed below which velocity snaps to zero.
pub const REST_THRESHOLD: f32 = 0.01;
/// Feet height below which the fall safety net fires.
pub const KILL_PLANE: f32 = -10.0;

/// Axis-aligned box in continuous space, derived from the player's feet
/// position on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The player's collision box anchored at the feet point.
    pub fn player(feet: Vec3) -> Self {
        Self {
            min: Vec3::new(
                feet.x - PLAYER_HALF_WIDTH,
                feet.y,
                feet.z - PLAYER_HALF_WIDTH,
            ),
            max: Vec3::new(
                feet.x + PLAYER_HALF_WIDTH,
                feet.y + PLAYER_HEIGHT,
                feet.z + PLAYER_HALF_WIDTH,
            ),
        }
    }

    /// Closed-interval overlap test against a grid cell's unit cube.
    pub fn intersects_cell(&self, cell: BlockCoord) -> bool {
        let c = cell.min_corner();
        c.x <= self.max.x
            && c.x + 1.0 >= self.min.x
            && c.y <= self.max.y
            && c.y + 1.0 >= self.min.y
            && c.z <= self.max.z
            && c.z + 1.0 >= self.min.z
    }
}

/// Corrects the player's position and velocity against every nearby block,
/// then applies the fall safety net and horizontal damping. Pure numeric
/// correction; never fails. Grounded state is recomputed from scratch each
/// pass, so stepping off an edge reads as airborne on the next tick.
///
/// Each overlapping block applies its ground, ceiling and lateral checks
/// independently and the corrections accumulate in iteration order; inside
/// corners can therefore resolve order-dependently, which is accepted for a
/// bounded single-layer world.
pub fn resolve(player: &mut PlayerState, store: &BlockStore) {
    player.grounded = false;

    for block in store.all() {
        let b = block.coord.min_corner();

        // Broad phase on the x/z footprint only.
        if b.x > player.position.x + PLAYER_HALF_WIDTH
            || b.x + 1.0 < player.position.x - PLAYER_HALF_WIDTH
            || b.z > player.position.z + PLAYER_HALF_WIDTH
            || b.z + 1.0 < player.position.z - PLAYER_HALF_WIDTH
        {
            continue;
        }

        // Ground contact: feet in the thin band above the top face.
        if player.position.y >= b.y + 1.0 && player.position.y <= b.y + 1.0 + CONTACT_BAND {
            player.position.y = b.y + 1.0;
            player.velocity.y = 0.0;
            player.grounded = true;
        }

        // Ceiling contact: head just below the bottom face.
        let head = player.position.y + PLAYER_HEIGHT;
        if head >= b.y && head <= b.y + CONTACT_BAND {
            player.position.y = b.y - PLAYER_HEIGHT;
            player.velocity.y = 0.0;
        }

        // Lateral contact only counts while vertically inside the block's
        // span, with the inward margin.
        if player.position.y + LATERAL_MARGIN < b.y + 1.0
            && player.position.y + PLAYER_HEIGHT - LATERAL_MARGIN > b.y
        {
            let east_side = player.position.x + PLAYER_HALF_WIDTH;
            if east_side >= b.x && east_side <= b.x + CONTACT_BAND {
                player.position.x = b.x - PLAYER_HALF_WIDTH;
                player.velocity.x = 0.0;
            }
            let west_side = player.position.x - PLAYER_HALF_WIDTH;
            if west_side <= b.x + 1.0 && west_side >= b.x + 1.0 - CONTACT_BAND {
                player.position.x = b.x + 1.0 + PLAYER_HALF_WIDTH;
                player.velocity.x = 0.0;
            }

            let south_side = player.position.z + PLAYER_HALF_WIDTH;
            if south_side >= b.z && south_side <= b.z + CONTACT_BAND {
                player.position.z = b.z - PLAYER_HALF_WIDTH;
                player.velocity.z = 0.0;
            }
            let north_side = player.position.z - PLAYER_HALF_WIDTH;
            if north_side <= b.z + 1.0 && north_side >= b.z + 1.0 - CONTACT_BAND {
                player.position.z = b.z + 1.0 + PLAYER_HALF_WIDTH;
                player.velocity.z = 0.0;
            }
        }
    }

    if player.position.y < KILL_PLANE {
        log::warn!(
            "player fell out of the world at {}; respawning",
            player.position
        );
        player.respawn();
    }

    player.velocity.x *= DAMPING;
    player.velocity.z *= DAMPING;
    if player.velocity.x.abs() < REST_THRESHOLD {
        player.velocity.x = 0.0;
    }
    if player.velocity.z.abs() < REST_THRESHOLD {
        player.velocity.z = 0.0;
    }
}
