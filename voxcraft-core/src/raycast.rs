use glam::Vec3;

use crate::coordinates::BlockCoord;
use crate::store::BlockStore;

/// Spacing between ray samples, in world units.
pub const RAY_STEP: f32 = 0.1;

/// Distance from a cube face within which a hit point counts as lying on it.
pub const FACE_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub coord: BlockCoord,
    pub distance: f32,
    pub point: Vec3,
}

/// Marches from `origin` along `direction` (assumed normalized) in fixed
/// steps, sampling from distance 0 up to but excluding `max_distance`, and
/// returns the first sample that falls inside a stored block's cube together
/// with that distance and the exact sample point. Features thinner than one
/// step can be stepped over; that trade is part of the contract.
pub fn cast(
    store: &BlockStore,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RayHit> {
    let mut step = 0;
    loop {
        let distance = step as f32 * RAY_STEP;
        if distance >= max_distance {
            return None;
        }
        let point = origin + direction * distance;
        if let Some(coord) = block_at_point(store, point) {
            return Some(RayHit {
                coord,
                distance,
                point,
            });
        }
        step += 1;
    }
}

/// The stored block whose closed cube contains `point`, if any. A sample
/// exactly on a cell boundary lies in the cubes of both neighbouring cells,
/// so on each such axis the lower cell is a candidate too.
fn block_at_point(store: &BlockStore, point: Vec3) -> Option<BlockCoord> {
    let base = BlockCoord::containing(point);
    let on_x_edge = point.x == point.x.floor();
    let on_y_edge = point.y == point.y.floor();
    let on_z_edge = point.z == point.z.floor();

    for dx in 0..=i32::from(on_x_edge) {
        for dy in 0..=i32::from(on_y_edge) {
            for dz in 0..=i32::from(on_z_edge) {
                let candidate = base.offset(-dx, -dy, -dz);
                if store.contains(candidate) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Names the cell one step outward from the face the ray hit. The hit
/// point's offset inside the cube is tested per axis in x, y, z order; the
/// first axis within `FACE_EPSILON` of the near face (step -1) or the far
/// face (step +1) wins. A point deeper than the epsilon on every axis
/// (grazing or degenerate ray) has no identifiable face and callers must
/// reject placement rather than guess.
pub fn adjacent_coord(hit: &RayHit) -> Option<BlockCoord> {
    let rel = hit.point - hit.coord.min_corner();
    if rel.x < FACE_EPSILON {
        Some(hit.coord.offset(-1, 0, 0))
    } else if rel.x > 1.0 - FACE_EPSILON {
        Some(hit.coord.offset(1, 0, 0))
    } else if rel.y < FACE_EPSILON {
        Some(hit.coord.offset(0, -1, 0))
    } else if rel.y > 1.0 - FACE_EPSILON {
        Some(hit.coord.offset(0, 1, 0))
    } else if rel.z < FACE_EPSILON {
        Some(hit.coord.offset(0, 0, -1))
    } else if rel.z > 1.0 - FACE_EPSILON {
        Some(hit.coord.offset(0, 0, 1))
    } else {
        None
    }
}
