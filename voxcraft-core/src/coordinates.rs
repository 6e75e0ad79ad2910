use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Integer key of one grid cell. The cell spans the closed unit cube
/// `[x, x+1] x [y, y+1] x [z, z+1]` in continuous space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Cell containing a continuous point. A component exactly on a cell
    /// boundary lands in the higher cell.
    pub fn containing(point: Vec3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }

    pub fn min_corner(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn center(self) -> Vec3 {
        self.min_corner() + Vec3::splat(0.5)
    }

    /// Whether this cell's closed unit cube contains `point`.
    pub fn contains_point(self, point: Vec3) -> bool {
        let min = self.min_corner();
        point.x >= min.x
            && point.x <= min.x + 1.0
            && point.y >= min.y
            && point.y <= min.y + 1.0
            && point.z >= min.z
            && point.z <= min.z + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_negative_components() {
        let cell = BlockCoord::containing(Vec3::new(-0.5, 1.5, -2.0));
        assert_eq!(cell, BlockCoord::new(-1, 1, -2));
    }

    #[test]
    fn containing_puts_boundary_point_in_higher_cell() {
        let cell = BlockCoord::containing(Vec3::new(3.0, 0.5, 0.5));
        assert_eq!(cell.x, 3);
    }

    #[test]
    fn cube_is_closed_on_both_faces() {
        let cell = BlockCoord::new(0, 0, 0);
        assert!(cell.contains_point(Vec3::new(0.0, 0.5, 0.5)));
        assert!(cell.contains_point(Vec3::new(1.0, 0.5, 0.5)));
        assert!(!cell.contains_point(Vec3::new(1.01, 0.5, 0.5)));
    }

    #[test]
    fn center_is_half_a_unit_from_the_min_corner() {
        let cell = BlockCoord::new(-3, 2, 7);
        assert_eq!(cell.center(), Vec3::new(-2.5, 2.5, 7.5));
    }
}
