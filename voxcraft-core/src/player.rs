use glam::Vec3;

use crate::block::BlockKind;
use crate::physics::{self, Aabb};

/// Velocity gained per tick of held movement intent.
pub const MOVE_SPEED: f32 = 0.1;
/// Vertical velocity granted by a jump off the ground.
pub const JUMP_SPEED: f32 = 0.2;
/// Camera height above the feet.
pub const EYE_HEIGHT: f32 = 1.7;

pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Continuous player pose and per-tick motion state. `position` is the feet
/// point; the collision box and the eye are derived from it on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Horizontal view angle in degrees; 0 looks along +x.
    pub yaw: f32,
    /// Vertical view angle in degrees, clamped to [-90, 90].
    pub pitch: f32,
    pub grounded: bool,
    pub selected: BlockKind,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::at(SPAWN_POSITION)
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            grounded: false,
            selected: BlockKind::Dirt,
        }
    }

    /// Puts the player back at the spawn point with all motion cancelled.
    pub fn respawn(&mut self) {
        self.position = SPAWN_POSITION;
        self.velocity = Vec3::ZERO;
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }

    /// Unit view vector derived from yaw and pitch.
    pub fn look_direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
    }

    pub fn apply_look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-90.0, 90.0);
    }

    /// Accumulates movement intent into horizontal velocity. `forward` and
    /// `strafe` are signed unit contributions along the yaw-derived basis.
    pub fn apply_movement(&mut self, forward: f32, strafe: f32) {
        let yaw = self.yaw.to_radians();
        let ahead = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        let right = Vec3::new(-yaw.sin(), 0.0, yaw.cos());
        let push = (ahead * forward + right * strafe) * MOVE_SPEED;
        self.velocity.x += push.x;
        self.velocity.z += push.z;
    }

    /// Honored only while standing on something.
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity.y = JUMP_SPEED;
        }
    }

    /// Advances position by one tick of velocity, then lets gravity pull on
    /// the next tick while airborne.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        if !self.grounded {
            self.velocity.y -= physics::GRAVITY;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::player(self.position)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
