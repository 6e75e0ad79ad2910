use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::block::BlockKind;
use crate::coordinates::BlockCoord;
use crate::player::PlayerState;
use crate::raycast::{self, adjacent_coord};
use crate::store::BlockStore;

/// Farthest block the player can act on, in world units.
pub const REACH_DISTANCE: f32 = 5.0;

/// Minimum delay between accepted action attempts.
pub const ACTION_COOLDOWN: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    /// Remove the block under the crosshair.
    Primary,
    /// Place the selected block against the hit face.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Removed { coord: BlockCoord, kind: BlockKind },
    Placed { coord: BlockCoord, kind: BlockKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    NoTarget,
    UndefinedFace,
    PlayerOverlap,
}

impl ActionError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoTarget => "no block within reach",
            Self::UndefinedFace => "cannot tell which face was hit",
            Self::PlayerOverlap => "target cell overlaps the player",
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ActionError {}

/// Debounce between block actions, compared against a caller-supplied
/// monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionTimer {
    last: Option<Instant>,
}

impl ActionTimer {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Whether the cooldown has elapsed since the last accepted attempt;
    /// records `now` when it has. An attempt consumes the cooldown even if
    /// the action itself is later rejected.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = self
            .last
            .map_or(true, |last| now.duration_since(last) >= ACTION_COOLDOWN);
        if ready {
            self.last = Some(now);
        }
        ready
    }
}

/// Casts from the player's eye along the view direction and applies the
/// requested action to the first block hit. Rejections leave the store
/// untouched.
pub fn apply_action(
    store: &mut BlockStore,
    player: &PlayerState,
    button: ActionButton,
) -> Result<ActionOutcome, ActionError> {
    let hit = raycast::cast(
        store,
        player.eye_position(),
        player.look_direction(),
        REACH_DISTANCE,
    )
    .ok_or(ActionError::NoTarget)?;

    match button {
        ActionButton::Primary => {
            let kind = store.get(hit.coord).ok_or(ActionError::NoTarget)?;
            store.remove(hit.coord);
            Ok(ActionOutcome::Removed {
                coord: hit.coord,
                kind,
            })
        }
        ActionButton::Secondary => {
            let target = adjacent_coord(&hit).ok_or(ActionError::UndefinedFace)?;
            if player.aabb().intersects_cell(target) {
                return Err(ActionError::PlayerOverlap);
            }
            store.add(target, player.selected);
            Ok(ActionOutcome::Placed {
                coord: target,
                kind: player.selected,
            })
        }
    }
}
