use macroquad::prelude::*;
use voxcraft_core::{BlockKind, BlockStore, PlayerState};

const EDGE_COLOR: Color = BLACK;
const HUD_COLOR: Color = WHITE;
const ERROR_COLOR: Color = RED;
const CROSSHAIR_HALF: f32 = 10.0;

pub fn block_color(kind: BlockKind) -> Color {
    match kind {
        BlockKind::Dirt => Color::new(0.5, 0.5, 0.1, 1.0),
        BlockKind::Stone => Color::new(0.7, 0.7, 0.7, 1.0),
        BlockKind::Wood => Color::new(0.6, 0.3, 0.0, 1.0),
        BlockKind::Leaves => Color::new(0.0, 0.6, 0.0, 1.0),
    }
}

pub fn block_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Dirt => "dirt",
        BlockKind::Stone => "stone",
        BlockKind::Wood => "wood",
        BlockKind::Leaves => "leaves",
    }
}

/// Draws one colored cube with wireframe edges per stored block. Assumes the
/// 3D camera is active.
pub fn draw_world(store: &BlockStore) {
    let size = vec3(1.0, 1.0, 1.0);
    for block in store.all() {
        let center = block.coord.center();
        let center = vec3(center.x, center.y, center.z);
        draw_cube(center, size, None, block_color(block.kind));
        draw_cube_wires(center, size, EDGE_COLOR);
    }
}

/// Crosshair and status lines. Assumes the default 2D camera is active.
pub fn draw_hud(player: &PlayerState, action_message: Option<&'static str>) {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;
    draw_line(
        center_x - CROSSHAIR_HALF,
        center_y,
        center_x + CROSSHAIR_HALF,
        center_y,
        2.0,
        HUD_COLOR,
    );
    draw_line(
        center_x,
        center_y - CROSSHAIR_HALF,
        center_x,
        center_y + CROSSHAIR_HALF,
        2.0,
        HUD_COLOR,
    );

    draw_text(
        &format!(
            "position: ({:.1}, {:.1}, {:.1})",
            player.position.x, player.position.y, player.position.z
        ),
        20.0,
        40.0,
        24.0,
        HUD_COLOR,
    );
    draw_text(
        &format!("selected: {}", block_label(player.selected)),
        20.0,
        64.0,
        24.0,
        HUD_COLOR,
    );
    draw_text(
        "wasd: move | mouse: look | left: mine | right: place | 1-4: block | space: jump | esc: quit",
        20.0,
        88.0,
        24.0,
        HUD_COLOR,
    );

    if let Some(message) = action_message {
        draw_text(message, 20.0, 112.0, 24.0, ERROR_COLOR);
    }
}
