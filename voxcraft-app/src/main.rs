use std::time::Instant;

use macroquad::prelude::*;
use voxcraft_core::{ActionButton, BlockKind, TickInput, World};

mod draw;

/// Degrees of view rotation per pixel of mouse travel.
const LOOK_SENSITIVITY: f32 = 0.1;

fn window_conf() -> Conf {
    Conf {
        window_title: "Voxcraft".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

struct GameState {
    world: World,
    last_mouse: Vec2,
    action_message: Option<&'static str>,
}

impl GameState {
    fn new() -> Self {
        Self {
            world: World::new(),
            last_mouse: mouse_position().into(),
            action_message: None,
        }
    }

    /// Translates this frame's device state into the core's tick vocabulary.
    fn collect_input(&mut self) -> TickInput {
        let mut input = TickInput::default();

        if is_key_down(KeyCode::W) {
            input.forward += 1.0;
        }
        if is_key_down(KeyCode::S) {
            input.forward -= 1.0;
        }
        if is_key_down(KeyCode::A) {
            input.strafe -= 1.0;
        }
        if is_key_down(KeyCode::D) {
            input.strafe += 1.0;
        }
        input.jump = is_key_down(KeyCode::Space);

        if is_key_pressed(KeyCode::Key1) {
            input.select = Some(BlockKind::Dirt);
        } else if is_key_pressed(KeyCode::Key2) {
            input.select = Some(BlockKind::Stone);
        } else if is_key_pressed(KeyCode::Key3) {
            input.select = Some(BlockKind::Wood);
        } else if is_key_pressed(KeyCode::Key4) {
            input.select = Some(BlockKind::Leaves);
        }

        let mouse: Vec2 = mouse_position().into();
        let delta = mouse - self.last_mouse;
        self.last_mouse = mouse;
        input.yaw_delta = delta.x * LOOK_SENSITIVITY;
        input.pitch_delta = -delta.y * LOOK_SENSITIVITY;

        if is_mouse_button_pressed(MouseButton::Left) {
            input.action = Some(ActionButton::Primary);
        } else if is_mouse_button_pressed(MouseButton::Right) {
            input.action = Some(ActionButton::Secondary);
        }

        input
    }

    fn update(&mut self) {
        let input = self.collect_input();
        if let Some(result) = self.world.step(&input, Instant::now()) {
            self.action_message = match result {
                Ok(_) => None,
                Err(err) => Some(err.message()),
            };
        }
    }

    fn render(&self) {
        clear_background(Color::new(0.5, 0.7, 1.0, 1.0));

        let player = self.world.player();
        let eye = player.eye_position();
        let dir = player.look_direction();
        set_camera(&Camera3D {
            position: vec3(eye.x, eye.y, eye.z),
            target: vec3(eye.x + dir.x, eye.y + dir.y, eye.z + dir.z),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        });
        draw::draw_world(self.world.store());

        set_default_camera();
        draw::draw_hud(player, self.action_message);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut game = GameState::new();
    set_cursor_grab(true);
    show_mouse(false);

    log::info!("world ready: {} blocks", game.world.store().len());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        game.update();
        game.render();
        next_frame().await;
    }
}
