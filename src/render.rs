//! Flat-shape rendering
//!
//! Draws the world relative to the camera scroll, plus the screen-fixed
//! HUD and the Start / GameOver screens. Entities are plain colored shapes;
//! the player swaps color with its pose in place of a sprite swap.

use macroquad::prelude::*;

use crate::game::constants::*;
use crate::game::{Pose, Score, World};

const TITLE_FONT: f32 = 48.0;
const HUD_FONT: f32 = 24.0;

/// Draw one frame of the running game.
pub fn draw_world(world: &World) {
    clear_background(SKYBLUE);

    let cam = &world.camera;

    for platform in &world.platforms {
        draw_rectangle(
            platform.x - PLATFORM_WIDTH * 0.5 - cam.scroll_x,
            platform.y - PLATFORM_HEIGHT * 0.5 - cam.scroll_y,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
            DARKGREEN,
        );
    }

    for (_, carrot) in world.carrots.iter_active() {
        draw_circle(
            carrot.x - cam.scroll_x,
            carrot.y - cam.scroll_y,
            CARROT_WIDTH * 0.5,
            ORANGE,
        );
    }

    let player_color = match world.player.pose {
        Pose::Standing => BEIGE,
        Pose::Airborne => PINK,
    };
    draw_rectangle(
        world.player.x - PLAYER_WIDTH * 0.5 - cam.scroll_x,
        world.player.y - PLAYER_HEIGHT * 0.5 - cam.scroll_y,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        player_color,
    );

    // Screen-fixed score readout
    draw_centered_text(world.score.label(), 34.0, HUD_FONT, BLACK);
}

/// Title screen.
pub fn draw_start_screen() {
    clear_background(SKYBLUE);
    draw_centered_text("BUNNY HOP", VIEW_HEIGHT * 0.4, TITLE_FONT, WHITE);
    draw_centered_text("press SPACE to play", VIEW_HEIGHT * 0.55, HUD_FONT, BLACK);
}

/// Terminal screen with the final score.
pub fn draw_game_over(score: &Score) {
    clear_background(SKYBLUE);
    draw_centered_text("GAME OVER", VIEW_HEIGHT * 0.4, TITLE_FONT, RED);
    draw_centered_text(score.label(), VIEW_HEIGHT * 0.5, HUD_FONT, BLACK);
    draw_centered_text("press SPACE to try again", VIEW_HEIGHT * 0.6, HUD_FONT, BLACK);
}

fn draw_centered_text(text: &str, y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (VIEW_WIDTH - size.width) * 0.5, y, font_size, color);
}
