//! BUNNY HOP: an endless vertical auto-jumper
//!
//! The player bounces automatically off a fixed pool of recycled platforms,
//! steering left/right and collecting carrots, until a fall below the
//! lowest platform ends the run. All the gameplay logic lives in `game`;
//! this file is the host glue: window, frame loop, scene switching,
//! drawing and sound.

mod audio;
mod game;
mod input;
mod render;
mod scene;

use macroquad::prelude::*;
// `::rand` names the extern crate; the macroquad prelude glob-exports its
// own `rand` shim under the same name.
use ::rand::thread_rng;

use game::constants::{VIEW_HEIGHT, VIEW_WIDTH};
use game::World;
use input::InputSnapshot;
use scene::Scene;

fn window_conf() -> Conf {
    Conf {
        window_title: "Bunny Hop".to_owned(),
        window_width: VIEW_WIDTH as i32,
        window_height: VIEW_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sounds = audio::Sounds::load().await;
    let mut rng = thread_rng();

    let mut scene = Scene::Start;
    let mut world = World::new(&mut rng);

    loop {
        let input = InputSnapshot::poll();

        match scene {
            Scene::Start => {
                render::draw_start_screen();
                if input.start {
                    world = World::new(&mut rng);
                    scene = scene.after_start_key();
                    println!("scene -> {}", scene.label());
                }
            }
            Scene::Game => {
                world.tick(&input, get_frame_time(), &mut rng);
                sounds.play_for(&world.events);
                render::draw_world(&world);
                world.events.clear_all();

                if world.is_game_over() {
                    scene = Scene::GameOver;
                    println!("scene -> {}", scene.label());
                }
            }
            Scene::GameOver => {
                render::draw_game_over(&world.score);
                if input.start {
                    world = World::new(&mut rng);
                    scene = scene.after_start_key();
                    println!("scene -> {}", scene.label());
                }
            }
        }

        next_frame().await;
    }
}
