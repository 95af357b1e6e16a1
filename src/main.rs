use std::ops::ControlFlow;
use std::path::PathBuf;

mod camera;
mod cell;
mod config;
mod difficulty;
mod game;
mod geometry;
mod grid;
mod gui;
mod input_system;
mod player;
mod render;
mod text;
mod timing;

use config::{GameConfig, candidate_paths};
use game::{GameContext, SCREEN_HEIGHT, SCREEN_WIDTH};
use input_system::{InputSystem, MovementInput};
use render::Surface;
use timing::FrameClock;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<(), String> {
    init_logging();

    // Config first: without title, lives and difficulties there is nothing to run
    let explicit_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, config_path) = GameConfig::load(&candidate_paths(explicit_path))?;
    log::info!("Loaded config from {}", config_path.display());
    log::info!(
        "Title: {:?}, lives: {}, difficulties: {:?}",
        config.title,
        config.initial_lives,
        config.difficulty_levels
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.title, SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size so game coordinates stay 800x500 whatever the window does
    canvas.set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT).map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let mut input_system = InputSystem::new();
    let mut game = GameContext::new(&config, rand::rng());
    let mut clock = FrameClock::default();
    let screen_center = Surface::center(&canvas);

    log::info!("Controls: LEFT/RIGHT pick difficulty, ENTER start, WASD/arrows or mouse move, ESC quit");

    'running: loop {
        clock.tick();

        // Handle events
        input_system.set_context(game.state.input_context());
        for action in input_system.poll_events(&mut event_pump) {
            if let ControlFlow::Break(()) = game.handle_action(action) {
                break 'running;
            }
        }

        // Update
        let movement = MovementInput::sample(&event_pump.keyboard_state(), &event_pump.mouse_state());
        game.update(&movement, screen_center);

        // Render
        game.render(&mut canvas)?;
        canvas.present();
    }

    log::info!("Shutting down");
    Ok(())
}
