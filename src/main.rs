use anyhow::{Context, Result};
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::arena::Arena;
use game::characters::TuningFile;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Duel...");

    // Tunables: optional RON file as the first argument
    let tuning = match std::env::args().nth(1) {
        Some(path) => TuningFile::load(&path)
            .with_context(|| format!("Failed to load tuning from {}", path))?,
        None => {
            info!("No tuning file given, using built-in presets");
            TuningFile::default()
        }
    };

    let seed: u64 = rand::random();
    let mut arena = Arena::new(&tuning, seed);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Duel")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_event(state, button);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never arrive
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.just_pressed(Action::Menu) {
                    info!("Menu requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }
                if input.just_pressed(Action::SwapCombatLayout) {
                    input.toggle_combat_layout();
                }

                let timing = game_loop.begin_frame();
                if !game_loop.is_paused() {
                    arena.frame(timing.delta, input.state());
                    for _ in 0..timing.fixed_steps {
                        arena.fixed_step();
                    }
                }
                input.update();

                if game_loop.frame_count() % 600 == 0 {
                    log::debug!(
                        "{} frames, {} steps, {:.1} fps",
                        game_loop.frame_count(),
                        game_loop.step_count(),
                        game_loop.fps()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
