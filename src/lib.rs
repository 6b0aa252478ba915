//! Block Breaker - a breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, collisions, game state)
//! - `settings`: Session bootstrap configuration
//! - `input`: Input source contract and host-fed input state
//! - `render`: Draw command list handed to an external render sink

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::{InputSource, InputState};
pub use render::{DrawCommand, RenderSink, draw_frame};
pub use settings::Settings;

use sim::{GameEvent, GameSession, tick};

/// Game configuration constants (the reference board)
pub mod consts {
    /// Fixed simulation step per frame (frame-coupled, not wall-clock seconds)
    pub const SIM_DT: f32 = 1.2;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 500.0;
    pub const BOARD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's bottom edge and the board floor
    pub const PADDLE_BOTTOM_MARGIN: f32 = 5.0;
    pub const PADDLE_CORNER_RADIUS: f32 = 3.0;
    /// Keyboard nudge per frame
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_VELOCITY_X: f32 = 2.0;
    pub const BALL_VELOCITY_Y: f32 = 1.0;

    /// Block grid defaults
    pub const BLOCK_COLUMNS: u32 = 8;
    pub const BLOCK_ROWS: u32 = 3;
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 10.0;
    pub const BLOCK_GAP: f32 = 10.0;
    pub const BLOCK_ORIGIN_X: f32 = 15.0;
    pub const BLOCK_ORIGIN_Y: f32 = 45.0;
}

/// Run one host frame: pull input, advance the session, hand the frame to the sink.
///
/// Returns the gameplay events produced by this frame.
pub fn run_frame(
    session: &mut GameSession,
    input: &mut impl InputSource,
    sink: &mut impl RenderSink,
    dt: f32,
) -> Vec<GameEvent> {
    let tick_input = input.poll();
    let events = tick(session, &tick_input, dt);
    sink.submit(&draw_frame(session));
    events
}
