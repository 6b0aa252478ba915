//! Game state and core simulation types
//!
//! `GameSession` owns every mutable entity of a game. It is created by the
//! host and passed by `&mut` into [`tick`](super::tick::tick).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Boundary, Contact, Rect};
use super::grid::build_block_grid;
use crate::render::Color;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal
    NotStarted,
    /// Active gameplay
    Running,
    /// Every block broken
    Won,
    /// Ball fell past the paddle
    Lost,
}

/// Something that happened during a tick, for hosts (sound, HUD) and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted,
    WallBounce(Boundary),
    PaddleHit(Contact),
    BlockBroken { index: usize, contact: Contact },
    Won,
    Lost,
}

/// The ball: a circle at `pos` (its center)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Bounding box used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius))
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Cosmetic only; collisions use the full rectangle
    pub corner_radius: f32,
    /// Keyboard movement per frame
    pub speed: f32,
}

/// A breakable block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub broken: bool,
    pub color: Color,
    pub row: u32,
    pub column: u32,
}

/// The playable region, from (0, 0) to (width, height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RNG state wrapper for serialization
///
/// Every reset draws from a fresh stream of the session seed, so a session
/// replays identically from the same seed and inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// RNG for the next reset
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub settings: Settings,
    pub board: Board,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Blocks in grid order; only `break_block` may break one
    blocks: Vec<Block>,
    /// Unbroken block count, kept in step with `blocks`
    remaining: usize,
    phase: GamePhase,
    pub rng_state: RngState,
    /// Frames simulated while running
    pub frame: u64,
}

impl GameSession {
    /// Create a session waiting for the start signal
    pub fn new(settings: Settings, seed: u64) -> Self {
        let board = Board::new(settings.board.width, settings.board.height);
        let mut session = Self {
            paddle: build_paddle(&settings, &board),
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO, settings.ball.radius),
            blocks: Vec::new(),
            remaining: 0,
            phase: GamePhase::NotStarted,
            rng_state: RngState::new(seed),
            frame: 0,
            board,
            settings,
        };
        session.reset_entities();

        log::info!(
            "New session: board {}x{}, {} blocks, seed {}",
            session.board.width,
            session.board.height,
            session.remaining,
            seed
        );
        session
    }

    /// Seed from the process RNG
    pub fn with_random_seed(settings: Settings) -> Self {
        Self::new(settings, rand::random())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Blocks in grid order, broken ones included
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn remaining_blocks(&self) -> usize {
        self.remaining
    }

    pub fn broken_blocks(&self) -> usize {
        self.blocks.len() - self.remaining
    }

    /// Start signal: only leaves `NotStarted`
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.set_phase(GamePhase::Running);
        true
    }

    /// Restart signal: only leaves `Won` or `Lost`, with fresh entities
    pub fn restart(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Won | GamePhase::Lost) {
            return false;
        }
        self.reset_entities();
        self.frame = 0;
        self.set_phase(GamePhase::Running);
        true
    }

    /// Move the paddle's left edge to `x`, clamped to the board
    pub fn set_paddle_target(&mut self, x: f32) {
        if !x.is_finite() {
            return;
        }
        let max_x = (self.board.width - self.paddle.rect.size.x).max(0.0);
        self.paddle.rect.pos.x = x.clamp(0.0, max_x);
    }

    /// Keyboard movement: `direction` is -1 (left), 0 or 1 (right)
    pub fn nudge_paddle(&mut self, direction: i8) {
        let x = self.paddle.rect.pos.x + f32::from(direction.signum()) * self.paddle.speed;
        self.set_paddle_target(x);
    }

    /// Break the block at `index`; no-op if it is already broken
    pub fn break_block(&mut self, index: usize) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) if !block.broken => {
                block.broken = true;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Rebuild paddle, ball and grid from the settings
    fn reset_entities(&mut self) {
        let mut rng = self.rng_state.next_rng();

        self.paddle = build_paddle(&self.settings, &self.board);
        self.ball = spawn_ball(&self.settings, &self.board, &mut rng);
        self.blocks = build_block_grid(&self.settings.grid);
        self.remaining = self.blocks.len();
    }
}

fn build_paddle(settings: &Settings, board: &Board) -> Paddle {
    let width = settings.paddle.width.min(board.width);
    let height = settings.paddle.height;
    Paddle {
        rect: Rect::new(
            board.width / 2.0 - width / 2.0,
            board.height - height - settings.paddle.bottom_margin,
            width,
            height,
        ),
        corner_radius: settings.paddle.corner_radius,
        speed: settings.paddle.speed,
    }
}

/// Ball at mid-height, x somewhere in the middle half, random horizontal direction
fn spawn_ball(settings: &Settings, board: &Board, rng: &mut impl Rng) -> Ball {
    let x = board.width / 4.0 + rng.random::<f32>() * board.width / 2.0;
    let mut vel = settings.ball.velocity;
    if rng.random_bool(0.5) {
        vel.x = -vel.x;
    }
    Ball::new(Vec2::new(x, board.height / 2.0), vel, settings.ball.radius)
}
