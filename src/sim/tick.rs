//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by one frame deterministically.

use glam::Vec2;

use super::collision::{Boundary, board_contact, resolve};
use super::integrate::advance;
use super::state::{Ball, GameEvent, GamePhase, GameSession};
use super::vector::reflection;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Target x of the paddle's left edge (from pointer position)
    pub paddle_target_x: Option<f32>,
    /// Keyboard movement: -1 left, 0 none, 1 right
    pub paddle_direction: i8,
    /// Start signal (space)
    pub start: bool,
    /// Restart signal after a win or loss (space)
    pub restart: bool,
}

/// Advance the session by one fixed timestep
///
/// Paddle input applies in every phase; the ball only moves while running.
/// At most one block is broken per frame, the first one hit in grid order.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(x) = input.paddle_target_x {
        session.set_paddle_target(x);
    }
    if input.paddle_direction != 0 {
        session.nudge_paddle(input.paddle_direction);
    }

    if input.start && session.start() {
        events.push(GameEvent::Started);
    }
    if input.restart && session.restart() {
        events.push(GameEvent::Restarted);
    }

    if session.phase() != GamePhase::Running {
        return events;
    }

    // Nothing to break: an empty grid is won on the spot
    if session.remaining_blocks() == 0 {
        session.set_phase(GamePhase::Won);
        events.push(GameEvent::Won);
        return events;
    }

    session.frame += 1;
    session.ball = advance(session.ball, dt);

    // Board edges
    let boundary = board_contact(&session.ball, &session.board);
    if boundary == Boundary::Floor {
        log::info!(
            "Ball lost at frame {} with {} blocks left",
            session.frame,
            session.remaining_blocks()
        );
        session.set_phase(GamePhase::Lost);
        events.push(GameEvent::Lost);
        return events;
    }
    if let Some(normal) = boundary.normal() {
        bounce(&mut session.ball, normal);
        events.push(GameEvent::WallBounce(boundary));
    }
    keep_inside(&mut session.ball, session.board.width);

    // Paddle
    let contact = resolve(&session.ball, &session.paddle.rect);
    if contact.is_approaching(session.ball.vel) {
        if let Some(normal) = contact.normal() {
            bounce(&mut session.ball, normal);
        }
        log::debug!("Paddle hit {:?} at {}", contact, session.ball.pos);
        events.push(GameEvent::PaddleHit(contact));
    }

    // Blocks: first unbroken block touched in grid order
    let ball = session.ball;
    let hit = session
        .blocks()
        .iter()
        .enumerate()
        .filter(|(_, block)| !block.broken)
        .find_map(|(index, block)| {
            let contact = resolve(&ball, &block.rect);
            contact.is_hit().then_some((index, contact))
        });

    // A broken block is never tested again, so it always reflects
    if let Some((index, contact)) = hit {
        if let Some(normal) = contact.normal() {
            bounce(&mut session.ball, normal);
        }
        session.break_block(index);
        log::debug!(
            "Block {} broken ({:?}), {} remaining",
            index,
            contact,
            session.remaining_blocks()
        );
        events.push(GameEvent::BlockBroken { index, contact });
    }

    if session.remaining_blocks() == 0 {
        log::info!("All blocks broken in {} frames", session.frame);
        session.set_phase(GamePhase::Won);
        events.push(GameEvent::Won);
    }

    events
}

fn bounce(ball: &mut Ball, normal: Vec2) {
    ball.vel = reflection(ball.vel, normal);
}

/// Pull the ball's center back onto the board if a step overshot a wall
fn keep_inside(ball: &mut Ball, board_width: f32) {
    ball.pos.x = ball.pos.x.clamp(0.0, board_width);
    ball.pos.y = ball.pos.y.max(0.0);
}
