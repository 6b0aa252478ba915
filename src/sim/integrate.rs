//! Fixed-step ball integration

use super::state::Ball;

/// Advance the ball by one step: `pos += vel * dt`
///
/// `dt` is a per-frame constant chosen by the caller, not elapsed wall-clock
/// time, so identical inputs always produce identical trajectories.
#[inline]
pub fn advance(ball: Ball, dt: f32) -> Ball {
    Ball {
        pos: ball.pos + ball.vel * dt,
        ..ball
    }
}
