//! Draw commands for an external renderer
//!
//! The simulation never draws. Each frame it describes the scene as a flat
//! list of commands that a host sink (canvas, terminal, GPU) replays.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameSession, Rect};

/// 0xRRGGBB color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const SKY_BLUE: Color = Color(0x87CEEB);
    pub const LIGHT_GREEN: Color = Color(0x90EE90);
    pub const GOLD: Color = Color(0xFFD700);
    pub const CORAL: Color = Color(0xFF7F50);
    pub const ORCHID: Color = Color(0xDA70D6);
    pub const TURQUOISE: Color = Color(0x40E0D0);

    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// `#rrggbb`, for canvas-style hosts
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0 & 0xFFFFFF)
    }
}

/// Colors of the fixed scene elements
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const PADDLE_COLOR: Color = Color::SKY_BLUE;
pub const BALL_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::WHITE;

/// Font size hint for overlay text
pub const OVERLAY_FONT_SIZE: f32 = 20.0;

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text centered on `pos`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Receives one frame of draw commands at a time
pub trait RenderSink {
    fn submit(&mut self, frame: &[DrawCommand]);
}

/// Overlay message for a phase, if any
pub fn phase_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::NotStarted => Some("Press space to start"),
        GamePhase::Running => None,
        GamePhase::Won => Some("You win! Press space to play again"),
        GamePhase::Lost => Some("Game over. Press space to restart"),
    }
}

/// Describe the current session as draw commands
///
/// Order: clear, paddle, unbroken blocks in grid order, ball, overlay text.
pub fn draw_frame(session: &GameSession) -> Vec<DrawCommand> {
    let mut frame = Vec::with_capacity(session.remaining_blocks() + 4);

    frame.push(DrawCommand::Clear {
        width: session.board.width,
        height: session.board.height,
        color: BACKGROUND_COLOR,
    });

    frame.push(DrawCommand::FillRoundedRect {
        rect: session.paddle.rect,
        radius: session.paddle.corner_radius,
        color: PADDLE_COLOR,
    });

    frame.extend(
        session
            .blocks()
            .iter()
            .filter(|block| !block.broken)
            .map(|block| DrawCommand::FillRect {
                rect: block.rect,
                color: block.color,
            }),
    );

    frame.push(DrawCommand::FillCircle {
        center: session.ball.pos,
        radius: session.ball.radius,
        color: BALL_COLOR,
    });

    if let Some(text) = phase_message(session.phase()) {
        frame.push(DrawCommand::Text {
            text: text.to_string(),
            pos: Vec2::new(session.board.width / 2.0, session.board.height / 2.0),
            size: OVERLAY_FONT_SIZE,
            color: TEXT_COLOR,
        });
    }

    frame
}
