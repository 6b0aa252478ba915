//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (grid order for blocks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod integrate;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{Boundary, Contact, Rect, board_contact, overlaps, resolve};
pub use grid::build_block_grid;
pub use integrate::advance;
pub use state::{Ball, Block, Board, GameEvent, GamePhase, GameSession, Paddle};
pub use tick::{TickInput, tick};
pub use vector::{NORMAL_HORIZONTAL, NORMAL_VERTICAL, dot_product, projection, reflection};
