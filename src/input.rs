//! Input source contract
//!
//! Hosts deliver pointer and key events whenever they arrive; `InputState`
//! keeps the latest of each (last writer wins) and hands one `TickInput` to
//! the simulation per frame.

use crate::sim::TickInput;

/// Anything that can produce the input for the next frame
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Accumulated host input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Latest pointer-derived paddle target, consumed by `poll`
    pointer_x: Option<f32>,
    left_held: bool,
    right_held: bool,
    /// Space edge seen since the last poll
    space_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved; `x` is the desired left edge of the paddle in board space
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    pub fn key_left(&mut self, pressed: bool) {
        self.left_held = pressed;
    }

    pub fn key_right(&mut self, pressed: bool) {
        self.right_held = pressed;
    }

    /// Space went down. Drives both start and restart; the session applies
    /// whichever is legal in its current phase.
    pub fn space_pressed(&mut self) {
        self.space_pending = true;
    }
}

impl InputSource for InputState {
    fn poll(&mut self) -> TickInput {
        let space = std::mem::take(&mut self.space_pending);
        TickInput {
            paddle_target_x: self.pointer_x.take(),
            paddle_direction: self.right_held as i8 - self.left_held as i8,
            start: space,
            restart: space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_consumes_one_shot_input() {
        let mut input = InputState::new();
        input.pointer_moved(100.0);
        input.pointer_moved(140.0);
        input.space_pressed();

        let first = input.poll();
        assert_eq!(first.paddle_target_x, Some(140.0));
        assert!(first.start && first.restart);

        let second = input.poll();
        assert_eq!(second, TickInput::default());
    }

    #[test]
    fn test_held_keys_persist() {
        let mut input = InputState::new();
        input.key_left(true);
        assert_eq!(input.poll().paddle_direction, -1);
        assert_eq!(input.poll().paddle_direction, -1);

        input.key_right(true);
        assert_eq!(input.poll().paddle_direction, 0);

        input.key_left(false);
        assert_eq!(input.poll().paddle_direction, 1);
    }
}
