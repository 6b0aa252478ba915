//! Session bootstrap settings
//!
//! Board, paddle, ball and block grid dimensions plus the fixed step. Every
//! field has a default matching the reference board, and `#[serde(default)]`
//! lets a settings file override only what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::Color;

/// Board dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

/// Paddle dimensions and keyboard speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Distance from the paddle's bottom edge to the floor
    pub bottom_margin: f32,
    /// Cosmetic only
    pub corner_radius: f32,
    /// Distance moved per frame while a direction key is held
    pub speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            bottom_margin: PADDLE_BOTTOM_MARGIN,
            corner_radius: PADDLE_CORNER_RADIUS,
            speed: PADDLE_SPEED,
        }
    }
}

/// Ball size and launch velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    /// Launch velocity; the horizontal sign is randomized on every reset
    pub velocity: Vec2,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            velocity: Vec2::new(BALL_VELOCITY_X, BALL_VELOCITY_Y),
        }
    }
}

/// Block grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub columns: u32,
    pub rows: u32,
    pub block_width: f32,
    pub block_height: f32,
    /// Spacing between neighbouring blocks on both axes
    pub gap: f32,
    /// Top-left corner of the first block
    pub origin: Vec2,
    /// Row colors, cycled when there are more rows than colors
    pub palette: Vec<Color>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: BLOCK_COLUMNS,
            rows: BLOCK_ROWS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            gap: BLOCK_GAP,
            origin: Vec2::new(BLOCK_ORIGIN_X, BLOCK_ORIGIN_Y),
            palette: vec![
                Color::LIGHT_GREEN,
                Color::GOLD,
                Color::CORAL,
                Color::ORCHID,
                Color::TURQUOISE,
            ],
        }
    }
}

impl GridSettings {
    /// Color for a given row
    pub fn row_color(&self, row: u32) -> Color {
        if self.palette.is_empty() {
            return Color::LIGHT_GREEN;
        }
        self.palette[row as usize % self.palette.len()]
    }

    pub fn block_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Complete session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub grid: GridSettings,
    /// Fixed simulation step per frame
    pub dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardSettings::default(),
            paddle: PaddleSettings::default(),
            ball: BallSettings::default(),
            grid: GridSettings::default(),
            dt: SIM_DT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation can't work with
    ///
    /// Non-positive or non-finite sizes fall back to their defaults and the
    /// paddle is narrowed to fit the board.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fix_positive(&mut self.board.width, defaults.board.width, "board.width");
        fix_positive(&mut self.board.height, defaults.board.height, "board.height");
        fix_positive(&mut self.paddle.width, defaults.paddle.width, "paddle.width");
        fix_positive(&mut self.paddle.height, defaults.paddle.height, "paddle.height");
        fix_positive(&mut self.ball.radius, defaults.ball.radius, "ball.radius");
        fix_positive(&mut self.grid.block_width, defaults.grid.block_width, "grid.block_width");
        fix_positive(&mut self.grid.block_height, defaults.grid.block_height, "grid.block_height");

        if self.paddle.width > self.board.width {
            log::warn!(
                "paddle.width {} wider than board, clamping to {}",
                self.paddle.width,
                self.board.width
            );
            self.paddle.width = self.board.width;
        }
        if !self.paddle.bottom_margin.is_finite() || self.paddle.bottom_margin < 0.0 {
            log::warn!("paddle.bottom_margin {} invalid, using 0", self.paddle.bottom_margin);
            self.paddle.bottom_margin = 0.0;
        }
        if !self.grid.gap.is_finite() || self.grid.gap < 0.0 {
            log::warn!("grid.gap {} invalid, using 0", self.grid.gap);
            self.grid.gap = 0.0;
        }
        if !self.ball.velocity.is_finite() {
            log::warn!("ball.velocity {} invalid, using default", self.ball.velocity);
            self.ball.velocity = defaults.ball.velocity;
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            log::warn!("dt {} invalid, using {}", self.dt, defaults.dt);
            self.dt = defaults.dt;
        }

        self
    }
}

fn fix_positive(value: &mut f32, default: f32, name: &str) {
    if !value.is_finite() || *value <= 0.0 {
        log::warn!("{} {} invalid, using {}", name, value, default);
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_board() {
        let settings = Settings::default();
        assert_eq!(settings.board.width, 500.0);
        assert_eq!(settings.board.height, 500.0);
        assert_eq!(settings.paddle.width, 80.0);
        assert_eq!(settings.paddle.height, 10.0);
        assert_eq!(settings.ball.radius, 5.0);
        assert_eq!(settings.grid.block_count(), 24);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "grid": { "columns": 10, "rows": 8 }, "dt": 1.0 }"#).unwrap();
        assert_eq!(settings.grid.columns, 10);
        assert_eq!(settings.grid.rows, 8);
        assert_eq!(settings.grid.block_width, BLOCK_WIDTH);
        assert_eq!(settings.dt, 1.0);
        assert_eq!(settings.board, BoardSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json_pretty().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ \"dt\": \"fast\" }").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/block-breaker/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_sanitized() {
        let mut settings = Settings::default();
        settings.board.width = -5.0;
        settings.paddle.width = 900.0;
        settings.ball.radius = f32::NAN;
        settings.grid.gap = -1.0;
        settings.dt = f32::INFINITY;

        let settings = settings.sanitized();
        assert_eq!(settings.board.width, BOARD_WIDTH);
        assert_eq!(settings.paddle.width, BOARD_WIDTH);
        assert_eq!(settings.ball.radius, BALL_RADIUS);
        assert_eq!(settings.grid.gap, 0.0);
        assert_eq!(settings.dt, SIM_DT);
    }

    #[test]
    fn test_row_color_cycles() {
        let grid = GridSettings {
            palette: vec![Color::GOLD, Color::CORAL],
            ..Default::default()
        };
        assert_eq!(grid.row_color(0), Color::GOLD);
        assert_eq!(grid.row_color(1), Color::CORAL);
        assert_eq!(grid.row_color(2), Color::GOLD);

        let empty = GridSettings {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(empty.row_color(3), Color::LIGHT_GREEN);
    }
}
