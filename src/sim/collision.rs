//! Collision detection for the ball against axis-aligned boxes
//!
//! The ball is treated as its bounding box (center ± radius). Contacts against
//! a box are resolved to exactly one face, top and bottom first, so callers
//! never have to sequence several overlapping directional checks themselves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Board};
use super::vector::{NORMAL_HORIZONTAL, NORMAL_VERTICAL};

/// An axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Box centered on `center` extending `half_extents` each way
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos: center - half_extents,
            size: half_extents * 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Inclusive AABB test: shared edges count as touching
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

/// Which face of a box the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    None,
    /// Ball came down onto the top face
    Top,
    /// Ball came up into the bottom face
    Bottom,
    /// Ball came from the left into the left face
    Left,
    /// Ball came from the right into the right face
    Right,
}

impl Contact {
    pub fn is_hit(self) -> bool {
        self != Contact::None
    }

    /// Reflection normal for this face
    pub fn normal(self) -> Option<Vec2> {
        match self {
            Contact::None => None,
            Contact::Top | Contact::Bottom => Some(NORMAL_VERTICAL),
            Contact::Left | Contact::Right => Some(NORMAL_HORIZONTAL),
        }
    }

    /// Whether `vel` carries the ball into the struck face
    pub fn is_approaching(self, vel: Vec2) -> bool {
        match self {
            Contact::None => false,
            Contact::Top => vel.y > 0.0,
            Contact::Bottom => vel.y < 0.0,
            Contact::Left => vel.x > 0.0,
            Contact::Right => vel.x < 0.0,
        }
    }
}

/// Board edge touched by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    None,
    Ceiling,
    LeftWall,
    RightWall,
    /// Ball fell past the bottom edge
    Floor,
}

impl Boundary {
    /// Reflection normal, `None` for the floor (it is not reflective)
    pub fn normal(self) -> Option<Vec2> {
        match self {
            Boundary::Ceiling => Some(NORMAL_VERTICAL),
            Boundary::LeftWall | Boundary::RightWall => Some(NORMAL_HORIZONTAL),
            Boundary::None | Boundary::Floor => None,
        }
    }
}

/// AABB overlap between the ball's bounding box and `rect`
#[inline]
pub fn overlaps(ball: &Ball, rect: &Rect) -> bool {
    ball.bounds().intersects(rect)
}

/// Resolve which face of `rect` the ball hit
///
/// A ball whose center lies within the box's horizontal span hit the top or
/// bottom. Otherwise penetration depth decides: the shallower of top/bottom
/// and the shallower of left/right are the candidates, and the vertical one
/// wins unless the horizontal one is strictly shallower.
pub fn resolve(ball: &Ball, rect: &Rect) -> Contact {
    if !overlaps(ball, rect) {
        return Contact::None;
    }

    let bounds = ball.bounds();
    let through_top = bounds.bottom() - rect.top();
    let through_bottom = rect.bottom() - bounds.top();
    let through_left = bounds.right() - rect.left();
    let through_right = rect.right() - bounds.left();

    let (vertical, vertical_depth) = if through_top <= through_bottom {
        (Contact::Top, through_top)
    } else {
        (Contact::Bottom, through_bottom)
    };
    let (horizontal, horizontal_depth) = if through_left <= through_right {
        (Contact::Left, through_left)
    } else {
        (Contact::Right, through_right)
    };

    let over_span = (rect.left()..=rect.right()).contains(&ball.pos.x);
    if !over_span && horizontal_depth < vertical_depth {
        horizontal
    } else {
        vertical
    }
}

/// Classify the ball against the board edges
///
/// Floor wins over everything. Reflective edges only report while the ball
/// is still moving outward, so a ball already turned around is left alone.
pub fn board_contact(ball: &Ball, board: &Board) -> Boundary {
    let bounds = ball.bounds();

    if bounds.bottom() >= board.height {
        Boundary::Floor
    } else if bounds.top() <= 0.0 && ball.vel.y < 0.0 {
        Boundary::Ceiling
    } else if bounds.left() <= 0.0 && ball.vel.x < 0.0 {
        Boundary::LeftWall
    } else if bounds.right() >= board.width && ball.vel.x > 0.0 {
        Boundary::RightWall
    } else {
        Boundary::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 5.0)
    }

    #[test]
    fn test_overlap_and_miss() {
        let block = Rect::new(100.0, 100.0, 50.0, 10.0);
        assert!(overlaps(&ball_at(120.0, 104.0, 0.0, 1.0), &block));
        assert!(!overlaps(&ball_at(120.0, 80.0, 0.0, 1.0), &block));
        assert!(!overlaps(&ball_at(200.0, 104.0, 0.0, 1.0), &block));
        assert_eq!(resolve(&ball_at(120.0, 80.0, 0.0, 1.0), &block), Contact::None);
    }

    #[test]
    fn test_touching_edge_counts() {
        let block = Rect::new(100.0, 100.0, 50.0, 10.0);
        // Ball bottom edge exactly on the block top
        assert!(overlaps(&ball_at(120.0, 95.0, 0.0, 1.0), &block));
    }

    #[test]
    fn test_paddle_top_contact() {
        let paddle = Rect::new(210.0, 485.0, 80.0, 10.0);
        let ball = ball_at(250.0, 480.0, 2.0, 3.0);
        let contact = resolve(&ball, &paddle);
        assert_eq!(contact, Contact::Top);
        assert!(contact.is_approaching(ball.vel));
        assert_eq!(contact.normal(), Some(NORMAL_VERTICAL));
    }

    #[test]
    fn test_bottom_contact() {
        let block = Rect::new(100.0, 100.0, 50.0, 10.0);
        let ball = ball_at(125.0, 113.0, 1.0, -2.0);
        assert_eq!(resolve(&ball, &block), Contact::Bottom);
    }

    #[test]
    fn test_side_contacts() {
        let block = Rect::new(100.0, 100.0, 50.0, 10.0);
        // Entering the left face, vertically centered
        let from_left = ball_at(97.0, 105.0, 2.0, 0.5);
        assert_eq!(resolve(&from_left, &block), Contact::Left);
        assert!(Contact::Left.is_approaching(from_left.vel));

        let from_right = ball_at(153.0, 105.0, -2.0, 0.5);
        assert_eq!(resolve(&from_right, &block), Contact::Right);
        assert_eq!(Contact::Right.normal(), Some(NORMAL_HORIZONTAL));
    }

    #[test]
    fn test_equal_corner_penetration_prefers_vertical() {
        let block = Rect::new(100.0, 100.0, 50.0, 10.0);
        // 2px into the top face and 2px into the left face
        let ball = ball_at(97.0, 97.0, 1.0, 1.0);
        assert_eq!(resolve(&ball, &block), Contact::Top);
    }

    #[test]
    fn test_center_over_box_is_vertical() {
        let paddle = Rect::new(210.0, 485.0, 80.0, 10.0);
        // 8px into the top face, only 6px into the left face
        let ball = ball_at(211.0, 488.0, 1.0, 3.0);
        assert_eq!(resolve(&ball, &paddle), Contact::Top);

        // Center just off the end: the shallower side face wins
        let ball = ball_at(209.0, 488.0, 1.0, 3.0);
        assert_eq!(resolve(&ball, &paddle), Contact::Left);
    }

    #[test]
    fn test_approach_direction() {
        assert!(!Contact::Top.is_approaching(Vec2::new(0.0, -1.0)));
        assert!(Contact::Bottom.is_approaching(Vec2::new(0.0, -1.0)));
        assert!(!Contact::Right.is_approaching(Vec2::new(1.0, 0.0)));
        assert!(!Contact::None.is_approaching(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_board_contact() {
        let board = Board::new(500.0, 500.0);
        assert_eq!(board_contact(&ball_at(250.0, 0.0, 2.0, -1.0), &board), Boundary::Ceiling);
        // Already moving away from the ceiling
        assert_eq!(board_contact(&ball_at(250.0, 0.0, 2.0, 1.0), &board), Boundary::None);
        assert_eq!(board_contact(&ball_at(3.0, 250.0, -2.0, 1.0), &board), Boundary::LeftWall);
        assert_eq!(board_contact(&ball_at(497.0, 250.0, 2.0, 1.0), &board), Boundary::RightWall);
        assert_eq!(board_contact(&ball_at(250.0, 496.0, 2.0, -1.0), &board), Boundary::Floor);
        assert_eq!(board_contact(&ball_at(250.0, 250.0, 2.0, 1.0), &board), Boundary::None);
        assert_eq!(Boundary::Floor.normal(), None);
    }
}
