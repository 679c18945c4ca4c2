//! Core types for the Kip simulation: rectangles, entities and move commands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Player/paddle side
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction pointing away from this side's paddle
    pub fn away_x(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Axis-aligned rectangle in whole pixels, anchored at its top-left corner.
///
/// Screen coordinates: x grows to the right, y grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Strict bounding-box overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// RGB color used by the render collaborator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Rectangle shared by every on-screen entity
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EntityState {
    pub rect: Rect,
}

impl EntityState {
    /// Build a rectangle centered on `(center_x, center_y)`.
    ///
    /// Half extents use truncating division, so odd sizes put the extra
    /// pixel on the right/bottom side.
    pub fn new(center_x: i32, center_y: i32, width: i32, height: i32) -> Self {
        let half_width = width / 2;
        let half_height = height / 2;
        EntityState {
            rect: Rect::new(center_x - half_width, center_y - half_height, width, height),
        }
    }
}

/// Paddle state: moves on the vertical axis only
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaddleState {
    pub entity: EntityState,
}

impl PaddleState {
    pub fn new(center_x: i32, center_y: i32, width: i32, height: i32) -> Self {
        PaddleState {
            entity: EntityState::new(center_x, center_y, width, height),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.entity.rect
    }

    pub fn update(&mut self, dy: i32) {
        self.entity.rect.y += dy;
    }
}

/// Ball state: moves on both axes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BallState {
    pub entity: EntityState,
}

impl BallState {
    pub fn new(center_x: i32, center_y: i32, width: i32, height: i32) -> Self {
        BallState {
            entity: EntityState::new(center_x, center_y, width, height),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.entity.rect
    }

    pub fn update(&mut self, dx: i32, dy: i32) {
        self.entity.rect.x += dx;
        self.entity.rect.y += dy;
    }
}

/// Net vertical velocity requested for one paddle.
///
/// Pressing a key adds its velocity, releasing it subtracts the same amount,
/// so opposite keys held together cancel out. No clamping is applied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PaddleMoveCommand {
    pub y: i32,
}

impl PaddleMoveCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change(&mut self, dy: i32) {
        self.y += dy;
    }
}
