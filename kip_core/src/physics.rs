//! Ball and paddle physics: movement integration, wall reflection and the
//! rounded-edge paddle bounce.

use crate::config::Config;
use crate::types::*;
use glam::Vec2;

/// Screen edge the ball bounced off
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    /// Unit normal pointing back into the playfield
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Top => Vec2::new(0.0, 1.0),
            Wall::Bottom => Vec2::new(0.0, -1.0),
            Wall::Left => Vec2::new(1.0, 0.0),
            Wall::Right => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Reflect `v` about the unit normal `normal`: v - 2(v·n)n
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// Physics calculations for game simulation
pub struct Physics;

impl Physics {
    /// Apply the accumulated move command to the paddle
    pub fn update_paddle(paddle: &mut PaddleState, command: &PaddleMoveCommand) {
        paddle.update(command.y);
    }

    /// Whole-pixel displacement for one frame, truncated toward zero
    pub fn ball_displacement(direction: Vec2, speed: f32) -> (i32, i32) {
        let velocity = direction * speed;
        (velocity.x as i32, velocity.y as i32)
    }

    /// Move the ball one frame along its direction
    pub fn update_ball(ball: &mut BallState, direction: Vec2, config: &Config) {
        let (dx, dy) = Self::ball_displacement(direction, config.ball_speed);
        ball.update(dx, dy);
    }

    /// First screen edge the rectangle touches or crosses, checked top,
    /// bottom, left, right. Boundaries are inclusive.
    pub fn wall_hit(rect: &Rect, config: &Config) -> Option<Wall> {
        if rect.top() <= 0 {
            Some(Wall::Top)
        } else if rect.bottom() >= config.screen_height {
            Some(Wall::Bottom)
        } else if rect.left() <= 0 {
            Some(Wall::Left)
        } else if rect.right() >= config.screen_width {
            Some(Wall::Right)
        } else {
            None
        }
    }

    /// Reflect the direction off the first wall hit. The ball is not moved
    /// back inside the playfield.
    pub fn resolve_wall_collision(
        ball: &BallState,
        direction: &mut Vec2,
        config: &Config,
    ) -> Option<Wall> {
        let wall = Self::wall_hit(ball.rect(), config)?;
        *direction = reflect(*direction, wall.normal());
        Some(wall)
    }

    /// New ball direction after striking a paddle.
    ///
    /// The paddle face is treated as part of a circle of radius
    /// `paddle_circle_radius` whose center sits on the paddle's vertical
    /// center, so the rebound steepens the further the hit is from the middle.
    pub fn paddle_bounce_direction(
        ball: &Rect,
        paddle: &Rect,
        side: Side,
        config: &Config,
    ) -> Vec2 {
        let radius = config.paddle_circle_radius as f32;
        let ball_x = ball.center_x() as f32;
        let ball_y = ball.center_y() as f32;
        let paddle_y = paddle.center_y() as f32;

        let offset = match side {
            Side::Left => {
                let circle_x = paddle.right() as f32 - radius;
                Vec2::new(ball_x - circle_x, ball_y - paddle_y)
            }
            Side::Right => {
                let circle_x = paddle.left() as f32 - radius;
                Vec2::new(circle_x - ball_x, ball_y - paddle_y)
            }
        };

        match offset.try_normalize() {
            Some(direction) => direction,
            None => {
                log::warn!(
                    "ball center sits on the {:?} paddle circle center, bouncing straight",
                    side
                );
                Vec2::new(side.away_x(), 0.0)
            }
        }
    }

    /// Replace the ball direction if it overlaps a paddle. The left paddle
    /// is checked first; at most one paddle applies per frame.
    pub fn resolve_paddle_collision(
        ball: &BallState,
        left: &PaddleState,
        right: &PaddleState,
        direction: &mut Vec2,
        config: &Config,
    ) -> Option<Side> {
        let side = if ball.rect().intersects(left.rect()) {
            Side::Left
        } else if ball.rect().intersects(right.rect()) {
            Side::Right
        } else {
            return None;
        };

        let paddle = match side {
            Side::Left => left.rect(),
            Side::Right => right.rect(),
        };

        *direction = Self::paddle_bounce_direction(ball.rect(), paddle, side, config);
        Some(side)
    }
}
