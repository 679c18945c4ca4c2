use kip_core::game_loop::{self, FramePacer, InputSource, Renderer};
use kip_core::*;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;

struct Script {
    frames: VecDeque<Vec<InputEvent>>,
}

impl InputSource for Script {
    type Error = std::convert::Infallible;

    fn poll(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        Ok(self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

#[derive(Default)]
struct Recorder {
    views: Vec<View>,
}

impl Renderer for Recorder {
    type Error = std::convert::Infallible;

    fn render(&mut self, view: &View) -> Result<(), Self::Error> {
        self.views.push(*view);
        Ok(())
    }
}

struct NoWait;

impl FramePacer for NoWait {
    fn wait(&mut self) {}
}

#[test]
fn test_one_frame_end_to_end() {
    let config = Config::default();
    let mut game = Game::new(config);
    assert_eq!(game.state.left_paddle.rect().center_y(), 360);
    assert_eq!(game.state.right_paddle.rect().center_y(), 360);

    game.state.direction = Vec2::new(0.6, 0.3);
    let before = *game.state.ball.rect();

    let outcome = game.step();

    assert_eq!(outcome, StepOutcome::default());
    assert_eq!(game.state.ball.rect().x - before.x, 4);
    assert_eq!(game.state.ball.rect().y - before.y, 2);
}

#[test]
fn test_rally_stays_well_formed() {
    let config = Config::default();
    let mut game = Game::new(config);
    let mut wall_bounces = 0;
    let mut paddle_bounces = 0;

    for frame in 0..2000u32 {
        // Keep the left paddle roughly tracking the ball
        let ball_y = game.state.ball.rect().center_y();
        let paddle_y = game.state.left_paddle.rect().center_y();
        if frame % 2 == 0 {
            game.release_all();
            if ball_y < paddle_y - 10 {
                game.apply_event(InputEvent::KeyDown(Control::LeftUp));
            } else if ball_y > paddle_y + 10 {
                game.apply_event(InputEvent::KeyDown(Control::LeftDown));
            }
        }

        let outcome = game.step();
        wall_bounces += outcome.wall.is_some() as u32;
        paddle_bounces += outcome.paddle.is_some() as u32;

        assert!(game.state.direction.is_finite());
        assert!((game.state.direction.length() - 1.0).abs() < 1e-3);
        assert!(game.state.ball.rect().width > 0 && game.state.ball.rect().height > 0);
    }

    assert!(wall_bounces > 0);
    assert!(paddle_bounces > 0);
}

#[test]
fn test_left_paddle_bounce_depends_on_hit_position() {
    let config = Config::default();

    let mut directions = Vec::new();
    for offset in [-40, 0, 40] {
        let mut game = Game::new(config);
        let paddle = *game.state.left_paddle.rect();
        game.state.ball = BallState::new(
            paddle.right() + 15,
            paddle.center_y() + offset,
            config.ball_width,
            config.ball_width,
        );
        game.state.direction = Vec2::new(-1.0, 0.0);

        let outcome = game.step();
        assert_eq!(outcome.paddle, Some(Side::Left));
        directions.push(game.state.direction);
    }

    assert!(directions[0].y < 0.0);
    assert!(directions[1].y.abs() < 1e-6);
    assert!(directions[2].y > 0.0);
    assert!(directions.iter().all(|d| d.x > 0.0));
}

#[test]
fn test_game_loop_with_scripted_keys() {
    let config = Config::default();
    let mut game = Game::new(config);
    let start_left = game.state.left_paddle.rect().y;
    let start_right = game.state.right_paddle.rect().y;

    let mut frames = VecDeque::new();
    frames.push_back(vec![
        InputEvent::KeyDown(Control::LeftUp),
        InputEvent::KeyDown(Control::RightDown),
    ]);
    frames.push_back(vec![InputEvent::KeyDown(Control::LeftUp)]); // repeat, ignored
    frames.push_back(vec![InputEvent::KeyUp(Control::LeftUp)]);
    frames.push_back(vec![]);

    let mut input = Script { frames };
    let mut renderer = Recorder::default();
    let shutdown = AtomicBool::new(false);

    let exit = game_loop::run(&mut game, &mut input, &mut renderer, &mut NoWait, &shutdown)
        .unwrap();

    assert_eq!(exit, LoopExit::Quit);
    assert_eq!(renderer.views.len(), 4);
    // Left: up for two frames; right: down for all four
    assert_eq!(game.state.left_paddle.rect().y, start_left - 16);
    assert_eq!(game.state.right_paddle.rect().y, start_right + 32);
    assert_eq!(renderer.views[3].right_paddle, *game.state.right_paddle.rect());
}
