//! Pong
//!
//! Classic Pong built on the easyquad primitives. Left paddle is moved
//! with W/S, the right paddle tracks the ball. The ball reflects off the
//! top and bottom walls and speeds up a little on every paddle hit.
//! First to 5 points wins; R restarts after game over.

use easyquad::{Canvas, Character, Engine};
use macroquad::prelude::*;

const SCREEN: (f32, f32) = (800.0, 600.0);
const PADDLE_WIDTH: f32 = 15.0;
const PADDLE_HEIGHT: f32 = 80.0;
const PADDLE_SPEED: f32 = 6.0;
const BALL_SIZE: f32 = 15.0;
const SERVE_VELOCITY: Vec2 = Vec2::new(5.0, 3.0);
const MAX_BALL_SPEED: f32 = 8.0;
const PADDLE_SPEEDUP: f32 = 1.05;
const MAX_SCORE: u32 = 5;

/// Reflect off the top/bottom walls: returns the corrected y and vertical
/// velocity. The velocity flips exactly when y enters the wall band; y is
/// clamped back inside. No speed change on wall contact.
fn wall_reflect(y: f32, vy: f32, size: f32, height: f32) -> (f32, f32) {
    let max_y = height - size;
    if y <= 0.0 || y >= max_y {
        (y.clamp(0.0, max_y), -vy)
    } else {
        (y, vy)
    }
}

/// Velocity after a paddle hit: x reverses and grows by the speed-up factor
/// while below the cap; y is set from where the ball struck the paddle
/// (center hit goes straight, edge hits deflect).
fn paddle_bounce(
    vx: f32,
    ball_center_y: f32,
    paddle_center_y: f32,
    paddle_half_height: f32,
) -> Vec2 {
    let relative_intersect = (ball_center_y - paddle_center_y) / paddle_half_height;

    let mut new_vx = -vx;
    if new_vx.abs() < MAX_BALL_SPEED {
        new_vx *= PADDLE_SPEEDUP;
    }
    Vec2::new(new_vx, relative_intersect * 5.0)
}

/// Which side serves next; the serve goes toward the player last scored
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Serve {
    TowardPlayer,
    TowardAi,
}

impl Serve {
    fn velocity(self) -> Vec2 {
        match self {
            Serve::TowardPlayer => Vec2::new(-SERVE_VELOCITY.x, SERVE_VELOCITY.y),
            Serve::TowardAi => SERVE_VELOCITY,
        }
    }
}

struct Ball {
    body: Character,
    velocity: Vec2,
}

impl Ball {
    fn new() -> Self {
        let mut body = Character::new((0.0, 0.0), BALL_SIZE);
        body.color = WHITE;
        let mut ball = Self {
            body,
            velocity: Vec2::ZERO,
        };
        ball.reset(Serve::TowardAi);
        ball
    }

    fn update(&mut self, canvas: &Canvas) {
        self.body.position += self.velocity;
        let (y, vy) = wall_reflect(
            self.body.position.y,
            self.velocity.y,
            BALL_SIZE,
            canvas.height(),
        );
        self.body.position.y = y;
        self.velocity.y = vy;
    }

    fn bounce_off_paddle(&mut self, paddle: &Character) {
        let ball_center = self.body.position.y + BALL_SIZE / 2.0;
        let paddle_center = paddle.position.y + paddle.size.y / 2.0;
        self.velocity = paddle_bounce(
            self.velocity.x,
            ball_center,
            paddle_center,
            paddle.size.y / 2.0,
        );
    }

    fn reset(&mut self, serve: Serve) {
        self.body.position = Vec2::new(
            SCREEN.0 / 2.0 - BALL_SIZE / 2.0,
            SCREEN.1 / 2.0 - BALL_SIZE / 2.0,
        );
        self.velocity = serve.velocity();
    }
}

fn make_paddle(x: f32) -> Character {
    let mut paddle = Character::with_size((x, 250.0), PADDLE_WIDTH, PADDLE_HEIGHT);
    paddle.color = WHITE;
    paddle
}

/// Move a paddle one step toward a target y, clamped to the canvas.
fn track_toward(paddle: &mut Character, target_y: f32, speed: f32, canvas: &Canvas) {
    let center = paddle.position.y + paddle.size.y / 2.0;
    if (target_y - center).abs() > speed {
        paddle.position.y += speed * (target_y - center).signum();
    }
    paddle.position.y = paddle
        .position
        .y
        .clamp(0.0, canvas.height() - paddle.size.y);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Playing,
    GameOver,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "easyquad Pong".to_string(),
        window_width: SCREEN.0 as i32,
        window_height: SCREEN.1 as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("Pong: W/S to move, ESC to quit, first to {} wins", MAX_SCORE);

    let canvas = Canvas::new(SCREEN, BLACK).expect("valid screen size");
    let mut engine = Engine::new(60, canvas, "Pong").expect("valid fps");

    let mut player_paddle = make_paddle(50.0);
    let mut ai_paddle = make_paddle(735.0);
    let mut ball = Ball::new();

    // AI tracks the ball at a fraction of full paddle speed, and only
    // while the ball approaches, so it can be beaten.
    let ai_speed = PADDLE_SPEED * 0.8;

    let mut player_score = 0u32;
    let mut ai_score = 0u32;
    let mut state = GameState::Playing;

    engine
        .run(|canvas| {
            if state == GameState::Playing {
                // Player paddle: W/S only
                if is_key_down(KeyCode::W) {
                    player_paddle.position.y -= PADDLE_SPEED;
                }
                if is_key_down(KeyCode::S) {
                    player_paddle.position.y += PADDLE_SPEED;
                }
                player_paddle.position.y = player_paddle
                    .position
                    .y
                    .clamp(0.0, canvas.height() - PADDLE_HEIGHT);

                // AI paddle
                if ball.velocity.x > 0.0 {
                    let ball_center = ball.body.position.y + BALL_SIZE / 2.0;
                    track_toward(&mut ai_paddle, ball_center, ai_speed, canvas);
                }

                ball.update(canvas);

                if ball.body.overlaps(&player_paddle) {
                    ball.bounce_off_paddle(&player_paddle);
                } else if ball.body.overlaps(&ai_paddle) {
                    ball.bounce_off_paddle(&ai_paddle);
                }

                // Scoring
                if ball.body.position.x < 0.0 {
                    ai_score += 1;
                    println!("AI scores! Player {} - AI {}", player_score, ai_score);
                    ball.reset(Serve::TowardPlayer);
                } else if ball.body.position.x > canvas.width() {
                    player_score += 1;
                    println!("Player scores! Player {} - AI {}", player_score, ai_score);
                    ball.reset(Serve::TowardAi);
                }
                if player_score >= MAX_SCORE || ai_score >= MAX_SCORE {
                    state = GameState::GameOver;
                }
            } else if is_key_pressed(KeyCode::R) {
                player_score = 0;
                ai_score = 0;
                ball.reset(Serve::TowardAi);
                state = GameState::Playing;
            }

            // Center line
            let mut y = 0.0;
            while y < canvas.height() {
                draw_rectangle(canvas.width() / 2.0 - 2.0, y, 4.0, 10.0, GRAY);
                y += 20.0;
            }

            player_paddle.draw();
            ai_paddle.draw();
            ball.body.draw();

            draw_text(
                &format!("{}   {}", player_score, ai_score),
                canvas.width() / 2.0 - 40.0,
                40.0,
                36.0,
                WHITE,
            );

            if state == GameState::GameOver {
                let winner = if player_score >= MAX_SCORE {
                    "Player wins!"
                } else {
                    "AI wins!"
                };
                draw_rectangle(
                    0.0,
                    0.0,
                    canvas.width(),
                    canvas.height(),
                    Color::new(0.0, 0.0, 0.0, 0.7),
                );
                draw_text(winner, canvas.width() / 2.0 - 110.0, 280.0, 48.0, RED);
                draw_text(
                    "Press R to restart",
                    canvas.width() / 2.0 - 100.0,
                    340.0,
                    28.0,
                    LIGHTGRAY,
                );
            }
        })
        .await;
}
