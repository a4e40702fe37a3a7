//! Shooter
//!
//! Move with WASD, aim with the mouse, left click to fire a bullet toward
//! the cursor. Click a target directly (or hit it with a bullet) to
//! destroy it; a fresh wave spawns when the board is clear. Demonstrates
//! combining the keyboard-driven `Player` with the `MouseController`'s
//! hover and click queries.

use easyquad::{rects_overlap, Canvas, Character, Engine, MouseController, Player};
use macroquad::prelude::*;

const SCREEN: (f32, f32) = (800.0, 600.0);
const PLAYER_SIZE: f32 = 40.0;
const BULLET_SPEED: f32 = 15.0;
const BULLET_RADIUS: f32 = 8.0;
const SHOT_COOLDOWN_FRAMES: u32 = 10;
const TARGET_SIZE: f32 = 50.0;
const POINTS_PER_TARGET: u32 = 10;

struct Bullet {
    position: Vec2,
    velocity: Vec2,
    alive: bool,
}

/// Velocity of a bullet fired from `start` toward `target` at
/// `BULLET_SPEED`. None when the two coincide (no direction to fire in).
fn bullet_velocity(start: Vec2, target: Vec2) -> Option<Vec2> {
    let delta = target - start;
    if delta == Vec2::ZERO {
        return None;
    }
    Some(delta.normalize() * BULLET_SPEED)
}

/// Has the bullet left the screen entirely?
fn off_screen(position: Vec2, screen: (f32, f32)) -> bool {
    position.x < 0.0 || position.x > screen.0 || position.y < 0.0 || position.y > screen.1
}

/// Collision box of a bullet, centered on its position.
fn bullet_box(position: Vec2) -> Rect {
    Rect::new(
        position.x - BULLET_RADIUS,
        position.y - BULLET_RADIUS,
        BULLET_RADIUS * 2.0,
        BULLET_RADIUS * 2.0,
    )
}

/// One wave of targets at fixed positions around the edges of the arena.
fn spawn_targets() -> Vec<Character> {
    let positions = [
        (120.0, 90.0),
        (380.0, 70.0),
        (640.0, 110.0),
        (140.0, 430.0),
        (610.0, 450.0),
    ];
    positions
        .iter()
        .map(|&(x, y)| {
            let mut target = Character::new((x, y), TARGET_SIZE);
            target.color = Color::from_rgba(220, 60, 60, 255);
            target
        })
        .collect()
}

/// Index of the first target the mouse is clicking, if any.
fn find_clicked(targets: &[Character], mouse: &MouseController) -> Option<usize> {
    targets.iter().position(|target| mouse.is_clicking(target))
}

fn window_conf() -> Conf {
    Conf {
        window_title: "easyquad Shooter".to_string(),
        window_width: SCREEN.0 as i32,
        window_height: SCREEN.1 as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("Shooter: WASD to move, click to shoot (or click targets), ESC to quit");

    let canvas = Canvas::new(SCREEN, Color::from_rgba(20, 20, 30, 255)).expect("valid screen size");
    let mut engine = Engine::new(60, canvas, "Shooter").expect("valid fps");

    let mut player = Player::new(
        (SCREEN.0 / 2.0 - PLAYER_SIZE / 2.0, SCREEN.1 / 2.0 - PLAYER_SIZE / 2.0),
        PLAYER_SIZE,
    );
    player.body.color = GREEN;

    let mut mouse = MouseController::new();
    let mut bullets: Vec<Bullet> = Vec::new();
    let mut targets = spawn_targets();
    let mut score = 0u32;
    let mut cooldown = 0u32;

    engine
        .run(|canvas| {
            mouse.poll();
            player.handle_keys(canvas);

            if cooldown > 0 {
                cooldown -= 1;
            }

            if mouse.is_left_pressed() && cooldown == 0 {
                cooldown = SHOT_COOLDOWN_FRAMES;

                // A click landing on a target destroys it outright;
                // otherwise fire a bullet from the player's center
                // toward the cursor.
                if let Some(hit) = find_clicked(&targets, &mouse) {
                    targets.remove(hit);
                    score += POINTS_PER_TARGET;
                } else {
                    let center = player.body.position + player.body.size / 2.0;
                    if let Some(velocity) = bullet_velocity(center, mouse.position()) {
                        bullets.push(Bullet {
                            position: center,
                            velocity,
                            alive: true,
                        });
                    }
                }
            }

            for bullet in bullets.iter_mut() {
                bullet.position += bullet.velocity;
                if off_screen(bullet.position, (canvas.width(), canvas.height())) {
                    bullet.alive = false;
                    continue;
                }
                let hitbox = bullet_box(bullet.position);
                if let Some(hit) = targets.iter().position(|t| rects_overlap(&hitbox, &t.bounds()))
                {
                    targets.remove(hit);
                    score += POINTS_PER_TARGET;
                    bullet.alive = false;
                }
            }
            bullets.retain(|b| b.alive);

            if targets.is_empty() {
                println!("Wave cleared! Score: {}", score);
                targets = spawn_targets();
            }

            // Draw
            for target in &targets {
                target.draw();
                // Highlight the hovered target
                if mouse.is_over(target) {
                    let b = target.bounds();
                    draw_rectangle_lines(b.x - 3.0, b.y - 3.0, b.w + 6.0, b.h + 6.0, 3.0, YELLOW);
                }
            }
            player.draw();
            for bullet in &bullets {
                draw_circle(bullet.position.x, bullet.position.y, BULLET_RADIUS, YELLOW);
            }

            // Crosshair at the cursor
            let cursor = mouse.position();
            let crosshair = Color::from_rgba(255, 100, 100, 255);
            draw_line(cursor.x - 10.0, cursor.y, cursor.x + 10.0, cursor.y, 2.0, crosshair);
            draw_line(cursor.x, cursor.y - 10.0, cursor.x, cursor.y + 10.0, 2.0, crosshair);

            draw_text(&format!("Score: {}", score), 10.0, 30.0, 36.0, WHITE);
            draw_text(
                "WASD: Move | Click: Shoot | ESC: Quit",
                10.0,
                canvas.height() - 15.0,
                28.0,
                LIGHTGRAY,
            );
        })
        .await;
}
