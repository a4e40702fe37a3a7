//! Gyruss-style shoot-em-up
//!
//! The player orbits the screen center along a fixed ring (A/D to move
//! around the perimeter) and fires toward the center with W or Space.
//! Enemies spawn at the center and spiral outward; they despawn past the
//! ring. Touching an enemy ends the game; R restarts.

use easyquad::rects_overlap;
use macroquad::prelude::*;

const SCREEN: (f32, f32) = (800.0, 600.0);
const CENTER: Vec2 = Vec2::new(400.0, 300.0);
const ORBIT_RADIUS: f32 = 250.0;
const PLAYER_ANGULAR_SPEED: f32 = 0.05;
const PLAYER_SIZE: f32 = 15.0;
const BULLET_SPEED: f32 = 12.0;
const BULLET_RADIUS: f32 = 4.0;
const SHOT_COOLDOWN_FRAMES: u32 = 60;
const ENEMY_SPAWN_INTERVAL: u32 = 60;
const ENEMY_SPIRAL_SPEED: f32 = 1.0;
const ENEMY_ROTATION_SPEED: f32 = 0.025;
const ENEMY_SIZE: f32 = 16.0;
const ENEMY_DESPAWN_RADIUS: f32 = 350.0;
const POINTS_PER_KILL: u32 = 10;

/// Position on a circle around the screen center.
fn orbit_position(radius: f32, angle: f32) -> Vec2 {
    CENTER + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Velocity toward the screen center at bullet speed; straight up when
/// fired from the center itself.
fn aim_at_center(start: Vec2) -> Vec2 {
    let delta = CENTER - start;
    if delta == Vec2::ZERO {
        Vec2::new(0.0, -BULLET_SPEED)
    } else {
        delta.normalize() * BULLET_SPEED
    }
}

/// Square collision box centered on a point.
fn centered_box(center: Vec2, half_extent: f32) -> Rect {
    Rect::new(
        center.x - half_extent,
        center.y - half_extent,
        half_extent * 2.0,
        half_extent * 2.0,
    )
}

struct OrbitPlayer {
    angle: f32,
}

impl OrbitPlayer {
    fn new() -> Self {
        // Start at the bottom of the ring
        Self {
            angle: std::f32::consts::FRAC_PI_2,
        }
    }

    fn position(&self) -> Vec2 {
        orbit_position(ORBIT_RADIUS, self.angle)
    }

    fn update(&mut self, counterclockwise: bool, clockwise: bool) {
        if counterclockwise {
            self.angle -= PLAYER_ANGULAR_SPEED;
        }
        if clockwise {
            self.angle += PLAYER_ANGULAR_SPEED;
        }
    }

    fn collision_box(&self) -> Rect {
        centered_box(self.position(), PLAYER_SIZE)
    }
}

struct Bullet {
    position: Vec2,
    velocity: Vec2,
    alive: bool,
}

impl Bullet {
    fn new(start: Vec2) -> Self {
        Self {
            position: start,
            velocity: aim_at_center(start),
            alive: true,
        }
    }

    fn update(&mut self) {
        self.position += self.velocity;
        // Dies on reaching the center or leaving the screen
        if self.position.distance(CENTER) < 15.0 {
            self.alive = false;
        }
        if self.position.x < -50.0
            || self.position.x > SCREEN.0 + 50.0
            || self.position.y < -50.0
            || self.position.y > SCREEN.1 + 50.0
        {
            self.alive = false;
        }
    }

    fn collision_box(&self) -> Rect {
        centered_box(self.position, BULLET_RADIUS)
    }
}

struct Enemy {
    angle: f32,
    radius: f32,
    alive: bool,
}

impl Enemy {
    fn new(angle: f32) -> Self {
        Self {
            angle,
            radius: 20.0,
            alive: true,
        }
    }

    /// One spiral step: radius and angle each advance by a fixed amount.
    fn update(&mut self) {
        self.radius += ENEMY_SPIRAL_SPEED;
        self.angle += ENEMY_ROTATION_SPEED;
        if self.radius > ENEMY_DESPAWN_RADIUS {
            self.alive = false;
        }
    }

    fn position(&self) -> Vec2 {
        orbit_position(self.radius, self.angle)
    }

    fn collision_box(&self) -> Rect {
        centered_box(self.position(), ENEMY_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Playing,
    GameOver,
}

struct GyrussGame {
    player: OrbitPlayer,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    score: u32,
    spawn_timer: u32,
    shot_cooldown: u32,
    state: GameState,
    /// Spawn angles cycle through a fixed sequence instead of being random
    spawn_seq: u32,
}

impl GyrussGame {
    fn new() -> Self {
        Self {
            player: OrbitPlayer::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            spawn_timer: 0,
            shot_cooldown: 0,
            state: GameState::Playing,
            spawn_seq: 0,
        }
    }

    fn next_spawn_angle(&mut self) -> f32 {
        // Golden-angle stepping spreads spawns around the circle
        self.spawn_seq += 1;
        self.spawn_seq as f32 * 2.399_963
    }

    fn step(&mut self, counterclockwise: bool, clockwise: bool, firing: bool) {
        self.player.update(counterclockwise, clockwise);

        if self.shot_cooldown > 0 {
            self.shot_cooldown -= 1;
        }
        if firing && self.shot_cooldown == 0 {
            self.bullets.push(Bullet::new(self.player.position()));
            self.shot_cooldown = SHOT_COOLDOWN_FRAMES;
        }

        for bullet in self.bullets.iter_mut() {
            bullet.update();
        }

        self.spawn_timer += 1;
        if self.spawn_timer >= ENEMY_SPAWN_INTERVAL {
            self.spawn_timer = 0;
            let angle = self.next_spawn_angle();
            self.enemies.push(Enemy::new(angle));
        }
        for enemy in self.enemies.iter_mut() {
            enemy.update();
        }

        // Bullet-enemy hits
        for bullet in self.bullets.iter_mut() {
            for enemy in self.enemies.iter_mut() {
                if bullet.alive
                    && enemy.alive
                    && rects_overlap(&bullet.collision_box(), &enemy.collision_box())
                {
                    bullet.alive = false;
                    enemy.alive = false;
                    self.score += POINTS_PER_KILL;
                }
            }
        }
        self.bullets.retain(|b| b.alive);
        self.enemies.retain(|e| e.alive);

        // Player-enemy contact ends the game
        let player_box = self.player.collision_box();
        if self
            .enemies
            .iter()
            .any(|e| rects_overlap(&player_box, &e.collision_box()))
        {
            self.state = GameState::GameOver;
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "easyquad Gyruss".to_string(),
        window_width: SCREEN.0 as i32,
        window_height: SCREEN.1 as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("Gyruss: A/D to orbit, W/Space to fire, R to restart, ESC to quit");

    let canvas = easyquad::Canvas::new(SCREEN, Color::from_rgba(0, 0, 20, 255))
        .expect("valid screen size");
    let mut engine = easyquad::Engine::new(60, canvas, "Gyruss").expect("valid fps");

    let mut game = GyrussGame::new();

    engine
        .run(|_canvas| {
            match game.state {
                GameState::Playing => {
                    let firing = is_key_down(KeyCode::W) || is_key_down(KeyCode::Space);
                    game.step(is_key_down(KeyCode::A), is_key_down(KeyCode::D), firing);
                }
                GameState::GameOver => {
                    if is_key_pressed(KeyCode::R) {
                        game = GyrussGame::new();
                    }
                }
            }

            // Orbit guide and center marker
            draw_circle_lines(CENTER.x, CENTER.y, ORBIT_RADIUS, 1.0, Color::from_rgba(30, 30, 50, 255));
            draw_circle(CENTER.x, CENTER.y, 5.0, Color::from_rgba(50, 50, 80, 255));

            for enemy in &game.enemies {
                let p = enemy.position();
                draw_circle(p.x, p.y, ENEMY_SIZE, Color::from_rgba(255, 50, 50, 255));
            }
            for bullet in &game.bullets {
                draw_circle(bullet.position.x, bullet.position.y, BULLET_RADIUS, YELLOW);
            }
            let p = game.player.position();
            draw_circle(p.x, p.y, PLAYER_SIZE, Color::from_rgba(0, 255, 100, 255));

            draw_text(&format!("Score: {}", game.score), 10.0, 30.0, 36.0, WHITE);

            if game.state == GameState::GameOver {
                draw_rectangle(0.0, 0.0, SCREEN.0, SCREEN.1, Color::new(0.0, 0.0, 0.0, 0.7));
                draw_text("GAME OVER", CENTER.x - 140.0, 250.0, 64.0, Color::from_rgba(255, 80, 80, 255));
                draw_text(
                    &format!("Final Score: {}", game.score),
                    CENTER.x - 100.0,
                    330.0,
                    36.0,
                    WHITE,
                );
                draw_text("Press R to restart", CENTER.x - 90.0, 390.0, 28.0, LIGHTGRAY);
            }
        })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_position_on_ring() {
        let p = orbit_position(ORBIT_RADIUS, 0.0);
        assert!((p - Vec2::new(CENTER.x + ORBIT_RADIUS, CENTER.y)).length() < 1e-4);
        // Any angle stays on the ring
        for i in 0..16 {
            let angle = i as f32 * 0.4;
            let p = orbit_position(ORBIT_RADIUS, angle);
            assert!((p.distance(CENTER) - ORBIT_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_player_starts_at_bottom() {
        let player = OrbitPlayer::new();
        let p = player.position();
        assert!((p.x - CENTER.x).abs() < 1e-3);
        assert!((p.y - (CENTER.y + ORBIT_RADIUS)).abs() < 1e-3);
    }

    #[test]
    fn test_player_angular_steps() {
        let mut player = OrbitPlayer::new();
        let start = player.angle;
        player.update(false, true);
        assert!((player.angle - (start + PLAYER_ANGULAR_SPEED)).abs() < 1e-6);
        player.update(true, false);
        player.update(true, false);
        assert!((player.angle - (start - PLAYER_ANGULAR_SPEED)).abs() < 1e-6);
        // Both keys held: no net movement
        let before = player.angle;
        player.update(true, true);
        assert!((player.angle - before).abs() < 1e-6);
    }

    #[test]
    fn test_spiral_step_is_fixed() {
        let mut enemy = Enemy::new(1.0);
        enemy.update();
        assert_eq!(enemy.radius, 20.0 + ENEMY_SPIRAL_SPEED);
        assert!((enemy.angle - (1.0 + ENEMY_ROTATION_SPEED)).abs() < 1e-6);
        assert!(enemy.alive);
    }

    #[test]
    fn test_enemy_despawns_past_ring() {
        let mut enemy = Enemy::new(0.0);
        enemy.radius = ENEMY_DESPAWN_RADIUS;
        enemy.update();
        assert!(!enemy.alive);
    }

    #[test]
    fn test_bullet_aims_at_center() {
        let start = orbit_position(ORBIT_RADIUS, 1.3);
        let v = aim_at_center(start);
        assert!((v.length() - BULLET_SPEED).abs() < 1e-3);
        // Velocity points from start toward the center
        let expected = (CENTER - start).normalize() * BULLET_SPEED;
        assert!((v - expected).length() < 1e-3);
    }

    #[test]
    fn test_bullet_dies_at_center() {
        let mut bullet = Bullet::new(orbit_position(ORBIT_RADIUS, 0.0));
        for _ in 0..200 {
            if !bullet.alive {
                break;
            }
            bullet.update();
        }
        assert!(!bullet.alive);
    }

    #[test]
    fn test_kill_scores_and_removes_both() {
        let mut game = GyrussGame::new();
        // Place an enemy directly in a bullet's path, right next to it
        let start = orbit_position(ORBIT_RADIUS, 0.0);
        game.bullets.push(Bullet::new(start));
        let mut enemy = Enemy::new(0.0);
        enemy.radius = ORBIT_RADIUS - BULLET_SPEED;
        game.enemies.push(enemy);

        game.step(false, false, false);
        assert_eq!(game.score, POINTS_PER_KILL);
        assert!(game.bullets.is_empty());
        assert!(game.enemies.is_empty());
        assert_eq!(game.state, GameState::Playing);
    }

    #[test]
    fn test_contact_with_player_is_game_over() {
        let mut game = GyrussGame::new();
        let mut enemy = Enemy::new(std::f32::consts::FRAC_PI_2);
        enemy.radius = ORBIT_RADIUS - ENEMY_SPIRAL_SPEED;
        game.enemies.push(enemy);

        game.step(false, false, false);
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn test_shot_cooldown_limits_fire_rate() {
        let mut game = GyrussGame::new();
        game.step(false, false, true);
        assert_eq!(game.bullets.len(), 1);
        // Holding fire during the cooldown adds nothing
        for _ in 0..10 {
            game.step(false, false, true);
        }
        assert_eq!(game.bullets.len(), 1);
    }
}
