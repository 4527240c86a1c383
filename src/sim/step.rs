//! One discrete advance of the world
//!
//! The single entry point an external frame driver calls, roughly once per
//! display refresh. Phase order within a step is load-bearing: restart check,
//! game-over freeze, scroll and player input, fire, spawn timers, entity
//! motion, explosion pruning, collision resolution, passive score. Moving
//! collisions ahead of motion (or spawns behind the freeze check) would break
//! the "nothing happens after game over" guarantee.

use glam::Vec3;

use super::collision;
use super::spawn;
use super::state::{Bullet, World};
use crate::consts::*;
use crate::input::{Action, ActionSet};

/// Advance the world by `dt` time units given the currently held actions.
///
/// `dt` must already be clamped by the caller (see
/// [`MAX_FRAME_DELTA`](crate::consts::MAX_FRAME_DELTA)).
///
/// While `game_over` is set the world is frozen: the only thing a step does
/// is honor a pending restart, and a restarting step returns without
/// simulating anything, so the first post-reset frame renders the fresh
/// world untouched.
pub fn step(world: &mut World, actions: &ActionSet, dt: f32) {
    if world.game_over {
        if actions.contains(Action::Restart) {
            world.reset();
        }
        return;
    }

    world.offset_y += world.config.scroll_speed * dt;

    move_player(world, actions, dt);
    fire(world, actions, dt);
    spawn::update_timers(world, dt);
    advance_entities(world, dt);
    collision::resolve(world);

    // Survival bonus, awarded even on a frame that ends the run
    world.score += (dt * SURVIVAL_SCORE_RATE).floor() as u64;
}

/// Apply axis input and re-clamp the player into its flight box
fn move_player(world: &mut World, actions: &ActionSet, dt: f32) {
    let move_x = actions.axis(Action::MoveRight, Action::MoveLeft);
    let move_y = actions.axis(Action::MoveDown, Action::MoveUp);
    let move_z = actions.axis(Action::Ascend, Action::Descend);

    let cfg = &world.config;
    let pos = &mut world.player.pos;
    pos.x = (pos.x + move_x * cfg.player_speed_x * dt)
        .clamp(PLAYER_X_MARGIN, cfg.world_width - PLAYER_X_MARGIN);
    pos.y = (pos.y + move_y * cfg.player_speed_y * dt).clamp(
        world.offset_y + PLAYER_Y_MIN,
        world.offset_y + PLAYER_Y_MAX,
    );
    pos.z = (pos.z + move_z * cfg.player_speed_z * dt).clamp(PLAYER_Z_MIN, PLAYER_Z_MAX);
}

/// Recharge the fire cooldown and emit a bullet when it allows one.
/// The cooldown reset gives a hard per-bullet rate limit independent of
/// frame rate.
fn fire(world: &mut World, actions: &ActionSet, dt: f32) {
    world.fire_cooldown -= dt;
    if actions.contains(Action::Fire) && world.fire_cooldown <= 0.0 {
        world.fire_cooldown = world.config.fire_recharge;
        world.bullets.push(Bullet {
            pos: world.player.pos - Vec3::new(0.0, BULLET_NOSE_OFFSET, 0.0),
            radius: BULLET_RADIUS,
        });
    }
}

/// Integrate every entity and prune spent explosions before collisions run
fn advance_entities(world: &mut World, dt: f32) {
    let drift_phase = world.offset_y;

    for bullet in &mut world.bullets {
        bullet.pos.y -= world.config.bullet_speed * dt;
    }

    for enemy in &mut world.enemies {
        enemy.pos.y += world.config.enemy_speed * dt;
        enemy.pos.x += ((drift_phase + enemy.wobble) * WOBBLE_FREQ).sin() * WOBBLE_AMPLITUDE * dt;
    }

    // Obstacles close in at half enemy speed
    for obstacle in &mut world.obstacles {
        obstacle.pos.y += world.config.enemy_speed * 0.5 * dt;
    }

    for explosion in &mut world.explosions {
        explosion.life -= dt;
    }
    world.explosions.retain(|e| e.life > 0.0);
}
