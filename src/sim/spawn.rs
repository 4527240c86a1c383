//! Stochastic spawn scheduling
//!
//! Two independent countdown timers feed the corridor. Each fires at most
//! once per step no matter how large `dt` is: the `<= 0` check runs once and
//! the timer is reseeded atomically with the spawn.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::state::{Enemy, Obstacle, World};
use crate::consts::*;

/// Seconds-range drawn for the enemy timer after each fire
const ENEMY_INTERVAL_MIN: f32 = 0.45;
const ENEMY_INTERVAL_MAX: f32 = 1.1;
/// Obstacles arrive more sparsely
const OBSTACLE_INTERVAL_MIN: f32 = 0.8;
const OBSTACLE_INTERVAL_MAX: f32 = 1.8;

/// Run both spawn timers for this step
pub fn update_timers(world: &mut World, dt: f32) {
    world.enemy_timer -= dt;
    if world.enemy_timer <= 0.0 {
        world.enemy_timer = world.rng.random_range(ENEMY_INTERVAL_MIN..ENEMY_INTERVAL_MAX);
        spawn_enemy(world);
    }

    world.obstacle_timer -= dt;
    if world.obstacle_timer <= 0.0 {
        world.obstacle_timer = world
            .rng
            .random_range(OBSTACLE_INTERVAL_MIN..OBSTACLE_INTERVAL_MAX);
        spawn_obstacle(world);
    }
}

/// Push one enemy just ahead of the visible window
pub fn spawn_enemy(world: &mut World) {
    let lane = world.config.world_width;
    let y = world.offset_y - SPAWN_LEAD;
    let rng = &mut world.rng;
    let enemy = Enemy {
        pos: Vec3::new(
            rng.random_range(1.2..lane - 1.2),
            y,
            rng.random_range(0.8..3.5),
        ),
        radius: ENEMY_RADIUS,
        wobble: rng.random_range(0.0..TAU),
    };
    world.enemies.push(enemy);
    log::debug!("enemy spawned at {}", enemy.pos);
}

/// Push one obstacle, sized and placed to sit fully inside the lane
pub fn spawn_obstacle(world: &mut World) {
    let lane = world.config.world_width;
    let y = world.offset_y - SPAWN_LEAD;
    let rng = &mut world.rng;
    let width = rng.random_range(1.2..2.8);
    let depth = rng.random_range(1.0..2.0);
    let obstacle = Obstacle {
        pos: Vec3::new(
            rng.random_range(0.5..lane - width - 0.5),
            y,
            rng.random_range(0.2..2.6),
        ),
        size: Vec3::new(width, depth, rng.random_range(0.6..2.8)),
    };
    world.obstacles.push(obstacle);
    log::debug!("obstacle spawned at {}", obstacle.pos);
}
