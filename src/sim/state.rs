//! World state and entity records
//!
//! The [`World`] is the aggregate root: it owns the player, all entity bags,
//! the score/lives counters, the spawn timers, and the RNG. Everything a
//! renderer needs is a public field read between steps.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::consts::*;

/// The player craft. Exactly one per world; never removed, only repositioned
/// on a hit or frozen on game over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    pub radius: f32,
}

/// A player shot, travelling toward negative y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec3,
    pub radius: f32,
}

/// An enemy craft drifting down the corridor toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec3,
    pub radius: f32,
    /// Phase offset for the lateral drift, fixed at spawn
    pub wobble: f32,
}

/// An axis-aligned block in the lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Minimum corner
    pub pos: Vec3,
    /// Extents: x = width, y = depth, z = height
    pub size: Vec3,
}

/// Which event produced an explosion. Rendering maps these to colors; the
/// simulation itself never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    /// Enemy destroyed by a bullet
    BulletKill,
    /// Enemy rammed the player
    Rammed,
    /// The player lost a life
    PlayerHit,
}

/// A purely visual burst; carries no gameplay effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec3,
    pub life: f32,
    pub max_life: f32,
    pub kind: ExplosionKind,
}

impl Explosion {
    /// Remaining-life fraction in [0, 1], for renderers fading the burst out
    pub fn life_ratio(&self) -> f32 {
        (self.life / self.max_life).max(0.0)
    }
}

/// The authoritative simulation state
///
/// Sole mutable aggregate; bullets, enemies, obstacles and explosions have no
/// identity outside their containing bag, and removal is immediate and final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: Config,
    /// Scroll offset; non-decreasing while playing
    pub offset_y: f32,
    pub score: u64,
    pub lives: i32,
    pub game_over: bool,
    pub fire_cooldown: f32,
    /// Countdown to the next enemy spawn
    pub enemy_timer: f32,
    /// Countdown to the next obstacle spawn
    pub obstacle_timer: f32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
    pub explosions: Vec<Explosion>,
    pub(crate) rng: Pcg32,
}

impl World {
    /// New world with stock tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    /// New world with custom tuning; bad tuning is rejected here, never at
    /// step time
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let player = Player {
            pos: Vec3::new(config.world_width * 0.5, PLAYER_SPAWN_Y, PLAYER_SPAWN_Z),
            radius: PLAYER_RADIUS,
        };
        Self {
            lives: config.starting_lives,
            config,
            offset_y: 0.0,
            score: 0,
            game_over: false,
            fire_cooldown: 0.0,
            enemy_timer: 0.0,
            obstacle_timer: 0.0,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            obstacles: Vec::new(),
            explosions: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The fixed pose the player starts at and returns to after a hit
    pub fn spawn_pose(&self) -> Vec3 {
        Vec3::new(
            self.config.world_width * 0.5,
            PLAYER_SPAWN_Y,
            PLAYER_SPAWN_Z,
        )
    }

    /// Return to the initial playing state: counters zeroed, bags emptied,
    /// player back at the spawn pose. The RNG stream is left where it is.
    pub fn reset(&mut self) {
        log::info!("reset, final score was {}", self.score);
        self.game_over = false;
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.offset_y = 0.0;
        self.fire_cooldown = 0.0;
        self.enemy_timer = 0.0;
        self.obstacle_timer = 0.0;
        self.player.pos = self.spawn_pose();
        self.bullets.clear();
        self.enemies.clear();
        self.obstacles.clear();
        self.explosions.clear();
    }

    pub(crate) fn add_explosion(&mut self, pos: Vec3, kind: ExplosionKind) {
        self.explosions.push(Explosion {
            pos,
            life: EXPLOSION_LIFE,
            max_life: EXPLOSION_LIFE,
            kind,
        });
    }
}
