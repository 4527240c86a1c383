//! Skylane - simulation core for a pseudo-3D corridor shooter
//!
//! Core modules:
//! - `sim`: world state, spawning, motion integration, collision resolution
//! - `input`: raw-key normalization into the abstract pressed-action set
//! - `config`: validated tuning parameters
//!
//! The crate owns no rendering, window, or timer concepts. An external frame
//! driver calls [`sim::step`] roughly once per display refresh with an
//! elapsed-time value (pre-clamped to [`consts::MAX_FRAME_DELTA`]) and the
//! currently held action set, then reads the mutated [`sim::World`] to draw.

pub mod config;
pub mod input;
pub mod sim;

pub use config::{Config, ConfigError};
pub use input::{Action, ActionSet};
pub use sim::{World, step};

/// Game tuning constants
///
/// All distances are abstract world units; time is measured in nominal frame
/// intervals, so a 60 Hz driver passes `dt` near 1.0.
pub mod consts {
    /// Lane width; entity x coordinates live inside [0, `WORLD_WIDTH`]
    pub const WORLD_WIDTH: f32 = 12.0;
    /// Corridor scroll speed (world units per time unit)
    pub const SCROLL_SPEED: f32 = 3.2;

    /// Player axis speeds
    pub const PLAYER_SPEED_X: f32 = 0.16;
    pub const PLAYER_SPEED_Y: f32 = 0.16;
    pub const PLAYER_SPEED_Z: f32 = 0.2;
    pub const BULLET_SPEED: f32 = 0.55;
    pub const ENEMY_SPEED: f32 = 0.13;

    /// Collision radii
    pub const PLAYER_RADIUS: f32 = 0.35;
    pub const ENEMY_RADIUS: f32 = 0.45;
    pub const BULLET_RADIUS: f32 = 0.2;

    /// Player x margin from the lane edges
    pub const PLAYER_X_MARGIN: f32 = 0.4;
    /// Player y window, relative to the scroll offset
    pub const PLAYER_Y_MIN: f32 = 5.0;
    pub const PLAYER_Y_MAX: f32 = 12.0;
    /// Player altitude limits
    pub const PLAYER_Z_MIN: f32 = 0.1;
    pub const PLAYER_Z_MAX: f32 = 5.5;

    /// Player spawn pose. The y value is absolute, not offset-relative; the
    /// hurt respawn reuses it verbatim.
    pub const PLAYER_SPAWN_Y: f32 = 9.0;
    pub const PLAYER_SPAWN_Z: f32 = 2.0;

    /// Time between shots while fire is held
    pub const FIRE_RECHARGE: f32 = 0.15;
    /// Bullets leave the player's nose, this far ahead on y
    pub const BULLET_NOSE_OFFSET: f32 = 0.3;

    /// Enemies and obstacles enter this far ahead of the scroll offset
    pub const SPAWN_LEAD: f32 = 6.0;
    /// Bullets are culled once this far behind the scroll offset
    pub const BULLET_CULL_BEHIND: f32 = 8.0;
    /// Enemies that drift this far past the offset have escaped
    pub const ENEMY_ESCAPE_AHEAD: f32 = 14.0;
    /// Obstacles are larger and get a wider escape window
    pub const OBSTACLE_ESCAPE_AHEAD: f32 = 16.0;

    /// Lateral enemy drift: `sin((offset + wobble) * FREQ) * AMPLITUDE * dt`
    pub const WOBBLE_FREQ: f32 = 0.08;
    pub const WOBBLE_AMPLITUDE: f32 = 0.01;

    /// Score for destroying an enemy with a bullet
    pub const BULLET_KILL_SCORE: u64 = 100;
    /// Passive survival score per step is `floor(dt * SURVIVAL_SCORE_RATE)`
    pub const SURVIVAL_SCORE_RATE: f32 = 4.0;

    /// Explosion lifetime in time units
    pub const EXPLOSION_LIFE: f32 = 0.5;

    pub const STARTING_LIVES: i32 = 3;

    /// Largest `dt` the frame driver may pass to `step`. The cap bounds
    /// per-step travel so a slow frame cannot skip a bullet clean over an
    /// enemy.
    pub const MAX_FRAME_DELTA: f32 = 2.5;
    /// Nominal frame interval for drivers that measure wall-clock time
    pub const NOMINAL_FRAME_MS: f32 = 16.666;
}
