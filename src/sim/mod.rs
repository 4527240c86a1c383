//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform concerns:
//! - One [`World`] per simulation, exclusively owned by the caller
//! - The world advances only through [`step`]
//! - Per-world seeded RNG, so runs are reproducible under a fixed input script
//!
//! Renderers read the world as a plain snapshot between steps; nothing in
//! this module knows about projection, colors, or canvases.

pub mod collision;
pub mod geom;
pub mod spawn;
pub mod state;
pub mod step;

pub use geom::{box_intersects_sphere, spheres_intersect};
pub use state::{Bullet, Enemy, Explosion, ExplosionKind, Obstacle, Player, World};
pub use step::step;
