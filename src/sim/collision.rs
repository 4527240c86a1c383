//! Ordered collision resolution
//!
//! Runs after motion inside the same step. The phase order is fixed: bullets
//! first, then enemies against the player, then obstacles. Reordering would
//! let a bullet score off an enemy that already rammed the player in this
//! very step.
//!
//! All bags iterate by reverse index so removal never skips an element.

use super::geom::{box_intersects_sphere, spheres_intersect};
use super::state::{ExplosionKind, World};
use crate::consts::*;

/// Resolve every interaction for this step. May flip `game_over`.
pub fn resolve(world: &mut World) {
    resolve_bullets(world);
    resolve_enemies(world);
    resolve_obstacles(world);
}

/// Bullets against enemies, then obstacles, then the trailing window.
///
/// A bullet spends itself on its first match only: one kill per bullet, and
/// obstacles absorb bullets without being destroyed or scoring.
fn resolve_bullets(world: &mut World) {
    'bullets: for i in (0..world.bullets.len()).rev() {
        let bullet = world.bullets[i];

        for j in (0..world.enemies.len()).rev() {
            let enemy = world.enemies[j];
            if spheres_intersect(bullet.pos, bullet.radius, enemy.pos, enemy.radius) {
                world.add_explosion(enemy.pos, ExplosionKind::BulletKill);
                world.score += BULLET_KILL_SCORE;
                world.enemies.remove(j);
                world.bullets.remove(i);
                continue 'bullets;
            }
        }

        for obstacle in &world.obstacles {
            if box_intersects_sphere(obstacle.pos, obstacle.size, bullet.pos, bullet.radius) {
                world.bullets.remove(i);
                continue 'bullets;
            }
        }

        if bullet.pos.y < world.offset_y - BULLET_CULL_BEHIND {
            world.bullets.remove(i);
        }
    }
}

/// Enemies against the player sphere; survivors past the escape line are
/// pruned with no score effect
fn resolve_enemies(world: &mut World) {
    for i in (0..world.enemies.len()).rev() {
        let enemy = world.enemies[i];

        if spheres_intersect(enemy.pos, enemy.radius, world.player.pos, world.player.radius) {
            world.add_explosion(enemy.pos, ExplosionKind::Rammed);
            world.enemies.remove(i);
            hurt_player(world);
            continue;
        }

        if enemy.pos.y > world.offset_y + ENEMY_ESCAPE_AHEAD {
            world.enemies.remove(i);
        }
    }
}

/// Obstacles against the player, symmetric to the enemy pass
fn resolve_obstacles(world: &mut World) {
    for i in (0..world.obstacles.len()).rev() {
        let obstacle = world.obstacles[i];

        if box_intersects_sphere(
            obstacle.pos,
            obstacle.size,
            world.player.pos,
            world.player.radius,
        ) {
            world.obstacles.remove(i);
            hurt_player(world);
            continue;
        }

        if obstacle.pos.y > world.offset_y + OBSTACLE_ESCAPE_AHEAD {
            world.obstacles.remove(i);
        }
    }
}

/// Cost a life and return the player to the spawn pose
///
/// The respawn y is the absolute spawn value rather than offset-relative, so
/// a late-run death pops the player behind the scroll front until the next
/// step's clamp catches up.
pub fn hurt_player(world: &mut World) {
    world.lives -= 1;
    world.add_explosion(world.player.pos, ExplosionKind::PlayerHit);
    world.player.pos = world.spawn_pose();
    log::info!("player hit, {} lives left", world.lives);

    if world.lives <= 0 {
        world.game_over = true;
        log::info!("game over at score {}", world.score);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::sim::state::{Bullet, Enemy, Obstacle};

    fn bullet_at(pos: Vec3) -> Bullet {
        Bullet {
            pos,
            radius: BULLET_RADIUS,
        }
    }

    fn enemy_at(pos: Vec3) -> Enemy {
        Enemy {
            pos,
            radius: ENEMY_RADIUS,
            wobble: 0.0,
        }
    }

    #[test]
    fn bullet_kill_removes_both_and_scores() {
        let mut world = World::new(21);
        world.bullets.push(bullet_at(Vec3::new(4.0, 3.0, 2.0)));
        world.enemies.push(enemy_at(Vec3::new(4.2, 3.0, 2.0)));

        resolve(&mut world);

        assert!(world.bullets.is_empty());
        assert!(world.enemies.is_empty());
        assert_eq!(world.score, BULLET_KILL_SCORE);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].kind, ExplosionKind::BulletKill);
        assert_eq!(world.explosions[0].pos, Vec3::new(4.2, 3.0, 2.0));
    }

    #[test]
    fn one_bullet_kills_at_most_one_enemy() {
        let mut world = World::new(22);
        world.bullets.push(bullet_at(Vec3::new(4.0, 3.0, 2.0)));
        world.enemies.push(enemy_at(Vec3::new(4.1, 3.0, 2.0)));
        world.enemies.push(enemy_at(Vec3::new(3.9, 3.0, 2.0)));

        resolve(&mut world);

        assert!(world.bullets.is_empty());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.score, BULLET_KILL_SCORE);
    }

    #[test]
    fn obstacles_absorb_bullets_without_scoring() {
        let mut world = World::new(23);
        world.bullets.push(bullet_at(Vec3::new(2.0, 3.0, 1.0)));
        world.obstacles.push(Obstacle {
            pos: Vec3::new(1.0, 2.0, 0.5),
            size: Vec3::new(2.0, 2.0, 1.0),
        });

        resolve(&mut world);

        assert!(world.bullets.is_empty());
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.score, 0);
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn bullets_behind_the_trailing_window_are_culled() {
        let mut world = World::new(24);
        world.offset_y = 20.0;
        world.bullets.push(bullet_at(Vec3::new(4.0, 11.9, 2.0)));
        world.bullets.push(bullet_at(Vec3::new(4.0, 12.1, 2.0)));

        resolve(&mut world);

        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].pos.y, 12.1);
    }

    #[test]
    fn escaped_enemies_are_pruned_without_score() {
        let mut world = World::new(25);
        world.offset_y = 10.0;
        world.player.pos = Vec3::new(2.0, 18.0, 2.0);
        world.enemies.push(enemy_at(Vec3::new(8.0, 24.1, 2.0))); // past 10 + 14
        world.enemies.push(enemy_at(Vec3::new(8.0, 23.9, 2.0))); // still inside

        resolve(&mut world);

        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].pos.y, 23.9);
        assert_eq!(world.score, 0);
        assert_eq!(world.lives, 3);
    }

    #[test]
    fn ramming_enemy_costs_a_life_and_respawns_the_player() {
        let mut world = World::new(26);
        world.player.pos = Vec3::new(3.0, 9.0, 2.0);
        world.enemies.push(enemy_at(Vec3::new(3.2, 9.0, 2.0)));

        resolve(&mut world);

        assert!(world.enemies.is_empty());
        assert_eq!(world.lives, 2);
        assert!(!world.game_over);
        assert_eq!(world.player.pos, world.spawn_pose());
        // One burst at the enemy, one at the player
        let kinds: Vec<_> = world.explosions.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ExplosionKind::Rammed, ExplosionKind::PlayerHit]);
    }

    #[test]
    fn obstacle_hit_is_removed_and_costs_a_life() {
        let mut world = World::new(27);
        world.player.pos = Vec3::new(3.0, 9.0, 2.0);
        world.obstacles.push(Obstacle {
            pos: Vec3::new(2.5, 8.5, 1.5),
            size: Vec3::new(1.0, 1.0, 1.0),
        });

        resolve(&mut world);

        assert!(world.obstacles.is_empty());
        assert_eq!(world.lives, 2);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].kind, ExplosionKind::PlayerHit);
    }

    #[test]
    fn escaped_obstacles_use_the_wider_window() {
        let mut world = World::new(28);
        world.offset_y = 10.0;
        world.player.pos = Vec3::new(2.0, 17.0, 5.0);
        world.obstacles.push(Obstacle {
            pos: Vec3::new(8.0, 26.1, 0.5),
            size: Vec3::ONE,
        });
        world.obstacles.push(Obstacle {
            pos: Vec3::new(8.0, 25.9, 0.5),
            size: Vec3::ONE,
        });

        resolve(&mut world);

        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.obstacles[0].pos.y, 25.9);
    }

    #[test]
    fn third_hit_flips_game_over() {
        let mut world = World::new(29);
        world.lives = 1;
        hurt_player(&mut world);
        assert_eq!(world.lives, 0);
        assert!(world.game_over);
    }
}
