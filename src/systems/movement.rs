// In src/systems/movement.rs
use crate::components::{MoveInput, Player};
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

// Displacement for one tick, in tiles: the input direction is normalized so
// diagonals are not faster than straight lines.
pub fn planar_step(axis: Vec2, speed: f32, dt: f32) -> Vec2 {
    axis.normalize_or_zero() * speed * dt
}

// Runs in FixedUpdate, so `time` is the fixed timestep
pub fn player_movement_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Transform, &mut Velocity, &Player, &MoveInput)>,
) {
    for (mut transform, mut velocity, player, input) in query.iter_mut() {
        // The body never keeps momentum of its own
        *velocity = Velocity::zero();

        if !player.active {
            continue;
        }

        let movement = planar_step(input.axis, player.speed, time.delta_secs());
        transform.translation.x += movement.x * config.tile_size;
        transform.translation.y += movement.y * config.tile_size;
    }
}
