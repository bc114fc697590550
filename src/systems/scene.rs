use crate::components::{Collectible, MoveInput, Player, SceneEntity};
use crate::config::GameConfig;
use crate::events::RestartEvent;
use crate::resources::GameState;
use crate::systems::hud::spawn_hud;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

const PLAYER_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

// Everything spawned here is tagged SceneEntity so a restart can tear it down
pub fn spawn_scene(commands: &mut Commands, config: &GameConfig, game_state: &GameState) {
    let tile_size = config.tile_size;
    let player_start = config.tile_to_world(config.player_start);

    commands.spawn((
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(Vec2::splat(tile_size * 0.8)),
            ..default()
        },
        Transform::from_translation(player_start.extend(1.0)),
        RigidBody::KinematicPositionBased,
        Collider::ball(tile_size * 0.4),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
        Velocity::zero(),
        Player {
            speed: config.player_speed,
            active: true,
        },
        MoveInput::default(),
        SceneEntity,
    ));

    for spawn in &config.collectibles {
        let position = config.tile_to_world((spawn.x, spawn.y));

        commands.spawn((
            Sprite {
                color: spawn.color.render_color(),
                custom_size: Some(Vec2::splat(tile_size * 0.6)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            Collider::cuboid(tile_size * 0.3, tile_size * 0.3),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
            Collectible::new(spawn.color),
            SceneEntity,
        ));
    }

    spawn_hud(commands, game_state);

    info!(
        "Scene loaded with {} collectibles, {} to collect in {} seconds",
        config.collectibles.len(),
        game_state.total_targets,
        config.round_seconds
    );
}

pub fn setup_scene(mut commands: Commands, config: Res<GameConfig>, game_state: Res<GameState>) {
    spawn_scene(&mut commands, &config, &game_state);
}

// Restart: fresh round state and a full reload of the scene
pub fn restart_system(
    mut commands: Commands,
    mut restart_events: EventReader<RestartEvent>,
    mut game_state: ResMut<GameState>,
    config: Res<GameConfig>,
    scene_query: Query<Entity, With<SceneEntity>>,
) {
    if restart_events.read().count() == 0 {
        return;
    }

    info!("Restarting game");

    for entity in scene_query.iter() {
        commands.entity(entity).despawn_recursive();
    }

    game_state.reset(config.round_seconds, config.total_targets);
    spawn_scene(&mut commands, &config, &game_state);
}
