use crate::components::{MoveInput, Player};
use crate::events::GameOverEvent;
use bevy::prelude::*;
use bevy_rapier2d::prelude::{ColliderDisabled, RigidBodyDisabled};

// System that takes the player out of play when the round ends
pub fn deactivate_player_on_game_over(
    mut commands: Commands,
    mut game_over_events: EventReader<GameOverEvent>,
    mut player_query: Query<(Entity, &mut Player, &mut MoveInput)>,
) {
    if game_over_events.read().count() == 0 {
        return;
    }

    for (entity, mut player, mut input) in player_query.iter_mut() {
        if !player.active {
            continue;
        }

        player.active = false;
        input.axis = Vec2::ZERO;

        commands
            .entity(entity)
            .insert((Visibility::Hidden, ColliderDisabled, RigidBodyDisabled));

        info!("Player deactivated.");
    }
}
