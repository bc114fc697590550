use crate::events::{GameOverEvent, GameOverReason};
use crate::resources::GameState;
use crate::systems::target::end_round;
use bevy::prelude::*;

pub fn game_timer_system(
    time: Res<Time>,
    mut game_state: ResMut<GameState>,
    mut game_over_events: EventWriter<GameOverEvent>,
) {
    if game_state.tick_timer(time.delta()) {
        end_round(&mut game_state, GameOverReason::TimeUp, &mut game_over_events);
    }
}
