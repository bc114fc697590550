use crate::components::Collectible;
use crate::events::{GameOverEvent, GameOverReason};
use crate::resources::{available_colors, GameRng, GameState};
use bevy::prelude::*;

// Ends the round once; later calls are no-ops.
pub fn end_round(
    game_state: &mut GameState,
    reason: GameOverReason,
    game_over_events: &mut EventWriter<GameOverEvent>,
) {
    if game_state.end_game() {
        info!(
            "Game over ({:?}). Final score: {}",
            reason, game_state.score
        );
        game_over_events.send(GameOverEvent {
            final_score: game_state.score,
            reason,
        });
    }
}

// Picks a new target among the colors still on the field, or ends the round
// if nothing is left to collect.
pub fn pick_next_target<'a>(
    game_state: &mut GameState,
    rng: &mut GameRng,
    collectibles: impl IntoIterator<Item = &'a Collectible>,
    game_over_events: &mut EventWriter<GameOverEvent>,
) {
    let available = available_colors(collectibles);

    match game_state.choose_target(&available, &mut rng.0) {
        Some(color) => info!("New target color: {:?}", color),
        None => {
            warn!("No collectibles left to target.");
            end_round(game_state, GameOverReason::NoTargetsLeft, game_over_events);
        }
    }
}

// Chooses the first target of a freshly loaded scene
pub fn ensure_target_color_system(
    mut game_state: ResMut<GameState>,
    mut rng: ResMut<GameRng>,
    collectibles: Query<&Collectible>,
    mut game_over_events: EventWriter<GameOverEvent>,
) {
    if !game_state.is_playing() || game_state.target_color.is_some() {
        return;
    }

    pick_next_target(
        &mut game_state,
        &mut rng,
        collectibles.iter(),
        &mut game_over_events,
    );
}
