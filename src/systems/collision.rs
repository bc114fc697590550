use crate::components::{Collectible, Player};
use crate::events::{CollectibleContactEvent, GameOverEvent, GameOverReason, SoundCue};
use crate::resources::{ContactOutcome, GameRng, GameState};
use crate::systems::target::{end_round, pick_next_target};
use bevy::prelude::*;
use bevy_rapier2d::prelude::{ColliderDisabled, CollisionEvent};

// Turns rapier's collision events into player/collectible contacts
pub fn detect_collectible_contacts(
    mut collision_events: EventReader<CollisionEvent>,
    players: Query<Entity, With<Player>>,
    collectibles: Query<Entity, With<Collectible>>,
    mut contact_events: EventWriter<CollectibleContactEvent>,
) {
    for collision in collision_events.read() {
        // Only the start of an overlap counts
        let &CollisionEvent::Started(a, b, _) = collision else {
            continue;
        };

        let collectible = if players.contains(a) && collectibles.contains(b) {
            b
        } else if players.contains(b) && collectibles.contains(a) {
            a
        } else {
            continue;
        };

        contact_events.send(CollectibleContactEvent { collectible });
    }
}

pub fn handle_collectible_contact(
    mut commands: Commands,
    mut contact_events: EventReader<CollectibleContactEvent>,
    mut game_state: ResMut<GameState>,
    mut rng: ResMut<GameRng>,
    mut collectibles: Query<&mut Collectible>,
    mut sound_cues: EventWriter<SoundCue>,
    mut game_over_events: EventWriter<GameOverEvent>,
) {
    for contact in contact_events.read() {
        let outcome = {
            let Ok(mut collectible) = collectibles.get_mut(contact.collectible) else {
                continue;
            };

            // Already collected, rapier can still report it in the same step
            if !collectible.active {
                continue;
            }

            let outcome = game_state.register_contact(collectible.color);
            if outcome == ContactOutcome::Collected {
                collectible.active = false;
            }
            outcome
        };

        match outcome {
            ContactOutcome::Collected => {
                sound_cues.send(SoundCue::Correct);
                commands
                    .entity(contact.collectible)
                    .insert((Visibility::Hidden, ColliderDisabled));

                if game_state.all_targets_collected() {
                    end_round(
                        &mut game_state,
                        GameOverReason::AllCollected,
                        &mut game_over_events,
                    );
                } else {
                    pick_next_target(
                        &mut game_state,
                        &mut rng,
                        collectibles.iter(),
                        &mut game_over_events,
                    );
                }
            }
            ContactOutcome::Rejected => {
                debug!("Incorrect color collected!");
                sound_cues.send(SoundCue::Wrong);
            }
            ContactOutcome::Ignored => {}
        }
    }
}
