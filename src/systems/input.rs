use crate::components::{MoveInput, Player, RetryButton};
use crate::events::RestartEvent;
use crate::resources::GameState;
use bevy::prelude::*;

fn axis(
    keyboard_input: &ButtonInput<KeyCode>,
    positive: [KeyCode; 2],
    negative: [KeyCode; 2],
) -> f32 {
    let mut value = 0.0;
    if keyboard_input.any_pressed(positive) {
        value += 1.0;
    }
    if keyboard_input.any_pressed(negative) {
        value -= 1.0;
    }
    value
}

// Horizontal and vertical axes from WASD / arrow keys. Opposite keys cancel.
pub fn read_move_axes(keyboard_input: &ButtonInput<KeyCode>) -> Vec2 {
    Vec2::new(
        axis(
            keyboard_input,
            [KeyCode::KeyD, KeyCode::ArrowRight],
            [KeyCode::KeyA, KeyCode::ArrowLeft],
        ),
        axis(
            keyboard_input,
            [KeyCode::KeyW, KeyCode::ArrowUp],
            [KeyCode::KeyS, KeyCode::ArrowDown],
        ),
    )
}

pub fn player_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Player, &mut MoveInput)>,
) {
    let axes = read_move_axes(&keyboard_input);

    for (player, mut input) in query.iter_mut() {
        input.axis = if player.active { axes } else { Vec2::ZERO };
    }
}

// R restarts once the round is over
pub fn restart_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut restart_events: EventWriter<RestartEvent>,
) {
    if !game_state.is_playing() && keyboard_input.just_pressed(KeyCode::KeyR) {
        restart_events.send(RestartEvent);
    }
}

pub fn retry_button_system(
    buttons: Query<&Interaction, (Changed<Interaction>, With<RetryButton>)>,
    mut restart_events: EventWriter<RestartEvent>,
) {
    for interaction in buttons.iter() {
        if *interaction == Interaction::Pressed {
            restart_events.send(RestartEvent);
        }
    }
}
