use crate::components::{
    GameOverText, RetryButton, SceneEntity, ScoreText, TargetColorSwatch, TimerText,
};
use crate::events::GameOverEvent;
use crate::resources::GameState;
use bevy::prelude::*;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

// Whole seconds, rounded up so the display only reads 0 once time is out.
pub fn timer_label(time_remaining: f32) -> String {
    format!("Time Left: {} Seconds", time_remaining.ceil() as u32)
}

pub fn game_over_label(final_score: u32) -> String {
    format!("Game Over! Final Score: {}", final_score)
}

pub fn spawn_hud(commands: &mut Commands, game_state: &GameState) {
    commands.spawn((
        Text::new(score_label(game_state.score)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
        SceneEntity,
    ));

    commands.spawn((
        Text::new(timer_label(game_state.time_remaining())),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
        TimerText,
        SceneEntity,
    ));

    // Swatch showing which color to collect
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Percent(50.0),
            width: Val::Px(40.0),
            height: Val::Px(40.0),
            margin: UiRect::left(Val::Px(-20.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(Color::NONE),
        BorderColor(Color::WHITE),
        TargetColorSwatch,
        SceneEntity,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(35.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        Visibility::Hidden,
        GameOverText,
        SceneEntity,
    ));

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(55.0),
                left: Val::Percent(50.0),
                width: Val::Px(160.0),
                height: Val::Px(50.0),
                margin: UiRect::left(Val::Px(-80.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.2, 0.2, 0.2)),
            Visibility::Hidden,
            RetryButton,
            SceneEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Retry"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn update_hud_system(
    game_state: Res<GameState>,
    mut score_text: Query<&mut Text, (With<ScoreText>, Without<TimerText>)>,
    mut timer_text: Query<&mut Text, (With<TimerText>, Without<ScoreText>)>,
    mut swatch: Query<&mut BackgroundColor, With<TargetColorSwatch>>,
) {
    for mut text in score_text.iter_mut() {
        text.0 = score_label(game_state.score);
    }

    for mut text in timer_text.iter_mut() {
        text.0 = timer_label(game_state.time_remaining());
    }

    if let Some(color) = game_state.target_color {
        for mut background in swatch.iter_mut() {
            background.0 = color.render_color();
        }
    }
}

pub fn show_game_over_system(
    mut game_over_events: EventReader<GameOverEvent>,
    mut message: Query<(&mut Text, &mut Visibility), With<GameOverText>>,
    mut retry_button: Query<&mut Visibility, (With<RetryButton>, Without<GameOverText>)>,
) {
    let Some(event) = game_over_events.read().last() else {
        return;
    };

    for (mut text, mut visibility) in message.iter_mut() {
        text.0 = game_over_label(event.final_score);
        *visibility = Visibility::Visible;
    }

    for mut visibility in retry_button.iter_mut() {
        *visibility = Visibility::Visible;
    }
}
