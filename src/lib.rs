// lib.rs
use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;

use config::GameConfig;
use events::*;
use resources::{GameRng, GameState};
use systems::collision::handle_collectible_contact;
use systems::hud::{show_game_over_system, update_hud_system};
use systems::movement::player_movement_system;
use systems::player::deactivate_player_on_game_over;
use systems::scene::{restart_system, setup_scene};
use systems::target::ensure_target_color_system;
use systems::timer::game_timer_system;

// Systems that apply the round rules, in order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSet;

pub struct GamePlugin {
    pub config: GameConfig,
    // Fixed seed for target color picks, random if `None`.
    pub seed: Option<u64>,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollectibleContactEvent>()
            .add_event::<SoundCue>()
            .add_event::<GameOverEvent>()
            .add_event::<RestartEvent>()
            .insert_resource(self.config.clone())
            .insert_resource(GameState::new(
                self.config.round_seconds,
                self.config.total_targets,
            ))
            .insert_resource(GameRng::from_seed(self.seed))
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    restart_system,
                    game_timer_system,
                    handle_collectible_contact,
                    ensure_target_color_system,
                    deactivate_player_on_game_over,
                    show_game_over_system,
                    update_hud_system,
                )
                    .chain()
                    .in_set(GameSet),
            )
            .add_systems(FixedUpdate, player_movement_system);
    }
}
