use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use color_collect::config::GameConfig;
use color_collect::error::ConfigError;
use color_collect::systems::audio::{load_sound_assets, play_sound_cues};
use color_collect::systems::collision::detect_collectible_contacts;
use color_collect::systems::input::{
    player_input_system, restart_input_system, retry_button_system,
};
use color_collect::{GamePlugin, GameSet};

#[derive(Parser)]
#[command(version, about = "Collect the wanted color before time runs out.")]
struct Cli {
    /// JSON config file; built-in defaults are used without it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for target color picks, for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw collider outlines.
    #[arg(long)]
    debug_physics: bool,
}

fn main() -> Result<(), ConfigError> {
    let cli = Cli::parse();
    let config = GameConfig::load_or_default(cli.config.as_deref())?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.window_title.clone(),
            resolution: (config.window_width, config.window_height).into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(config.tile_size))
    .add_plugins(GamePlugin {
        config,
        seed: cli.seed,
    })
    .add_systems(Startup, (setup_camera, load_sound_assets))
    .add_systems(
        Update,
        (
            player_input_system,
            restart_input_system,
            retry_button_system,
            detect_collectible_contacts,
        )
            .before(GameSet),
    )
    .add_systems(Update, play_sound_cues.after(GameSet));

    if cli.debug_physics {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    if let Some(path) = &cli.config {
        info!("Loaded config from {:?}", path);
    }

    app.run();
    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
