use crate::config::GameConfig;
use crate::events::SoundCue;
use bevy::prelude::*;

#[derive(Resource)]
pub struct SoundAssets {
    pub correct: Handle<AudioSource>,
    pub wrong: Handle<AudioSource>,
}

pub fn load_sound_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    commands.insert_resource(SoundAssets {
        correct: asset_server.load(config.correct_sound.clone()),
        wrong: asset_server.load(config.wrong_sound.clone()),
    });
}

// One-shot playback per cue, the audio entity despawns itself when done
pub fn play_sound_cues(
    mut commands: Commands,
    mut sound_cues: EventReader<SoundCue>,
    sounds: Res<SoundAssets>,
) {
    for cue in sound_cues.read() {
        let clip = match cue {
            SoundCue::Correct => sounds.correct.clone(),
            SoundCue::Wrong => sounds.wrong.clone(),
        };

        commands.spawn((AudioPlayer::new(clip), PlaybackSettings::DESPAWN));
    }
}
