use bevy::prelude::*;

// Event that gets sent when the player starts overlapping a collectible
#[derive(Event, Debug, Clone, Copy)]
pub struct CollectibleContactEvent {
    pub collectible: Entity,
}

// Audio cue requested by the scoring rules
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub final_score: u32,
    pub reason: GameOverReason,
}

// Enum to track why the round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    TimeUp,        // Countdown reached zero
    AllCollected,  // Score reached the target count
    NoTargetsLeft, // No active collectible left to pick a target color from
}

// Request to reset the score and reload the scene
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartEvent;
