// resources.rs
use crate::components::{Collectible, PaletteColor};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub const DEFAULT_ROUND_SECONDS: f32 = 35.0;
pub const DEFAULT_TOTAL_TARGETS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

// What a contact with a collectible did to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    // Colors matched: score went up and the collectible must be deactivated.
    Collected,
    // Wrong color: score went down (never below zero).
    Rejected,
    // The round is over, nothing changed.
    Ignored,
}

// Score, countdown and wanted color for the current round
#[derive(Resource, Debug)]
pub struct GameState {
    pub score: u32,
    pub total_targets: u32,
    pub target_color: Option<PaletteColor>,
    pub timer: Timer,
    pub timer_active: bool,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_SECONDS, DEFAULT_TOTAL_TARGETS)
    }
}

impl GameState {
    pub fn new(round_seconds: f32, total_targets: u32) -> Self {
        Self {
            score: 0,
            total_targets,
            target_color: None,
            timer: Timer::from_seconds(round_seconds, TimerMode::Once),
            timer_active: true,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn time_remaining(&self) -> f32 {
        self.timer.remaining_secs()
    }

    // Advances the countdown. Returns `true` when it has run out and the
    // round should end.
    pub fn tick_timer(&mut self, delta: Duration) -> bool {
        if !self.is_playing() || !self.timer_active {
            return false;
        }

        self.timer.tick(delta);
        self.timer.finished()
    }

    // Applies the scoring rule for touching a collectible of `color`.
    pub fn register_contact(&mut self, color: PaletteColor) -> ContactOutcome {
        if !self.is_playing() {
            return ContactOutcome::Ignored;
        }

        if self.target_color == Some(color) {
            self.score += 1;
            ContactOutcome::Collected
        } else {
            self.score = self.score.saturating_sub(1);
            ContactOutcome::Rejected
        }
    }

    pub fn all_targets_collected(&self) -> bool {
        self.score >= self.total_targets
    }

    // Picks a new target uniformly among `available`. Returns `None` (and
    // leaves the current target untouched) when nothing is available.
    pub fn choose_target<R: Rng + ?Sized>(
        &mut self,
        available: &[PaletteColor],
        rng: &mut R,
    ) -> Option<PaletteColor> {
        if available.is_empty() {
            return None;
        }

        let color = available[rng.random_range(0..available.len())];
        self.target_color = Some(color);
        Some(color)
    }

    // Moves to `GameOver` and stops the timer. Returns `false` if the round
    // had already ended.
    pub fn end_game(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }

        self.phase = GamePhase::GameOver;
        self.timer_active = false;
        true
    }

    pub fn reset(&mut self, round_seconds: f32, total_targets: u32) {
        *self = Self::new(round_seconds, total_targets);
    }
}

// Palette colors that at least one active collectible currently has, in
// palette order.
pub fn available_colors<'a>(
    collectibles: impl IntoIterator<Item = &'a Collectible>,
) -> Vec<PaletteColor> {
    let collectibles: Vec<&Collectible> = collectibles.into_iter().collect();

    PaletteColor::ALL
        .into_iter()
        .filter(|color| {
            collectibles
                .iter()
                .any(|collectible| collectible.active && collectible.color == *color)
        })
        .collect()
}

#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_with_target(color: PaletteColor) -> GameState {
        let mut state = GameState::default();
        state.target_color = Some(color);
        state
    }

    #[test]
    fn matches_count_up_to_total() {
        let mut state = playing_with_target(PaletteColor::Red);

        for n in 1..=12 {
            assert_eq!(
                state.register_contact(PaletteColor::Red),
                ContactOutcome::Collected
            );
            assert_eq!(state.score, n);
            assert_eq!(state.all_targets_collected(), n == 12);
        }
    }

    #[test]
    fn mismatch_never_goes_below_zero() {
        let mut state = playing_with_target(PaletteColor::Red);
        assert_eq!(
            state.register_contact(PaletteColor::Blue),
            ContactOutcome::Rejected
        );
        assert_eq!(state.score, 0);

        state.score = 3;
        state.register_contact(PaletteColor::Green);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn contact_without_target_is_a_mismatch() {
        let mut state = GameState::default();
        state.score = 1;
        assert_eq!(
            state.register_contact(PaletteColor::Red),
            ContactOutcome::Rejected
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn contacts_are_ignored_after_game_over() {
        let mut state = playing_with_target(PaletteColor::Red);
        state.score = 4;
        assert!(state.end_game());

        assert_eq!(
            state.register_contact(PaletteColor::Red),
            ContactOutcome::Ignored
        );
        assert_eq!(
            state.register_contact(PaletteColor::Blue),
            ContactOutcome::Ignored
        );
        assert_eq!(state.score, 4);
    }

    #[test]
    fn timer_counts_down_to_exactly_zero() {
        let mut state = GameState::default();
        let mut previous = state.time_remaining();
        assert_eq!(previous, 35.0);

        for second in 1..=35 {
            let expired = state.tick_timer(Duration::from_secs(1));
            let remaining = state.time_remaining();
            assert!(remaining < previous);
            assert_eq!(expired, second == 35);
            previous = remaining;
        }

        assert_eq!(state.time_remaining(), 0.0);
    }

    #[test]
    fn timer_clamps_overshoot_to_zero() {
        let mut state = GameState::default();
        assert!(state.tick_timer(Duration::from_secs_f32(50.0)));
        assert_eq!(state.time_remaining(), 0.0);
    }

    #[test]
    fn timer_stops_after_game_over() {
        let mut state = GameState::default();
        state.tick_timer(Duration::from_secs(5));
        state.end_game();

        assert!(!state.tick_timer(Duration::from_secs(100)));
        assert_eq!(state.time_remaining(), 30.0);
        assert!(!state.timer_active);
    }

    #[test]
    fn end_game_is_idempotent() {
        let mut state = GameState::default();
        assert!(state.end_game());
        assert!(!state.end_game());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn reset_restores_a_fresh_round() {
        let mut state = playing_with_target(PaletteColor::Green);
        state.score = 7;
        state.tick_timer(Duration::from_secs(20));
        state.end_game();

        state.reset(35.0, 12);

        assert_eq!(state.score, 0);
        assert_eq!(state.time_remaining(), 35.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.timer_active);
        assert_eq!(state.target_color, None);
    }

    #[test]
    fn available_colors_only_lists_active_collectibles() {
        let mut blue = Collectible::new(PaletteColor::Blue);
        blue.active = false;
        let collectibles = [
            Collectible::new(PaletteColor::Red),
            Collectible::new(PaletteColor::Red),
            blue,
            Collectible::new(PaletteColor::Green),
        ];

        assert_eq!(
            available_colors(&collectibles),
            vec![PaletteColor::Red, PaletteColor::Green]
        );
    }

    #[test]
    fn available_colors_empty_when_all_collected() {
        let mut red = Collectible::new(PaletteColor::Red);
        red.active = false;
        assert!(available_colors([&red]).is_empty());
        assert!(available_colors(&Vec::<Collectible>::new()).is_empty());
    }

    #[test]
    fn choose_target_only_picks_available_colors() {
        let mut state = GameState::default();
        let mut rng = GameRng::from_seed(Some(7));
        let available = [PaletteColor::Red, PaletteColor::Blue];

        for _ in 0..50 {
            let chosen = state.choose_target(&available, &mut rng.0).unwrap();
            assert!(available.contains(&chosen));
            assert_eq!(state.target_color, Some(chosen));
        }
    }

    #[test]
    fn choose_target_with_nothing_available_keeps_old_target() {
        let mut state = playing_with_target(PaletteColor::Red);
        let mut rng = GameRng::from_seed(Some(1));

        assert_eq!(state.choose_target(&[], &mut rng.0), None);
        assert_eq!(state.target_color, Some(PaletteColor::Red));
    }
}
