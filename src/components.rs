// components.rs
use bevy::prelude::*;
use serde::Deserialize;

// The fixed set of colors a collectible can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
}

impl PaletteColor {
    // Scan order used when looking for an available target color.
    pub const ALL: [PaletteColor; 3] = [PaletteColor::Red, PaletteColor::Green, PaletteColor::Blue];

    pub fn render_color(self) -> Color {
        match self {
            PaletteColor::Red => Color::srgb(1.0, 0.0, 0.0),
            PaletteColor::Green => Color::srgb(0.0, 1.0, 0.0),
            PaletteColor::Blue => Color::srgb(0.0, 0.0, 1.0),
        }
    }
}

#[derive(Component, Debug)]
pub struct Player {
    pub speed: f32, // Speed in tiles per second
    pub active: bool,
}

// Two-axis directional input, each axis in [-1, 1].
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveInput {
    pub axis: Vec2,
}

#[derive(Component, Debug)]
pub struct Collectible {
    pub color: PaletteColor,
    pub active: bool,
}

impl Collectible {
    pub fn new(color: PaletteColor) -> Self {
        Self {
            color,
            active: true,
        }
    }
}

// Everything tagged with this is despawned and respawned on restart
#[derive(Component)]
pub struct SceneEntity;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct TimerText;

#[derive(Component)]
pub struct TargetColorSwatch;

#[derive(Component)]
pub struct GameOverText;

#[derive(Component)]
pub struct RetryButton;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_scan_order_is_red_green_blue() {
        assert_eq!(
            PaletteColor::ALL,
            [PaletteColor::Red, PaletteColor::Green, PaletteColor::Blue]
        );
    }

    #[test]
    fn palette_colors_are_pure_primaries() {
        assert_eq!(PaletteColor::Red.render_color(), Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(PaletteColor::Green.render_color(), Color::srgb(0.0, 1.0, 0.0));
        assert_eq!(PaletteColor::Blue.render_color(), Color::srgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn new_collectible_starts_active() {
        let collectible = Collectible::new(PaletteColor::Blue);
        assert!(collectible.active);
        assert_eq!(collectible.color, PaletteColor::Blue);
    }

    #[test]
    fn palette_color_parses_lowercase_names() {
        let color: PaletteColor = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(color, PaletteColor::Green);
    }
}
