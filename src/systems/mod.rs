pub mod audio;
pub mod collision;
pub mod hud;
pub mod input;
pub mod movement;
pub mod player;
pub mod scene;
pub mod target;
pub mod timer;
