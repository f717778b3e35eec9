pub mod end_screen;
pub mod hud;
pub mod menu;
